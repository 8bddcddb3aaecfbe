//! Binding resources and special routes.
//!
//! [`ResourceBinder`] turns one resource name, or one special route entry,
//! into binding attempts against the router. Each attempt either registers
//! the controller method on the router and records a bound route, or records
//! a missing handler when the controller does not have the method.

use parsind_core::{ParsindError, ParsindResult};
use parsind_http::{join_url, HttpVerb, Router};
use tracing::debug;

use crate::context::ParentContext;
use crate::controller::{ControllerResolver, ResolvedController};
use crate::conventions::ConventionTable;
use crate::registry::{RouteRecord, RouteRegistry};

/// The result of a single binding attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindOutcome {
    /// The method exists and was registered on the router.
    Bound,
    /// The method is absent; the attempt was recorded as a missing handler.
    Missing,
}

/// Binds resources and special routes for one pass over a route tree.
pub struct ResourceBinder<'a, R: ?Sized> {
    resolver: ControllerResolver<'a>,
    conventions: &'a ConventionTable,
    router: &'a mut R,
    registry: &'a mut RouteRegistry,
}

impl<'a, R: Router + ?Sized> ResourceBinder<'a, R> {
    /// Creates a binder writing to `router` and `registry`.
    pub fn new(
        resolver: ControllerResolver<'a>,
        conventions: &'a ConventionTable,
        router: &'a mut R,
        registry: &'a mut RouteRegistry,
    ) -> Self {
        Self {
            resolver,
            conventions,
            router,
            registry,
        }
    }

    /// Returns the registry being written to.
    pub fn registry(&self) -> &RouteRegistry {
        &*self.registry
    }

    /// Binds the conventional routes of `name` under `parent`.
    ///
    /// The controller `<name>_<suffix>` is looked up in the parent's
    /// controller directory. The collection route is `<parent item>/<name>`
    /// and the item route appends `:<singular>_id`. Returns the context for
    /// resources nested under this one.
    pub fn bind_resource(
        &mut self,
        parent: &ParentContext,
        name: &str,
    ) -> ParsindResult<ParentContext> {
        let singular = self.resolver.naming().singularize(name);
        let controller = self.resolver.resolve(&parent.controller_dir, name, true)?;
        let entry_route = join_url(&parent.item_route, name);
        let item_route = join_url(&entry_route, &format!(":{singular}_id"));

        let conventions = self.conventions;
        for (verb, method) in conventions.collection() {
            self.try_bind(*verb, &entry_route, &controller, method);
        }
        for (verb, method) in conventions.item() {
            self.try_bind(*verb, &item_route, &controller, method);
        }

        Ok(ParentContext {
            entry_route,
            item_route,
            controller_dir: parent.controller_dir.join(name),
            parent_controller_dir: parent.controller_dir.clone(),
            resource_name: Some(name.to_string()),
            controller: Some(controller),
        })
    }

    /// Binds a special route: `"[VERB ]path"` → `"[controller#]method"`.
    ///
    /// The verb defaults to GET and the path is appended to the parent's
    /// collection route. An explicit controller is looked up as named, with
    /// no suffix; otherwise the parent resource's own controller is used.
    ///
    /// # Errors
    ///
    /// Fails with a configuration error for an unknown verb, and with a
    /// resolution error when the controller cannot be loaded or when a route
    /// at the root names no controller.
    pub fn bind_special(
        &mut self,
        parent: &ParentContext,
        route_key: &str,
        handler_spec: &str,
    ) -> ParsindResult<BindOutcome> {
        let tokens: Vec<&str> = route_key.split_whitespace().collect();
        let (verb, path_token) = match tokens.as_slice() {
            [] => (HttpVerb::Get, ""),
            [path] => (HttpVerb::Get, *path),
            [verb, .., path] => (verb.parse::<HttpVerb>()?, *path),
        };
        let path = join_url(&parent.entry_route, path_token);

        let method = handler_spec.rsplit('#').next().unwrap_or(handler_spec);
        let controller = match handler_spec.split_once('#') {
            Some((controller_name, _)) => {
                self.resolver
                    .resolve(&parent.parent_controller_dir, controller_name, false)?
            }
            None => {
                let Some(resource) = parent.resource_name.as_deref() else {
                    return Err(ParsindError::unresolved(
                        &parent.parent_controller_dir,
                        format!(
                            "special route '{route_key}' has no enclosing resource; \
                             name its controller as 'controller#{method}'"
                        ),
                    ));
                };
                self.resolver
                    .resolve(&parent.parent_controller_dir, resource, true)?
            }
        };

        Ok(self.try_bind(verb, &path, &controller, method))
    }

    /// Registers `controller.method` for `verb path` if the method exists,
    /// recording the attempt either way.
    pub fn try_bind(
        &mut self,
        verb: HttpVerb,
        path: &str,
        controller: &ResolvedController,
        method: &str,
    ) -> BindOutcome {
        let record = RouteRecord {
            verb,
            path: path.to_string(),
            controller: controller.clone(),
            method: method.to_string(),
        };

        match controller.handler(method) {
            Some(handler) => {
                self.router.register(verb, path, handler);
                debug!(
                    %verb,
                    path,
                    controller = %controller.identity().display(),
                    method,
                    "bound route"
                );
                self.registry.record_bound(record);
                BindOutcome::Bound
            }
            None => {
                debug!(
                    %verb,
                    path,
                    controller = %controller.identity().display(),
                    method,
                    "missing handler"
                );
                self.registry.record_missing(record);
                BindOutcome::Missing
            }
        }
    }
}
