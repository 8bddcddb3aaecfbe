//! The resource manager: settings, router, and registry in one place.
//!
//! [`ResourceManager::new`] validates its settings, merges the verb
//! conventions, and walks the configured route tree right away. Further
//! trees can be added with [`ResourceManager::add_routes`]; every pass starts
//! from the same root context and appends to the same registry.

use std::fmt;
use std::path::Path;

use parsind_core::logging::parse_span;
use parsind_core::{ParsindResult, RouteNode, Settings};
use parsind_http::Router;
use tracing::info;

use crate::binder::ResourceBinder;
use crate::context::ParentContext;
use crate::controller::{ControllerLoader, ControllerResolver};
use crate::conventions::ConventionTable;
use crate::naming::{FileCaseNaming, NamingAdapter};
use crate::parser::RouteTreeParser;
use crate::registry::{BoundRoute, MissingRoute, PrettyRoute, RouteRegistry};

/// Binds a route configuration tree onto a router.
///
/// # Examples
///
/// ```
/// use parsind_core::{RouteNode, Settings};
/// use parsind_http::{handler, HttpResponse, RouteTable};
/// use parsind_resources::{Controller, ControllerRegistry, ResourceManager};
///
/// let index = Controller::new()
///     .with_method("welcome", handler(|_req| async { HttpResponse::ok("Welcome!") }));
/// let loader = ControllerRegistry::new("controllers").with("indexController", index);
///
/// let settings = Settings::new("controllers")
///     .routes(RouteNode::map([("GET /", RouteNode::from("indexController#welcome"))]));
/// let manager = ResourceManager::new(settings, RouteTable::new(), loader).unwrap();
///
/// assert_eq!(manager.bound_routes().len(), 1);
/// assert_eq!(manager.pretty_bound_routes()[0].route, "GET /");
/// assert_eq!(manager.pretty_bound_routes()[0].handler, "indexController#welcome");
/// ```
pub struct ResourceManager<R> {
    settings: Settings,
    conventions: ConventionTable,
    naming: Box<dyn NamingAdapter>,
    loader: Box<dyn ControllerLoader>,
    router: R,
    registry: RouteRegistry,
    root: ParentContext,
}

impl<R> fmt::Debug for ResourceManager<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceManager")
            .field("settings", &self.settings)
            .field("conventions", &self.conventions)
            .field("bound", &self.registry.bound().len())
            .field("missing", &self.registry.missing().len())
            .finish_non_exhaustive()
    }
}

impl<R: Router> ResourceManager<R> {
    /// Creates a manager and binds `settings.routes`.
    ///
    /// Controller file names follow `settings.controllers_case`.
    pub fn new(
        settings: Settings,
        router: R,
        loader: impl ControllerLoader + 'static,
    ) -> ParsindResult<Self> {
        let naming = FileCaseNaming::new(settings.controllers_case);
        Self::with_naming(settings, router, loader, naming)
    }

    /// Creates a manager with a custom [`NamingAdapter`] and binds
    /// `settings.routes`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `controllers_dir` is empty or a
    /// convention override names an unknown verb, and a resolution error when
    /// a controller referenced by the tree cannot be loaded.
    pub fn with_naming(
        settings: Settings,
        router: R,
        loader: impl ControllerLoader + 'static,
        naming: impl NamingAdapter + 'static,
    ) -> ParsindResult<Self> {
        settings.validate()?;
        let conventions = ConventionTable::from_overrides(&settings.controller_methods)?;
        let root = ParentContext::root(&settings.base_route, &settings.controllers_dir);
        let routes = settings.routes.clone();

        let mut manager = Self {
            settings,
            conventions,
            naming: Box::new(naming),
            loader: Box::new(loader),
            router,
            registry: RouteRegistry::new(),
            root,
        };
        manager.parse_pass(&routes)?;
        Ok(manager)
    }

    /// Binds another route tree from the root context.
    ///
    /// Additive: binding the same tree twice registers its routes twice.
    pub fn add_routes(&mut self, routes: impl Into<RouteNode>) -> ParsindResult<()> {
        self.parse_pass(&routes.into())
    }

    fn parse_pass(&mut self, routes: &RouteNode) -> ParsindResult<()> {
        let span = parse_span(&self.settings.base_route);
        let _guard = span.enter();

        let bound_before = self.registry.bound().len();
        let missing_before = self.registry.missing().len();

        let resolver = ControllerResolver::new(
            self.loader.as_ref(),
            self.naming.as_ref(),
            &self.settings.controllers_suffix,
        );
        let binder = ResourceBinder::new(
            resolver,
            &self.conventions,
            &mut self.router,
            &mut self.registry,
        );
        let result =
            RouteTreeParser::new(binder).parse(&self.root, &self.settings.base_route, routes);

        info!(
            bound = self.registry.bound().len() - bound_before,
            missing = self.registry.missing().len() - missing_before,
            ok = result.is_ok(),
            "parsed route tree"
        );
        result
    }
}

impl<R> ResourceManager<R> {
    /// Every bound route, in binding order.
    pub fn bound_routes(&self) -> &[BoundRoute] {
        self.registry.bound()
    }

    /// Every missing handler, in binding order.
    pub fn missing_handlers(&self) -> &[MissingRoute] {
        self.registry.missing()
    }

    /// Bound routes as `{ route: "VERB path", handler: "controller#method" }`,
    /// with controller paths relative to the controllers directory.
    pub fn pretty_bound_routes(&self) -> Vec<PrettyRoute> {
        self.registry.pretty_bound(self.controllers_dir())
    }

    /// Missing handlers in the same form as
    /// [`pretty_bound_routes`](Self::pretty_bound_routes).
    pub fn pretty_missing_handlers(&self) -> Vec<PrettyRoute> {
        self.registry.pretty_missing(self.controllers_dir())
    }

    /// The registry holding both lists.
    pub const fn registry(&self) -> &RouteRegistry {
        &self.registry
    }

    /// The settings the manager was built with.
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The merged verb conventions.
    pub const fn conventions(&self) -> &ConventionTable {
        &self.conventions
    }

    /// The router receiving registrations.
    pub const fn router(&self) -> &R {
        &self.router
    }

    /// Mutable access to the router.
    pub fn router_mut(&mut self) -> &mut R {
        &mut self.router
    }

    /// Consumes the manager, returning the router.
    pub fn into_router(self) -> R {
        self.router
    }

    fn controllers_dir(&self) -> &Path {
        &self.settings.controllers_dir
    }
}
