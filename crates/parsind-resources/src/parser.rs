//! Recursive descent over the route configuration tree.
//!
//! The tree shapes are interpreted as follows:
//!
//! - In a mapping, an entry whose value is a string is a special route
//!   (`"GET /foo": "getFoo"`). Any other entry names a resource; it is bound
//!   and its value is walked with the resource as the new parent.
//! - In a list, a string names a resource bound under the current parent,
//!   and a mapping is walked with the current parent, so its keys are
//!   siblings of the list's strings.
//! - Anything else is skipped.
//!
//! Bindings are emitted depth first, left to right.

use parsind_core::{ParsindResult, RouteNode};
use parsind_http::Router;
use tracing::trace;

use crate::binder::ResourceBinder;
use crate::context::ParentContext;

/// Walks a [`RouteNode`] tree, driving a [`ResourceBinder`].
pub struct RouteTreeParser<'a, R: ?Sized> {
    binder: ResourceBinder<'a, R>,
}

impl<'a, R: Router + ?Sized> RouteTreeParser<'a, R> {
    /// Creates a parser around `binder`.
    pub fn new(binder: ResourceBinder<'a, R>) -> Self {
        Self { binder }
    }

    /// Returns the binder, e.g. to inspect its registry after a pass.
    pub fn into_binder(self) -> ResourceBinder<'a, R> {
        self.binder
    }

    /// Walks `node`, which belongs to `node_name` in context `parent`.
    ///
    /// Stops at the first controller that cannot be resolved; routes bound
    /// before that point stay registered.
    pub fn parse(
        &mut self,
        parent: &ParentContext,
        node_name: &str,
        node: &RouteNode,
    ) -> ParsindResult<()> {
        match node {
            RouteNode::Map(entries) => {
                for (key, value) in entries {
                    if let RouteNode::Resource(handler_spec) = value {
                        self.binder.bind_special(parent, key, handler_spec)?;
                    } else {
                        let child = self.binder.bind_resource(parent, key)?;
                        self.parse(&child, key, value)?;
                    }
                }
            }
            RouteNode::List(items) => {
                for item in items {
                    match item {
                        RouteNode::Map(_) => self.parse(parent, node_name, item)?,
                        RouteNode::Resource(name) => {
                            self.binder.bind_resource(parent, name)?;
                        }
                        RouteNode::List(_) | RouteNode::Ignored => {
                            trace!(node = node_name, item = %item, "skipping list item");
                        }
                    }
                }
            }
            RouteNode::Resource(_) | RouteNode::Ignored => {
                trace!(node = node_name, value = %node, "skipping route node");
            }
        }
        Ok(())
    }
}
