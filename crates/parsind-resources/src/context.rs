//! The context handed down while walking a route tree.

use std::path::{Path, PathBuf};

use crate::controller::ResolvedController;

/// Where the parser currently is in the route tree.
///
/// The root context sits at the base route and the controllers directory.
/// Each bound resource produces a child context: nested resources are
/// appended to its item route and their controllers are looked up in a
/// directory named after it.
#[derive(Debug, Clone)]
pub struct ParentContext {
    /// The collection route so far (`/books`).
    pub entry_route: String,
    /// The item route so far (`/books/:book_id`).
    pub item_route: String,
    /// Directory holding the controllers of nested resources.
    pub controller_dir: PathBuf,
    /// Directory holding this level's own controller.
    pub parent_controller_dir: PathBuf,
    /// The resource at this level. `None` at the root.
    pub resource_name: Option<String>,
    /// The controller resolved for this level's resource.
    pub controller: Option<ResolvedController>,
}

impl ParentContext {
    /// Creates the root context.
    ///
    /// # Examples
    ///
    /// ```
    /// use parsind_resources::ParentContext;
    ///
    /// let root = ParentContext::root("/", "controllers");
    /// assert_eq!(root.entry_route, "/");
    /// assert_eq!(root.item_route, "/");
    /// assert!(root.is_root());
    /// ```
    pub fn root(base_route: &str, controllers_dir: impl AsRef<Path>) -> Self {
        let dir = controllers_dir.as_ref().to_path_buf();
        Self {
            entry_route: base_route.to_string(),
            item_route: base_route.to_string(),
            controller_dir: dir.clone(),
            parent_controller_dir: dir,
            resource_name: None,
            controller: None,
        }
    }

    /// Returns `true` for the root context.
    pub const fn is_root(&self) -> bool {
        self.resource_name.is_none()
    }
}
