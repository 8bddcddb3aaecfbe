//! Controllers and controller resolution.
//!
//! A [`Controller`] is a table of named handlers. Controllers are found by
//! path: the resolver computes `<dir>/<file-cased name>` and asks a
//! [`ControllerLoader`] for the table stored there. A loader that cannot find
//! a controller at all fails with a [`ParsindError::ResolutionError`]; a
//! controller that exists but lacks a method is not an error.
//!
//! [`ControllerRegistry`] is the stock loader: controllers are registered up
//! front under paths relative to the controllers directory.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;
use parsind_core::{ParsindError, ParsindResult};
use parsind_http::Handler;

use crate::naming::NamingAdapter;

/// A table of controller methods keyed by name.
///
/// # Examples
///
/// ```
/// use parsind_http::{handler, HttpResponse};
/// use parsind_resources::Controller;
///
/// let books = Controller::new()
///     .with_method("index", handler(|_req| async { HttpResponse::ok("Books!") }));
///
/// assert!(books.contains("index"));
/// assert!(!books.contains("destroy"));
/// ```
#[derive(Clone, Default)]
pub struct Controller {
    methods: IndexMap<String, Handler>,
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("methods", &self.methods.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Controller {
    /// Creates a controller with no methods.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a method, returning the controller.
    #[must_use]
    pub fn with_method(mut self, name: impl Into<String>, handler: Handler) -> Self {
        self.insert(name, handler);
        self
    }

    /// Adds or replaces a method.
    pub fn insert(&mut self, name: impl Into<String>, handler: Handler) {
        self.methods.insert(name.into(), handler);
    }

    /// Returns the handler registered under `name`.
    pub fn get(&self, name: &str) -> Option<&Handler> {
        self.methods.get(name)
    }

    /// Returns `true` if a method named `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Returns the method names in insertion order.
    pub fn method_names(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }

    /// Returns the number of methods.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Returns `true` if the controller has no methods.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Handler)> for Controller {
    fn from_iter<I: IntoIterator<Item = (K, Handler)>>(iter: I) -> Self {
        Self {
            methods: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// A controller together with the path it was resolved from.
///
/// The identity is only used for diagnostics and prettified route listings.
#[derive(Debug, Clone)]
pub struct ResolvedController {
    table: Arc<Controller>,
    identity: PathBuf,
}

impl ResolvedController {
    /// Pairs a controller with its resolved path.
    pub fn new(table: Arc<Controller>, identity: impl Into<PathBuf>) -> Self {
        Self {
            table,
            identity: identity.into(),
        }
    }

    /// Returns the resolved path (`<controllers_dir>/books/tagsController`).
    pub fn identity(&self) -> &Path {
        &self.identity
    }

    /// Returns the handler table.
    pub fn controller(&self) -> &Controller {
        &self.table
    }

    /// Returns a clone of the handler for `method`, if present.
    pub fn handler(&self, method: &str) -> Option<Handler> {
        self.table.get(method).cloned()
    }
}

/// Loads controllers by resolved path.
pub trait ControllerLoader: Send + Sync {
    /// Returns the controller stored at `path`.
    ///
    /// Fails with [`ParsindError::ResolutionError`] when nothing is there.
    fn load(&self, path: &Path) -> ParsindResult<Arc<Controller>>;
}

impl<L: ControllerLoader + ?Sized> ControllerLoader for &L {
    fn load(&self, path: &Path) -> ParsindResult<Arc<Controller>> {
        (**self).load(path)
    }
}

impl<L: ControllerLoader + ?Sized> ControllerLoader for Box<L> {
    fn load(&self, path: &Path) -> ParsindResult<Arc<Controller>> {
        (**self).load(path)
    }
}

impl<L: ControllerLoader + ?Sized> ControllerLoader for Arc<L> {
    fn load(&self, path: &Path) -> ParsindResult<Arc<Controller>> {
        (**self).load(path)
    }
}

/// An in-memory [`ControllerLoader`].
///
/// Controllers are registered under names relative to the root directory,
/// using the same spelling the resolver will produce:
///
/// ```
/// use parsind_resources::{Controller, ControllerLoader, ControllerRegistry};
///
/// let registry = ControllerRegistry::new("controllers")
///     .with("booksController", Controller::new())
///     .with("books/tagsController", Controller::new());
///
/// assert!(registry.load("controllers/books/tagsController".as_ref()).is_ok());
/// assert!(registry.load("controllers/authorsController".as_ref()).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ControllerRegistry {
    root: PathBuf,
    controllers: HashMap<PathBuf, Arc<Controller>>,
}

impl ControllerRegistry {
    /// Creates an empty registry rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            controllers: HashMap::new(),
        }
    }

    /// Returns the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Registers a controller under `name`, relative to the root.
    pub fn register(&mut self, name: impl AsRef<Path>, controller: Controller) {
        let path = self.root.join(name);
        tracing::trace!(path = %path.display(), "registered controller");
        self.controllers.insert(path, Arc::new(controller));
    }

    /// Registers a controller, returning the registry.
    #[must_use]
    pub fn with(mut self, name: impl AsRef<Path>, controller: Controller) -> Self {
        self.register(name, controller);
        self
    }

    /// Returns the number of registered controllers.
    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    /// Returns `true` if no controller has been registered.
    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}

impl ControllerLoader for ControllerRegistry {
    fn load(&self, path: &Path) -> ParsindResult<Arc<Controller>> {
        self.controllers
            .get(path)
            .cloned()
            .ok_or_else(|| ParsindError::unresolved(path, "no controller registered at this path"))
    }
}

/// Resolves controller names to [`ResolvedController`]s.
///
/// Applies the configured suffix and file case before handing the path to
/// the loader.
#[derive(Clone, Copy)]
pub struct ControllerResolver<'a> {
    loader: &'a dyn ControllerLoader,
    naming: &'a dyn NamingAdapter,
    suffix: &'a str,
}

impl fmt::Debug for ControllerResolver<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControllerResolver")
            .field("suffix", &self.suffix)
            .finish_non_exhaustive()
    }
}

impl<'a> ControllerResolver<'a> {
    /// Creates a resolver. An empty `suffix` disables suffixing.
    pub const fn new(
        loader: &'a dyn ControllerLoader,
        naming: &'a dyn NamingAdapter,
        suffix: &'a str,
    ) -> Self {
        Self {
            loader,
            naming,
            suffix,
        }
    }

    /// Returns the naming adapter.
    pub const fn naming(&self) -> &'a dyn NamingAdapter {
        self.naming
    }

    /// Computes the path of controller `name` in `dir`.
    ///
    /// With `with_suffix`, `<name>_<suffix>` is file-cased; otherwise `name`
    /// is file-cased as given.
    pub fn controller_path(&self, dir: &Path, name: &str, with_suffix: bool) -> PathBuf {
        let full_name = if with_suffix && !self.suffix.is_empty() {
            format!("{name}_{}", self.suffix)
        } else {
            name.to_string()
        };
        dir.join(self.naming.to_file_case(&full_name))
    }

    /// Resolves controller `name` in `dir`.
    pub fn resolve(
        &self,
        dir: &Path,
        name: &str,
        with_suffix: bool,
    ) -> ParsindResult<ResolvedController> {
        let path = self.controller_path(dir, name, with_suffix);
        let table = self.loader.load(&path)?;
        Ok(ResolvedController::new(table, path))
    }
}
