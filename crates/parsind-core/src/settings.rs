//! Settings for a resource manager.
//!
//! [`Settings`] holds everything needed to turn a route tree into bound
//! routes: where controllers live, how their file names are spelled, which
//! controller methods the HTTP verbs map to, and the tree itself.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ParsindError, ParsindResult};
use crate::routes::RouteNode;
use crate::utils::text::FileCase;

/// User overrides of the verb → controller method conventions.
///
/// Each group that is present replaces the corresponding default group as a
/// whole. A group that is absent keeps its defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerMethods {
    /// Handlers for the collection route (`/resource`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entrance: Option<IndexMap<String, String>>,
    /// Handlers for the item route (`/resource/:resource_id`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<IndexMap<String, String>>,
}

/// The complete set of resource manager settings.
///
/// # Examples
///
/// ```
/// use parsind_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert_eq!(settings.base_route, "/");
/// assert_eq!(settings.controllers_suffix, "controller");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // ── Routing ──────────────────────────────────────────────────────

    /// The route every resource is nested under.
    pub base_route: String,
    /// The route configuration tree.
    pub routes: RouteNode,

    // ── Controllers ──────────────────────────────────────────────────

    /// Root directory of the controllers. Required.
    pub controllers_dir: PathBuf,
    /// The casing of controller file names.
    pub controllers_case: FileCase,
    /// Suffix appended to resource names to form controller names. Empty
    /// disables suffixing.
    pub controllers_suffix: String,
    /// Overrides of the default verb → method conventions.
    pub controller_methods: ControllerMethods,

    // ── Logging ──────────────────────────────────────────────────────

    /// Whether debug mode is enabled.
    pub debug: bool,
    /// The log level (e.g. "info", "debug", "warn").
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_route: "/".to_string(),
            routes: RouteNode::default(),
            controllers_dir: PathBuf::new(),
            controllers_case: FileCase::default(),
            controllers_suffix: "controller".to_string(),
            controller_methods: ControllerMethods::default(),
            debug: true,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Creates settings with defaults and the given controllers directory.
    pub fn new(controllers_dir: impl Into<PathBuf>) -> Self {
        Self {
            controllers_dir: controllers_dir.into(),
            ..Self::default()
        }
    }

    /// Sets the route tree.
    #[must_use]
    pub fn routes(mut self, routes: impl Into<RouteNode>) -> Self {
        self.routes = routes.into();
        self
    }

    /// Sets the base route.
    #[must_use]
    pub fn base_route(mut self, base_route: impl Into<String>) -> Self {
        self.base_route = base_route.into();
        self
    }

    /// Sets the controller file case.
    #[must_use]
    pub fn controllers_case(mut self, case: FileCase) -> Self {
        self.controllers_case = case;
        self
    }

    /// Sets the controller suffix.
    #[must_use]
    pub fn controllers_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.controllers_suffix = suffix.into();
        self
    }

    /// Sets the verb → method overrides.
    #[must_use]
    pub fn controller_methods(mut self, methods: ControllerMethods) -> Self {
        self.controller_methods = methods;
        self
    }

    /// Returns `true` if a controller suffix is configured.
    pub fn has_suffix(&self) -> bool {
        !self.controllers_suffix.is_empty()
    }

    /// Checks settings that cannot be expressed through their types.
    pub fn validate(&self) -> ParsindResult<()> {
        if self.controllers_dir.as_os_str().is_empty() {
            return Err(ParsindError::ConfigurationError(
                "controllers_dir is required".to_string(),
            ));
        }
        Ok(())
    }
}
