//! Controller file naming and resource singularization.

use parsind_core::utils::text::{singularize, to_file_case};
use parsind_core::FileCase;

/// Turns resource names into controller file names and identifier names.
///
/// The default implementation is [`FileCaseNaming`]; swap in another one when
/// controllers follow a convention the built-in cases do not cover.
pub trait NamingAdapter: Send + Sync {
    /// Converts a controller name (`foo_bar_controller`) to its file name.
    fn to_file_case(&self, name: &str) -> String;

    /// Returns the singular form of a resource name (`books` → `book`).
    fn singularize(&self, name: &str) -> String;
}

/// Naming based on one of the built-in [`FileCase`] conventions.
///
/// # Examples
///
/// ```
/// use parsind_core::FileCase;
/// use parsind_resources::naming::{FileCaseNaming, NamingAdapter};
///
/// let naming = FileCaseNaming::new(FileCase::Pascal);
/// assert_eq!(naming.to_file_case("foo_bar_controller"), "FooBarController");
/// assert_eq!(naming.singularize("categories"), "category");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileCaseNaming {
    case: FileCase,
}

impl FileCaseNaming {
    /// Creates a naming adapter for the given case.
    pub const fn new(case: FileCase) -> Self {
        Self { case }
    }

    /// Returns the configured case.
    pub const fn case(&self) -> FileCase {
        self.case
    }
}

impl NamingAdapter for FileCaseNaming {
    fn to_file_case(&self, name: &str) -> String {
        to_file_case(name, self.case)
    }

    fn singularize(&self, name: &str) -> String {
        singularize(name)
    }
}
