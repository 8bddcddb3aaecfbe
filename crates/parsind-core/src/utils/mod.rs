//! Utility functions for parsind.
//!
//! - [`text`]: file-case conversion and singularization of resource names.

pub mod text;
