//! String utility functions.
//!
//! Controller file names are derived from resource names with [`to_file_case`],
//! and identifier placeholders (`:book_id`) use [`singularize`].

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use heck::{ToLowerCamelCase, ToPascalCase, ToSnakeCase};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ParsindError;

/// The casing convention of controller file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCase {
    /// `booksController`
    #[default]
    Camel,
    /// `books_controller`
    Snake,
    /// `BooksController`
    Pascal,
}

impl FileCase {
    /// All accepted casing conventions.
    pub const ALL: [Self; 3] = [Self::Camel, Self::Snake, Self::Pascal];

    /// Returns the configuration name of this case.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Camel => "camel",
            Self::Snake => "snake",
            Self::Pascal => "pascal",
        }
    }
}

impl fmt::Display for FileCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileCase {
    type Err = ParsindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|case| case.as_str() == s)
            .ok_or_else(|| {
                ParsindError::ConfigurationError(format!(
                    "Controller case must be 'camel', 'snake' or 'pascal', got '{s}'"
                ))
            })
    }
}

/// Converts a name to the given file case.
///
/// # Examples
///
/// ```
/// use parsind_core::utils::text::{to_file_case, FileCase};
///
/// assert_eq!(to_file_case("foo_bar", FileCase::Camel), "fooBar");
/// assert_eq!(to_file_case("foo_bar", FileCase::Pascal), "FooBar");
/// assert_eq!(to_file_case("fooBar", FileCase::Snake), "foo_bar");
/// ```
pub fn to_file_case(name: &str, case: FileCase) -> String {
    match case {
        FileCase::Camel => name.to_lower_camel_case(),
        FileCase::Snake => name.to_snake_case(),
        FileCase::Pascal => name.to_pascal_case(),
    }
}

const UNCOUNTABLE: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "deer",
    "news",
    "media",
    "metadata",
    "feedback",
    "software",
];

const IRREGULAR: &[(&str, &str)] = &[
    ("people", "person"),
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("teeth", "tooth"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("oxen", "ox"),
    ("indices", "index"),
    ("vertices", "vertex"),
    ("matrices", "matrix"),
    ("criteria", "criterion"),
];

/// Suffix rules, most specific first. The first match wins.
const SINGULAR_RULES: &[(&str, &str)] = &[
    (r"(?i)(quiz)zes$", "$1"),
    (r"(?i)(alias|status|bus|census)(es)?$", "$1"),
    (r"(?i)(octop|vir)(i|uses)$", "${1}us"),
    (r"(?i)(cris|ax|test)es$", "${1}is"),
    (r"(?i)(shoe)s$", "$1"),
    (r"(?i)(her|potat|tomat|ech|vet)oes$", "${1}o"),
    (r"(?i)([ml])ice$", "${1}ouse"),
    (r"(?i)(x|ch|ss|sh|zz)es$", "$1"),
    (r"(?i)(m)ovies$", "${1}ovie"),
    (r"(?i)([^aeiouy]|qu)ies$", "${1}y"),
    (r"(?i)(hive|tive)s$", "$1"),
    (r"(?i)(kni|li|wi)ves$", "${1}fe"),
    (r"(?i)([lr])ves$", "${1}f"),
    (r"(?i)(analy|ba|diagno|parenthe|progno|synop|the)ses$", "${1}sis"),
    (r"(?i)(ss|us|is)$", "$1"),
    (r"(?i)s$", ""),
];

fn singular_rules() -> &'static [(Regex, &'static str)] {
    static RULES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    RULES.get_or_init(|| {
        SINGULAR_RULES
            .iter()
            .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), *replacement))
            .collect()
    })
}

/// Returns the singular form of an English noun.
///
/// Only the trailing word of compound names (`foo_bars`) is inflected. Words
/// that do not look plural are returned unchanged.
///
/// # Examples
///
/// ```
/// use parsind_core::utils::text::singularize;
///
/// assert_eq!(singularize("books"), "book");
/// assert_eq!(singularize("categories"), "category");
/// assert_eq!(singularize("people"), "person");
/// assert_eq!(singularize("foo_bar"), "foo_bar");
/// ```
pub fn singularize(word: &str) -> String {
    let split = word
        .rfind(|c: char| !c.is_alphanumeric())
        .map_or(0, |pos| pos + 1);
    let (head, last) = word.split_at(split);
    if last.is_empty() {
        return word.to_string();
    }

    let lower = last.to_lowercase();
    if UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }
    if let Some((_, singular)) = IRREGULAR.iter().find(|(plural, _)| *plural == lower) {
        return format!("{head}{}", restore_case(last, singular));
    }

    singular_rules()
        .iter()
        .find(|(re, _)| re.is_match(last))
        .map_or_else(
            || word.to_string(),
            |(re, replacement)| format!("{head}{}", re.replace(last, *replacement)),
        )
}

/// Carries the capitalization of the first letter over to the replacement.
fn restore_case(original: &str, replacement: &str) -> String {
    if original.chars().next().is_some_and(char::is_uppercase) {
        let mut chars = replacement.chars();
        chars.next().map_or_else(String::new, |c| {
            let mut result = c.to_uppercase().to_string();
            result.extend(chars);
            result
        })
    } else {
        replacement.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── FileCase ─────────────────────────────────────────────────────

    #[test]
    fn test_file_case_from_str() {
        assert_eq!("camel".parse::<FileCase>().unwrap(), FileCase::Camel);
        assert_eq!("snake".parse::<FileCase>().unwrap(), FileCase::Snake);
        assert_eq!("pascal".parse::<FileCase>().unwrap(), FileCase::Pascal);
    }

    #[test]
    fn test_file_case_from_str_invalid() {
        let err = "kebab".parse::<FileCase>().unwrap_err();
        assert!(matches!(err, ParsindError::ConfigurationError(_)));
        assert!(err.to_string().contains("kebab"));
    }

    #[test]
    fn test_file_case_serde() {
        let case: FileCase = serde_json::from_str("\"pascal\"").unwrap();
        assert_eq!(case, FileCase::Pascal);
        assert!(serde_json::from_str::<FileCase>("\"upper\"").is_err());
    }

    // ── to_file_case ─────────────────────────────────────────────────

    #[test]
    fn test_to_file_case_camel() {
        assert_eq!(to_file_case("foo_bar", FileCase::Camel), "fooBar");
        assert_eq!(to_file_case("books_controller", FileCase::Camel), "booksController");
        assert_eq!(to_file_case("indexController", FileCase::Camel), "indexController");
    }

    #[test]
    fn test_to_file_case_pascal() {
        assert_eq!(to_file_case("foo_bar", FileCase::Pascal), "FooBar");
    }

    #[test]
    fn test_to_file_case_snake() {
        assert_eq!(to_file_case("fooBar", FileCase::Snake), "foo_bar");
        assert_eq!(to_file_case("books_controller", FileCase::Snake), "books_controller");
    }

    // ── singularize ──────────────────────────────────────────────────

    #[test]
    fn test_singularize_regular() {
        assert_eq!(singularize("books"), "book");
        assert_eq!(singularize("authors"), "author");
        assert_eq!(singularize("tags"), "tag");
        assert_eq!(singularize("bars"), "bar");
    }

    #[test]
    fn test_singularize_es_endings() {
        assert_eq!(singularize("boxes"), "box");
        assert_eq!(singularize("matches"), "match");
        assert_eq!(singularize("classes"), "class");
        assert_eq!(singularize("statuses"), "status");
        assert_eq!(singularize("heroes"), "hero");
    }

    #[test]
    fn test_singularize_ies_and_ves() {
        assert_eq!(singularize("categories"), "category");
        assert_eq!(singularize("wolves"), "wolf");
        assert_eq!(singularize("knives"), "knife");
        assert_eq!(singularize("movies"), "movie");
    }

    #[test]
    fn test_singularize_irregular_and_uncountable() {
        assert_eq!(singularize("people"), "person");
        assert_eq!(singularize("children"), "child");
        assert_eq!(singularize("sheep"), "sheep");
        assert_eq!(singularize("news"), "news");
    }

    #[test]
    fn test_singularize_already_singular() {
        assert_eq!(singularize("book"), "book");
        assert_eq!(singularize("status"), "status");
        assert_eq!(singularize("analysis"), "analysis");
        assert_eq!(singularize("foo_bar"), "foo_bar");
    }

    #[test]
    fn test_singularize_compound() {
        assert_eq!(singularize("foo_bars"), "foo_bar");
        assert_eq!(singularize("admin_people"), "admin_person");
        assert_eq!(singularize("People"), "Person");
    }

    #[test]
    fn test_singularize_empty() {
        assert_eq!(singularize(""), "");
        assert_eq!(singularize("books_"), "books_");
    }
}
