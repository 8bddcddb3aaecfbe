//! Verb → controller method conventions.

use indexmap::IndexMap;
use parsind_core::{ControllerMethods, ParsindResult};
use parsind_http::HttpVerb;

/// Which controller method answers which verb on a resource's two routes.
///
/// The defaults are:
///
/// | Route               | Verb   | Method    |
/// |---------------------|--------|-----------|
/// | `/books`            | GET    | `index`   |
/// | `/books`            | POST   | `store`   |
/// | `/books/:book_id`   | GET    | `show`    |
/// | `/books/:book_id`   | PUT    | `update`  |
/// | `/books/:book_id`   | PATCH  | `patch`   |
/// | `/books/:book_id`   | DELETE | `destroy` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConventionTable {
    collection: IndexMap<HttpVerb, String>,
    item: IndexMap<HttpVerb, String>,
}

impl Default for ConventionTable {
    fn default() -> Self {
        Self {
            collection: IndexMap::from([
                (HttpVerb::Get, "index".to_string()),
                (HttpVerb::Post, "store".to_string()),
            ]),
            item: IndexMap::from([
                (HttpVerb::Get, "show".to_string()),
                (HttpVerb::Put, "update".to_string()),
                (HttpVerb::Patch, "patch".to_string()),
                (HttpVerb::Delete, "destroy".to_string()),
            ]),
        }
    }
}

impl ConventionTable {
    /// Builds a table from explicit verb groups.
    pub const fn new(
        collection: IndexMap<HttpVerb, String>,
        item: IndexMap<HttpVerb, String>,
    ) -> Self {
        Self { collection, item }
    }

    /// Merges user overrides over the defaults.
    ///
    /// A group present in `overrides` replaces the default group entirely;
    /// an absent group keeps its defaults. Verb names are case-insensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexmap::IndexMap;
    /// use parsind_core::ControllerMethods;
    /// use parsind_http::HttpVerb;
    /// use parsind_resources::ConventionTable;
    ///
    /// let overrides = ControllerMethods {
    ///     entrance: Some(IndexMap::from([("GET".to_string(), "list".to_string())])),
    ///     item: None,
    /// };
    /// let table = ConventionTable::from_overrides(&overrides).unwrap();
    ///
    /// assert_eq!(table.collection().len(), 1);
    /// assert_eq!(table.collection()[&HttpVerb::Get], "list");
    /// assert_eq!(table.item()[&HttpVerb::Delete], "destroy");
    /// ```
    pub fn from_overrides(overrides: &ControllerMethods) -> ParsindResult<Self> {
        let defaults = Self::default();
        let collection = match &overrides.entrance {
            Some(group) => parse_group(group)?,
            None => defaults.collection,
        };
        let item = match &overrides.item {
            Some(group) => parse_group(group)?,
            None => defaults.item,
        };
        Ok(Self { collection, item })
    }

    /// Methods bound on the collection route.
    pub const fn collection(&self) -> &IndexMap<HttpVerb, String> {
        &self.collection
    }

    /// Methods bound on the item route.
    pub const fn item(&self) -> &IndexMap<HttpVerb, String> {
        &self.item
    }
}

fn parse_group(group: &IndexMap<String, String>) -> ParsindResult<IndexMap<HttpVerb, String>> {
    group
        .iter()
        .map(|(verb, method)| Ok((verb.parse::<HttpVerb>()?, method.clone())))
        .collect()
}
