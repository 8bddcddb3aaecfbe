//! The declarative route configuration tree.
//!
//! A [`RouteNode`] is the heterogeneous tree users write in their settings:
//!
//! ```json
//! {
//!   "GET /": "indexController#welcome",
//!   "books": ["authors", { "tags": { "GET /foo": "getFoo" } }],
//!   "authors": ["tags", "books"]
//! }
//! ```
//!
//! Mapping keys are either nested resource names or special route keys
//! (`"[VERB ]path"`) when their value is a plain string. Mapping order is
//! significant and preserved.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A node of the route configuration tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteNode {
    /// A bare resource name (in a list) or a handler spec (as a mapping value).
    Resource(String),
    /// An ordered sequence of nodes.
    List(Vec<RouteNode>),
    /// An ordered mapping from resource names or special route keys to nodes.
    Map(IndexMap<String, RouteNode>),
    /// Any other shape (numbers, booleans, null). Skipped by the parser.
    Ignored,
}

impl Default for RouteNode {
    fn default() -> Self {
        Self::Map(IndexMap::new())
    }
}

impl RouteNode {
    /// Builds a [`RouteNode::Map`] from key/node pairs, keeping their order.
    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Self)>,
    {
        Self::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Builds a [`RouteNode::List`].
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::List(items.into_iter().collect())
    }

    /// Returns the string payload of a [`RouteNode::Resource`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Resource(s) => Some(s),
            _ => None,
        }
    }

    /// Returns `true` if this node is an empty mapping or list.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Map(map) => map.is_empty(),
            Self::List(list) => list.is_empty(),
            Self::Resource(_) | Self::Ignored => false,
        }
    }
}

impl From<&str> for RouteNode {
    fn from(value: &str) -> Self {
        Self::Resource(value.to_string())
    }
}

impl From<String> for RouteNode {
    fn from(value: String) -> Self {
        Self::Resource(value)
    }
}

impl From<serde_json::Value> for RouteNode {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => Self::Resource(s),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Map(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
            serde_json::Value::Null
            | serde_json::Value::Bool(_)
            | serde_json::Value::Number(_) => Self::Ignored,
        }
    }
}

impl From<&RouteNode> for serde_json::Value {
    fn from(node: &RouteNode) -> Self {
        match node {
            RouteNode::Resource(s) => Self::String(s.clone()),
            RouteNode::List(items) => Self::Array(items.iter().map(Self::from).collect()),
            RouteNode::Map(map) => Self::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Self::from(v)))
                    .collect(),
            ),
            RouteNode::Ignored => Self::Null,
        }
    }
}

impl Serialize for RouteNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde_json::Value::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RouteNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Self::from)
    }
}

impl fmt::Display for RouteNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", serde_json::Value::from(self))
    }
}
