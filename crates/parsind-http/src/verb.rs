//! HTTP verbs a route can be bound to.

use std::fmt;
use std::str::FromStr;

use axum::routing::MethodFilter;
use http::Method;
use serde::{Deserialize, Serialize};

use parsind_core::ParsindError;

/// An HTTP verb supported by the routers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpVerb {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
    /// `HEAD`
    Head,
    /// `OPTIONS`
    Options,
}

impl HttpVerb {
    /// Every supported verb.
    pub const ALL: [Self; 7] = [
        Self::Get,
        Self::Post,
        Self::Put,
        Self::Patch,
        Self::Delete,
        Self::Head,
        Self::Options,
    ];

    /// The lowercase name used in configuration (`"get"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Patch => "patch",
            Self::Delete => "delete",
            Self::Head => "head",
            Self::Options => "options",
        }
    }

    /// The corresponding [`http::Method`].
    pub fn method(self) -> Method {
        match self {
            Self::Get => Method::GET,
            Self::Post => Method::POST,
            Self::Put => Method::PUT,
            Self::Patch => Method::PATCH,
            Self::Delete => Method::DELETE,
            Self::Head => Method::HEAD,
            Self::Options => Method::OPTIONS,
        }
    }

    /// The axum method filter for this verb.
    pub const fn method_filter(self) -> MethodFilter {
        match self {
            Self::Get => MethodFilter::GET,
            Self::Post => MethodFilter::POST,
            Self::Put => MethodFilter::PUT,
            Self::Patch => MethodFilter::PATCH,
            Self::Delete => MethodFilter::DELETE,
            Self::Head => MethodFilter::HEAD,
            Self::Options => MethodFilter::OPTIONS,
        }
    }

    /// Converts an [`http::Method`], if it is one of the supported verbs.
    pub fn from_method(method: &Method) -> Option<Self> {
        Self::ALL.into_iter().find(|verb| verb.method() == *method)
    }
}

/// Displays the uppercase wire name (`GET`).
impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method().as_str())
    }
}

/// Parses a verb case-insensitively.
impl FromStr for HttpVerb {
    type Err = ParsindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|verb| verb.as_str() == lower)
            .ok_or_else(|| ParsindError::ConfigurationError(format!("Unsupported HTTP verb '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("GET".parse::<HttpVerb>().unwrap(), HttpVerb::Get);
        assert_eq!("post".parse::<HttpVerb>().unwrap(), HttpVerb::Post);
        assert_eq!("Delete".parse::<HttpVerb>().unwrap(), HttpVerb::Delete);
    }

    #[test]
    fn test_parse_unknown_verb() {
        let err = "FETCH".parse::<HttpVerb>().unwrap_err();
        assert!(matches!(err, ParsindError::ConfigurationError(_)));
    }

    #[test]
    fn test_display_is_uppercase() {
        assert_eq!(HttpVerb::Patch.to_string(), "PATCH");
        assert_eq!(HttpVerb::Patch.as_str(), "patch");
    }

    #[test]
    fn test_method_round_trip() {
        for verb in HttpVerb::ALL {
            assert_eq!(HttpVerb::from_method(&verb.method()), Some(verb));
        }
        assert_eq!(HttpVerb::from_method(&Method::TRACE), None);
    }
}
