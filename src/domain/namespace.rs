//! Validated namespace path.
//!
//! [`Namespace`] is a newtype around the `/segment` path that names a
//! logical sub-channel on an endpoint. Listeners connect to it, the
//! gateway routes it, and every [`super::FeedEvent`] is tagged with one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FeedError;

/// Namespace used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "/test";

/// A namespace path such as `/test`.
///
/// Always a leading `/` followed by exactly one non-empty segment of
/// ASCII alphanumerics, `_` or `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Namespace(String);

impl Namespace {
    /// Parses a namespace path (`/test`).
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidNamespace`] if the path is missing its
    /// leading slash, is empty, or contains characters outside
    /// `[A-Za-z0-9_-]`.
    pub fn parse(path: &str) -> Result<Self, FeedError> {
        let Some(segment) = path.strip_prefix('/') else {
            return Err(FeedError::InvalidNamespace(path.to_string()));
        };
        Self::from_segment(segment)
    }

    /// Builds a namespace from a bare path segment (`test`), as captured
    /// by the router.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidNamespace`] if the segment is empty or
    /// contains characters outside `[A-Za-z0-9_-]`.
    pub fn from_segment(segment: &str) -> Result<Self, FeedError> {
        let valid = !segment.is_empty()
            && segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(FeedError::InvalidNamespace(format!("/{segment}")));
        }
        Ok(Self(format!("/{segment}")))
    }

    /// Returns the full path including the leading slash.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self(DEFAULT_NAMESPACE.to_string())
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Namespace {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Namespace {
    type Error = FeedError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Namespace> for String {
    fn from(ns: Namespace) -> Self {
        ns.0
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_path() {
        let Ok(ns) = Namespace::parse("/test") else {
            panic!("expected valid namespace");
        };
        assert_eq!(ns.as_str(), "/test");
        assert_eq!(ns.to_string(), "/test");
    }

    #[test]
    fn default_is_test() {
        assert_eq!(Namespace::default().as_str(), DEFAULT_NAMESPACE);
    }

    #[test]
    fn rejects_missing_slash() {
        assert!(Namespace::parse("test").is_err());
    }

    #[test]
    fn rejects_empty_and_nested() {
        assert!(Namespace::parse("/").is_err());
        assert!(Namespace::parse("").is_err());
        assert!(Namespace::parse("/a/b").is_err());
        assert!(Namespace::parse("/with space").is_err());
    }

    #[test]
    fn segment_gets_leading_slash() {
        let Ok(ns) = Namespace::from_segment("ground_station-1") else {
            panic!("expected valid segment");
        };
        assert_eq!(ns.as_str(), "/ground_station-1");
    }

    #[test]
    fn deserialize_validates() {
        let ok: Result<Namespace, _> = serde_json::from_str("\"/test\"");
        assert!(ok.is_ok());
        let bad: Result<Namespace, _> = serde_json::from_str("\"test\"");
        assert!(bad.is_err());
    }
}
