//! Connection target for a listener.

use std::fmt;
use std::net::Ipv6Addr;

use super::Namespace;
use crate::error::FeedError;

/// A remote endpoint: host, port, and the namespace to join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    host: String,
    port: u16,
    namespace: Namespace,
}

impl Endpoint {
    /// Creates an endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidEndpoint`] if `host` is empty, contains
    /// whitespace or a path separator, or contains `:` without being an
    /// IPv6 literal. IPv6 literals may be given with or without brackets.
    pub fn new(host: impl Into<String>, port: u16, namespace: Namespace) -> Result<Self, FeedError> {
        let mut host = host.into();
        if let Some(inner) = host.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
            host = inner.to_string();
        }
        let malformed = host.is_empty()
            || host.contains(|c: char| c.is_whitespace() || c == '/' || c == '[' || c == ']')
            || (host.contains(':') && host.parse::<Ipv6Addr>().is_err());
        if malformed {
            return Err(FeedError::InvalidEndpoint(format!("bad host {host:?}")));
        }
        Ok(Self {
            host,
            port,
            namespace,
        })
    }

    /// Host name or address, without IPv6 brackets.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// TCP port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Namespace joined on connect.
    #[must_use]
    pub const fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// WebSocket URL, `ws://{host}:{port}{namespace}`. IPv6 hosts are
    /// bracketed.
    #[must_use]
    pub fn url(&self) -> String {
        if self.host.contains(':') {
            format!("ws://[{}]:{}{}", self.host, self.port, self.namespace)
        } else {
            format!("ws://{}:{}{}", self.host, self.port, self.namespace)
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_host_port_and_namespace() {
        let Ok(ep) = Endpoint::new("127.0.0.1", 5000, Namespace::default()) else {
            panic!("expected valid endpoint");
        };
        assert_eq!(ep.url(), "ws://127.0.0.1:5000/test");
        assert_eq!(ep.port(), 5000);
        assert_eq!(ep.host(), "127.0.0.1");
    }

    #[test]
    fn empty_host_rejected() {
        assert!(Endpoint::new("", 5000, Namespace::default()).is_err());
        assert!(Endpoint::new("a b", 5000, Namespace::default()).is_err());
    }

    #[test]
    fn ipv6_host_is_bracketed() {
        for host in ["::1", "[::1]"] {
            let Ok(ep) = Endpoint::new(host, 5000, Namespace::default()) else {
                panic!("expected {host} to be accepted");
            };
            assert_eq!(ep.host(), "::1");
            assert_eq!(ep.url(), "ws://[::1]:5000/test");
        }
    }

    #[test]
    fn stray_colon_rejected() {
        assert!(Endpoint::new("localhost:5000", 5000, Namespace::default()).is_err());
        assert!(Endpoint::new("[not:ipv6]", 5000, Namespace::default()).is_err());
        assert!(Endpoint::new("[::1", 5000, Namespace::default()).is_err());
    }
}
