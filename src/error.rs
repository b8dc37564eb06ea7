use http::uri::InvalidUri;

/// Failure of [`RouteTable::start`](crate::RouteTable::start).
///
/// A build error is fatal: no [`Router`](crate::Router) is produced.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("route already defined: method = {method}, pattern = {pattern:?}")]
    DuplicateRoute { method: Box<str>, pattern: Box<str> },

    #[error("{reason}: pattern = {pattern:?}")]
    InvalidPattern {
        pattern: Box<str>,
        reason: &'static str,
    },
}

impl BuildError {
    pub(crate) fn duplicate(method: &str, pattern: &str) -> Self {
        Self::DuplicateRoute {
            method: method.into(),
            pattern: pattern.into(),
        }
    }

    pub(crate) fn invalid(pattern: &str, reason: &'static str) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason,
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid url {url:?}: {source}")]
pub struct ParseError {
    url: Box<str>,
    #[source]
    source: InvalidUri,
}

impl ParseError {
    pub(crate) fn new(url: &str, source: InvalidUri) -> Self {
        Self {
            url: url.into(),
            source,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}
