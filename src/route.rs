use crate::error::BuildError;
use crate::matcher::PatternMatcher;
use crate::router::Router;
use crate::tree::TreeMatcher;

use std::borrow::Cow;
use std::fmt;

/// Position of a route in its table. Earlier routes have smaller ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RouteId(usize);

impl RouteId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug)]
pub struct Route<T> {
    id: RouteId,
    method: Box<str>,
    pattern: Box<str>,
    data: T,
}

impl<T> Route<T> {
    pub fn id(&self) -> RouteId {
        self.id
    }

    /// Upper-cased HTTP method.
    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn data(&self) -> &T {
        &self.data
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterConfig {
    /// Run [`PatternMatcher::compress`] after all routes are registered.
    pub compress: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self { compress: true }
    }
}

/// Ordered collection of routes.
///
/// If several routes match the same request, the one defined first wins.
#[derive(Debug)]
pub struct RouteTable<T> {
    routes: Vec<Route<T>>,
    config: RouterConfig,
}

impl<T> Default for RouteTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RouteTable<T> {
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            routes: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> RouterConfig {
        self.config
    }

    pub fn disable_compression(&mut self) -> &mut Self {
        self.config.compress = false;
        self
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn routes(&self) -> &[Route<T>] {
        &self.routes
    }

    pub fn push(&mut self, method: &str, pattern: &str, data: T) -> RouteId {
        let id = RouteId::new(self.routes.len());
        self.routes.push(Route {
            id,
            method: normalize_method(method).into(),
            pattern: pattern.into(),
            data,
        });
        id
    }

    pub fn route(&mut self, method: &str, pattern: &str, data: T) -> &mut Self {
        self.push(method, pattern, data);
        self
    }

    /// Appends the routes of `other` under `prefix`, keeping their order.
    pub fn merge(&mut self, prefix: &str, other: RouteTable<T>) -> &mut Self {
        let prefix = prefix.trim_end_matches('/');
        for route in other.routes {
            let pattern = format!("{}{}", prefix, route.pattern);
            self.push(&route.method, &pattern, route.data);
        }
        self
    }

    pub fn nest(&mut self, prefix: &str, f: impl FnOnce(&mut RouteTable<T>)) -> &mut Self {
        let mut table = Self::new();
        f(&mut table);
        self.merge(prefix, table)
    }

    /// Builds a [`Router`] backed by the default [`TreeMatcher`].
    pub fn start(self) -> Result<Router<T>, BuildError> {
        self.start_with::<TreeMatcher>()
    }

    /// Builds a [`Router`] backed by a fresh `M`.
    ///
    /// Routes are registered in table order; the first rejected registration
    /// aborts the build.
    pub fn start_with<M: PatternMatcher>(self) -> Result<Router<T, M>, BuildError> {
        let mut matcher = M::default();
        for route in &self.routes {
            if let Err(e) = matcher.add_route(&route.method, &route.pattern, route.id) {
                tracing::debug!(route = %route.id, error = %e, "route table rejected");
                return Err(e);
            }
        }
        if self.config.compress {
            matcher.compress();
        }

        tracing::debug!(
            routes = self.routes.len(),
            compress = self.config.compress,
            "route table started"
        );

        Ok(Router::from_parts(self.routes, matcher, self.config))
    }

    pub(crate) fn from_parts(routes: Vec<Route<T>>, config: RouterConfig) -> Self {
        Self { routes, config }
    }
}

pub(crate) fn normalize_method(method: &str) -> Cow<'_, str> {
    if method.bytes().any(|b| b.is_ascii_lowercase()) {
        Cow::Owned(method.to_ascii_uppercase())
    } else {
        Cow::Borrowed(method)
    }
}
