use crate::error::ParseError;
use crate::matcher::{Candidate, Candidates, PatternMatcher};
use crate::params::Params;
use crate::route::{normalize_method, Route, RouteId, RouteTable, RouterConfig};
use crate::tree::TreeMatcher;

use std::borrow::Cow;

use http::{Request, Uri};

/// A started route table: immutable, queried through `&self`.
///
/// Built by [`RouteTable::start`] or [`RouteTable::start_with`].
#[derive(Debug)]
pub struct Router<T, M = TreeMatcher> {
    routes: Box<[Route<T>]>,
    matcher: M,
    config: RouterConfig,
}

/// Outcome of a query.
///
/// `path_matched` is true when the path matched some registered pattern under
/// any method, even if no route matched the method.
#[derive(Debug)]
pub struct Resolution<'r, T> {
    matched: Option<(&'r Route<T>, Params)>,
    path_matched: bool,
}

impl<T, M: PatternMatcher> Router<T, M> {
    pub(crate) fn from_parts(routes: Vec<Route<T>>, matcher: M, config: RouterConfig) -> Self {
        Self {
            routes: routes.into_boxed_slice(),
            matcher,
            config,
        }
    }

    /// Parses `url` (absolute or path only) and resolves it.
    ///
    /// An empty `url` resolves to nothing.
    pub fn find_route(&self, method: &str, url: &str) -> Result<Resolution<'_, T>, ParseError> {
        if url.is_empty() {
            return Ok(Resolution::none());
        }
        let uri: Uri = match url.parse() {
            Ok(uri) => uri,
            Err(e) => {
                tracing::debug!(method, url, error = %e, "failed to parse url");
                return Err(ParseError::new(url, e));
            }
        };
        Ok(self.find_route_from_uri(method, &uri))
    }

    /// Resolves the percent-decoded path of `uri`.
    pub fn find_route_from_uri(&self, method: &str, uri: &Uri) -> Resolution<'_, T> {
        let path = decode_path(uri.path());
        self.find_route_by_path(method, &path)
    }

    pub fn find_request<B>(&self, req: &Request<B>) -> Resolution<'_, T> {
        self.find_route_from_uri(req.method().as_str(), req.uri())
    }

    /// Resolves an already decoded path, without query string.
    ///
    /// A path that does not start with `/` (such as `*` or an empty
    /// authority-form path) matches nothing.
    pub fn find_route_by_path(&self, method: &str, path: &str) -> Resolution<'_, T> {
        if !path.starts_with('/') {
            tracing::trace!(path, "not an absolute path");
            return Resolution::none();
        }
        let method = normalize_method(method);

        let (mut candidates, path_matched) =
            self.matcher.find_routes_and_path_matched(&method, path);

        let known = self.routes.len();
        candidates.retain(|c| {
            debug_assert!(c.id.index() < known, "unknown route id {}", c.id);
            c.id.index() < known
        });

        tracing::trace!(
            method = %method,
            path,
            candidates = candidates.len(),
            path_matched,
            "route resolved"
        );

        let matched = first_defined(candidates).map(|c| (&self.routes[c.id.index()], c.params));

        Resolution {
            path_matched: path_matched || matched.is_some(),
            matched,
        }
    }
}

fn decode_path(path: &str) -> Cow<'_, str> {
    match urlencoding::decode_binary(path.as_bytes()) {
        Cow::Borrowed(_) => Cow::Borrowed(path),
        Cow::Owned(bytes) => Cow::Owned(String::from_utf8_lossy(&bytes).into_owned()),
    }
}

fn first_defined(candidates: Candidates) -> Option<Candidate> {
    if candidates.len() <= 1 {
        return candidates.into_iter().next();
    }
    candidates.into_iter().min_by_key(|c| c.id)
}

impl<T, M> Router<T, M> {
    pub fn routes(&self) -> &[Route<T>] {
        &self.routes
    }

    pub fn get(&self, id: RouteId) -> Option<&Route<T>> {
        self.routes.get(id.index())
    }

    pub fn config(&self) -> RouterConfig {
        self.config
    }

    /// Gives the routes back so that a new router can be started from them.
    pub fn into_table(self) -> RouteTable<T> {
        RouteTable::from_parts(self.routes.into_vec(), self.config)
    }
}

impl<'r, T> Resolution<'r, T> {
    fn none() -> Self {
        Self {
            matched: None,
            path_matched: false,
        }
    }

    pub fn route(&self) -> Option<&'r Route<T>> {
        self.matched.as_ref().map(|&(r, _)| r)
    }

    pub fn route_id(&self) -> Option<RouteId> {
        self.route().map(Route::id)
    }

    pub fn data(&self) -> Option<&'r T> {
        self.route().map(Route::data)
    }

    /// `Some` (possibly empty) exactly when a route matched.
    pub fn params(&self) -> Option<&Params> {
        self.matched.as_ref().map(|(_, p)| p)
    }

    pub fn path_matched(&self) -> bool {
        self.path_matched
    }

    pub fn is_match(&self) -> bool {
        self.matched.is_some()
    }

    /// The path exists under another method.
    pub fn is_method_not_allowed(&self) -> bool {
        self.matched.is_none() && self.path_matched
    }

    pub fn into_parts(self) -> (Option<&'r Route<T>>, Option<Params>, bool) {
        match self.matched {
            Some((route, params)) => (Some(route), Some(params), self.path_matched),
            None => (None, None, self.path_matched),
        }
    }
}
