//! Segment prefix tree, the default [`PatternMatcher`].
//!
//! Pattern syntax:
//!
//! + `name` matches the literal segment `name`.
//! + `:name` matches exactly one non-empty segment and captures it as `name`.
//! + `*name` must be the last segment. It matches the non-empty remainder of
//!   the path, slashes included, and captures it as `name`.
//!
//! Every branch is explored, so a query returns all matching routes and
//! leaves precedence to the caller.

mod node;
mod pattern;

use self::node::{CaptureBuf, Node, Search};

use crate::error::BuildError;
use crate::matcher::{Candidates, PatternMatcher};
use crate::route::RouteId;

#[derive(Debug, Default)]
pub struct TreeMatcher {
    root: Node,
    len: usize,
}

impl TreeMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl PatternMatcher for TreeMatcher {
    fn add_route(&mut self, method: &str, pattern: &str, id: RouteId) -> Result<(), BuildError> {
        let segments = pattern::parse(pattern)?;
        match self.root.insert(&segments, method, id) {
            Ok(()) => {
                self.len += 1;
                Ok(())
            }
            Err(_) => Err(BuildError::duplicate(method, pattern)),
        }
    }

    fn compress(&mut self) {
        self.root.compress()
    }

    fn find_routes_and_path_matched(&self, method: &str, path: &str) -> (Candidates, bool) {
        let path = match path.strip_prefix('/') {
            Some(path) if !self.is_empty() => path,
            _ => return (Candidates::new(), false),
        };
        let parts = pattern::split_path(path);
        let mut search = Search {
            path,
            method,
            captures: CaptureBuf::new(),
            candidates: Candidates::new(),
            path_matched: false,
        };
        self.root.search(&parts, &mut search);
        (search.candidates, search.path_matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(routes: &[(&str, &str)], compress: bool) -> TreeMatcher {
        let mut m = TreeMatcher::new();
        for (i, &(method, pattern)) in routes.iter().enumerate() {
            m.add_route(method, pattern, RouteId::new(i)).unwrap();
        }
        if compress {
            m.compress();
        }
        m
    }

    fn ids(m: &TreeMatcher, method: &str, path: &str) -> (Vec<usize>, bool) {
        let (candidates, path_matched) = m.find_routes_and_path_matched(method, path);
        let mut ids: Vec<usize> = candidates.iter().map(|c| c.id.index()).collect();
        ids.sort_unstable();
        (ids, path_matched)
    }

    const ROUTES: &[(&str, &str)] = &[
        ("GET", "/"),
        ("GET", "/users"),
        ("GET", "/users/:id"),
        ("PUT", "/users/:id"),
        ("GET", "/users/:id/posts/:post_id"),
        ("GET", "/users/:name/profile"),
        ("GET", "/static/css/site/main.css"),
        ("GET", "/static/*file"),
        ("GET", "/api/v1/info"),
        ("POST", "/api/v1/info"),
        ("GET", "/api/v1/items/"),
    ];

    #[test]
    fn literal_param_wildcard() {
        for &compress in &[false, true] {
            let m = build(ROUTES, compress);

            assert_eq!(ids(&m, "GET", "/"), (vec![0], true));
            assert_eq!(ids(&m, "GET", "/users"), (vec![1], true));
            assert_eq!(ids(&m, "GET", "/users/42"), (vec![2], true));
            assert_eq!(ids(&m, "PUT", "/users/42"), (vec![3], true));
            assert_eq!(ids(&m, "GET", "/users/42/posts/7"), (vec![4], true));
            assert_eq!(ids(&m, "GET", "/users/bob/profile"), (vec![5], true));
            assert_eq!(
                ids(&m, "GET", "/static/css/site/main.css"),
                (vec![6, 7], true)
            );
            assert_eq!(ids(&m, "GET", "/static/css/other.css"), (vec![7], true));
            assert_eq!(ids(&m, "POST", "/api/v1/info"), (vec![9], true));
            assert_eq!(ids(&m, "GET", "/api/v1/items/"), (vec![10], true));

            assert_eq!(ids(&m, "GET", "/api/v1/items"), (vec![], false));
            assert_eq!(ids(&m, "GET", "/api/v1"), (vec![], false));
            assert_eq!(ids(&m, "GET", "/users/"), (vec![], false));
            assert_eq!(ids(&m, "GET", "/static/"), (vec![], false));
            assert_eq!(ids(&m, "GET", "/nothing"), (vec![], false));

            assert_eq!(ids(&m, "DELETE", "/users/42"), (vec![], true));
            assert_eq!(ids(&m, "DELETE", "/static/a/b"), (vec![], true));
        }
    }

    #[test]
    fn captures() {
        let m = build(ROUTES, true);

        let (c, _) = m.find_routes_and_path_matched("GET", "/users/42/posts/7");
        assert_eq!(c.len(), 1);
        assert_eq!(c[0].params.get("id"), Some("42"));
        assert_eq!(c[0].params.get("post_id"), Some("7"));

        let (c, _) = m.find_routes_and_path_matched("GET", "/static/js/app.js");
        assert_eq!(c[0].params.get("file"), Some("js/app.js"));

        let (c, _) = m.find_routes_and_path_matched("GET", "/users");
        assert!(c[0].params.is_empty());
    }

    #[test]
    fn overlapping_patterns_all_returned() {
        let m = build(&[("GET", "/r/:id"), ("GET", "/r/*rest"), ("GET", "/r/:name")], true);
        assert_eq!(ids(&m, "GET", "/r/123"), (vec![0, 1, 2], true));
        assert_eq!(ids(&m, "GET", "/r/1/2"), (vec![1], true));
    }

    #[test]
    fn duplicate() {
        let mut m = TreeMatcher::new();
        m.add_route("GET", "/", RouteId::new(0)).unwrap();
        m.add_route("POST", "/", RouteId::new(1)).unwrap();
        match m.add_route("GET", "/", RouteId::new(2)) {
            Err(BuildError::DuplicateRoute { method, pattern }) => {
                assert_eq!(&*method, "GET");
                assert_eq!(&*pattern, "/");
            }
            other => panic!("unexpected: {:?}", other),
        }
        assert!(m.add_route("GET", "/f/*p", RouteId::new(3)).is_ok());
        assert!(m.add_route("GET", "/f/*p", RouteId::new(4)).is_err());
        assert!(m.add_route("GET", "/f/*q", RouteId::new(5)).is_ok());
        assert_eq!(m.len(), 4);
    }

    #[test]
    fn insert_after_compress() {
        let mut m = build(&[("GET", "/a/b/c/d")], true);
        m.add_route("GET", "/a/b", RouteId::new(1)).unwrap();
        m.add_route("GET", "/a/x", RouteId::new(2)).unwrap();
        m.add_route("GET", "/a/:p/c/d", RouteId::new(3)).unwrap();
        assert!(m.add_route("GET", "/a/b/c/d", RouteId::new(4)).is_err());

        assert_eq!(ids(&m, "GET", "/a/b/c/d"), (vec![0, 3], true));
        assert_eq!(ids(&m, "GET", "/a/b"), (vec![1], true));
        assert_eq!(ids(&m, "GET", "/a/x"), (vec![2], true));
        assert_eq!(ids(&m, "GET", "/a/b/c"), (vec![], false));

        m.compress();
        assert_eq!(ids(&m, "GET", "/a/b/c/d"), (vec![0, 3], true));
        assert_eq!(ids(&m, "GET", "/a/b"), (vec![1], true));
    }

    #[test]
    fn empty() {
        let m = TreeMatcher::new();
        assert!(m.is_empty());
        assert_eq!(ids(&m, "GET", "/"), (vec![], false));
    }

    #[test]
    fn path_without_leading_slash() {
        let m = build(&[("GET", "/"), ("GET", "/:id"), ("GET", "/*rest")], true);
        assert_eq!(ids(&m, "GET", "*"), (vec![], false));
        assert_eq!(ids(&m, "GET", "example.com"), (vec![], false));
        assert_eq!(ids(&m, "GET", ""), (vec![], false));
        assert_eq!(ids(&m, "GET", "/x"), (vec![1, 2], true));
    }
}
