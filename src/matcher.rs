//! The pattern matching capability the resolution engine is built on.

use crate::error::BuildError;
use crate::params::Params;
use crate::route::RouteId;

use smallvec::SmallVec;

/// One route whose method and pattern both match a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub id: RouteId,
    pub params: Params,
}

pub type Candidates = SmallVec<[Candidate; 2]>;

/// Structural matcher of paths against registered patterns.
///
/// Implementors are built through `&mut self` (`add_route`, `compress`) and
/// queried through `&self` only. After the build phase a matcher is read-only,
/// so `Send + Sync` lets a finished [`Router`](crate::Router) serve concurrent
/// queries without locking.
pub trait PatternMatcher: Default + Send + Sync {
    /// Registers `pattern` for `method` (already upper-cased).
    ///
    /// Fails with [`BuildError::DuplicateRoute`] when the same method and
    /// pattern were registered before.
    fn add_route(&mut self, method: &str, pattern: &str, id: RouteId) -> Result<(), BuildError>;

    /// Optimizes the internal representation. Must not change any answer.
    fn compress(&mut self);

    /// Returns every route registered for `method` whose pattern matches
    /// `path`, and whether `path` matches a pattern under any method at all.
    fn find_routes_and_path_matched(&self, method: &str, path: &str) -> (Candidates, bool);
}
