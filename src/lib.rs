//! Route resolution engine.
//!
//! Routes are collected in a [`RouteTable`], in order. [`RouteTable::start`]
//! registers them into a [`PatternMatcher`] and yields an immutable
//! [`Router`]. When several routes match a request, the one defined first
//! wins. A [`Resolution`] also reports whether the path matched under some
//! other method, which separates "not found" from "method not allowed".
//!
//! ```
//! use nuclear_dispatch::route_table;
//!
//! let router = route_table! {
//!     GET "/r/:id" => "by id",
//!     GET "/r/*rest" => "rest",
//!     POST "/r" => "create"
//! }
//! .start()
//! .unwrap();
//!
//! let res = router.find_route("GET", "http://example.org/r/123").unwrap();
//! assert_eq!(res.data(), Some(&"by id"));
//! assert_eq!(res.params().unwrap().get("id"), Some("123"));
//!
//! let res = router.find_route("GET", "/r").unwrap();
//! assert!(res.is_method_not_allowed());
//! ```

#![forbid(unsafe_code)]

mod error;
mod matcher;
mod params;
mod route;
mod router;
mod router_macro;
mod strmap;
mod tree;

pub use self::error::{BuildError, ParseError};
pub use self::matcher::{Candidate, Candidates, PatternMatcher};
pub use self::params::Params;
pub use self::route::{Route, RouteId, RouteTable, RouterConfig};
pub use self::router::{Resolution, Router};
pub use self::tree::TreeMatcher;

pub use http::{Method, Uri};
