//! Route table and path template matching for the Tessera console.
//!
//! This crate holds the declarative side of console navigation: the immutable
//! route tree declared at startup ([`RouteTable`]), the `:name` template
//! matcher ([`PathPattern`]), and the parameter-substituted view of the tree
//! ([`ResolvedTable`]) that menu and breadcrumb projection consume.
//!
//! Resolution never fails: an unknown path is an empty result and a missing
//! parameter value substitutes an empty segment, so the console shell keeps
//! rendering whatever the location bar holds.

pub mod error;
pub mod node;
pub mod pattern;
pub mod table;

pub use error::PatternError;
pub use node::{IconRef, RouteNode};
pub use pattern::{PathPattern, RouteParams, has_empty_segments, normalize_path, resolve_template};
pub use table::{ResolvedEntry, ResolvedTable, RouteTable};
