//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Registration (before or after start):
//!     pattern string
//!     → normalize.rs (split into segments)
//!     → pattern.rs (literal / {param} classification, fail fast)
//!     → table.rs (append in registration order)
//!
//! Dispatch (per location change):
//!     raw path
//!     → normalize.rs
//!     → matcher.rs (equal length, exact literals, most specific wins)
//!     → router.rs (build Context, invoke handler or not-found hook)
//! ```
//!
//! # Design Decisions
//! - Patterns parsed once; dispatch never fails
//! - Deterministic: same table and path always select the same route
//! - Literal beats parameter at the first differing position; ties go to
//!   the earliest registration

pub mod context;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod pattern;
pub mod router;
pub mod table;

pub use context::{Context, Handler, Params};
pub use error::{PatternError, RouterError, RouterResult};
pub use matcher::RouteMatch;
pub use normalize::normalize;
pub use pattern::{RoutePattern, Segment};
pub use router::{Resolved, Router};
pub use table::{RouteEntry, RouteTable};
