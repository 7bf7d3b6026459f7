//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing, navigation, config
//!     → tracing events (structured fields: path, route, params)
//!     → logging.rs subscriber (filtered, stderr)
//! ```
//!
//! # Design Decisions
//! - Library code only emits events; the binary installs the subscriber
//! - Dispatch decisions at debug, lifecycle at info

pub mod logging;

pub use logging::init_logging;
