//! # kairos-zone
//!
//! Timezone rule tables supplied by callers, and offset resolution against
//! them.
//!
//! This crate never reads a timezone database. A [`TzRules`] value is built
//! by the caller from already-resolved data: a zone name, an optional base
//! offset, and a time-ordered list of offset transitions. Queries answer
//! "which offset is in force at this epoch second" and "which epoch second
//! does this wall-clock reading denote".
//!
//! ## Quick Start
//!
//! ```ignore
//! use kairos_zone::TzRules;
//!
//! // US Eastern, 2023 rules only
//! let eastern = TzRules::new("America/New_York")?
//!     .with_base(-18000, false)
//!     .with_transition(1678604400, -14400, true)?
//!     .with_transition(1699164000, -18000, false)?;
//!
//! let info = eastern.offset_info(1680000000).unwrap();
//! assert_eq!(info.offset, -14400);
//! assert!(info.is_dst);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `rules` | Rule tables, transitions, offset queries |
//! | `resolve` | Wall-clock reading to epoch-second resolution |
//! | `error` | Error types |

mod error;
mod resolve;
mod rules;

pub use error::ZoneError;
pub use resolve::resolve_wall;
pub use rules::{OffsetInfo, Transition, TzRules};
