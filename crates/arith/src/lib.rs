//! # kairos-arith
//!
//! Civil-calendar arithmetic over wall-clock instants: differences between
//! two date/time values and interval application, with timezone offsets
//! and daylight-saving transitions accounted for.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Instant"] -->|"diff()"| B["Interval"]
//!     A -->|"add() / sub()"| A
//!     A -->|"add_wall() / sub_wall()"| A
//!     B -->|"rel_normalize()"| B
//!     A -->|"recompute_epoch()"| C["sse"]
//!     C -->|"derive_fields()"| A
//!     D["TzRules (kairos-zone)"] -.->|"offset_info / resolve_wall"| A
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use kairos_arith::{add, diff, Instant};
//!
//! let a = Instant::new(2023, 5, 10, 8, 15, 30, 0).unwrap();
//! let b = Instant::new(2023, 5, 12, 10, 5, 0, 0).unwrap();
//!
//! let span = diff(&a, &b);
//! assert_eq!((span.d, span.h, span.i, span.s), (2, 1, 49, 30));
//! assert!(!span.invert);
//!
//! // applying the difference back reconstructs the later instant
//! let back = add(&a, &span);
//! assert_eq!(back.sse, b.sse);
//! ```
//!
//! Two instants in the same named zone are differenced on their wall
//! clocks and corrected for any offset transition between them; everything
//! else is differenced on epoch order. The operations never fail: a rule
//! table without the data a correction needs makes that correction a
//! no-op.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `instant` | Wall-clock instants with offset and zone identity |
//! | `interval` | Relative time spans |
//! | `diff` | Difference between two instants |
//! | `shift` | Interval application, absolute and wall-clock |
//! | `normalize` | Range-limit borrows for fields and components |
//! | `epoch` | Epoch recomputation, field derivation, zone re-snap |
//! | `error` | Error types |

mod diff;
mod epoch;
mod error;
mod instant;
mod interval;
mod normalize;
mod shift;

pub use diff::{diff, diff_days};
pub use epoch::{derive_fields, recompute_epoch, resnap, Shift};
pub use error::ArithError;
pub use instant::{Instant, Zone};
pub use interval::Interval;
pub use normalize::{normalize, range_limit, rel_normalize};
pub use shift::{add, add_wall, sub, sub_wall};
