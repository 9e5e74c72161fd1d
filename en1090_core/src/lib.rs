//! # en1090_core - Steel Execution Hole Clearances
//!
//! `en1090_core` implements the nominal hole-clearance clause of
//! UNE-EN 1090-2:2011 (execution of steel structures), 6.6 "Perforación",
//! Table 11: given a bolt or pin nominal diameter and a hole type, it
//! returns the nominal clearance in millimetres.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: a [`drilling::Perforation`] is an immutable value;
//!   every query on it is a pure function
//! - **Total over labels**: hole-type labels never fail to resolve -
//!   unrecognized designations fall back to the long slotted rule
//! - **Structured errors**: the single failure point (a non-positive
//!   diameter) is a typed, serializable error, not a string
//!
//! ## Quick Start
//!
//! ```rust
//! use en1090_core::{HoleType, Perforation};
//!
//! // Bind a check to an M16 bolt
//! let bolt = Perforation::new(16.0).unwrap();
//!
//! // Whole-mm steps for round and short slotted holes
//! assert_eq!(bolt.nominal_clearance(HoleType::RoundNormal).value(), 2.0);
//!
//! // 1.5 x d_nom for long slotted holes
//! assert_eq!(bolt.nominal_clearance(HoleType::LongSlotted).value(), 24.0);
//! ```
//!
//! ## Modules
//!
//! - [`drilling`] - Hole types and the Table 11 clearance rules
//! - [`errors`] - Structured error types
//! - [`units`] - Type-safe millimetre wrapper

pub mod drilling;
pub mod errors;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use drilling::{HoleType, Perforation};
pub use errors::{CalcError, CalcResult};
pub use units::Millimeters;
