//! # Unit Types
//!
//! Type-safe wrapper for the one unit this crate deals in: millimetres.
//! EN 1090-2 states diameters and clearances in mm throughout, so a
//! single newtype over `f64` covers the whole surface. Serialization is
//! transparent: a `Millimeters` value is a bare number in JSON.
//!
//! ## Example
//!
//! ```rust
//! use en1090_core::units::Millimeters;
//!
//! let clearance = Millimeters(2.0);
//! assert_eq!((clearance * 2.0).value(), 4.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl Millimeters {
    /// Create from raw f64 value
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw f64 value
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Add for Millimeters {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Millimeters {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul<f64> for Millimeters {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Div<f64> for Millimeters {
    type Output = Self;
    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Millimeters(24.0);
        let b = Millimeters(6.0);
        assert_eq!((a + b).0, 30.0);
        assert_eq!((a - b).0, 18.0);
        assert_eq!((a * 1.5).0, 36.0);
        assert_eq!((a / 2.0).0, 12.0);
    }

    #[test]
    fn test_serialization() {
        let d_nom = Millimeters(16.5);
        let json = serde_json::to_string(&d_nom).unwrap();
        assert_eq!(json, "16.5");

        let roundtrip: Millimeters = serde_json::from_str(&json).unwrap();
        assert_eq!(d_nom, roundtrip);
    }
}
