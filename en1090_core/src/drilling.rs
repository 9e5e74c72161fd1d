//! # Hole Execution (Holing)
//!
//! Nominal hole clearances for bolts and pins per UNE-EN 1090-2:2011,
//! 6.6 "Perforación" (holing), Table 11.
//!
//! ## Overview
//!
//! Holes for connections with mechanical fasteners and pins are executed
//! with a nominal clearance over the fastener diameter:
//!
//! ```text
//! hole size = d_nom + nominal clearance
//! ```
//!
//! The clearance depends on the hole category and, for all but long
//! slotted holes, on the nominal diameter `d_nom` of the bolt or pin.
//!
//! ## Clearance Summary (Table 11)
//!
//! | Hole type       | Clearance (mm)                                  |
//! |-----------------|-------------------------------------------------|
//! | Normal round    | 1 (d < 12), 2 (12-14), 2 (14-24), 3 (d > 24)    |
//! | Oversize round  | 3 (d ≤ 14), 4 (14-22), 6 (d = 24), 8 otherwise  |
//! | Short slotted   | 4 (d ≤ 14), 6 (14-22), 8 (d = 24), 10 otherwise |
//! | Long slotted    | 1.5 × d_nom                                     |
//!
//! Hole types are selected by the designation printed in the standard,
//! matched case-insensitively; anything unrecognized falls back to the
//! long slotted rule (see [`HoleType::from_label`]).
//!
//! ## Reference
//!
//! UNE-EN 1090-2:2011, 6.6 Perforación, Table 11

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::Millimeters;

/// UNE-EN 1090-2 clause references for hole execution.
///
/// These constants provide traceable references to the steel execution
/// standard for reports and console output.
pub mod en_ref {
    /// Execution of holes for fasteners and pins
    pub const HOLING: &str = "UNE-EN 1090-2:2011 6.6";
    /// Nominal clearances for bolts and pins
    pub const NOMINAL_CLEARANCES: &str = "UNE-EN 1090-2:2011 Table 11";
}

/// Hole categories of Table 11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HoleType {
    /// Normal round holes ("Agujeros redondos normales")
    RoundNormal,

    /// Oversize round holes ("Agujeros redondos de tamaño extra")
    RoundOversize,

    /// Short slotted holes ("Agujeros ovalados cortos")
    ShortSlotted,

    /// Long slotted holes ("Agujeros ovalados largos")
    ///
    /// Also the fallback for unrecognized designations.
    LongSlotted,
}

impl HoleType {
    /// All Table 11 hole categories, in table order
    pub const ALL: [HoleType; 4] = [
        HoleType::RoundNormal,
        HoleType::RoundOversize,
        HoleType::ShortSlotted,
        HoleType::LongSlotted,
    ];

    /// Select a hole type from its designation in the standard.
    ///
    /// Matching is case-insensitive against the three round/short
    /// designations; any other string, including empty or misspelled
    /// labels, selects [`HoleType::LongSlotted`]. The fallback is
    /// deliberate and is not an error path.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "agujeros redondos normales" => HoleType::RoundNormal,
            "agujeros redondos de tamaño extra" => HoleType::RoundOversize,
            "agujeros ovalados cortos" => HoleType::ShortSlotted,
            _ => HoleType::LongSlotted,
        }
    }

    /// The designation printed in Table 11 for this hole type
    pub fn label(&self) -> &'static str {
        match self {
            HoleType::RoundNormal => "Agujeros redondos normales",
            HoleType::RoundOversize => "Agujeros redondos de tamaño extra",
            HoleType::ShortSlotted => "Agujeros ovalados cortos",
            HoleType::LongSlotted => "Agujeros ovalados largos",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            HoleType::RoundNormal => "Normal round holes",
            HoleType::RoundOversize => "Oversize round holes",
            HoleType::ShortSlotted => "Short slotted holes",
            HoleType::LongSlotted => "Long slotted holes",
        }
    }
}

impl std::fmt::Display for HoleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Hole execution check bound to one fastener diameter.
///
/// Holds the nominal diameter of the bolt or pin going through the hole
/// and answers Table 11 clearance queries for it. The diameter is
/// validated once at construction and immutable afterwards, so one
/// `Perforation` can serve any number of lookups.
///
/// ## Example
///
/// ```rust
/// use en1090_core::drilling::{HoleType, Perforation};
///
/// let bolt = Perforation::new(24.0).unwrap();
/// assert_eq!(bolt.round_oversize_clearance(), 6);
/// assert_eq!(bolt.nominal_clearance(HoleType::LongSlotted).value(), 36.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Perforation {
    /// Bolt or pin nominal diameter
    d_nom: Millimeters,
}

impl Perforation {
    /// Create a check for a bolt or pin of nominal diameter `d_nom_mm`.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::InvalidDiameter`] when `d_nom_mm <= 0`; no
    /// `Perforation` is produced.
    pub fn new(d_nom_mm: f64) -> CalcResult<Self> {
        if d_nom_mm <= 0.0 {
            return Err(CalcError::invalid_diameter(
                d_nom_mm,
                "nominal diameter must be greater than zero",
            ));
        }
        Ok(Self {
            d_nom: Millimeters(d_nom_mm),
        })
    }

    /// The bolt or pin nominal diameter this check is bound to
    pub fn d_nom(&self) -> Millimeters {
        self.d_nom
    }

    /// Nominal clearance for bolts and pins per Table 11.
    ///
    /// Pure function of `(d_nom, hole_type)`: whole-mm steps for the
    /// round and short slotted categories, `1.5 × d_nom` for long
    /// slotted holes.
    pub fn nominal_clearance(&self, hole_type: HoleType) -> Millimeters {
        match hole_type {
            HoleType::RoundNormal => Millimeters(f64::from(self.round_normal_clearance())),
            HoleType::RoundOversize => Millimeters(f64::from(self.round_oversize_clearance())),
            HoleType::ShortSlotted => Millimeters(f64::from(self.short_slotted_clearance())),
            HoleType::LongSlotted => Millimeters(self.long_slotted_clearance()),
        }
    }

    /// Nominal clearance from a free-form hole type label.
    ///
    /// The label goes through [`HoleType::from_label`], so unrecognized
    /// labels resolve to the long slotted rule rather than failing.
    pub fn clearance_for_label(&self, label: &str) -> Millimeters {
        self.nominal_clearance(HoleType::from_label(label))
    }

    /// Clearance for normal round holes (Table 11, first row).
    ///
    /// Drawing-office practice uses 2 mm from M12 up, so the 12-14 mm
    /// and 14-24 mm tiers carry the same value.
    #[allow(clippy::if_same_then_else)] // Table 11 rows kept distinct
    pub fn round_normal_clearance(&self) -> u32 {
        let d = self.d_nom.value();
        if d < 12.0 {
            1
        } else if d <= 14.0 {
            // drawing-office practice: 2 mm for M12 and above
            2
        } else if d <= 24.0 {
            2
        } else {
            3
        }
    }

    /// Clearance for oversize round holes (Table 11, second row).
    ///
    /// Diameters strictly between 22 and 24 mm have no dedicated tier in
    /// this encoding of the table and fall to the final 8 mm branch.
    pub fn round_oversize_clearance(&self) -> u32 {
        let d = self.d_nom.value();
        if d <= 14.0 {
            3
        } else if d <= 22.0 {
            4
        } else if d == 24.0 {
            6
        } else {
            8
        }
    }

    /// Clearance for short slotted holes (Table 11, third row)
    pub fn short_slotted_clearance(&self) -> u32 {
        let d = self.d_nom.value();
        if d <= 14.0 {
            4
        } else if d <= 22.0 {
            6
        } else if d == 24.0 {
            8
        } else {
            10
        }
    }

    /// Clearance for long slotted holes (Table 11, fourth row).
    ///
    /// Proportional rather than stepped: `1.5 × d_nom`.
    pub fn long_slotted_clearance(&self) -> f64 {
        1.5 * self.d_nom.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_diameters() {
        assert!(Perforation::new(0.0).is_err());
        assert!(Perforation::new(-12.0).is_err());

        let error = Perforation::new(-12.0).unwrap_err();
        assert_eq!(error.error_code(), "INVALID_DIAMETER");
    }

    #[test]
    fn test_accepts_positive_diameters() {
        assert!(Perforation::new(0.1).is_ok());

        let bolt = Perforation::new(16.0).unwrap();
        assert_eq!(bolt.d_nom(), Millimeters(16.0));
    }

    #[test]
    fn test_round_normal_steps() {
        assert_eq!(Perforation::new(10.0).unwrap().round_normal_clearance(), 1);
        assert_eq!(Perforation::new(12.0).unwrap().round_normal_clearance(), 2);
        assert_eq!(Perforation::new(14.0).unwrap().round_normal_clearance(), 2);
        assert_eq!(Perforation::new(20.0).unwrap().round_normal_clearance(), 2);
        assert_eq!(Perforation::new(24.0).unwrap().round_normal_clearance(), 2);
        assert_eq!(Perforation::new(30.0).unwrap().round_normal_clearance(), 3);
    }

    #[test]
    fn test_round_oversize_steps() {
        assert_eq!(Perforation::new(14.0).unwrap().round_oversize_clearance(), 3);
        assert_eq!(Perforation::new(20.0).unwrap().round_oversize_clearance(), 4);
        assert_eq!(Perforation::new(22.0).unwrap().round_oversize_clearance(), 4);
        assert_eq!(Perforation::new(24.0).unwrap().round_oversize_clearance(), 6);
        assert_eq!(Perforation::new(30.0).unwrap().round_oversize_clearance(), 8);
    }

    #[test]
    fn test_short_slotted_steps() {
        assert_eq!(Perforation::new(14.0).unwrap().short_slotted_clearance(), 4);
        assert_eq!(Perforation::new(20.0).unwrap().short_slotted_clearance(), 6);
        assert_eq!(Perforation::new(24.0).unwrap().short_slotted_clearance(), 8);
        assert_eq!(Perforation::new(30.0).unwrap().short_slotted_clearance(), 10);
    }

    #[test]
    fn test_gap_between_22_and_24_falls_to_last_tier() {
        // 23 mm has no dedicated row for these hole types; the encoding
        // sends it to the final branch, not to the d = 24 tier.
        let pin = Perforation::new(23.0).unwrap();
        assert_eq!(pin.round_oversize_clearance(), 8);
        assert_eq!(pin.short_slotted_clearance(), 10);
    }

    #[test]
    fn test_long_slotted_is_proportional() {
        assert_eq!(Perforation::new(10.0).unwrap().long_slotted_clearance(), 15.0);
        assert_eq!(Perforation::new(16.0).unwrap().long_slotted_clearance(), 24.0);
    }

    #[test]
    fn test_dispatch_matches_rules() {
        let bolt = Perforation::new(16.0).unwrap();
        assert_eq!(bolt.nominal_clearance(HoleType::RoundNormal).value(), 2.0);
        assert_eq!(bolt.nominal_clearance(HoleType::RoundOversize).value(), 4.0);
        assert_eq!(bolt.nominal_clearance(HoleType::ShortSlotted).value(), 6.0);
        assert_eq!(bolt.nominal_clearance(HoleType::LongSlotted).value(), 24.0);
    }

    #[test]
    fn test_label_matching_is_case_insensitive() {
        assert_eq!(
            HoleType::from_label("AGUJEROS REDONDOS NORMALES"),
            HoleType::RoundNormal
        );
        assert_eq!(
            HoleType::from_label("agujeros redondos normales"),
            HoleType::RoundNormal
        );
        assert_eq!(
            HoleType::from_label("Agujeros Redondos de TAMAÑO Extra"),
            HoleType::RoundOversize
        );
        assert_eq!(
            HoleType::from_label("agujeros ovalados cortos"),
            HoleType::ShortSlotted
        );
    }

    #[test]
    fn test_unrecognized_labels_fall_back_to_long_slotted() {
        assert_eq!(HoleType::from_label("xyz"), HoleType::LongSlotted);
        assert_eq!(HoleType::from_label(""), HoleType::LongSlotted);
        // near miss: truncated designation is still unrecognized
        assert_eq!(
            HoleType::from_label("agujeros redondos normale"),
            HoleType::LongSlotted
        );

        let bolt = Perforation::new(10.0).unwrap();
        assert_eq!(bolt.clearance_for_label("xyz").value(), 15.0);
    }

    #[test]
    fn test_labels_round_trip() {
        for hole_type in HoleType::ALL {
            assert_eq!(HoleType::from_label(hole_type.label()), hole_type);
        }
    }

    #[test]
    fn test_repeated_calls_are_stable() {
        let bolt = Perforation::new(14.0).unwrap();
        let first = bolt.nominal_clearance(HoleType::ShortSlotted);
        let second = bolt.nominal_clearance(HoleType::ShortSlotted);
        assert_eq!(first, second);
    }

    #[test]
    fn test_hole_type_serialization() {
        let json = serde_json::to_string(&HoleType::RoundOversize).unwrap();
        assert_eq!(json, "\"RoundOversize\"");

        let parsed: HoleType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, HoleType::RoundOversize);
    }

    #[test]
    fn test_perforation_serialization() {
        let bolt = Perforation::new(16.0).unwrap();
        let json = serde_json::to_string(&bolt).unwrap();
        assert_eq!(json, "{\"d_nom\":16.0}");
    }

    #[test]
    fn test_display_names() {
        assert_eq!(HoleType::RoundNormal.to_string(), "Normal round holes");
        assert_eq!(HoleType::LongSlotted.to_string(), "Long slotted holes");
    }
}
