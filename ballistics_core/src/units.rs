//! # Unit Types
//!
//! Lightweight newtype wrappers for the unit conversions the calculator
//! performs. Each wraps a bare `f64` and serializes as a plain number.
//!
//! ## Units in Use
//!
//! The calculator works in the mixed units a shooter types into a form:
//! - Range: meters (m), with drop and drift reported in centimeters (cm)
//! - Projectile mass: grams (g), converted to kilograms (kg) for energy
//! - Wind direction: degrees, converted to radians for trigonometry
//!
//! ## Example
//!
//! ```rust
//! use ballistics_core::units::{Centimeters, Grams, Kilograms, Meters};
//!
//! let drop: Centimeters = Meters(0.25).into();
//! assert_eq!(drop.0, 25.0);
//!
//! let mass: Kilograms = Grams(9.0).into();
//! assert_eq!(mass.0, 0.009);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

impl From<Meters> for Centimeters {
    fn from(m: Meters) -> Self {
        Centimeters(m.0 * 100.0)
    }
}

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in grams
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grams(pub f64);

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

impl From<Grams> for Kilograms {
    fn from(g: Grams) -> Self {
        Kilograms(g.0 / 1000.0)
    }
}

// ============================================================================
// Angle Units
// ============================================================================

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0 * std::f64::consts::PI / 180.0)
    }
}

// ============================================================================
// Raw Value Access
// ============================================================================

macro_rules! impl_value {
    ($type:ty) => {
        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_value!(Centimeters);
impl_value!(Kilograms);
impl_value!(Radians);
