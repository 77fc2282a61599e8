//! # Calculator Settings
//!
//! Model constants for the trajectory calculation, gathered into one
//! JSON-serializable value. The defaults reproduce the standard model; a
//! settings file only needs to name the values it changes.
//!
//! ## Example
//!
//! ```rust
//! use ballistics_core::settings::CalculatorSettings;
//!
//! let settings = CalculatorSettings::from_json(r#"{ "trajectory_steps": 40 }"#).unwrap();
//! assert_eq!(settings.trajectory_steps, 40);
//! assert_eq!(settings.gravity_mps2, 9.81);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Standard gravitational acceleration (m/s²)
pub const STANDARD_GRAVITY_MPS2: f64 = 9.81;

/// Fraction of the head/tail wind added to the muzzle velocity
pub const DEFAULT_WIND_VELOCITY_COUPLING: f64 = 0.1;

/// Velocity loss per meter for a ballistic coefficient of 1.0 (m/s per m)
pub const DEFAULT_VELOCITY_LOSS_FACTOR: f64 = 0.01;

/// Number of equal range steps in the sampled trajectory curve
pub const DEFAULT_TRAJECTORY_STEPS: usize = 20;

/// Tunable constants of the trajectory model.
///
/// ## JSON Example
///
/// ```json
/// {
///   "gravity_mps2": 9.81,
///   "wind_velocity_coupling": 0.1,
///   "velocity_loss_factor": 0.01,
///   "trajectory_steps": 20
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    /// Gravitational acceleration (m/s²)
    pub gravity_mps2: f64,

    /// Head/tail wind to velocity coupling (dimensionless)
    pub wind_velocity_coupling: f64,

    /// Linear velocity loss factor, divided by the ballistic coefficient
    pub velocity_loss_factor: f64,

    /// Equal steps in the trajectory curve (the curve has steps + 1 points)
    pub trajectory_steps: usize,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        CalculatorSettings {
            gravity_mps2: STANDARD_GRAVITY_MPS2,
            wind_velocity_coupling: DEFAULT_WIND_VELOCITY_COUPLING,
            velocity_loss_factor: DEFAULT_VELOCITY_LOSS_FACTOR,
            trajectory_steps: DEFAULT_TRAJECTORY_STEPS,
        }
    }
}

impl CalculatorSettings {
    /// Parse settings from JSON and validate them.
    ///
    /// Missing keys take their default values.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let settings: CalculatorSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate settings values.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.gravity_mps2.is_finite() || self.gravity_mps2 <= 0.0 {
            return Err(CalcError::invalid_input(
                "gravity_mps2",
                self.gravity_mps2.to_string(),
                "Gravity must be a positive number",
            ));
        }
        if !self.wind_velocity_coupling.is_finite() {
            return Err(CalcError::invalid_input(
                "wind_velocity_coupling",
                self.wind_velocity_coupling.to_string(),
                "Coupling must be a finite number",
            ));
        }
        if !self.velocity_loss_factor.is_finite() || self.velocity_loss_factor < 0.0 {
            return Err(CalcError::invalid_input(
                "velocity_loss_factor",
                self.velocity_loss_factor.to_string(),
                "Velocity loss factor cannot be negative",
            ));
        }
        if self.trajectory_steps == 0 {
            return Err(CalcError::invalid_input(
                "trajectory_steps",
                "0",
                "Trajectory needs at least one step",
            ));
        }
        Ok(())
    }
}
