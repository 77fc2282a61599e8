//! # Shot Form
//!
//! The input boundary. A front end collects the seven shot fields as raw
//! text; [`ShotForm::parse`] turns them into a validated [`ShotInput`] or
//! reports the first field that is not a finite number. The calculator
//! never sees unparsed text.
//!
//! ## Example
//!
//! ```rust
//! use ballistics_core::form::ShotForm;
//!
//! let mut form = ShotForm::default();
//! form.weight = "abc".to_string();
//!
//! let err = form.parse().unwrap_err();
//! assert_eq!(err.field(), Some("weight"));
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::trajectory::ShotInput;
use crate::errors::{CalcError, CalcResult};

/// Raw text of the shot fields, as typed by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotForm {
    /// Muzzle velocity (m/s)
    pub velocity: String,
    /// Projectile weight (g)
    pub weight: String,
    /// Ballistic coefficient
    pub bc: String,
    /// Target distance (m)
    pub distance: String,
    /// Wind speed (m/s)
    pub wind_speed: String,
    /// Wind angle (degrees)
    pub wind_angle: String,
    /// Zero distance (m); `None` when the front end has no zero field
    #[serde(default)]
    pub zero_distance: Option<String>,
}

impl Default for ShotForm {
    fn default() -> Self {
        ShotForm {
            velocity: "800".to_string(),
            weight: "9".to_string(),
            bc: "0.5".to_string(),
            distance: "300".to_string(),
            wind_speed: "5".to_string(),
            wind_angle: "90".to_string(),
            zero_distance: Some("100".to_string()),
        }
    }
}

impl ShotForm {
    /// Parse and validate every field.
    ///
    /// Returns `InvalidInput` for the first field that is empty, not a number,
    /// or not finite, and for values outside their allowed range.
    pub fn parse(&self) -> CalcResult<ShotInput> {
        let input = ShotInput {
            velocity_mps: parse_field("velocity", &self.velocity)?,
            weight_g: parse_field("weight", &self.weight)?,
            ballistic_coefficient: parse_field("bc", &self.bc)?,
            distance_m: parse_field("distance", &self.distance)?,
            wind_speed_mps: parse_field("windSpeed", &self.wind_speed)?,
            wind_angle_deg: parse_field("windAngle", &self.wind_angle)?,
            zero_distance_m: match &self.zero_distance {
                Some(text) => Some(parse_field("zeroDistance", text)?),
                None => None,
            },
        };
        input.validate()?;
        Ok(input)
    }

    /// Set the zero distance (quick-select zero buttons).
    ///
    /// Returns `true` when the form already holds a usable velocity, i.e. the
    /// caller should recalculate right away.
    pub fn set_zero_distance(&mut self, zero_distance_m: f64) -> bool {
        self.zero_distance = Some(zero_distance_m.to_string());
        self.ready_for_recalculation()
    }

    /// Whether a dependent-field change should trigger a recalculation.
    pub fn ready_for_recalculation(&self) -> bool {
        matches!(parse_field("velocity", &self.velocity), Ok(v) if v > 0.0)
    }
}

/// Parse one text field as a finite `f64`.
fn parse_field(field: &str, text: &str) -> CalcResult<f64> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::invalid_input(
            field,
            trimmed,
            "Please enter a valid number",
        )),
    }
}
