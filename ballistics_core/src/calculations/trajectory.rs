//! # Trajectory Calculation
//!
//! Computes drop, wind drift, impact velocity, impact energy, time of flight
//! and a sampled trajectory curve for a single shot.
//!
//! ## Assumptions
//!
//! - Flat fire: the bore is level with the line of sight at the muzzle
//! - Constant effective velocity for flight time, no drag integration
//! - Linear velocity decay with range, scaled by 1 / BC
//! - Head/tail wind shifts the effective velocity; cross wind drifts linearly
//! - Optional sight zero: the sight line is tilted so the trajectory crosses
//!   it again at the zero distance
//!
//! ## Example
//!
//! ```rust
//! use ballistics_core::calculations::trajectory::{calculate, ShotInput};
//!
//! let input = ShotInput {
//!     velocity_mps: 800.0,
//!     weight_g: 9.0,
//!     ballistic_coefficient: 0.5,
//!     distance_m: 300.0,
//!     wind_speed_mps: 5.0,
//!     wind_angle_deg: 90.0,
//!     zero_distance_m: Some(100.0),
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.time_of_flight_s - 0.375).abs() < 1e-9);
//! assert!((result.drop_cm - 61.31).abs() < 0.01);
//! assert_eq!(result.trajectory.len(), 21);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::{
    adjusted_velocity, flight_time, free_fall_drop_cm, impact_velocity, kinetic_energy_j,
    velocity_loss_per_meter, wind_components, wind_drift_cm, zero_offset_cm,
};
use crate::errors::{CalcError, CalcResult};
use crate::settings::CalculatorSettings;
use crate::units::{Degrees, Grams, Radians};

/// Input parameters for a single shot.
///
/// ## JSON Example
///
/// ```json
/// {
///   "velocity_mps": 800.0,
///   "weight_g": 9.0,
///   "ballistic_coefficient": 0.5,
///   "distance_m": 300.0,
///   "wind_speed_mps": 5.0,
///   "wind_angle_deg": 90.0,
///   "zero_distance_m": 100.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotInput {
    /// Muzzle velocity in m/s
    pub velocity_mps: f64,

    /// Projectile mass in grams
    pub weight_g: f64,

    /// Ballistic coefficient (dimensionless)
    pub ballistic_coefficient: f64,

    /// Target range in meters
    pub distance_m: f64,

    /// Wind speed in m/s
    pub wind_speed_mps: f64,

    /// Wind direction relative to the line of fire, degrees (0 = tail wind, 90 = from the side)
    pub wind_angle_deg: f64,

    /// Range at which the sight is zeroed, in meters. `None` disables zero correction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zero_distance_m: Option<f64>,
}

impl ShotInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        let fields = [
            ("velocity", self.velocity_mps),
            ("weight", self.weight_g),
            ("bc", self.ballistic_coefficient),
            ("distance", self.distance_m),
            ("windSpeed", self.wind_speed_mps),
            ("windAngle", self.wind_angle_deg),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Must be a finite number",
                ));
            }
        }

        if self.velocity_mps <= 0.0 {
            return Err(CalcError::invalid_input(
                "velocity",
                self.velocity_mps.to_string(),
                "Velocity must be positive",
            ));
        }
        if self.weight_g < 0.0 {
            return Err(CalcError::invalid_input(
                "weight",
                self.weight_g.to_string(),
                "Weight cannot be negative",
            ));
        }
        if self.ballistic_coefficient <= 0.0 {
            return Err(CalcError::invalid_input(
                "bc",
                self.ballistic_coefficient.to_string(),
                "Ballistic coefficient must be positive",
            ));
        }
        if self.distance_m < 0.0 {
            return Err(CalcError::invalid_input(
                "distance",
                self.distance_m.to_string(),
                "Distance cannot be negative",
            ));
        }
        if self.wind_speed_mps < 0.0 {
            return Err(CalcError::invalid_input(
                "windSpeed",
                self.wind_speed_mps.to_string(),
                "Wind speed cannot be negative",
            ));
        }
        if let Some(zero) = self.zero_distance_m {
            if !zero.is_finite() || zero < 0.0 {
                return Err(CalcError::invalid_input(
                    "zeroDistance",
                    zero.to_string(),
                    "Zero distance must be a non-negative number",
                ));
            }
        }
        Ok(())
    }

    /// Range covered by the trajectory curve: max(distance, zero distance)
    pub fn curve_span_m(&self) -> f64 {
        self.distance_m.max(self.zero_distance_m.unwrap_or(0.0))
    }
}

/// A single sample of the trajectory curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    /// Range along the line of fire (m)
    pub x_m: f64,

    /// Height relative to the line of sight (cm, negative = below)
    pub y_cm: f64,
}

/// Results from a trajectory calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "drop_cm": 61.31,
///   "wind_drift_cm": 187.5,
///   "impact_velocity_mps": 794.0,
///   "impact_energy_j": 2836.96,
///   "time_of_flight_s": 0.375,
///   "trajectory": [{ "x_m": 0.0, "y_cm": 0.0 }, { "x_m": 15.0, "y_cm": 1.08 }],
///   "zero_drop_cm": 7.66
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallisticsResult {
    /// Drop at the target (cm). With a zero, relative to the sight line:
    /// negative means the impact is above the line of sight.
    pub drop_cm: f64,

    /// Lateral drift at the target (cm)
    pub wind_drift_cm: f64,

    /// Remaining velocity at the target (m/s), never negative
    pub impact_velocity_mps: f64,

    /// Kinetic energy at the target (J)
    pub impact_energy_j: f64,

    /// Time of flight to the target (s)
    pub time_of_flight_s: f64,

    /// Trajectory curve from the muzzle to max(distance, zero distance)
    pub trajectory: Vec<TrajectoryPoint>,

    /// Free-fall drop accumulated by the zero distance (cm), when zeroed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zero_drop_cm: Option<f64>,
}

impl BallisticsResult {
    /// Last sampled point of the trajectory curve
    pub fn final_point(&self) -> Option<&TrajectoryPoint> {
        self.trajectory.last()
    }
}

/// Calculate a shot with the default model settings.
///
/// # Returns
///
/// * `Ok(BallisticsResult)` - Calculation results
/// * `Err(CalcError)` - If inputs are invalid or the head wind leaves no forward velocity
pub fn calculate(input: &ShotInput) -> CalcResult<BallisticsResult> {
    calculate_with_settings(input, &CalculatorSettings::default())
}

/// Calculate a shot with explicit model settings.
pub fn calculate_with_settings(
    input: &ShotInput,
    settings: &CalculatorSettings,
) -> CalcResult<BallisticsResult> {
    settings.validate()?;
    input.validate()?;

    let g = settings.gravity_mps2;

    // Wind decomposition
    let angle: Radians = Degrees(input.wind_angle_deg).into();
    let (cross_wind, head_tail_wind) = wind_components(input.wind_speed_mps, angle);

    let velocity = adjusted_velocity(
        input.velocity_mps,
        head_tail_wind,
        settings.wind_velocity_coupling,
    );
    if !velocity.is_finite() || velocity <= 0.0 {
        return Err(CalcError::invalid_input(
            "velocity",
            input.velocity_mps.to_string(),
            format!(
                "Head wind reduces effective velocity to {:.3} m/s; it must stay positive",
                velocity
            ),
        ));
    }

    // Sight correction at the zero range
    let zero = match input.zero_distance_m {
        Some(zero_m) => {
            let drop_at_zero = free_fall_drop_cm(g, flight_time(zero_m, velocity));
            ensure_finite("zeroDistance", zero_m, drop_at_zero)?;
            Some((zero_m, drop_at_zero))
        }
        None => None,
    };

    // Bounds every sample of the curve as well, since the span is max(distance, zero)
    let time_of_flight_s = flight_time(input.distance_m, velocity);
    let raw_drop_cm = free_fall_drop_cm(g, time_of_flight_s);
    ensure_finite("distance", input.distance_m, raw_drop_cm)?;
    let drop_cm = match zero {
        Some((_, drop_at_zero)) => raw_drop_cm - drop_at_zero,
        None => raw_drop_cm,
    };

    let wind_drift_cm = wind_drift_cm(cross_wind, time_of_flight_s);
    ensure_finite("windSpeed", input.wind_speed_mps, wind_drift_cm)?;

    let loss = velocity_loss_per_meter(settings.velocity_loss_factor, input.ballistic_coefficient);
    let impact_velocity_mps = impact_velocity(velocity, input.distance_m, loss);
    let impact_energy_j = kinetic_energy_j(Grams(input.weight_g), impact_velocity_mps);
    ensure_finite("velocity", input.velocity_mps, impact_energy_j)?;

    let trajectory = sample_trajectory(
        input.curve_span_m(),
        velocity,
        zero,
        g,
        settings.trajectory_steps,
    );

    Ok(BallisticsResult {
        drop_cm,
        wind_drift_cm,
        impact_velocity_mps,
        impact_energy_j,
        time_of_flight_s,
        trajectory,
        zero_drop_cm: zero.map(|(_, drop_at_zero)| drop_at_zero),
    })
}

/// Reject a shot whose derived quantity overflowed even though its inputs are finite.
fn ensure_finite(field: &str, input_value: f64, derived: f64) -> CalcResult<()> {
    if derived.is_finite() {
        Ok(())
    } else {
        Err(CalcError::invalid_input(
            field,
            input_value.to_string(),
            "Value is out of range for this shot; the result overflows",
        ))
    }
}

/// Sample `steps + 1` evenly spaced points from the muzzle to `span_m`.
///
/// `zero` is `(zero_distance_m, drop_at_zero_cm)` when the sight is zeroed.
fn sample_trajectory(
    span_m: f64,
    velocity: f64,
    zero: Option<(f64, f64)>,
    gravity: f64,
    steps: usize,
) -> Vec<TrajectoryPoint> {
    (0..=steps)
        .map(|i| {
            // Last sample lands exactly on the span
            let x_m = if i == steps {
                span_m
            } else {
                span_m / steps as f64 * i as f64
            };
            let raw_cm = free_fall_drop_cm(gravity, flight_time(x_m, velocity));
            let offset_cm = zero
                .map(|(zero_m, drop_at_zero)| zero_offset_cm(x_m, zero_m, drop_at_zero))
                .unwrap_or(0.0);
            TrajectoryPoint {
                x_m,
                y_cm: offset_cm - raw_cm,
            }
        })
        .collect()
}
