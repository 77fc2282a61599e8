//! # Closed-Form Projectile Formulas
//!
//! The individual formulas behind the trajectory calculation. Everything here
//! is a flat-fire, drag-free approximation: the projectile leaves the muzzle
//! horizontally along the line of fire and falls freely under gravity.
//!
//! ## Notation
//!
//! - `v` = Adjusted (effective) projectile velocity
//! - `d` = Range along the line of fire
//! - `t` = Time of flight to range `d`
//! - `g` = Gravitational acceleration
//! - `w` = Wind speed, `θ` = wind angle relative to the line of fire
//!
//! ## Sign Conventions
//!
//! - Drop: Positive downward, in centimeters
//! - Wind angle: 0° is a tail wind, 90° a full-value cross wind
//! - Trajectory height: Positive above the line of sight
//!
//! ## Units
//!
//! Velocities in m/s, ranges in m, times in s. Drops, drifts and offsets
//! come back in cm.

use crate::units::{Centimeters, Grams, Kilograms, Meters, Radians};

/// Split a wind vector into cross-wind and head/tail components.
///
/// # Formulas
/// - cross = w·sin(θ)
/// - head_tail = w·cos(θ)
///
/// # Returns
/// (cross_wind, head_tail_wind) in the units of `wind_speed`
#[inline]
pub fn wind_components(wind_speed: f64, angle: Radians) -> (f64, f64) {
    let cross = wind_speed * angle.value().sin();
    let head_tail = wind_speed * angle.value().cos();
    (cross, head_tail)
}

/// Effective velocity after the head/tail wind perturbs the muzzle velocity.
///
/// v_adj = v + head_tail · coupling
///
/// This is a linear coupling model, not a physical one.
#[inline]
pub fn adjusted_velocity(muzzle_velocity: f64, head_tail_wind: f64, coupling: f64) -> f64 {
    muzzle_velocity + head_tail_wind * coupling
}

/// Time to cover `distance` at constant `velocity`: t = d / v
#[inline]
pub fn flight_time(distance: f64, velocity: f64) -> f64 {
    distance / velocity
}

/// Free-fall drop after `time` seconds, in centimeters.
///
/// # Formula
/// h = ½·g·t²
#[inline]
pub fn free_fall_drop_cm(gravity: f64, time: f64) -> f64 {
    let drop_m = Meters(0.5 * gravity * time * time);
    Centimeters::from(drop_m).value()
}

/// Lateral drift from a cross wind held for `time` seconds, in centimeters.
///
/// drift = cross · t
#[inline]
pub fn wind_drift_cm(cross_wind: f64, time: f64) -> f64 {
    Centimeters::from(Meters(cross_wind * time)).value()
}

/// Velocity lost per meter of travel: loss_factor / BC
#[inline]
pub fn velocity_loss_per_meter(loss_factor: f64, ballistic_coefficient: f64) -> f64 {
    loss_factor / ballistic_coefficient
}

/// Remaining velocity after `distance` meters of linear decay, floored at zero.
#[inline]
pub fn impact_velocity(velocity: f64, distance: f64, loss_per_meter: f64) -> f64 {
    (velocity - distance * loss_per_meter).max(0.0)
}

/// Kinetic energy in joules: E = ½·m·v²
#[inline]
pub fn kinetic_energy_j(mass: Grams, velocity: f64) -> f64 {
    let mass_kg = Kilograms::from(mass);
    0.5 * mass_kg.value() * velocity * velocity
}

/// Sight-line correction at range `d` for a sight zeroed at `zero_distance`.
///
/// The sight line is tilted so it meets the trajectory again at the zero.
/// Up to the zero the correction grows linearly from 0 to `drop_at_zero`;
/// beyond it the correction is held at `drop_at_zero`.
///
/// ```text
/// offset(d) = d / zero · drop_at_zero     for d ≤ zero
/// offset(d) = drop_at_zero                for d > zero
/// ```
///
/// A zero distance of 0 means no correction at any range.
#[inline]
pub fn zero_offset_cm(d: f64, zero_distance: f64, drop_at_zero: f64) -> f64 {
    if d > zero_distance {
        drop_at_zero
    } else if zero_distance > 0.0 {
        d / zero_distance * drop_at_zero
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Degrees;
    use approx::assert_relative_eq;

    #[test]
    fn test_wind_components_full_cross() {
        let (cross, head_tail) = wind_components(5.0, Degrees(90.0).into());
        assert_relative_eq!(cross, 5.0);
        assert!(head_tail.abs() < 1e-12);
    }

    #[test]
    fn test_wind_components_tail() {
        let (cross, head_tail) = wind_components(4.0, Degrees(0.0).into());
        assert_eq!(cross, 0.0);
        assert_eq!(head_tail, 4.0);
    }

    #[test]
    fn test_adjusted_velocity() {
        assert_relative_eq!(adjusted_velocity(800.0, -10.0, 0.1), 799.0);
        assert_relative_eq!(adjusted_velocity(800.0, 10.0, 0.1), 801.0);
    }

    #[test]
    fn test_free_fall_drop() {
        // ½ · 9.81 · 0.375² = 0.68977 m
        assert_relative_eq!(free_fall_drop_cm(9.81, 0.375), 68.9766, epsilon = 1e-3);
        assert_eq!(free_fall_drop_cm(9.81, 0.0), 0.0);
    }

    #[test]
    fn test_wind_drift() {
        assert_relative_eq!(wind_drift_cm(5.0, 0.375), 187.5);
    }

    #[test]
    fn test_impact_velocity_clamped() {
        let loss = velocity_loss_per_meter(0.01, 0.5);
        assert_relative_eq!(loss, 0.02);
        assert_relative_eq!(impact_velocity(800.0, 300.0, loss), 794.0);
        assert_eq!(impact_velocity(100.0, 1.0e6, loss), 0.0);
    }

    #[test]
    fn test_kinetic_energy() {
        // ½ · 0.009 · 794² = 2836.96 J
        assert_relative_eq!(kinetic_energy_j(Grams(9.0), 794.0), 2836.962, epsilon = 1e-3);
    }

    #[test]
    fn test_zero_offset() {
        assert_eq!(zero_offset_cm(0.0, 100.0, 7.5), 0.0);
        assert_relative_eq!(zero_offset_cm(50.0, 100.0, 7.5), 3.75);
        assert_relative_eq!(zero_offset_cm(100.0, 100.0, 7.5), 7.5);
        assert_relative_eq!(zero_offset_cm(250.0, 100.0, 7.5), 7.5);
        assert_eq!(zero_offset_cm(0.0, 0.0, 0.0), 0.0);
    }
}
