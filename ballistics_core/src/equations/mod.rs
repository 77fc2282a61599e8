//! # Ballistics Equations
//!
//! The fundamental formulas used by the calculations, kept in one place so
//! each can be checked on its own and the sign conventions are documented
//! once.
//!
//! ## Modules
//!
//! - [`projectile`] - Flat-fire free-fall drop, wind decomposition, linear
//!   velocity decay and kinetic energy
//!
//! ## Known Simplifications
//!
//! - No aerodynamic drag: the trajectory is pure free fall at constant speed
//! - Velocity decays linearly with range, scaled by the ballistic coefficient
//! - Head/tail wind changes the effective velocity through a fixed coupling

pub mod projectile;

pub use projectile::{
    adjusted_velocity,
    flight_time,
    free_fall_drop_cm,
    impact_velocity,
    kinetic_energy_j,
    velocity_loss_per_meter,
    wind_components,
    wind_drift_cm,
    zero_offset_cm,
};
