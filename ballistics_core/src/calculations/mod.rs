//! # Ballistic Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`trajectory`] - Drop, drift, impact velocity/energy and trajectory curve
//!   for a single shot, with optional sight zero correction

pub mod trajectory;

// Re-export commonly used types
pub use trajectory::{
    calculate, calculate_with_settings, BallisticsResult, ShotInput, TrajectoryPoint,
};
