//! # ballistics_core - Ballistic Trajectory Calculation Engine
//!
//! `ballistics_core` computes drop, wind drift, impact velocity, impact
//! energy and a sampled trajectory curve for a single shot, using a
//! closed-form flat-fire model. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: The calculator is a pure function from input to result
//! - **Validated at the boundary**: Raw text is parsed once, in [`form`]
//! - **Display kept apart**: Formatting and chart state live in [`display`]
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use ballistics_core::calculations::trajectory::calculate;
//! use ballistics_core::form::ShotForm;
//!
//! let input = ShotForm::default().parse().unwrap();
//! let result = calculate(&input).unwrap();
//!
//! println!("{}", serde_json::to_string_pretty(&result).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Trajectory calculation (input, result, `calculate`)
//! - [`equations`] - Individual projectile formulas
//! - [`settings`] - Model constants as configuration
//! - [`form`] - Raw text fields to validated input
//! - [`display`] - Result formatting and chart datasets
//! - [`actions`] - Export/save placeholders
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod actions;
pub mod calculations;
pub mod display;
pub mod equations;
pub mod errors;
pub mod form;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, calculate_with_settings, BallisticsResult, ShotInput, TrajectoryPoint};
pub use display::{ResultsSummary, TrajectoryChart};
pub use errors::{CalcError, CalcResult};
pub use form::ShotForm;
pub use settings::CalculatorSettings;
