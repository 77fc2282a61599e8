//! # Result Display
//!
//! Output side of the calculator: turns a [`BallisticsResult`] into
//! fixed-precision text fields and chart datasets. The calculator itself
//! knows nothing about this module.
//!
//! - [`ResultsSummary`] - the five result fields plus zero information, as text
//! - [`TrajectoryChart`] - chart handle owned by the front end; every render
//!   replaces its datasets completely
//!
//! ## Example
//!
//! ```rust
//! use ballistics_core::calculations::trajectory::calculate;
//! use ballistics_core::display::{ResultsSummary, TrajectoryChart};
//! use ballistics_core::form::ShotForm;
//!
//! let input = ShotForm::default().parse().unwrap();
//! let result = calculate(&input).unwrap();
//!
//! let summary = ResultsSummary::from_result(&result, input.zero_distance_m);
//! assert_eq!(summary.time_of_flight, "0.375");
//!
//! let mut chart = TrajectoryChart::new();
//! chart.render(&result, input.zero_distance_m);
//! assert_eq!(chart.labels.len(), 21);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::trajectory::{BallisticsResult, TrajectoryPoint};

/// Format `value` with `precision` decimals. Anything that rounds to zero
/// prints without a minus sign.
pub fn fixed(value: f64, precision: usize) -> String {
    let text = format!("{:.*}", precision, value);
    match text.strip_prefix('-') {
        Some(magnitude) if magnitude.chars().all(|c| c == '0' || c == '.') => {
            magnitude.to_string()
        }
        _ => text,
    }
}

/// Result fields formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsSummary {
    /// Drop at the target, cm, 1 decimal
    pub drop: String,
    /// Wind drift, cm, 1 decimal
    pub wind_drift: String,
    /// Impact velocity, m/s, 1 decimal
    pub impact_velocity: String,
    /// Impact energy, J, no decimals
    pub impact_energy: String,
    /// Time of flight, s, 3 decimals
    pub time_of_flight: String,
    /// Zero summary, e.g. "Zeroed at 100 m"
    pub zero_info: Option<String>,
    /// Vertical correction at the target, e.g. "61.3 cm"
    pub vertical_correction: Option<String>,
}

impl ResultsSummary {
    /// Format a result. `zero_distance_m` is the zero the shot was computed with.
    pub fn from_result(result: &BallisticsResult, zero_distance_m: Option<f64>) -> Self {
        ResultsSummary {
            drop: fixed(result.drop_cm, 1),
            wind_drift: fixed(result.wind_drift_cm, 1),
            impact_velocity: fixed(result.impact_velocity_mps, 1),
            impact_energy: fixed(result.impact_energy_j, 0),
            time_of_flight: fixed(result.time_of_flight_s, 3),
            zero_info: zero_distance_m.map(|zero| format!("Zeroed at {} m", zero)),
            vertical_correction: zero_distance_m.map(|_| format!("{} cm", fixed(result.drop_cm, 1))),
        }
    }

    /// Label/value/unit rows in display order.
    pub fn rows(&self) -> Vec<(&'static str, &str, &'static str)> {
        vec![
            ("Drop", self.drop.as_str(), "cm"),
            ("Wind drift", self.wind_drift.as_str(), "cm"),
            ("Impact velocity", self.impact_velocity.as_str(), "m/s"),
            ("Impact energy", self.impact_energy.as_str(), "J"),
            ("Time of flight", self.time_of_flight.as_str(), "s"),
        ]
    }
}

/// A point in chart coordinates (range in m, height in cm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

impl From<&TrajectoryPoint> for ChartPoint {
    fn from(point: &TrajectoryPoint) -> Self {
        ChartPoint {
            x: point.x_m,
            y: point.y_cm,
        }
    }
}

/// Chart state for the trajectory plot.
///
/// Holds the last rendered datasets. [`TrajectoryChart::render`] overwrites
/// all of them; nothing is merged across renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryChart {
    /// X axis labels, one per trajectory sample ("0", "15", ...)
    pub labels: Vec<String>,
    /// Trajectory series
    pub trajectory: Vec<ChartPoint>,
    /// Line of sight reference series
    pub sight_line: Vec<ChartPoint>,
    /// Legend label of the line of sight series
    pub sight_line_label: String,
    renders: u64,
}

impl TrajectoryChart {
    /// Create an empty chart
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the chart datasets with those of `result`.
    ///
    /// With a zero, the sight line runs from the muzzle to the zero range;
    /// without one it is a flat line across the whole curve.
    pub fn render(&mut self, result: &BallisticsResult, zero_distance_m: Option<f64>) {
        self.labels = result
            .trajectory
            .iter()
            .map(|p| fixed(p.x_m, 0))
            .collect();
        self.trajectory = result.trajectory.iter().map(ChartPoint::from).collect();

        let origin = ChartPoint { x: 0.0, y: 0.0 };
        match zero_distance_m {
            Some(zero) => {
                self.sight_line = vec![origin, ChartPoint { x: zero, y: 0.0 }];
                self.sight_line_label = format!("Line of sight (zero at {} m)", zero);
            }
            None => {
                let end = result.final_point().map(|p| p.x_m).unwrap_or(0.0);
                self.sight_line = vec![origin, ChartPoint { x: end, y: 0.0 }];
                self.sight_line_label = "Line of sight".to_string();
            }
        }

        self.renders += 1;
    }

    /// Number of full renders so far
    pub fn render_count(&self) -> u64 {
        self.renders
    }

    /// Lowest and highest trajectory height (cm), including the sight line at 0
    pub fn height_bounds(&self) -> (f64, f64) {
        self.trajectory
            .iter()
            .fold((0.0_f64, 0.0_f64), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::trajectory::{calculate, ShotInput};

    fn test_shot() -> ShotInput {
        ShotInput {
            velocity_mps: 800.0,
            weight_g: 9.0,
            ballistic_coefficient: 0.5,
            distance_m: 300.0,
            wind_speed_mps: 5.0,
            wind_angle_deg: 90.0,
            zero_distance_m: Some(100.0),
        }
    }

    #[test]
    fn test_summary_precision() {
        let shot = test_shot();
        let result = calculate(&shot).unwrap();
        let summary = ResultsSummary::from_result(&result, shot.zero_distance_m);

        assert_eq!(summary.drop, "61.3");
        assert_eq!(summary.wind_drift, "187.5");
        assert_eq!(summary.impact_velocity, "794.0");
        assert_eq!(summary.impact_energy, "2837");
        assert_eq!(summary.time_of_flight, "0.375");
        assert_eq!(summary.zero_info.as_deref(), Some("Zeroed at 100 m"));
        assert_eq!(summary.vertical_correction.as_deref(), Some("61.3 cm"));
        assert_eq!(summary.rows().len(), 5);
    }

    #[test]
    fn test_summary_without_zero() {
        let mut shot = test_shot();
        shot.zero_distance_m = None;
        let result = calculate(&shot).unwrap();
        let summary = ResultsSummary::from_result(&result, None);

        assert_eq!(summary.drop, "69.0");
        assert!(summary.zero_info.is_none());
        assert!(summary.vertical_correction.is_none());
    }

    #[test]
    fn test_fixed_drops_negative_zero() {
        assert_eq!(fixed(-0.0, 1), "0.0");
        assert_eq!(fixed(-0.0, 0), "0");
        assert_eq!(fixed(-0.04, 1), "0.0");
        assert_eq!(fixed(-0.06, 1), "-0.1");
        assert_eq!(fixed(61.3125, 1), "61.3");
    }

    #[test]
    fn test_calm_wind_from_the_left_shows_zero_drift() {
        let mut shot = test_shot();
        shot.wind_speed_mps = 0.0;
        shot.wind_angle_deg = 270.0;
        let result = calculate(&shot).unwrap();
        let summary = ResultsSummary::from_result(&result, shot.zero_distance_m);

        assert_eq!(summary.wind_drift, "0.0");
    }

    #[test]
    fn test_chart_render_with_zero() {
        let shot = test_shot();
        let result = calculate(&shot).unwrap();
        let mut chart = TrajectoryChart::new();
        assert_eq!(chart.render_count(), 0);

        chart.render(&result, shot.zero_distance_m);
        assert_eq!(chart.labels.first().map(String::as_str), Some("0"));
        assert_eq!(chart.labels.last().map(String::as_str), Some("300"));
        assert_eq!(chart.trajectory.len(), 21);
        assert_eq!(
            chart.sight_line,
            vec![ChartPoint { x: 0.0, y: 0.0 }, ChartPoint { x: 100.0, y: 0.0 }]
        );
        assert_eq!(chart.sight_line_label, "Line of sight (zero at 100 m)");
        assert_eq!(chart.render_count(), 1);
    }

    #[test]
    fn test_chart_render_overwrites() {
        let mut chart = TrajectoryChart::new();

        let shot = test_shot();
        chart.render(&calculate(&shot).unwrap(), shot.zero_distance_m);

        let mut flat = test_shot();
        flat.distance_m = 150.0;
        flat.zero_distance_m = None;
        let result = calculate(&flat).unwrap();
        chart.render(&result, None);

        assert_eq!(chart.trajectory.len(), 21);
        assert_eq!(chart.labels.last().map(String::as_str), Some("150"));
        assert_eq!(chart.sight_line[1], ChartPoint { x: 150.0, y: 0.0 });
        assert_eq!(chart.sight_line_label, "Line of sight");
        assert_eq!(chart.render_count(), 2);
    }

    #[test]
    fn test_height_bounds() {
        let shot = test_shot();
        let result = calculate(&shot).unwrap();
        let mut chart = TrajectoryChart::new();
        chart.render(&result, shot.zero_distance_m);

        let (lo, hi) = chart.height_bounds();
        assert!(lo < -60.0);
        assert!(hi > 0.0);
    }
}
