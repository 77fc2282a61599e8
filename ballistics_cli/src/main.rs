//! # Ballistics CLI Application
//!
//! Terminal front end for the trajectory calculator. Shot fields are taken
//! as text and validated by `ShotForm`, so a typo surfaces as the same
//! `InvalidInput` error any other front end would see.

use std::fs;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use ballistics_core::actions::{export_results, save_configuration};
use ballistics_core::calculations::trajectory::{calculate_with_settings, BallisticsResult};
use ballistics_core::display::{fixed, ResultsSummary, TrajectoryChart};
use ballistics_core::errors::{CalcError, CalcResult};
use ballistics_core::form::ShotForm;
use ballistics_core::settings::CalculatorSettings;
use clap::{Args, Parser, Subcommand};

/// Width of the text chart plot area, in characters
const CHART_WIDTH: usize = 48;

#[derive(Parser)]
#[command(name = "ballistics_cli")]
#[command(version)]
#[command(about = "Simplified ballistic trajectory calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate drop, drift and energy for a shot
    Calculate {
        #[command(flatten)]
        shot: ShotArgs,

        /// JSON file with calculator settings
        #[arg(long)]
        settings: Option<String>,

        /// Also print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Prompt for each shot field, then calculate
    Interactive,

    /// Export the results of a shot
    Export {
        #[command(flatten)]
        shot: ShotArgs,
    },

    /// Save the shot fields as a configuration
    SaveConfig {
        #[command(flatten)]
        shot: ShotArgs,
    },
}

/// Shot fields, kept as text until `ShotForm::parse`.
#[derive(Args)]
struct ShotArgs {
    /// Muzzle velocity (m/s)
    #[arg(short = 'v', long, default_value = "800", allow_hyphen_values = true)]
    velocity: String,

    /// Projectile weight (g)
    #[arg(short = 'w', long, default_value = "9", allow_hyphen_values = true)]
    weight: String,

    /// Ballistic coefficient
    #[arg(short = 'b', long, default_value = "0.5", allow_hyphen_values = true)]
    bc: String,

    /// Target distance (m)
    #[arg(short = 'd', long, default_value = "300", allow_hyphen_values = true)]
    distance: String,

    /// Wind speed (m/s)
    #[arg(long, default_value = "5", allow_hyphen_values = true)]
    wind_speed: String,

    /// Wind angle relative to the line of fire (degrees, 90 = full cross wind)
    #[arg(long, default_value = "90", allow_hyphen_values = true)]
    wind_angle: String,

    /// Zero distance (m)
    #[arg(short = 'z', long, default_value = "100", allow_hyphen_values = true)]
    zero_distance: String,

    /// Do not apply sight zero correction
    #[arg(long, conflicts_with = "zero_distance")]
    no_zero: bool,
}

impl ShotArgs {
    fn to_form(&self) -> ShotForm {
        ShotForm {
            velocity: self.velocity.clone(),
            weight: self.weight.clone(),
            bc: self.bc.clone(),
            distance: self.distance.clone(),
            wind_speed: self.wind_speed.clone(),
            wind_angle: self.wind_angle.clone(),
            zero_distance: if self.no_zero {
                None
            } else {
                Some(self.zero_distance.clone())
            },
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Calculate { shot, settings, json } => {
            load_settings(settings.as_deref()).and_then(|settings| run(&shot.to_form(), &settings, json))
        }
        Commands::Interactive => {
            let form = prompt_form();
            run(&form, &CalculatorSettings::default(), false)
        }
        Commands::Export { shot } => shot
            .to_form()
            .parse()
            .and_then(|input| calculate_with_settings(&input, &CalculatorSettings::default()))
            .and_then(|result| export_results(&result)),
        Commands::SaveConfig { shot } => save_configuration(&shot.to_form()),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn load_settings(path: Option<&str>) -> CalcResult<CalculatorSettings> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| CalcError::file_error("read", path, e.to_string()))?;
            CalculatorSettings::from_json(&text)
        }
        None => Ok(CalculatorSettings::default()),
    }
}

fn run(form: &ShotForm, settings: &CalculatorSettings, json: bool) -> CalcResult<()> {
    let input = form.parse()?;
    let result = calculate_with_settings(&input, settings)?;

    let summary = ResultsSummary::from_result(&result, input.zero_distance_m);
    let mut chart = TrajectoryChart::new();
    chart.render(&result, input.zero_distance_m);

    print_summary(&summary);
    println!();
    print_chart(&chart);

    if json {
        println!();
        println!("JSON Output:");
        println!("{}", result_json(&result)?);
    }
    Ok(())
}

fn result_json(result: &BallisticsResult) -> CalcResult<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

fn print_summary(summary: &ResultsSummary) {
    println!("═══════════════════════════════════════");
    println!("  TRAJECTORY RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    for (label, value, unit) in summary.rows() {
        println!("  {:<16} {:>10} {}", label, value, unit);
    }
    if let Some(zero_info) = &summary.zero_info {
        println!();
        println!("  {}", zero_info);
    }
    if let Some(correction) = &summary.vertical_correction {
        println!("  Vertical correction: {}", correction);
    }
}

fn print_chart(chart: &TrajectoryChart) {
    println!("Trajectory ({}):", chart.sight_line_label);
    println!("   Range (m)  Height (cm)");

    let (lo, hi) = chart.height_bounds();
    let span = hi - lo;
    let column = |y: f64| -> usize {
        if span > 0.0 {
            (((y - lo) / span) * (CHART_WIDTH - 1) as f64).round() as usize
        } else {
            0
        }
    };
    let sight_column = column(0.0);

    for (label, point) in chart.labels.iter().zip(&chart.trajectory) {
        let mut plot = vec![' '; CHART_WIDTH];
        plot[sight_column] = '|';
        plot[column(point.y)] = '*';
        let plot: String = plot.into_iter().collect();
        println!("  {:>9}  {:>11}  {}", label, fixed(point.y, 1), plot);
    }
}

fn report_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn prompt_field(prompt: &str, default: &str) -> String {
    print!("{} [{}]: ", prompt, default);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn prompt_form() -> ShotForm {
    println!("Ballistics CLI - Trajectory Calculator");
    println!("======================================");
    println!();

    let defaults = ShotForm::default();
    let zero_default = defaults.zero_distance.clone().unwrap_or_default();
    let form = ShotForm {
        velocity: prompt_field("Muzzle velocity (m/s)", &defaults.velocity),
        weight: prompt_field("Projectile weight (g)", &defaults.weight),
        bc: prompt_field("Ballistic coefficient", &defaults.bc),
        distance: prompt_field("Target distance (m)", &defaults.distance),
        wind_speed: prompt_field("Wind speed (m/s)", &defaults.wind_speed),
        wind_angle: prompt_field("Wind angle (deg)", &defaults.wind_angle),
        zero_distance: zero_answer(&prompt_field(
            "Zero distance (m, \"none\" to disable)",
            &zero_default,
        )),
    };
    println!();
    form
}

/// Map the zero distance answer to a form field; "none", "off" or "-" turn
/// zeroing off.
fn zero_answer(answer: &str) -> Option<String> {
    let answer = answer.trim();
    if answer == "-" || answer.eq_ignore_ascii_case("none") || answer.eq_ignore_ascii_case("off") {
        None
    } else {
        Some(answer.to_string())
    }
}
