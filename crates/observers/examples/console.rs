//! Console sessions for each descent solver.
//!
//! Each mode runs one procedure on its reference objective, prints the
//! console log the observer collected, and then the visited points.
//!
//! # Usage
//!
//! ```text
//! cargo run --example console -- golden
//! cargo run --example console -- newton "3, -2" 1e-5 100
//! RUST_LOG=trace cargo run --example console -- fletcher-reeves
//! ```
//!
//! # Modes
//!
//! - **golden** — Golden section search for the local minimum of the arctan
//!   well on \[−2, −0.2\].
//! - **fixed** — The same search with the `0.382` split and a fixed number of
//!   iterations (the budget argument).
//! - **quadratic** — Three-point parabolic interpolation on the arctan well.
//! - **cubic** — Four-point cubic interpolation on `x³ − 6x² + 9x + 1`, whose
//!   local minimum is at 3.
//! - **newton** — Newton's method on `x1² − x1·x2 + x2² + x1 + x2`.
//! - **fletcher-reeves** — Conjugate gradient on the same quadratic.
//!
//! Optional arguments after the mode are the start point (comma separated),
//! the tolerance and the iteration budget, parsed as a front end would.

use std::error::Error;

use descent_core::{
    GuardNearZero, Scalar,
    functions::{Bowl, arctan_well},
};
use descent_observers::ConsoleLog;
use descent_solvers::optimization::{
    Settings, cubic_fit, fletcher_reeves, golden_section, newton, quadratic_fit,
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let mode = args.next().unwrap_or_else(|| "golden".into());
    let start = args.next();
    let tolerance = args.next().unwrap_or_else(|| "1e-5".into());
    let max_iters = args.next().unwrap_or_else(|| "100".into());
    log::info!("running {mode} with tolerance {tolerance} and budget {max_iters}");

    let mut lines = Vec::new();
    let trace: Vec<Vec<f64>> = match mode.as_str() {
        "golden" | "fixed" => {
            let settings: Settings<2> = Settings::parse(
                start.as_deref().unwrap_or("-2, -0.2"),
                &tolerance,
                &max_iters,
            )?;
            let config = if mode == "fixed" {
                golden_section::Config::fixed(settings.config.max_iters())?
            } else {
                golden_section::Config::from(settings.config)
            };
            let objective = GuardNearZero::new(Scalar(arctan_well));
            let solution = golden_section::minimize(
                &objective,
                settings.start,
                &config,
                ConsoleLog::new(&mut lines),
            )?;
            solution.trace.iter().map(|x| vec![*x]).collect()
        }
        "quadratic" => {
            let settings: Settings<3> = Settings::parse(
                start.as_deref().unwrap_or("-1.2, -0.6, -0.2"),
                &tolerance,
                &max_iters,
            )?;
            let solution = quadratic_fit::minimize(
                &Scalar(arctan_well),
                settings.start,
                &settings.config,
                ConsoleLog::new(&mut lines),
            )?;
            solution.trace.iter().map(|x| vec![*x]).collect()
        }
        "cubic" => {
            let settings: Settings<4> = Settings::parse(
                start.as_deref().unwrap_or("2, 2.5, 3.5, 4.5"),
                &tolerance,
                &max_iters,
            )?;
            let objective = Scalar(|x: f64| x.powi(3) - 6.0 * x.powi(2) + 9.0 * x + 1.0);
            let solution = cubic_fit::minimize(
                &objective,
                settings.start,
                &settings.config,
                ConsoleLog::new(&mut lines),
            )?;
            solution.trace.iter().map(|x| vec![*x]).collect()
        }
        "newton" => {
            let settings: Settings<2> =
                Settings::parse(start.as_deref().unwrap_or("3, -2"), &tolerance, &max_iters)?;
            let solution = newton::minimize(
                &Bowl,
                settings.start,
                &settings.config,
                ConsoleLog::new(&mut lines),
            )?;
            solution.trace.iter().map(|x| x.to_vec()).collect()
        }
        "fletcher-reeves" => {
            let settings: Settings<2> =
                Settings::parse(start.as_deref().unwrap_or("2, 2"), &tolerance, &max_iters)?;
            let solution = fletcher_reeves::minimize(
                &Bowl,
                settings.start,
                &fletcher_reeves::Config::from(settings.config),
                ConsoleLog::new(&mut lines),
            )?;
            solution.trace.iter().map(|x| x.to_vec()).collect()
        }
        other => return Err(format!("unknown mode {other:?}").into()),
    };

    for line in &lines {
        println!("{line}");
    }
    print_trace(&trace);

    Ok(())
}

fn print_trace(trace: &[Vec<f64>]) {
    println!("\nvisited points:");
    for (i, point) in trace.iter().enumerate() {
        let coords: Vec<_> = point.iter().map(|c| format!("{c:.6}")).collect();
        println!("{i:>4}  ({})", coords.join(", "));
    }
}
