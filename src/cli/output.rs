//! CLI output formatting.
//!
//! Formatting lives in `format_*` functions returning strings so it can be
//! tested; the `print_*` wrappers write them to stdout.

use std::fmt::Write as _;

use crate::error::RunoffResult;
use crate::model::{ParamKind, PeakInfo, SimulationResult};

/// Print version information.
pub fn print_version() {
    println!("{}", format_version());
}

/// Version line with build metadata when available.
#[must_use]
pub fn format_version() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("GIT_HASH").filter(|h| !h.is_empty()) {
        Some(hash) => format!("runoff-lab {version} ({})", &hash[..hash.len().min(12)]),
        None => format!("runoff-lab {version}"),
    }
}

/// Print help message.
pub fn print_help() {
    println!(
        r"runoff-lab - Interactive nonlinear-reservoir rainfall-runoff explorer

USAGE:
    runoff-lab [COMMAND] [OPTIONS]

COMMANDS:
    (none)                      Launch the interactive shell with defaults

    tui                         Launch the interactive shell
        -c, --config <FILE>     Start from (and reset to) a config file

    run                         Run one simulation and print the result
        -c, --config <FILE>     Read parameters from a config file
        --json                  Print the full result as JSON

    validate <FILE>             Validate a config file

    help                        Show this help message
    version                     Show version information

SHELL KEYS:
    Up/Down      select a parameter      Left/Right  move its slider
    0-9 . -      type a value            Enter       commit / recompute
    u            recompute and redraw    r           reset to defaults
    q / Esc      quit

ENVIRONMENT:
    RUNOFF_LAB_LOG        log filter directives (default: info)
    RUNOFF_LAB_LOG_FILE   log file for the interactive shell
"
    );
}

fn format_peak(peak: Option<&PeakInfo>) -> String {
    peak.map_or_else(
        || "none".to_string(),
        |p| format!("{:.3} at t = {:.3} h", p.value, p.time),
    )
}

/// Human-readable summary: parameters, peaks, annotations, health.
#[must_use]
pub fn format_summary(result: &SimulationResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Parameters:");
    for kind in ParamKind::ALL {
        let _ = writeln!(out, "  {:<12} {:>10.4}", kind.name(), result.params.get(kind));
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Peaks:");
    let _ = writeln!(
        out,
        "  rainfall     {}",
        format_peak(result.rainfall_peak.as_ref())
    );
    let _ = writeln!(out, "  runoff       {}", format_peak(result.runoff_peak.as_ref()));
    let _ = writeln!(out);
    match result.annotations {
        Some(notes) => {
            let _ = writeln!(out, "Time lag:         {:.3} h", notes.lag);
            let _ = writeln!(out, "Peak attenuation: {:.3}", notes.attenuation);
        }
        None => {
            let _ = writeln!(out, "Time lag:         n/a");
            let _ = writeln!(out, "Peak attenuation: n/a");
        }
    }
    if !result.health.is_finite() {
        let _ = writeln!(
            out,
            "\nWarning: {} non-finite runoff samples (first at index {})",
            result.health.runoff.non_finite,
            result
                .health
                .runoff
                .first_non_finite
                .map_or_else(|| "-".to_string(), |i| i.to_string()),
        );
    }
    out
}

/// Sample table with one row per time step.
#[must_use]
pub fn format_table(result: &SimulationResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>10} {:>12} {:>12}", "time_h", "rainfall", "runoff");
    for ((t, rain), q) in result
        .rainfall
        .iter()
        .zip(result.runoff.values().iter().copied())
    {
        let _ = writeln!(out, "{t:>10.4} {rain:>12.6} {q:>12.6}");
    }
    out
}

/// Print a simulation result as text or JSON.
///
/// # Errors
///
/// Returns error if JSON serialization fails.
pub fn print_simulation_result(result: &SimulationResult, json: bool) -> RunoffResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        println!("{}", format_summary(result));
        println!("{}", format_table(result));
    }
    Ok(())
}
