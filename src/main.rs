//! Hours-of-Service trip planner entry point — CLI wiring and config-driven
//! engine invocation.

use std::path::Path;
use std::process;

use chrono::NaiveDate;

use hos_trip_planner::config::TripScenario;
use hos_trip_planner::engine::plan;
use hos_trip_planner::format::format_clock;
use hos_trip_planner::io::{export_segments_csv, export_stops_csv};
use hos_trip_planner::model::TripResult;

/// Parsed CLI arguments.
struct CliArgs {
    scenario_path: Option<String>,
    preset: Option<String>,
    cycle_used_override: Option<f64>,
    start_date_override: Option<String>,
    telemetry_out: Option<String>,
    format: OutputFormat,
}

#[derive(PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn print_help() {
    eprintln!("hos-trip-planner — FMCSA Hours-of-Service trip planning engine");
    eprintln!();
    eprintln!("Usage: hos-trip-planner [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>        Load a trip scenario from a TOML file");
    eprintln!("  --preset <name>          Use a built-in preset (baseline, long_haul, cycle_exhausted)");
    eprintln!("  --cycle-used <hours>     Override hours already used in the 70-hour/8-day cycle");
    eprintln!("  --start-date <YYYY-MM-DD> Override the trip start date");
    eprintln!("  --telemetry-out <path>   Export daily log segments and stops to CSV (writes <path>.segments.csv and <path>.stops.csv)");
    eprintln!("  --format <json|text>     Output format (default: text)");
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("If no --scenario or --preset is given, the baseline preset is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        scenario_path: None,
        preset: None,
        cycle_used_override: None,
        start_date_override: None,
        telemetry_out: None,
        format: OutputFormat::Text,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--scenario" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --scenario requires a path argument");
                    process::exit(1);
                }
                cli.scenario_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--cycle-used" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --cycle-used requires an hours argument");
                    process::exit(1);
                }
                match args[i].parse::<f64>() {
                    Ok(v) => cli.cycle_used_override = Some(v),
                    Err(_) => {
                        eprintln!("error: --cycle-used value \"{}\" is not a valid number", args[i]);
                        process::exit(1);
                    }
                }
            }
            "--start-date" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --start-date requires a YYYY-MM-DD argument");
                    process::exit(1);
                }
                cli.start_date_override = Some(args[i].clone());
            }
            "--telemetry-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --telemetry-out requires a path argument");
                    process::exit(1);
                }
                cli.telemetry_out = Some(args[i].clone());
            }
            "--format" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --format requires \"json\" or \"text\"");
                    process::exit(1);
                }
                cli.format = match args[i].as_str() {
                    "json" => OutputFormat::Json,
                    "text" => OutputFormat::Text,
                    other => {
                        eprintln!("error: unknown format \"{other}\", expected \"json\" or \"text\"");
                        process::exit(1);
                    }
                };
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn print_text_report(result: &TripResult) {
    println!("Trip summary");
    println!("  total miles:         {:.1}", result.total_miles);
    println!("  total driving hours: {:.1}", result.total_driving_hours);
    println!("  total days:          {}", result.total_days);
    println!();

    println!("Stops");
    for stop in &result.stops {
        println!(
            "  day {:<2} {:<8} {:<28} {} ({:.4}, {:.4})",
            stop.day, stop.stop_type, stop.location, stop.time, stop.lat, stop.lng
        );
    }
    println!();

    for log in &result.daily_logs {
        println!("Day {} — {}", log.day, log.date);
        for seg in &log.segments {
            println!(
                "  {} - {}  {:<9} {}",
                format_clock(seg.start),
                format_clock(seg.end),
                seg.status,
                seg.note
            );
        }
        println!(
            "  off-duty {:.1}h  sleeper {:.1}h  driving {:.1}h  on-duty {:.1}h  miles {:.1}",
            log.hours_summary.off_duty,
            log.hours_summary.sleeper,
            log.hours_summary.driving,
            log.hours_summary.on_duty,
            log.total_miles
        );
        println!();
    }

    let cs = &result.cycle_summary;
    println!("Cycle accounting");
    println!("  before trip:      {:.1}h", cs.cycle_before);
    println!("  used this trip:   {:.1}h", cs.on_duty_this_trip);
    println!("  after trip:       {:.1}h / {:.1}h", cs.cycle_after, cs.limit);
    println!("  remaining:        {:.1}h", cs.remaining);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = parse_args();

    let mut scenario = if let Some(ref path) = cli.scenario_path {
        match TripScenario::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match TripScenario::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        TripScenario::baseline()
    };

    if let Some(cycle_used) = cli.cycle_used_override {
        scenario.cycle_used = cycle_used;
    }
    if let Some(ref date_str) = cli.start_date_override {
        match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
            Ok(d) => scenario.start_date = Some(d),
            Err(e) => {
                eprintln!("error: --start-date value \"{date_str}\" is invalid: {e}");
                process::exit(1);
            }
        }
    }

    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let start_date = scenario.start_date.unwrap_or_else(|| chrono::Local::now().date_naive());

    let result = match plan(&scenario.legs, scenario.cycle_used, &scenario.locations, start_date) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    match cli.format {
        OutputFormat::Json => match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize result: {e}");
                process::exit(1);
            }
        },
        OutputFormat::Text => print_text_report(&result),
    }

    if let Some(ref path) = cli.telemetry_out {
        let segments_path = format!("{path}.segments.csv");
        let stops_path = format!("{path}.stops.csv");
        if let Err(e) = export_segments_csv(&result.daily_logs, Path::new(&segments_path)) {
            eprintln!("error: failed to write segments CSV: {e}");
            process::exit(1);
        }
        if let Err(e) = export_stops_csv(&result.stops, Path::new(&stops_path)) {
            eprintln!("error: failed to write stops CSV: {e}");
            process::exit(1);
        }
        eprintln!("Telemetry written to {segments_path} and {stops_path}");
    }
}
