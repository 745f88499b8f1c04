//! # sisDIST CLI Application
//!
//! Terminal front end for the distribution-network calculations.
//!
//! Reads a JSON `CalculationRequest` from a file or stdin and prints the
//! result, or prompts for a voltage-drop check when no request is given.
//! Logs go to stderr; stdout carries only the report and JSON.

mod cli;

use std::io::{self, BufRead, Read, Write};
use std::process::ExitCode;
use std::str::FromStr;

use calc_core::calculations::voltage_drop::VoltageDropRequest;
use calc_core::calculations::{
    run, CalculationOutput, CalculationRequest, MaterialListResult, MechanicalStressResult,
    VoltageDropResult,
};
use calc_core::CalcError;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::{CliOptions, Source};

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Parse an answer, keeping the default when it is missing or malformed
fn parse_or<T: FromStr>(answer: Option<String>, default: T) -> T {
    answer.and_then(|s| s.parse().ok()).unwrap_or(default)
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    parse_or(prompt_str(prompt), default)
}

fn prompt_u8(prompt: &str, default: u8) -> u8 {
    parse_or(prompt_str(prompt), default)
}

fn prompt_str(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;

    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn prompt_request() -> CalculationRequest {
    println!("sisDIST CLI - Distribution Network Calculator");
    println!("=============================================");
    println!();
    println!("Voltage drop check (ABNT NBR 5410). Press Enter to accept defaults.");
    println!();

    let current = prompt_f64("Load current (A) [100.0]: ", 100.0);
    let length = prompt_f64("Section length (m) [500.0]: ", 500.0);
    let conductor =
        prompt_str("Conductor family CA/CAA/ACSR [CA]: ").unwrap_or_else(|| "CA".to_string());
    let cross_section = prompt_f64("Cross-section (mm²) [50.0]: ", 50.0);
    let power_factor = prompt_f64("Power factor [0.92]: ", 0.92);
    let phases = prompt_u8("Phases 1/3 [3]: ", 3);
    let nominal_voltage = prompt_f64("Nominal voltage (V) [220.0]: ", 220.0);
    let level = prompt_str("Voltage level BT/MT/AT [BT]: ").unwrap_or_else(|| "BT".to_string());

    CalculationRequest::VoltageDrop(
        VoltageDropRequest::new(current, length, conductor, cross_section)
            .with_power_factor(power_factor)
            .with_phases(phases)
            .with_nominal_voltage(nominal_voltage)
            .with_voltage_level(level),
    )
}

fn read_request(source: &Source) -> Result<CalculationRequest, CalcError> {
    let text = match source {
        Source::Prompt => return Ok(prompt_request()),
        Source::Stdin => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| CalcError::serialization(format!("reading stdin: {}", e)))?;
            buf
        }
        Source::File(path) => std::fs::read_to_string(path).map_err(|e| {
            CalcError::serialization(format!("reading {}: {}", path.display(), e))
        })?,
    };
    Ok(serde_json::from_str(&text)?)
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

fn print_voltage_drop(result: &VoltageDropResult) {
    println!("═══════════════════════════════════════");
    println!("  VOLTAGE DROP ({})", result.standard);
    println!("═══════════════════════════════════════");
    println!("  R = {:.3} Ω/km   X = {:.3} Ω/km", result.resistance, result.reactance);
    println!("  ΔV  = {:.4} V", result.voltage_drop_v);
    println!(
        "  ΔV% = {:.4} % (limit {:.1} %, margin {:.4} %)",
        result.voltage_drop_pct,
        result.limit_pct,
        result.margin_pct()
    );
    println!("  RESULT: {}", status_icon(result.passes()));
}

fn print_mechanical_stress(result: &MechanicalStressResult) {
    println!("═══════════════════════════════════════");
    println!("  POLE LOADS ({})", result.standard);
    println!("═══════════════════════════════════════");
    println!("  Wind per conductor:   {:.2} N", result.wind_load_per_conductor_n);
    println!("  Weight per conductor: {:.2} N", result.weight_load_per_conductor_n);
    println!("  Tension:              {:.2} N", result.tension_load_n);
    println!("  Total resultant:      {:.2} N", result.total_resultant_n);
    println!("  Base moment:          {:.2} N·m", result.moment_nm);
    println!("  Required safety factor: {:.1}", result.safety_factor_required);
}

fn print_material_list(result: &MaterialListResult) {
    println!("═══════════════════════════════════════");
    println!("  MATERIAL LIST - {} ({})", result.project, result.concessionaire);
    println!("═══════════════════════════════════════");
    for item in &result.items {
        println!(
            "  {:<12} {:<32} {:>10.2} {}",
            item.code, item.description, item.quantity, item.unit
        );
    }
    println!("  Total items: {}", result.total_items);
}

fn execute(opts: &CliOptions) -> Result<(), CalcError> {
    let request = read_request(&opts.source)?;
    info!(calc_type = request.calc_type(), "request loaded");
    let output = run(&request)?;

    if !opts.json_only {
        println!();
        match &output {
            CalculationOutput::VoltageDrop(r) => print_voltage_drop(r),
            CalculationOutput::MechanicalStress(r) => print_mechanical_stress(r),
            CalculationOutput::MaterialList(r) => print_material_list(r),
        }
        println!();
        println!("JSON Output (for API use):");
    }
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn main() -> ExitCode {
    let opts = match cli::parse_args() {
        Ok(opts) => opts,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            cli::print_usage();
            return ExitCode::from(2);
        }
    };

    init_logging(opts.verbose);

    match execute(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = e.error_code(), "calculation failed");
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}
