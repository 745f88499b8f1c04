use std::path::PathBuf;

/// Where the calculation request comes from
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    /// Interactive prompts
    Prompt,
    /// JSON on stdin
    Stdin,
    /// JSON file
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    pub source: Source,
    pub verbose: bool,
    pub json_only: bool,
}

pub fn parse_args() -> Result<CliOptions, String> {
    parse_args_from(std::env::args().skip(1).collect())
}

fn parse_args_from(args: Vec<String>) -> Result<CliOptions, String> {
    let mut source = None;
    let mut verbose = false;
    let mut json_only = false;

    for arg in &args {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            "--verbose" | "-v" => verbose = true,
            "--json" => json_only = true,
            "-" => {
                if source.replace(Source::Stdin).is_some() {
                    return Err("only one request source may be given".to_string());
                }
            }
            other if other.starts_with('-') => {
                return Err(format!("unknown option: {}", other));
            }
            path => {
                if source.replace(Source::File(PathBuf::from(path))).is_some() {
                    return Err("only one request source may be given".to_string());
                }
            }
        }
    }

    Ok(CliOptions {
        source: source.unwrap_or(Source::Prompt),
        verbose,
        json_only,
    })
}

pub fn print_usage() {
    println!("Usage: calc_cli [--verbose] [--json] [FILE | -]");
    println!();
    println!("  FILE       JSON calculation request ({{\"type\": \"VoltageDrop\", ...}})");
    println!("  -          read the request from stdin");
    println!("  --json     print only the JSON result");
    println!("  --verbose  log calculation details to stderr (or set RUST_LOG)");
    println!();
    println!("Without FILE, prompts for a voltage-drop calculation.");
}
