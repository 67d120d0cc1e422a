//! Frameseq Runner
//!
//! Parses a frame spec from the command line or stdin and prints a summary
//! of the resulting sequence: its canonical spec, progressions and chunks.

use std::io::{self, Read};
use std::process::ExitCode;

use frameseq::{Config, OutputFormat, Overrides, Sequence, Summary};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut config_path: Option<String> = None;
    let mut overrides = Overrides::default();
    let mut specs: Vec<String> = Vec::new();
    let mut show_help = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-c" | "--chunk-size" => {
                i += 1;
                match args.get(i).and_then(|v| v.parse().ok()) {
                    Some(n) => overrides.chunk_size = Some(n),
                    None => {
                        eprintln!("Error: --chunk-size expects a positive integer");
                        return ExitCode::FAILURE;
                    },
                }
            },
            "-s" | "--subsample" => {
                i += 1;
                match args.get(i).and_then(|v| v.parse().ok()) {
                    Some(n) => overrides.subsample = Some(n),
                    None => {
                        eprintln!("Error: --subsample expects a positive integer");
                        return ExitCode::FAILURE;
                    },
                }
            },
            "--config" => {
                i += 1;
                match args.get(i) {
                    Some(path) => config_path = Some(path.clone()),
                    None => {
                        eprintln!("Error: --config expects a file path");
                        return ExitCode::FAILURE;
                    },
                }
            },
            "--no-enforce" => {
                overrides.enforce_progressions = Some(false);
            },
            "-j" | "--json" => {
                overrides.output = Some(OutputFormat::Json);
            },
            "-t" | "--text" => {
                overrides.output = Some(OutputFormat::Text);
            },
            "-h" | "--help" => {
                show_help = true;
            },
            // Negative frames look like flags, so anything else is spec text
            other => specs.push(other.to_string()),
        }
        i += 1;
    }

    if show_help {
        print_help();
        return ExitCode::SUCCESS;
    }

    let config = match &config_path {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path, e);
                return ExitCode::FAILURE;
            },
        },
        None => Config::default(),
    }
    .with_overrides(&overrides);

    let spec = if specs.is_empty() {
        let mut data = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut data) {
            eprintln!("Error reading stdin: {}", e);
            return ExitCode::FAILURE;
        }
        data
    } else {
        specs.join(",")
    };

    let sequence = match Sequence::parse(&spec) {
        Ok(sequence) => sequence,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        },
    };
    tracing::debug!("parsed {} frames", sequence.len());

    let summary = Summary::from_sequence(&sequence, &config);
    match config.output {
        OutputFormat::Text => println!("{}", summary.to_text()),
        OutputFormat::Json => match summary.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing summary: {}", e);
                return ExitCode::FAILURE;
            },
        },
    }

    ExitCode::SUCCESS
}

fn print_help() {
    println!("Frameseq Runner");
    println!();
    println!("Usage: frameseq [OPTIONS] [SPEC...]");
    println!();
    println!("Options:");
    println!("  -c, --chunk-size <N>  Maximum frames per chunk (default: 1)");
    println!("      --no-enforce      Chunk by size only, ignoring progression breaks");
    println!("  -s, --subsample <N>   Also report N evenly spaced frames");
    println!("      --config <PATH>   Load options from a JSON config file");
    println!("  -j, --json            Output summary as JSON");
    println!("  -t, --text            Output summary as text (default)");
    println!("  -h, --help            Show this help message");
    println!();
    println!("SPEC arguments are joined with commas. If none are given, reads stdin.");
    println!();
    println!("Examples:");
    println!("  frameseq 1-100 -c 10");
    println!("  frameseq --json 2-4x2,8,10-23x3");
    println!("  echo '1-240' | frameseq -s 5");
}
