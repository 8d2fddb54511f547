//! Command-line interface for samx
//! Normalizes and parses a samx file, printing the result in the requested format.
//!
//! Usage:
//!   samx `<path>` [--format `<format>`] [--config `<file>`] [--fail-fast] [-v]
//!
//! Exit codes: 0 on success, 1 when the file could not be processed, 2 when output was
//! produced but indentation errors were reported along the way.

use clap::{Arg, ArgAction, Command};
use samx::samx::processor::{process_file, OutputFormat, ProcessorConfig};
use tracing::{info, Level};

fn main() {
    let matches = Command::new("samx")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalize and parse samx documents")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the samx file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help(format!(
                    "Output format ({})",
                    OutputFormat::available().join(", ")
                ))
                .default_value("outline"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("YAML or JSON file with processor settings"),
        )
        .arg(
            Arg::new("fail-fast")
                .long("fail-fast")
                .action(ArgAction::SetTrue)
                .help("Stop at the first indentation error instead of reporting and continuing"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Increase log output (-v info, -vv debug)"),
        )
        .get_matches();

    let level = match matches.get_count("verbose") {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    let path = matches.get_one::<String>("path").unwrap();
    let format = matches.get_one::<String>("format").unwrap();

    let format: OutputFormat = format.parse().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let mut config = match matches.get_one::<String>("config") {
        Some(config_path) => ProcessorConfig::from_file(config_path).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }),
        None => ProcessorConfig::default(),
    };
    if matches.get_flag("fail-fast") {
        config.normalizer.fail_fast = true;
    }

    handle_process_command(path, format, &config);
}

/// Process one file and print it
fn handle_process_command(path: &str, format: OutputFormat, config: &ProcessorConfig) {
    let processed = process_file(path, config).unwrap_or_else(|e| {
        eprintln!("Error processing {}: {}", path, e);
        std::process::exit(1);
    });

    // indentation diagnostics already reached stderr through `warn!`
    let blocks = processed.document.iter_blocks().count();
    info!("Found {} top level blocks", blocks);

    let output = processed.render(format).unwrap_or_else(|e| {
        eprintln!("Error rendering {}: {}", path, e);
        std::process::exit(1);
    });
    print!("{}", output);

    if !processed.report.is_clean() {
        std::process::exit(2);
    }
}
