//! Command-line interface for tagdown
//! This binary converts between markup text and tagged rich text runs.
//!
//! Usage:
//!   tagdown decode `<path>` [--format `<format>`] [--config `<config>`]  - Decode markup into tagged runs
//!   tagdown encode `<path>`                                          - Encode JSON runs back into markup
//!   tagdown roundtrip `<path>` [--config `<config>`]                   - Decode markup and re-encode it

use clap::{Arg, Command};
use tagdown::markdown::formats::{self, OutputFormat};
use tagdown::markdown::{decode_with, encode, MarkdownFeatures, PatternTable};

fn main() {
    let matches = Command::new("tagdown")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting between markup text and tagged rich text")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("decode")
                .about("Decode markup text into tagged runs")
                .arg(
                    Arg::new("path")
                        .help("Path to the markup file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('simple' or 'json')")
                        .default_value("simple"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Path to a YAML feature configuration"),
                ),
        )
        .subcommand(
            Command::new("encode")
                .about("Encode JSON runs back into markup text")
                .arg(
                    Arg::new("path")
                        .help("Path to the JSON runs file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("roundtrip")
                .about("Decode markup and re-encode it canonically")
                .arg(
                    Arg::new("path")
                        .help("Path to the markup file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Path to a YAML feature configuration"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("decode", decode_matches)) => {
            let path = decode_matches.get_one::<String>("path").unwrap();
            let format = decode_matches.get_one::<String>("format").unwrap();
            let config = decode_matches.get_one::<String>("config");
            handle_decode_command(path, format, config);
        }
        Some(("encode", encode_matches)) => {
            let path = encode_matches.get_one::<String>("path").unwrap();
            handle_encode_command(path);
        }
        Some(("roundtrip", roundtrip_matches)) => {
            let path = roundtrip_matches.get_one::<String>("path").unwrap();
            let config = roundtrip_matches.get_one::<String>("config");
            handle_roundtrip_command(path, config);
        }
        _ => unreachable!(),
    }
}

/// Handle the decode command
fn handle_decode_command(path: &str, format: &str, config: Option<&String>) {
    let format = OutputFormat::from_name(format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let source = read_file(path);
    let table = build_table(config);
    let tagged = decode_with(&source, &table);
    match format {
        OutputFormat::Simple => println!("{}", formats::to_run_string(&tagged)),
        OutputFormat::Json => match formats::to_json(&tagged) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing runs: {}", e);
                std::process::exit(1);
            }
        },
    }
}

/// Handle the encode command
fn handle_encode_command(path: &str) {
    let source = read_file(path);
    match formats::from_json(&source) {
        Ok(tagged) => print!("{}", encode(&tagged)),
        Err(e) => {
            eprintln!("Error parsing runs: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the roundtrip command
fn handle_roundtrip_command(path: &str, config: Option<&String>) {
    let source = read_file(path);
    let table = build_table(config);
    print!("{}", encode(&decode_with(&source, &table)));
}

/// Build a pattern table from an optional YAML feature configuration
fn build_table(config: Option<&String>) -> PatternTable {
    let features = match config {
        Some(path) => {
            let source = read_file(path);
            serde_yaml::from_str(&source).unwrap_or_else(|e| {
                eprintln!("Error reading config: {}", e);
                std::process::exit(1);
            })
        }
        None => MarkdownFeatures::default(),
    };
    PatternTable::new(&features).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    })
}

fn read_file(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    })
}
