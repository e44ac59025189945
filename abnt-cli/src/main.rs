//! Command-line interface for ABNT academic documents
//! This binary loads a document record (JSON or YAML) and prints its pages, outline, references,
//! validation report or statistics.
//!
//! Usage:
//!   abnt `<command>` `<path>` [--format text|json] [--config `<toml>`] [--width `<cols>`]
//!
//! Logging goes to stderr and is controlled with `ABNT_LOG` (default `warn`).

mod commands;

use abnt_config::{AbntConfig, Loader};
use abnt_parser::abnt::formats::OutputFormat;
use clap::builder::PossibleValuesParser;
use clap::{value_parser, Arg, ArgMatches, Command};
use commands::{execute, CliError, COMMANDS};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "ABNT_LOG";

fn cli() -> Command {
    let mut command = Command::new("abnt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for assembling and checking ABNT academic documents")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(PossibleValuesParser::new(OutputFormat::NAMES))
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML configuration file layered over the built-in defaults")
                .value_parser(value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .short('w')
                .help("Column width for text output")
                .value_parser(value_parser!(u32))
                .global(true),
        );

    for (name, about) in COMMANDS {
        let path_help = if *name == "tokenize" {
            "Path to a raw annotated text file"
        } else {
            "Path to the document (.json, .yaml or .yml)"
        };
        command = command.subcommand(
            Command::new(*name).about(*about).arg(
                Arg::new("path")
                    .help(path_help)
                    .required(true)
                    .value_parser(value_parser!(PathBuf))
                    .index(1),
            ),
        );
    }
    command
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Defaults, then the user file, then command-line flags.
fn load_config(matches: &ArgMatches) -> Result<AbntConfig, CliError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        let format: OutputFormat = format.parse()?;
        loader = loader.set_override("output.format", format.to_string())?;
    }
    if let Some(width) = matches.get_one::<u32>("width") {
        loader = loader.set_override("output.width", i64::from(*width))?;
    }
    Ok(loader.build()?)
}

fn run(matches: &ArgMatches) -> Result<i32, CliError> {
    let Some((name, sub_matches)) = matches.subcommand() else {
        return Err(CliError::UnknownCommand(String::new()));
    };
    let config = load_config(sub_matches)?;
    let path = sub_matches
        .get_one::<PathBuf>("path")
        .ok_or_else(|| CliError::UnknownCommand(name.to_string()))?;

    let outcome = execute(name, path, &config)?;
    print!("{}", outcome.output);
    if !outcome.output.ends_with('\n') {
        println!();
    }
    Ok(outcome.status)
}

fn main() {
    init_logging();
    let matches = cli().get_matches();
    match run(&matches) {
        Ok(status) => std::process::exit(status),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
