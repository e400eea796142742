//! Command-line interface for nlcst-literal
//! Reports which words of a text, or of an nlcst JSON tree, are used as literals.
//!
//! Usage:
//!   nlcst-literal classify `<path>` [--from text|nlcst] [--format plain|json|yaml]  - Classify every word
//!   nlcst-literal delimiters                                                    - List the delimiter tables
//!
//! `<path>` may be `-` to read from stdin. Set RUST_LOG (or pass --verbose) for diagnostics.

use clap::{Arg, ArgAction, Command};
use nlcst_literal::nlcst::ast::Node;
use nlcst_literal::nlcst::lexing::parse_root;
use nlcst_literal::nlcst::literal::delimiters::{PAIRS, SINGLE};
use nlcst_literal::nlcst::literal::{classify_words, render_plain, LiteralError, WordReport};
use std::fmt;
use std::io::Read;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum CliError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Yaml(serde_yaml::Error),
    Literal(LiteralError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(err) => write!(f, "Error reading input: {}", err),
            CliError::Json(err) => write!(f, "Invalid JSON: {}", err),
            CliError::Yaml(err) => write!(f, "Cannot serialize to YAML: {}", err),
            CliError::Literal(err) => write!(f, "Classification failed: {}", err),
        }
    }
}

impl std::error::Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Json(err)
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(err: serde_yaml::Error) -> Self {
        CliError::Yaml(err)
    }
}

impl From<LiteralError> for CliError {
    fn from(err: LiteralError) -> Self {
        CliError::Literal(err)
    }
}

fn main() {
    let matches = Command::new("nlcst-literal")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Report which words are used as literals")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug diagnostics to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("classify")
                .about("Classify every word of the input")
                .arg(
                    Arg::new("path")
                        .help("Path to the input file, or - for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Input kind")
                        .value_parser(["text", "nlcst"])
                        .default_value("text"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format")
                        .value_parser(["plain", "json", "yaml"])
                        .default_value("plain"),
                ),
        )
        .subcommand(Command::new("delimiters").about("List the delimiter tables"))
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    let result = match matches.subcommand() {
        Some(("classify", classify_matches)) => {
            let path = classify_matches
                .get_one::<String>("path")
                .map(String::as_str)
                .unwrap_or("-");
            let from = classify_matches
                .get_one::<String>("from")
                .map(String::as_str)
                .unwrap_or("text");
            let format = classify_matches
                .get_one::<String>("format")
                .map(String::as_str)
                .unwrap_or("plain");
            handle_classify_command(path, from, format)
        }
        Some(("delimiters", _)) => {
            handle_delimiters_command();
            Ok(())
        }
        _ => unreachable!(),
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(path: &str) -> Result<String, CliError> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

/// Handle the classify command
fn handle_classify_command(path: &str, from: &str, format: &str) -> Result<(), CliError> {
    let source = read_input(path)?;
    let tree: Node = match from {
        "nlcst" => serde_json::from_str(&source)?,
        _ => parse_root(&source),
    };
    debug!(path, from, "input parsed");

    let reports = classify_words(&tree)?;
    debug!(words = reports.len(), "words classified");

    print!("{}", render(&reports, format)?);
    Ok(())
}

fn render(reports: &[WordReport], format: &str) -> Result<String, CliError> {
    match format {
        "json" => Ok(format!("{}\n", serde_json::to_string_pretty(reports)?)),
        "yaml" => Ok(serde_yaml::to_string(reports)?),
        _ => Ok(render_plain(reports)),
    }
}

/// Handle the delimiters command
fn handle_delimiters_command() {
    println!("Single delimiters:\n");
    println!("  {}", SINGLE.join(" "));
    println!("\nPair delimiters:\n");
    for (open, close) in PAIRS {
        println!("  {}  {}", open, close.join(" "));
    }
}
