//! `legacy-url` command-line tool.
//!
//! - `legacy-url parse <URL>...` - print the parsed fields of each URL
//! - `legacy-url check <FIXTURE>` - run a conformance fixture file

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use legacy_url::conformance::{parse_fixture, run_fixture, Report};
use legacy_url::{parse, parse_strict, ParsedUrl, UrlError};

/// Parse, normalize and check URLs
#[derive(Parser)]
#[command(name = "legacy-url")]
#[command(version)]
#[command(about = "Permissive URL parser and serializer")]
struct Cli {
    /// Log parser decisions (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the fields of one or more URLs
    Parse {
        /// Reject URLs a validating parser would refuse
        #[arg(long)]
        strict: bool,

        /// Print JSON instead of one field per line
        #[arg(long)]
        json: bool,

        #[arg(required = true)]
        urls: Vec<String>,
    },
    /// Run a urltestdata-style fixture file
    Check {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        fixture: PathBuf,
    },
}

#[derive(Error, Debug)]
enum CliError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{input}: {source}")]
    Rejected {
        input: String,
        #[source]
        source: UrlError,
    },

    #[error(transparent)]
    Url(#[from] UrlError),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0} fixture case(s) failed")]
    Failures(usize),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Parse { strict, json, urls } => run_parse(&urls, strict, json),
        Command::Check { json, fixture } => run_check(&fixture, json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_parse(urls: &[String], strict: bool, json: bool) -> Result<(), CliError> {
    let mut parsed = Vec::with_capacity(urls.len());
    for input in urls {
        let url = if strict {
            parse_strict(input).map_err(|source| CliError::Rejected {
                input: input.clone(),
                source,
            })?
        } else {
            parse(input)
        };
        parsed.push(url);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
        return Ok(());
    }

    for (i, url) in parsed.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_fields(url);
    }
    Ok(())
}

fn print_fields(url: &ParsedUrl) {
    let fields = [
        ("protocol", url.protocol()),
        ("auth", url.auth()),
        ("host", url.host()),
        ("hostname", url.hostname()),
        ("port", url.port()),
        ("pathname", url.pathname()),
        ("search", url.search()),
        ("query", url.query()),
        ("hash", url.hash()),
        ("path", url.path()),
    ];

    println!("href:     {}", url.href());
    println!("slashes:  {}", url.slashes());
    for (name, value) in fields {
        match value {
            Some(value) => println!("{:<9} {}", format!("{}:", name), value),
            None => println!("{:<9} null", format!("{}:", name)),
        }
    }
}

#[derive(Serialize)]
struct Summary<'a> {
    passes: usize,
    failures: usize,
    report: &'a Report,
}

fn run_check(path: &Path, json: bool) -> Result<(), CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cases = parse_fixture(&text)?;
    info!(cases = cases.len(), path = %path.display(), "running fixture");

    let report = run_fixture(&cases);

    if json {
        let summary = Summary {
            passes: report.passes(),
            failures: report.failures(),
            report: &report,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for result in &report.results {
            if result.passed() {
                println!("good: {}", result.input);
            } else {
                println!("bad: {}", result.input);
                for mismatch in &result.mismatches {
                    println!("    {}", mismatch);
                }
            }
        }
        println!("passes: {}\nfailures: {}", report.passes(), report.failures());
    }

    debug!(passes = report.passes(), failures = report.failures(), "fixture done");
    match report.failures() {
        0 => Ok(()),
        failures => Err(CliError::Failures(failures)),
    }
}
