// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # order-record
//!
//! Command-line front end for order documents.
//!
//! - `order-record validate <FILE>...` decodes and validates each document
//! - `order-record normalize <FILE>` re-emits a document in canonical form
//! - `order-record swagger` emits Swagger 2.0 definitions for the records
//!
//! Log output goes to stderr. `RUST_LOG` overrides `-v`/`-q` when set.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    Result,
    eyre::{Context, eyre},
};
use order_record_domain::{Order, OrderError};
use order_record_swagger::{
    SwaggerDoc, definitions, parse_case_classes, record_definitions, render_pretty,
    write_definitions,
};
use tracing::level_filters::LevelFilter;
use tracing::{debug, error, info, warn};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    let filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level().to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            error!("{err:#}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Decode and validate order documents
    #[command(visible_alias = "v")]
    Validate {
        /// Order documents to check
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Decode an order document and print its canonical form
    #[command(visible_alias = "n")]
    Normalize {
        /// Order document to normalize
        file: PathBuf,

        /// Print on a single line instead of indented
        #[arg(long)]
        compact: bool,
    },

    /// Emit Swagger definitions for the order records
    #[command(visible_alias = "s")]
    Swagger {
        /// Read `case class` declarations from this file instead of using
        /// the built-in record shapes
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Write one `<Name>_output_swagger.json` file per definition here
        /// instead of printing a merged object
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::Validate { files } => {
                let report: ValidationReport = validate_files(&files);
                println!("{}", report.render());
                report.into_result()
            }
            Self::Normalize { file, compact } => {
                println!("{}", normalize(&file, compact)?);
                Ok(())
            }
            Self::Swagger { input, out_dir } => {
                let docs: Vec<SwaggerDoc> = load_definitions(input.as_deref())?;
                match out_dir {
                    Some(dir) => {
                        for path in write_definitions(&docs, &dir)? {
                            println!("{}", path.display());
                        }
                    }
                    None => println!("{}", render_pretty(&definitions(&docs))?),
                }
                Ok(())
            }
        }
    }
}

/// Outcome of validating one document.
///
/// Read failures and decode failures are both recorded here.
#[derive(Debug)]
struct FileOutcome {
    path: PathBuf,
    result: Result<()>,
}

/// Outcomes of a `validate` run, in argument order.
#[derive(Debug, Default)]
struct ValidationReport {
    outcomes: Vec<FileOutcome>,
}

impl ValidationReport {
    fn failures(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }

    fn render(&self) -> String {
        self.outcomes
            .iter()
            .map(|outcome| match &outcome.result {
                Ok(()) => format!("ok      {}", outcome.path.display()),
                Err(err) => format!("invalid {}: {err:#}", outcome.path.display()),
            })
            .collect::<Vec<String>>()
            .join("\n")
    }

    fn into_result(self) -> Result<()> {
        let failures: usize = self.failures();
        if failures == 0 {
            info!(count = self.outcomes.len(), "all documents valid");
            Ok(())
        } else {
            Err(eyre!(
                "{failures} of {} documents failed validation",
                self.outcomes.len()
            ))
        }
    }
}

/// Decodes each file, recording one outcome per path.
///
/// Decoding already enforces every element contract, so a decoded order
/// needs no further checks.
fn validate_files(files: &[PathBuf]) -> ValidationReport {
    let mut report: ValidationReport = ValidationReport::default();
    for path in files {
        let result: Result<()> = read_file(path).and_then(|text| {
            Order::from_json(&text)
                .map(|_| ())
                .map_err(color_eyre::Report::from)
        });
        if let Err(err) = &result {
            let field: Option<&str> = err
                .downcast_ref::<OrderError>()
                .and_then(OrderError::field);
            warn!(path = %path.display(), field = ?field, "invalid order document");
        }
        report.outcomes.push(FileOutcome {
            path: path.clone(),
            result,
        });
    }
    report
}

/// Decodes a document and returns its canonical serialization.
fn normalize(path: &Path, compact: bool) -> Result<String> {
    let text: String = read_file(path)?;
    let order: Order = Order::from_json(&text)
        .wrap_err_with(|| format!("Failed to decode order document {}", path.display()))?;
    let rendered: String = if compact {
        order.to_json()?
    } else {
        order.to_json_pretty()?
    };
    Ok(rendered)
}

/// Returns definitions parsed from `input`, or the built-in record shapes.
fn load_definitions(input: Option<&Path>) -> Result<Vec<SwaggerDoc>> {
    let Some(path) = input else {
        debug!("using built-in record shapes");
        return Ok(record_definitions());
    };
    let source: String = read_file(path)?;
    let docs: Vec<SwaggerDoc> = parse_case_classes(&source)
        .wrap_err_with(|| format!("Failed to parse case classes in {}", path.display()))?;
    info!(count = docs.len(), path = %path.display(), "parsed case classes");
    Ok(docs)
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).wrap_err_with(|| format!("Failed to read {}", path.display()))
}
