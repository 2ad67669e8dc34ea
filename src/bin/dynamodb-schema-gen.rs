//! Generate Rust table modules from a directory of JSON table schemas.

use clap::Parser;
use dynamodb_schema::codegen::{GeneratorConfig, naming::EscapePolicy, output};
use std::{path::PathBuf, process::ExitCode};

/// Generate one Rust module per `*.json` table schema.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Directory holding the table schemas.
    #[arg(long, env = "SCHEMA_DIR", default_value = ".tmpl")]
    schema_dir: PathBuf,
    /// Directory receiving the generated modules.
    #[arg(long, env = "OUT_DIR", default_value = "gen")]
    out_dir: PathBuf,
    /// Path the generated modules import the runtime from.
    #[arg(long, default_value = "dynamodb_schema")]
    crate_path: String,
    /// Suffix appended to attribute names that are reserved words.
    #[arg(long, default_value = "_")]
    escape_suffix: String,
    /// Extra reserved words, comma separated.
    #[arg(long, value_delimiter = ',')]
    reserved: Vec<String>,
}

impl Args {
    fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            crate_path: self.crate_path.clone(),
            escape: EscapePolicy::rust()
                .with_suffix(self.escape_suffix.as_str())
                .with_words(self.reserved.iter().cloned()),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match output::generate_dir(&args.schema_dir, &args.out_dir, &args.config()) {
        Ok(report) if report.is_success() => {
            tracing::info!(generated = report.generated.len(), "done");
            ExitCode::SUCCESS
        }
        Ok(report) => {
            tracing::error!(
                generated = report.generated.len(),
                failed = report.failed.len(),
                "some schemas were skipped"
            );
            ExitCode::FAILURE
        }
        Err(err) => {
            tracing::error!(schema_dir = %args.schema_dir.display(), error = %err, "cannot read schemas");
            ExitCode::FAILURE
        }
    }
}
