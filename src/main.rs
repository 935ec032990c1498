use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Extract the structure of a PHP source file as JSON.
#[derive(Parser)]
#[command(name = "phpoutline", version, about)]
struct Cli {
    /// PHP source file to extract.
    file: PathBuf,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,

    /// Include diagnostics in the JSON output instead of logging them.
    #[arg(long)]
    with_diagnostics: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let extraction = match phpoutline::extract_file(&cli.file) {
        Ok(extraction) => extraction,
        Err(err) => {
            tracing::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    if !cli.with_diagnostics {
        for diagnostic in &extraction.diagnostics {
            tracing::warn!("{diagnostic}");
        }
    }

    let json = if cli.with_diagnostics {
        to_json(&extraction, cli.pretty)
    } else {
        to_json(&extraction.root, cli.pretty)
    };
    match json {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("failed to serialize extraction: {err}");
            ExitCode::FAILURE
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
