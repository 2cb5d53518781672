//! Command-line driver for the metric source generator.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use metricgen_core::{run, GeneratorConfig, Mode, MAX_DIMENSIONALITY};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "metricgen")]
#[command(about = "Generates the per-dimensionality metric sources and verifies checked-in copies")]
struct Cli {
    /// Verify read-only destinations instead of regenerating them.
    #[arg(long = "check_consistency")]
    check_consistency: bool,

    /// Highest dimensionality to generate, starting from 1.
    #[arg(long, default_value_t = MAX_DIMENSIONALITY)]
    max_dimensionality: u32,

    /// Directory holding the category templates.
    #[arg(long, default_value = "templates")]
    template_dir: PathBuf,

    /// Directory the generated sources are written into.
    #[arg(long, default_value = "generated")]
    out_dir: PathBuf,
}

fn main() -> ExitCode {
    // Diagnostics belong on the error stream.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GeneratorConfig {
        template_dir: cli.template_dir,
        out_dir: cli.out_dir,
        max_dimensionality: cli.max_dimensionality,
        mode: if cli.check_consistency {
            Mode::CheckOnly
        } else {
            Mode::Generate
        },
    };

    match run(&config) {
        Ok(summary) => {
            info!(
                written = summary.written,
                unchanged = summary.unchanged,
                "generation complete"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
