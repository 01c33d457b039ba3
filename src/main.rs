use clap::error::ErrorKind;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hdr_rmse::models::RunConfig;
use hdr_rmse::report::write_report;
use hdr_rmse::{compare, CodecRegistry};

#[derive(Parser)]
#[command(name = "hdr-rmse")]
#[command(version)]
#[command(about = "Luminance RMSE of two HDR/OpenEXR images against a reference")]
struct Cli {
    /// First candidate image (.hdr or .exr)
    candidate1: PathBuf,

    /// Second candidate image (.hdr or .exr)
    candidate2: PathBuf,

    /// Reference image (.hdr or .exr)
    reference: PathBuf,

    /// Any value enables diff output, same as --diff
    #[arg(value_name = "DIFF")]
    diff_toggle: Option<String>,

    /// Write diff1.exr/diff2.exr and report the worst pixel of each candidate
    #[arg(long)]
    diff: bool,

    /// Directory for diff images (default: current directory)
    #[arg(long, env = "DIFF_DIR", value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => {
                    eprintln!("\nSample usage: hdr-rmse image1.exr image2.exr refImage.exr [diff]");
                    ExitCode::from(1)
                }
            };
        }
    };

    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hdr_rmse=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let diff = cli.diff || cli.diff_toggle.is_some();
    let config = RunConfig::from_args(
        vec![cli.candidate1, cli.candidate2],
        cli.reference,
        diff,
        cli.output_dir,
        cli.json,
    );

    if let Some(dir) = &config.request.diff_dir {
        std::fs::create_dir_all(dir).map_err(|e| {
            anyhow::anyhow!("Failed to create output directory {}: {e}", dir.display())
        })?;
    }

    let codecs = CodecRegistry::with_defaults();
    let report = compare(&codecs, &config.request)?;
    tracing::info!(
        candidates = report.candidates.len(),
        width = report.width,
        height = report.height,
        "Comparison complete"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &report, config.format, config.style)?;
    out.flush()?;

    Ok(())
}
