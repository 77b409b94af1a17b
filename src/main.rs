use anyhow::{Context, Result};
use clap::Parser;
use roomtemp::{cli::Opts, ingest, shell::Shell};
use std::{io, process::ExitCode};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<ExitCode> {
    // ─── 1) settings ─────────────────────────────────────────────────
    let opts = Opts::parse();
    let settings = opts.settings().context("loading settings")?;

    // ─── 2) init logging (stderr; stdout is the session) ─────────────
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();
    info!(path = %settings.csv_path.display(), "startup");

    // ─── 3) load the table, all or nothing ───────────────────────────
    let ingested = match ingest::load(&settings.csv_path) {
        Ok(ingested) => ingested,
        Err(e) => {
            error!("ingestion failed: {}", e);
            eprintln!("\nError: {e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    // ─── 4) query loop ───────────────────────────────────────────────
    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(&ingested.table, stdin.lock(), stdout.lock())
        .run()
        .context("interactive session")?;

    info!("all done");
    Ok(ExitCode::SUCCESS)
}
