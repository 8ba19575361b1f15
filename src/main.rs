use anyhow::{Context, Result};
use std::{
    env,
    fs::File,
    io::{self, BufReader, Write},
    time::Instant,
};
use swatchgen::process;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    // diagnostics go to stderr; stdout belongs to the generated lines
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    // ─── 2) explicit input path ──────────────────────────────────────
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <swatch_table.csv>", args[0]);
        std::process::exit(1);
    }
    let path = &args[1];

    // ─── 3) stream the table to stdout ───────────────────────────────
    let file =
        File::open(path).with_context(|| format!("opening swatch table {}", path))?;
    let start = Instant::now();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let rows = process::transcode(BufReader::new(file), &mut out)?;
    out.flush().context("flushing stdout")?;

    info!(rows, elapsed = ?start.elapsed(), "transcode complete");
    Ok(())
}
