use anyhow::{Context, Result};
use clap::Parser;
use eca_harness::{load_script, run_once, write_trace};
use eca_engine::RandomSource;
use rand::Rng;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, Level};

/// Drive the ECA reactive engine and record its trace.
#[derive(Parser)]
#[command(name = "eca")]
struct Args {
    /// Maximum number of loop iterations to run.
    #[arg(long, default_value_t = 64)]
    steps: u64,

    /// Seed for the random input source. A fresh seed is drawn (and logged)
    /// when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// YAML file with a fixed input sequence, e.g. `[4, 1, 4]`. Overrides
    /// the random source.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Where to write the recorded trace as JSON (`-` for stdout).
    #[arg(long)]
    trace_out: Option<String>,

    /// Log level.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = Level::from_str(&args.log_level)
        .with_context(|| format!("invalid log level {}", args.log_level))?;
    tracing_subscriber::fmt().with_max_level(level).init();

    let (trace, _verdict) = match &args.script {
        Some(path) => {
            let mut source = load_script(path)?;
            info!(script = %path.display(), steps = args.steps, "starting scripted run");
            run_once(&mut source, args.steps)
        }
        None => {
            let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
            info!(seed, steps = args.steps, "starting random run");
            run_once(&mut RandomSource::new(seed), args.steps)
        }
    };

    if let Some(path) = &args.trace_out {
        write_trace(&trace, path)?;
    }

    Ok(())
}
