//! Driver support for the ECA benchmark.
//!
//! The binary plays the role the external checker does in a verification
//! run: it supplies input symbols (randomly or from a script), observes the
//! output valuation after every step, and reports whether the prefix it ran
//! witnessed the target valuation.

use anyhow::{Context, Result};
use eca_engine::{eventually_ack, run, Engine, InputSource, ScriptedSource, Verdict};
use eca_types::Trace;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Load a scripted input sequence from a YAML file.
///
/// The file is a YAML list of integer symbols, e.g. `[4, 1, 4]`. Symbols
/// outside the alphabet are rejected here, before the engine ever sees them.
pub fn load_script(path: &Path) -> Result<ScriptedSource> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read script file {}", path.display()))?;
    let values: Vec<i64> = serde_yaml::from_str(&raw)
        .with_context(|| format!("parse script file {}", path.display()))?;
    let source = ScriptedSource::from_values(&values)
        .with_context(|| format!("validate script file {}", path.display()))?;
    Ok(source)
}

/// Write a recorded trace as JSON to `path`, or to stdout when `path` is
/// `-`.
pub fn write_trace(trace: &Trace, path: &str) -> Result<()> {
    let encoded =
        serde_json::to_string_pretty(trace).context("encode trace")?;
    if path == "-" {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{encoded}").context("write trace to stdout")?;
    } else {
        std::fs::write(path, encoded)
            .with_context(|| format!("write trace file {path}"))?;
    }
    Ok(())
}

/// Drive a fresh engine with `source` for at most `steps` iterations and
/// log a run summary.
pub fn run_once(source: &mut impl InputSource, steps: u64) -> (Trace, Verdict) {
    let mut engine = Engine::new();
    let trace = run(&mut engine, source, steps);
    let verdict = eventually_ack(&trace);

    match verdict {
        Verdict::Satisfied { at } => info!(
            steps = trace.len(),
            counter = engine.counter(),
            witness = at,
            "target valuation observed"
        ),
        Verdict::Open => info!(
            steps = trace.len(),
            counter = engine.counter(),
            "target valuation not observed in this prefix"
        ),
    }

    (trace, verdict)
}
