//! `sortscope sort`: one run without the visualizer.

use std::fmt::Write as _;

use anyhow::{Context, Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use sortscope_core::{
    Algorithm, EventSink, MAX_ARRAY_LEN, NullSink, RecordingSink, Settings, SharedArray,
    SortOrder, SortOutcome, SortRunner, Step, StepKind,
};

use crate::cli::SortArgs;

/// Result of a headless run.
#[derive(Debug, Clone, Serialize)]
pub struct SortReport {
    /// Algorithm that ran.
    pub algorithm: Algorithm,
    /// Direction used.
    pub order: SortOrder,
    /// Array before the run.
    pub input: Vec<i32>,
    /// Array after the run.
    pub output: Vec<i32>,
    /// Completion, counters and timing.
    pub outcome: SortOutcome,
    /// Every step, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Step>>,
}

/// Runs the sort on the calling thread.
pub fn run(args: &SortArgs, settings: &Settings, seed: Option<u64>) -> Result<SortReport> {
    let array = build_array(args, settings, seed)?;
    let input = array.snapshot();
    let delay = if args.paced { settings.delay_ms } else { 0 };

    let mut runner = SortRunner::new(array.clone(), delay).with_order(settings.order);
    let request = runner.request(args.algorithm);

    let recorder = RecordingSink::new();
    let sink: &dyn EventSink = if args.steps { &recorder } else { &NullSink };
    let outcome = runner.run_blocking(request, sink)?;
    tracing::info!(
        algorithm = args.algorithm.id(),
        steps = outcome.stats.steps,
        "headless sort finished"
    );

    Ok(SortReport {
        algorithm: args.algorithm,
        order: settings.order,
        input,
        output: array.snapshot(),
        outcome,
        steps: args.steps.then(|| recorder.steps()),
    })
}

fn build_array(args: &SortArgs, settings: &Settings, seed: Option<u64>) -> Result<SharedArray> {
    if let Some(values) = &args.values {
        if values.is_empty() {
            bail!("--values needs at least one number");
        }
        if values.len() > MAX_ARRAY_LEN {
            bail!("--values accepts at most {MAX_ARRAY_LEN} numbers, got {}", values.len());
        }
        return Ok(SharedArray::from_values(values.clone()));
    }

    let array = SharedArray::from_values(Vec::new());
    let (size, min, max) = (settings.size, settings.min, settings.max);
    match seed {
        Some(seed) => array.regenerate_with(&mut StdRng::seed_from_u64(seed), size, min, max),
        None => array.regenerate(size, min, max),
    }
    .context("failed to generate the array")?;
    Ok(array)
}

/// Renders the report as JSON.
pub fn to_json(report: &SortReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("failed to serialize the report")
}

/// Renders the report for humans.
pub fn to_text(report: &SortReport) -> String {
    let mut out = String::new();
    let stats = &report.outcome.stats;
    let _ = writeln!(
        out,
        "{} ({}), {} elements",
        report.algorithm,
        report.order,
        report.input.len()
    );
    if let Some(steps) = &report.steps {
        for step in steps {
            let _ = writeln!(out, "  {:>5}  {}", step.seq, describe(step.kind));
        }
    }
    let _ = writeln!(out, "input:  {}", join(&report.input));
    let _ = writeln!(out, "output: {}", join(&report.output));
    let _ = write!(
        out,
        "{} comparisons, {} swaps, {} writes, {} steps in {} ms",
        stats.comparisons, stats.swaps, stats.writes, stats.steps, report.outcome.elapsed_ms
    );
    if !report.outcome.is_completed() {
        out.push_str(" (cancelled)");
    }
    out
}

fn describe(kind: StepKind) -> String {
    match kind {
        StepKind::Compare {
            left,
            right,
            swapped,
        } => {
            let verb = if swapped { "swap" } else { "keep" };
            format!("compare {left} {right} -> {verb}")
        }
        StepKind::Place { target, source } => format!("place {source} at {target}"),
        StepKind::Write { index, value } => format!("write {value} at {index}"),
    }
}

fn join(values: &[i32]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
