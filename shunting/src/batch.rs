//! Line-oriented drivers over named text sources.
//!
//! Two modes are supported:
//! - collection: every whitespace separated token is a number, all of them
//!   are summed per source;
//! - expression: every line is one infix expression.
//!
//! Bad tokens and bad lines are reported and skipped, a missing source is
//! reported and the next one is processed.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use rational::{Rational, RationalError, RationalList};
use thiserror::Error;

use crate::rpneval::{evaluate_expression, EvaluationError};

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Error: File {0} not found")]
    NotFound(String),

    #[error("Error processing {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("Error processing {name}: {source}")]
    Sum {
        name: String,
        #[source]
        source: RationalError,
    },
}

/// A named stream of lines.
pub struct Source<R> {
    name: String,
    reader: R,
}

impl<R: BufRead> Source<R> {
    pub fn new<S: Into<String>>(name: S, reader: R) -> Self {
        Source {
            name: name.into(),
            reader,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // Blank lines are dropped, the rest come back trimmed. Bytes that are
    // not UTF-8 are replaced so the line still fails on its own; only a
    // real read error ends the stream.
    fn lines(self) -> impl Iterator<Item = Result<String, BatchError>> {
        let Source { name, mut reader } = self;
        let mut buf = Vec::new();
        let mut done = false;
        std::iter::from_fn(move || {
            while !done {
                buf.clear();
                match reader.read_until(b'\n', &mut buf) {
                    Ok(0) => done = true,
                    Ok(_) => {
                        let line = String::from_utf8_lossy(&buf);
                        let line = line.trim();
                        if !line.is_empty() {
                            return Some(Ok(line.to_string()));
                        }
                    }
                    Err(source) => {
                        done = true;
                        return Some(Err(BatchError::Io {
                            name: name.clone(),
                            source,
                        }));
                    }
                }
            }
            None
        })
    }
}

impl Source<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, BatchError> {
        let name = path.as_ref().display().to_string();
        match File::open(path.as_ref()) {
            Ok(file) => Ok(Source::new(name, BufReader::new(file))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(BatchError::NotFound(name)),
            Err(source) => Err(BatchError::Io { name, source }),
        }
    }
}

/// A token of a collection source that is not a number.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenWarning {
    pub source: String,
    pub token: String,
    pub error: RationalError,
}

impl fmt::Display for TokenWarning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Warning: Could not parse '{}' in {}: {}",
            self.token, self.source, self.error
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SumReport {
    pub source: String,
    pub numbers: RationalList,
    pub total: Rational,
    pub warnings: Vec<TokenWarning>,
}

impl fmt::Display for SumReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "File: {}", self.source)?;
        writeln!(f, "Number of elements: {}", self.numbers.len())?;
        writeln!(f, "Sum as fraction: {}", self.total)?;
        writeln!(f, "Sum as decimal: {:.6}", self.total.to_f64())?;
        write!(f, "{}", "-".repeat(40))
    }
}

pub fn collect_source<R: BufRead>(source: Source<R>) -> Result<SumReport, BatchError> {
    let name = source.name().to_string();
    let mut numbers = RationalList::new();
    let mut warnings = Vec::new();

    for line in source.lines() {
        for token in line?.split_whitespace() {
            if let Err(error) = numbers.push_str(token) {
                tracing::warn!(source = %name, %token, %error, "skipping token");
                warnings.push(TokenWarning {
                    source: name.clone(),
                    token: token.to_string(),
                    error,
                });
            }
        }
    }

    let total = numbers.sum().map_err(|source| BatchError::Sum {
        name: name.clone(),
        source,
    })?;
    tracing::debug!(source = %name, count = numbers.len(), %total, "summed");
    Ok(SumReport {
        source: name,
        numbers,
        total,
        warnings,
    })
}

/// The result of evaluating one expression line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineOutcome {
    pub expr: String,
    pub result: Result<Rational, EvaluationError>,
}

impl LineOutcome {
    pub fn evaluate(expr: &str) -> LineOutcome {
        let result = evaluate_expression(expr);
        if let Err(ref e) = result {
            tracing::warn!(%expr, error = %e, "expression failed");
        }
        LineOutcome {
            expr: expr.to_string(),
            result,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

impl fmt::Display for LineOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.result {
            Ok(ref value) => write!(f, "{} = {} (≈{:.6})", self.expr, value, value.to_f64()),
            Err(ref e) => write!(f, "Error evaluating expression '{}': {}", self.expr, e),
        }
    }
}

/// Evaluate the lines of `source` one by one. A read error is yielded once
/// after every outcome read before it.
pub fn eval_lines<R: BufRead>(
    source: Source<R>,
) -> impl Iterator<Item = Result<LineOutcome, BatchError>> {
    source
        .lines()
        .map(|line| line.map(|expr| LineOutcome::evaluate(&expr)))
}

pub fn eval_source<R: BufRead>(source: Source<R>) -> Result<Vec<LineOutcome>, BatchError> {
    eval_lines(source).collect()
}

/// Counters over a whole run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub sources_ok: usize,
    pub sources_failed: usize,
    pub items_ok: usize,
    pub items_failed: usize,
}

fn report_failure(out: &mut impl Write, summary: &mut RunSummary, e: BatchError) -> io::Result<()> {
    tracing::warn!(error = %e, "source skipped");
    summary.sources_failed += 1;
    writeln!(out, "{}", e)
}

/// Sum the numbers of every source in `paths`, writing a report per source.
pub fn run_collect<P: AsRef<Path>>(paths: &[P], out: &mut impl Write) -> io::Result<RunSummary> {
    let mut summary = RunSummary::default();
    for path in paths {
        match Source::open(path).and_then(collect_source) {
            Err(e) => report_failure(out, &mut summary, e)?,
            Ok(report) => {
                for warning in report.warnings.iter() {
                    writeln!(out, "{}", warning)?;
                }
                writeln!(out, "{}", report)?;
                summary.sources_ok += 1;
                summary.items_ok += report.numbers.len();
                summary.items_failed += report.warnings.len();
            }
        }
    }
    Ok(summary)
}

/// Evaluate every line of every source in `paths` as an expression.
pub fn run_eval<P: AsRef<Path>>(paths: &[P], out: &mut impl Write) -> io::Result<RunSummary> {
    let mut summary = RunSummary::default();
    for path in paths {
        let source = match Source::open(path) {
            Ok(source) => source,
            Err(e) => {
                report_failure(out, &mut summary, e)?;
                continue;
            }
        };
        let mut failed = None;
        for outcome in eval_lines(source) {
            match outcome {
                Ok(outcome) => {
                    writeln!(out, "{}", outcome)?;
                    if outcome.is_ok() {
                        summary.items_ok += 1;
                    } else {
                        summary.items_failed += 1;
                    }
                }
                Err(e) => failed = Some(e),
            }
        }
        match failed {
            Some(e) => report_failure(out, &mut summary, e)?,
            None => summary.sources_ok += 1,
        }
    }
    Ok(summary)
}
