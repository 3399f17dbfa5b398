// crates/cli/src/run.rs
//! Executes a parsed command and times each evaluation.
use std::fmt;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use lazyq_engine::{
    CancellationToken, ParallelOptions, ParallelQuery, Parallelism, RandomIntegers, range,
};
use log::{debug, info};
use serde::Serialize;

use crate::args::{AggregateArgs, Command, ParallelArgs, PrimesArgs};
use crate::options::Operation;

/// Result of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Integer(i64),
    Float(f64),
    Count(usize),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:.4}"),
            Self::Count(v) => write!(f, "{v}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    Sequential,
    Parallel,
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Measurement {
    pub label: String,
    pub engine: Engine,
    pub value: Outcome,
    pub elapsed_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub command: &'static str,
    pub len: usize,
    pub workers: usize,
    pub measurements: Vec<Measurement>,
}

pub fn run(command: &Command) -> Result<Report> {
    match command {
        Command::Aggregate(args) => aggregate(args),
        Command::Primes(args) => primes(args),
    }
}

fn parallel_options(args: &ParallelArgs) -> ParallelOptions {
    let token = CancellationToken::new();
    if let Some(ms) = args.timeout_ms {
        let timer = token.clone();
        let delay = Duration::from_millis(u64::try_from(ms).unwrap_or(u64::MAX));
        thread::spawn(move || {
            thread::sleep(delay);
            debug!("timeout of {delay:?} reached, cancelling");
            timer.cancel();
        });
    }
    ParallelOptions {
        parallelism: args.jobs.map_or_else(Parallelism::available, Parallelism::new),
        cancellation: Some(token),
        min_partition_len: args.min_partition,
    }
}

fn timed<T>(label: &str, engine: Engine, f: impl FnOnce() -> Result<T>) -> Result<(T, f64)> {
    let start = Instant::now();
    let value = f().with_context(|| format!("{engine} {label} failed"))?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1_000.0;
    info!("{engine} {label}: {elapsed_ms:.2} ms");
    Ok((value, elapsed_ms))
}

fn aggregate(args: &AggregateArgs) -> Result<Report> {
    let source = RandomIntegers::new(args.seed, args.len, args.range.clone());
    let options = parallel_options(&args.parallel);
    let mut measurements = Vec::new();

    if args.parallel.mode.runs_sequential() {
        let query = source.query();
        for &op in &args.operations {
            let label = label(op);
            let (value, elapsed_ms) = timed(label, Engine::Sequential, || {
                Ok(match op {
                    Operation::Max => Outcome::Integer(query.max()?),
                    Operation::Min => Outcome::Integer(query.min()?),
                    Operation::Sum => Outcome::Integer(query.sum()),
                    Operation::Avg => Outcome::Float(query.average()?),
                    Operation::Count => Outcome::Count(query.count()),
                })
            })?;
            measurements.push(Measurement {
                label: label.to_owned(),
                engine: Engine::Sequential,
                value,
                elapsed_ms,
            });
        }
    }

    if args.parallel.mode.runs_parallel() {
        let values = source.to_vec();
        for &op in &args.operations {
            let label = label(op);
            let input = values.clone();
            let options = options.clone();
            let (value, elapsed_ms) = timed(label, Engine::Parallel, move || {
                let query = ParallelQuery::new(input, options);
                Ok(match op {
                    Operation::Max => Outcome::Integer(query.max()?),
                    Operation::Min => Outcome::Integer(query.min()?),
                    Operation::Sum => Outcome::Integer(query.sum()?),
                    Operation::Avg => Outcome::Float(query.average()?),
                    Operation::Count => Outcome::Count(query.count()?),
                })
            })?;
            measurements.push(Measurement {
                label: label.to_owned(),
                engine: Engine::Parallel,
                value,
                elapsed_ms,
            });
        }
    }

    Ok(Report {
        command: "aggregate",
        len: args.len,
        workers: options.parallelism.get(),
        measurements,
    })
}

const fn label(op: Operation) -> &'static str {
    match op {
        Operation::Max => "max",
        Operation::Min => "min",
        Operation::Sum => "sum",
        Operation::Avg => "average",
        Operation::Count => "count",
    }
}

/// Trial division by every `i` in `2..2 + floor(sqrt(n))`.
fn is_prime(n: &u64) -> bool {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let bound = (*n as f64).sqrt() as u64;
    range(2..2 + bound).all(|i| n % i > 0)
}

fn primes(args: &PrimesArgs) -> Result<Report> {
    let limit = u64::try_from(args.limit).context("limit does not fit in u64")?;
    let options = parallel_options(&args.parallel);
    let mut measurements = Vec::new();

    if args.parallel.mode.runs_sequential() {
        let query = range(3..limit).filter(is_prime).order_by(|p| *p);
        let (found, elapsed_ms) = timed("primes", Engine::Sequential, || Ok(query.to_list()))?;
        let last = found.last().copied().unwrap_or_default();
        debug!("largest prime below {limit}: {last}");
        measurements.push(Measurement {
            label: "count".to_owned(),
            engine: Engine::Sequential,
            value: Outcome::Count(found.len()),
            elapsed_ms,
        });
        measurements.push(Measurement {
            label: "largest".to_owned(),
            engine: Engine::Sequential,
            value: Outcome::Integer(i64::try_from(last).context("prime does not fit in i64")?),
            elapsed_ms,
        });
    }

    if args.parallel.mode.runs_parallel() {
        let input: Vec<u64> = (3..limit).collect();
        let options = options.clone();
        let (count, elapsed_ms) = timed("primes", Engine::Parallel, move || {
            Ok(ParallelQuery::new(input, options).filter(is_prime).count()?)
        })?;
        measurements.push(Measurement {
            label: "count".to_owned(),
            engine: Engine::Parallel,
            value: Outcome::Count(count),
            elapsed_ms,
        });
    }

    Ok(Report {
        command: "primes",
        len: args.limit.saturating_sub(3),
        workers: options.parallelism.get(),
        measurements,
    })
}
