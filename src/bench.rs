//! Times search entry points the way `timeit.repeat` does: `repeat` batches of
//! `number` calls each, keeping the fastest batch.

use core::{fmt, time::Duration};
use std::hint::black_box;

use thiserror::Error;
use tracing::debug;

use crate::time::Stopwatch;

#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Batches to time
    pub repeat: usize,
    /// Calls per batch
    pub number: usize,
}
impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            repeat: 3,
            number: 10,
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum BenchError {
    #[error("`repeat` ({repeat}) and `number` ({number}) must both be non-zero")]
    EmptyConfig { repeat: usize, number: usize },
}

#[derive(Debug, Clone, Default)]
pub struct Bench {
    config: BenchConfig,
}
impl Bench {
    pub fn new(config: BenchConfig) -> Result<Self, BenchError> {
        if config.repeat == 0 || config.number == 0 {
            return Err(BenchError::EmptyConfig {
                repeat: config.repeat,
                number: config.number,
            });
        }
        Ok(Self { config })
    }

    #[must_use]
    pub const fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Calls `workload` `repeat * number` times.
    ///
    /// Anything borrowed by `workload`, the searched slice included, is only
    /// read.
    pub fn run<R>(&self, name: impl Into<String>, mut workload: impl FnMut() -> R) -> Measurement {
        let mut stopwatch = Stopwatch::with_capacity(self.config.repeat);
        for _ in 0..self.config.repeat {
            let _lap = stopwatch.start_lap();
            for _ in 0..self.config.number {
                black_box(workload());
            }
        }
        let measurement = Measurement {
            name: name.into(),
            target: None,
            calls_per_batch: self.config.number,
            batches: stopwatch.into_laps(),
        };
        debug!(
            name = %measurement.name,
            min = %HumanDuration(measurement.min()),
            mean = %HumanDuration(measurement.mean()),
            "measured"
        );
        measurement
    }
}

#[derive(Debug, Clone)]
pub struct Measurement {
    name: String,
    target: Option<String>,
    calls_per_batch: usize,
    batches: Vec<Duration>,
}
impl Measurement {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Names the value the workload searched for in the report
    #[must_use]
    pub fn with_target(mut self, target: impl fmt::Display) -> Self {
        self.target = Some(target.to_string());
        self
    }
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
    #[must_use]
    pub fn batches(&self) -> &[Duration] {
        &self.batches
    }
    /// Duration of the fastest batch
    #[must_use]
    pub fn min(&self) -> Duration {
        self.batches.iter().min().copied().unwrap_or_default()
    }
    #[must_use]
    pub fn mean(&self) -> Duration {
        let n = u32::try_from(self.batches.len()).unwrap_or(u32::MAX);
        if n == 0 {
            return Duration::ZERO;
        }
        self.batches.iter().sum::<Duration>() / n
    }
    /// Fastest batch divided by its number of calls
    #[must_use]
    pub fn min_per_call(&self) -> Duration {
        let n = u32::try_from(self.calls_per_batch).unwrap_or(u32::MAX);
        if n == 0 {
            return Duration::ZERO;
        }
        self.min() / n
    }
}
impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Algorithm: {}. ", self.name)?;
        if let Some(target) = &self.target {
            write!(f, "Element {target} Found. ")?;
        }
        write!(f, "Minimum execution time: {:.3}", HumanDuration(self.min()))
    }
}

/// Formats a duration in the largest unit that keeps the value at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HumanDuration(pub Duration);
impl fmt::Display for HumanDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const UNITS: [(u128, &str); 4] = [
            (1_000_000_000, "s"),
            (1_000_000, "ms"),
            (1_000, "us"),
            (1, "ns"),
        ];
        let nanos = self.0.as_nanos();
        let (scale, unit) = UNITS
            .iter()
            .copied()
            .find(|(scale, _)| *scale <= nanos)
            .unwrap_or(UNITS[UNITS.len() - 1]);
        fmt::Display::fmt(&(nanos as f64 / scale as f64), f)?;
        write!(f, " {unit}")
    }
}
