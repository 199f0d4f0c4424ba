use core::time::Duration;
use std::time::Instant;

/// Records the duration of each scoped lap.
#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    laps: Vec<Duration>,
}
impl Stopwatch {
    #[must_use]
    pub const fn new() -> Self {
        Self { laps: Vec::new() }
    }
    #[must_use]
    pub fn with_capacity(laps: usize) -> Self {
        Self {
            laps: Vec::with_capacity(laps),
        }
    }

    /// The lap ends when the returned guard is stopped or dropped.
    pub fn start_lap(&mut self) -> RunningLap<'_> {
        RunningLap {
            stopwatch: self,
            start: Some(Instant::now()),
        }
    }

    #[must_use]
    pub fn laps(&self) -> &[Duration] {
        &self.laps
    }
    #[must_use]
    pub fn into_laps(self) -> Vec<Duration> {
        self.laps
    }
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.laps.iter().sum()
    }
}

#[derive(Debug)]
pub struct RunningLap<'a> {
    stopwatch: &'a mut Stopwatch,
    start: Option<Instant>,
}
impl RunningLap<'_> {
    pub fn stop(mut self) -> Duration {
        self.record()
    }
    fn record(&mut self) -> Duration {
        let Some(start) = self.start.take() else {
            return Duration::ZERO;
        };
        let elapsed = start.elapsed();
        self.stopwatch.laps.push(elapsed);
        elapsed
    }
}
impl Drop for RunningLap<'_> {
    fn drop(&mut self) {
        self.record();
    }
}
