use crate::{name::TimerName, stats, stats::TimerStats};
use std::{
    cell::RefCell,
    time::{Duration, Instant},
};

#[derive(Debug, Default)]
struct State {
    start_time: Option<Instant>,
    total_elapsed: f64,
    timings: Vec<f64>,
}

impl State {
    fn in_progress(&self) -> Option<f64> {
        self.start_time
            .map(|start| Instant::now().duration_since(start).as_secs_f64())
    }
}

/// A named, restartable stopwatch.
///
/// Every completed start/stop cycle is kept as one sample (in seconds) and the
/// statistics are computed over those samples. While running, the interval in
/// progress counts as an extra, last sample.
///
/// All operations take `&self`, so a timer handed out by a
/// [`Registry`](crate::Registry) can be used directly and stays consistent with
/// calls made through the registry.
#[derive(Debug)]
pub struct Timer {
    name: TimerName,
    state: RefCell<State>,
}

impl Timer {
    pub fn new(name: impl Into<TimerName>) -> Self {
        Self {
            name: name.into(),
            state: RefCell::new(State::default()),
        }
    }

    #[must_use]
    pub fn name(&self) -> &TimerName {
        &self.name
    }

    #[must_use]
    pub fn active(&self) -> bool {
        self.state.borrow().start_time.is_some()
    }

    /// Starts the timer, does nothing if it is already running
    pub fn start(&self) {
        let mut state = self.state.borrow_mut();

        if state.start_time.is_none() {
            state.start_time = Some(Instant::now());
        }
    }

    /// Runs `work` between a start and a stop and returns its result
    pub fn start_with<F, R>(&self, work: F) -> R
    where
        F: FnOnce() -> R,
    {
        self.start();
        let result = work();
        self.stop();
        result
    }

    /// Stops the timer and returns the accumulated total.
    ///
    /// The finished interval is stored as a new sample. Stopping an idle timer
    /// changes nothing.
    pub fn stop(&self) -> f64 {
        let mut state = self.state.borrow_mut();

        if let Some(duration) = state.in_progress() {
            state.timings.push(duration);
            state.total_elapsed += duration;
            state.start_time = None;
        }

        state.total_elapsed
    }

    /// Stores an externally measured interval as a completed sample
    pub fn record(&self, duration: Duration) {
        let mut state = self.state.borrow_mut();
        let duration = duration.as_secs_f64();

        state.timings.push(duration);
        state.total_elapsed += duration;
    }

    /// Time spent so far, including the interval in progress
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        let state = self.state.borrow();
        state.total_elapsed + state.in_progress().unwrap_or(0.0)
    }

    /// Completed samples, plus the current interval if the timer is running
    #[must_use]
    pub fn timings(&self) -> Vec<f64> {
        let state = self.state.borrow();
        let mut timings = state.timings.clone();

        if let Some(current) = state.in_progress() {
            timings.push(current);
        }

        timings
    }

    /// Clears the total and the samples.
    ///
    /// With `force` the timer is also stopped. Otherwise a running timer keeps
    /// running, measuring from now.
    pub fn reset(&self, force: bool) {
        let mut state = self.state.borrow_mut();

        if force {
            state.start_time = None;
        } else if state.start_time.is_some() {
            state.start_time = Some(Instant::now());
        }

        state.total_elapsed = 0.0;
        state.timings.clear();
    }

    #[must_use]
    pub fn count(&self) -> usize {
        let state = self.state.borrow();
        state.timings.len() + usize::from(state.start_time.is_some())
    }

    #[must_use]
    pub fn min(&self) -> Option<f64> {
        stats::min(&self.timings())
    }

    #[must_use]
    pub fn max(&self) -> Option<f64> {
        stats::max(&self.timings())
    }

    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        stats::mean(&self.timings())
    }

    #[must_use]
    pub fn median(&self) -> Option<f64> {
        stats::median(&self.timings())
    }

    /// Interpolated percentile, see [`stats::percentile`]
    #[must_use]
    pub fn percentile(&self, p: f64) -> Option<f64> {
        stats::percentile(&self.timings(), p)
    }

    #[must_use]
    pub fn stats(&self) -> TimerStats {
        // take a single snapshot so elapsed and the samples agree
        let state = self.state.borrow();
        let mut timings = state.timings.clone();
        let mut elapsed = state.total_elapsed;

        if let Some(current) = state.in_progress() {
            timings.push(current);
            elapsed += current;
        }

        TimerStats::from_samples(elapsed, &timings)
    }
}
