//! Per-thread registry.
//!
//! The functions here operate on a [`Registry`] that every thread creates on
//! first use and owns privately, so two threads timing the same name never see
//! each other's timers.
//!
//! ```
//! use std::{thread, time::Duration};
//!
//! timeup::local::start("work");
//! thread::sleep(Duration::from_millis(5));
//! timeup::local::stop("work").unwrap();
//!
//! assert!(timeup::local::elapsed("work").unwrap() > 0.0);
//!
//! let other = thread::spawn(|| timeup::local::contains("work")).join().unwrap();
//! assert!(!other);
//! # timeup::local::delete_all();
//! ```

use crate::{
    error::Result,
    name::TimerName,
    registry::Registry,
    stats::TimerStats,
    timer::Timer,
};
use std::{collections::BTreeMap, rc::Rc};

thread_local! {
    static REGISTRY: Registry = Registry::new();
}

/// Runs `f` with this thread's registry
pub fn with_registry<F, R>(f: F) -> R
where
    F: FnOnce(&Registry) -> R,
{
    REGISTRY.with(f)
}

pub fn timer(name: impl Into<TimerName>) -> Rc<Timer> {
    with_registry(|registry| registry.timer(name))
}

#[must_use]
pub fn contains(name: impl Into<TimerName>) -> bool {
    with_registry(|registry| registry.contains(name))
}

pub fn start(name: impl Into<TimerName>) -> Rc<Timer> {
    with_registry(|registry| registry.start(name))
}

/// Times `work` under `name`.
///
/// The registry is only borrowed to look the timer up, `work` itself may use
/// the functions of this module.
pub fn start_with<F, R>(name: impl Into<TimerName>, work: F) -> R
where
    F: FnOnce() -> R,
{
    timer(name).start_with(work)
}

/// # Errors
/// [`crate::Error::UnknownTimer`] if no timer has this name
pub fn stop(name: impl Into<TimerName>) -> Result<f64> {
    with_registry(|registry| registry.stop(name))
}

/// # Errors
/// [`crate::Error::UnknownTimer`] if no timer has this name
pub fn reset(name: impl Into<TimerName>) -> Result<()> {
    with_registry(|registry| registry.reset(name))
}

/// # Errors
/// [`crate::Error::UnknownTimer`] if no timer has this name
pub fn elapsed(name: impl Into<TimerName>) -> Result<f64> {
    with_registry(|registry| registry.elapsed(name))
}

/// # Errors
/// [`crate::Error::UnknownTimer`] if no timer has this name
pub fn timings(name: impl Into<TimerName>) -> Result<Vec<f64>> {
    with_registry(|registry| registry.timings(name))
}

/// # Errors
/// [`crate::Error::UnknownTimer`] if no timer has this name
pub fn count(name: impl Into<TimerName>) -> Result<usize> {
    with_registry(|registry| registry.count(name))
}

/// # Errors
/// [`crate::Error::UnknownTimer`] if no timer has this name
pub fn min(name: impl Into<TimerName>) -> Result<Option<f64>> {
    with_registry(|registry| registry.min(name))
}

/// # Errors
/// [`crate::Error::UnknownTimer`] if no timer has this name
pub fn max(name: impl Into<TimerName>) -> Result<Option<f64>> {
    with_registry(|registry| registry.max(name))
}

/// # Errors
/// [`crate::Error::UnknownTimer`] if no timer has this name
pub fn mean(name: impl Into<TimerName>) -> Result<Option<f64>> {
    with_registry(|registry| registry.mean(name))
}

/// # Errors
/// [`crate::Error::UnknownTimer`] if no timer has this name
pub fn median(name: impl Into<TimerName>) -> Result<Option<f64>> {
    with_registry(|registry| registry.median(name))
}

/// # Errors
/// [`crate::Error::UnknownTimer`] if no timer has this name
pub fn percentile(name: impl Into<TimerName>, p: f64) -> Result<Option<f64>> {
    with_registry(|registry| registry.percentile(name, p))
}

#[must_use]
pub fn total_elapsed() -> f64 {
    with_registry(Registry::total_elapsed)
}

#[must_use]
pub fn all_elapsed() -> BTreeMap<TimerName, f64> {
    with_registry(Registry::all_elapsed)
}

#[must_use]
pub fn all_timers() -> Vec<Rc<Timer>> {
    with_registry(Registry::all_timers)
}

#[must_use]
pub fn all_stats() -> BTreeMap<TimerName, TimerStats> {
    with_registry(Registry::all_stats)
}

#[must_use]
pub fn active_timers() -> Vec<Rc<Timer>> {
    with_registry(Registry::active_timers)
}

pub fn stop_all() {
    with_registry(Registry::stop_all);
}

pub fn reset_all() {
    with_registry(Registry::reset_all);
}

pub fn delete_all() {
    with_registry(Registry::delete_all);
}
