use crate::{
    error::{Error, Result},
    name::TimerName,
    stats::TimerStats,
    timer::Timer,
};
use std::{
    cell::RefCell,
    collections::{BTreeMap, HashMap},
    rc::Rc,
};
use tracing::{debug, trace};

#[derive(Debug, Default)]
struct Timers {
    index: HashMap<TimerName, usize>,
    order: Vec<Rc<Timer>>,
}

/// Named timers of one execution context.
///
/// A registry is neither `Send` nor `Sync`: every thread or task that wants
/// its own timers owns its own registry (see [`crate::local`] for a per-thread
/// one). Timers are created lazily by [`Registry::timer`] and
/// [`Registry::start`]; every other per-name operation fails with
/// [`Error::UnknownTimer`] when the name was never used.
///
/// ```
/// use timeup::Registry;
///
/// let registry = Registry::new();
/// let sum = registry.start_with("sum", || (1..=10).sum::<u32>());
///
/// assert_eq!(sum, 55);
/// assert_eq!(registry.count("sum").unwrap(), 1);
/// assert!(registry.stop("missing").is_err());
/// ```
#[derive(Debug, Default)]
pub struct Registry {
    timers: RefCell<Timers>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the timer for `name`, creating it if needed
    pub fn timer(&self, name: impl Into<TimerName>) -> Rc<Timer> {
        let name = name.into();
        let mut timers = self.timers.borrow_mut();

        if let Some(&idx) = timers.index.get(&name) {
            return Rc::clone(&timers.order[idx]);
        }

        trace!(timer = %name, "creating timer");

        let timer = Rc::new(Timer::new(name.clone()));
        let idx = timers.order.len();
        timers.order.push(Rc::clone(&timer));
        timers.index.insert(name, idx);

        timer
    }

    #[must_use]
    pub fn contains(&self, name: impl Into<TimerName>) -> bool {
        self.timers.borrow().index.contains_key(&name.into())
    }

    fn get(&self, name: impl Into<TimerName>) -> Result<Rc<Timer>> {
        let name = name.into();
        let timers = self.timers.borrow();

        timers
            .index
            .get(&name)
            .map(|&idx| Rc::clone(&timers.order[idx]))
            .ok_or(Error::UnknownTimer(name))
    }

    /// Starts the timer for `name`, creating it if needed
    pub fn start(&self, name: impl Into<TimerName>) -> Rc<Timer> {
        let timer = self.timer(name);
        timer.start();
        timer
    }

    /// Times `work` under `name` and returns its result
    pub fn start_with<F, R>(&self, name: impl Into<TimerName>, work: F) -> R
    where
        F: FnOnce() -> R,
    {
        self.timer(name).start_with(work)
    }

    /// # Errors
    /// [`Error::UnknownTimer`] if no timer has this name
    pub fn stop(&self, name: impl Into<TimerName>) -> Result<f64> {
        Ok(self.get(name)?.stop())
    }

    /// Resets the timer, keeping it running if it was
    ///
    /// # Errors
    /// [`Error::UnknownTimer`] if no timer has this name
    pub fn reset(&self, name: impl Into<TimerName>) -> Result<()> {
        self.get(name)?.reset(false);
        Ok(())
    }

    /// # Errors
    /// [`Error::UnknownTimer`] if no timer has this name
    pub fn elapsed(&self, name: impl Into<TimerName>) -> Result<f64> {
        Ok(self.get(name)?.elapsed())
    }

    /// # Errors
    /// [`Error::UnknownTimer`] if no timer has this name
    pub fn timings(&self, name: impl Into<TimerName>) -> Result<Vec<f64>> {
        Ok(self.get(name)?.timings())
    }

    /// # Errors
    /// [`Error::UnknownTimer`] if no timer has this name
    pub fn count(&self, name: impl Into<TimerName>) -> Result<usize> {
        Ok(self.get(name)?.count())
    }

    /// # Errors
    /// [`Error::UnknownTimer`] if no timer has this name
    pub fn min(&self, name: impl Into<TimerName>) -> Result<Option<f64>> {
        Ok(self.get(name)?.min())
    }

    /// # Errors
    /// [`Error::UnknownTimer`] if no timer has this name
    pub fn max(&self, name: impl Into<TimerName>) -> Result<Option<f64>> {
        Ok(self.get(name)?.max())
    }

    /// # Errors
    /// [`Error::UnknownTimer`] if no timer has this name
    pub fn mean(&self, name: impl Into<TimerName>) -> Result<Option<f64>> {
        Ok(self.get(name)?.mean())
    }

    /// # Errors
    /// [`Error::UnknownTimer`] if no timer has this name
    pub fn median(&self, name: impl Into<TimerName>) -> Result<Option<f64>> {
        Ok(self.get(name)?.median())
    }

    /// # Errors
    /// [`Error::UnknownTimer`] if no timer has this name
    pub fn percentile(&self, name: impl Into<TimerName>, p: f64) -> Result<Option<f64>> {
        Ok(self.get(name)?.percentile(p))
    }

    /// Sum of the elapsed time of every timer
    #[must_use]
    pub fn total_elapsed(&self) -> f64 {
        self.all_timers().iter().map(|timer| timer.elapsed()).sum()
    }

    #[must_use]
    pub fn all_elapsed(&self) -> BTreeMap<TimerName, f64> {
        self.all_timers()
            .iter()
            .map(|timer| (timer.name().clone(), timer.elapsed()))
            .collect()
    }

    /// Every timer, in creation order
    #[must_use]
    pub fn all_timers(&self) -> Vec<Rc<Timer>> {
        self.timers.borrow().order.clone()
    }

    #[must_use]
    pub fn all_stats(&self) -> BTreeMap<TimerName, TimerStats> {
        self.all_timers()
            .iter()
            .map(|timer| (timer.name().clone(), timer.stats()))
            .collect()
    }

    /// Running timers, in creation order
    #[must_use]
    pub fn active_timers(&self) -> Vec<Rc<Timer>> {
        self.all_timers()
            .into_iter()
            .filter(|timer| timer.active())
            .collect()
    }

    pub fn stop_all(&self) {
        for timer in self.all_timers() {
            timer.stop();
        }
    }

    /// Resets every timer, running ones keep running
    pub fn reset_all(&self) {
        for timer in self.all_timers() {
            timer.reset(false);
        }
    }

    /// Stops and clears every timer, then forgets all names.
    ///
    /// Handles obtained before the call keep pointing at the cleared timers,
    /// later lookups create new ones.
    pub fn delete_all(&self) {
        let timers = std::mem::take(&mut *self.timers.borrow_mut());

        debug!(timers = timers.order.len(), "deleting all timers");

        for timer in &timers.order {
            timer.reset(true);
        }
    }
}
