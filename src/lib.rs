//! Named, restartable stopwatches with per-sample statistics.
//!
//! A [`Timer`] accumulates the time spent between `start` and `stop` calls and
//! keeps every completed interval as a sample, from which it derives count,
//! min, max, mean, median and interpolated percentiles. A [`Registry`] owns
//! the timers of one execution context by name; [`local`] gives every thread
//! its own registry behind free functions.
//!
//! ```
//! use timeup::Registry;
//!
//! let timers = Registry::new();
//!
//! for _ in 0..3 {
//!     timers.start_with("parse", || "1 2 3".split(' ').count());
//! }
//!
//! assert_eq!(timers.count("parse").unwrap(), 3);
//! assert!(timers.median("parse").unwrap().is_some());
//! assert!(timers.elapsed("missing").is_err());
//! ```

pub mod cli;
pub mod error;
pub mod local;
pub mod name;
pub mod registry;
pub mod stats;
pub mod summary;
pub mod timer;

pub use self::{
    error::{Error, Result},
    name::TimerName,
    registry::Registry,
    stats::TimerStats,
    timer::Timer,
};
