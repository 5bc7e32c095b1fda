//! Oversight of a solve.
//!
//! A monitor counts the calls made through a search, and every [CHECK_FREQUENCY] calls examines whether the search should end.
//! A search should end if the time limit of the configuration has been reached, or if the terminate callback returns true.
//! On the same schedule, the progress callback is called if the progress interval has passed since the last call.

use std::time::{Duration, Instant};

use crate::{
    config::{Config, CHECK_FREQUENCY},
    misc::log::targets::{self},
};

use super::{
    callbacks::{CallbackProgress, CallbackTerminate},
    Counters,
};

pub struct Monitor {
    /// Counters related to the solve.
    pub counters: Counters,

    start: Instant,

    /// The time of the last progress report, relative to the start of the solve.
    last_progress: Duration,

    time_limit: Option<Duration>,

    progress_interval: Duration,

    callback_terminate: Option<Box<CallbackTerminate>>,

    callback_progress: Option<Box<CallbackProgress>>,
}

impl Monitor {
    pub fn new(config: &Config) -> Self {
        let time_limit = match config.time_limit.value.is_zero() {
            true => None,
            false => Some(config.time_limit.value),
        };

        Monitor {
            counters: Counters::default(),
            start: Instant::now(),
            last_progress: Duration::from_secs(0),
            time_limit,
            progress_interval: config.progress_interval.value,
            callback_terminate: None,
            callback_progress: None,
        }
    }

    pub fn set_callback_terminate(&mut self, callback: Box<CallbackTerminate>) {
        self.callback_terminate = Some(callback);
    }

    pub fn set_callback_progress(&mut self, callback: Box<CallbackProgress>) {
        self.callback_progress = Some(callback);
    }

    /// Resets the counters, and notes the start of a solve.
    pub fn begin(&mut self) {
        self.counters = Counters::default();
        self.start = Instant::now();
        self.last_progress = Duration::from_secs(0);
    }

    /// Notes the end of a solve.
    pub fn finish(&mut self) {
        self.counters.time = self.start.elapsed();
    }

    /// Counts a call, returning true if the search should end.
    pub fn call(&mut self) -> bool {
        self.counters.calls += 1;
        match self.counters.calls % CHECK_FREQUENCY {
            0 => self.check(),
            _ => false,
        }
    }

    /// Updates the time of the solve and reports progress, if due, returning true if the search should end.
    pub fn check(&mut self) -> bool {
        self.counters.time = self.start.elapsed();

        if self.counters.time >= self.last_progress + self.progress_interval {
            self.last_progress = self.counters.time;
            if let Some(callback) = &mut self.callback_progress {
                callback(&self.counters);
            }
        }

        if let Some(limit) = self.time_limit {
            if self.counters.time >= limit {
                log::info!(target: targets::SEARCH, "Time limit of {limit:?} reached");
                return true;
            }
        }

        match &mut self.callback_terminate {
            Some(callback) => callback(),
            None => false,
        }
    }
}

#[cfg(test)]
mod monitor_tests {
    use super::*;

    #[test]
    fn terminate_checked_on_schedule() {
        let mut monitor = Monitor::new(&Config::default());
        monitor.set_callback_terminate(Box::new(|| true));
        monitor.begin();

        for _ in 1..CHECK_FREQUENCY {
            assert!(!monitor.call());
        }
        assert!(monitor.call());
        assert_eq!(monitor.counters.calls, CHECK_FREQUENCY);
    }

    #[test]
    fn progress_reported() {
        use std::{cell::Cell, rc::Rc};

        let mut config = Config::default();
        config.progress_interval.value = Duration::from_nanos(1);
        let mut monitor = Monitor::new(&config);

        let reports = Rc::new(Cell::new(0));
        let reports_clone = reports.clone();
        monitor.set_callback_progress(Box::new(move |counters: &Counters| {
            assert!(counters.calls > 0);
            reports_clone.set(reports_clone.get() + 1);
        }));

        monitor.begin();
        std::thread::sleep(Duration::from_millis(1));
        for _ in 0..CHECK_FREQUENCY {
            monitor.call();
        }
        assert_eq!(reports.get(), 1);
    }
}
