//! Injected wall clock and the once-per-second countdown ticker.
//!
//! The host owns the timer. It calls `CountdownTicker::tick()` every
//! TICK_INTERVAL_MS and must call `stop()` when the home screen goes away.

use crate::{
    config::EventConfig,
    countdown::{compute_countdown_with, CountdownState},
    types::Millis,
};
use chrono::{DateTime, Duration, Local};
use std::cell::Cell;

pub const TICK_INTERVAL_MS: Millis = 1000;

/// Source of "now" in the caller's local zone.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock that only moves when told to. Used by tests and the runner.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Cell<DateTime<Local>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Local>) -> Self {
        Self { now: Cell::new(start) }
    }

    pub fn set(&self, now: DateTime<Local>) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Local> {
        (**self).now()
    }
}

/// Feeds the clock into the countdown once per host tick.
pub struct CountdownTicker<C: Clock> {
    clock:   C,
    config:  EventConfig,
    last:    Option<CountdownState>,
    ticks:   u64,
    stopped: bool,
}

impl<C: Clock> CountdownTicker<C> {
    pub fn new(clock: C, config: EventConfig) -> Self {
        Self {
            clock,
            config,
            last: None,
            ticks: 0,
            stopped: false,
        }
    }

    /// Recompute the state for the current instant.
    /// Returns None once the ticker has been stopped.
    pub fn tick(&mut self) -> Option<CountdownState> {
        if self.stopped {
            log::warn!("tick() after stop(); host timer was not cancelled");
            return None;
        }

        let now = self.clock.now();
        let state = compute_countdown_with(&now, &self.config);
        self.ticks += 1;

        let was_active = self.last.as_ref().map(|s| s.celebration_active);
        match (was_active, state.celebration_active) {
            (Some(false), true) | (None, true) => {
                log::info!("Celebration active at {now}");
            }
            (Some(true), false) => {
                log::info!("Celebration ended at {now}");
            }
            _ => {}
        }
        log::debug!("tick {}: {:?}", self.ticks, state.display_text);

        self.last = Some(state.clone());
        Some(state)
    }

    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn last_state(&self) -> Option<&CountdownState> {
        self.last.as_ref()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
