//! Local-time readout for a fixed time zone.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use std::rc::Rc;

use crate::config::ClockConfig;
use crate::dom::{Element, Scheduler, TimeSource};

pub fn format_label(time: &str, offset_label: &str) -> String {
    format!("{time} ({offset_label})")
}

pub struct Clock<E, T> {
    target: E,
    time: T,
    config: ClockConfig,
}

impl<E: Element, T: TimeSource> Clock<E, T> {
    pub fn new(target: E, time: T, config: ClockConfig) -> Self {
        Self { target, time, config }
    }

    pub fn refresh(&self) {
        let now = self.time.time_in_zone(&self.config.time_zone);
        self.target.set_text(&format_label(&now, &self.config.offset_label));
    }
}

/// Render now, then again every `refresh_ms`.
pub fn start<E: Element, T: TimeSource, S: Scheduler>(clock: Clock<E, T>, scheduler: S) {
    let clock = Rc::new(clock);
    clock.refresh();
    schedule_refresh(clock, scheduler);
}

fn schedule_refresh<E: Element, T: TimeSource, S: Scheduler>(clock: Rc<Clock<E, T>>, scheduler: S) {
    let next_scheduler = scheduler.clone();
    let delay = clock.config.refresh_ms.max(1);
    scheduler.after(
        delay,
        Box::new(move || {
            clock.refresh();
            schedule_refresh(clock, next_scheduler);
        }),
    );
}
