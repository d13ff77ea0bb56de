//! Rocket scroll indicator.
//!
//! The icon slides down a viewport-high track in proportion to scroll depth
//! and tilts toward the direction of travel. Clicking it scrolls to the top.

#[cfg(test)]
#[path = "rocket_test.rs"]
mod rocket_test;

use std::cell::Cell;

use crate::config::RocketConfig;
use crate::dom::{Element, Page, ScrollMetrics};

/// Where to draw the rocket for one scroll sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RocketPose {
    pub top_px: f64,
    pub rotation_deg: f64,
}

/// Fraction of the scrollable distance covered, in `[0, 1]`.
pub fn scroll_fraction(metrics: ScrollMetrics) -> f64 {
    let scrollable = metrics.document_height - metrics.viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (metrics.scroll_top / scrollable).clamp(0.0, 1.0)
}

pub fn pose(metrics: ScrollMetrics, last_scroll_top: f64, config: RocketConfig) -> RocketPose {
    let track = (metrics.viewport_height - config.height_px).max(0.0);
    let moving_down = metrics.scroll_top > last_scroll_top;
    RocketPose {
        top_px: scroll_fraction(metrics) * track,
        rotation_deg: if moving_down { config.tilt_deg } else { -config.tilt_deg },
    }
}

pub struct RocketIndicator<P: Page> {
    page: P,
    rocket: P::Element,
    config: RocketConfig,
    last_scroll_top: Cell<f64>,
}

impl<P: Page> RocketIndicator<P> {
    pub fn locate(page: P, config: RocketConfig) -> Option<Self> {
        let rocket = page.by_id("rocket-scrollbar")?;
        Some(Self { page, rocket, config, last_scroll_top: Cell::new(0.0) })
    }

    pub fn rocket(&self) -> &P::Element {
        &self.rocket
    }

    pub fn on_scroll(&self) -> RocketPose {
        let metrics = self.page.scroll_metrics();
        let pose = pose(metrics, self.last_scroll_top.get(), self.config);
        self.rocket.set_style("top", &format!("{}px", pose.top_px));
        self.rocket.set_style("transform", &format!("rotate({}deg)", pose.rotation_deg));
        self.last_scroll_top.set(metrics.scroll_top);
        pose
    }

    pub fn on_click(&self) {
        self.page.scroll_to_top();
    }
}
