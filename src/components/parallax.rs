//! Layered parallax for the decorative objects inside the hero region.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

use crate::config::ParallaxConfig;
use crate::dom::{Element, Page};

/// Pointer displacement from `center`, scaled by `factor`.
pub fn pointer_offset(pointer: (f64, f64), center: (f64, f64), factor: f64) -> (f64, f64) {
    ((pointer.0 - center.0) * factor, (pointer.1 - center.1) * factor)
}

/// Per-layer offsets; layer `i` moves `(i + 1) * depth_step` times the base.
pub fn layer_offsets(base: (f64, f64), layers: usize, depth_step: f64) -> Vec<(f64, f64)> {
    (0..layers)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let depth = (i + 1) as f64 * depth_step;
            (base.0 * depth, base.1 * depth)
        })
        .collect()
}

pub fn translate(x: f64, y: f64) -> String {
    format!("translate({x}px, {y}px)")
}

pub struct Parallax<E> {
    region: E,
    config: ParallaxConfig,
}

impl<E: Element> Parallax<E> {
    /// `None` when the page has no hover region.
    pub fn locate<P: Page<Element = E>>(page: &P, config: ParallaxConfig) -> Option<Self> {
        let Some(region) = page.query(".hero") else {
            log::debug!("no hero region, parallax disabled");
            return None;
        };
        Some(Self { region, config })
    }

    pub fn region(&self) -> &E {
        &self.region
    }

    pub fn on_pointer_move(&self, client_x: f64, client_y: f64) {
        let center = self.region.bounding_rect().center();
        let base = pointer_offset((client_x, client_y), center, self.config.factor);
        let objects = self.region.query_all(".space-object");
        log::debug!("parallax: {} objects by ({:.2}, {:.2})", objects.len(), base.0, base.1);
        for (obj, (x, y)) in objects.iter().zip(layer_offsets(base, objects.len(), self.config.depth_step)) {
            obj.set_style("transform", &translate(x, y));
        }
    }

    pub fn on_pointer_leave(&self) {
        for obj in self.region.query_all(".space-object") {
            obj.set_style("transform", &translate(0.0, 0.0));
        }
    }
}
