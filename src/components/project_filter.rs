//! Category filter for the project grid.
//!
//! Showing and hiding are two-phase so the stylesheet transition can run:
//! a hidden item is first faded and shrunk inline, then gets the `hidden`
//! class once the transition has finished; a shown item loses `hidden`
//! immediately and has its inline overrides cleared shortly after.
//!
//! Every selection bumps a generation counter. Deferred steps from an older
//! selection are dropped so rapid clicking cannot hide an item the current
//! filter shows.

#[cfg(test)]
#[path = "project_filter_test.rs"]
mod project_filter_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::config::FilterConfig;
use crate::dom::{Element, Page, Scheduler};

/// Filter tag that matches every item.
pub const ALL: &str = "all";

const ACTIVE: &str = "active";
const HIDDEN: &str = "hidden";

pub fn item_visible(filter: &str, category: Option<&str>) -> bool {
    filter == ALL || category == Some(filter)
}

pub struct ProjectFilter<E, S> {
    buttons: Vec<E>,
    items: Vec<E>,
    scheduler: S,
    timing: FilterConfig,
    generation: Rc<Cell<u64>>,
}

impl<E: Element, S: Scheduler> ProjectFilter<E, S> {
    pub fn locate<P: Page<Element = E>>(page: &P, scheduler: S, timing: FilterConfig) -> Self {
        Self {
            buttons: page.query_all(".filter-btn"),
            items: page.query_all(".project-item"),
            scheduler,
            timing,
            generation: Rc::new(Cell::new(0)),
        }
    }

    pub fn buttons(&self) -> &[E] {
        &self.buttons
    }

    /// Mark button `index` active and filter by its `data-filter` tag.
    /// A button without a tag acts as "all".
    pub fn select(&self, index: usize) {
        let Some(button) = self.buttons.get(index) else {
            return;
        };
        for other in &self.buttons {
            other.remove_class(ACTIVE);
        }
        button.add_class(ACTIVE);

        let filter = button.attribute("data-filter").unwrap_or_else(|| ALL.to_owned());
        self.apply(&filter);
    }

    pub fn apply(&self, filter: &str) {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        for item in &self.items {
            let category = item.attribute("data-category");
            if item_visible(filter, category.as_deref()) {
                self.show(item, generation);
            } else {
                self.hide(item, generation);
            }
        }
    }

    fn show(&self, item: &E, generation: u64) {
        item.remove_class(HIDDEN);
        let item = item.clone();
        let current = Rc::clone(&self.generation);
        self.scheduler.after(
            self.timing.show_delay_ms,
            Box::new(move || {
                if current.get() != generation {
                    return;
                }
                item.set_style("opacity", "");
                item.set_style("transform", "");
                item.set_style("display", "");
            }),
        );
    }

    fn hide(&self, item: &E, generation: u64) {
        item.set_style("opacity", "0");
        item.set_style("transform", "scale(0.8)");
        let item = item.clone();
        let current = Rc::clone(&self.generation);
        self.scheduler.after(
            self.timing.hide_delay_ms,
            Box::new(move || {
                if current.get() == generation {
                    item.add_class(HIDDEN);
                }
            }),
        );
    }
}
