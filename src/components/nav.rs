//! Scroll-driven nav highlighting and smooth in-page navigation.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::dom::{Element, Page};

const ACTIVE: &str = "active";

/// Id of the last section (in document order) whose top is at most
/// `threshold` pixels below the scroll offset.
pub fn current_section<'a, I>(sections: I, scroll_top: f64, threshold: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = (Option<&'a str>, f64)>,
{
    let mut current = None;
    for (id, top) in sections {
        if scroll_top >= top - threshold {
            current = id;
        }
    }
    current
}

/// Fragment target of an in-page link (`#about` -> `about`).
pub fn link_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub struct NavHighlighter<P: Page> {
    page: P,
    links: Vec<P::Element>,
    sections: Vec<P::Element>,
    threshold: f64,
}

impl<P: Page> NavHighlighter<P> {
    pub fn locate(page: P, threshold: f64) -> Self {
        let links = page.query_all(".nav-link");
        let sections = page.query_all("section");
        Self { page, links, sections, threshold }
    }

    pub fn links(&self) -> &[P::Element] {
        &self.links
    }

    /// Recompute the current section and move the active marker to its
    /// link. Returns the current section id.
    pub fn update(&self) -> Option<String> {
        let scroll_top = self.page.scroll_metrics().scroll_top;
        let ids: Vec<Option<String>> = self.sections.iter().map(|s| s.attribute("id")).collect();
        let current = current_section(
            ids.iter().zip(&self.sections).map(|(id, section)| (id.as_deref(), section.offset_top())),
            scroll_top,
            self.threshold,
        )
        .map(str::to_owned);

        for link in &self.links {
            link.remove_class(ACTIVE);
            let href = link.attribute("href");
            if current.is_some() && href.as_deref().and_then(link_target) == current.as_deref() {
                link.add_class(ACTIVE);
            }
        }
        current
    }
}

/// Smoothly scroll to the section a nav link points at.
///
/// Returns `false` (and does nothing) when the target does not exist.
pub fn scroll_to_link_target<P: Page>(page: &P, link: &P::Element) -> bool {
    let Some(target) = link.attribute("href").as_deref().and_then(link_target).and_then(|id| page.by_id(id)) else {
        return false;
    };
    target.scroll_into_view();
    true
}
