//! Capability traits the components are written against.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components never touch `web_sys` directly. They see a page as a set of
//! handles that can be queried and restyled, plus a handful of side-effect
//! capabilities (storage, timers, clipboard, wall clock). The browser backs
//! these with `web::*`; tests back them with `fake::*`.

#[cfg(test)]
pub mod fake;
#[cfg(feature = "browser")]
pub mod web;

use crate::error::PortfolioError;

/// Viewport-relative box of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Document scroll state sampled on a scroll tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

/// A handle to one node of the page.
///
/// Handles are cheap to clone and compare by identity, not by content.
pub trait Element: Clone + 'static {
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);

    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;

    /// Inline style value, empty when unset.
    fn style(&self, property: &str) -> String;
    /// Set an inline style; an empty value removes the property.
    fn set_style(&self, property: &str, value: &str);

    fn text(&self) -> String;
    fn set_text(&self, text: &str);
    fn inner_html(&self) -> String;
    fn set_inner_html(&self, html: &str);

    fn set_disabled(&self, disabled: bool);

    /// Distance from the document top to this element's top edge.
    fn offset_top(&self) -> f64;
    fn bounding_rect(&self) -> Rect;

    /// Inclusive descendant check, like `Node.contains`.
    fn contains(&self, other: &Self) -> bool;
    fn is_same(&self, other: &Self) -> bool;

    fn query(&self, selector: &str) -> Option<Self>;
    fn query_all(&self, selector: &str) -> Vec<Self>;

    /// Smoothly scroll the viewport until this element is visible.
    fn scroll_into_view(&self);

    /// Value of the named field when this element is a form.
    fn form_value(&self, name: &str) -> Option<String>;
    /// Reset every field when this element is a form.
    fn reset_form(&self);
}

/// The document plus the window-level state components need.
pub trait Page: Clone + 'static {
    type Element: Element;

    fn by_id(&self, id: &str) -> Option<Self::Element>;
    fn query(&self, selector: &str) -> Option<Self::Element>;
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;
    fn body(&self) -> Option<Self::Element>;

    fn scroll_metrics(&self) -> ScrollMetrics;
    /// Smoothly scroll the viewport back to the top.
    fn scroll_to_top(&self);
}

/// Key/value preference storage that survives reloads.
pub trait PreferenceStore: 'static {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Deferred one-shot callbacks on the page's event loop.
pub trait Scheduler: Clone + 'static {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// System clipboard access.
#[allow(async_fn_in_trait)]
pub trait Clipboard: 'static {
    /// # Errors
    ///
    /// Returns [`PortfolioError::Clipboard`] when the write is refused.
    async fn write_text(&self, text: &str) -> Result<(), PortfolioError>;
}

/// Wall-clock rendering in a named time zone.
pub trait TimeSource: 'static {
    /// Current time in `zone` as a 12-hour `hh:mm AM` string.
    fn time_in_zone(&self, zone: &str) -> String;
}
