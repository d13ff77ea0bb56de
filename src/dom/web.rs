//! `web_sys` implementations of the capability traits.

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CssStyleDeclaration, Document, FormData, HtmlButtonElement, HtmlElement, HtmlFormElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollToOptions, SvgElement, Window,
};

use super::{Clipboard, Element, Page, PreferenceStore, Rect, Scheduler, ScrollMetrics, TimeSource};
use crate::error::PortfolioError;

#[derive(Clone, Debug)]
pub struct WebElement(pub web_sys::Element);

impl WebElement {
    pub fn raw(&self) -> &web_sys::Element {
        &self.0
    }

    /// Wrap an event target when it is an element.
    pub fn from_event_target(target: Option<web_sys::EventTarget>) -> Option<Self> {
        target.and_then(|t| t.dyn_into::<web_sys::Element>().ok()).map(Self)
    }

    fn css(&self) -> Option<CssStyleDeclaration> {
        if let Some(html) = self.0.dyn_ref::<HtmlElement>() {
            return Some(html.style());
        }
        self.0.dyn_ref::<SvgElement>().map(SvgElement::style)
    }
}

fn collect_elements(list: &web_sys::NodeList) -> Vec<WebElement> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .map(WebElement)
        .collect()
}

impl Element for WebElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let _ = self.0.set_attribute(name, value);
    }

    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn style(&self, property: &str) -> String {
        self.css()
            .and_then(|css| css.get_property_value(property).ok())
            .unwrap_or_default()
    }

    fn set_style(&self, property: &str, value: &str) {
        let Some(css) = self.css() else {
            return;
        };
        if value.is_empty() {
            let _ = css.remove_property(property);
        } else {
            let _ = css.set_property(property, value);
        }
    }

    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn inner_html(&self) -> String {
        self.0.inner_html()
    }

    fn set_inner_html(&self, html: &str) {
        self.0.set_inner_html(html);
    }

    fn set_disabled(&self, disabled: bool) {
        if let Some(button) = self.0.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
        } else if disabled {
            let _ = self.0.set_attribute("disabled", "");
        } else {
            let _ = self.0.remove_attribute("disabled");
        }
    }

    fn offset_top(&self) -> f64 {
        self.0.dyn_ref::<HtmlElement>().map_or(0.0, |el| f64::from(el.offset_top()))
    }

    fn bounding_rect(&self) -> Rect {
        let rect = self.0.get_bounding_client_rect();
        Rect { left: rect.left(), top: rect.top(), width: rect.width(), height: rect.height() }
    }

    fn contains(&self, other: &Self) -> bool {
        self.0.contains(Some(other.0.as_ref()))
    }

    fn is_same(&self, other: &Self) -> bool {
        self.0.is_same_node(Some(other.0.as_ref()))
    }

    fn query(&self, selector: &str) -> Option<Self> {
        self.0.query_selector(selector).ok().flatten().map(Self)
    }

    fn query_all(&self, selector: &str) -> Vec<Self> {
        self.0
            .query_selector_all(selector)
            .map(|list| collect_elements(&list))
            .unwrap_or_default()
    }

    fn scroll_into_view(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        self.0.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn form_value(&self, name: &str) -> Option<String> {
        let form = self.0.dyn_ref::<HtmlFormElement>()?;
        FormData::new_with_form(form).ok()?.get(name).as_string()
    }

    fn reset_form(&self) {
        if let Some(form) = self.0.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }
}

#[derive(Clone)]
pub struct WebPage {
    pub window: Window,
    pub document: Document,
}

impl WebPage {
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    /// True once the `load` event has already fired.
    pub fn is_loaded(&self) -> bool {
        js_sys::Reflect::get(&self.document, &JsValue::from_str("readyState"))
            .ok()
            .and_then(|state| state.as_string())
            .is_some_and(|state| state == "complete")
    }
}

impl Page for WebPage {
    type Element = WebElement;

    fn by_id(&self, id: &str) -> Option<WebElement> {
        self.document.get_element_by_id(id).map(WebElement)
    }

    fn query(&self, selector: &str) -> Option<WebElement> {
        self.document.query_selector(selector).ok().flatten().map(WebElement)
    }

    fn query_all(&self, selector: &str) -> Vec<WebElement> {
        self.document
            .query_selector_all(selector)
            .map(|list| collect_elements(&list))
            .unwrap_or_default()
    }

    fn body(&self) -> Option<WebElement> {
        self.document.body().map(|body| WebElement(body.into()))
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        let scroll_top = self.window.page_y_offset().unwrap_or(0.0);
        let viewport_height = self.window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
        let document_height = self
            .document
            .document_element()
            .map_or(0.0, |root| f64::from(root.scroll_height()));
        ScrollMetrics { scroll_top, viewport_height, document_height }
    }

    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

/// `window.localStorage`; silently no-ops when storage is unavailable.
#[derive(Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

/// One-shot `setTimeout` timers.
#[derive(Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}

/// `navigator.clipboard`.
#[derive(Clone, Copy, Default)]
pub struct NavigatorClipboard;

impl Clipboard for NavigatorClipboard {
    async fn write_text(&self, text: &str) -> Result<(), PortfolioError> {
        let window = web_sys::window().ok_or_else(|| PortfolioError::Clipboard("no window".to_owned()))?;
        let clipboard = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
            .ok()
            .and_then(|value| value.dyn_into::<web_sys::Clipboard>().ok())
            .ok_or_else(|| PortfolioError::Clipboard("clipboard unavailable".to_owned()))?;
        JsFuture::from(clipboard.write_text(text))
            .await
            .map_err(|err| PortfolioError::Clipboard(format!("{err:?}")))?;
        Ok(())
    }
}

/// `Date.prototype.toLocaleTimeString` in `en-US` with a fixed zone.
#[derive(Clone, Copy, Default)]
pub struct IntlTime;

impl TimeSource for IntlTime {
    fn time_in_zone(&self, zone: &str) -> String {
        let options = js_sys::Object::new();
        for (key, value) in [
            ("hour", JsValue::from_str("2-digit")),
            ("minute", JsValue::from_str("2-digit")),
            ("hour12", JsValue::TRUE),
            ("timeZone", JsValue::from_str(zone)),
        ] {
            let _ = js_sys::Reflect::set(&options, &JsValue::from_str(key), &value);
        }
        js_sys::Date::new_0()
            .to_locale_time_string_with_options("en-US", &options)
            .into()
    }
}
