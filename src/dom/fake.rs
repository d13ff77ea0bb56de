//! In-memory test doubles for the capability traits.
//!
//! `FakeElement` is a tiny tree with classes, attributes, inline styles and
//! form fields. Selector support covers what the components use: `#id`,
//! `.class` and bare tag names.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::rc::{Rc, Weak};

use super::{Clipboard, Element, Page, PreferenceStore, Rect, Scheduler, ScrollMetrics, TimeSource};
use crate::error::PortfolioError;

#[derive(Default)]
struct NodeData {
    tag: String,
    attributes: BTreeMap<String, String>,
    classes: BTreeSet<String>,
    styles: BTreeMap<String, String>,
    text: String,
    html: String,
    disabled: bool,
    offset_top: f64,
    rect: Rect,
    fields: BTreeMap<String, String>,
    children: Vec<FakeElement>,
    parent: Weak<RefCell<NodeData>>,
    scrolled_into_view: usize,
}

#[derive(Clone)]
pub struct FakeElement(Rc<RefCell<NodeData>>);

impl std::fmt::Debug for FakeElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let node = self.0.borrow();
        f.debug_struct("FakeElement")
            .field("tag", &node.tag)
            .field("attributes", &node.attributes)
            .field("classes", &node.classes)
            .finish_non_exhaustive()
    }
}

impl FakeElement {
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(NodeData { tag: tag.to_owned(), ..NodeData::default() })))
    }

    #[must_use]
    pub fn with_id(self, id: &str) -> Self {
        self.set_attribute("id", id);
        self
    }

    #[must_use]
    pub fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    #[must_use]
    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    #[must_use]
    pub fn with_offset_top(self, top: f64) -> Self {
        self.0.borrow_mut().offset_top = top;
        self
    }

    #[must_use]
    pub fn with_rect(self, rect: Rect) -> Self {
        self.0.borrow_mut().rect = rect;
        self
    }

    #[must_use]
    pub fn with_field(self, name: &str, value: &str) -> Self {
        self.set_field(name, value);
        self
    }

    #[must_use]
    pub fn with_html(self, html: &str) -> Self {
        self.set_inner_html(html);
        self
    }

    /// Append `child` and return it.
    pub fn append(&self, child: FakeElement) -> FakeElement {
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child.clone());
        child
    }

    pub fn set_field(&self, name: &str, value: &str) {
        self.0.borrow_mut().fields.insert(name.to_owned(), value.to_owned());
    }

    pub fn is_disabled(&self) -> bool {
        self.0.borrow().disabled
    }

    pub fn scrolled_into_view(&self) -> usize {
        self.0.borrow().scrolled_into_view
    }

    fn matches(&self, selector: &str) -> bool {
        if let Some(id) = selector.strip_prefix('#') {
            return self.attribute("id").as_deref() == Some(id);
        }
        if let Some(class) = selector.strip_prefix('.') {
            return self.has_class(class);
        }
        self.0.borrow().tag.eq_ignore_ascii_case(selector)
    }

    fn descendants(&self) -> Vec<FakeElement> {
        let mut out = Vec::new();
        let children = self.0.borrow().children.clone();
        for child in children {
            out.push(child.clone());
            out.extend(child.descendants());
        }
        out
    }
}

impl Element for FakeElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.0.borrow_mut().attributes.insert(name.to_owned(), value.to_owned());
    }

    fn add_class(&self, class: &str) {
        self.0.borrow_mut().classes.insert(class.to_owned());
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.contains(class)
    }

    fn style(&self, property: &str) -> String {
        self.0.borrow().styles.get(property).cloned().unwrap_or_default()
    }

    fn set_style(&self, property: &str, value: &str) {
        let mut node = self.0.borrow_mut();
        if value.is_empty() {
            node.styles.remove(property);
        } else {
            node.styles.insert(property.to_owned(), value.to_owned());
        }
    }

    fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_owned();
    }

    fn inner_html(&self) -> String {
        self.0.borrow().html.clone()
    }

    fn set_inner_html(&self, html: &str) {
        self.0.borrow_mut().html = html.to_owned();
    }

    fn set_disabled(&self, disabled: bool) {
        self.0.borrow_mut().disabled = disabled;
    }

    fn offset_top(&self) -> f64 {
        self.0.borrow().offset_top
    }

    fn bounding_rect(&self) -> Rect {
        self.0.borrow().rect
    }

    fn contains(&self, other: &Self) -> bool {
        let mut cursor = Some(other.0.clone());
        while let Some(node) = cursor {
            if Rc::ptr_eq(&node, &self.0) {
                return true;
            }
            cursor = node.borrow().parent.upgrade();
        }
        false
    }

    fn is_same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn query(&self, selector: &str) -> Option<Self> {
        self.descendants().into_iter().find(|el| el.matches(selector))
    }

    fn query_all(&self, selector: &str) -> Vec<Self> {
        self.descendants().into_iter().filter(|el| el.matches(selector)).collect()
    }

    fn scroll_into_view(&self) {
        self.0.borrow_mut().scrolled_into_view += 1;
    }

    fn form_value(&self, name: &str) -> Option<String> {
        self.0.borrow().fields.get(name).cloned()
    }

    fn reset_form(&self) {
        for value in self.0.borrow_mut().fields.values_mut() {
            value.clear();
        }
    }
}

/// A document rooted at `<html>` with a `<body>` child.
#[derive(Clone)]
pub struct FakePage {
    pub root: FakeElement,
    pub body: FakeElement,
    metrics: Rc<Cell<ScrollMetrics>>,
    scroll_to_top_calls: Rc<Cell<usize>>,
}

impl Default for FakePage {
    fn default() -> Self {
        Self::new()
    }
}

impl FakePage {
    pub fn new() -> Self {
        let root = FakeElement::new("html");
        let body = root.append(FakeElement::new("body"));
        Self {
            root,
            body,
            metrics: Rc::new(Cell::new(ScrollMetrics::default())),
            scroll_to_top_calls: Rc::new(Cell::new(0)),
        }
    }

    /// Append `el` to the body and return it.
    pub fn add(&self, el: FakeElement) -> FakeElement {
        self.body.append(el)
    }

    pub fn set_metrics(&self, metrics: ScrollMetrics) {
        self.metrics.set(metrics);
    }

    pub fn set_scroll_top(&self, scroll_top: f64) {
        let mut metrics = self.metrics.get();
        metrics.scroll_top = scroll_top;
        self.metrics.set(metrics);
    }

    pub fn scroll_to_top_calls(&self) -> usize {
        self.scroll_to_top_calls.get()
    }
}

impl Page for FakePage {
    type Element = FakeElement;

    fn by_id(&self, id: &str) -> Option<FakeElement> {
        self.root.query(&format!("#{id}"))
    }

    fn query(&self, selector: &str) -> Option<FakeElement> {
        self.root.query(selector)
    }

    fn query_all(&self, selector: &str) -> Vec<FakeElement> {
        self.root.query_all(selector)
    }

    fn body(&self) -> Option<FakeElement> {
        Some(self.body.clone())
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        self.metrics.get()
    }

    fn scroll_to_top(&self) {
        self.scroll_to_top_calls.set(self.scroll_to_top_calls.get() + 1);
        self.set_scroll_top(0.0);
    }
}

#[derive(Clone, Default)]
pub struct MemoryStore(Rc<RefCell<HashMap<String, String>>>);

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

type Task = Box<dyn FnOnce()>;

#[derive(Default)]
struct Timeline {
    now: u64,
    seq: u64,
    queue: Vec<(u64, u64, Task)>,
}

/// Virtual clock: tasks run only when the test calls [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler(Rc<RefCell<Timeline>>);

impl ManualScheduler {
    pub fn now(&self) -> u64 {
        self.0.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.0.borrow().queue.len()
    }

    /// Move the clock forward, running due tasks in deadline order.
    /// Tasks scheduled while advancing run too if they fall due in range.
    pub fn advance(&self, ms: u64) {
        let target = self.0.borrow().now + ms;
        loop {
            let next = {
                let mut timeline = self.0.borrow_mut();
                let due_index = timeline
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, (due, _, _))| *due <= target)
                    .min_by_key(|(_, (due, seq, _))| (*due, *seq))
                    .map(|(index, _)| index);
                due_index.map(|index| {
                    let (due, _, task) = timeline.queue.remove(index);
                    timeline.now = due;
                    task
                })
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.0.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let mut timeline = self.0.borrow_mut();
        let due = timeline.now + u64::from(delay_ms);
        timeline.seq += 1;
        let seq = timeline.seq;
        timeline.queue.push((due, seq, task));
    }
}

#[derive(Clone, Default)]
pub struct FakeClipboard {
    pub written: Rc<RefCell<Vec<String>>>,
    pub refuse: bool,
}

impl Clipboard for FakeClipboard {
    async fn write_text(&self, text: &str) -> Result<(), PortfolioError> {
        if self.refuse {
            return Err(PortfolioError::Clipboard("permission denied".to_owned()));
        }
        self.written.borrow_mut().push(text.to_owned());
        Ok(())
    }
}

pub struct FixedTime(pub &'static str);

impl TimeSource for FixedTime {
    fn time_in_zone(&self, _zone: &str) -> String {
        self.0.to_owned()
    }
}
