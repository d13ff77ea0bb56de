//! Floating email panel with a copy-to-clipboard button.

#[cfg(test)]
#[path = "email_popup_test.rs"]
mod email_popup_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::EmailConfig;
use crate::dom::{Clipboard, Element, Page, Scheduler};
use crate::error::PortfolioError;

const SHOWN: &str = "show";

pub const CHECKMARK_SVG: &str = r#"<svg width="16" height="16" viewBox="0 0 24 24" fill="currentColor"><path d="M9 16.17L4.83 12l-1.42 1.41L9 19 21 7l-1.41-1.41z"/></svg>"#;

pub struct EmailPopup<E, C, S> {
    trigger: E,
    panel: E,
    copy_button: Option<E>,
    clipboard: C,
    scheduler: S,
    config: EmailConfig,
    /// Button content to restore once the checkmark has been shown.
    saved_content: Rc<RefCell<Option<String>>>,
    feedback_generation: Rc<Cell<u64>>,
}

impl<E: Element, C: Clipboard, S: Scheduler> EmailPopup<E, C, S> {
    /// `None` unless both the trigger and the panel exist.
    pub fn locate<P: Page<Element = E>>(page: &P, clipboard: C, scheduler: S, config: EmailConfig) -> Option<Self> {
        let trigger = page.by_id("email-icon")?;
        let panel = page.by_id("email-popup")?;
        Some(Self {
            trigger,
            panel,
            copy_button: page.by_id("copy-btn"),
            clipboard,
            scheduler,
            config,
            saved_content: Rc::new(RefCell::new(None)),
            feedback_generation: Rc::new(Cell::new(0)),
        })
    }

    pub fn trigger(&self) -> &E {
        &self.trigger
    }

    pub fn copy_button(&self) -> Option<&E> {
        self.copy_button.as_ref()
    }

    pub fn is_shown(&self) -> bool {
        self.panel.has_class(SHOWN)
    }

    pub fn on_trigger_click(&self) {
        self.panel.add_class(SHOWN);
    }

    /// Hide the panel for clicks landing outside both trigger and panel.
    pub fn on_document_click(&self, target: &E) {
        if !self.panel.contains(target) && !self.trigger.contains(target) {
            self.panel.remove_class(SHOWN);
        }
    }

    /// Copy the address. On success the button briefly shows a checkmark.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Clipboard`] when the write is refused. The
    /// page is left untouched in that case.
    pub async fn copy_address(&self) -> Result<(), PortfolioError> {
        if let Err(err) = self.clipboard.write_text(&self.config.address).await {
            log::error!("failed to copy email: {err}");
            return Err(err);
        }
        if let Some(button) = &self.copy_button {
            self.show_copied(button);
        }
        Ok(())
    }

    fn show_copied(&self, button: &E) {
        {
            let mut saved = self.saved_content.borrow_mut();
            if saved.is_none() {
                *saved = Some(button.inner_html());
            }
        }
        button.set_inner_html(CHECKMARK_SVG);

        let generation = self.feedback_generation.get() + 1;
        self.feedback_generation.set(generation);
        let current_generation = Rc::clone(&self.feedback_generation);
        let saved_content = Rc::clone(&self.saved_content);
        let button = button.clone();
        self.scheduler.after(
            self.config.feedback_ms,
            Box::new(move || {
                if current_generation.get() != generation {
                    return;
                }
                if let Some(original) = saved_content.borrow_mut().take() {
                    button.set_inner_html(&original);
                }
            }),
        );
    }
}
