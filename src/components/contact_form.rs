//! Contact form submission.
//!
//! `Idle -> Submitting -> (Success | Error) -> Idle`. The terminal state is
//! shown as a class on the form and a button label, then reverted after a
//! fixed delay. One submission is in flight at most; the button stays
//! disabled from submit until the revert.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::config::ContactConfig;
use crate::dom::{Element, Page, Scheduler};
use crate::net::relay::{ContactPayload, FormRelay};

pub const SENDING_LABEL: &str = "Sending...";
pub const SENT_LABEL: &str = "Message Sent!";
pub const ERROR_LABEL: &str = "Error! Try Again";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmitState {
    /// Class carried by the form while in this state.
    pub fn class(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Submitting => Some("submitting"),
            Self::Success => Some("success"),
            Self::Error => Some("error"),
        }
    }
}

pub struct ContactForm<E, R, S> {
    form: E,
    button: Option<E>,
    label: Option<E>,
    relay: R,
    scheduler: S,
    revert_ms: u32,
    state: Rc<Cell<SubmitState>>,
}

impl<E: Element, R: FormRelay, S: Scheduler> ContactForm<E, R, S> {
    pub fn locate<P: Page<Element = E>>(page: &P, relay: R, scheduler: S, config: &ContactConfig) -> Option<Self> {
        let form = page.query(".contact-form")?;
        let button = form.query(".send-message-btn");
        let label = button.as_ref().and_then(|b| b.query("span"));
        Some(Self {
            form,
            button,
            label,
            relay,
            scheduler,
            revert_ms: config.revert_ms,
            state: Rc::new(Cell::new(SubmitState::Idle)),
        })
    }

    pub fn form(&self) -> &E {
        &self.form
    }

    pub fn state(&self) -> SubmitState {
        self.state.get()
    }

    /// Post the form and show the outcome. Returns the state reached.
    pub async fn submit(&self) -> SubmitState {
        if self.state.get() != SubmitState::Idle {
            return self.state.get();
        }
        let original_label = self.label.as_ref().map(E::text).unwrap_or_default();

        self.enter(SubmitState::Submitting, SENDING_LABEL);
        if let Some(button) = &self.button {
            button.set_disabled(true);
        }

        let payload = ContactPayload::from_form(&self.form);
        let outcome = match self.relay.submit(&payload).await {
            Ok(()) => {
                self.form.reset_form();
                self.enter(SubmitState::Success, SENT_LABEL);
                SubmitState::Success
            }
            Err(err) => {
                log::warn!("contact form submission failed: {err}");
                self.enter(SubmitState::Error, ERROR_LABEL);
                SubmitState::Error
            }
        };

        self.schedule_revert(outcome, original_label);
        outcome
    }

    fn enter(&self, next: SubmitState, label: &str) {
        if let Some(class) = self.state.get().class() {
            self.form.remove_class(class);
        }
        if let Some(class) = next.class() {
            self.form.add_class(class);
        }
        if let Some(el) = &self.label {
            el.set_text(label);
        }
        self.state.set(next);
    }

    fn schedule_revert(&self, outcome: SubmitState, original_label: String) {
        let form = self.form.clone();
        let button = self.button.clone();
        let label = self.label.clone();
        let state = Rc::clone(&self.state);
        self.scheduler.after(
            self.revert_ms,
            Box::new(move || {
                if let Some(class) = outcome.class() {
                    form.remove_class(class);
                }
                if let Some(label) = &label {
                    label.set_text(&original_label);
                }
                if let Some(button) = &button {
                    button.set_disabled(false);
                }
                state.set(SubmitState::Idle);
            }),
        );
    }
}
