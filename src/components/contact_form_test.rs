use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::dom::fake::{FakeElement, FakePage, ManualScheduler};
use crate::error::PortfolioError;

/// Answers with a fixed status, or a transport failure when `None`.
#[derive(Clone)]
struct StubRelay {
    status: Option<u16>,
    seen: Rc<RefCell<Vec<ContactPayload>>>,
}

impl StubRelay {
    fn answering(status: Option<u16>) -> Self {
        Self { status, seen: Rc::new(RefCell::new(Vec::new())) }
    }
}

impl FormRelay for StubRelay {
    async fn submit(&self, payload: &ContactPayload) -> Result<(), PortfolioError> {
        self.seen.borrow_mut().push(payload.clone());
        match self.status {
            Some(status) => crate::net::relay::check_status(status),
            None => Err(PortfolioError::Network("connection reset".to_owned())),
        }
    }
}

struct Fixture {
    form: FakeElement,
    button: FakeElement,
    label: FakeElement,
    scheduler: ManualScheduler,
    contact: ContactForm<FakeElement, StubRelay, ManualScheduler>,
}

fn fixture(relay: StubRelay) -> Fixture {
    let page = FakePage::new();
    let form = page.add(
        FakeElement::new("form")
            .with_class("contact-form")
            .with_field("fullName", "Grace Hopper")
            .with_field("email", "grace@example.com")
            .with_field("subject", "Role")
            .with_field("message", "Let's talk"),
    );
    let button = form.append(FakeElement::new("button").with_class("send-message-btn"));
    let label = button.append(FakeElement::new("span"));
    label.set_text("Send Message");
    let scheduler = ManualScheduler::default();
    let contact = ContactForm::locate(&page, relay, scheduler.clone(), &ContactConfig::default()).unwrap();
    Fixture { form, button, label, scheduler, contact }
}

#[test]
fn success_clears_form_and_reverts_after_three_seconds() {
    let relay = StubRelay::answering(Some(200));
    let fx = fixture(relay.clone());

    assert_eq!(block_on(fx.contact.submit()), SubmitState::Success);
    assert_eq!(fx.contact.state(), SubmitState::Success);
    assert!(fx.form.has_class("success"));
    assert!(!fx.form.has_class("submitting"));
    assert_eq!(fx.label.text(), SENT_LABEL);
    assert!(fx.button.is_disabled());
    assert_eq!(fx.form.form_value("email").as_deref(), Some(""));

    let seen = relay.seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].name, "Grace Hopper");
    assert_eq!(seen[0].message, "Let's talk");
    drop(seen);

    fx.scheduler.advance(2999);
    assert_eq!(fx.contact.state(), SubmitState::Success);
    fx.scheduler.advance(1);
    assert_eq!(fx.contact.state(), SubmitState::Idle);
    assert!(!fx.form.has_class("success"));
    assert_eq!(fx.label.text(), "Send Message");
    assert!(!fx.button.is_disabled());
}

#[test]
fn server_error_shows_error_state_and_keeps_fields() {
    let fx = fixture(StubRelay::answering(Some(500)));

    assert_eq!(block_on(fx.contact.submit()), SubmitState::Error);
    assert!(fx.form.has_class("error"));
    assert!(!fx.form.has_class("success"));
    assert_eq!(fx.label.text(), ERROR_LABEL);
    assert_eq!(fx.form.form_value("email").as_deref(), Some("grace@example.com"));

    fx.scheduler.advance(3000);
    assert_eq!(fx.contact.state(), SubmitState::Idle);
    assert!(!fx.form.has_class("error"));
    assert_eq!(fx.label.text(), "Send Message");
    assert!(!fx.button.is_disabled());
}

#[test]
fn network_failure_collapses_into_error_state() {
    let fx = fixture(StubRelay::answering(None));
    assert_eq!(block_on(fx.contact.submit()), SubmitState::Error);
    assert_eq!(fx.label.text(), ERROR_LABEL);
    fx.scheduler.advance(3000);
    assert_eq!(fx.contact.state(), SubmitState::Idle);
}

#[test]
fn submit_is_ignored_until_previous_outcome_reverts() {
    let relay = StubRelay::answering(Some(200));
    let fx = fixture(relay.clone());
    block_on(fx.contact.submit());
    assert_eq!(block_on(fx.contact.submit()), SubmitState::Success);
    assert_eq!(relay.seen.borrow().len(), 1);

    fx.scheduler.advance(3000);
    block_on(fx.contact.submit());
    assert_eq!(relay.seen.borrow().len(), 2);
}

#[test]
fn form_without_button_still_submits() {
    let page = FakePage::new();
    page.add(FakeElement::new("form").with_class("contact-form"));
    let contact = ContactForm::locate(&page, StubRelay::answering(Some(201)), ManualScheduler::default(), &ContactConfig::default())
        .unwrap();
    assert_eq!(block_on(contact.submit()), SubmitState::Success);
}

#[test]
fn missing_form_disables_component() {
    let located =
        ContactForm::locate(&FakePage::new(), StubRelay::answering(Some(200)), ManualScheduler::default(), &ContactConfig::default());
    assert!(located.is_none());
}

#[test]
fn state_classes() {
    assert_eq!(SubmitState::Idle.class(), None);
    assert_eq!(SubmitState::Submitting.class(), Some("submitting"));
    assert_eq!(SubmitState::Success.class(), Some("success"));
    assert_eq!(SubmitState::Error.class(), Some("error"));
}
