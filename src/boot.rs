//! Browser wiring: find each component's elements and attach listeners.
//!
//! Every `install_*` function is independent and silently skips its feature
//! when the page lacks the elements it needs. Listener closures live for the
//! page's lifetime, so they are leaked with `forget`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, EventTarget, KeyboardEvent, MouseEvent};

use crate::components::clock::{self, Clock};
use crate::components::contact_form::ContactForm;
use crate::components::credential_modal::CredentialModal;
use crate::components::email_popup::EmailPopup;
use crate::components::nav::{self, NavHighlighter};
use crate::components::parallax::Parallax;
use crate::components::project_filter::ProjectFilter;
use crate::components::rocket::RocketIndicator;
use crate::components::theme::{ThemeControls, ThemeManager};
use crate::components::typewriter::{self, Typewriter};
use crate::config::{CONFIG_ELEMENT_ID, PortfolioConfig};
use crate::dom::web::{IntlTime, LocalStore, NavigatorClipboard, TimeoutScheduler, WebElement, WebPage};
use crate::dom::{Element, Page};
use crate::net::relay::HttpRelay;

fn listen<T, F>(target: &T, event: &str, handler: F)
where
    T: AsRef<EventTarget>,
    F: FnMut(Event) + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if target
        .as_ref()
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("could not attach {event} listener");
    }
    callback.forget();
}

/// Run `task` once the page has fully loaded.
fn on_load<F: FnOnce() + 'static>(page: &WebPage, task: F) {
    if page.is_loaded() {
        task();
        return;
    }
    let mut task = Some(task);
    listen(&page.window, "load", move |_| {
        if let Some(task) = task.take() {
            task();
        }
    });
}

/// Read the optional inline JSON config block.
pub fn read_page_config(page: &WebPage) -> PortfolioConfig {
    let raw = page.by_id(CONFIG_ELEMENT_ID).map(|el| el.text());
    PortfolioConfig::from_json_or_default(raw.as_deref())
}

pub fn install(page: &WebPage, config: &PortfolioConfig) {
    install_theme(page, config);
    install_typewriter(page, config);
    install_clock(page, config);
    install_nav(page, config);
    install_parallax(page, config);
    install_email_popup(page, config);
    install_credential_modal(page, config);
    install_rocket(page, config);
    install_project_filter(page, config);
    install_contact_form(page, config);
    log::debug!("page behaviors installed");
}

fn install_theme(page: &WebPage, config: &PortfolioConfig) {
    let manager = ThemeManager::load(ThemeControls::locate(page), LocalStore, &config.theme_storage_key);
    let Some(toggle) = page.by_id("mode-toggle") else {
        return;
    };
    let manager = RefCell::new(manager);
    listen(toggle.raw(), "click", move |_| {
        manager.borrow_mut().toggle();
    });
}

fn install_typewriter(page: &WebPage, config: &PortfolioConfig) {
    let (Some(target), Some(machine)) = (page.by_id("typing-text"), Typewriter::new(&config.typewriter)) else {
        return;
    };
    on_load(page, move || typewriter::start(machine, target, TimeoutScheduler));
}

fn install_clock(page: &WebPage, config: &PortfolioConfig) {
    let Some(target) = page.by_id("current-time") else {
        return;
    };
    let readout = Clock::new(target, IntlTime, config.clock.clone());
    on_load(page, move || clock::start(readout, TimeoutScheduler));
}

fn install_nav(page: &WebPage, config: &PortfolioConfig) {
    let highlighter = NavHighlighter::locate(page.clone(), config.nav.threshold_px);
    for link in highlighter.links() {
        let page = page.clone();
        let link_for_click = link.clone();
        listen(link.raw(), "click", move |ev: Event| {
            ev.prevent_default();
            nav::scroll_to_link_target(&page, &link_for_click);
        });
    }
    listen(&page.window, "scroll", move |_| {
        highlighter.update();
    });
}

fn install_parallax(page: &WebPage, config: &PortfolioConfig) {
    let Some(parallax) = Parallax::locate(page, config.parallax) else {
        return;
    };
    log::debug!("hero region found, parallax enabled");
    let parallax = Rc::new(parallax);
    let region = parallax.region().raw().clone();

    let on_move = Rc::clone(&parallax);
    listen(&region, "mousemove", move |ev: Event| {
        if let Some(mouse) = ev.dyn_ref::<MouseEvent>() {
            on_move.on_pointer_move(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
        }
    });
    listen(&region, "mouseleave", move |_| parallax.on_pointer_leave());
}

fn install_email_popup(page: &WebPage, config: &PortfolioConfig) {
    let Some(popup) = EmailPopup::locate(page, NavigatorClipboard, TimeoutScheduler, config.email.clone()) else {
        return;
    };
    let popup = Rc::new(popup);

    let on_trigger = Rc::clone(&popup);
    listen(popup.trigger().raw(), "click", move |ev: Event| {
        ev.prevent_default();
        on_trigger.on_trigger_click();
    });

    if let Some(button) = popup.copy_button() {
        let on_copy = Rc::clone(&popup);
        listen(button.raw(), "click", move |_| {
            let popup = Rc::clone(&on_copy);
            spawn_local(async move {
                let _ = popup.copy_address().await;
            });
        });
    }

    let on_outside = Rc::clone(&popup);
    listen(&page.document, "click", move |ev: Event| {
        if let Some(target) = WebElement::from_event_target(ev.target()) {
            on_outside.on_document_click(&target);
        }
    });
}

fn install_credential_modal(page: &WebPage, config: &PortfolioConfig) {
    let Some(modal) = CredentialModal::locate(page, config.credentials.clone()) else {
        return;
    };
    let modal = Rc::new(modal);

    for button in page.query_all(".view-credential-btn") {
        let on_open = Rc::clone(&modal);
        let tagged = button.clone();
        listen(button.raw(), "click", move |_| {
            on_open.open(tagged.attribute("data-cert").as_deref());
        });
    }

    if let Some(close) = page.query(".close-modal") {
        let on_close = Rc::clone(&modal);
        listen(close.raw(), "click", move |_| on_close.close());
    }

    let on_backdrop = Rc::clone(&modal);
    listen(modal.modal().raw(), "click", move |ev: Event| {
        if let Some(target) = WebElement::from_event_target(ev.target()) {
            on_backdrop.on_modal_click(&target);
        }
    });

    listen(&page.document, "keydown", move |ev: Event| {
        if let Some(key) = ev.dyn_ref::<KeyboardEvent>() {
            modal.on_key(&key.key());
        }
    });
}

fn install_rocket(page: &WebPage, config: &PortfolioConfig) {
    let Some(rocket) = RocketIndicator::locate(page.clone(), config.rocket) else {
        return;
    };
    let rocket = Rc::new(rocket);

    let on_click = Rc::clone(&rocket);
    listen(rocket.rocket().raw(), "click", move |_| on_click.on_click());
    listen(&page.window, "scroll", move |_| {
        rocket.on_scroll();
    });

    // Position the rocket (and the nav marker) before the first user scroll.
    let window = page.window.clone();
    on_load(page, move || {
        if let Ok(event) = Event::new("scroll") {
            let _ = window.dispatch_event(&event);
        }
    });
}

fn install_project_filter(page: &WebPage, config: &PortfolioConfig) {
    let filter = Rc::new(ProjectFilter::locate(page, TimeoutScheduler, config.filter));
    for (index, button) in filter.buttons().iter().enumerate() {
        let on_select = Rc::clone(&filter);
        listen(button.raw(), "click", move |_| on_select.select(index));
    }
}

fn install_contact_form(page: &WebPage, config: &PortfolioConfig) {
    let relay = HttpRelay::new(&config.contact.endpoint);
    let Some(contact) = ContactForm::locate(page, relay, TimeoutScheduler, &config.contact) else {
        return;
    };
    let contact = Rc::new(contact);
    let form = contact.form().raw().clone();
    listen(&form, "submit", move |ev: Event| {
        ev.prevent_default();
        let contact = Rc::clone(&contact);
        spawn_local(async move {
            contact.submit().await;
        });
    });
}
