//! Certificate viewer modal.
//!
//! Buttons carry a `data-cert` tag that selects the image to show. Close
//! paths (close control, backdrop click, Escape) all funnel into
//! [`CredentialModal::close`], which is idempotent.

#[cfg(test)]
#[path = "credential_modal_test.rs"]
mod credential_modal_test;

use crate::config::CredentialConfig;
use crate::dom::{Element, Page};

pub struct CredentialModal<E> {
    modal: E,
    image: Option<E>,
    body: Option<E>,
    credentials: CredentialConfig,
}

impl<E: Element> CredentialModal<E> {
    pub fn locate<P: Page<Element = E>>(page: &P, credentials: CredentialConfig) -> Option<Self> {
        Some(Self { modal: page.by_id("credential-modal")?, image: page.by_id("credential-image"), body: page.body(), credentials })
    }

    pub fn modal(&self) -> &E {
        &self.modal
    }

    pub fn is_open(&self) -> bool {
        self.modal.style("display") == "block"
    }

    /// Show the certificate for `tag`, falling back to the default image.
    pub fn open(&self, tag: Option<&str>) {
        let path = self.credentials.image_for(tag);
        if let Some(image) = &self.image {
            image.set_attribute("src", path);
        }
        self.modal.set_style("display", "block");
        if let Some(body) = &self.body {
            body.set_style("overflow", "hidden");
        }
    }

    pub fn close(&self) {
        self.modal.set_style("display", "none");
        if let Some(body) = &self.body {
            body.set_style("overflow", "auto");
        }
    }

    /// Clicks on the backdrop itself close; clicks on the content do not.
    pub fn on_modal_click(&self, target: &E) {
        if target.is_same(&self.modal) {
            self.close();
        }
    }

    pub fn on_key(&self, key: &str) {
        if key == "Escape" && self.is_open() {
            self.close();
        }
    }
}
