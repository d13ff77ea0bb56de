//! # portfolio-behaviors
//!
//! Client-side behaviors for a static portfolio page, compiled to WASM:
//! theme toggle, typewriter headline, local clock, nav highlighting and
//! smooth scrolling, hero parallax, email popup, certificate modal, rocket
//! scroll indicator, project filter and a contact form that posts to a
//! hosted form relay.
//!
//! Components are written against the capability traits in [`dom`], so all
//! of their logic runs natively under `cargo test`. The `browser` feature
//! adds the `web_sys` backends and the `start` entry point that wires them
//! to the live document.

#[cfg(feature = "browser")]
pub mod boot;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod net;

pub use config::PortfolioConfig;
pub use error::PortfolioError;

/// WASM entry point.
#[cfg(feature = "browser")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let Some(page) = dom::web::WebPage::current() else {
        log::error!("no window/document; page behaviors not installed");
        return;
    };
    let config = boot::read_page_config(&page);
    boot::install(&page, &config);
}
