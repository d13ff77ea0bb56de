//! Page behaviors, one module per feature.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are independent: each finds its own elements, owns its own
//! transient state and reacts to events handed to it by `boot`. None reads
//! another's output.

pub mod clock;
pub mod contact_form;
pub mod credential_modal;
pub mod email_popup;
pub mod nav;
pub mod parallax;
pub mod project_filter;
pub mod rocket;
pub mod theme;
pub mod typewriter;
