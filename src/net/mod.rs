//! Networking for the contact form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page has no backend of its own. `relay` posts form submissions to a
//! hosted form-relay service and defines the wire payload.

pub mod relay;
