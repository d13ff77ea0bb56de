//! Form-relay client.
//!
//! Browser builds post JSON via `gloo-net`. Native builds only carry the
//! payload type and the trait so the form logic can run against a stub.
//!
//! ERROR HANDLING
//! ==============
//! A 2xx status is the only success signal. Any other status becomes
//! [`PortfolioError::RelayStatus`]; transport failures become
//! [`PortfolioError::Network`]. No retries.

#[cfg(test)]
#[path = "relay_test.rs"]
mod relay_test;

use serde::Serialize;

use crate::dom::Element;
use crate::error::PortfolioError;

/// Submission body, as the relay expects it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactPayload {
    /// Read the four fields from a contact form. Missing fields are empty.
    pub fn from_form<E: Element>(form: &E) -> Self {
        let field = |name: &str| form.form_value(name).unwrap_or_default();
        Self { name: field("fullName"), email: field("email"), subject: field("subject"), message: field("message") }
    }

    /// # Errors
    ///
    /// Returns [`PortfolioError::Encode`] if serialization fails.
    pub fn to_json(&self) -> Result<String, PortfolioError> {
        serde_json::to_string(self).map_err(PortfolioError::Encode)
    }
}

/// Map an HTTP status to the relay outcome.
///
/// # Errors
///
/// Returns [`PortfolioError::RelayStatus`] for anything outside `200..300`.
pub fn check_status(status: u16) -> Result<(), PortfolioError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(PortfolioError::RelayStatus { status }) }
}

#[allow(async_fn_in_trait)]
pub trait FormRelay: 'static {
    /// # Errors
    ///
    /// Any non-2xx response or transport failure.
    async fn submit(&self, payload: &ContactPayload) -> Result<(), PortfolioError>;
}

/// Posts submissions to a hosted relay endpoint.
#[cfg(feature = "browser")]
pub struct HttpRelay {
    endpoint: String,
}

#[cfg(feature = "browser")]
impl HttpRelay {
    pub fn new(endpoint: &str) -> Self {
        Self { endpoint: endpoint.to_owned() }
    }
}

#[cfg(feature = "browser")]
impl FormRelay for HttpRelay {
    async fn submit(&self, payload: &ContactPayload) -> Result<(), PortfolioError> {
        let body = payload.to_json()?;
        let resp = gloo_net::http::Request::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .body(body)
            .map_err(|e| PortfolioError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| PortfolioError::Network(e.to_string()))?;
        check_status(resp.status())
    }
}
