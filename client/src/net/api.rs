//! REST API helpers for the checkout and contact endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/`false` since both endpoints
//! are only meaningful from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`bool` outputs instead of panics so a failed
//! request degrades to an inline message rather than crashing hydration.

#![allow(clippy::unused_async)]

use serde::{Deserialize, Serialize};

/// Body for `POST /api/support/checkout`.
#[derive(Clone, Debug, Serialize)]
pub struct CheckoutRequest {
    pub amount_cents: u32,
    pub name: String,
    pub message: String,
}

/// Response from `POST /api/support/checkout`.
#[derive(Clone, Debug, Deserialize)]
pub struct CheckoutResponse {
    /// Server-generated reference for the donation attempt.
    pub reference: String,
    /// Hosted payment page to redirect the visitor to.
    pub checkout_url: String,
}

/// Ask the server to shape a checkout URL for the chosen amount.
/// Returns `None` on any failure or on the server.
pub async fn create_checkout(request: &CheckoutRequest) -> Option<CheckoutResponse> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/support/checkout")
            .json(request)
            .ok()?
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<CheckoutResponse>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        None
    }
}

/// Body for `POST /api/contact`.
#[derive(Clone, Debug, Serialize)]
pub struct ContactRequest {
    pub email: String,
    pub message: String,
}

/// Submit the contact form. Returns whether the server accepted it.
pub async fn send_contact(request: &ContactRequest) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Ok(req) = gloo_net::http::Request::post("/api/contact").json(request) else {
            return false;
        };
        match req.send().await {
            Ok(resp) => resp.ok(),
            Err(_) => false,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        false
    }
}

/// Send the browser to the hosted payment page.
pub fn redirect_to_checkout(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
