//! REST API helpers for the sales-data and AI endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics. A network
//! failure, a non-2xx status, and a malformed payload all collapse into the
//! same error arm; the dashboard does not distinguish them.

#![allow(clippy::unused_async)]

use super::types::SalesRep;

/// Fetch the sales representative collection from `GET /api/data`.
///
/// A response body without the `salesReps` field yields an empty vec.
///
/// # Errors
///
/// Returns an error string on network failure, non-2xx status, or a body
/// that does not deserialize.
pub async fn fetch_sales_data() -> Result<Vec<SalesRep>, String> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::SalesData;

        let resp = gloo_net::http::Request::get("/api/data")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("data request failed: {}", resp.status()));
        }
        let body: SalesData = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.sales_reps)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Send a free-text question to `POST /api/ai` and return the response text.
///
/// # Errors
///
/// Returns an error string on network failure, non-2xx status, or a body
/// that does not deserialize. Failure bodies are not inspected.
pub async fn ask_question(question: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::{AskRequest, AskResponse};

        let resp = gloo_net::http::Request::post("/api/ai")
            .json(&AskRequest {
                question: question.to_owned(),
            })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("ai request failed: {}", resp.status()));
        }
        let body: AskResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.response)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = question;
        Err("not available on server".to_owned())
    }
}
