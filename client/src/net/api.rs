//! HTTP helpers for the remote summarization service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; callers decide whether a failure
//! is shown to the user (submission) or only logged (history, history record).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{HistoryEntry, HistoryRecord, SubmissionRequest, SubmitResponse, SummaryResult};

/// Backend used when `SUMMARY_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "https://summarizer-ai-backend.vercel.app";

/// Multipart field carrying the uploaded document.
pub const FIELD_FILE: &str = "file";
/// Multipart field carrying the prompt text.
pub const FIELD_PROMPT: &str = "promptText";
/// Multipart field carrying the encoded section flags.
pub const FIELD_FLAGS: &str = "flags";

/// Location of the summarization service. Provided once via context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim().trim_end_matches('/').to_owned() }
    }

    /// Read `SUMMARY_API_BASE` captured at compile time, falling back to
    /// [`DEFAULT_API_BASE`].
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(option_env!("SUMMARY_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn summarize_url(&self) -> String {
        format!("{}/summarize/", self.base_url)
    }

    #[must_use]
    pub fn login_url(&self) -> String {
        format!("{}/login/", self.base_url)
    }

    #[must_use]
    pub fn history_record_url(&self) -> String {
        format!("{}/history/add/", self.base_url)
    }

    #[must_use]
    pub fn history_list_url(&self, uid: &str) -> String {
        format!("{}/history/get/{uid}/", self.base_url)
    }

    #[must_use]
    pub fn history_item_url(&self, response_id: &str) -> String {
        format!("{}/history/response/{response_id}/", self.base_url)
    }
}

/// Text fields of the submission multipart body, in send order.
#[must_use]
pub fn text_fields(request: &SubmissionRequest) -> Vec<(&'static str, String)> {
    vec![
        (FIELD_PROMPT, request.prompt_text.clone()),
        (FIELD_FLAGS, request.flags.encode()),
    ]
}

#[cfg(feature = "hydrate")]
fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
fn js_error(err: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(format!("{err:?}"))
}

#[cfg(feature = "hydrate")]
fn build_form_data(request: &SubmissionRequest) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new().map_err(js_error)?;
    if let Some(upload) = &request.file {
        let bytes = js_sys::Uint8Array::from(upload.bytes.as_slice());
        let parts = js_sys::Array::of1(&bytes);
        let options = web_sys::BlobPropertyBag::new();
        if let Some(mime) = &upload.mime {
            options.set_type(mime);
        }
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)?;
        form.append_with_blob_and_filename(FIELD_FILE, &blob, &upload.name)
            .map_err(js_error)?;
    }
    for (name, value) in text_fields(request) {
        form.append_with_str(name, &value).map_err(js_error)?;
    }
    Ok(form)
}

/// Send a document and/or prompt to `POST /summarize/`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-2xx status, or an
/// undecodable body. Empty content is *not* checked here.
pub async fn submit(config: &ApiConfig, request: &SubmissionRequest) -> Result<SubmitResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let form = build_form_data(request)?;
        let resp = gloo_net::http::Request::post(&config.summarize_url())
            .body(form)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<SubmitResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request);
        Err(ApiError::Unavailable)
    }
}

/// Exchange an identity-provider token via `POST /login/`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or non-2xx status.
pub async fn login(config: &ApiConfig, id_token: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::LoginRequest { id_token: id_token.to_owned() };
        let resp = gloo_net::http::Request::post(&config.login_url())
            .json(&payload)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, id_token);
        Err(ApiError::Unavailable)
    }
}

/// Persist a completed submission via `POST /history/add/`. The response body
/// is ignored.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or non-2xx status.
pub async fn record_history(config: &ApiConfig, record: &HistoryRecord) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&config.history_record_url())
            .json(record)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, record);
        Err(ApiError::Unavailable)
    }
}

/// List a user's past submissions via `GET /history/get/{uid}/`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-2xx status, or an
/// undecodable body.
pub async fn fetch_history(config: &ApiConfig, uid: &str) -> Result<Vec<HistoryEntry>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.history_list_url(uid))
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body: super::types::HistoryListResponse =
            resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        let (entries, skipped) = body.into_entries();
        if skipped > 0 {
            leptos::logging::warn!("skipped {skipped} malformed history entries");
        }
        Ok(entries)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, uid);
        Err(ApiError::Unavailable)
    }
}

/// Fetch one archived result via `GET /history/response/{response_id}/`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-2xx status, an undecodable
/// body, or [`ApiError::EmptyContent`] when the archived result is empty.
pub async fn fetch_response(config: &ApiConfig, response_id: &str) -> Result<SummaryResult, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.history_item_url(response_id))
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body: super::types::HistoryItemResponse =
            resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        SummaryResult::from_content(body.response).ok_or(ApiError::EmptyContent)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, response_id);
        Err(ApiError::Unavailable)
    }
}
