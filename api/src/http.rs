//! Browser-side HTTP plumbing for the backend origin.
//!
//! One generic JSON request helper over the `fetch` API, cfg-gated to
//! wasm32 with native stubs. There is no retry, backoff or cancellation;
//! every call is a single request whose failure is reported to the caller.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Failure of a backend call. The UI collapses all variants into one
/// generic localized message per operation; the detail only goes to the
/// diagnostic log.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("backend returned status {0}")]
    Status(u16),
    #[error("invalid response payload: {0}")]
    Decode(String),
    #[error("backend calls are only available in the browser")]
    Unsupported,
}

#[cfg(target_arch = "wasm32")]
pub(crate) async fn request_json<B, R>(
    method: &str,
    url: &str,
    token: Option<&str>,
    body: Option<&B>,
) -> Result<R, ApiError>
where
    B: Serialize,
    R: DeserializeOwned + Default,
{
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Headers, Request, RequestInit, Response};

    let window = web_sys::window().ok_or_else(|| ApiError::Transport("no window".to_string()))?;

    let headers = Headers::new().map_err(js_err)?;
    if body.is_some() {
        headers
            .set("Content-Type", "application/json")
            .map_err(js_err)?;
    }
    if let Some(token) = token {
        headers
            .set("Authorization", &format!("Bearer {token}"))
            .map_err(js_err)?;
    }

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_headers(&headers);
    if let Some(body) = body {
        let body_str = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        opts.set_body(&JsValue::from_str(&body_str));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_err)?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| ApiError::Transport("not a Response".to_string()))?;

    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }

    let text_value = JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    let text = text_value.as_string().unwrap_or_default();

    // A response with no payload is a valid empty result.
    if text.trim().is_empty() {
        return Ok(R::default());
    }
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(target_arch = "wasm32")]
fn js_err(value: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Transport(format!("{value:?}"))
}

/// Native stub; the client only runs in the browser.
#[cfg(not(target_arch = "wasm32"))]
pub(crate) async fn request_json<B, R>(
    _method: &str,
    _url: &str,
    _token: Option<&str>,
    _body: Option<&B>,
) -> Result<R, ApiError>
where
    B: Serialize,
    R: DeserializeOwned + Default,
{
    Err(ApiError::Unsupported)
}
