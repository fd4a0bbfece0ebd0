//! Fetch helpers shared by every API module.
//!
//! All server access goes through these wrappers: the response body is
//! deserialized into a typed DTO at the boundary, and every JS-side
//! failure maps to a plain `String` error for the calling page.

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

async fn send(request: Request) -> Result<Response, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;
    Ok(resp)
}

/// Read the body as text and parse it as JSON. Failure status codes
/// still carry a JSON error envelope, so the body is parsed either way;
/// an unparseable body on a failed response reports the HTTP status.
async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, String> {
    let ok = resp.ok();
    let status = resp.status();
    let text = JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    match serde_json::from_str(&text) {
        Ok(data) => Ok(data),
        Err(_) if !ok => Err(format!("HTTP {}", status)),
        Err(e) => Err(format!("{e}")),
    }
}

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    read_json(send(request).await?).await
}

/// POST with an `application/x-www-form-urlencoded` body (`k=3` style).
pub async fn post_form<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, String> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Content-Type", "application/x-www-form-urlencoded")
        .map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    read_json(send(request).await?).await
}

/// POST with no body (`/delete/data`, `/delete/results`).
pub async fn post_empty<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    read_json(send(request).await?).await
}

/// POST a multipart form (file upload). The browser sets the multipart
/// boundary header itself.
pub async fn post_multipart<T: DeserializeOwned>(
    url: &str,
    form_data: &FormData,
) -> Result<T, String> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form_data);

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{e:?}"))?;

    read_json(send(request).await?).await
}
