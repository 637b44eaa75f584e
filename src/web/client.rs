use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response, window};

use crate::drop_request::{DropRequest, DropResult, parse_response};
use crate::error::{DropError, js_err};

fn transport(value: JsValue) -> DropError {
    DropError::Transport(js_err(value))
}

/// POSTs the bet as JSON and parses whatever comes back. No retries: a
/// failure here ends the user's action.
pub async fn request_drop(endpoint: &str, request: DropRequest) -> DropResult {
    let body = request.to_json()?;
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&body));
    let req = Request::new_with_str_and_init(endpoint, &init).map_err(transport)?;
    req.headers()
        .set("Content-Type", "application/json")
        .map_err(transport)?;

    let win = window().ok_or_else(|| DropError::Transport("no window".into()))?;
    let resp: Response = JsFuture::from(win.fetch_with_request(&req))
        .await
        .map_err(transport)?
        .dyn_into()
        .map_err(transport)?;
    let text = JsFuture::from(resp.text().map_err(transport)?)
        .await
        .map_err(transport)?;
    let text = text
        .as_string()
        .ok_or_else(|| DropError::Malformed("response body is not text".into()))?;
    parse_response(&text)
}
