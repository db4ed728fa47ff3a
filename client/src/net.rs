use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, FormData, HtmlCanvasElement, RequestInit, Response, Window};

use digitboard_shared::{interpret_response, is_success, Digit, PredictError, WidgetConfig};

fn js_error_text(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{err:?}")
}

/// Encodes the canvas contents, resolving once the browser hands back the blob.
pub async fn canvas_blob(canvas: &HtmlCanvasElement, image_type: &str) -> Result<Blob, PredictError> {
    let promise = Promise::new(&mut |resolve, reject| {
        let on_blob = Closure::once_into_js(move |blob: JsValue| {
            let _ = resolve.call1(&JsValue::UNDEFINED, &blob);
        });
        if let Err(err) = canvas.to_blob_with_type(on_blob.unchecked_ref(), image_type) {
            let _ = reject.call1(&JsValue::UNDEFINED, &err);
        }
    });
    let value = JsFuture::from(promise).await.map_err(|err| {
        log::debug!("toBlob failed: {}", js_error_text(&err));
        PredictError::Encode
    })?;
    value.dyn_into::<Blob>().map_err(|_| PredictError::Encode)
}

pub fn form_body(blob: &Blob, config: &WidgetConfig) -> Result<FormData, PredictError> {
    let form = FormData::new().map_err(|err| PredictError::Transport(js_error_text(&err)))?;
    form.append_with_blob_and_filename(&config.field_name, blob, &config.file_name)
        .map_err(|err| PredictError::Transport(js_error_text(&err)))?;
    Ok(form)
}

/// POSTs the form and reads back the status and body text.
pub async fn post_form(
    window: &Window,
    endpoint: &str,
    form: FormData,
) -> Result<(u16, String), PredictError> {
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from(form));

    let value = JsFuture::from(window.fetch_with_str_and_init(endpoint, &init))
        .await
        .map_err(|err| PredictError::Transport(js_error_text(&err)))?;
    let response: Response = value
        .dyn_into()
        .map_err(|_| PredictError::Transport("fetch did not return a Response".to_string()))?;
    let status = response.status();
    if !is_success(status) {
        return Ok((status, String::new()));
    }
    let text = response
        .text()
        .map_err(|err| PredictError::Transport(js_error_text(&err)))?;
    let body = JsFuture::from(text)
        .await
        .map_err(|err| PredictError::Transport(js_error_text(&err)))?
        .as_string()
        .unwrap_or_default();
    Ok((status, body))
}

pub async fn request_prediction(
    window: &Window,
    canvas: &HtmlCanvasElement,
    config: &WidgetConfig,
) -> Result<Digit, PredictError> {
    let blob = canvas_blob(canvas, &config.image_type).await?;
    log::debug!("Encoded canvas: {} bytes", blob.size());
    let form = form_body(&blob, config)?;
    let (status, body) = post_form(window, &config.endpoint, form).await?;
    log::debug!("Prediction response status={status}");
    interpret_response(status, &body)
}
