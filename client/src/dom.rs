use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, MouseEvent, TouchEvent,
    Window,
};

use digitboard_shared::{resolve_position, Point, WidgetConfig};

pub const CONFIG_ATTRIBUTE: &str = "data-digitboard-config";

pub fn get_element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element: {id}")))?;
    element
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Invalid element type: {id}")))
}

/// Like `get_element`, but an absent element is not an error.
pub fn find_element<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

pub fn canvas_context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("Canvas 2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("Invalid 2d context"))
}

pub fn debug_enabled(window: &Window) -> bool {
    let search = window.location().search().ok().unwrap_or_default();
    search.contains("debug=1") || search.contains("debug=true")
}

pub fn document_ready_state(document: &Document) -> Option<String> {
    Reflect::get(document.as_ref(), &JsValue::from_str("readyState"))
        .ok()?
        .as_string()
}

pub fn read_config(document: &Document) -> WidgetConfig {
    let attribute = document
        .body()
        .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE));
    match WidgetConfig::from_attribute(attribute.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Ignoring malformed {CONFIG_ATTRIBUTE}: {err}");
            WidgetConfig::default()
        }
    }
}

pub fn mouse_point(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Point {
    let rect = canvas.get_bounding_client_rect();
    resolve_position(
        event.client_x() as f64,
        event.client_y() as f64,
        rect.left(),
        rect.top(),
    )
}

/// Only the first active touch is tracked.
pub fn touch_point(canvas: &HtmlCanvasElement, event: &TouchEvent) -> Option<Point> {
    let touch = event.touches().get(0)?;
    let rect = canvas.get_bounding_client_rect();
    Some(resolve_position(
        touch.client_x() as f64,
        touch.client_y() as f64,
        rect.left(),
        rect.top(),
    ))
}

pub fn set_result(result: &Element, text: &str) {
    result.set_text_content(Some(text));
}
