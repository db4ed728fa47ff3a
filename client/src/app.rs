use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlButtonElement, HtmlCanvasElement, MouseEvent, TouchEvent};

use crate::actions::{clear, continue_gesture, end_gesture, spawn_predict, start_gesture};
use crate::dom::{
    canvas_context, debug_enabled, document_ready_state, find_element, get_element,
    mouse_point, read_config, touch_point,
};
use crate::render::CanvasSurface;
use crate::state::{SharedState, State};

thread_local! {
    static WIDGET: RefCell<Option<SharedState>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;
    let started = Rc::new(Cell::new(false));

    if document_ready_state(&document).as_deref() != Some("loading") {
        started.set(true);
        return start_app();
    }

    let onload_started = started.clone();
    let onload = Closure::<dyn FnMut(Event)>::new(move |_| {
        if onload_started.replace(true) {
            return;
        }
        if let Err(err) = start_app() {
            web_sys::console::error_1(&err);
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", onload.as_ref().unchecked_ref())?;
    onload.forget();

    Ok(())
}

/// Submits the current sketch, for pages wiring `onclick="predictDigit()"` themselves.
#[wasm_bindgen(js_name = predictDigit)]
pub fn predict_digit() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let state = WIDGET
        .with(|widget| widget.borrow().clone())
        .ok_or_else(|| JsValue::from_str("Widget not started"))?;
    spawn_predict(state, window);
    Ok(())
}

fn start_app() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;

    let level = if debug_enabled(&window) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);

    let config = read_config(&document);
    let canvas: HtmlCanvasElement = get_element(&document, &config.canvas_id)?;
    let ctx = canvas_context(&canvas)?;
    let result = get_element(&document, &config.result_id)?;
    let clear_button: HtmlButtonElement = get_element(&document, &config.clear_button_id)?;
    let predict_button: Option<HtmlButtonElement> =
        find_element(&document, &config.predict_button_id);

    let surface = CanvasSurface::new(canvas.clone(), ctx);
    let state = State::new(canvas.clone(), surface, result, config).into_shared();
    state.borrow_mut().pad.sketch_mut().initialize();
    log::info!(
        "Sketch widget ready on #{} ({}x{})",
        state.borrow().config.canvas_id,
        canvas.width(),
        canvas.height()
    );

    {
        let down_state = state.clone();
        let down_canvas = canvas.clone();
        let ondown = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            start_gesture(&down_state, mouse_point(&down_canvas, &event));
        });
        canvas.add_event_listener_with_callback("mousedown", ondown.as_ref().unchecked_ref())?;
        ondown.forget();
    }

    {
        let touch_state = state.clone();
        let touch_canvas = canvas.clone();
        let ontouchstart = Closure::<dyn FnMut(TouchEvent)>::new(move |event: TouchEvent| {
            event.prevent_default();
            if let Some(point) = touch_point(&touch_canvas, &event) {
                start_gesture(&touch_state, point);
            }
        });
        canvas.add_event_listener_with_callback(
            "touchstart",
            ontouchstart.as_ref().unchecked_ref(),
        )?;
        ontouchstart.forget();
    }

    {
        let move_state = state.clone();
        let move_canvas = canvas.clone();
        let onmove = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            if !move_state.borrow().pad.sketch().is_drawing() {
                return;
            }
            event.prevent_default();
            continue_gesture(&move_state, mouse_point(&move_canvas, &event));
        });
        canvas.add_event_listener_with_callback("mousemove", onmove.as_ref().unchecked_ref())?;
        onmove.forget();
    }

    {
        let move_state = state.clone();
        let move_canvas = canvas.clone();
        let ontouchmove = Closure::<dyn FnMut(TouchEvent)>::new(move |event: TouchEvent| {
            if !move_state.borrow().pad.sketch().is_drawing() {
                return;
            }
            event.prevent_default();
            if let Some(point) = touch_point(&move_canvas, &event) {
                continue_gesture(&move_state, point);
            }
        });
        canvas.add_event_listener_with_callback("touchmove", ontouchmove.as_ref().unchecked_ref())?;
        ontouchmove.forget();
    }

    {
        let stop_state = state.clone();
        let onstop = Closure::<dyn FnMut(Event)>::new(move |_| {
            end_gesture(&stop_state);
        });
        for name in ["mouseup", "mouseleave", "touchend"] {
            canvas.add_event_listener_with_callback(name, onstop.as_ref().unchecked_ref())?;
        }
        onstop.forget();
    }

    {
        let clear_state = state.clone();
        let clear_window = window.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            if let Err(err) = clear(&clear_state, &clear_window) {
                log::error!("Clear failed: {err:?}");
            }
        });
        clear_button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    if let Some(predict_button) = predict_button {
        let predict_state = state.clone();
        let predict_window = window.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            spawn_predict(predict_state.clone(), predict_window.clone());
        });
        predict_button
            .add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    } else {
        log::debug!("No predict button found; use predictDigit() to submit");
    }

    WIDGET.with(|widget| widget.replace(Some(state)));
    Ok(())
}
