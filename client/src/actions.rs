use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use digitboard_shared::{result_text, ClearOutcome, Point, ReloadTimer};

use crate::dom::set_result;
use crate::net::request_prediction;
use crate::state::SharedState;

pub fn start_gesture(state: &SharedState, point: Point) {
    let mut state = state.borrow_mut();
    state.pad.sketch_mut().start(point);
    log::debug!("Gesture start at ({}, {})", point.x, point.y);
}

/// Returns whether a segment was drawn, so callers know to suppress the default action.
pub fn continue_gesture(state: &SharedState, point: Point) -> bool {
    state.borrow_mut().pad.sketch_mut().extend(point)
}

pub fn end_gesture(state: &SharedState) {
    let mut state = state.borrow_mut();
    if state.pad.sketch().is_drawing() {
        log::debug!("Gesture end");
    }
    state.pad.sketch_mut().end();
}

/// `setTimeout`-backed reload timer. The callback marks the reload as fired on `state`.
struct WindowTimer {
    window: Window,
    state: SharedState,
}

impl ReloadTimer for WindowTimer {
    type Handle = i32;
    type Error = JsValue;

    fn schedule(&mut self, delay_ms: i32) -> Result<i32, JsValue> {
        let fire_state = self.state.clone();
        let fire_window = self.window.clone();
        let onreload = Closure::once_into_js(move || {
            fire_state.borrow_mut().pad.reload_fired();
            if let Err(err) = fire_window.location().reload() {
                log::error!("Reload failed: {err:?}");
            }
        });
        let handle = self.window.set_timeout_with_callback_and_timeout_and_arguments_0(
            onreload.unchecked_ref(),
            delay_ms,
        )?;
        log::debug!("Reload scheduled in {delay_ms}ms (timer {handle})");
        Ok(handle)
    }

    fn cancel(&mut self, handle: i32) {
        self.window.clear_timeout_with_handle(handle);
        log::debug!("Cancelled superseded reload timer {handle}");
    }
}

pub fn clear(state: &SharedState, window: &Window) -> Result<(), JsValue> {
    let mut timer = WindowTimer {
        window: window.clone(),
        state: state.clone(),
    };
    let mut guard = state.borrow_mut();
    if guard.pad.clear(&mut timer)? == ClearOutcome::ResetInPlace {
        set_result(&guard.result, "");
        log::debug!("Cleared in place");
    }
    Ok(())
}

pub fn spawn_predict(state: SharedState, window: Window) {
    wasm_bindgen_futures::spawn_local(async move {
        predict(state, window).await;
    });
}

async fn predict(state: SharedState, window: Window) {
    let (canvas, config, ticket) = {
        let mut guard = state.borrow_mut();
        let ticket = guard.tickets.issue();
        (guard.canvas.clone(), guard.config.clone(), ticket)
    };
    log::debug!("Prediction {ticket:?} sent to {}", config.endpoint);

    let outcome = request_prediction(&window, &canvas, &config).await;
    if let Err(err) = &outcome {
        log::error!("Prediction error: {err}");
    }

    let guard = state.borrow();
    if !guard.tickets.is_current(ticket) {
        log::debug!("Dropping result of superseded prediction {ticket:?}");
        return;
    }
    set_result(&guard.result, &result_text(&outcome));
}
