use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Element, HtmlCanvasElement};

use digitboard_shared::{SketchPad, TicketCounter, WidgetConfig};

use crate::render::CanvasSurface;

pub struct State {
    pub canvas: HtmlCanvasElement,
    pub result: Element,
    pub config: WidgetConfig,
    /// Sketch plus the timeout handle of the reload scheduled by the last clear.
    pub pad: SketchPad<CanvasSurface, i32>,
    pub tickets: TicketCounter,
}

pub type SharedState = Rc<RefCell<State>>;

impl State {
    pub fn new(
        canvas: HtmlCanvasElement,
        surface: CanvasSurface,
        result: Element,
        config: WidgetConfig,
    ) -> Self {
        let pad = SketchPad::new(surface, &config);
        Self {
            canvas,
            result,
            config,
            pad,
            tickets: TicketCounter::default(),
        }
    }

    pub fn into_shared(self) -> SharedState {
        Rc::new(RefCell::new(self))
    }
}
