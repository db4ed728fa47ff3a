pub mod config;
pub mod geometry;
pub mod pad;
pub mod predict;
pub mod reset;
pub mod sketch;

#[cfg(test)]
mod testing;

pub use config::WidgetConfig;
pub use geometry::{resolve_position, Point};
pub use pad::{ClearOutcome, SketchPad};
pub use predict::{
    interpret_response, is_success, result_text, Digit, PredictError, PredictResponse,
    RequestTicket, TicketCounter, ERROR_TEXT,
};
pub use reset::{PendingReset, ReloadTimer, ResetStrategy};
pub use sketch::{Sketch, StrokeStyle, Surface};
