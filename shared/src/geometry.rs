use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Canvas-local position of a pointer given its client coordinates and the
/// canvas's on-screen top-left corner.
pub fn resolve_position(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> Point {
    Point {
        x: client_x - rect_left,
        y: client_y - rect_top,
    }
}
