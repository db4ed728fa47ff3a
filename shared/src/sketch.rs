use crate::config::WidgetConfig;
use crate::geometry::Point;

#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: String,
    pub width: f64,
    pub cap: String,
}

impl StrokeStyle {
    pub fn from_config(config: &WidgetConfig) -> Self {
        Self {
            color: config.foreground.clone(),
            width: config.line_width,
            cap: config.line_cap.clone(),
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::from_config(&WidgetConfig::default())
    }
}

/// The 2D drawing operations the sketch needs from its backing surface.
pub trait Surface {
    fn size(&self) -> (f64, f64);
    fn fill_rect(&mut self, color: &str, x: f64, y: f64, width: f64, height: f64);
    /// Draws one independent segment; the path is restarted at `to` afterwards.
    fn stroke_segment(&mut self, from: Point, to: Point, style: &StrokeStyle);
}

/// Freehand sketch state bound to one surface.
///
/// `drawing` is only true between `start` and the next `end`; `extend` is a no-op
/// outside that window.
pub struct Sketch<S> {
    surface: S,
    background: String,
    style: StrokeStyle,
    drawing: bool,
    anchor: Option<Point>,
}

impl<S: Surface> Sketch<S> {
    pub fn new(surface: S, config: &WidgetConfig) -> Self {
        Self {
            surface,
            background: config.background.clone(),
            style: StrokeStyle::from_config(config),
            drawing: false,
            anchor: None,
        }
    }

    pub fn initialize(&mut self) {
        let (width, height) = self.surface.size();
        self.surface
            .fill_rect(&self.background, 0.0, 0.0, width, height);
    }

    pub fn start(&mut self, point: Point) {
        self.drawing = true;
        self.anchor = Some(point);
    }

    /// Returns whether a segment was painted.
    pub fn extend(&mut self, point: Point) -> bool {
        if !self.drawing {
            return false;
        }
        let from = self.anchor.unwrap_or(point);
        self.surface.stroke_segment(from, point, &self.style);
        self.anchor = Some(point);
        true
    }

    pub fn end(&mut self) {
        self.drawing = false;
        self.anchor = None;
    }

    /// Ends any gesture and repaints the background.
    pub fn reset(&mut self) {
        self.end();
        self.initialize();
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    #[cfg(test)]
    pub fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Raster;

    fn sketch(width: usize, height: usize) -> Sketch<Raster> {
        let config = WidgetConfig {
            line_width: 3.0,
            ..WidgetConfig::default()
        };
        let mut sketch = Sketch::new(Raster::new(width, height), &config);
        sketch.initialize();
        sketch
    }

    #[test]
    fn initialize_fills_every_pixel_with_background() {
        let sketch = sketch(28, 20);
        assert_eq!(sketch.surface().count("black"), 28 * 20);
    }

    #[test]
    fn not_drawing_before_any_start() {
        let mut sketch = sketch(10, 10);
        assert!(!sketch.is_drawing());
        assert!(!sketch.extend(Point::new(5.0, 5.0)));
        assert_eq!(sketch.surface().count("white"), 0);
        assert_eq!(sketch.surface().segments, 0);
    }

    #[test]
    fn start_alone_paints_nothing() {
        let mut sketch = sketch(10, 10);
        sketch.start(Point::new(5.0, 5.0));
        assert!(sketch.is_drawing());
        assert_eq!(sketch.surface().count("white"), 0);
    }

    #[test]
    fn each_move_while_drawing_paints_a_segment() {
        let mut sketch = sketch(28, 28);
        sketch.start(Point::new(4.0, 4.0));
        for step in 1..=5 {
            let point = Point::new(4.0 + step as f64 * 3.0, 4.0 + step as f64 * 3.0);
            assert!(sketch.extend(point));
            let (x, y) = (point.x as usize, point.y as usize);
            assert_eq!(sketch.surface().pixel(x, y), "white");
        }
        assert_eq!(sketch.surface().segments, 5);
        sketch.end();
        assert!(!sketch.is_drawing());
    }

    #[test]
    fn moves_after_end_paint_nothing() {
        let mut sketch = sketch(28, 28);
        sketch.start(Point::new(2.0, 2.0));
        sketch.extend(Point::new(6.0, 2.0));
        sketch.end();
        let painted = sketch.surface().count("white");

        assert!(!sketch.extend(Point::new(20.0, 20.0)));
        assert_eq!(sketch.surface().pixel(20, 20), "black");
        assert_eq!(sketch.surface().count("white"), painted);
    }

    #[test]
    fn new_gesture_does_not_connect_to_previous_one() {
        let mut sketch = sketch(28, 28);
        sketch.start(Point::new(2.0, 2.0));
        sketch.extend(Point::new(4.0, 2.0));
        sketch.end();

        sketch.start(Point::new(20.0, 20.0));
        sketch.extend(Point::new(22.0, 20.0));
        // Midpoint between the two gestures stays untouched.
        assert_eq!(sketch.surface().pixel(12, 11), "black");
    }

    #[test]
    fn segments_chain_from_last_anchor() {
        let mut sketch = sketch(28, 28);
        sketch.start(Point::new(2.0, 14.0));
        sketch.extend(Point::new(14.0, 14.0));
        sketch.extend(Point::new(14.0, 26.0));
        assert_eq!(sketch.surface().pixel(8, 13), "white");
        assert_eq!(sketch.surface().pixel(13, 20), "white");
        assert_eq!(sketch.surface().pixel(3, 25), "black");
    }

    #[test]
    fn reset_ends_gesture_and_repaints() {
        let mut sketch = sketch(16, 16);
        sketch.start(Point::new(1.0, 1.0));
        sketch.extend(Point::new(14.0, 14.0));
        sketch.reset();
        assert!(!sketch.is_drawing());
        assert_eq!(sketch.surface().count("black"), 16 * 16);
    }

    #[test]
    fn default_style_is_white_round_fifteen() {
        let style = StrokeStyle::default();
        assert_eq!(style.color, "white");
        assert_eq!(style.width, 15.0);
        assert_eq!(style.cap, "round");
    }
}
