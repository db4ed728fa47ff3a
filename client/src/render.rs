use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use digitboard_shared::{Point, StrokeStyle, Surface};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn fill_rect(&mut self, color: &str, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x, y, width, height);
    }

    fn stroke_segment(&mut self, from: Point, to: Point, style: &StrokeStyle) {
        let ctx = &self.ctx;
        ctx.set_stroke_style_str(&style.color);
        ctx.set_line_width(style.width);
        ctx.set_line_cap(&style.cap);
        ctx.begin_path();
        ctx.move_to(from.x, from.y);
        ctx.line_to(to.x, to.y);
        ctx.stroke();
    }
}
