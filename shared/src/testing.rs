//! In-memory `Surface` used by the unit tests.

use crate::geometry::Point;
use crate::sketch::{StrokeStyle, Surface};

pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<String>,
    pub segments: usize,
}

impl Raster {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec!["transparent".to_string(); width * height],
            segments: 0,
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> &str {
        &self.pixels[y * self.width + x]
    }

    pub fn count(&self, color: &str) -> usize {
        self.pixels.iter().filter(|pixel| *pixel == color).count()
    }
}

fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0)
    };
    let (cx, cy) = (a.x + t * dx, a.y + t * dy);
    ((p.x - cx).powi(2) + (p.y - cy).powi(2)).sqrt()
}

impl Surface for Raster {
    fn size(&self) -> (f64, f64) {
        (self.width as f64, self.height as f64)
    }

    fn fill_rect(&mut self, color: &str, x: f64, y: f64, width: f64, height: f64) {
        for py in 0..self.height {
            for px in 0..self.width {
                let (fx, fy) = (px as f64, py as f64);
                if fx >= x && fx < x + width && fy >= y && fy < y + height {
                    self.pixels[py * self.width + px] = color.to_string();
                }
            }
        }
    }

    fn stroke_segment(&mut self, from: Point, to: Point, style: &StrokeStyle) {
        self.segments += 1;
        for py in 0..self.height {
            for px in 0..self.width {
                let center = Point::new(px as f64 + 0.5, py as f64 + 0.5);
                if distance_to_segment(center, from, to) <= style.width / 2.0 {
                    self.pixels[py * self.width + px] = style.color.clone();
                }
            }
        }
    }
}
