//! Axis-aligned 2D rectangle

use serde::{Deserialize, Serialize};

use crate::Vector2;

/// Rectangle from `pos` spanning `size`
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vector2<f64>,
    pub size: Vector2<f64>,
}

impl Rect {
    pub const fn new(pos: Vector2<f64>, size: Vector2<f64>) -> Self {
        Self { pos, size }
    }

    /// Whether `point` lies inside, edges included.
    /// Negative sizes extend toward negative coordinates.
    pub fn contains(&self, point: Vector2<f64>) -> bool {
        let end = self.pos + self.size;
        let (x0, x1) = ordered(self.pos.x, end.x);
        let (y0, y1) = ordered(self.pos.y, end.y);
        (x0..=x1).contains(&point.x) && (y0..=y1).contains(&point.y)
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}
