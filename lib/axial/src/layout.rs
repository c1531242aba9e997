//! Hex ↔ pixel conversion for the flat-top orientation the board renderer
//! uses. Pure coordinate math; no drawing happens here.

use glam::Vec2;

use crate::axial::{self, Axial};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Affine transformation matrix pair for flat-top hex orientation:
/// (forward matrix Axial → Vec2, inverse matrix Vec2 → Axial).
const ORIENTATION: ([f64; 4], [f64; 4]) = (
    [3. / 2., 0., SQRT_3 / 2., SQRT_3],
    [2. / 3., 0., -1. / 3., SQRT_3 / 3.],
);

/// Trait for bidirectional coordinate conversion.
pub trait Convert<T, U> {
    fn convert(&self, it: T) -> U;
}

/// Pixel-space layout of a hex board, parameterized by hex size
/// (center-to-corner radius in pixels).
#[derive(Clone, Copy, Debug)]
pub struct Layout {
    size: f32,
}

impl Layout {
    pub fn new(size: f32) -> Self {
        Self { size }
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// All hexes on the segment from `a` to `b` inclusive, by sampling the
    /// pixel-space line and rounding back to hex centers.
    pub fn line(&self, a: &Axial, b: &Axial) -> Vec<Axial> {
        let dist = a.distance(b);
        if dist == 0 { return vec![*a]; }
        let from: Vec2 = self.convert(*a);
        let to: Vec2 = self.convert(*b);
        (0..=dist).map(|i| {
            self.convert(from.lerp(to, i as f32 / dist as f32))
        }).collect()
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self { size: 1.0 }
    }
}

impl Convert<Axial, Vec2> for Layout {
    fn convert(&self, other: Axial) -> Vec2 {
        let x = (ORIENTATION.0[0] * other.q as f64 + ORIENTATION.0[1] * other.r as f64) * self.size as f64;
        let y = (ORIENTATION.0[2] * other.q as f64 + ORIENTATION.0[3] * other.r as f64) * self.size as f64;
        Vec2 { x: x as f32, y: y as f32 }
    }
}

impl Convert<Vec2, Axial> for Layout {
    fn convert(&self, other: Vec2) -> Axial {
        let q = (ORIENTATION.1[0] * other.x as f64 + ORIENTATION.1[1] * other.y as f64) / self.size as f64;
        let r = (ORIENTATION.1[2] * other.x as f64 + ORIENTATION.1[3] * other.y as f64) / self.size as f64;
        axial::round(q, r)
    }
}
