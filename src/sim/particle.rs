// particle.rs - A single drifting point
//
// Radius and opacity are fixed at creation; only position moves.

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    position: Vec2,
    velocity: Vec2,
    radius: f32,
    opacity: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, opacity: f32) -> Self {
        Self { position, velocity, radius, opacity }
    }

    #[inline]
    pub fn position(&self) -> Vec2 { self.position }
    #[inline]
    pub fn velocity(&self) -> Vec2 { self.velocity }
    #[inline]
    pub fn radius(&self) -> f32 { self.radius }
    #[inline]
    pub fn opacity(&self) -> f32 { self.opacity }

    #[inline]
    pub(crate) fn displace(&mut self, by: Vec2) {
        self.position += by;
    }

    /// Move by one frame of velocity, then wrap into [0, w) x [0, h)
    #[inline]
    pub(crate) fn advance(&mut self, size: Vec2) {
        let p = self.position + self.velocity;
        self.position = Vec2::new(wrap(p.x, size.x), wrap(p.y, size.y));
    }
}

/// Hard teleport into [0, extent): past the far edge resets to 0, below 0
/// resets to the last position before the far edge. Overshoot is dropped.
/// Degenerate extents collapse to 0.
#[inline]
pub fn wrap(v: f32, extent: f32) -> f32 {
    if !(extent > 0.0) || v.is_nan() { return 0.0; }
    if v >= extent { return 0.0; }
    if v >= 0.0 { return v; }

    let far = extent - extent * f32::EPSILON;
    if far < extent { far } else { 0.0 }
}
