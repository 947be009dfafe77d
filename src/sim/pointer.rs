// pointer.rs - Pointer state and the repulsion kernel

use glam::Vec2;

/// Last known pointer position in surface space, absent until the first move.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    at: Option<Vec2>,
}

impl Pointer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, at: Vec2) {
        self.at = Some(at);
    }

    pub fn get(&self) -> Option<Vec2> {
        self.at
    }
}

/// Displacement pushing `at` away from `pointer`.
///
/// Zero at or beyond `radius`, rising linearly to `max` when the two points
/// coincide. A particle sitting exactly on the pointer is pushed along -x.
pub fn repulsion(at: Vec2, pointer: Vec2, radius: f32, max: f32) -> Vec2 {
    let toward = pointer - at;
    let distance = toward.length();
    if !(distance < radius) { return Vec2::ZERO; }

    let force = (radius - distance) / radius;
    let dir = toward.try_normalize().unwrap_or(Vec2::X);
    -dir * force * max
}
