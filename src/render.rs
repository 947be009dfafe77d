// render.rs - Drawing seam and the headless command buffer
//
// Command encoding (for host-side canvas replay), one f32 run per command:
//   0 clear     : 0, w, h
//   1 gradient  : 1, cx, cy, r, inner r/g/b, outer r/g/b
//   2 circle    : 2, x, y, radius, r/g/b, alpha
//
// A clear starts a new frame and drops the previous frame's commands.

use glam::Vec2;

use crate::config::Rgb;

pub const OP_CLEAR: f32 = 0.0;
pub const OP_GRADIENT: f32 = 1.0;
pub const OP_CIRCLE: f32 = 2.0;

/// Radial background fill from `inner` at the center to `outer` at `radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub radius: f32,
    pub inner: Rgb,
    pub outer: Rgb,
}

impl RadialGradient {
    /// Centered on the surface, reaching the longer side.
    pub fn covering(size: Vec2, inner: Rgb, outer: Rgb) -> Self {
        Self {
            center: size * 0.5,
            radius: size.x.max(size.y),
            inner,
            outer,
        }
    }
}

/// Immediate-mode 2D drawing.
pub trait Canvas {
    fn clear(&mut self, size: Vec2);
    fn fill_gradient(&mut self, gradient: &RadialGradient, size: Vec2);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32);
}

/// A canvas that lives inside a layout box.
pub trait Surface: Canvas {
    /// Size of the containing layout box (or viewport).
    fn layout_size(&self) -> Vec2;
    /// Resize the backing store.
    fn set_size(&mut self, size: Vec2);
    /// Top-left corner of the surface in viewport coordinates.
    fn viewport_origin(&self) -> Vec2 { Vec2::ZERO }
}

pub struct CommandBuffer {
    out: Vec<f32>,
    layout: Vec2,
    size: Vec2,
    calls: u64,
}

impl CommandBuffer {
    pub fn new(w: u32, h: u32) -> Self {
        Self {
            out: Vec::new(),
            layout: Vec2::new(w as f32, h as f32),
            size: Vec2::ZERO,
            calls: 0,
        }
    }

    /// Host-side layout change; picked up on the next resize.
    pub fn set_layout(&mut self, w: u32, h: u32) {
        self.layout = Vec2::new(w as f32, h as f32);
    }

    pub fn commands(&self) -> &[f32] { &self.out }
    pub fn ptr(&self) -> *const f32 { self.out.as_ptr() }
    pub fn len(&self) -> usize { self.out.len() }
    pub fn is_empty(&self) -> bool { self.out.is_empty() }
    pub fn size(&self) -> Vec2 { self.size }

    /// Every command received, including flushed frames
    pub fn draw_calls(&self) -> u64 { self.calls }

    /// Iterate circles of the current frame as (center, radius, alpha)
    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, f32)> + '_ {
        Commands { buf: &self.out }.filter_map(|cmd| match cmd {
            [op, x, y, r, _, _, _, a] if *op == OP_CIRCLE => Some((Vec2::new(*x, *y), *r, *a)),
            _ => None,
        })
    }

    fn push(&mut self, cmd: &[f32]) {
        self.out.extend_from_slice(cmd);
        self.calls += 1;
    }
}

impl Canvas for CommandBuffer {
    fn clear(&mut self, size: Vec2) {
        self.out.clear();
        self.push(&[OP_CLEAR, size.x, size.y]);
    }

    fn fill_gradient(&mut self, g: &RadialGradient, _size: Vec2) {
        self.push(&[
            OP_GRADIENT,
            g.center.x, g.center.y, g.radius,
            g.inner.r as f32, g.inner.g as f32, g.inner.b as f32,
            g.outer.r as f32, g.outer.g as f32, g.outer.b as f32,
        ]);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32) {
        self.push(&[
            OP_CIRCLE,
            center.x, center.y, radius,
            color.r as f32, color.g as f32, color.b as f32,
            alpha,
        ]);
    }
}

impl Surface for CommandBuffer {
    fn layout_size(&self) -> Vec2 { self.layout }
    fn set_size(&mut self, size: Vec2) { self.size = size; }
}

/// Splits an encoded buffer back into per-command slices.
struct Commands<'a> {
    buf: &'a [f32],
}

impl<'a> Iterator for Commands<'a> {
    type Item = &'a [f32];

    fn next(&mut self) -> Option<Self::Item> {
        let op = *self.buf.first()?;
        let n = if op == OP_CLEAR { 3 } else if op == OP_GRADIENT { 10 } else { 8 };
        let n = n.min(self.buf.len());
        let (cmd, rest) = self.buf.split_at(n);
        self.buf = rest;
        Some(cmd)
    }
}
