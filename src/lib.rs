use wasm_bindgen::prelude::*;

// ============================================================================
// BACKDROP - Drifting particle background with pointer repulsion
// ============================================================================

pub mod config;
pub mod error;
pub mod field;
pub mod render;
pub mod schedule;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{FieldConfig, Palette, Repulsion, Rgb, DEFAULT_COUNT, MODAL_COUNT};
pub use error::BindError;
pub use field::{FieldState, ParticleField, PresentationHook};
pub use render::{Canvas, CommandBuffer, RadialGradient, Surface};
pub use schedule::{FrameScheduler, NextFrame};
pub use sim::{Particle, Pointer, Swarm};

#[cfg(target_arch = "wasm32")]
pub use web::Background;

/// Host-driven field: JS owns the frame loop and replays the command buffer
/// (see `render` for the encoding).
#[wasm_bindgen]
pub struct BackdropWorld {
    field: ParticleField<CommandBuffer, NextFrame>,
}

#[wasm_bindgen]
impl BackdropWorld {
    #[wasm_bindgen(constructor)]
    pub fn new(w: u32, h: u32, count: u32) -> Self {
        let cfg = FieldConfig::default()
            .with_count(count as usize)
            .with_seed(random_seed());
        Self {
            field: ParticleField::create(Some(CommandBuffer::new(w, h)), cfg, NextFrame::new(), ()),
        }
    }

    /// Encode one frame. Returns true while the host should schedule another.
    pub fn tick(&mut self) -> bool {
        self.field.tick();
        self.field.scheduler_mut().take()
    }

    pub fn resize(&mut self, w: u32, h: u32) {
        if let Some(buf) = self.field.surface_mut() {
            buf.set_layout(w, h);
        }
        self.field.resize();
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.field.on_pointer_move(x, y);
    }

    pub fn stop(&mut self) { self.field.stop(); }
    pub fn is_running(&self) -> bool { self.field.is_running() }

    // Accessors for WASM
    pub fn output_ptr(&self) -> *const f32 {
        self.field.surface().map_or(std::ptr::null(), CommandBuffer::ptr)
    }
    pub fn output_len(&self) -> usize { self.field.surface().map_or(0, CommandBuffer::len) }
    pub fn width(&self) -> u32 { self.field.size().x as u32 }
    pub fn height(&self) -> u32 { self.field.size().y as u32 }
    pub fn draw_calls(&self) -> u64 { self.field.surface().map_or(0, CommandBuffer::draw_calls) }
}

/// Per-instance seed; fixed off-browser so native runs are reproducible
pub(crate) fn random_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    { (js_sys::Math::random() * 9007199254740992.0) as u64 }
    #[cfg(not(target_arch = "wasm32"))]
    { FieldConfig::default().seed }
}

#[inline]
pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 { a + (b - a) * t }
