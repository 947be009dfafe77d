// frames.rs - requestAnimationFrame scheduler

use std::cell::RefCell;
use std::rc::Rc;

use log::{trace, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::schedule::FrameScheduler;

/// Shared slot holding the per-frame callback. Filled once the field exists.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub struct AnimationFrames {
    window: Option<Window>,
    callback: FrameCallback,
    pending: Option<i32>,
}

impl AnimationFrames {
    pub fn new(callback: FrameCallback) -> Self {
        Self {
            window: web_sys::window(),
            callback,
            pending: None,
        }
    }
}

impl FrameScheduler for AnimationFrames {
    fn request_frame(&mut self) {
        let Some(window) = &self.window else { return };
        let slot = self.callback.borrow();
        let Some(callback) = slot.as_ref() else {
            trace!("frame requested before callback installed");
            return;
        };

        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => self.pending = Some(id),
            Err(e) => warn!("requestAnimationFrame failed: {:?}", e),
        }
    }

    fn cancel(&mut self) {
        let (Some(window), Some(id)) = (&self.window, self.pending.take()) else { return };
        if let Err(e) = window.cancel_animation_frame(id) {
            trace!("cancelAnimationFrame({}) failed: {:?}", id, e);
        }
    }
}
