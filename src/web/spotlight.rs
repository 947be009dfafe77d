// spotlight.rs - Page-level side effects of the background
//
// The page's CSS reads `--x` / `--y` from <body> for its spotlight glow.

use glam::Vec2;
use log::trace;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CssStyleDeclaration, Event, EventTarget};

use crate::error::BindError;
use crate::field::PresentationHook;

pub struct Spotlight {
    style: Option<CssStyleDeclaration>,
}

impl Spotlight {
    pub fn on_body() -> Self {
        let style = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .map(|body| body.style());
        Self { style }
    }
}

impl PresentationHook for Spotlight {
    fn pointer_moved(&mut self, client: Vec2, _local: Vec2) {
        let Some(style) = &self.style else { return };
        for (name, v) in [("--x", client.x), ("--y", client.y)] {
            if let Err(e) = style.set_property(name, &format!("{}px", v)) {
                trace!("{} not set: {:?}", name, e);
            }
        }
    }
}

/// An attached DOM listener; detaches itself on drop.
pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn attach(
        target: EventTarget,
        kind: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<Self, BindError> {
        target
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            .map_err(|e| BindError::Listener(kind, format!("{:?}", e)))?;
        Ok(Self { target, kind, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let removed = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
        if let Err(e) = removed {
            trace!("`{}` listener not removed: {:?}", self.kind, e);
        }
    }
}
