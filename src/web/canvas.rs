// canvas.rs - <canvas> element as a drawing surface
//
// Layout comes from the parent element's box, or the viewport when the
// canvas is detached.

use std::f64::consts::TAU;

use glam::Vec2;
use log::trace;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, EventTarget, HtmlCanvasElement, HtmlElement, Window};

use crate::config::Rgb;
use crate::error::BindError;
use crate::render::{Canvas, RadialGradient, Surface};

pub struct WebCanvas {
    window: Window,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl WebCanvas {
    pub fn bind(id: &str) -> Result<Self, BindError> {
        let window = web_sys::window().ok_or(BindError::NoWindow)?;
        let document = window.document().ok_or(BindError::NoDocument)?;

        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| BindError::MissingSurface(id.to_owned()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| BindError::NotACanvas(id.to_owned()))?;

        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or_else(|| BindError::NoContext(id.to_owned()))?;

        Ok(Self { window, canvas, ctx })
    }

    /// Where pointer events are heard: the container, else the window
    pub fn event_target(&self) -> EventTarget {
        match self.canvas.parent_element() {
            Some(parent) => parent.into(),
            None => self.window.clone().into(),
        }
    }
}

impl Canvas for WebCanvas {
    fn clear(&mut self, size: Vec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn fill_gradient(&mut self, g: &RadialGradient, size: Vec2) {
        let (cx, cy) = (g.center.x as f64, g.center.y as f64);
        let Ok(gradient) = self.ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, g.radius as f64) else {
            return;
        };
        for (offset, color) in [(0.0, g.inner), (1.0, g.outer)] {
            if let Err(e) = gradient.add_color_stop(offset, &color.hex()) {
                trace!("gradient stop {} rejected: {:?}", offset, e);
            }
        }

        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32) {
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU) {
            trace!("arc at {} r={} rejected: {:?}", center, radius, e);
        }
        self.ctx.set_fill_style_str(&color.rgba(alpha));
        self.ctx.fill();
    }
}

impl Surface for WebCanvas {
    fn layout_size(&self) -> Vec2 {
        let parent = self
            .canvas
            .parent_element()
            .and_then(|p| p.dyn_into::<HtmlElement>().ok());

        match parent {
            Some(p) => Vec2::new(p.offset_width() as f32, p.offset_height() as f32),
            None => {
                let w = self.window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                let h = self.window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                Vec2::new(w as f32, h as f32)
            }
        }
    }

    fn set_size(&mut self, size: Vec2) {
        self.canvas.set_width(size.x as u32);
        self.canvas.set_height(size.y as u32);
    }

    fn viewport_origin(&self) -> Vec2 {
        let rect = self.canvas.get_bounding_client_rect();
        Vec2::new(rect.left() as f32, rect.top() as f32)
    }
}
