// web/ - Self-driving browser background
//
// Binds a <canvas> by id, listens for resize and pointer movement, and runs
// its own requestAnimationFrame loop until stopped.

mod canvas;
mod frames;
mod spotlight;

pub use canvas::WebCanvas;
pub use frames::{AnimationFrames, FrameCallback};
pub use spotlight::{Listener, Spotlight};

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use log::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, MouseEvent};

use crate::config::FieldConfig;
use crate::field::ParticleField;

type WebField = ParticleField<WebCanvas, AnimationFrames, Spotlight>;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
}

#[wasm_bindgen]
pub struct Background {
    field: Rc<RefCell<WebField>>,
    frame: FrameCallback,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl Background {
    /// Animate the canvas with id `canvas_id`. A missing canvas gives an
    /// inert background rather than an error.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, count: Option<u32>) -> Background {
        let cfg = match count {
            Some(n) => FieldConfig::page().with_count(n as usize),
            None => FieldConfig::page(),
        };
        Self::mount(canvas_id, cfg)
    }

    /// The sparser background behind the project modal
    pub fn modal(canvas_id: &str) -> Background {
        Self::mount(canvas_id, FieldConfig::modal())
    }

    /// Halt the animation and detach listeners. Cannot be restarted.
    pub fn stop(&mut self) {
        self.field.borrow_mut().stop();
        self.listeners.clear();
    }

    pub fn is_running(&self) -> bool {
        self.field.borrow().is_running()
    }
}

impl Background {
    fn mount(canvas_id: &str, cfg: FieldConfig) -> Background {
        let cfg = cfg.with_seed(crate::random_seed());

        let surface = match WebCanvas::bind(canvas_id) {
            Ok(surface) => Some(surface),
            Err(err) => {
                debug!("background `{}` inert: {}", canvas_id, err);
                None
            }
        };
        let pointer_target = surface.as_ref().map(WebCanvas::event_target);

        let frame: FrameCallback = Rc::new(RefCell::new(None));
        let scheduler = AnimationFrames::new(frame.clone());
        let field = ParticleField::create(surface, cfg, scheduler, Spotlight::on_body());

        let mut bg = Background {
            field: Rc::new(RefCell::new(field)),
            frame,
            listeners: Vec::new(),
        };
        let Some(pointer_target) = pointer_target else { return bg };

        bg.install_frame_callback();
        bg.listen(web_sys::window().map(Into::into), "resize", |field, _| field.resize());
        bg.listen(Some(pointer_target), "mousemove", |field, event| {
            if let Some(e) = event.dyn_ref::<MouseEvent>() {
                field.on_client_pointer_move(Vec2::new(e.client_x() as f32, e.client_y() as f32));
            }
        });

        bg.field.borrow_mut().tick();
        bg
    }

    fn install_frame_callback(&mut self) {
        let field = Rc::downgrade(&self.field);
        let callback = Closure::wrap(Box::new(move |_timestamp: f64| {
            if let Some(field) = field.upgrade() {
                field.borrow_mut().tick();
            }
        }) as Box<dyn FnMut(f64)>);
        *self.frame.borrow_mut() = Some(callback);
    }

    fn listen(
        &mut self,
        target: Option<EventTarget>,
        kind: &'static str,
        handler: fn(&mut WebField, &Event),
    ) {
        let Some(target) = target else { return };

        let field = Rc::downgrade(&self.field);
        let callback = Closure::wrap(Box::new(move |event: Event| {
            if let Some(field) = field.upgrade() {
                handler(&mut field.borrow_mut(), &event);
            }
        }) as Box<dyn FnMut(Event)>);

        match Listener::attach(target, kind, callback) {
            Ok(listener) => self.listeners.push(listener),
            Err(err) => warn!("{}", err),
        }
    }
}

impl Drop for Background {
    fn drop(&mut self) {
        self.stop();
    }
}
