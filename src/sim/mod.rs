// sim/ - Particle simulation
//
// Pure state and math. Drawing goes through the `Canvas` seam so the same
// step runs against the browser canvas and the headless command buffer.

mod particle;
mod pointer;

pub use particle::{wrap, Particle};
pub use pointer::{repulsion, Pointer};

use glam::Vec2;
use rand::Rng;

use crate::config::{FieldConfig, Repulsion};
use crate::lerp;
use crate::render::Canvas;

/// The particle set. Its size is fixed once spawned.
#[derive(Debug, Clone, Default)]
pub struct Swarm {
    particles: Vec<Particle>,
}

impl Swarm {
    /// Scatter `cfg.count` particles uniformly over `size`
    pub fn spawn<R: Rng>(size: Vec2, cfg: &FieldConfig, rng: &mut R) -> Self {
        let (r0, r1) = cfg.radius_range;
        let (o0, o1) = cfg.opacity_range;

        let particles = (0..cfg.count)
            .map(|_| {
                let position = Vec2::new(
                    rng.random::<f32>() * size.x,
                    rng.random::<f32>() * size.y,
                );
                let radius = lerp(r0, r1, rng.random());
                let velocity = Vec2::new(
                    (rng.random::<f32>() - 0.5) * 2.0 * cfg.speed,
                    (rng.random::<f32>() - 0.5) * 2.0 * cfg.speed,
                );
                let opacity = lerp(o0, o1, rng.random());
                let position = Vec2::new(wrap(position.x, size.x), wrap(position.y, size.y));
                Particle::new(position, velocity, radius, opacity)
            })
            .collect();

        Self { particles }
    }

    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    pub fn particles(&self) -> &[Particle] { &self.particles }
    pub fn len(&self) -> usize { self.particles.len() }
    pub fn is_empty(&self) -> bool { self.particles.is_empty() }

    /// Repel, draw, advance and wrap every particle, in insertion order
    pub fn step<C: Canvas + ?Sized>(
        &mut self,
        size: Vec2,
        pointer: Option<Vec2>,
        cfg: &FieldConfig,
        canvas: &mut C,
    ) {
        let accent = cfg.palette.accent;

        for p in &mut self.particles {
            let push = match pointer {
                Some(at) => repulsion(p.position(), at, cfg.interaction_radius, cfg.max_repulsion),
                None => Vec2::ZERO,
            };

            let drawn = match cfg.repulsion {
                Repulsion::Transient => p.position() + push,
                Repulsion::Persistent => {
                    p.displace(push);
                    p.position()
                }
            };

            canvas.fill_circle(drawn, p.radius(), accent, p.opacity());
            p.advance(size);
        }
    }
}
