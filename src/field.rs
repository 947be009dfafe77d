// field.rs - Particle field lifecycle
//
// Inert (no surface) | Running -> Stopped
//
// The host issues the first tick; every running tick requests the next one
// from the scheduler. Stopped is terminal.

use glam::Vec2;
use log::{debug, trace};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::FieldConfig;
use crate::render::{RadialGradient, Surface};
use crate::schedule::FrameScheduler;
use crate::sim::{Particle, Pointer, Swarm};

/// Presentation side effects of pointer movement, kept out of the simulation.
pub trait PresentationHook {
    /// `client` is viewport-relative, `local` is surface-relative.
    fn pointer_moved(&mut self, client: Vec2, local: Vec2);
}

impl PresentationHook for () {
    fn pointer_moved(&mut self, _client: Vec2, _local: Vec2) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    /// Surface was missing at creation; never animates.
    Inert,
    Running,
    Stopped,
}

pub struct ParticleField<S, F, H = ()> {
    surface: Option<S>,
    scheduler: F,
    hook: H,
    state: FieldState,
    cfg: FieldConfig,
    size: Vec2,
    swarm: Swarm,
    pointer: Pointer,
    rng: SmallRng,
}

impl<S: Surface, F: FrameScheduler, H: PresentationHook> ParticleField<S, F, H> {
    /// Bind to `surface` and populate it. A missing surface yields an inert field.
    pub fn create(surface: Option<S>, cfg: FieldConfig, scheduler: F, hook: H) -> Self {
        let rng = SmallRng::seed_from_u64(cfg.seed);
        let state = if surface.is_some() { FieldState::Running } else { FieldState::Inert };

        let mut field = Self {
            surface,
            scheduler,
            hook,
            state,
            cfg,
            size: Vec2::ZERO,
            swarm: Swarm::default(),
            pointer: Pointer::new(),
            rng,
        };

        if field.state == FieldState::Inert {
            debug!("particle field inert: no surface");
            return field;
        }

        field.layout();
        debug!(
            "particle field created: {}x{}, {} particles",
            field.size.x, field.size.y, field.swarm.len()
        );
        field
    }

    /// Re-read the container size and regenerate every particle.
    pub fn resize(&mut self) {
        if self.state != FieldState::Running { return; }
        self.layout();
        debug!("particle field resized to {}x{}", self.size.x, self.size.y);
    }

    fn layout(&mut self) {
        let Some(surface) = self.surface.as_mut() else { return };

        let size = surface.layout_size().max(Vec2::ZERO);
        surface.set_size(size);
        self.size = size;
        self.swarm = Swarm::spawn(size, &self.cfg, &mut self.rng);
    }

    /// Draw one frame and advance the simulation. Returns false, drawing
    /// nothing, once the field is stopped or if it never started.
    pub fn tick(&mut self) -> bool {
        if self.state != FieldState::Running {
            trace!("tick skipped: {:?}", self.state);
            return false;
        }
        let Some(surface) = self.surface.as_mut() else { return false };

        let size = self.size;
        let palette = self.cfg.palette;
        surface.clear(size);
        surface.fill_gradient(&RadialGradient::covering(size, palette.inner, palette.outer), size);
        self.swarm.step(size, self.pointer.get(), &self.cfg, surface);

        self.scheduler.request_frame();
        true
    }

    /// Halt the frame chain. Idempotent; inert fields stay inert.
    pub fn stop(&mut self) {
        if self.state != FieldState::Running { return; }
        self.state = FieldState::Stopped;
        self.scheduler.cancel();
        debug!("particle field stopped");
    }

    /// Pointer moved to surface-relative (x, y)
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        let at = Vec2::new(x, y);
        self.track(at, at);
    }

    /// Pointer moved to a viewport-relative point
    pub fn on_client_pointer_move(&mut self, client: Vec2) {
        let Some(surface) = self.surface.as_ref() else { return };
        let local = client - surface.viewport_origin();
        self.track(client, local);
    }

    fn track(&mut self, client: Vec2, local: Vec2) {
        if self.state != FieldState::Running { return; }
        self.pointer.set(local);
        self.hook.pointer_moved(client, local);
    }

    pub fn state(&self) -> FieldState { self.state }
    pub fn is_running(&self) -> bool { self.state == FieldState::Running }
    pub fn size(&self) -> Vec2 { self.size }
    pub fn particles(&self) -> &[Particle] { self.swarm.particles() }
    pub fn pointer(&self) -> Option<Vec2> { self.pointer.get() }
    pub fn config(&self) -> &FieldConfig { &self.cfg }
    pub fn surface(&self) -> Option<&S> { self.surface.as_ref() }
    pub fn surface_mut(&mut self) -> Option<&mut S> { self.surface.as_mut() }
    pub fn scheduler(&self) -> &F { &self.scheduler }
    pub fn scheduler_mut(&mut self) -> &mut F { &mut self.scheduler }
    pub fn hook(&self) -> &H { &self.hook }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Repulsion, Rgb};
    use crate::render::{Canvas, CommandBuffer, OP_CLEAR, OP_GRADIENT};
    use crate::schedule::NextFrame;

    type TestField<H = ()> = ParticleField<CommandBuffer, NextFrame, H>;

    fn field(w: u32, h: u32, cfg: FieldConfig) -> TestField {
        ParticleField::create(Some(CommandBuffer::new(w, h)), cfg, NextFrame::new(), ())
    }

    fn draw_calls<H: PresentationHook>(f: &TestField<H>) -> u64 {
        f.surface().map_or(0, |s| s.draw_calls())
    }

    fn in_bounds(f: &TestField) -> bool {
        let size = f.size();
        f.particles().iter().all(|p| {
            (0.0..size.x).contains(&p.position().x) && (0.0..size.y).contains(&p.position().y)
        })
    }

    #[derive(Default)]
    struct Spy {
        moves: Vec<(Vec2, Vec2)>,
    }

    impl PresentationHook for Spy {
        fn pointer_moved(&mut self, client: Vec2, local: Vec2) {
            self.moves.push((client, local));
        }
    }

    /// Command buffer placed somewhere inside the viewport
    struct Placed(CommandBuffer, Vec2);

    impl Canvas for Placed {
        fn clear(&mut self, size: Vec2) { self.0.clear(size) }
        fn fill_gradient(&mut self, g: &RadialGradient, size: Vec2) { self.0.fill_gradient(g, size) }
        fn fill_circle(&mut self, c: Vec2, r: f32, color: Rgb, a: f32) { self.0.fill_circle(c, r, color, a) }
    }

    impl Surface for Placed {
        fn layout_size(&self) -> Vec2 { self.0.layout_size() }
        fn set_size(&mut self, size: Vec2) { self.0.set_size(size) }
        fn viewport_origin(&self) -> Vec2 { self.1 }
    }

    #[test]
    fn create_sizes_surface_and_spawns() {
        let f = field(320, 200, FieldConfig::default());
        assert_eq!(f.state(), FieldState::Running);
        assert_eq!(f.size(), Vec2::new(320.0, 200.0));
        assert_eq!(f.surface().map(|s| s.size()), Some(Vec2::new(320.0, 200.0)));
        assert_eq!(f.particles().len(), 60);
        assert!(in_bounds(&f));
        // host drives the first frame
        assert_eq!(f.scheduler().requested(), 0);
        assert_eq!(draw_calls(&f), 0);
    }

    #[test]
    fn missing_surface_is_permanently_inert() {
        let mut f: TestField = ParticleField::create(None, FieldConfig::default(), NextFrame::new(), ());
        assert_eq!(f.state(), FieldState::Inert);
        assert!(f.particles().is_empty());
        assert!(!f.tick());
        f.on_pointer_move(1.0, 1.0);
        assert_eq!(f.pointer(), None);
        f.resize();
        f.stop();
        assert_eq!(f.state(), FieldState::Inert);
        assert_eq!(f.scheduler().requested(), 0);
    }

    #[test]
    fn frame_draws_clear_gradient_then_circles() {
        let mut f = field(400, 100, FieldConfig::default().with_count(3));
        assert!(f.tick());

        let cmds = f.surface().map(|s| s.commands().to_vec()).unwrap_or_default();
        assert_eq!(&cmds[..3], &[OP_CLEAR, 400.0, 100.0]);
        assert_eq!(&cmds[3..7], &[OP_GRADIENT, 200.0, 50.0, 400.0]);
        assert_eq!(f.surface().map(|s| s.circles().count()), Some(3));
        assert_eq!(draw_calls(&f), 2 + 3);
        assert!(f.scheduler().is_pending());
    }

    #[test]
    fn wraps_off_the_right_edge() {
        let mut f = field(100, 100, FieldConfig::default().with_count(1));
        f.swarm = Swarm::from_particles(vec![
            Particle::new(Vec2::new(99.0, 50.0), Vec2::new(1.0, 0.0), 1.0, 0.5),
        ]);

        f.tick();
        assert_eq!(f.particles()[0].position(), Vec2::new(0.0, 50.0));
    }

    #[test]
    fn overshoot_is_dropped_on_wrap() {
        let mut f = field(100, 100, FieldConfig::default().with_count(1));
        f.swarm = Swarm::from_particles(vec![
            Particle::new(Vec2::new(99.9, 50.0), Vec2::new(0.15, 0.0), 1.0, 0.5),
        ]);

        f.tick();
        assert_eq!(f.particles()[0].position(), Vec2::new(0.0, 50.0));
    }

    #[test]
    fn positions_stay_in_bounds_over_many_ticks() {
        for repulsion in [Repulsion::Transient, Repulsion::Persistent] {
            let cfg = FieldConfig::default().with_count(80).with_repulsion(repulsion);
            let mut f = field(120, 90, cfg);
            for i in 0..600 {
                if i % 50 == 0 {
                    f.on_pointer_move((i % 120) as f32, (i % 90) as f32);
                }
                f.tick();
                assert!(in_bounds(&f), "out of bounds after tick {i} ({repulsion:?})");
            }
        }
    }

    #[test]
    fn shape_never_changes() {
        let mut f = field(200, 200, FieldConfig::default());
        let before: Vec<_> = f.particles().iter().map(|p| (p.radius(), p.opacity())).collect();
        f.on_pointer_move(100.0, 100.0);
        for _ in 0..100 { f.tick(); }
        let after: Vec<_> = f.particles().iter().map(|p| (p.radius(), p.opacity())).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn no_pointer_means_pure_velocity() {
        let mut f = field(500, 500, FieldConfig::default());
        f.swarm = Swarm::from_particles(vec![
            Particle::new(Vec2::new(10.0, 20.0), Vec2::new(0.125, -0.25), 1.0, 0.2),
            Particle::new(Vec2::new(250.0, 250.0), Vec2::new(-0.5, 0.5), 1.0, 0.2),
        ]);

        f.tick();
        assert_eq!(f.particles()[0].position(), Vec2::new(10.125, 19.75));
        assert_eq!(f.particles()[1].position(), Vec2::new(249.5, 250.5));
    }

    #[test]
    fn coincident_pointer_draws_full_push() {
        let mut f = field(500, 500, FieldConfig::default());
        f.swarm = Swarm::from_particles(vec![
            Particle::new(Vec2::new(250.0, 250.0), Vec2::ZERO, 1.0, 0.2),
        ]);
        f.on_pointer_move(250.0, 250.0);
        f.tick();

        let drawn = f.surface().and_then(|s| s.circles().next()).map(|(c, _, _)| c);
        let push = drawn.map(|c| (c - Vec2::new(250.0, 250.0)).length());
        assert_eq!(push, Some(f.config().max_repulsion));
    }

    #[test]
    fn stop_ends_drawing() {
        let mut f = field(100, 100, FieldConfig::default());
        assert!(f.tick());
        let calls = draw_calls(&f);

        f.stop();
        assert_eq!(f.state(), FieldState::Stopped);
        assert!(!f.scheduler().is_pending());

        // a callback already queued by the host still fires once
        assert!(!f.tick());
        f.stop();
        f.resize();
        assert_eq!(draw_calls(&f), calls);
        assert_eq!(f.scheduler().requested(), 1);
    }

    #[test]
    fn pointer_ignored_after_stop() {
        let mut f = ParticleField::create(
            Some(CommandBuffer::new(100, 100)), FieldConfig::default(), NextFrame::new(), Spy::default(),
        );
        f.on_pointer_move(1.0, 2.0);
        f.stop();

        f.on_pointer_move(3.0, 4.0);
        f.on_client_pointer_move(Vec2::new(5.0, 6.0));
        assert_eq!(f.pointer(), Some(Vec2::new(1.0, 2.0)));
        assert_eq!(f.hook().moves.len(), 1);
    }

    #[test]
    fn resize_respawns_within_new_bounds() {
        let mut f = field(1000, 800, FieldConfig::default());
        for _ in 0..5 { f.tick(); }

        if let Some(s) = f.surface_mut() { s.set_layout(40, 30); }
        f.resize();

        assert_eq!(f.size(), Vec2::new(40.0, 30.0));
        assert_eq!(f.particles().len(), 60);
        assert!(in_bounds(&f));
    }

    #[test]
    fn client_pointer_is_translated_and_reported() {
        let surface = Placed(CommandBuffer::new(200, 100), Vec2::new(30.0, 40.0));
        let mut f = ParticleField::create(Some(surface), FieldConfig::default(), NextFrame::new(), Spy::default());

        f.on_client_pointer_move(Vec2::new(130.0, 90.0));
        assert_eq!(f.pointer(), Some(Vec2::new(100.0, 50.0)));
        assert_eq!(f.hook().moves, vec![(Vec2::new(130.0, 90.0), Vec2::new(100.0, 50.0))]);

        f.on_pointer_move(5.0, 6.0);
        assert_eq!(f.pointer(), Some(Vec2::new(5.0, 6.0)));
        assert_eq!(f.hook().moves.len(), 2);
    }
}
