//! Floating background particles.
//!
//! [`ParticleField`] is plain data and math so it can be stepped without a
//! browser. [`FrameLoop`] drives a callback from `requestAnimationFrame`
//! until it is cancelled or dropped.

use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;

use log::warn;
use rand::Rng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::CanvasRenderingContext2d;

use crate::config;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub dx: f64,
    pub dy: f64,
}

impl Particle {
    pub fn random<R: Rng>(rng: &mut R, width: f64, height: f64) -> Self {
        let speed = config::PARTICLE_MAX_SPEED;
        Self {
            x: rng.gen_range(0.0..width),
            y: rng.gen_range(0.0..height),
            radius: rng.gen_range(config::PARTICLE_MIN_RADIUS..config::PARTICLE_MAX_RADIUS),
            dx: rng.gen_range(-speed..speed),
            dy: rng.gen_range(-speed..speed),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl ParticleField {
    pub fn initialize<R: Rng>(rng: &mut R, width: f64, height: f64, count: usize) -> Self {
        let particles = (0..count)
            .map(|_| Particle::random(rng, width, height))
            .collect();
        Self { particles, width, height }
    }

    /// Moves every particle by one frame's velocity.
    ///
    /// Each axis is checked once after the move. A particle that left the
    /// field has that velocity component turned back inward and is pinned
    /// to the wall it crossed; no attempt is made to find the exact point
    /// of impact within the frame.
    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for p in &mut self.particles {
            p.x += p.dx;
            p.y += p.dy;
            bounce(&mut p.x, &mut p.dx, width);
            bounce(&mut p.y, &mut p.dy, height);
        }
    }

    /// New bounds apply from the next `step`. Particles are left where they
    /// are; any now outside get pulled back by their next bounce.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn render(&self, ctx: &CanvasRenderingContext2d) {
        ctx.clear_rect(0.0, 0.0, self.width, self.height);
        ctx.set_fill_style_str(config::PARTICLE_FILL);
        for p in &self.particles {
            ctx.begin_path();
            if ctx.arc(p.x, p.y, p.radius, 0.0, TAU).is_ok() {
                ctx.fill();
            }
        }
    }
}

fn bounce(pos: &mut f64, vel: &mut f64, limit: f64) {
    if *pos < 0.0 {
        *pos = 0.0;
        *vel = vel.abs();
    } else if *pos >= limit {
        // largest value still strictly inside [0, limit)
        *pos = (limit - limit.max(1.0) * 2.0 * f64::EPSILON).max(0.0);
        *vel = -vel.abs();
    }
}

struct FrameState {
    frame_id: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FrameState {
    fn schedule(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(callback) = self.callback.borrow().as_ref() {
            match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                Ok(id) => self.frame_id.set(Some(id)),
                Err(_) => warn!("requestAnimationFrame refused, particle loop stopped"),
            }
        }
    }
}

/// Runs `on_frame` once per display refresh. Dropping the loop cancels the
/// pending frame and releases the closure.
pub struct FrameLoop {
    state: Rc<FrameState>,
}

impl FrameLoop {
    pub fn start<F>(mut on_frame: F) -> Self
    where
        F: FnMut() + 'static,
    {
        let state = Rc::new(FrameState {
            frame_id: Cell::new(None),
            callback: RefCell::new(None),
        });

        // The closure only holds a weak handle so the loop never keeps itself alive.
        let weak = Rc::downgrade(&state);
        let callback = Closure::wrap(Box::new(move |_timestamp: f64| {
            on_frame();
            if let Some(state) = weak.upgrade() {
                state.schedule();
            }
        }) as Box<dyn FnMut(f64)>);

        *state.callback.borrow_mut() = Some(callback);
        state.schedule();
        Self { state }
    }

    pub fn cancel(&self) {
        if let Some(id) = self.state.frame_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        self.state.callback.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    impl Particle {
        fn speed(&self) -> f64 {
            self.dx.hypot(self.dy)
        }
    }

    impl ParticleField {
        fn particles(&self) -> &[Particle] {
            &self.particles
        }

        fn width(&self) -> f64 {
            self.width
        }

        fn height(&self) -> f64 {
            self.height
        }
    }

    fn in_bounds(field: &ParticleField) -> bool {
        field.particles().iter().all(|p| {
            p.x >= 0.0 && p.x < field.width() && p.y >= 0.0 && p.y < field.height()
        })
    }

    #[test]
    fn seventy_particles_stay_inside_800x600_for_1000_frames() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut field = ParticleField::initialize(&mut rng, 800.0, 600.0, 70);
        assert_eq!(field.particles().len(), 70);

        for frame in 0..1000 {
            field.step();
            assert!(in_bounds(&field), "particle escaped on frame {}", frame);
        }
        assert!(field
            .particles()
            .iter()
            .all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn initial_particles_respect_configured_ranges() {
        let mut rng = SmallRng::seed_from_u64(42);
        let field = ParticleField::initialize(&mut rng, 320.0, 240.0, 500);
        assert!(in_bounds(&field));
        for p in field.particles() {
            assert!(p.radius >= config::PARTICLE_MIN_RADIUS && p.radius < config::PARTICLE_MAX_RADIUS);
            assert!(p.dx.abs() <= config::PARTICLE_MAX_SPEED);
            assert!(p.dy.abs() <= config::PARTICLE_MAX_SPEED);
        }
    }

    #[test]
    fn speed_survives_reflections() {
        let mut rng = SmallRng::seed_from_u64(3);
        // Small field so every particle hits walls many times.
        let mut field = ParticleField::initialize(&mut rng, 5.0, 5.0, 40);
        let speeds: Vec<f64> = field.particles().iter().map(Particle::speed).collect();
        for _ in 0..500 {
            field.step();
        }
        for (p, before) in field.particles().iter().zip(speeds) {
            assert_eq!(p.speed(), before);
        }
    }

    #[test]
    fn crossing_a_wall_flips_only_that_component() {
        let mut field = ParticleField {
            particles: vec![Particle { x: 99.9, y: 50.0, radius: 1.0, dx: 0.2, dy: 0.1 }],
            width: 100.0,
            height: 100.0,
        };
        field.step();
        let p = &field.particles()[0];
        assert_eq!(p.dx, -0.2);
        assert_eq!(p.dy, 0.1);
        assert!(p.x < 100.0);

        let mut field = ParticleField {
            particles: vec![Particle { x: 0.05, y: 50.0, radius: 1.0, dx: -0.2, dy: -0.1 }],
            width: 100.0,
            height: 100.0,
        };
        field.step();
        let p = &field.particles()[0];
        assert_eq!(p.x, 0.0);
        assert_eq!(p.dx, 0.2);
        assert_eq!(p.dy, -0.1);
    }

    #[test]
    fn resize_keeps_positions_until_next_step() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut field = ParticleField::initialize(&mut rng, 800.0, 600.0, 70);
        let before = field.particles().to_vec();

        field.resize(200.0, 150.0);
        assert_eq!(field.particles(), &before[..]);
        assert_eq!((field.width(), field.height()), (200.0, 150.0));

        field.step();
        assert!(in_bounds(&field));
    }
}
