//! Pencil stroke particles and their per-tick motion.

use std::f32::consts::{PI, TAU};

use pencil_dust_core::{Point, Viewport};
use rand::Rng;

/// Upper bound on live particles; older ones are dropped first.
pub const MAX_PARTICLES: usize = 100;
/// Particles scattered across the viewport when the animator starts.
pub const AMBIENT_SEED_COUNT: usize = 30;
/// Particles appended for every pointer-move event.
pub const SPAWN_PER_POINTER_MOVE: usize = 2;
/// Life lost per tick.
pub const LIFE_DECAY: f32 = 0.003;
/// Stroke rotation per tick, in radians.
pub const SPIN_RATE: f32 = 0.01;
/// Distance above the top edge (and below the bottom edge on respawn).
pub const RECYCLE_MARGIN: f32 = 50.0;
/// Half-width of the square a pointer spawn lands in.
pub const POINTER_JITTER: f32 = 25.0;
/// Radial speed of pointer-spawned particles.
pub const POINTER_SPEED: f32 = 0.5;
/// Upward bias added to pointer-spawned particles.
pub const POINTER_LIFT: f32 = 0.3;
/// Half-range of ambient velocity components.
pub const AMBIENT_DRIFT: f32 = 0.15;
/// Upward bias added to ambient particles.
pub const AMBIENT_LIFT: f32 = 0.1;

/// A single short graphite stroke drifting across the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Centre of the stroke, in viewport pixels.
    pub position: Point,
    /// Displacement per tick.
    pub velocity: Point,
    /// Stroke length in pixels. Fixed at creation.
    pub length: f32,
    /// Current orientation in radians.
    pub angle: f32,
    /// Base intensity in `[0, 1)`. Fixed at creation.
    pub opacity: f32,
    /// Remaining life in `[0, 1]`; drives fading and recycling.
    pub life: f32,
}

impl Particle {
    /// A slow-drifting background particle placed anywhere in `viewport`.
    pub fn ambient(rng: &mut impl Rng, viewport: Viewport) -> Self {
        Self {
            position: Point::new(
                random_below(rng, viewport.width as f32),
                random_below(rng, viewport.height as f32),
            ),
            velocity: Point::new(
                rng.random_range(-AMBIENT_DRIFT..AMBIENT_DRIFT),
                rng.random_range(-AMBIENT_DRIFT..AMBIENT_DRIFT) - AMBIENT_LIFT,
            ),
            length: rng.random_range(10.0..30.0),
            angle: rng.random_range(0.0..PI),
            opacity: rng.random_range(0.05..0.20),
            life: 1.0,
        }
    }

    /// A particle shed near the pointer, flung outward and slightly upward.
    pub fn near_pointer(rng: &mut impl Rng, at: Point) -> Self {
        let heading: f32 = rng.random_range(0.0..TAU);
        Self {
            position: Point::new(
                at.x + rng.random_range(-POINTER_JITTER..POINTER_JITTER),
                at.y + rng.random_range(-POINTER_JITTER..POINTER_JITTER),
            ),
            velocity: Point::new(
                heading.cos() * POINTER_SPEED,
                heading.sin() * POINTER_SPEED - POINTER_LIFT,
            ),
            length: rng.random_range(5.0..20.0),
            angle: rng.random_range(0.0..PI),
            opacity: rng.random_range(0.1..0.4),
            life: 1.0,
        }
    }

    /// Move, fade and spin by one tick.
    pub fn advance(&mut self) {
        self.position.x += self.velocity.x;
        self.position.y += self.velocity.y;
        self.life -= LIFE_DECAY;
        self.angle += SPIN_RATE;
    }

    /// Faded out, or drifted too far above the top edge.
    pub fn is_spent(&self) -> bool {
        self.life <= 0.0 || self.position.y < -RECYCLE_MARGIN
    }

    /// Respawn just below the bottom edge at a random column with full life.
    ///
    /// Velocity, length, angle and opacity carry over unchanged.
    pub fn recycle(&mut self, rng: &mut impl Rng, surface: Viewport) {
        self.position.x = random_below(rng, surface.width as f32);
        self.position.y = surface.height as f32 + RECYCLE_MARGIN;
        self.life = 1.0;
    }

    /// Effective stroke alpha for the current tick.
    pub fn alpha(&self) -> f32 {
        self.opacity * self.life
    }

    /// End points of the stroke, centred on `position` and rotated by `angle`.
    pub fn endpoints(&self) -> (Point, Point) {
        let half = self.length / 2.0;
        let (sin, cos) = self.angle.sin_cos();
        let (dx, dy) = (cos * half, sin * half);
        (
            Point::new(self.position.x - dx, self.position.y - dy),
            Point::new(self.position.x + dx, self.position.y + dy),
        )
    }
}

/// Uniform in `[0, max)`, or exactly 0 for a degenerate range.
fn random_below(rng: &mut impl Rng, max: f32) -> f32 {
    if max > 0.0 {
        rng.random_range(0.0..max)
    } else {
        0.0
    }
}
