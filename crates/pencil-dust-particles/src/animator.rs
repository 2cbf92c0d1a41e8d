//! The ambient particle animator.

use std::collections::VecDeque;

use log::{debug, info, warn};
use pencil_dust_core::{Point, Rgba, Theme, Viewport};
use rand::{SeedableRng, rngs::StdRng};

use crate::environment::{Environment, FrameHandle, ListenerId, Signal};
use crate::particle::{AMBIENT_SEED_COUNT, MAX_PARTICLES, Particle, SPAWN_PER_POINTER_MOVE};
use crate::surface::{STROKE_WIDTH, Stroke, Surface};

/// Resources held between [`Animator::start`] and [`Animator::stop`].
#[derive(Debug)]
struct Session<S> {
    /// Owned drawing surface.
    surface: S,
    /// Resize subscription.
    resize: ListenerId,
    /// Pointer-move subscription.
    pointer: ListenerId,
    /// The frame callback currently queued, if any.
    frame: Option<FrameHandle>,
}

/// Cursor-reactive pencil dust.
///
/// Drifting graphite strokes are seeded across the viewport on start, shed
/// around the pointer as it moves, and repainted every frame until stopped.
#[derive(Debug)]
pub struct Animator<S> {
    /// Live particles, oldest first.
    particles: VecDeque<Particle>,
    /// Source for every random draw.
    rng: StdRng,
    /// Last pointer position seen.
    pointer: Option<Point>,
    /// Mounted resources; `None` while stopped or inert.
    session: Option<Session<S>>,
}

impl<S: Surface> Default for Animator<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Surface> Animator<S> {
    /// Create an animator seeded from OS entropy.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Create an animator with a reproducible random sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            particles: VecDeque::with_capacity(MAX_PARTICLES + SPAWN_PER_POINTER_MOVE),
            rng,
            pointer: None,
            session: None,
        }
    }

    /// Mount onto `env`: acquire a surface, subscribe, seed and schedule the
    /// first frame.
    ///
    /// If the host cannot provide a surface the animator stays inert.
    pub fn start<E>(&mut self, env: &mut E)
    where
        E: Environment<Surface = S>,
    {
        if self.session.is_some() {
            debug!("animator already running");
            return;
        }

        let viewport = env.viewport();
        let Some(surface) = env.acquire_surface(viewport) else {
            warn!(
                "no drawing surface for {}x{} viewport, particles disabled",
                viewport.width, viewport.height
            );
            return;
        };

        let resize = env.listen(Signal::Resize);
        let pointer = env.listen(Signal::PointerMove);

        self.particles.clear();
        for _ in 0..AMBIENT_SEED_COUNT {
            self.particles
                .push_back(Particle::ambient(&mut self.rng, viewport));
        }

        let frame = env.request_frame();
        self.session = Some(Session {
            surface,
            resize,
            pointer,
            frame: Some(frame),
        });

        info!(
            "animator started on {}x{} with {} particles",
            viewport.width,
            viewport.height,
            self.particles.len()
        );
    }

    /// Unmount from `env`, releasing both subscriptions and the pending frame.
    pub fn stop<E>(&mut self, env: &mut E)
    where
        E: Environment<Surface = S>,
    {
        let Some(session) = self.session.take() else {
            return;
        };

        env.unlisten(session.resize);
        env.unlisten(session.pointer);
        if let Some(frame) = session.frame {
            env.cancel_frame(frame);
        }
        self.particles.clear();
        self.pointer = None;

        info!("animator stopped");
    }

    /// Whether the animator is mounted with a live surface.
    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }

    /// Match the surface to a new viewport size.
    ///
    /// Particles keep their positions; anything now off-surface drifts and
    /// recycles back into view.
    pub fn on_resize(&mut self, viewport: Viewport) {
        if let Some(session) = self.session.as_mut() {
            debug!("surface resized to {}x{}", viewport.width, viewport.height);
            session.surface.resize(viewport);
        }
    }

    /// Shed fresh particles around the pointer.
    pub fn on_pointer_move(&mut self, at: Point) {
        if self.session.is_none() {
            return;
        }

        self.pointer = Some(at);
        for _ in 0..SPAWN_PER_POINTER_MOVE {
            self.particles
                .push_back(Particle::near_pointer(&mut self.rng, at));
        }
        while self.particles.len() > MAX_PARTICLES {
            self.particles.pop_front();
        }
    }

    /// Run one tick for `handle` and queue the next one.
    ///
    /// Handles that are not the pending frame are ignored.
    pub fn on_frame<E>(&mut self, env: &mut E, handle: FrameHandle)
    where
        E: Environment<Surface = S>,
    {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.frame != Some(handle) {
            return;
        }
        session.frame = None;

        let theme = if env.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        };
        let ink = theme.stroke_rgb();

        let surface = &mut session.surface;
        surface.clear();
        let size = surface.size();

        for particle in &mut self.particles {
            particle.advance();
            if particle.is_spent() {
                particle.recycle(&mut self.rng, size);
            }

            let (from, to) = particle.endpoints();
            surface.stroke(Stroke {
                from,
                to,
                color: Rgba::new(ink, particle.alpha()),
                width: STROKE_WIDTH,
            });
        }

        session.frame = Some(env.request_frame());
    }

    /// Live particles in insertion order.
    pub fn particles(&self) -> impl ExactSizeIterator<Item = &Particle> {
        self.particles.iter()
    }

    /// The most recent pointer position, if the pointer has moved.
    pub fn last_pointer(&self) -> Option<Point> {
        self.pointer
    }

    /// The owned drawing surface while running.
    pub fn surface(&self) -> Option<&S> {
        self.session.as_ref().map(|s| &s.surface)
    }
}
