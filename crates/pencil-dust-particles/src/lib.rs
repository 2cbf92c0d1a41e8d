//! Cursor-reactive pencil dust.
//!
//! This crate holds the particle animator, the capabilities it needs from a
//! host ([`Environment`]), and a terminal drawing surface ([`StrokeBuffer`]
//! plus the [`StrokeLayer`] widget) for hosts built on ratatui.

mod animator;
mod color;
mod environment;
mod layer;
mod particle;
mod surface;
#[cfg(test)]
mod testing;

pub use animator::Animator;
pub use color::{blend, to_color};
pub use environment::{
    Environment, EventSource, FrameHandle, FrameScheduler, ListenerId, Signal, ThemeQuery,
};
pub use layer::StrokeLayer;
pub use particle::{
    AMBIENT_SEED_COUNT, LIFE_DECAY, MAX_PARTICLES, Particle, RECYCLE_MARGIN,
    SPAWN_PER_POINTER_MOVE, SPIN_RATE,
};
pub use surface::{STROKE_WIDTH, Stroke, StrokeBuffer, Surface};
