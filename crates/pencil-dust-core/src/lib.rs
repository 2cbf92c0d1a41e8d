//! Core types shared by the pencil-dust crates.

mod geometry;
mod theme;

pub use geometry::{Point, Viewport};
pub use theme::{Rgb, Rgba, Theme, ThemePreference, theme_from_colorfgbg};
