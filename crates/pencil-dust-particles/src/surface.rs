//! Drawing surfaces the animator paints strokes onto.

use pencil_dust_core::{Point, Rgba, Viewport};

/// Nominal stroke width in pixels.
pub const STROKE_WIDTH: f32 = 1.5;

/// A straight, round-capped line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub from: Point,
    pub to: Point,
    pub color: Rgba,
    pub width: f32,
}

/// A 2-D raster the animator owns while mounted.
pub trait Surface {
    /// Drawable size in pixels.
    fn size(&self) -> Viewport;
    /// Change the drawable size. Resizing discards the current contents.
    fn resize(&mut self, size: Viewport);
    /// Erase everything drawn so far.
    fn clear(&mut self);
    fn stroke(&mut self, stroke: Stroke);
}

/// A surface that records strokes for later rasterisation.
#[derive(Debug, Clone, Default)]
pub struct StrokeBuffer {
    size: Viewport,
    strokes: Vec<Stroke>,
}

impl StrokeBuffer {
    pub fn new(size: Viewport) -> Self {
        Self {
            size,
            strokes: Vec::new(),
        }
    }

    /// Strokes drawn since the last clear, in draw order.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }
}

impl Surface for StrokeBuffer {
    fn size(&self) -> Viewport {
        self.size
    }

    fn resize(&mut self, size: Viewport) {
        self.size = size;
        self.strokes.clear();
    }

    fn clear(&mut self) {
        self.strokes.clear();
    }

    fn stroke(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }
}
