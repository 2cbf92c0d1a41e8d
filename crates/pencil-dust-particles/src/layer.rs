//! Rasterises a [`StrokeBuffer`] onto the terminal with braille dots.

use pencil_dust_core::{Rgb, Viewport};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols::Marker,
    widgets::{
        Widget,
        canvas::{Canvas, Line},
    },
};

use crate::color::{blend, to_color};
use crate::surface::{Stroke, StrokeBuffer, Surface};

/// Widget painting recorded strokes over a solid paper background.
#[derive(Debug, Clone, Copy)]
pub struct StrokeLayer<'a> {
    strokes: &'a StrokeBuffer,
    paper: Rgb,
}

impl<'a> StrokeLayer<'a> {
    pub fn new(strokes: &'a StrokeBuffer, paper: Rgb) -> Self {
        Self { strokes, paper }
    }
}

impl Widget for StrokeLayer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let size = self.strokes.size();
        if size.is_empty() {
            buf.set_style(area, Style::new().bg(to_color(self.paper)));
            return;
        }

        let width = size.width as f64;
        let height = size.height as f64;
        let paper = self.paper;

        Canvas::default()
            .marker(Marker::Braille)
            .background_color(to_color(paper))
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                for stroke in self.strokes.strokes() {
                    if !overlaps(stroke, size) {
                        continue;
                    }
                    // Canvas y grows upwards; surface y grows downwards.
                    ctx.draw(&Line::new(
                        stroke.from.x as f64,
                        height - stroke.from.y as f64,
                        stroke.to.x as f64,
                        height - stroke.to.y as f64,
                        blend(stroke.color, paper),
                    ));
                }
            })
            .render(area, buf);
    }
}

/// Whether the stroke's bounding box touches the surface.
fn overlaps(stroke: &Stroke, size: Viewport) -> bool {
    let (min_x, max_x) = (stroke.from.x.min(stroke.to.x), stroke.from.x.max(stroke.to.x));
    let (min_y, max_y) = (stroke.from.y.min(stroke.to.y), stroke.from.y.max(stroke.to.y));
    max_x >= 0.0 && max_y >= 0.0 && min_x < size.width as f32 && min_y < size.height as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::STROKE_WIDTH;
    use pencil_dust_core::{Point, Rgba};
    use ratatui::style::Color;

    const PAPER: Rgb = Rgb(250, 247, 240);

    fn horizontal(y: f32, alpha: f32) -> Stroke {
        Stroke {
            from: Point::new(4.0, y),
            to: Point::new(76.0, y),
            color: Rgba::new(Rgb(60, 55, 50), alpha),
            width: STROKE_WIDTH,
        }
    }

    #[test]
    fn test_paints_paper_background() {
        let strokes = StrokeBuffer::new(Viewport::new(80, 80));
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 5));

        StrokeLayer::new(&strokes, PAPER).render(buf.area, &mut buf);

        assert!(
            buf.content()
                .iter()
                .all(|c| c.bg == Color::Rgb(250, 247, 240))
        );
    }

    #[test]
    fn test_draws_blended_stroke() {
        let mut strokes = StrokeBuffer::new(Viewport::new(80, 80));
        strokes.stroke(horizontal(40.0, 1.0));
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 5));

        StrokeLayer::new(&strokes, PAPER).render(buf.area, &mut buf);

        let ink = Color::Rgb(60, 55, 50);
        let inked = buf.content().iter().filter(|c| c.fg == ink).count();
        assert!(inked >= 8);
    }

    #[test]
    fn test_skips_offscreen_stroke() {
        let mut strokes = StrokeBuffer::new(Viewport::new(80, 80));
        strokes.stroke(horizontal(130.0, 1.0));
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 5));

        StrokeLayer::new(&strokes, PAPER).render(buf.area, &mut buf);

        let ink = Color::Rgb(60, 55, 50);
        assert!(buf.content().iter().all(|c| c.fg != ink));
    }

    #[test]
    fn test_draws_stroke_crossing_corner() {
        // Both ends lie outside the surface; the middle passes over the
        // top-left corner.
        let mut strokes = StrokeBuffer::new(Viewport::new(80, 80));
        strokes.stroke(Stroke {
            from: Point::new(-10.0, 30.0),
            to: Point::new(30.0, -10.0),
            color: Rgba::new(Rgb(60, 55, 50), 1.0),
            width: STROKE_WIDTH,
        });
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 5));

        StrokeLayer::new(&strokes, PAPER).render(buf.area, &mut buf);

        let ink = Color::Rgb(60, 55, 50);
        assert!(buf.content().iter().any(|c| c.fg == ink));
    }

    #[test]
    fn test_bounding_box_overlap() {
        let size = Viewport::new(80, 80);
        let corner = Stroke {
            from: Point::new(-10.0, 30.0),
            to: Point::new(30.0, -10.0),
            color: Rgba::new(Rgb(0, 0, 0), 1.0),
            width: STROKE_WIDTH,
        };
        assert!(overlaps(&corner, size));
        assert!(!overlaps(&horizontal(130.0, 1.0), size));
        assert!(!overlaps(&horizontal(-5.0, 1.0), size));
    }

    #[test]
    fn test_empty_surface_paints_paper_only() {
        let strokes = StrokeBuffer::new(Viewport::new(0, 0));
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 2));

        StrokeLayer::new(&strokes, PAPER).render(buf.area, &mut buf);

        assert!(
            buf.content()
                .iter()
                .all(|c| c.bg == Color::Rgb(250, 247, 240))
        );
    }
}
