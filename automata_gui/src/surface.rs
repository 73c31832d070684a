// surface.rs - egui painter as a drawing surface

use std::convert::Infallible;

use egui::epaint::RectShape;
use egui::{Color32, Painter, Pos2, Rect, Rounding, Shape, Vec2, vec2};

use automata::{CellRect, Rgb, Surface};

/// Corner radius of a painted cell.
pub const CELL_ROUNDING: f32 = 2.0;

pub fn to_color32(color: Rgb) -> Color32 {
    let [r, g, b] = color.to_array();
    Color32::from_rgb(r, g, b)
}

/// One shape holding every rect of a batch as a rounded cell.
pub fn cell_batch(origin: Pos2, color: Color32, rects: &[CellRect]) -> Shape {
    Shape::Vec(
        rects
            .iter()
            .map(|rect| {
                let area = Rect::from_min_size(origin + vec2(rect.x, rect.y), vec2(rect.w, rect.h));
                Shape::Rect(RectShape::filled(area, Rounding::same(CELL_ROUNDING), color))
            })
            .collect(),
    )
}

/// Paints into the canvas area at `origin`. Every batch becomes one shape.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
    size: Vec2,
    background: Color32,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2, size: Vec2, background: Color32) -> Self {
        Self { painter, origin, size, background }
    }
}

impl Surface for PainterSurface<'_> {
    type Error = Infallible;

    fn clear(&mut self) -> Result<(), Infallible> {
        self.painter.rect_filled(
            Rect::from_min_size(self.origin, self.size),
            0.0,
            self.background,
        );
        Ok(())
    }

    fn fill_rects(&mut self, color: Rgb, rects: &[CellRect]) -> Result<(), Infallible> {
        self.painter.add(cell_batch(self.origin, to_color32(color), rects));
        Ok(())
    }
}
