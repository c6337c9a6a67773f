// src/renderer.rs
use eframe::egui::{self, Color32, Pos2, Rect, Rounding, Shape, Stroke, Vec2};

use crate::canvas::Canvas;
use crate::primitive::{Primitive, PrimitiveKind};

/// Paints a [`Canvas`] with egui shapes.
///
/// Painter's algorithm: background first, then committed primitives in draw
/// order, then the preview on top.
#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Renders the canvas into `rect`, whose top-left corner is canvas (0, 0).
    pub fn render(&self, painter: &egui::Painter, rect: Rect, canvas: &Canvas) {
        painter.extend(self.canvas_shapes(canvas, rect));
    }

    /// All shapes for one frame, bottom to top.
    pub fn canvas_shapes(&self, canvas: &Canvas, rect: Rect) -> Vec<Shape> {
        let offset = rect.min.to_vec2();
        let mut shapes = vec![Shape::rect_filled(rect, Rounding::ZERO, canvas.background())];

        for (_, primitive) in canvas.primitives() {
            shapes.extend(primitive_shapes(primitive, offset));
        }
        if let Some(preview) = canvas.preview() {
            shapes.extend(primitive_shapes(preview, offset));
        }
        shapes
    }
}

/// Shapes for a single primitive, translated by `offset` into screen space.
pub fn primitive_shapes(primitive: &Primitive, offset: Vec2) -> Vec<Shape> {
    let start = primitive.start() + offset;
    let end = primitive.end() + offset;
    let stroke = Stroke::new(primitive.width(), primitive.color());

    let mut shapes = match primitive.kind() {
        PrimitiveKind::Stroke | PrimitiveKind::Line => {
            vec![Shape::line_segment([start, end], stroke)]
        }
        PrimitiveKind::Rect => {
            vec![Shape::rect_stroke(
                Rect::from_two_pos(start, end),
                Rounding::ZERO,
                stroke,
            )]
        }
        PrimitiveKind::Oval => {
            let bounds = Rect::from_two_pos(start, end);
            vec![Shape::ellipse_stroke(bounds.center(), bounds.size() / 2.0, stroke)]
        }
    };
    if primitive.has_round_caps() {
        shapes.extend(round_caps(start, end, primitive.width(), primitive.color()));
    }
    shapes
}

// egui segments have butt ends; a disc at each end gives the round cap
fn round_caps(start: Pos2, end: Pos2, width: f32, color: Color32) -> [Shape; 2] {
    let radius = width / 2.0;
    [
        Shape::circle_filled(start, radius, color),
        Shape::circle_filled(end, radius, color),
    ]
}
