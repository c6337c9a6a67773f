use egui::Pos2;

use super::Tool;
use crate::canvas::Canvas;
use crate::primitive::{Primitive, Style};
use crate::state::Gesture;

/// Pencil and eraser: every pointer move commits one stroke segment.
///
/// Segments are permanent as soon as they are drawn, so an interrupted
/// gesture still leaves its partial stroke behind.
#[derive(Debug, Clone, Copy, Default)]
pub struct FreehandTool;

impl Tool for FreehandTool {
    fn name(&self) -> &'static str {
        "freehand"
    }

    fn on_pointer_move(
        &self,
        gesture: &mut Gesture,
        pos: Pos2,
        canvas: &mut Canvas,
        style: Style,
    ) {
        let id = canvas.commit(Primitive::stroke(gesture.last, pos, style));
        gesture.record(id);
        gesture.last = pos;
    }

    fn on_pointer_up(
        &self,
        _gesture: &mut Gesture,
        _pos: Pos2,
        _canvas: &mut Canvas,
        _style: Style,
    ) {
        // Segments were already committed while moving
    }
}
