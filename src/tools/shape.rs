use egui::Pos2;

use super::Tool;
use crate::canvas::Canvas;
use crate::primitive::{Primitive, PrimitiveKind, Style};
use crate::state::Gesture;

/// Line, rectangle and oval: preview while dragging, commit once on release.
#[derive(Debug, Clone, Copy)]
pub struct ShapeTool {
    kind: PrimitiveKind,
}

impl ShapeTool {
    pub fn new(kind: PrimitiveKind) -> Self {
        Self { kind }
    }

    fn shape(&self, anchor: Pos2, pos: Pos2, style: Style) -> Primitive {
        Primitive::new(self.kind, anchor, pos, style)
    }
}

impl Tool for ShapeTool {
    fn name(&self) -> &'static str {
        self.kind.name()
    }

    fn on_pointer_move(
        &self,
        gesture: &mut Gesture,
        pos: Pos2,
        canvas: &mut Canvas,
        style: Style,
    ) {
        canvas.set_preview(Some(self.shape(gesture.anchor, pos, style)));
        gesture.last = pos;
    }

    fn on_pointer_up(
        &self,
        gesture: &mut Gesture,
        pos: Pos2,
        canvas: &mut Canvas,
        style: Style,
    ) {
        canvas.set_preview(None);
        // A release without any move still commits a zero-size shape
        let id = canvas.commit(self.shape(gesture.anchor, pos, style));
        gesture.record(id);
        gesture.last = pos;
    }
}
