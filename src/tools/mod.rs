use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::config::EditorConfig;
use crate::primitive::{PrimitiveKind, Style};
use crate::state::Gesture;

mod freehand;
mod shape;

pub use freehand::FreehandTool;
pub use shape::ShapeTool;

/// Tool trait defines how a frozen tool turns pointer motion into primitives
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// Handle pointer drag while the gesture is in progress.
    /// May commit primitives (recorded in the gesture) or replace the preview.
    fn on_pointer_move(
        &self,
        gesture: &mut Gesture,
        pos: Pos2,
        canvas: &mut Canvas,
        style: Style,
    );

    /// Handle pointer release, finishing whatever the gesture still owes the canvas.
    fn on_pointer_up(
        &self,
        gesture: &mut Gesture,
        pos: Pos2,
        canvas: &mut Canvas,
        style: Style,
    );
}

/// All selectable tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ToolKind {
    #[default]
    Pencil,
    Eraser,
    Line,
    Rect,
    Oval,
}

impl ToolKind {
    pub const ALL: [ToolKind; 5] = [
        ToolKind::Pencil,
        ToolKind::Eraser,
        ToolKind::Line,
        ToolKind::Rect,
        ToolKind::Oval,
    ];

    /// Human-readable name used on buttons and in the status bar
    pub fn label(self) -> &'static str {
        match self {
            Self::Pencil => "pencil",
            Self::Eraser => "eraser",
            Self::Line => "line",
            Self::Rect => "rectangle",
            Self::Oval => "oval",
        }
    }

    /// Pencil and eraser commit segments while moving instead of previewing
    pub fn is_freehand(self) -> bool {
        matches!(self, Self::Pencil | Self::Eraser)
    }

    /// The primitive kind a shape tool produces on release
    pub fn shape_kind(self) -> Option<PrimitiveKind> {
        match self {
            Self::Pencil | Self::Eraser => None,
            Self::Line => Some(PrimitiveKind::Line),
            Self::Rect => Some(PrimitiveKind::Rect),
            Self::Oval => Some(PrimitiveKind::Oval),
        }
    }

    /// Style this tool draws with under the given configuration.
    /// The eraser paints with the background color instead of deleting.
    pub fn style_for(self, config: &EditorConfig) -> Style {
        match self {
            Self::Eraser => config.erase_style(),
            _ => config.style(),
        }
    }
}

impl Tool for ToolKind {
    fn name(&self) -> &'static str {
        self.label()
    }

    fn on_pointer_move(
        &self,
        gesture: &mut Gesture,
        pos: Pos2,
        canvas: &mut Canvas,
        style: Style,
    ) {
        match self.shape_kind() {
            None => FreehandTool.on_pointer_move(gesture, pos, canvas, style),
            Some(kind) => ShapeTool::new(kind).on_pointer_move(gesture, pos, canvas, style),
        }
    }

    fn on_pointer_up(
        &self,
        gesture: &mut Gesture,
        pos: Pos2,
        canvas: &mut Canvas,
        style: Style,
    ) {
        match self.shape_kind() {
            None => FreehandTool.on_pointer_up(gesture, pos, canvas, style),
            Some(kind) => ShapeTool::new(kind).on_pointer_up(gesture, pos, canvas, style),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Color32;

    #[test]
    fn freehand_tools_have_no_shape() {
        assert!(ToolKind::Pencil.shape_kind().is_none());
        assert!(ToolKind::Eraser.shape_kind().is_none());
        assert_eq!(ToolKind::Oval.shape_kind(), Some(PrimitiveKind::Oval));
        assert!(ToolKind::ALL.iter().filter(|t| t.is_freehand()).count() == 2);
    }

    #[test]
    fn eraser_uses_background_color() {
        let config = EditorConfig {
            color: Color32::RED,
            background: Color32::DARK_GRAY,
            ..EditorConfig::default()
        };

        assert_eq!(ToolKind::Eraser.style_for(&config).color, Color32::DARK_GRAY);
        assert_eq!(ToolKind::Pencil.style_for(&config).color, Color32::RED);
        assert_eq!(ToolKind::Rect.style_for(&config).color, Color32::RED);
    }
}
