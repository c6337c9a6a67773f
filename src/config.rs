use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::primitive::{BrushSize, Style};
use crate::tools::ToolKind;

/// When a gesture reads the current color and brush size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StylePolicy {
    /// Read at every commit: changing the size mid-stroke affects only the
    /// segments drawn after the change.
    #[default]
    Live,
    /// Captured once at press time and used for the whole gesture.
    Snapshot,
}

/// User-adjustable editor settings.
///
/// Persisted between runs by the app shell; drawings themselves never are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct EditorConfig {
    pub color: Color32,
    pub brush_size: BrushSize,
    pub tool: ToolKind,
    pub background: Color32,
    pub style_policy: StylePolicy,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            brush_size: BrushSize::default(),
            tool: ToolKind::Pencil,
            background: Color32::WHITE,
            style_policy: StylePolicy::Live,
        }
    }
}

impl EditorConfig {
    pub fn style(&self) -> Style {
        Style::new(self.color, self.brush_size)
    }

    /// Style used by the eraser: the current background at the current size.
    pub fn erase_style(&self) -> Style {
        Style::new(self.background, self.brush_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_fresh_editor() {
        let config = EditorConfig::default();

        assert_eq!(config.color, Color32::BLACK);
        assert_eq!(config.brush_size.get(), 3);
        assert_eq!(config.tool, ToolKind::Pencil);
        assert_eq!(config.background, Color32::WHITE);
        assert_eq!(config.style_policy, StylePolicy::Live);
    }

    #[test]
    fn erase_style_follows_background() {
        let mut config = EditorConfig::default();
        config.background = Color32::YELLOW;
        config.brush_size = BrushSize::new(12);

        let style = config.erase_style();
        assert_eq!(style.color, Color32::YELLOW);
        assert_eq!(style.size.get(), 12);
    }
}
