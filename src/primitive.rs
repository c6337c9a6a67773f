use egui::{Color32, Pos2, Rect};
use serde::{Deserialize, Serialize};

/// Width of a brush in device pixels, always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct BrushSize(u8);

impl BrushSize {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 30;

    // Out-of-range values are clamped rather than rejected
    pub fn new(size: u8) -> Self {
        Self(size.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn width(self) -> f32 {
        f32::from(self.0)
    }
}

impl Default for BrushSize {
    fn default() -> Self {
        Self(3)
    }
}

impl From<u8> for BrushSize {
    fn from(size: u8) -> Self {
        Self::new(size)
    }
}

impl From<BrushSize> for u8 {
    fn from(size: BrushSize) -> Self {
        size.0
    }
}

/// Color and width shared by every primitive kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: Color32,
    pub size: BrushSize,
}

impl Style {
    pub fn new(color: Color32, size: BrushSize) -> Self {
        Self { color, size }
    }
}

/// The four kinds of shape a gesture can leave on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Stroke,
    Line,
    Rect,
    Oval,
}

impl PrimitiveKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Stroke => "stroke",
            Self::Line => "line",
            Self::Rect => "rect",
            Self::Oval => "oval",
        }
    }
}

/// One immutable drawn shape.
///
/// `Stroke` and `Line` run from `start` to `end`. `Rect` and `Oval` use the two
/// points as opposite corners of their bounding box, in any order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primitive {
    kind: PrimitiveKind,
    start: Pos2,
    end: Pos2,
    style: Style,
}

impl Primitive {
    pub fn new(kind: PrimitiveKind, start: Pos2, end: Pos2, style: Style) -> Self {
        Self {
            kind,
            start,
            end,
            style,
        }
    }

    pub fn stroke(start: Pos2, end: Pos2, style: Style) -> Self {
        Self::new(PrimitiveKind::Stroke, start, end, style)
    }

    pub fn line(start: Pos2, end: Pos2, style: Style) -> Self {
        Self::new(PrimitiveKind::Line, start, end, style)
    }

    pub fn rect(start: Pos2, end: Pos2, style: Style) -> Self {
        Self::new(PrimitiveKind::Rect, start, end, style)
    }

    pub fn oval(start: Pos2, end: Pos2, style: Style) -> Self {
        Self::new(PrimitiveKind::Oval, start, end, style)
    }

    pub fn kind(&self) -> PrimitiveKind {
        self.kind
    }

    pub fn start(&self) -> Pos2 {
        self.start
    }

    pub fn end(&self) -> Pos2 {
        self.end
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn color(&self) -> Color32 {
        self.style.color
    }

    pub fn width(&self) -> f32 {
        self.style.size.width()
    }

    /// Normalized box spanned by the two points, without stroke padding.
    pub fn bounds(&self) -> Rect {
        Rect::from_two_pos(self.start, self.end)
    }

    /// True when the two points coincide, e.g. a click without a drag.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Stroke and line ends are drawn with round caps.
    pub fn has_round_caps(&self) -> bool {
        matches!(self.kind, PrimitiveKind::Stroke | PrimitiveKind::Line)
    }
}
