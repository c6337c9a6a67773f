use std::collections::BTreeMap;

use egui::{Color32, Vec2};
use log::debug;

use crate::id_generator::{IdGenerator, PrimitiveId};
use crate::primitive::Primitive;

/// Committed drawing content plus the transient preview.
///
/// Primitives are kept in an arena keyed by monotonically increasing handles,
/// so iterating the arena yields them in draw order: later primitives are
/// painted over earlier ones. The preview is never part of the arena and is
/// always painted last.
#[derive(Debug)]
pub struct Canvas {
    primitives: BTreeMap<PrimitiveId, Primitive>,
    preview: Option<Primitive>,
    background: Color32,
    size: Vec2,
    ids: IdGenerator,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(Color32::WHITE)
    }
}

impl Canvas {
    pub fn new(background: Color32) -> Self {
        Self {
            primitives: BTreeMap::new(),
            preview: None,
            background,
            size: Vec2::ZERO,
            ids: IdGenerator::new(),
        }
    }

    /// Adds a primitive on top of everything committed so far.
    pub fn commit(&mut self, primitive: Primitive) -> PrimitiveId {
        let id = self.ids.generate();
        debug!("Committed {} {}", primitive.kind().name(), id);
        self.primitives.insert(id, primitive);
        id
    }

    /// Puts a previously removed primitive back under its original handle.
    ///
    /// Because handles encode draw order, the primitive reappears at the same
    /// depth it had before removal.
    pub fn restore(&mut self, id: PrimitiveId, primitive: Primitive) {
        self.primitives.insert(id, primitive);
    }

    /// Removes a committed primitive. Unknown handles are ignored.
    pub fn remove(&mut self, id: PrimitiveId) -> Option<Primitive> {
        self.primitives.remove(&id)
    }

    pub fn get(&self, id: PrimitiveId) -> Option<&Primitive> {
        self.primitives.get(&id)
    }

    /// Replaces the preview; the old one is simply dropped.
    pub fn set_preview(&mut self, preview: Option<Primitive>) {
        self.preview = preview;
    }

    pub fn preview(&self) -> Option<&Primitive> {
        self.preview.as_ref()
    }

    /// Empties the committed set and the preview, returning what was committed
    /// in draw order.
    pub fn clear_all(&mut self) -> Vec<(PrimitiveId, Primitive)> {
        self.preview = None;
        std::mem::take(&mut self.primitives).into_iter().collect()
    }

    /// Changes the background only. Primitives keep their own colors, so
    /// eraser strokes drawn earlier keep the old background color.
    pub fn change_background(&mut self, color: Color32) {
        self.background = color;
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    /// Tracks the on-screen size of the drawing area, in pixels.
    pub fn resize(&mut self, size: Vec2) {
        self.size = size.max(Vec2::ZERO);
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Committed primitives in draw order.
    pub fn primitives(&self) -> impl Iterator<Item = (PrimitiveId, &Primitive)> {
        self.primitives.iter().map(|(id, primitive)| (*id, primitive))
    }

    pub fn ids(&self) -> Vec<PrimitiveId> {
        self.primitives.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}
