mod history;

pub use history::ActionLog;

use crate::canvas::Canvas;
use crate::id_generator::PrimitiveId;
use crate::primitive::Primitive;

/// The unit of undo
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Primitives committed by one press-move-release gesture, in commit order
    Gesture(Vec<PrimitiveId>),
    /// Everything that was on the canvas when it was cleared, in draw order
    Clear(Vec<(PrimitiveId, Primitive)>),
}

impl Action {
    /// Number of primitives the action covers
    pub fn len(&self) -> usize {
        match self {
            Action::Gesture(ids) => ids.len(),
            Action::Clear(primitives) => primitives.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn label(&self) -> &'static str {
        match self {
            Action::Gesture(_) => "Draw",
            Action::Clear(_) => "Clear",
        }
    }

    /// Reverts the action on the canvas.
    ///
    /// Undoing a gesture removes its primitives; handles that are already gone
    /// are skipped. Undoing a clear puts every cleared primitive back.
    pub fn revert(self, canvas: &mut Canvas) -> usize {
        match self {
            Action::Gesture(ids) => ids
                .into_iter()
                .filter(|id| canvas.remove(*id).is_some())
                .count(),
            Action::Clear(primitives) => {
                let restored = primitives.len();
                for (id, primitive) in primitives {
                    canvas.restore(id, primitive);
                }
                restored
            }
        }
    }
}
