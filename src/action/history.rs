use log::{debug, info};

use super::Action;
use crate::canvas::Canvas;
use crate::error::{EditorError, EditorResult};

/// Stack of drawing actions for undo
#[derive(Debug, Default)]
pub struct ActionLog {
    undo_stack: Vec<Action>,
}

impl ActionLog {
    /// Creates a new empty action log
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
        }
    }

    /// Pushes an action on top of the log. Empty gestures are not recorded.
    pub fn push(&mut self, action: Action) {
        if action.is_empty() {
            debug!("Skipping empty {} action", action.label());
            return;
        }
        self.undo_stack.push(action);
    }

    /// Undo the most recent action.
    ///
    /// Returns the number of primitives removed or restored, or
    /// [`EditorError::EmptyUndo`] when there is nothing to undo.
    pub fn undo(&mut self, canvas: &mut Canvas) -> EditorResult<usize> {
        let action = self.undo_stack.pop().ok_or(EditorError::EmptyUndo)?;
        let label = action.label();
        let touched = action.revert(canvas);
        info!("Undid {} action ({} primitives)", label, touched);
        Ok(touched)
    }

    /// Records every committed primitive as one action, then empties the canvas.
    ///
    /// Clearing an empty canvas records nothing. Returns the number of
    /// primitives cleared.
    pub fn clear(&mut self, canvas: &mut Canvas) -> usize {
        let cleared = canvas.clear_all();
        let count = cleared.len();
        if count > 0 {
            self.undo_stack.push(Action::Clear(cleared));
            info!("Cleared canvas ({} primitives)", count);
        }
        count
    }

    /// Returns true if there are actions that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }

    /// Actions from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.undo_stack.iter()
    }
}
