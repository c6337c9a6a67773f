use std::path::PathBuf;

use thiserror::Error;

use crate::services::NoticeKind;

/// Errors that can occur while writing a vector export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Canvas has no drawable area ({width}x{height})")]
    InvalidPageSize { width: u32, height: u32 },
}

/// Errors reported by the tool state machine on out-of-order pointer events
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Cannot {event} while {state}")]
    InvalidStateTransition {
        event: &'static str,
        state: &'static str,
    },
}

/// Outcomes of user-facing editor operations that did not change anything
#[derive(Debug, Error)]
pub enum EditorError {
    /// A picker dialog was dismissed
    #[error("Cancelled")]
    UserCancelled,

    #[error("Nothing to undo")]
    EmptyUndo,

    #[error("Finish the current gesture first")]
    GestureInProgress,

    #[error(transparent)]
    Export(#[from] ExportError),
}

impl EditorError {
    /// How the error is surfaced to the user; `None` means stay silent
    pub fn notice_kind(&self) -> Option<NoticeKind> {
        match self {
            Self::UserCancelled => None,
            Self::EmptyUndo | Self::GestureInProgress => Some(NoticeKind::Info),
            Self::Export(_) => Some(NoticeKind::Error),
        }
    }
}

/// Result type for editor operations
pub type EditorResult<T> = Result<T, EditorError>;
