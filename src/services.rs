use std::path::PathBuf;

use egui::Color32;

/// File extension suggested for vector exports.
pub const VECTOR_EXTENSION: &str = "ps";

/// Severity of a user-visible notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Collaborators the drawing session calls out to.
///
/// The egui shell implements these with modal windows; tests use a scripted
/// stand-in. Returning `None` from a picker means the user dismissed it.
pub trait EditorServices {
    /// Modal color picker seeded with `initial`.
    fn request_color(&mut self, initial: Color32) -> Option<Color32>;

    /// Modal save-path picker; implementations should suggest [`VECTOR_EXTENSION`].
    fn request_save_path(&mut self) -> Option<PathBuf>;

    /// Non-blocking notification.
    fn notify(&mut self, kind: NoticeKind, title: &str, message: &str);
}

/// Appends the vector extension when the chosen path has none.
pub fn with_vector_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(VECTOR_EXTENSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_added_only_when_missing() {
        assert_eq!(
            with_vector_extension(PathBuf::from("drawing")),
            PathBuf::from("drawing.ps")
        );
        assert_eq!(
            with_vector_extension(PathBuf::from("drawing.eps")),
            PathBuf::from("drawing.eps")
        );
    }
}
