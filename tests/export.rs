use std::path::PathBuf;

use eframe_draw::{DrawingSession, EditorError, EditorServices, ExportError, NoticeKind, ToolKind};
use egui::{Color32, pos2, vec2};

/// Scripted stand-in for the dialogs of the app shell
#[derive(Default)]
struct ScriptedServices {
    color: Option<Color32>,
    path: Option<PathBuf>,
    notices: Vec<(NoticeKind, String, String)>,
}

impl EditorServices for ScriptedServices {
    fn request_color(&mut self, _initial: Color32) -> Option<Color32> {
        self.color.take()
    }

    fn request_save_path(&mut self) -> Option<PathBuf> {
        self.path.take()
    }

    fn notify(&mut self, kind: NoticeKind, title: &str, message: &str) {
        self.notices.push((kind, title.to_owned(), message.to_owned()));
    }
}

fn drawn_session() -> DrawingSession {
    let mut session = DrawingSession::default();
    session.resize_canvas(vec2(320.0, 200.0));
    session.set_tool(ToolKind::Line);
    session.on_press(pos2(10.0, 10.0));
    session.on_move(pos2(100.0, 100.0));
    session.on_release(pos2(100.0, 100.0));
    session
}

#[test]
fn test_export_writes_postscript_page() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempfile::tempdir()?;
    let path = temp_dir.path().join("drawing.ps");
    let mut session = drawn_session();

    session.export_vector(&path)?;

    let contents = std::fs::read_to_string(&path)?;
    assert!(contents.starts_with("%!PS-Adobe-3.0"));
    assert!(contents.contains("%%BoundingBox: 0 0 320 200"));
    assert!(contents.contains("newpath 10 190 moveto 100 100 lineto stroke"));
    assert!(session.status().starts_with("Saved as .ps"));
    Ok(())
}

#[test]
fn test_export_excludes_preview_and_leaves_canvas_alone() -> Result<(), Box<dyn std::error::Error>>
{
    let temp_dir = tempfile::tempdir()?;
    let path = temp_dir.path().join("drawing.ps");
    let mut session = drawn_session();
    session.set_tool(ToolKind::Rect);
    session.on_press(pos2(50.0, 50.0));
    session.on_move(pos2(80.0, 80.0));
    let before: Vec<_> = session.canvas().ids();

    session.export_vector(&path)?;

    let contents = std::fs::read_to_string(&path)?;
    assert!(!contents.contains("closepath"));
    assert_eq!(session.canvas().ids(), before);
    assert!(session.canvas().preview().is_some());
    Ok(())
}

#[test]
fn test_export_to_unwritable_path_fails_cleanly() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempfile::tempdir()?;
    let path = temp_dir.path().join("missing").join("drawing.ps");
    let mut session = drawn_session();
    let before = session.canvas().ids();

    let err = session.export_vector(&path).unwrap_err();

    assert!(matches!(err, EditorError::Export(ExportError::Io { .. })));
    assert!(err.to_string().contains("drawing.ps"));
    assert_eq!(session.canvas().ids(), before);
    assert_eq!(session.history().len(), 1);
    Ok(())
}

#[test]
fn test_save_flow_notifies_success() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempfile::tempdir()?;
    let mut services = ScriptedServices {
        // Extension is added when missing
        path: Some(temp_dir.path().join("sketch")),
        ..Default::default()
    };
    let mut session = drawn_session();

    session.save_vector(&mut services)?;

    assert!(temp_dir.path().join("sketch.ps").exists());
    assert_eq!(services.notices.len(), 1);
    assert_eq!(services.notices[0].0, NoticeKind::Info);
    Ok(())
}

#[test]
fn test_save_flow_reports_errors() {
    let mut services = ScriptedServices {
        path: Some(PathBuf::from("/nonexistent-dir/for/sure/drawing.ps")),
        ..Default::default()
    };
    let mut session = drawn_session();

    let result = session.save_vector(&mut services);

    assert!(matches!(result, Err(EditorError::Export(_))));
    assert_eq!(services.notices.len(), 1);
    assert_eq!(services.notices[0].0, NoticeKind::Error);
    assert!(services.notices[0].2.contains("drawing.ps"));
}

#[test]
fn test_cancelled_pickers_change_nothing() {
    let mut services = ScriptedServices::default();
    let mut session = drawn_session();

    assert!(matches!(
        session.save_vector(&mut services),
        Err(EditorError::UserCancelled)
    ));
    assert!(matches!(
        session.choose_color(&mut services),
        Err(EditorError::UserCancelled)
    ));
    assert!(matches!(
        session.choose_background(&mut services),
        Err(EditorError::UserCancelled)
    ));

    assert_eq!(session.config().color, Color32::BLACK);
    assert_eq!(session.canvas().background(), Color32::WHITE);
    assert!(services.notices.is_empty());
    assert!(EditorError::UserCancelled.notice_kind().is_none());
}

#[test]
fn test_picked_background_recolors_canvas_only() {
    let mut services = ScriptedServices {
        color: Some(Color32::GOLD),
        ..Default::default()
    };
    let mut session = drawn_session();

    assert_eq!(session.choose_background(&mut services).unwrap(), Color32::GOLD);
    assert_eq!(session.canvas().background(), Color32::GOLD);
    assert_eq!(session.config().background, Color32::GOLD);
    let (_, line) = session.canvas().primitives().next().unwrap();
    assert_eq!(line.color(), Color32::BLACK);
}
