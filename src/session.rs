use std::path::Path;

use egui::{Color32, Pos2, Vec2};
use log::{debug, error, info, warn};

use crate::action::{Action, ActionLog};
use crate::canvas::Canvas;
use crate::config::{EditorConfig, StylePolicy};
use crate::error::{EditorError, EditorResult};
use crate::export;
use crate::primitive::{BrushSize, Style};
use crate::services::{EditorServices, NoticeKind, with_vector_extension};
use crate::state::{EditorState, Gesture};
use crate::tools::{Tool, ToolKind};

/// Single owner of everything the drawing engine mutates.
///
/// Pointer events arrive through [`on_press`](Self::on_press),
/// [`on_move`](Self::on_move) and [`on_release`](Self::on_release); the rest of
/// the methods back the toolbar and menu. No method leaves the canvas or the
/// action log half-updated.
#[derive(Debug)]
pub struct DrawingSession {
    config: EditorConfig,
    canvas: Canvas,
    history: ActionLog,
    state: EditorState,
    status: String,
}

impl Default for DrawingSession {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl DrawingSession {
    pub fn new(config: EditorConfig) -> Self {
        let status = format!("Ready. Tool: {}", config.tool.label());
        Self {
            canvas: Canvas::new(config.background),
            history: ActionLog::new(),
            state: EditorState::Idle,
            config,
            status,
        }
    }

    // --- Pointer input ---

    /// Starts a gesture with the current tool at `pos`.
    pub fn on_press(&mut self, pos: Pos2) {
        let tool = self.config.tool;
        let snapshot = match self.config.style_policy {
            StylePolicy::Live => None,
            StylePolicy::Snapshot => Some(tool.style_for(&self.config)),
        };

        match self.state.begin(Gesture::new(tool, pos, snapshot)) {
            // A preview left behind by an interrupted gesture must not linger
            Ok(()) => self.canvas.set_preview(None),
            Err(err) => warn!("Ignoring press at {:?}: {}", pos, err),
        }
    }

    /// Continues the running gesture. Moves without a press are ignored.
    pub fn on_move(&mut self, pos: Pos2) {
        let Some(gesture) = self.state.gesture_mut() else {
            return;
        };
        let style = Self::gesture_style(&self.config, gesture);
        let tool = gesture.tool;
        tool.on_pointer_move(gesture, pos, &mut self.canvas, style);
    }

    /// Finishes the running gesture and records it as one action.
    pub fn on_release(&mut self, pos: Pos2) {
        let mut gesture = match self.state.finish() {
            Ok(gesture) => gesture,
            Err(err) => {
                warn!("Ignoring release at {:?}: {}", pos, err);
                return;
            }
        };
        let style = Self::gesture_style(&self.config, &gesture);
        let tool = gesture.tool;
        tool.on_pointer_up(&mut gesture, pos, &mut self.canvas, style);

        let committed = gesture.into_committed();
        debug!("Gesture with {} finished, {} primitives", tool.label(), committed.len());
        self.history.push(Action::Gesture(committed));
    }

    fn gesture_style(config: &EditorConfig, gesture: &Gesture) -> Style {
        gesture
            .style
            .unwrap_or_else(|| gesture.tool.style_for(config))
    }

    // --- History ---

    /// Undoes the most recent action.
    pub fn undo(&mut self) -> EditorResult<usize> {
        if self.state.is_dragging() {
            let err = EditorError::GestureInProgress;
            self.status = err.to_string();
            return Err(err);
        }
        match self.history.undo(&mut self.canvas) {
            Ok(count) => {
                self.status = "Undid last action".to_owned();
                Ok(count)
            }
            Err(err) => {
                self.status = err.to_string();
                Err(err)
            }
        }
    }

    /// Clears the canvas as one undoable action. Returns how many primitives
    /// were removed; an already empty canvas records nothing.
    pub fn clear(&mut self) -> EditorResult<usize> {
        if self.state.is_dragging() {
            let err = EditorError::GestureInProgress;
            self.status = err.to_string();
            return Err(err);
        }
        let count = self.history.clear(&mut self.canvas);
        self.status = "Canvas cleared".to_owned();
        Ok(count)
    }

    // --- Configuration ---

    /// Takes effect from the next press; a running gesture keeps its tool.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.config.tool = tool;
        self.status = format!("Tool: {}", tool.label());
    }

    /// Picking a color while erasing switches back to the pencil.
    pub fn set_color(&mut self, color: Color32) {
        self.config.color = color;
        if self.config.tool == ToolKind::Eraser {
            self.config.tool = ToolKind::Pencil;
            self.status = format!("Tool: {}", ToolKind::Pencil.label());
        } else {
            self.status = format!("Current color: {}", hex(color));
        }
    }

    pub fn set_brush_size(&mut self, size: u8) {
        self.config.brush_size = BrushSize::new(size);
    }

    pub fn set_style_policy(&mut self, policy: StylePolicy) {
        self.config.style_policy = policy;
    }

    /// Existing primitives, eraser strokes included, keep their colors.
    pub fn change_background(&mut self, color: Color32) {
        self.config.background = color;
        self.canvas.change_background(color);
        self.status = format!("Background color: {}", hex(color));
    }

    /// Tracks the pixel size of the drawing area, used as the export page size.
    pub fn resize_canvas(&mut self, size: Vec2) {
        self.canvas.resize(size);
    }

    // --- Export ---

    /// Writes the committed drawing to `path`. The canvas is only read.
    pub fn export_vector(&mut self, path: &Path) -> EditorResult<()> {
        export::export_postscript(&self.canvas, path)?;
        self.status = format!("Saved as .ps: {}", path.display());
        Ok(())
    }

    // --- Flows through the collaborator services ---

    /// Asks for a drawing color. Dismissing the picker changes nothing.
    pub fn choose_color(&mut self, services: &mut dyn EditorServices) -> EditorResult<Color32> {
        let color = services
            .request_color(self.config.color)
            .ok_or(EditorError::UserCancelled)?;
        self.set_color(color);
        Ok(color)
    }

    /// Asks for a background color. Dismissing the picker changes nothing.
    pub fn choose_background(
        &mut self,
        services: &mut dyn EditorServices,
    ) -> EditorResult<Color32> {
        let color = services
            .request_color(self.config.background)
            .ok_or(EditorError::UserCancelled)?;
        self.change_background(color);
        Ok(color)
    }

    /// Asks for a path and exports there, reporting the outcome.
    pub fn save_vector(&mut self, services: &mut dyn EditorServices) -> EditorResult<()> {
        let path = services
            .request_save_path()
            .map(with_vector_extension)
            .ok_or(EditorError::UserCancelled)?;

        match self.export_vector(&path) {
            Ok(()) => {
                services.notify(
                    NoticeKind::Info,
                    "Save",
                    &format!("Drawing saved to PostScript file:\n{}", path.display()),
                );
                Ok(())
            }
            Err(err) => {
                error!("Export failed: {}", err);
                services.notify(
                    NoticeKind::Error,
                    "Error",
                    &format!("Could not save the drawing:\n{err}"),
                );
                Err(err)
            }
        }
    }

    /// Undo from the toolbar or shortcut; "nothing to undo" only reaches the
    /// status bar.
    pub fn undo_with(&mut self, services: &mut dyn EditorServices) {
        if let Err(err) = self.undo() {
            report(services, &err);
        }
    }

    // --- Accessors ---

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn history(&self) -> &ActionLog {
        &self.history
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Text for the status bar
    pub fn status(&self) -> &str {
        &self.status
    }
}

/// Logs an editor error at the level its kind deserves. Only errors are
/// pushed to the user as notifications; informational outcomes already show
/// in the status bar.
pub fn report(services: &mut dyn EditorServices, err: &EditorError) {
    match err.notice_kind() {
        None => debug!("{}", err),
        Some(NoticeKind::Info) => info!("{}", err),
        Some(NoticeKind::Error) => {
            error!("{}", err);
            services.notify(NoticeKind::Error, "Error", &err.to_string());
        }
    }
}

fn hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}
