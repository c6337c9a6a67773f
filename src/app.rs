use eframe::egui;

use crate::config::EditorConfig;
use crate::error::EditorError;
use crate::input::InputHandler;
use crate::panels::{self, ColorTarget, DialogOutcome, Dialogs};
use crate::renderer::Renderer;
use crate::session::{self, DrawingSession};

/// The eframe application: a thin shell around one [`DrawingSession`].
///
/// Only the editor preferences survive a restart; the drawing does not.
pub struct DrawApp {
    session: DrawingSession,
    renderer: Renderer,
    input: InputHandler,
    dialogs: Dialogs,
}

impl Default for DrawApp {
    fn default() -> Self {
        Self::with_config(EditorConfig::default())
    }
}

impl DrawApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config: EditorConfig = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        log::info!(
            "Starting with tool {}, brush size {}",
            config.tool.label(),
            config.brush_size.get()
        );
        Self::with_config(config)
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            session: DrawingSession::new(config),
            renderer: Renderer::new(),
            input: InputHandler::new(),
            dialogs: Dialogs::default(),
        }
    }

    pub fn session(&self) -> &DrawingSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut DrawingSession {
        &mut self.session
    }

    pub fn dialogs(&self) -> &Dialogs {
        &self.dialogs
    }

    pub fn dialogs_mut(&mut self) -> &mut Dialogs {
        &mut self.dialogs
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub(crate) fn input_and_session(&mut self) -> (&mut InputHandler, &mut DrawingSession) {
        (&mut self.input, &mut self.session)
    }

    pub fn undo(&mut self) {
        let mut services = self.dialogs.services(None);
        self.session.undo_with(&mut services);
    }

    pub fn clear(&mut self) {
        if let Err(err) = self.session.clear() {
            session::report(&mut self.dialogs.services(None), &err);
        }
    }

    /// Feeds a closed picker's answer back into the session
    fn apply_dialog_outcome(&mut self, outcome: DialogOutcome) {
        let mut services = self.dialogs.services(Some(outcome.clone()));
        let result = match outcome {
            DialogOutcome::Color(ColorTarget::Brush, _) => {
                self.session.choose_color(&mut services).map(|_| ())
            }
            DialogOutcome::Color(ColorTarget::Background, _) => {
                self.session.choose_background(&mut services).map(|_| ())
            }
            DialogOutcome::SavePath(_) => self.session.save_vector(&mut services),
        };
        // save_vector already notified about its own failure
        match result {
            Ok(()) | Err(EditorError::Export(_)) => {}
            Err(err) => session::report(&mut services, &err),
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let undo = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Z);
        if ctx.input_mut(|i| i.consume_shortcut(&undo)) {
            self.undo();
        }
    }
}

impl eframe::App for DrawApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self.session.config());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        panels::menu_bar(self, ctx);
        panels::tools_panel(self, ctx);
        panels::status_bar(self, ctx);
        panels::central_panel(self, ctx);

        if let Some(outcome) = self.dialogs.show(ctx) {
            self.apply_dialog_outcome(outcome);
        }
    }
}
