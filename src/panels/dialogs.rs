use std::path::PathBuf;

use eframe::egui::{self, Color32};
use egui::color_picker::Alpha;

use crate::services::{EditorServices, NoticeKind, VECTOR_EXTENSION};

/// What a color picker was opened for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTarget {
    Brush,
    Background,
}

/// Result of a modal window closing this frame. `None` payloads mean cancel.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogOutcome {
    Color(ColorTarget, Option<Color32>),
    SavePath(Option<PathBuf>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
enum Modal {
    #[default]
    Closed,
    Color {
        target: ColorTarget,
        color: Color32,
    },
    SavePath {
        path: String,
    },
}

/// Modal windows of the shell: pickers, about box and notifications
#[derive(Debug, Default)]
pub struct Dialogs {
    modal: Modal,
    show_about: bool,
    notices: Vec<Notice>,
}

impl Dialogs {
    pub fn open_color(&mut self, target: ColorTarget, initial: Color32) {
        self.modal = Modal::Color {
            target,
            color: initial,
        };
    }

    pub fn open_save_path(&mut self) {
        self.modal = Modal::SavePath {
            path: format!("drawing.{VECTOR_EXTENSION}"),
        };
    }

    pub fn open_about(&mut self) {
        self.show_about = true;
    }

    /// True while a picker is waiting for the user
    pub fn is_modal_open(&self) -> bool {
        !matches!(self.modal, Modal::Closed)
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Services that answer with `outcome` and queue notifications here
    pub fn services(&mut self, outcome: Option<DialogOutcome>) -> ModalServices<'_> {
        let (color, path) = match outcome {
            Some(DialogOutcome::Color(_, color)) => (color, None),
            Some(DialogOutcome::SavePath(path)) => (None, path),
            None => (None, None),
        };
        ModalServices {
            color,
            path,
            notices: &mut self.notices,
        }
    }

    /// Draws whatever is open; returns the outcome of a picker that closed.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<DialogOutcome> {
        self.show_about_window(ctx);
        self.show_notices(ctx);

        match &mut self.modal {
            Modal::Closed => None,
            Modal::Color { target, color } => {
                let target = *target;
                let title = match target {
                    ColorTarget::Brush => "Choose color",
                    ColorTarget::Background => "Canvas background color",
                };
                let mut outcome = None;
                egui::Window::new(title)
                    .collapsible(false)
                    .resizable(false)
                    .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                    .show(ctx, |ui| {
                        egui::color_picker::color_picker_color32(ui, color, Alpha::Opaque);
                        ui.horizontal(|ui| {
                            if ui.button("OK").clicked() {
                                outcome = Some(DialogOutcome::Color(target, Some(*color)));
                            }
                            if ui.button("Cancel").clicked() {
                                outcome = Some(DialogOutcome::Color(target, None));
                            }
                        });
                    });
                self.close_if(outcome)
            }
            Modal::SavePath { path } => {
                let mut outcome = None;
                egui::Window::new("Save drawing as")
                    .collapsible(false)
                    .resizable(false)
                    .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                    .show(ctx, |ui| {
                        ui.label(format!("PostScript (*.{VECTOR_EXTENSION})"));
                        ui.text_edit_singleline(path);
                        ui.horizontal(|ui| {
                            let trimmed = path.trim();
                            if ui
                                .add_enabled(!trimmed.is_empty(), egui::Button::new("Save"))
                                .clicked()
                            {
                                let path = PathBuf::from(trimmed);
                                outcome = Some(DialogOutcome::SavePath(Some(path)));
                            }
                            if ui.button("Cancel").clicked() {
                                outcome = Some(DialogOutcome::SavePath(None));
                            }
                        });
                    });
                self.close_if(outcome)
            }
        }
    }

    fn close_if(&mut self, outcome: Option<DialogOutcome>) -> Option<DialogOutcome> {
        if outcome.is_some() {
            self.modal = Modal::Closed;
        }
        outcome
    }

    fn show_about_window(&mut self, ctx: &egui::Context) {
        let mut open = self.show_about;
        egui::Window::new("About")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Graphic editor");
                ui.label("Freehand drawing, lines, rectangles and ovals with undo.");
                ui.label("Drawings are saved as PostScript.");
                ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
            });
        self.show_about = open;
    }

    fn show_notices(&mut self, ctx: &egui::Context) {
        let mut dismissed = None;
        for (index, notice) in self.notices.iter().enumerate() {
            egui::Window::new(&notice.title)
                .id(egui::Id::new(("notice", index)))
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    if notice.kind == NoticeKind::Error {
                        ui.colored_label(ui.visuals().error_fg_color, &notice.message);
                    } else {
                        ui.label(&notice.message);
                    }
                    if ui.button("OK").clicked() {
                        dismissed = Some(index);
                    }
                });
        }
        if let Some(index) = dismissed {
            self.notices.remove(index);
        }
    }
}

/// [`EditorServices`] backed by the modal windows.
///
/// egui is immediate mode, so the pickers cannot block: the window collects
/// the answer first and the session is called afterwards with these services
/// holding that answer.
pub struct ModalServices<'a> {
    color: Option<Color32>,
    path: Option<PathBuf>,
    notices: &'a mut Vec<Notice>,
}

impl EditorServices for ModalServices<'_> {
    fn request_color(&mut self, _initial: Color32) -> Option<Color32> {
        self.color.take()
    }

    fn request_save_path(&mut self) -> Option<PathBuf> {
        self.path.take()
    }

    fn notify(&mut self, kind: NoticeKind, title: &str, message: &str) {
        self.notices.push(Notice {
            kind,
            title: title.to_owned(),
            message: message.to_owned(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn services_answer_once_then_cancel() {
        let mut dialogs = Dialogs::default();
        let mut services =
            dialogs.services(Some(DialogOutcome::Color(ColorTarget::Brush, Some(Color32::RED))));

        assert_eq!(services.request_color(Color32::BLACK), Some(Color32::RED));
        assert_eq!(services.request_color(Color32::BLACK), None);
        assert_eq!(services.request_save_path(), None);
    }

    #[test]
    fn notifications_are_queued() {
        let mut dialogs = Dialogs::default();
        dialogs
            .services(None)
            .notify(NoticeKind::Error, "Error", "disk full");

        assert_eq!(dialogs.notices().len(), 1);
        assert_eq!(dialogs.notices()[0].message, "disk full");
    }

    #[test]
    fn save_dialog_suggests_extension() {
        let mut dialogs = Dialogs::default();
        dialogs.open_save_path();
        assert!(dialogs.is_modal_open());
        assert!(matches!(&dialogs.modal, Modal::SavePath { path } if path.ends_with(".ps")));
    }
}
