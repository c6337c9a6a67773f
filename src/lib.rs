#![warn(clippy::all, rust_2018_idioms)]

pub mod action;
pub mod app;
pub mod canvas;
pub mod components;
pub mod config;
pub mod error;
pub mod export;
pub mod id_generator;
pub mod input;
pub mod panels;
pub mod primitive;
pub mod renderer;
pub mod services;
pub mod session;
pub mod state;
pub mod tools;

pub use action::{Action, ActionLog};
pub use app::DrawApp;
pub use canvas::Canvas;
pub use config::{EditorConfig, StylePolicy};
pub use error::{EditorError, ExportError};
pub use id_generator::PrimitiveId;
pub use input::{InputHandler, PointerEvent};
pub use primitive::{BrushSize, Primitive, PrimitiveKind, Style};
pub use renderer::Renderer;
pub use services::{EditorServices, NoticeKind};
pub use session::DrawingSession;
pub use state::EditorState;
pub use tools::{Tool, ToolKind};
