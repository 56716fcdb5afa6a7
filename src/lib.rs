#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod color;
pub mod components;
pub mod document;
pub mod element;
pub mod error;
pub mod file_handler;
pub mod history;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod tools;

pub use app::PaintApp;
pub use canvas::{Canvas, ElementId};
pub use color::Color;
pub use document::{APP_NAME, Document};
pub use element::{Element, ElementType, ItemRecord};
pub use error::FormatError;
pub use file_handler::{FilePicker, NativeFilePicker};
pub use history::{History, MAX_UNDO_DEPTH, Snapshot};
pub use input::{InputEvent, InputHandler};
pub use renderer::Renderer;
pub use state::{DocumentSettings, DrawingFile, PersistenceError, UiState};
pub use tools::{Tool, ToolKind, ToolType};
