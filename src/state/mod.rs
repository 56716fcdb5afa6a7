mod persistence;
mod settings;
mod ui_state;

pub use persistence::{
    DrawingFile,
    FILE_EXTENSION,
    PersistenceError,
    PersistenceResult,
    load,
    save,
};
pub use settings::{
    BRUSH_PRESETS,
    BRUSH_SIZE_RANGE,
    DEFAULT_BRUSH_SIZE,
    DocumentSettings,
    Preferences,
};
pub use ui_state::{Dialog, FileAction, UiState, UnsavedChoice};
