use egui::{Key, KeyboardShortcut, Modifiers};

/// Application-wide keyboard accelerators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    New,
    Open,
    Save,
    SaveAs,
    Undo,
    Redo,
}

impl Shortcut {
    // Save As comes before Save: a Ctrl+Shift+S press also matches Ctrl+S
    pub const ALL: [Shortcut; 6] = [
        Shortcut::New,
        Shortcut::Open,
        Shortcut::SaveAs,
        Shortcut::Save,
        Shortcut::Undo,
        Shortcut::Redo,
    ];

    pub fn keyboard(self) -> KeyboardShortcut {
        match self {
            Shortcut::New => KeyboardShortcut::new(Modifiers::COMMAND, Key::N),
            Shortcut::Open => KeyboardShortcut::new(Modifiers::COMMAND, Key::O),
            Shortcut::Save => KeyboardShortcut::new(Modifiers::COMMAND, Key::S),
            Shortcut::SaveAs => {
                KeyboardShortcut::new(Modifiers::COMMAND | Modifiers::SHIFT, Key::S)
            }
            Shortcut::Undo => KeyboardShortcut::new(Modifiers::COMMAND, Key::Z),
            Shortcut::Redo => KeyboardShortcut::new(Modifiers::COMMAND, Key::Y),
        }
    }
}

/// Shortcuts pressed this frame, consumed so widgets don't see them too
pub fn consume_shortcuts(ctx: &egui::Context) -> Vec<Shortcut> {
    ctx.input_mut(|i| {
        Shortcut::ALL
            .into_iter()
            .filter(|shortcut| i.consume_shortcut(&shortcut.keyboard()))
            .collect()
    })
}
