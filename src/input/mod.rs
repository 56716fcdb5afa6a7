use egui::Pos2;

mod router;
mod shortcuts;

pub use router::route_event;
pub use shortcuts::{Shortcut, consume_shortcuts};

/// Pointer input on the canvas, in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button went down over the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved while the button is held
    PointerMove { position: Pos2 },
    /// Primary button released (possibly outside the canvas)
    PointerUp { position: Pos2 },
}

/// Turns per-frame pointer state into press/drag/release events
#[derive(Debug, Default, Clone)]
pub struct InputHandler {
    /// Last position seen while the button was held; `None` when released
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self) -> bool {
        self.last_pointer_pos.is_some()
    }

    /// Feed one frame of pointer state.
    ///
    /// `held` is whether the primary button is down on the canvas, `position`
    /// the pointer in canvas coordinates if known. A move event is only
    /// produced when the position actually changed.
    pub fn update(&mut self, held: bool, position: Option<Pos2>) -> Option<InputEvent> {
        match (self.last_pointer_pos, held, position) {
            (None, true, Some(position)) => {
                self.last_pointer_pos = Some(position);
                Some(InputEvent::PointerDown { position })
            }
            (Some(last), true, Some(position)) if position != last => {
                self.last_pointer_pos = Some(position);
                Some(InputEvent::PointerMove { position })
            }
            (Some(last), false, _) => {
                self.last_pointer_pos = None;
                Some(InputEvent::PointerUp {
                    position: position.unwrap_or(last),
                })
            }
            _ => None,
        }
    }

    /// Forget any press in progress, e.g. when a dialog grabs input
    pub fn reset(&mut self) {
        self.last_pointer_pos = None;
    }
}
