use crate::document::Document;
use crate::tools::{Tool, ToolType};

use super::InputEvent;

/// Routes a canvas input event to the active tool
pub fn route_event(event: &InputEvent, tool: &mut ToolType, document: &mut Document) {
    match *event {
        InputEvent::PointerDown { position } => tool.on_pointer_down(position, document),
        InputEvent::PointerMove { position } => tool.on_pointer_move(position, document),
        InputEvent::PointerUp { position } => tool.on_pointer_up(position, document),
    }
}
