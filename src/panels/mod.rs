mod central_panel;
mod dialogs;
mod menu_bar;
mod status_bar;
mod tools_panel;

pub use central_panel::central_panel;
pub use dialogs::dialogs;
pub use menu_bar::menu_bar;
pub use status_bar::status_bar;
pub use tools_panel::tools_panel;
