//! UI-Komponenten: Toolbar, Viewport-Zeichnung, Input-Handling, Dialoge.

pub mod canvas;
pub mod input;
pub mod options_dialog;
pub mod status;
pub mod toolbar;
pub mod tooltip_layout;

pub use canvas::render_canvas;
pub use input::InputState;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
pub use tooltip_layout::{place_tooltip, PixelRect};
