pub mod forms;
pub mod pointer;
pub mod scroll;

pub use forms::{wire_anchor_scroll, wire_first_input_focus, wire_submit_guard, wire_theme_toggle};
pub use pointer::wire_pointer_handlers;
pub use scroll::wire_scroll;
