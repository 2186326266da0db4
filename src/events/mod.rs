pub mod keyboard;
pub mod page;
pub mod pointer;

pub use keyboard::wire_global_keydown;
pub use page::{wire_orientation_change, wire_visibility_change};
pub use pointer::{wire_context_menu, wire_document_click};
