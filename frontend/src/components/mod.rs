pub mod actions;
pub mod form_section;
pub mod handlers;
pub mod header;
pub mod help_modal;
pub mod preview_area;
pub mod theme_toggle;
pub mod utils;
