mod chart;
pub mod layout;
mod menu;
mod quiz;
mod setup;
mod summary;

pub use chart::draw_chart;
pub use layout::{calculate_choice_grid, calculate_quiz_chunks, calculate_summary_chunks};
pub use menu::{MENU_ITEMS, MenuItem, draw_menu};
pub use quiz::{draw_empty_state, draw_quit_confirmation, draw_quiz};
pub use setup::draw_setup;
pub use summary::draw_summary;
