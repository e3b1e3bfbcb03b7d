pub mod layout;
pub mod modal;
pub mod quiz_display;

mod generate;
mod history;
mod shell;

pub use generate::draw_generate_tab;
pub use history::{draw_history_tab, format_generated_date, parse_generated_date};
pub use modal::{draw_modal, is_close_key};
pub use quiz_display::render_quiz;
pub use shell::draw_app;
