pub mod ansi;
pub mod spinner;
pub mod theme;
pub mod widgets;

pub use spinner::get_spinner_char;
