//! Interactive TUI game built on ratatui

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};
pub use rendering::ui;
