//! Interactive TUI mode

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, PlayOptions, Statistics, run_tui};
