pub mod find;
pub mod tui;
