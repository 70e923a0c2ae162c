pub mod board;
pub mod hooks;
pub mod ui;
