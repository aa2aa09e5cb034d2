mod args;
mod commands;
pub mod config;
mod handlers;
mod tui;
pub mod types;
pub mod views;

pub use args::{Cli, Commands};
pub use commands::run;
