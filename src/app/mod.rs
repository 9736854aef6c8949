//! Application shell
//!
//! Windowing, rendering, and input collection. Everything here is plumbing;
//! the rules live in [`crate::game`] and [`crate::sim`].

pub mod config;
mod debug_ui;
pub mod input;
pub mod renderer;
mod runner;
mod window;

pub use config::{AppConfig, WindowConfig};
pub use runner::App;
pub use window::window_attributes_from_config;
