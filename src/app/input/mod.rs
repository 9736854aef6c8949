//! Input handling
//!
//! Collects raw winit events into a per-frame snapshot:
//!
//! ```text
//! Raw Input (winit) → InputCollector → InputState → PointerSnapshot
//! ```
//!
//! The collector tracks the pointer in both physical and logical
//! coordinates and does its own press/release edge bookkeeping; the game
//! controller only ever sees the flattened [`PointerSnapshot`] each frame.
//!
//! [`PointerSnapshot`]: crate::game::PointerSnapshot

mod collector;
mod state;

pub use collector::InputCollector;
pub use state::{ButtonState, InputState, MouseState};
