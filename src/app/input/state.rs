//! Raw pointer state

use crate::game::PointerSnapshot;

/// Raw pointer state snapshot for a single frame
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub mouse: MouseState,
    pub time: f64,
}

/// Mouse input state
#[derive(Debug, Clone, Default)]
pub struct MouseState {
    /// Window coordinates (physical pixels)
    pub window_pos: Option<[f32; 2]>,
    /// DPI-scaled logical coordinates (screen space)
    pub screen_pos: Option<[f32; 2]>,
    /// Primary (left) button state
    pub primary: ButtonState,
}

/// Button press state with edge detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Released,
    /// Pressed this frame (edge)
    JustPressed,
    /// Held down (multiple frames)
    Pressed,
    /// Released this frame (edge)
    JustReleased,
}

impl ButtonState {
    /// Advance state for next frame (transitions edges to steady states)
    pub fn advance(self) -> Self {
        match self {
            Self::JustPressed => Self::Pressed,
            Self::JustReleased => Self::Released,
            state => state,
        }
    }

    /// Returns true if button is currently down (just pressed or held)
    pub fn is_down(self) -> bool {
        matches!(self, Self::JustPressed | Self::Pressed)
    }
}

impl InputState {
    /// Creates a new empty input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance all button states for next frame
    pub fn advance_frame(&mut self) {
        self.mouse.primary = self.mouse.primary.advance();
    }

    /// Flattens this state into the snapshot the game controller polls.
    ///
    /// The controller works in logical coordinates and only cares whether
    /// the primary button is down, not about edges; it derives its own.
    pub fn pointer_snapshot(&self) -> PointerSnapshot {
        PointerSnapshot {
            pos: self.mouse.screen_pos,
            primary_down: self.mouse.primary.is_down(),
        }
    }
}
