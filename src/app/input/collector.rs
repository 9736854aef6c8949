//! Raw input collection from winit events

use super::state::{ButtonState, InputState};
use winit::event::{ElementState, WindowEvent};

/// Collects raw input from winit events and maintains InputState
pub struct InputCollector {
    state: InputState,
    scale_factor: f32,
}

impl InputCollector {
    /// Creates a new input collector
    pub fn new() -> Self {
        Self {
            state: InputState::new(),
            scale_factor: 1.0,
        }
    }

    /// Update scale factor (DPI scaling)
    pub fn set_scale_factor(&mut self, scale_factor: f32) {
        self.scale_factor = scale_factor;
    }

    /// Handle a winit window event
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let window_pos = [position.x as f32, position.y as f32];
                let screen_pos = [
                    position.x as f32 / self.scale_factor,
                    position.y as f32 / self.scale_factor,
                ];

                self.state.mouse.window_pos = Some(window_pos);
                self.state.mouse.screen_pos = Some(screen_pos);
            }

            // Outside the window there is no position: hit testing sees None
            WindowEvent::CursorLeft { .. } => {
                self.state.mouse.window_pos = None;
                self.state.mouse.screen_pos = None;
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if *button == winit::event::MouseButton::Left {
                    self.state.mouse.primary = match state {
                        ElementState::Pressed => ButtonState::JustPressed,
                        ElementState::Released => ButtonState::JustReleased,
                    };
                }
            }

            _ => {}
        }
    }

    /// Advance to next frame (transitions edge states to steady states)
    pub fn advance_frame(&mut self) {
        self.state.advance_frame();
    }

    /// Get current input state
    pub fn state(&self) -> &InputState {
        &self.state
    }
}

impl Default for InputCollector {
    fn default() -> Self {
        Self::new()
    }
}
