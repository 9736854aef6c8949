//! Press/hover/release edge detection from continuous pointer polling
//!
//! There are no native click events: each frame delivers only the current
//! button state and the region under the pointer. One bit of memory turns
//! that stream into discrete gestures. Actions fire on release, not press.

/// Discrete phase derived from one frame's (button, hit) sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// Pointer over no region
    Idle,
    /// Pointer over region `i`, button up, no press remembered
    Hover(usize),
    /// Button down over region `i` (renders the pressed visual)
    Pressed(usize),
    /// Button came up over region `i` after a remembered press: the
    /// action-triggering edge
    Released(usize),
}

/// One-bit gesture memory carried across frames
///
/// Press is decided by the current sample; release is gated by the remembered
/// press. Whenever the pointer is over no region the memory is cleared, even
/// while the button is held, so a drag that leaves all regions is discarded
/// and a release outside any region performs no action.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gesture {
    pressed: bool,
}

impl Gesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the gesture by one frame's sample
    pub fn step(&mut self, button_down: bool, hit: Option<usize>) -> PointerPhase {
        match hit {
            Some(index) => {
                if button_down {
                    self.pressed = true;
                    PointerPhase::Pressed(index)
                } else if self.pressed {
                    self.pressed = false;
                    PointerPhase::Released(index)
                } else {
                    PointerPhase::Hover(index)
                }
            }
            None => {
                self.pressed = false;
                PointerPhase::Idle
            }
        }
    }

    /// Whether a press is currently remembered
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_then_release_on_region_fires_once() {
        let mut gesture = Gesture::new();
        assert_eq!(gesture.step(true, Some(2)), PointerPhase::Pressed(2));
        assert_eq!(gesture.step(true, Some(2)), PointerPhase::Pressed(2));
        assert_eq!(gesture.step(false, Some(2)), PointerPhase::Released(2));
        // A second up frame is only a hover
        assert_eq!(gesture.step(false, Some(2)), PointerPhase::Hover(2));
    }

    #[test]
    fn test_drag_off_all_regions_cancels_gesture() {
        let mut gesture = Gesture::new();
        assert_eq!(gesture.step(true, Some(0)), PointerPhase::Pressed(0));
        // Still held, but over nothing: gesture is discarded
        assert_eq!(gesture.step(true, None), PointerPhase::Idle);
        assert!(!gesture.is_pressed());
        // Release over nothing performs no action
        assert_eq!(gesture.step(false, None), PointerPhase::Idle);
    }

    #[test]
    fn test_release_off_region_never_triggers_origin() {
        let mut gesture = Gesture::new();
        gesture.step(true, Some(3));
        assert_eq!(gesture.step(false, None), PointerPhase::Idle);
        // Hovering the origin afterwards must not replay the release
        assert_eq!(gesture.step(false, Some(3)), PointerPhase::Hover(3));
    }

    #[test]
    fn test_press_decided_by_current_sample() {
        // A press that starts off-region and is dragged onto a region counts
        // as a press on that region (current-sample rule).
        let mut gesture = Gesture::new();
        assert_eq!(gesture.step(true, None), PointerPhase::Idle);
        assert_eq!(gesture.step(true, Some(1)), PointerPhase::Pressed(1));
        assert_eq!(gesture.step(false, Some(1)), PointerPhase::Released(1));
    }

    #[test]
    fn test_release_follows_pointer_not_press_origin() {
        // Held from region 0 to region 1 without leaving all regions: the
        // release fires on the region under the pointer at release time.
        let mut gesture = Gesture::new();
        gesture.step(true, Some(0));
        gesture.step(true, Some(1));
        assert_eq!(gesture.step(false, Some(1)), PointerPhase::Released(1));
    }

    #[test]
    fn test_hover_without_press() {
        let mut gesture = Gesture::new();
        assert_eq!(gesture.step(false, Some(4)), PointerPhase::Hover(4));
        assert!(!gesture.is_pressed());
    }
}
