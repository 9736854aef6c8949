//! Declarative draw list handed verbatim to the renderer
//!
//! The controller never draws; it emits an ordered list of tagged
//! instructions in back-to-front painter's order. Later entries occlude
//! earlier ones.

use super::region::Rect;
use crate::sim::Industry;

/// Chrome buttons the renderer knows how to label and style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonId {
    ScrollUp,
    ScrollDown,
    ToWorldMap,
    ToMainList,
    Release,
    Industry(Industry),
}

/// Visual variant of a button, resolved by the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVisual {
    Normal,
    Hover,
    Pressed,
    /// Industry button matching the selected virus's current industry
    Selected,
    /// Release button when the selected virus fails validation
    Invalid,
}

/// Static chrome panels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelStyle {
    /// Virus tray background on the main list
    Tray,
    /// Scroll bar track beside the tray
    ScrollTrack,
    /// Bottom info bar on the assembly screen
    InfoBar,
}

/// Text shown on a card (virus, block, or the create-new card)
#[derive(Debug, Clone, PartialEq)]
pub struct CardFace {
    pub title: String,
    pub subtitle: String,
}

impl CardFace {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }
}

/// One draw instruction
#[derive(Debug, Clone, PartialEq)]
pub enum DrawInstr {
    /// Fill the whole frame with the background color
    Clear,
    Panel {
        rect: Rect,
        style: PanelStyle,
    },
    Card {
        rect: Rect,
        face: CardFace,
    },
    Button {
        id: ButtonId,
        rect: Rect,
        visual: ButtonVisual,
    },
    /// Floating tooltip with its bottom-right corner at the pointer
    Tooltip {
        anchor: [f32; 2],
        text: String,
    },
}

/// Ordered frame draw list, the controller's only output artifact
pub type DrawList = Vec<DrawInstr>;
