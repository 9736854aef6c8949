//! Fixed visual palette and chrome labels

use crate::game::{ButtonId, ButtonVisual, PanelStyle};
use egui::Color32;

/// Palette and typography for the frame painter
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color32,
    pub button: Color32,
    pub button_hover: Color32,
    pub button_pressed: Color32,
    pub button_selected: Color32,
    pub button_invalid: Color32,
    pub tray: Color32,
    pub scroll_track: Color32,
    pub infobar: Color32,
    pub card_fill: Color32,
    pub card_outline: Color32,
    pub text: Color32,
    pub tooltip_fill: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color32::BLACK,
            button: Color32::from_gray(150),
            button_hover: Color32::from_gray(125),
            button_pressed: Color32::from_gray(100),
            button_selected: Color32::from_rgb(75, 150, 75),
            button_invalid: Color32::from_rgb(150, 75, 75),
            tray: Color32::from_gray(50),
            scroll_track: Color32::from_gray(75),
            infobar: Color32::from_gray(50),
            card_fill: Color32::from_gray(75),
            card_outline: Color32::from_gray(200),
            text: Color32::WHITE,
            tooltip_fill: Color32::from_gray(30),
        }
    }
}

impl Theme {
    pub fn button_fill(&self, visual: ButtonVisual) -> Color32 {
        match visual {
            ButtonVisual::Normal => self.button,
            ButtonVisual::Hover => self.button_hover,
            ButtonVisual::Pressed => self.button_pressed,
            ButtonVisual::Selected => self.button_selected,
            ButtonVisual::Invalid => self.button_invalid,
        }
    }

    pub fn panel_fill(&self, style: PanelStyle) -> Color32 {
        match style {
            PanelStyle::Tray => self.tray,
            PanelStyle::ScrollTrack => self.scroll_track,
            PanelStyle::InfoBar => self.infobar,
        }
    }

    pub fn button_label(&self, id: ButtonId) -> &'static str {
        match id {
            ButtonId::ScrollUp => "▲",
            ButtonId::ScrollDown => "▼",
            ButtonId::ToWorldMap => "World",
            ButtonId::ToMainList => "Back",
            ButtonId::Release => "Release!",
            ButtonId::Industry(industry) => industry.label(),
        }
    }
}
