//! Executes the controller's draw list with the egui painter
//!
//! Instructions are painted in list order; later entries occlude earlier
//! ones. All geometry arrives in logical pixels, which is the coordinate
//! space egui paints in, so rects map across directly.

use super::theme::Theme;
use crate::game::{DrawInstr, Rect};
use egui::{Align2, CornerRadius, FontId, Painter, Stroke, StrokeKind, pos2, vec2};

const CARD_PAD: f32 = 6.0;
const TOOLTIP_PAD: f32 = 4.0;

fn to_egui(rect: Rect) -> egui::Rect {
    egui::Rect::from_min_size(pos2(rect.x, rect.y), vec2(rect.width, rect.height))
}

/// Paints one frame's draw list
pub fn paint(painter: &Painter, theme: &Theme, list: &[DrawInstr]) {
    for instr in list {
        match instr {
            DrawInstr::Clear => {
                painter.rect_filled(painter.clip_rect(), CornerRadius::ZERO, theme.background);
            }

            DrawInstr::Panel { rect, style } => {
                painter.rect_filled(to_egui(*rect), CornerRadius::ZERO, theme.panel_fill(*style));
            }

            DrawInstr::Card { rect, face } => {
                let rect = to_egui(*rect);
                painter.rect_filled(rect, CornerRadius::ZERO, theme.card_fill);
                painter.rect_stroke(
                    rect,
                    CornerRadius::ZERO,
                    Stroke::new(2.0, theme.card_outline),
                    StrokeKind::Inside,
                );
                painter.text(
                    rect.left_top() + vec2(CARD_PAD, CARD_PAD),
                    Align2::LEFT_TOP,
                    &face.title,
                    FontId::proportional(14.0),
                    theme.text,
                );
                if !face.subtitle.is_empty() {
                    painter.text(
                        rect.left_bottom() + vec2(CARD_PAD, -CARD_PAD),
                        Align2::LEFT_BOTTOM,
                        &face.subtitle,
                        FontId::proportional(11.0),
                        theme.text,
                    );
                }
            }

            DrawInstr::Button { id, rect, visual } => {
                let rect = to_egui(*rect);
                painter.rect_filled(rect, CornerRadius::ZERO, theme.button_fill(*visual));
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    theme.button_label(*id),
                    FontId::proportional(14.0),
                    theme.text,
                );
            }

            DrawInstr::Tooltip { anchor, text } => {
                let galley =
                    painter.layout_no_wrap(text.clone(), FontId::proportional(12.0), theme.text);
                let size = galley.size() + vec2(TOOLTIP_PAD * 2.0, TOOLTIP_PAD * 2.0);
                // Bottom-right corner sits at the pointer
                let rect = egui::Rect::from_min_size(pos2(anchor[0], anchor[1]) - size, size);
                painter.rect_filled(rect, CornerRadius::ZERO, theme.tooltip_fill);
                painter.rect_stroke(
                    rect,
                    CornerRadius::ZERO,
                    Stroke::new(1.0, theme.card_outline),
                    StrokeKind::Inside,
                );
                painter.galley(
                    rect.min + vec2(TOOLTIP_PAD, TOOLTIP_PAD),
                    galley,
                    theme.text,
                );
            }
        }
    }
}
