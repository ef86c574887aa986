//! Layout helpers: row dividers and row labels.

use egui::{Stroke, Ui};

use crate::theme;

/// Vertical space taken by a [`row_divider`].
pub const DIVIDER_GAP: f32 = 6.0;

/// Draw the hairline between two panel rows, inset by `inset` on both sides.
pub fn row_divider(ui: &mut Ui, inset: f32) {
    let rect = ui.available_rect_before_wrap();
    let y = rect.top() + DIVIDER_GAP / 2.0;
    let (left, right) = (rect.left() + inset, rect.right() - inset);
    if right > left {
        ui.painter()
            .hline(left..=right, y, Stroke::new(1.0, theme::BORDER));
    }
    ui.add_space(DIVIDER_GAP);
}

/// Draw a controller title (small, muted text).
pub fn section_label(ui: &mut Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(11.0)
            .color(theme::TEXT_MUTED),
    );
}
