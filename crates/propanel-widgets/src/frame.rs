//! Panel frame.

use egui::{CornerRadius, Frame, Margin, Stroke};

use crate::{sizing, theme};

/// Frame around a property panel. `padding` is the horizontal inner margin,
/// the same inset the rows use for their labels.
pub fn panel_frame(padding: f32) -> Frame {
    let horizontal = padding.round().clamp(0.0, f32::from(i8::MAX)) as i8;
    Frame::new()
        .fill(theme::PANEL_BG)
        .corner_radius(CornerRadius::same(sizing::PANEL_RADIUS))
        .stroke(Stroke::new(1.0, theme::BORDER))
        .inner_margin(Margin::symmetric(horizontal, sizing::PANEL_VERTICAL_PADDING))
}
