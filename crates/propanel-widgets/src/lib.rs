//! egui presentation components for property-panel controls.
//!
//! This crate provides the rendering side of propanel:
//!
//! - **Component**: the mount/unmount contract, local state handles and callbacks
//! - **Slider**: a range slider with separate change and release notifications
//! - **Frame**: the panel frame
//! - **Layout**: row labels and dividers

pub mod component;
pub mod frame;
pub mod layout;
pub mod slider;

pub use component::{Callback, Component, LocalState, Root};
pub use frame::panel_frame;
pub use layout::{row_divider, section_label, DIVIDER_GAP};
pub use slider::{CustomSlider, SliderProps};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
    /// Vertical inner margin of a panel
    pub const PANEL_VERTICAL_PADDING: i8 = 6;
    /// Minimum width of a slider track
    pub const MIN_SLIDER_WIDTH: f32 = 40.0;
    /// Space reserved next to a slider track for its value box
    pub const VALUE_BOX_WIDTH: f32 = 50.0;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
}
