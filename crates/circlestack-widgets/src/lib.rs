//! Reusable egui widget components for the CircleStack manager panel.
//!
//! - **Buttons**: labeled action buttons
//! - **Colors**: color swatch, hex color field, color conversion helpers
//! - **Layout**: section labels, separators, panel frames

pub mod buttons;
pub mod colors;
pub mod layout;

pub use buttons::ActionButton;
pub use colors::{color_to_hex, colors_match, ColorFieldResponse, ColorSwatch, HexColorField};
pub use layout::{panel_frame, section_label, separator};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Small widget size (color swatches)
    pub const SMALL: f32 = 20.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(245, 245, 245);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
}
