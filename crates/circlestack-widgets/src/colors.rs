//! Color display and input components.

use egui::{vec2, Color32, CursorIcon, Sense, Stroke, TextEdit, Ui, Vec2};

use crate::{sizing, theme};

/// A circular swatch displaying a color.
pub struct ColorSwatch<'a> {
    color: Color32,
    tooltip: &'a str,
    size: Vec2,
}

impl<'a> ColorSwatch<'a> {
    /// Create a new color swatch.
    pub fn new(color: Color32, tooltip: &'a str) -> Self {
        Self {
            color,
            tooltip,
            size: vec2(sizing::SMALL, sizing::SMALL),
        }
    }

    /// Set the size.
    pub fn size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    /// Show the swatch and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::click());

        if ui.is_rect_visible(rect) {
            let center = rect.center();
            let radius = rect.width().min(rect.height()) / 2.0;
            ui.painter().circle_filled(center, radius, self.color);
            ui.painter()
                .circle_stroke(center, radius, Stroke::new(1.0, theme::BORDER));
        }

        let clicked = response.clicked();
        response
            .on_hover_text(self.tooltip)
            .on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

/// Response from a [`HexColorField`].
pub struct ColorFieldResponse {
    /// Value committed this frame (editing just ended), if any.
    pub committed: Option<String>,
    /// Whether the field currently has keyboard focus.
    pub has_focus: bool,
}

/// A single-line text field for color strings, committing on focus loss.
///
/// The caller owns the edit buffer; the widget reports a committed value
/// once editing ends (Enter surrenders focus in egui, so both Enter and
/// clicking elsewhere commit).
pub struct HexColorField<'a> {
    value: &'a mut String,
    width: f32,
}

impl<'a> HexColorField<'a> {
    /// Create a new color field over the given edit buffer.
    pub fn new(value: &'a mut String) -> Self {
        Self { value, width: 90.0 }
    }

    /// Set the field width.
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Show the field.
    pub fn show(self, ui: &mut Ui) -> ColorFieldResponse {
        let response = ui.add(
            TextEdit::singleline(&mut *self.value)
                .desired_width(self.width)
                .font(egui::TextStyle::Monospace),
        );
        ColorFieldResponse {
            committed: response.lost_focus().then(|| self.value.clone()),
            has_focus: response.has_focus(),
        }
    }
}

/// Check if two colors match (ignoring alpha).
pub fn colors_match(a: Color32, b: Color32) -> bool {
    a.r() == b.r() && a.g() == b.g() && a.b() == b.b()
}

/// Format a color as a lowercase `#rrggbb` hex string.
pub fn color_to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_hex() {
        assert_eq!(color_to_hex(Color32::from_rgb(0, 0xdd, 0)), "#00dd00");
        assert_eq!(color_to_hex(Color32::from_rgb(255, 255, 255)), "#ffffff");
    }

    #[test]
    fn test_colors_match_ignores_alpha() {
        let opaque = Color32::from_rgb(10, 20, 30);
        let translucent = Color32::from_rgba_premultiplied(10, 20, 30, 99);
        assert!(colors_match(opaque, translucent));
        assert!(!colors_match(opaque, Color32::from_rgb(10, 20, 31)));
    }
}
