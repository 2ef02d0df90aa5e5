//! Button components.

use egui::{vec2, Align2, Color32, CornerRadius, CursorIcon, Sense, Stroke, StrokeKind, Ui};

use crate::{sizing, theme};

/// A labeled action button with a bordered background.
pub struct ActionButton<'a> {
    label: &'a str,
    tooltip: Option<&'a str>,
}

impl<'a> ActionButton<'a> {
    /// Create a new action button.
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            tooltip: None,
        }
    }

    /// Add a hover tooltip.
    pub fn tooltip(mut self, tooltip: &'a str) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let text_width = self.label.len() as f32 * 7.0;
        let size = vec2(text_width.max(60.0) + 16.0, 24.0);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if response.hovered() {
                Color32::from_gray(235)
            } else {
                Color32::from_gray(248)
            };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);
            ui.painter().rect_stroke(
                rect,
                CornerRadius::same(sizing::CORNER_RADIUS),
                Stroke::new(1.0, Color32::from_gray(200)),
                StrokeKind::Inside,
            );

            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.label,
                egui::FontId::proportional(12.0),
                theme::TEXT,
            );
        }

        let clicked = response.clicked();
        let response = response.on_hover_cursor(CursorIcon::PointingHand);
        if let Some(tooltip) = self.tooltip {
            response.on_hover_text(tooltip);
        }
        clicked
    }
}
