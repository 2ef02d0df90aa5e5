//! The manager panel UI.

use circlestack_core::{Rgba, StackLayout, StackManager};
use circlestack_render::FRAME_COLOR;
use circlestack_widgets::{
    color_to_hex, section_label, ActionButton, ColorSwatch, HexColorField,
};
use egui::{vec2, Color32, CornerRadius, Sense, Stroke, StrokeKind, Ui};

/// What the user did in the panel this frame.
#[derive(Default)]
pub struct PanelResponse {
    pub add_clicked: bool,
    pub remove_clicked: bool,
    /// New color from either control (committed field text or picker change).
    pub color_changed: Option<String>,
    pub export_clicked: bool,
    /// Whether the color field is being edited.
    pub field_has_focus: bool,
}

/// Show the manager panel: the circle stack plus its controls.
pub fn manager_panel(
    ui: &mut Ui,
    manager: &StackManager,
    color_draft: &mut String,
    export_status: Option<&str>,
) -> PanelResponse {
    let mut panel = PanelResponse::default();

    ui.heading("Circle Stack");
    ui.add_space(8.0);

    draw_stack(ui, manager.stack().layout());
    ui.add_space(12.0);

    ui.horizontal(|ui| {
        if ActionButton::new("Add Circle").show(ui) {
            panel.add_clicked = true;
        }
        if ActionButton::new("Remove Circle")
            .tooltip("At least one circle stays")
            .show(ui)
        {
            panel.remove_clicked = true;
        }
    });
    ui.add_space(12.0);

    section_label(ui, "Circle Color (Text)");
    let field = HexColorField::new(color_draft).show(ui);
    panel.field_has_focus = field.has_focus;
    if let Some(committed) = field.committed {
        panel.color_changed = Some(committed);
    }
    ui.add_space(8.0);

    section_label(ui, "Circle Color (Picker)");
    ui.horizontal(|ui| {
        let mut picker = to_color32(Rgba::parse_lossy(manager.picker_value()));
        if ui.color_edit_button_srgba(&mut picker).changed() {
            panel.color_changed = Some(color_to_hex(picker));
        }
        ColorSwatch::new(to_color32(manager.stack().fill()), "Applied color").show(ui);
    });

    ui.add_space(12.0);
    if ActionButton::new("Save SVG")
        .tooltip("Write the stack as an SVG document")
        .show(ui)
    {
        panel.export_clicked = true;
    }
    if let Some(status) = export_status {
        section_label(ui, status);
    }

    panel
}

/// Paint the circle row, clipped to its surface and framed like the
/// document output.
fn draw_stack(ui: &mut Ui, layout: &StackLayout) {
    let size = vec2(layout.width() as f32, layout.height() as f32);
    let (rect, _response) = ui.allocate_exact_size(size, Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    ui.painter().rect_stroke(
        rect,
        CornerRadius::ZERO,
        Stroke::new(1.0, to_color32(FRAME_COLOR)),
        StrokeKind::Outside,
    );

    let painter = ui.painter().with_clip_rect(rect);
    let fill = to_color32(layout.fill);
    for circle in &layout.circles {
        let center = rect.min + vec2(circle.center.x as f32, circle.center.y as f32);
        painter.circle_filled(center, circle.radius as f32, fill);
    }
}

fn to_color32(color: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}
