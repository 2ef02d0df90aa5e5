//! Main application state: owns the manager element and its edit buffers.

use circlestack_core::{ElementRegistry, StackManager, MANAGER_TAG};
use circlestack_render::{RenderContext, Renderer, SvgRenderer};
use eframe::{App, CreationContext};
use egui::Context;

use crate::ui;

/// Initial window size.
pub const WINDOW_SIZE: [f32; 2] = [420.0, 360.0];

/// Path the "Save SVG" action writes to.
const SVG_EXPORT_PATH: &str = "circle-stack.svg";

/// The manager panel application.
pub struct StackApp {
    manager: StackManager,
    /// Draft text in the color field, committed on focus loss.
    color_draft: String,
    /// Outcome of the last SVG export, shown in the panel.
    export_status: Option<String>,
}

impl StackApp {
    pub fn new(_cc: &CreationContext<'_>) -> Self {
        let registry = ElementRegistry::with_builtins();
        let mut element = registry
            .create(MANAGER_TAG)
            .expect("built-in manager tag is defined");
        element.mounted();
        let manager = match element.into_any().downcast::<StackManager>() {
            Ok(manager) => *manager,
            Err(_) => unreachable!("manager tag instantiates a StackManager"),
        };
        let color_draft = manager.field_value().to_string();
        Self {
            manager,
            color_draft,
            export_status: None,
        }
    }

    fn export_svg(&mut self) {
        let mut renderer = SvgRenderer::new();
        renderer.build_scene(&RenderContext::new(self.manager.stack().layout()));
        match renderer.save(SVG_EXPORT_PATH) {
            Ok(()) => {
                log::info!("saved {SVG_EXPORT_PATH}");
                self.export_status = Some(format!("Saved {SVG_EXPORT_PATH}"));
            }
            Err(err) => {
                log::error!("svg export failed: {err}");
                self.export_status = Some(format!("Export failed: {err}"));
            }
        }
    }
}

impl App for StackApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let panel = egui::CentralPanel::default()
            .show(ctx, |ui| {
                ui::manager_panel(
                    ui,
                    &self.manager,
                    &mut self.color_draft,
                    self.export_status.as_deref(),
                )
            })
            .inner;

        if panel.add_clicked {
            self.manager.add_circle();
        }
        if panel.remove_clicked {
            self.manager.remove_circle();
        }
        if let Some(color) = panel.color_changed {
            self.manager.update_color(&color);
        }
        if panel.export_clicked {
            self.export_svg();
        }

        // The controls mirror the applied color; refresh the draft whenever
        // the field is not being edited.
        if !panel.field_has_focus && self.color_draft != self.manager.field_value() {
            self.color_draft = self.manager.field_value().to_string();
        }
    }
}
