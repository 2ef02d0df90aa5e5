//! Main application entry point.

mod app;
mod ui;

use app::StackApp;

fn main() -> eframe::Result {
    env_logger::init();
    log::info!("Starting CircleStack");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(app::WINDOW_SIZE)
            .with_title("Circle Stack"),
        ..Default::default()
    };
    eframe::run_native(
        "circlestack",
        options,
        Box::new(|cc| Ok(Box::new(StackApp::new(cc)))),
    )
}
