#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod views;

use app::TransitboardApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_title("Transitboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Transitboard",
        options,
        Box::new(|cc| Ok(Box::new(TransitboardApp::new(cc)))),
    )
}
