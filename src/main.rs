//! Queen's Escape GUI
//!
//! A chess-themed sliding puzzle: bring the queen to the goal corner.

use queens_escape::ui::PuzzleApp;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([700.0, 520.0])
            .with_title("Queen's Escape"),
        ..Default::default()
    };

    eframe::run_native(
        "Queen's Escape",
        options,
        Box::new(|cc| Ok(Box::new(PuzzleApp::new(cc)))),
    )
}
