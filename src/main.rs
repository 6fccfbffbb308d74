use eframe::egui;
use exam_helper::StudyApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1180.0, 780.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "ExamHelper",
        options,
        Box::new(|_cc| Ok(Box::new(StudyApp::new()))),
    )
}
