use crate::StudyApp;
use egui::{Button, Context, RichText, Ui, Visuals};

pub fn top_panel(app: &StudyApp, ctx: &Context) {
    egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.heading("🎓 ExamHelper");
            ui.label(
                RichText::new(format!("SRM / {}", app.course.course_code))
                    .monospace()
                    .weak(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(app.overall_progress().label());
            });
        });
        ui.add_space(4.0);
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Dark mode").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Light mode").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Card-style frame used by the sidebar widgets.
pub fn card(ui: &mut Ui, inner: impl FnOnce(&mut Ui)) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::symmetric(12, 12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            inner(ui);
        });
}

/// Two equally sized buttons in one row. Returns (left clicked, right clicked).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui
            .add_sized([btn_w, 32.0], Button::new(left_label))
            .clicked();
        clicked_right = ui
            .add_sized([btn_w, 32.0], Button::new(right_label))
            .clicked();
    });
    (clicked_left, clicked_right)
}
