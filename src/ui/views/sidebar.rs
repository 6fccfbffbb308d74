use crate::app::StudyApp;
use crate::ui::layout::card;
use crate::ui::views::{countdown, pomodoro};
use egui::{Context, ProgressBar, RichText, ScrollArea};

pub fn ui_sidebar(app: &mut StudyApp, ctx: &Context) {
    egui::SidePanel::right("sidebar")
        .resizable(false)
        .default_width(280.0)
        .show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.add_space(8.0);
                    progress_card(app, ui);
                    ui.add_space(8.0);
                    countdown::ui_countdown(app, ui);
                    ui.add_space(8.0);
                    pomodoro::ui_pomodoro(app, ui);
                    ui.add_space(8.0);
                    help_card(app, ui);
                    ui.add_space(8.0);
                });
        });
}

fn progress_card(app: &mut StudyApp, ui: &mut egui::Ui) {
    let overall = app.overall_progress();
    card(ui, |ui| {
        ui.strong("📊 Overall Progress");
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.weak("Course Completion");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.strong(format!("{}%", overall.percent));
            });
        });
        ui.add(ProgressBar::new(overall.percent as f32 / 100.0));
        ui.add_space(8.0);
        ui.columns(2, |cols| {
            cols[0].vertical(|ui| {
                ui.label(RichText::new(overall.completed.to_string()).heading().strong());
                ui.weak("Topics Done");
            });
            cols[1].vertical(|ui| {
                ui.label(
                    RichText::new(app.course.units.len().to_string())
                        .heading()
                        .strong(),
                );
                ui.weak("Total Units");
            });
        });
    });
}

fn help_card(app: &mut StudyApp, ui: &mut egui::Ui) {
    card(ui, |ui| {
        ui.strong("Need Help?");
        ui.add_space(4.0);
        ui.weak("Your AI tutor is ready to explain concepts and solve doubts.");
        ui.add_space(6.0);
        if ui
            .add_sized([ui.available_width(), 32.0], egui::Button::new("💬 Chat with Tutor"))
            .clicked()
        {
            app.chat_open = true;
        }
    });
}
