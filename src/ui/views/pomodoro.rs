use crate::app::StudyApp;
use crate::timer::TimerMode;
use crate::ui::layout::{card, two_button_row};
use egui::{ProgressBar, RichText, Ui};

pub fn ui_pomodoro(app: &mut StudyApp, ui: &mut Ui) {
    card(ui, |ui| {
        ui.horizontal(|ui| {
            ui.strong("⏱ Focus Timer");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                for mode in [TimerMode::Break, TimerMode::Focus] {
                    let selected = app.focus.mode == mode;
                    if ui.selectable_label(selected, mode.label()).clicked() && !selected {
                        app.focus.switch_mode(mode);
                    }
                }
            });
        });
        ui.add_space(8.0);

        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!("{:02}:{:02}", app.focus.minutes, app.focus.seconds))
                    .monospace()
                    .size(36.0)
                    .strong(),
            );
            ui.weak(if app.focus.running { "RUNNING" } else { "PAUSED" });
        });
        ui.add_space(6.0);
        ui.add(ProgressBar::new(app.focus.progress()));
        ui.add_space(8.0);

        let start_label = if app.focus.running {
            "⏸ Pause"
        } else {
            "▶ Start"
        };
        let (start_pause, reset) =
            two_button_row(ui, ui.available_width(), start_label, "⟲ Reset");
        if start_pause {
            app.focus.start_pause();
        }
        if reset {
            app.focus.reset();
        }
    });
}
