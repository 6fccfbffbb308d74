use crate::app::StudyApp;
use crate::countdown::{exam_target, parse_exam_date, time_left};
use crate::ui::layout::card;
use chrono::Local;
use egui::{Color32, Key, RichText, Ui};

pub fn ui_countdown(app: &mut StudyApp, ui: &mut Ui) {
    card(ui, |ui| {
        ui.horizontal(|ui| {
            ui.strong("📅 Exam Countdown");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if app.editing_date {
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut app.date_input)
                            .desired_width(96.0)
                            .hint_text("YYYY-MM-DD"),
                    );
                    let confirmed = response.lost_focus()
                        || ui.input(|i| i.key_pressed(Key::Enter));
                    if confirmed {
                        app.apply_exam_date();
                    }
                } else if ui.small_button("✏").clicked() {
                    app.start_editing_date();
                }
            });
        });
        ui.weak("Keep track of your deadline");
        ui.add_space(6.0);

        let target_date = parse_exam_date(&app.exam_date);
        let remaining = target_date
            .and_then(|date| time_left(exam_target(date), Local::now().naive_local()));

        match remaining {
            Some(tl) => {
                ui.columns(4, |cols| {
                    let cells = [
                        (tl.days, "DAYS"),
                        (tl.hours, "HRS"),
                        (tl.minutes, "MINS"),
                        (tl.seconds, "SECS"),
                    ];
                    for (col, (value, label)) in cols.iter_mut().zip(cells) {
                        col.vertical_centered(|ui| {
                            ui.label(
                                RichText::new(format!("{value:02}"))
                                    .monospace()
                                    .size(22.0)
                                    .strong(),
                            );
                            ui.weak(RichText::new(label).small());
                        });
                    }
                });
                if let Some(date) = target_date {
                    ui.add_space(6.0);
                    ui.vertical_centered(|ui| {
                        ui.weak(format!("Target: {}", date.format("%a, %d %b %Y")));
                    });
                }
            }
            None => {
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new("Exam Started / Ended")
                            .color(Color32::LIGHT_RED)
                            .strong(),
                    );
                    ui.add_space(8.0);
                });
            }
        }

        if !app.message.is_empty() {
            ui.add_space(4.0);
            ui.label(RichText::new(&app.message).color(Color32::YELLOW).small());
        }
    });
}
