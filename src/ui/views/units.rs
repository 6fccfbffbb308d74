use crate::app::StudyApp;
use egui::{CollapsingHeader, Context, ProgressBar, RichText, ScrollArea};

enum UnitAction {
    Toggle(String),
    Explain(usize, usize),
    Draft(usize, usize),
    StudyPlan,
}

pub fn ui_units(app: &mut StudyApp, ctx: &Context) {
    let mut action = None;

    egui::CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                let max_width = 760.0;
                let panel_width = ui.available_width().min(max_width);
                ui.set_max_width(panel_width);

                ui.add_space(8.0);
                hero_card(app, ui, &mut action);
                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    ui.heading("Course Modules");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.weak(app.overall_progress().label());
                    });
                });
                ui.add_space(4.0);

                for idx in 0..app.course.units.len() {
                    unit_section(app, ui, idx, &mut action);
                    ui.add_space(6.0);
                }
            });
    });

    match action {
        Some(UnitAction::Toggle(id)) => app.toggle_topic(&id),
        Some(UnitAction::Explain(u, t)) => app.explain_topic(u, t),
        Some(UnitAction::Draft(u, q)) => app.draft_pyq_answer(u, q),
        Some(UnitAction::StudyPlan) => app.create_study_plan(),
        None => {}
    }
}

fn hero_card(app: &StudyApp, ui: &mut egui::Ui, action: &mut Option<UnitAction>) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::symmetric(16, 16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.weak("✨ AI-Powered Study Companion");
            ui.heading(RichText::new(&app.course.course_name).size(26.0).strong());
            ui.label(
                "Track your progress, practice repeated questions, and master the \
                 syllabus with intelligent insights.",
            );
            ui.add_space(8.0);
            if ui.button("✨ Create Study Plan").clicked() {
                *action = Some(UnitAction::StudyPlan);
            }
        });
}

fn unit_section(app: &StudyApp, ui: &mut egui::Ui, idx: usize, action: &mut Option<UnitAction>) {
    let info = app.unit_progress(idx);
    let unit = &app.course.units[idx];

    let badge = if info.complete { "✅" } else { "📖" };
    let header = format!("{badge} {}", unit.title);

    CollapsingHeader::new(RichText::new(header).strong())
        .id_salt(unit.id)
        .default_open(true)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.weak(info.summary(unit.pyqs.len()));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(format!("{}%", info.percent));
                });
            });
            ui.add(ProgressBar::new(info.percent as f32 / 100.0));
            ui.add_space(6.0);

            for (t_idx, topic) in unit.topics.iter().enumerate() {
                ui.horizontal(|ui| {
                    let mut checked = app.is_completed(&topic.id);
                    let label = if checked {
                        RichText::new(&topic.name).weak().strikethrough()
                    } else {
                        RichText::new(&topic.name)
                    };
                    if ui.checkbox(&mut checked, label).changed() {
                        *action = Some(UnitAction::Toggle(topic.id.clone()));
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✨ Explain").clicked() {
                            *action = Some(UnitAction::Explain(idx, t_idx));
                        }
                    });
                });
            }

            if !unit.pyqs.is_empty() {
                ui.add_space(6.0);
                ui.weak(RichText::new("REPEATED PYQS").small().strong());
                for (q_idx, pyq) in unit.pyqs.iter().enumerate() {
                    egui::Frame::group(ui.style())
                        .inner_margin(egui::Margin::symmetric(8, 6))
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.label(pyq);
                            if ui.small_button("✨ Generate Answer Draft").clicked() {
                                *action = Some(UnitAction::Draft(idx, q_idx));
                            }
                        });
                }
            }
        });
}
