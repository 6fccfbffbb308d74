use crate::app::StudyApp;
use crate::model::ChatRole;
use egui::{Align2, Context, Key, RichText, ScrollArea, vec2};
use egui_commonmark::CommonMarkViewer;

pub fn ui_chat(app: &mut StudyApp, ctx: &Context) {
    if !app.chat_open {
        egui::Area::new(egui::Id::new("chat_launcher"))
            .anchor(Align2::RIGHT_BOTTOM, vec2(-16.0, -40.0))
            .show(ctx, |ui| {
                if ui.button("✨ Ask Copilot").clicked() {
                    app.chat_open = true;
                }
            });
        return;
    }

    // A queued shortcut fires once, on the first frame the window shows.
    if let Some(query) = app.chat.take_seed() {
        app.chat.send(&query);
    }

    let mut open = true;
    egui::Window::new("✨ Exam Copilot")
        .anchor(Align2::RIGHT_BOTTOM, vec2(-16.0, -40.0))
        .default_size([400.0, 520.0])
        .resizable(false)
        .collapsible(false)
        .open(&mut open)
        .show(ctx, |ui| {
            ScrollArea::vertical()
                .max_height(400.0)
                .auto_shrink([false; 2])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    let chat = &app.chat;
                    let cache = &mut app.cm_cache;
                    for msg in &chat.messages {
                        match msg.role {
                            ChatRole::User => {
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::TOP),
                                    |ui| {
                                        ui.add_space(24.0);
                                        ui.label(RichText::new(&msg.text).strong());
                                    },
                                );
                            }
                            ChatRole::Model => {
                                CommonMarkViewer::new().show(ui, cache, &msg.text);
                            }
                        }
                        ui.add_space(8.0);
                    }
                    if chat.is_busy() {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.weak("Thinking…");
                        });
                    }
                });

            ui.separator();
            ui.horizontal(|ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut app.chat.input)
                        .desired_width(ui.available_width() - 64.0)
                        .hint_text("Ask Copilot about Computer Networks…"),
                );
                let enter_pressed =
                    response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
                let can_send = !app.chat.is_busy() && !app.chat.input.trim().is_empty();
                let send_clicked = ui
                    .add_enabled(can_send, egui::Button::new("Send ➤"))
                    .clicked();

                if (enter_pressed || send_clicked) && can_send {
                    let text = app.chat.input.clone();
                    if app.chat.send(&text) {
                        app.chat.input.clear();
                        response.request_focus();
                    }
                }
            });
            ui.vertical_centered(|ui| {
                ui.weak(RichText::new("Powered by Gemini").small());
            });
        });

    if !open {
        app.chat_open = false;
    }
}
