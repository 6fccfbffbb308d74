pub mod layout;
pub mod views;

use crate::app::StudyApp;
use crate::audio;
use eframe::{App, Frame};
use egui::Context;
use std::time::{Duration, Instant};

impl App for StudyApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Background results first: focus ticks, then any tutor reply.
        if self.focus.poll(Instant::now()) {
            audio::play_alarm();
        }
        self.chat.poll_reply();

        layout::top_panel(self, ctx);
        layout::bottom_panel(ctx);
        views::sidebar::ui_sidebar(self, ctx);
        views::units::ui_units(self, ctx);
        views::chat::ui_chat(self, ctx);

        // The countdown card is always on screen, so a one-second cadence
        // is the idle floor; poll faster only while a reply is in flight.
        // Nothing is scheduled once the window closes.
        let cadence = if self.chat.is_busy() {
            Duration::from_millis(200)
        } else {
            Duration::from_secs(1)
        };
        ctx.request_repaint_after(cadence);
    }
}
