//! # App Coordinator Module
//!
//! This module contains the main update loop of the app.
//!
//! ## Application Flow:
//! 1. Translate this frame's egui input and route it (popup first)
//! 2. Advance animations, unless the popup is open
//! 3. Push a pending window title to the viewport
//! 4. Paint the popup, or the active screen
//! 5. Keep repainting while something is animating
//!
//! This is the main entry point that ties together all other UI modules.

use eframe::egui;

use crate::ui::app_state::TodoBingoApp;
use crate::ui::components::widgets::RenderContext;
use crate::ui::input::collect_input_events;

impl eframe::App for TodoBingoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = collect_input_events(ctx);
        self.handle_events(&events);

        // The screen under a modal is frozen
        let animating = !self.modal.is_open();
        if animating {
            let dt = ctx.input(|i| i.stable_dt);
            self.screens.update(dt, &self.store);
        }

        if let Some(title) = self.pending_title.take() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.to_string()));
        }

        let canvas = self.canvas_rect();
        let pointer = ctx.input(|i| i.pointer.hover_pos());

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let painter = ui.painter();

                match &self.modal.reward_popup {
                    Some(popup) => popup.render(painter, canvas, pointer),
                    None => {
                        let render_ctx = RenderContext {
                            painter,
                            canvas,
                            pointer,
                            assets: &self.assets,
                            store: &self.store,
                        };
                        self.screens.render(&render_ctx);
                    }
                }
            });

        if animating && self.screens.is_animating() {
            ctx.request_repaint();
        }
    }
}
