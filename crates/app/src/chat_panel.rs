//! Floating chat toggle and the assistant window

use egui::{Align2, Color32, RichText};
use std::time::Duration;

use crate::state::AppState;
use crate::style::{accent, muted};

pub fn show(ctx: &egui::Context, s: &mut AppState) {
    let dark = s.theme.is_dark();

    egui::Area::new(egui::Id::new("chat_toggle"))
        .anchor(Align2::RIGHT_BOTTOM, [-24.0, -24.0])
        .show(ctx, |ui| {
            let label = if s.chat_open { "✕" } else { "💬 Ask my assistant" };
            let button = egui::Button::new(RichText::new(label).size(16.0).color(Color32::WHITE))
                .fill(accent(dark))
                .rounding(20.0);
            if ui.add(button).clicked() {
                s.toggle_chat();
            }
        });

    if !s.chat_open {
        return;
    }

    let mut open = true;
    let title = format!("{}'s Assistant", s.portfolio.personal.first_name());
    egui::Window::new(title)
        .open(&mut open)
        .anchor(Align2::RIGHT_BOTTOM, [-24.0, -72.0])
        .default_width(360.0)
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            let loading = s.chat.is_loading();

            egui::ScrollArea::vertical()
                .max_height(360.0)
                .stick_to_bottom(true)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for msg in s.chat.transcript() {
                        let align = if msg.is_user() {
                            egui::Layout::right_to_left(egui::Align::TOP)
                        } else {
                            egui::Layout::left_to_right(egui::Align::TOP)
                        };
                        ui.with_layout(align, |ui| {
                            ui.set_max_width(280.0);
                            let fill = if msg.is_user() {
                                accent(dark)
                            } else {
                                ui.visuals().faint_bg_color
                            };
                            egui::Frame::none()
                                .fill(fill)
                                .rounding(10.0)
                                .inner_margin(8.0)
                                .show(ui, |ui| {
                                    let text = RichText::new(&msg.content);
                                    let text = if msg.is_user() {
                                        text.color(Color32::WHITE)
                                    } else {
                                        text
                                    };
                                    ui.label(text);
                                });
                        });
                        ui.with_layout(align, |ui| {
                            ui.label(RichText::new(&msg.timestamp).small().color(muted(dark)));
                        });
                    }
                    if loading {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label(RichText::new("Thinking...").italics().color(muted(dark)));
                        });
                    }
                });

            ui.separator();
            let mut send = false;
            ui.horizontal(|ui| {
                let input = ui.add_enabled(
                    !loading,
                    egui::TextEdit::singleline(&mut s.chat_input)
                        .hint_text("Ask about skills, projects...")
                        .desired_width(260.0),
                );
                if input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    send = true;
                }
                let can_send = !loading && !s.chat_input.trim().is_empty();
                if ui.add_enabled(can_send, egui::Button::new("Send")).clicked() {
                    send = true;
                }
            });
            if send {
                s.send_chat(ui.ctx());
            }

            if loading {
                // Keep the spinner moving until the reply lands
                ui.ctx().request_repaint_after(Duration::from_millis(100));
            }
        });

    if !open {
        s.chat_open = false;
    }
}
