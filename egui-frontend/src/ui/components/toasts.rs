//! # Toasts Module
//!
//! Bottom-right notification stack. Destructive notifications get a red
//! accent; every toast can be closed early with its ✖ button.

use eframe::egui;
use std::time::Instant;
use crate::ui::app_state::TeacherDashboardApp;
use crate::ui::components::styling::colors;

const TOAST_WIDTH: f32 = 340.0;

impl TeacherDashboardApp {
    /// Render live toasts and schedule a repaint for the next expiry
    pub fn render_toasts(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        self.toasts.expire(now);
        if self.toasts.is_empty() {
            return;
        }

        let mut dismissed = None;

        // Use Area with Foreground order so toasts stay above the panels
        egui::Area::new(egui::Id::new("toast_stack"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .show(ctx, |ui| {
                ui.set_width(TOAST_WIDTH);
                for toast in self.toasts.toasts() {
                    let destructive = toast.notification.is_destructive();
                    let (fill, title_color, text_color) = if destructive {
                        (colors::TOAST_DESTRUCTIVE, egui::Color32::WHITE, egui::Color32::WHITE)
                    } else {
                        (colors::TOAST_BACKGROUND, colors::TEXT_PRIMARY, colors::TEXT_MUTED)
                    };

                    egui::Frame::none()
                        .fill(fill)
                        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
                        .rounding(egui::Rounding::same(8.0))
                        .shadow(egui::epaint::Shadow {
                            offset: egui::vec2(0.0, 4.0),
                            blur: 12.0,
                            spread: 0.0,
                            color: egui::Color32::from_black_alpha(40),
                        })
                        .inner_margin(egui::Margin::same(12.0))
                        .show(ui, |ui| {
                            ui.set_width(TOAST_WIDTH - 24.0);
                            ui.horizontal(|ui| {
                                ui.label(
                                    egui::RichText::new(&toast.notification.title)
                                        .strong()
                                        .color(title_color),
                                );
                                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                    let close = egui::Button::new(egui::RichText::new("✖").color(text_color))
                                        .frame(false);
                                    if ui.add(close).clicked() {
                                        dismissed = Some(toast.id);
                                    }
                                });
                            });
                            if !toast.notification.description.is_empty() {
                                ui.label(egui::RichText::new(&toast.notification.description).color(text_color));
                            }
                        });
                    ui.add_space(8.0);
                }
            });

        if let Some(id) = dismissed {
            self.toasts.dismiss(id);
        }

        if let Some(remaining) = self.toasts.next_expiry(now) {
            ctx.request_repaint_after(remaining);
        }
    }
}
