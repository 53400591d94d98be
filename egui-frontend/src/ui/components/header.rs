//! # Header Module
//!
//! Teacher header card: initials avatar, name, role badge, birth date, the
//! "Edit Profile" button and the contact strip (email, phone, location).

use eframe::egui;
use shared::StatusTone;
use crate::ui::app_state::TeacherDashboardApp;
use crate::ui::components::styling::{colors, status_badge};

const AVATAR_SIZE: f32 = 72.0;

impl TeacherDashboardApp {
    /// Render the teacher header
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        let teacher = self.profile.teacher.clone();
        let details = self.backend.profile_service.contact_details(&teacher);
        let mut edit_clicked = false;

        egui::Frame::none()
            .fill(colors::CARD_BACKGROUND)
            .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
            .rounding(egui::Rounding::same(10.0))
            .inner_margin(egui::Margin::same(20.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                ui.horizontal(|ui| {
                    draw_avatar(ui, &teacher.initials());
                    ui.add_space(12.0);

                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new(&teacher.name)
                                .font(egui::FontId::new(24.0, egui::FontFamily::Proportional))
                                .strong()
                                .color(colors::TEXT_PRIMARY),
                        );
                        status_badge(ui, &teacher.role, StatusTone::Neutral);
                        ui.label(egui::RichText::new(&details.born).color(colors::TEXT_MUTED));
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let button = egui::Button::new(
                            egui::RichText::new("✏ Edit Profile").color(egui::Color32::WHITE),
                        )
                        .fill(colors::PRIMARY)
                        .min_size(egui::vec2(130.0, 40.0));
                        if ui.add(button).clicked() {
                            edit_clicked = true;
                        }
                    });
                });

                ui.add_space(12.0);
                ui.separator();
                ui.add_space(4.0);

                ui.horizontal_wrapped(|ui| {
                    contact_item(ui, "✉", colors::EMAIL_ICON, &details.email);
                    ui.add_space(24.0);
                    contact_item(ui, "☎", colors::PHONE_ICON, &details.phone);
                    ui.add_space(24.0);
                    contact_item(ui, "📍", colors::LOCATION_ICON, &details.location);
                });
            });

        if edit_clicked {
            self.handle_edit_profile();
        }
    }
}

fn draw_avatar(ui: &mut egui::Ui, initials: &str) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(AVATAR_SIZE, AVATAR_SIZE), egui::Sense::hover());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), AVATAR_SIZE / 2.0, colors::PRIMARY);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initials,
        egui::FontId::new(26.0, egui::FontFamily::Proportional),
        egui::Color32::WHITE,
    );
}

fn contact_item(ui: &mut egui::Ui, icon: &str, icon_color: egui::Color32, text: &str) {
    ui.label(egui::RichText::new(icon).color(icon_color));
    ui.label(egui::RichText::new(text).color(colors::TEXT_PRIMARY));
}
