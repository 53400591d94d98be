//! # Tab Manager Module
//!
//! Tab bars and content routing for the main tabs under the header.
//!
//! ## Tab Flow:
//! - MainTab::Profile -> profile details placeholder
//! - MainTab::Qualifications -> private and group qualification tables
//! - MainTab::Schedule -> schedule management card
//! - MainTab::Payments -> payment management card

use eframe::egui;
use crate::ui::app_state::TeacherDashboardApp;
use crate::ui::components::styling::{colors, draw_placeholder};
use crate::ui::state::MainTab;

/// Render a row of equally wide tab buttons and return the clicked one, if any
pub fn tab_bar<T: Copy + PartialEq>(
    ui: &mut egui::Ui,
    tabs: &[T],
    selected: T,
    label: impl Fn(T) -> String,
) -> Option<T> {
    let mut clicked = None;
    let count = tabs.len().max(1) as f32;

    egui::Frame::none()
        .fill(egui::Color32::from_rgb(241, 245, 249))
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::same(4.0))
        .show(ui, |ui| {
            let spacing = ui.spacing().item_spacing.x;
            let width = (ui.available_width() - spacing * (count - 1.0)) / count;
            ui.horizontal(|ui| {
                for &tab in tabs {
                    let active = tab == selected;
                    let (fill, text_color) = if active {
                        (egui::Color32::WHITE, colors::TEXT_PRIMARY)
                    } else {
                        (egui::Color32::TRANSPARENT, colors::TEXT_MUTED)
                    };
                    let button = egui::Button::new(egui::RichText::new(label(tab)).color(text_color))
                        .fill(fill)
                        .stroke(egui::Stroke::NONE)
                        .min_size(egui::vec2(width, 32.0));
                    if ui.add(button).clicked() && !active {
                        clicked = Some(tab);
                    }
                }
            });
        });

    clicked
}

impl TeacherDashboardApp {
    /// Render the main tab bar and the content of the selected tab
    pub fn render_main_content(&mut self, ui: &mut egui::Ui) {
        let selected = self.navigation.main_tab;
        if let Some(tab) = tab_bar(ui, &MainTab::ALL, selected, |tab| format!("{} {}", tab.icon(), tab.label())) {
            self.navigation.select_main_tab(tab);
        }

        ui.add_space(16.0);

        match self.navigation.main_tab {
            MainTab::Profile => {
                draw_placeholder(ui, "👤", "Profile Details", "Detailed profile information and settings");
            }
            MainTab::Qualifications => self.render_qualifications(ui),
            MainTab::Schedule => self.render_schedule_card(ui),
            MainTab::Payments => self.render_payment_card(ui),
        }
    }
}
