//! # Sidebar Module
//!
//! Collapsible navigation sidebar. Only the Teachers page exists, so the
//! other entries are rendered but do nothing when clicked.

use eframe::egui;
use crate::ui::app_state::TeacherDashboardApp;
use crate::ui::components::styling::colors;
use crate::ui::state::SidebarItem;

const EXPANDED_WIDTH: f32 = 220.0;
const COLLAPSED_WIDTH: f32 = 64.0;

impl TeacherDashboardApp {
    /// Render the sidebar as a left side panel
    pub fn render_sidebar(&mut self, ctx: &egui::Context) {
        let collapsed = self.navigation.sidebar_collapsed;
        let width = if collapsed { COLLAPSED_WIDTH } else { EXPANDED_WIDTH };

        egui::SidePanel::left("navigation_sidebar")
            .resizable(false)
            .exact_width(width)
            .frame(
                egui::Frame::none()
                    .fill(colors::SIDEBAR_BACKGROUND)
                    .inner_margin(egui::Margin::symmetric(8.0, 16.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if !collapsed {
                        ui.add_space(8.0);
                        ui.label(
                            egui::RichText::new("EduManage")
                                .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                                .strong()
                                .color(egui::Color32::WHITE),
                        );
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let toggle_icon = if collapsed { "▶" } else { "◀" };
                        let toggle = ui.add(
                            egui::Button::new(egui::RichText::new(toggle_icon).color(colors::SIDEBAR_TEXT))
                                .frame(false),
                        );
                        if toggle.clicked() {
                            self.navigation.toggle_sidebar();
                        }
                    });
                });

                ui.add_space(20.0);

                for item in SidebarItem::ALL {
                    self.render_sidebar_item(ui, item, collapsed);
                }
            });
    }

    fn render_sidebar_item(&mut self, ui: &mut egui::Ui, item: SidebarItem, collapsed: bool) {
        let active = self.navigation.active_sidebar_item == item;
        let text = if collapsed {
            item.icon().to_string()
        } else {
            format!("{}  {}", item.icon(), item.label())
        };

        let (fill, text_color) = if active {
            (colors::SIDEBAR_ACTIVE, egui::Color32::WHITE)
        } else {
            (egui::Color32::TRANSPARENT, colors::SIDEBAR_TEXT)
        };

        let button = egui::Button::new(
            egui::RichText::new(text)
                .font(egui::FontId::new(15.0, egui::FontFamily::Proportional))
                .color(text_color),
        )
        .fill(fill)
        .stroke(egui::Stroke::NONE)
        .min_size(egui::vec2(ui.available_width(), 36.0));

        let response = ui.add(button);
        let response = if collapsed { response.on_hover_text(item.label()) } else { response };

        if response.clicked() && !active {
            log::info!("🧭 Sidebar entry {} has no page yet", item.label());
        }
    }
}
