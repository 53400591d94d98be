//! # Schedule Grid Module
//!
//! Schedule management card with its sub-tabs. The Schedule sub-tab draws
//! the dense weekly grid (time labels × days); every occupied cell shows a
//! status badge and subject and raises a toast when clicked. Empty cells are
//! inert.

use eframe::egui;
use shared::{DayOfWeek, ScheduleSlot, SlotStatus};
use backend::domain::schedule_service::GridRow;
use crate::ui::app_state::TeacherDashboardApp;
use crate::ui::components::styling::{colors, draw_card, draw_placeholder, tone_colors};
use crate::ui::components::tab_manager::tab_bar;
use crate::ui::state::ScheduleTab;

const TIME_COLUMN_WIDTH: f32 = 80.0;
const CELL_SIZE: egui::Vec2 = egui::vec2(110.0, 56.0);

impl TeacherDashboardApp {
    pub fn render_schedule_card(&mut self, ui: &mut egui::Ui) {
        let mut clicked_slot = None;
        let mut selected_tab = None;

        draw_card(
            ui,
            "Schedule Management",
            |_| {},
            |ui| {
                selected_tab = tab_bar(ui, &ScheduleTab::ALL, self.navigation.schedule_tab, |tab| {
                    format!("{} {}", tab.icon(), tab.label())
                });
                ui.add_space(16.0);

                let tab = selected_tab.unwrap_or(self.navigation.schedule_tab);
                match tab.placeholder() {
                    Some((title, hint)) => draw_placeholder(ui, tab.icon(), title, hint),
                    None => {
                        let grid = self.backend.schedule_service.week_grid(&self.profile.schedule);
                        clicked_slot = render_week_grid(ui, &grid).cloned();
                        ui.add_space(12.0);
                        let counts = self.backend.schedule_service.status_counts(&self.profile.schedule);
                        render_legend(ui, &counts);
                    }
                }
            },
        );

        if let Some(tab) = selected_tab {
            self.navigation.select_schedule_tab(tab);
        }
        if let Some(slot) = clicked_slot {
            self.handle_slot_click(&slot);
        }
    }
}

/// Draw the weekly grid and return the slot whose cell was clicked
pub fn render_week_grid<'a>(ui: &mut egui::Ui, grid: &[GridRow<'a>]) -> Option<&'a ScheduleSlot> {
    let mut clicked = None;

    egui::ScrollArea::both()
        .id_source("schedule_grid_scroll")
        .max_height(520.0)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            egui::Grid::new("schedule_grid")
                .spacing(egui::vec2(4.0, 4.0))
                .min_col_width(TIME_COLUMN_WIDTH)
                .show(ui, |ui| {
                    ui.strong("Time");
                    for day in DayOfWeek::ALL {
                        ui.vertical_centered(|ui| {
                            ui.set_width(CELL_SIZE.x);
                            ui.strong(day.name());
                        });
                    }
                    ui.end_row();

                    for row in grid {
                        ui.label(egui::RichText::new(row.time).color(colors::TEXT_MUTED));
                        for cell in &row.cells {
                            if draw_slot_cell(ui, cell.slot).clicked() {
                                if let Some(slot) = cell.slot {
                                    clicked = Some(slot);
                                }
                            }
                        }
                        ui.end_row();
                    }
                });
        });

    clicked
}

fn draw_slot_cell(ui: &mut egui::Ui, slot: Option<&ScheduleSlot>) -> egui::Response {
    let sense = if slot.is_some() { egui::Sense::click() } else { egui::Sense::hover() };
    let (rect, response) = ui.allocate_exact_size(CELL_SIZE, sense);

    let (fill, stroke) = match slot {
        Some(slot) => {
            let tone = tone_colors(slot.status.tone());
            let fill = if response.hovered() { tone.stroke } else { tone.fill };
            (fill, tone.stroke)
        }
        None => (egui::Color32::WHITE, colors::CARD_BORDER),
    };

    let painter = ui.painter();
    painter.rect(rect, egui::Rounding::same(6.0), fill, egui::Stroke::new(1.0, stroke));

    if let Some(slot) = slot {
        let tone = tone_colors(slot.status.tone());
        let badge_center = match slot.subject {
            Some(_) => rect.center() - egui::vec2(0.0, 9.0),
            None => rect.center(),
        };
        painter.text(
            badge_center,
            egui::Align2::CENTER_CENTER,
            slot.status.label(),
            egui::FontId::new(11.0, egui::FontFamily::Proportional),
            tone.text,
        );
        if let Some(subject) = &slot.subject {
            painter.text(
                rect.center() + egui::vec2(0.0, 9.0),
                egui::Align2::CENTER_CENTER,
                truncate(subject, 16),
                egui::FontId::new(12.0, egui::FontFamily::Proportional),
                tone.text,
            );
        }
    }

    match slot {
        Some(slot) => response.on_hover_text(format!("{} {}-{}", slot.day, slot.start_time, slot.end_time)),
        None => response,
    }
}

fn render_legend(ui: &mut egui::Ui, counts: &[(SlotStatus, usize)]) {
    ui.horizontal_wrapped(|ui| {
        for &(status, count) in counts {
            let tone = tone_colors(status.tone());
            let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
            ui.painter()
                .rect(rect, egui::Rounding::same(3.0), tone.fill, egui::Stroke::new(1.0, tone.stroke));
            ui.label(egui::RichText::new(legend_label(status, count)).size(12.0));
            ui.add_space(8.0);
        }
    });
}

/// Legend entry with the number of slots in that status, e.g. "Booked (2)"
fn legend_label(status: SlotStatus, count: usize) -> String {
    format!("{} ({})", status.label(), count)
}

/// Shorten text to `max_chars`, adding an ellipsis when cut
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut shortened: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    shortened.push('…');
    shortened
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Vocal Jazz", 16), "Vocal Jazz");
        assert_eq!(truncate("Vocal Contemporary", 16), "Vocal Contempor…");
        assert_eq!(truncate("Vocal Contemporary", 16).chars().count(), 16);
    }

    #[test]
    fn test_legend_label_shows_count() {
        assert_eq!(legend_label(SlotStatus::Booked, 2), "Booked (2)");
        assert_eq!(legend_label(SlotStatus::Unavailable, 0), "Unavailable (0)");
    }
}
