//! # Qualifications Module
//!
//! Private and group qualification tables. Each table has an "Add" button and
//! per-row edit/delete actions; clicks are collected while rendering and
//! handled afterwards so the profile is not borrowed during the handler.

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use shared::{Qualification, QualificationType};
use backend::domain::qualification_service::{format_rate, RATE_COLUMN_TITLE};
use crate::ui::app_state::TeacherDashboardApp;
use crate::ui::components::styling::{colors, draw_card};

/// What the user clicked in a qualification table
#[derive(Debug, Clone, PartialEq)]
pub enum QualificationAction {
    Add(QualificationType),
    Edit(Qualification),
    Delete(Qualification),
}

impl TeacherDashboardApp {
    pub fn render_qualifications(&mut self, ui: &mut egui::Ui) {
        let mut action = None;

        for qualification_type in [QualificationType::Private, QualificationType::Group] {
            let qualifications = self.profile.qualifications(qualification_type);
            if let Some(clicked) = render_qualification_table(ui, qualification_type, qualifications) {
                action = Some(clicked);
            }
            ui.add_space(16.0);
        }

        match action {
            Some(QualificationAction::Add(qualification_type)) => self.handle_add_qualification(qualification_type),
            Some(QualificationAction::Edit(qualification)) => self.handle_edit_qualification(&qualification),
            Some(QualificationAction::Delete(qualification)) => self.handle_delete_qualification(&qualification),
            None => {}
        }
    }
}

/// Render one qualification card and return the clicked action
pub fn render_qualification_table(
    ui: &mut egui::Ui,
    qualification_type: QualificationType,
    qualifications: &[Qualification],
) -> Option<QualificationAction> {
    let mut action = None;
    let mut add_clicked = false;

    draw_card(
        ui,
        qualification_type.table_title(),
        |ui| {
            add_clicked = ui.button("➕ Add").clicked();
        },
        |ui| {
            ui.push_id(qualification_type.as_str(), |ui| {
                TableBuilder::new(ui)
                    .striped(true)
                    .resizable(false)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                    .column(Column::remainder())
                    .column(Column::exact(110.0))
                    .column(Column::exact(90.0))
                    .header(28.0, |mut header| {
                        header.col(|ui| {
                            ui.strong("Name");
                        });
                        header.col(|ui| {
                            ui.strong(RATE_COLUMN_TITLE);
                        });
                        header.col(|ui| {
                            ui.strong("Actions");
                        });
                    })
                    .body(|mut body| {
                        if qualifications.is_empty() {
                            body.row(36.0, |mut row| {
                                row.col(|ui| {
                                    ui.label(
                                        egui::RichText::new("No qualifications added yet").color(colors::TEXT_MUTED),
                                    );
                                });
                                row.col(|_| {});
                                row.col(|_| {});
                            });
                            return;
                        }

                        for qualification in qualifications {
                            body.row(36.0, |mut row| {
                                row.col(|ui| {
                                    ui.label(&qualification.name);
                                });
                                row.col(|ui| {
                                    ui.label(format_rate(qualification.rate));
                                });
                                row.col(|ui| {
                                    if ui.small_button("✏").on_hover_text("Edit").clicked() {
                                        action = Some(QualificationAction::Edit(qualification.clone()));
                                    }
                                    if ui.small_button("🗑").on_hover_text("Delete").clicked() {
                                        action = Some(QualificationAction::Delete(qualification.clone()));
                                    }
                                });
                            });
                        }
                    });
            });
        },
    );

    if add_clicked {
        action = Some(QualificationAction::Add(qualification_type));
    }
    action
}
