//! # Payment History Table Module
//!
//! Read-only table of past and scheduled payments, newest first.

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use shared::{format_display_date, PaymentRecord};
use backend::DashboardConfig;
use crate::ui::components::styling::{colors, status_badge};

/// Render the payment history table
pub fn render_payment_history_table(ui: &mut egui::Ui, records: &[PaymentRecord], config: &DashboardConfig) {
    ui.push_id("payment_history_table", |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::exact(100.0)) // Date
            .column(Column::exact(100.0)) // Type
            .column(Column::exact(100.0)) // Amount
            .column(Column::exact(130.0)) // Method
            .column(Column::exact(120.0)) // Status
            .column(Column::remainder()) // Description
            .header(28.0, |mut header| {
                for title in ["Date", "Type", "Amount", "Method", "Status", "Description"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                if records.is_empty() {
                    body.row(48.0, |mut row| {
                        row.col(|_| {});
                        row.col(|_| {});
                        row.col(|ui| {
                            ui.label(egui::RichText::new("No payment history available").color(colors::TEXT_MUTED));
                        });
                        row.col(|_| {});
                        row.col(|_| {});
                        row.col(|_| {});
                    });
                    return;
                }

                for record in records {
                    body.row(36.0, |mut row| {
                        row.col(|ui| {
                            ui.strong(format_display_date(record.date));
                        });
                        row.col(|ui| {
                            ui.label(record.payment_type.label());
                        });
                        row.col(|ui| {
                            ui.strong(config.format_amount(record.amount));
                        });
                        row.col(|ui| {
                            ui.label(config.method_label(&record.payment_method));
                        });
                        row.col(|ui| {
                            let text = format!("{} {}", record.status.icon(), record.status.label());
                            status_badge(ui, &text, record.status.tone());
                        });
                        row.col(|ui| {
                            ui.label(record.description.as_str());
                        });
                    });
                }
            });
    });
}
