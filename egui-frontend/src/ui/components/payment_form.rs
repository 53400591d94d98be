//! # Payment Form Module
//!
//! Payment management card: the "New Payment" form and the "Payment History"
//! table behind two sub-tabs.
//!
//! ## Form behaviour:
//! - field errors from the last submit attempt are shown under each field
//! - the submit button is disabled and shows a spinner while a payment is in flight
//! - the scheduled date can be typed (YYYY-MM-DD) or picked from a calendar

use chrono::{Local, NaiveDate};
use eframe::egui;
use egui_extras::DatePickerButton;
use shared::{FormErrors, FormField, PaymentForm, PaymentType};
use backend::config::PaymentMethodOption;
use backend::domain::payment_form_service::parse_scheduled_date;
use crate::ui::app_state::TeacherDashboardApp;
use crate::ui::components::payment_history_table::render_payment_history_table;
use crate::ui::components::styling::{colors, draw_card, field_error};
use crate::ui::components::tab_manager::tab_bar;
use crate::ui::state::PaymentTab;

const FIELD_WIDTH: f32 = 260.0;

impl TeacherDashboardApp {
    pub fn render_payment_card(&mut self, ui: &mut egui::Ui) {
        let mut selected_tab = None;
        let mut submit_clicked = false;

        draw_card(
            ui,
            "💳 Payment Management",
            |_| {},
            |ui| {
                selected_tab = tab_bar(ui, &PaymentTab::ALL, self.navigation.payment_tab, |tab| {
                    tab.label().to_string()
                });
                ui.add_space(16.0);

                match selected_tab.unwrap_or(self.navigation.payment_tab) {
                    PaymentTab::NewPayment => {
                        let in_flight = self.payments.is_in_flight();
                        let errors = self.payments.submission.errors().clone();
                        submit_clicked = render_payment_form(
                            ui,
                            self.payments.submission.form_mut(),
                            &errors,
                            &self.backend.config.payment_methods,
                            &self.backend.config.currency_symbol,
                            in_flight,
                        );
                    }
                    PaymentTab::PaymentHistory => {
                        render_payment_history_table(ui, self.payments.history.records(), &self.backend.config);
                    }
                }
            },
        );

        if let Some(tab) = selected_tab {
            self.navigation.select_payment_tab(tab);
        }
        if submit_clicked {
            self.handle_submit_payment();
        }
    }
}

/// Render the new payment form. Returns true when "Schedule Payment" was clicked.
pub fn render_payment_form(
    ui: &mut egui::Ui,
    form: &mut PaymentForm,
    errors: &FormErrors,
    payment_methods: &[PaymentMethodOption],
    currency_symbol: &str,
    in_flight: bool,
) -> bool {
    ui.columns(2, |columns| {
        // Amount
        field_label(&mut columns[0], &format!("Amount ({})", currency_symbol));
        columns[0].horizontal(|ui| {
            ui.label(egui::RichText::new(currency_symbol).color(colors::TEXT_MUTED));
            ui.add(
                egui::TextEdit::singleline(&mut form.amount)
                    .hint_text("0.00")
                    .desired_width(FIELD_WIDTH - 20.0),
            );
        });
        field_error(&mut columns[0], errors.get(FormField::Amount));

        // Payment type
        field_label(&mut columns[1], "Payment Type");
        egui::ComboBox::from_id_source("payment_type")
            .width(FIELD_WIDTH)
            .selected_text(form.payment_type.label())
            .show_ui(&mut columns[1], |ui| {
                for payment_type in PaymentType::ALL {
                    ui.selectable_value(&mut form.payment_type, payment_type, payment_type.label());
                }
            });
    });

    ui.add_space(12.0);

    ui.columns(2, |columns| {
        // Payment method
        field_label(&mut columns[0], "Payment Method");
        let selected_method = payment_methods
            .iter()
            .find(|option| option.value == form.payment_method)
            .map(|option| option.label.as_str())
            .unwrap_or("Select payment method");
        egui::ComboBox::from_id_source("payment_method")
            .width(FIELD_WIDTH)
            .selected_text(selected_method)
            .show_ui(&mut columns[0], |ui| {
                for option in payment_methods {
                    ui.selectable_value(&mut form.payment_method, option.value.clone(), option.label.as_str());
                }
            });
        field_error(&mut columns[0], errors.get(FormField::PaymentMethod));

        // Scheduled date
        field_label(&mut columns[1], "Scheduled Date");
        columns[1].horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut form.scheduled_date)
                    .hint_text("YYYY-MM-DD")
                    .desired_width(FIELD_WIDTH - 50.0),
            );
            let mut picked = picker_date(&form.scheduled_date);
            let response = ui.add(DatePickerButton::new(&mut picked).id_source("scheduled_date_picker"));
            if response.changed() {
                form.scheduled_date = picked.format("%Y-%m-%d").to_string();
                log::info!("📅 Scheduled date picked: {}", form.scheduled_date);
            }
        });
        field_error(&mut columns[1], errors.get(FormField::ScheduledDate));
    });

    ui.add_space(12.0);

    field_label(ui, "Description");
    ui.add(
        egui::TextEdit::multiline(&mut form.description)
            .hint_text("Enter payment description...")
            .desired_rows(3)
            .desired_width(f32::INFINITY),
    );
    field_error(ui, errors.get(FormField::Description));

    ui.add_space(16.0);

    let mut clicked = false;
    ui.horizontal(|ui| {
        if in_flight {
            let button = egui::Button::new(egui::RichText::new("Processing...").color(egui::Color32::WHITE))
                .fill(colors::PRIMARY_DISABLED)
                .min_size(egui::vec2(180.0, 40.0));
            ui.add_enabled(false, button);
            ui.spinner();
        } else {
            let button = egui::Button::new(egui::RichText::new("💳 Schedule Payment").color(egui::Color32::WHITE))
                .fill(colors::PRIMARY)
                .min_size(egui::vec2(180.0, 40.0));
            clicked = ui.add(button).clicked();
        }
    });

    clicked
}

fn field_label(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(text).strong().color(colors::TEXT_PRIMARY));
}

/// Date the calendar popup opens on: the typed date when valid, otherwise today
fn picker_date(input: &str) -> NaiveDate {
    parse_scheduled_date(input).unwrap_or_else(|| Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picker_date_uses_typed_date() {
        assert_eq!(picker_date("2024-06-01"), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn test_picker_date_falls_back_to_today() {
        assert_eq!(picker_date(""), Local::now().date_naive());
    }
}
