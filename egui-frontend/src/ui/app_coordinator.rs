//! # App Coordinator Module
//!
//! This module contains the main application coordination logic, handling the primary
//! update loop.
//!
//! ## Application Flow:
//! 1. Set up dashboard styling
//! 2. Apply a finished payment submission, if any
//! 3. Render the sidebar
//! 4. Render header and tabbed content in the central panel
//! 5. Render toasts above everything
//!
//! While a payment is in flight the frame loop keeps repainting so the answer
//! is picked up without waiting for user input.

use eframe::egui;
use std::time::Duration;
use crate::ui::app_state::TeacherDashboardApp;
use crate::ui::components::setup_dashboard_style;

const IN_FLIGHT_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

impl eframe::App for TeacherDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        setup_dashboard_style(ctx);

        self.poll_payment_submission();
        if self.payments.is_in_flight() {
            ctx.request_repaint_after(IN_FLIGHT_REPAINT_INTERVAL);
        }

        self.render_sidebar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_source("main_content_scroll")
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.add_space(8.0);
                    self.render_header(ui);
                    ui.add_space(16.0);
                    self.render_main_content(ui);
                    ui.add_space(24.0);
                });
        });

        self.render_toasts(ctx);
    }
}
