//! # Styling Module
//!
//! Global egui style, the dashboard color palette and small drawing helpers
//! (cards, badges, placeholders) shared by every component.
//!
//! ## Key Functions:
//! - `setup_dashboard_style()` - Configure global egui styling
//! - `tone_colors()` - Map a status tone to fill/stroke/text colors
//! - `draw_card()` - Titled white card container
//! - `status_badge()` - Small colored pill with a label
//! - `draw_placeholder()` - Centered "coming soon" block for empty tabs

use eframe::egui;
use egui::Color32;
use shared::StatusTone;

/// Setup the dashboard look for the entire application
pub fn setup_dashboard_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals = egui::Visuals::light();
        style.visuals.panel_fill = colors::PAGE_BACKGROUND;
        style.visuals.window_fill = Color32::WHITE;
        // In egui 0.28 text edits use extreme_bg_color
        style.visuals.extreme_bg_color = Color32::WHITE;

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(24.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(14.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(14.0, egui::FontFamily::Proportional),
        );

        style.spacing.button_padding = egui::vec2(10.0, 6.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(6.0);

        style
    });
}

/// Color constants for the dashboard theme
pub mod colors {
    use eframe::egui::Color32;

    pub const PAGE_BACKGROUND: Color32 = Color32::from_rgb(249, 250, 251);
    pub const CARD_BACKGROUND: Color32 = Color32::WHITE;
    pub const CARD_BORDER: Color32 = Color32::from_rgb(229, 231, 235);

    // Sidebar (slate)
    pub const SIDEBAR_BACKGROUND: Color32 = Color32::from_rgb(15, 23, 42);
    pub const SIDEBAR_ACTIVE: Color32 = Color32::from_rgb(37, 99, 235);
    pub const SIDEBAR_TEXT: Color32 = Color32::from_rgb(203, 213, 225);

    pub const PRIMARY: Color32 = Color32::from_rgb(37, 99, 235);
    pub const PRIMARY_DISABLED: Color32 = Color32::from_rgb(147, 171, 226);
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(17, 24, 39);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(107, 114, 128);
    pub const ERROR: Color32 = Color32::from_rgb(220, 38, 38);

    // Contact strip icons
    pub const EMAIL_ICON: Color32 = Color32::from_rgb(37, 99, 235);
    pub const PHONE_ICON: Color32 = Color32::from_rgb(22, 163, 74);
    pub const LOCATION_ICON: Color32 = Color32::from_rgb(220, 38, 38);

    // Toasts
    pub const TOAST_BACKGROUND: Color32 = Color32::WHITE;
    pub const TOAST_DESTRUCTIVE: Color32 = Color32::from_rgb(220, 38, 38);
}

/// Fill, stroke and text color for a status tone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneColors {
    pub fill: Color32,
    pub stroke: Color32,
    pub text: Color32,
}

pub fn tone_colors(tone: StatusTone) -> ToneColors {
    match tone {
        StatusTone::Success => ToneColors {
            fill: Color32::from_rgb(220, 252, 231),
            stroke: Color32::from_rgb(134, 239, 172),
            text: Color32::from_rgb(22, 101, 52),
        },
        StatusTone::Info => ToneColors {
            fill: Color32::from_rgb(219, 234, 254),
            stroke: Color32::from_rgb(147, 197, 253),
            text: Color32::from_rgb(30, 64, 175),
        },
        StatusTone::Warning => ToneColors {
            fill: Color32::from_rgb(254, 249, 195),
            stroke: Color32::from_rgb(253, 224, 71),
            text: Color32::from_rgb(133, 77, 14),
        },
        StatusTone::Danger => ToneColors {
            fill: Color32::from_rgb(254, 226, 226),
            stroke: Color32::from_rgb(252, 165, 165),
            text: Color32::from_rgb(153, 27, 27),
        },
        StatusTone::Neutral => ToneColors {
            fill: Color32::from_rgb(243, 244, 246),
            stroke: Color32::from_rgb(209, 213, 219),
            text: Color32::from_rgb(31, 41, 55),
        },
    }
}

/// Draw a white card with a heading row. `header_extra` renders right-aligned
/// controls next to the title (e.g. an "Add" button).
pub fn draw_card<R>(
    ui: &mut egui::Ui,
    title: &str,
    header_extra: impl FnOnce(&mut egui::Ui),
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::none()
        .fill(colors::CARD_BACKGROUND)
        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(title)
                        .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(colors::TEXT_PRIMARY),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), header_extra);
            });
            ui.add_space(8.0);
            add_contents(ui)
        })
        .inner
}

/// Small colored pill with a label
pub fn status_badge(ui: &mut egui::Ui, text: &str, tone: StatusTone) -> egui::Response {
    let colors = tone_colors(tone);
    egui::Frame::none()
        .fill(colors.fill)
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::symmetric(6.0, 1.0))
        .show(ui, |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(text)
                        .font(egui::FontId::new(11.0, egui::FontFamily::Proportional))
                        .color(colors.text),
                )
                .selectable(false),
            );
        })
        .response
}

/// Centered placeholder block for sections without content yet
pub fn draw_placeholder(ui: &mut egui::Ui, icon: &str, title: &str, hint: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(
            egui::RichText::new(icon)
                .font(egui::FontId::new(40.0, egui::FontFamily::Proportional))
                .color(Color32::from_rgb(209, 213, 219)),
        );
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(title)
                .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                .strong()
                .color(colors::TEXT_MUTED),
        );
        ui.label(egui::RichText::new(hint).color(colors::TEXT_MUTED));
        ui.add_space(40.0);
    });
}

/// Red error line under a form field
pub fn field_error(ui: &mut egui::Ui, message: Option<&str>) {
    if let Some(message) = message {
        ui.label(
            egui::RichText::new(format!("⚠ {}", message))
                .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                .color(colors::ERROR),
        );
    }
}
