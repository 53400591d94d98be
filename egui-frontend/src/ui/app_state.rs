//! # App State Module
//!
//! This module defines the central application state structure and initialization logic
//! for the teacher dashboard.
//!
//! ## Key Types:
//! - `TeacherDashboardApp` - Main application state struct
//!
//! ## Purpose:
//! The app owns the backend, the teacher profile loaded at startup and all UI state.
//! Components borrow slices of the profile to render and report user intent back
//! through the handler methods below, which return notifications for the toast surface.

use backend::Backend;
use log::info;
use shared::{DashboardSnapshot, Notification, Qualification, QualificationType, ScheduleSlot, TeacherProfile};

use crate::ui::state::{NavigationState, PaymentState, ToastState};

/// Main application struct for the egui teacher dashboard
pub struct TeacherDashboardApp {
    pub backend: Backend,

    /// Canonical in-memory profile for this session
    pub profile: TeacherProfile,

    pub navigation: NavigationState,
    pub payments: PaymentState,
    pub toasts: ToastState,
}

impl TeacherDashboardApp {
    /// Create the app from an initialized backend and its seed data
    pub fn new(backend: Backend, snapshot: DashboardSnapshot) -> Self {
        info!("🚀 Initializing TeacherDashboardApp for {}", snapshot.profile.teacher.name);

        let payments = PaymentState::new(&backend, &snapshot);

        Self {
            backend,
            profile: snapshot.profile,
            navigation: NavigationState::new(),
            payments,
            toasts: ToastState::new(),
        }
    }

    fn notify(&mut self, notification: Notification) {
        self.toasts.push(notification);
    }

    pub fn handle_edit_profile(&mut self) {
        let notification = self.backend.profile_service.edit_intent(&self.profile.teacher);
        self.notify(notification);
    }

    pub fn handle_add_qualification(&mut self, qualification_type: QualificationType) {
        let notification = self.backend.qualification_service.add_intent(qualification_type);
        self.notify(notification);
    }

    pub fn handle_edit_qualification(&mut self, qualification: &Qualification) {
        let notification = self.backend.qualification_service.edit_intent(qualification);
        self.notify(notification);
    }

    pub fn handle_delete_qualification(&mut self, qualification: &Qualification) {
        let notification = self.backend.qualification_service.delete_intent(qualification);
        self.notify(notification);
    }

    pub fn handle_slot_click(&mut self, slot: &ScheduleSlot) {
        let notification = self.backend.schedule_service.slot_click_notification(slot);
        self.notify(notification);
    }

    pub fn handle_submit_payment(&mut self) {
        if let Some(notification) = self.payments.submit(&self.backend) {
            self.notify(notification);
        }
    }

    /// Apply a finished payment submission, if any. Called once per frame.
    pub fn poll_payment_submission(&mut self) {
        if let Some(notification) = self.payments.poll() {
            self.notify(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backend::DashboardConfig;

    fn app() -> TeacherDashboardApp {
        let config = DashboardConfig {
            submission_delay_ms: 5,
            ..DashboardConfig::default()
        };
        let backend = Backend::new(config).expect("Failed to create backend");
        let snapshot = backend.load_snapshot().expect("Failed to load snapshot");
        TeacherDashboardApp::new(backend, snapshot)
    }

    fn last_toast(app: &TeacherDashboardApp) -> Notification {
        app.toasts
            .toasts()
            .last()
            .map(|toast| toast.notification.clone())
            .expect("Expected a toast")
    }

    #[test]
    fn test_intents_raise_toasts() {
        let mut app = app();

        app.handle_edit_profile();
        assert_eq!(last_toast(&app).title, "Edit Profile");

        app.handle_add_qualification(QualificationType::Group);
        assert_eq!(
            last_toast(&app).description,
            "Adding group qualification functionality will be implemented soon."
        );

        let qualification = app.profile.private_qualifications[0].clone();
        app.handle_delete_qualification(&qualification);
        assert!(last_toast(&app).is_destructive());
    }

    #[test]
    fn test_slot_click_raises_toast() {
        let mut app = app();
        let slot = app.profile.schedule[0].clone();

        app.handle_slot_click(&slot);

        assert_eq!(last_toast(&app).description, "Clicked on Tuesday at 3pm - Status: available");
    }

    #[test]
    fn test_empty_form_submit_raises_validation_toast() {
        let mut app = app();

        app.handle_submit_payment();

        assert_eq!(last_toast(&app).title, "Validation Error");
        assert_eq!(app.payments.submission.errors().len(), 4);
    }
}
