//! Qualification management intents.
//!
//! Adding, editing and deleting qualifications is not wired to any storage
//! yet. Each intent is logged and answered with the notification the user
//! sees; the profile itself is left untouched.

use log::info;
use shared::{Notification, Qualification, QualificationType};

/// Column heading of the rate column
pub const RATE_COLUMN_TITLE: &str = "Rate ($/hr)";

/// Format an hourly rate for the qualification tables, e.g. "$50.00"
pub fn format_rate(rate: f64) -> String {
    format!("${:.2}", rate)
}

#[derive(Debug, Clone, Default)]
pub struct QualificationService;

impl QualificationService {
    pub fn new() -> Self {
        Self
    }

    pub fn add_intent(&self, qualification_type: QualificationType) -> Notification {
        info!("🎓 Add {} qualification requested", qualification_type);
        Notification::info(
            "Add Qualification",
            format!(
                "Adding {} qualification functionality will be implemented soon.",
                qualification_type
            ),
        )
    }

    pub fn edit_intent(&self, qualification: &Qualification) -> Notification {
        info!("🎓 Edit requested for qualification {} ({})", qualification.id, qualification.name);
        Notification::info(
            "Edit Qualification",
            format!("Editing {} functionality will be implemented soon.", qualification.name),
        )
    }

    pub fn delete_intent(&self, qualification: &Qualification) -> Notification {
        info!("🗑️ Delete requested for qualification {} ({})", qualification.id, qualification.name);
        Notification::destructive(
            "Delete Qualification",
            "Qualification deletion functionality will be implemented soon.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocal_jazz() -> Qualification {
        Qualification {
            id: "2".to_string(),
            name: "Vocal Jazz".to_string(),
            rate: 55.0,
            qualification_type: QualificationType::Private,
        }
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(50.0), "$50.00");
        assert_eq!(format_rate(47.5), "$47.50");
        assert_eq!(format_rate(0.0), "$0.00");
    }

    #[test]
    fn test_add_intent_names_the_category() {
        let service = QualificationService::new();

        let private = service.add_intent(QualificationType::Private);
        assert_eq!(private.title, "Add Qualification");
        assert_eq!(
            private.description,
            "Adding private qualification functionality will be implemented soon."
        );

        let group = service.add_intent(QualificationType::Group);
        assert_eq!(
            group.description,
            "Adding group qualification functionality will be implemented soon."
        );
    }

    #[test]
    fn test_edit_intent_names_the_qualification() {
        let notification = QualificationService::new().edit_intent(&vocal_jazz());
        assert_eq!(notification.title, "Edit Qualification");
        assert_eq!(notification.description, "Editing Vocal Jazz functionality will be implemented soon.");
        assert!(!notification.is_destructive());
    }

    #[test]
    fn test_delete_intent_is_destructive() {
        let notification = QualificationService::new().delete_intent(&vocal_jazz());
        assert_eq!(notification.title, "Delete Qualification");
        assert!(notification.is_destructive());
    }
}
