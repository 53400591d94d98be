//! Teacher profile presentation and intents.

use log::info;
use shared::{format_display_date, Notification, Teacher};

/// Lines of the contact strip under the teacher's name
#[derive(Debug, Clone, PartialEq)]
pub struct ContactDetails {
    pub born: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, Default)]
pub struct ProfileService;

impl ProfileService {
    pub fn new() -> Self {
        Self
    }

    pub fn contact_details(&self, teacher: &Teacher) -> ContactDetails {
        ContactDetails {
            born: format!("Born: {}", format_display_date(teacher.birth_date)),
            email: teacher.email.clone(),
            phone: teacher.phone.clone(),
            location: teacher.location_line(),
        }
    }

    /// Answer to the "Edit Profile" button; profile editing is not available yet
    pub fn edit_intent(&self, teacher: &Teacher) -> Notification {
        info!("👤 Edit profile requested for teacher {}", teacher.id);
        Notification::info("Edit Profile", "Profile editing functionality will be implemented soon.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::Address;

    fn teacher() -> Teacher {
        Teacher {
            id: "1".to_string(),
            name: "Alynia Allan".to_string(),
            role: "Teacher".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1985, 3, 15).unwrap(),
            email: "alyniaallan@example.com".to_string(),
            phone: "(416) 555-9027".to_string(),
            address: Address {
                street: "123 Markham Rd, Apt 1001".to_string(),
                city: "North York, Ontario".to_string(),
                country: "Canada".to_string(),
            },
        }
    }

    #[test]
    fn test_contact_details() {
        let details = ProfileService::new().contact_details(&teacher());
        assert_eq!(details.born, "Born: 3/15/1985");
        assert_eq!(details.email, "alyniaallan@example.com");
        assert_eq!(details.location, "North York, Ontario, Canada");
    }

    #[test]
    fn test_edit_intent() {
        let notification = ProfileService::new().edit_intent(&teacher());
        assert_eq!(notification.title, "Edit Profile");
        assert_eq!(notification.description, "Profile editing functionality will be implemented soon.");
        assert!(!notification.is_destructive());
    }
}
