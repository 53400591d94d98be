use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Half-hour labels shown down the left edge of the weekly schedule grid.
///
/// Slot start and end times are expected to be one of these exact strings;
/// lookups never normalize ("3pm" and "3:00pm" are different labels).
pub const TIME_SLOTS: [&str; 22] = [
    "7:30am", "8am", "8:30am", "9am", "9:30am", "10am", "10:30am", "11am", "11:30am", "12pm",
    "12:30pm", "1pm", "1:30pm", "2pm", "2:30pm", "3pm", "3:30pm", "4pm", "4:30pm", "5pm",
    "5:30pm", "6pm",
];

/// Check whether a label belongs to the fixed half-hour grid
pub fn is_known_time_label(label: &str) -> bool {
    TIME_SLOTS.contains(&label)
}

/// Postal address of a teacher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    /// City and region, e.g. "North York, Ontario"
    pub city: String,
    pub country: String,
}

/// The teacher whose profile the dashboard manages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: String,
    /// Display name, e.g. "Alynia Allan"
    pub name: String,
    /// Role label rendered as a badge under the name
    pub role: String,
    pub birth_date: NaiveDate,
    pub email: String,
    pub phone: String,
    pub address: Address,
}

impl Teacher {
    /// Avatar initials: the first character of every name part
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }

    /// City and country line shown in the contact strip
    pub fn location_line(&self) -> String {
        format!("{}, {}", self.address.city, self.address.country)
    }
}

/// Whether a qualification is taught one-to-one or to a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualificationType {
    Private,
    Group,
}

impl QualificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualificationType::Private => "private",
            QualificationType::Group => "group",
        }
    }

    /// Heading used for the qualification table of this category
    pub fn table_title(&self) -> &'static str {
        match self {
            QualificationType::Private => "Private Qualifications",
            QualificationType::Group => "Group Qualifications",
        }
    }
}

impl fmt::Display for QualificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A teachable skill paired with an hourly rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Qualification {
    pub id: String,
    pub name: String,
    /// Hourly rate in the dashboard currency (never negative)
    pub rate: f64,
    #[serde(rename = "type")]
    pub qualification_type: QualificationType,
}

/// Day column of the weekly schedule grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// Grid column order, Monday first
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name a day of the week
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownDayError(pub String);

impl fmt::Display for UnknownDayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown day of week: {}", self.0)
    }
}

impl std::error::Error for UnknownDayError {}

impl FromStr for DayOfWeek {
    type Err = UnknownDayError;

    /// Case-insensitive parse of a full day name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayOfWeek::ALL
            .iter()
            .copied()
            .find(|day| day.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownDayError(s.to_string()))
    }
}

impl TryFrom<String> for DayOfWeek {
    type Error = UnknownDayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Visual tone shared by every status badge in the dashboard.
///
/// The presentation layer maps each tone to concrete colors, so statuses only
/// decide *which* tone they use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusTone {
    Success,
    Info,
    Warning,
    Danger,
    Neutral,
}

/// Booking state of a schedule slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Available,
    Booked,
    Unavailable,
}

impl SlotStatus {
    pub const ALL: [SlotStatus; 3] = [SlotStatus::Available, SlotStatus::Booked, SlotStatus::Unavailable];

    pub fn as_str(&self) -> &'static str {
        match self {
            SlotStatus::Available => "available",
            SlotStatus::Booked => "booked",
            SlotStatus::Unavailable => "unavailable",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SlotStatus::Available => "Available",
            SlotStatus::Booked => "Booked",
            SlotStatus::Unavailable => "Unavailable",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            SlotStatus::Available => StatusTone::Success,
            SlotStatus::Booked => StatusTone::Info,
            SlotStatus::Unavailable => StatusTone::Neutral,
        }
    }
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single occupied cell of the weekly calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSlot {
    pub id: String,
    pub day: DayOfWeek,
    /// Start label from [`TIME_SLOTS`]; this is the lookup key together with `day`
    pub start_time: String,
    pub end_time: String,
    pub status: SlotStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

/// Everything the dashboard knows about one teacher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherProfile {
    pub teacher: Teacher,
    pub private_qualifications: Vec<Qualification>,
    pub group_qualifications: Vec<Qualification>,
    pub schedule: Vec<ScheduleSlot>,
}

impl TeacherProfile {
    /// Qualifications of one category, in stored order
    pub fn qualifications(&self, qualification_type: QualificationType) -> &[Qualification] {
        match qualification_type {
            QualificationType::Private => &self.private_qualifications,
            QualificationType::Group => &self.group_qualifications,
        }
    }
}

/// Kind of payment made to a teacher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    #[default]
    Salary,
    Bonus,
    Commission,
}

impl PaymentType {
    pub const ALL: [PaymentType; 3] = [PaymentType::Salary, PaymentType::Bonus, PaymentType::Commission];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentType::Salary => "Salary",
            PaymentType::Bonus => "Bonus",
            PaymentType::Commission => "Commission",
        }
    }
}

/// Processing state of a recorded payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Processing => "Processing",
            PaymentStatus::Completed => "Completed",
            PaymentStatus::Failed => "Failed",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            PaymentStatus::Pending => StatusTone::Warning,
            PaymentStatus::Processing => StatusTone::Info,
            PaymentStatus::Completed => StatusTone::Success,
            PaymentStatus::Failed => StatusTone::Danger,
        }
    }

    /// Glyph drawn inside the status badge
    pub fn icon(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "🕑",
            PaymentStatus::Processing => "⟳",
            PaymentStatus::Completed => "✔",
            PaymentStatus::Failed => "✖",
        }
    }
}

/// An immutable entry of the payment history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub id: String,
    pub teacher_id: String,
    pub amount: f64,
    /// ISO currency code, e.g. "USD"
    pub currency: String,
    #[serde(rename = "type")]
    pub payment_type: PaymentType,
    pub status: PaymentStatus,
    pub date: NaiveDate,
    pub description: String,
    /// Selected method value, e.g. "bank-transfer"
    pub payment_method: String,
}

/// Turn a dashed method value into a label with every word capitalized
/// ("bank-transfer" -> "Bank Transfer")
pub fn humanize_method(value: &str) -> String {
    value
        .split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Short calendar date as shown in the header and history table, e.g. "3/15/1985"
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Raw, unvalidated input of the new payment form
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentForm {
    /// Amount exactly as typed
    pub amount: String,
    #[serde(rename = "type")]
    pub payment_type: PaymentType,
    pub description: String,
    /// Selected method value; empty until the user picks one
    pub payment_method: String,
    /// Selected date as `YYYY-MM-DD`; empty until the user picks one
    pub scheduled_date: String,
}

/// Fields of [`PaymentForm`] that can carry a validation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Amount,
    Description,
    PaymentMethod,
    ScheduledDate,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Amount => "amount",
            FormField::Description => "description",
            FormField::PaymentMethod => "paymentMethod",
            FormField::ScheduledDate => "scheduledDate",
        }
    }
}

/// Per-field validation messages. A missing key means the field is valid.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<FormField, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Visual variant of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationVariant {
    Default,
    Destructive,
}

/// User-facing message produced by an intent handler or workflow transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

/// Everything seeded into the dashboard at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub profile: TeacherProfile,
    #[serde(default)]
    pub payment_history: Vec<PaymentRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_teacher() -> Teacher {
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
    fn test_teacher_initials_and_location() {
        let teacher = sample_teacher();
        assert_eq!(teacher.initials(), "AA");
        assert_eq!(teacher.location_line(), "North York, Ontario, Canada");
    }

    #[test]
    fn test_day_of_week_parse_is_case_insensitive() {
        assert_eq!("tuesday".parse::<DayOfWeek>().unwrap(), DayOfWeek::Tuesday);
        assert_eq!("SUNDAY".parse::<DayOfWeek>().unwrap(), DayOfWeek::Sunday);
        assert!("Funday".parse::<DayOfWeek>().is_err());
    }

    #[test]
    fn test_day_of_week_deserializes_any_case() {
        let day: DayOfWeek = serde_json::from_str(r#""tuesday""#).unwrap();
        assert_eq!(day, DayOfWeek::Tuesday);
        let day: DayOfWeek = serde_json::from_str(r#""FRIDAY""#).unwrap();
        assert_eq!(day, DayOfWeek::Friday);
        assert!(serde_json::from_str::<DayOfWeek>(r#""Funday""#).is_err());
        assert_eq!(serde_json::to_string(&DayOfWeek::Tuesday).unwrap(), r#""Tuesday""#);
    }

    #[test]
    fn test_time_labels() {
        assert_eq!(TIME_SLOTS.first(), Some(&"7:30am"));
        assert_eq!(TIME_SLOTS.last(), Some(&"6pm"));
        assert!(is_known_time_label("3pm"));
        assert!(!is_known_time_label("3:00pm"));
    }

    #[test]
    fn test_status_tones() {
        assert_eq!(SlotStatus::Available.tone(), StatusTone::Success);
        assert_eq!(SlotStatus::Booked.tone(), StatusTone::Info);
        assert_eq!(PaymentStatus::Failed.tone(), StatusTone::Danger);
        assert_eq!(PaymentStatus::Pending.tone(), StatusTone::Warning);
    }

    #[test]
    fn test_humanize_method() {
        assert_eq!(humanize_method("bank-transfer"), "Bank Transfer");
        assert_eq!(humanize_method("direct-debit-card"), "Direct Debit Card");
        assert_eq!(humanize_method("paypal"), "Paypal");
        assert_eq!(humanize_method(""), "");
    }

    #[test]
    fn test_form_errors_serialize_with_field_names() {
        let mut errors = FormErrors::new();
        errors.insert(FormField::PaymentMethod, "Please select a payment method");
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"paymentMethod":"Please select a payment method"}"#);
    }

    #[test]
    fn test_schedule_slot_deserializes_camel_case() {
        let json = r#"{"id":"1","day":"Tuesday","startTime":"3pm","endTime":"4pm","status":"available","subject":"Vocal Jazz"}"#;
        let slot: ScheduleSlot = serde_json::from_str(json).unwrap();
        assert_eq!(slot.day, DayOfWeek::Tuesday);
        assert_eq!(slot.start_time, "3pm");
        assert_eq!(slot.status, SlotStatus::Available);
        assert_eq!(slot.subject.as_deref(), Some("Vocal Jazz"));

        let json = r#"{"id":"5","day":"Saturday","startTime":"10am","endTime":"2pm","status":"unavailable"}"#;
        let slot: ScheduleSlot = serde_json::from_str(json).unwrap();
        assert!(slot.subject.is_none());
    }

    #[test]
    fn test_payment_form_default() {
        let form = PaymentForm::default();
        assert!(form.amount.is_empty());
        assert_eq!(form.payment_type, PaymentType::Salary);
        assert!(form.scheduled_date.is_empty());
    }

    #[test]
    fn test_format_display_date() {
        assert_eq!(format_display_date(NaiveDate::from_ymd_opt(1985, 3, 15).unwrap()), "3/15/1985");
        assert_eq!(format_display_date(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()), "1/5/2024");
    }
}
