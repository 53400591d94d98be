//! Payment form validation for the teacher dashboard.
//!
//! This module contains the rules applied to the "New Payment" form before a
//! payment may be scheduled. Every rule is checked on every pass so the UI can
//! show all failing fields at once; the UI only renders the resulting
//! [`FormErrors`].

use chrono::NaiveDate;
use log::info;
use shared::{FormErrors, FormField, Notification, PaymentForm, Teacher};

use super::payment_gateway::PaymentRequest;

pub const INVALID_AMOUNT_MESSAGE: &str = "Please enter a valid amount";
pub const DESCRIPTION_REQUIRED_MESSAGE: &str = "Description is required";
pub const PAYMENT_METHOD_REQUIRED_MESSAGE: &str = "Please select a payment method";
pub const DATE_REQUIRED_MESSAGE: &str = "Please select a date";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse the raw amount text. Only finite numbers strictly above zero are accepted.
pub fn parse_amount(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
}

/// Parse the raw scheduled date (`YYYY-MM-DD`)
pub fn parse_scheduled_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).ok()
}

/// Validate a payment form. An empty result means the form may be submitted.
pub fn validate_payment_form(form: &PaymentForm) -> FormErrors {
    let mut errors = FormErrors::new();

    if parse_amount(&form.amount).is_none() {
        errors.insert(FormField::Amount, INVALID_AMOUNT_MESSAGE);
    }

    if form.description.trim().is_empty() {
        errors.insert(FormField::Description, DESCRIPTION_REQUIRED_MESSAGE);
    }

    if form.payment_method.is_empty() {
        errors.insert(FormField::PaymentMethod, PAYMENT_METHOD_REQUIRED_MESSAGE);
    }

    if parse_scheduled_date(&form.scheduled_date).is_none() {
        errors.insert(FormField::ScheduledDate, DATE_REQUIRED_MESSAGE);
    }

    errors
}

/// Payment form service that turns raw input into validated payment requests
#[derive(Debug, Clone, Default)]
pub struct PaymentFormService;

impl PaymentFormService {
    pub fn new() -> Self {
        Self
    }

    /// Validate the form; see [`validate_payment_form`]
    pub fn validate(&self, form: &PaymentForm) -> FormErrors {
        let errors = validate_payment_form(form);
        if !errors.is_empty() {
            let fields: Vec<&str> = errors.fields().map(|field| field.as_str()).collect();
            info!("📝 Payment form invalid: {}", fields.join(", "));
        }
        errors
    }

    /// Build the request handed to the payment gateway.
    ///
    /// Returns the validation errors instead when the form is not submittable.
    pub fn build_request(&self, form: &PaymentForm, teacher: &Teacher) -> Result<PaymentRequest, FormErrors> {
        let errors = self.validate(form);
        if !errors.is_empty() {
            return Err(errors);
        }

        match (parse_amount(&form.amount), parse_scheduled_date(&form.scheduled_date)) {
            (Some(amount), Some(scheduled_date)) => Ok(PaymentRequest {
                teacher_id: teacher.id.clone(),
                teacher_name: teacher.name.clone(),
                amount,
                amount_input: form.amount.trim().to_string(),
                payment_type: form.payment_type,
                description: form.description.trim().to_string(),
                payment_method: form.payment_method.clone(),
                scheduled_date,
            }),
            _ => Err(errors),
        }
    }

    /// Notification shown when a submit attempt fails validation
    pub fn validation_failed_notification(&self) -> Notification {
        Notification::destructive("Validation Error", "Please fix the errors in the form")
    }
}
