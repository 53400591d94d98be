//! Payment gateway seam.
//!
//! Scheduling a payment is the one asynchronous operation of the dashboard.
//! The [`PaymentGateway`] trait stands where a real payment provider would
//! plug in; [`SimulatedGateway`] models the round-trip with a fixed delay and
//! always succeeds.

use async_trait::async_trait;
use chrono::NaiveDate;
use log::info;
use shared::{PaymentRecord, PaymentStatus, PaymentType};
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

use crate::config::DashboardConfig;

/// A validated payment, ready to be handed to a gateway
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    pub teacher_id: String,
    pub teacher_name: String,
    pub amount: f64,
    /// Amount as the user typed it (trimmed), used in the confirmation message
    pub amount_input: String,
    pub payment_type: PaymentType,
    pub description: String,
    pub payment_method: String,
    pub scheduled_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmissionError {
    #[error("Payment service unavailable: {0}")]
    Unavailable(String),
    #[error("Payment submission was interrupted")]
    Interrupted,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Schedule a payment and return the record to append to the history
    async fn schedule_payment(&self, request: PaymentRequest) -> Result<PaymentRecord, SubmissionError>;
}

/// Gateway that waits for a fixed delay and then accepts every payment
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    delay: Duration,
    currency: String,
}

impl SimulatedGateway {
    pub fn new(delay: Duration, currency: impl Into<String>) -> Self {
        Self {
            delay,
            currency: currency.into(),
        }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.submission_delay(), config.currency.clone())
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn schedule_payment(&self, request: PaymentRequest) -> Result<PaymentRecord, SubmissionError> {
        info!(
            "💳 Scheduling {} payment of {:.2} {} for {} ({} ms simulated latency)",
            request.payment_type.label(),
            request.amount,
            self.currency,
            request.teacher_name,
            self.delay.as_millis()
        );

        tokio::time::sleep(self.delay).await;

        Ok(PaymentRecord {
            id: Uuid::new_v4().to_string(),
            teacher_id: request.teacher_id,
            amount: request.amount,
            currency: self.currency.clone(),
            payment_type: request.payment_type,
            status: PaymentStatus::Pending,
            date: request.scheduled_date,
            description: request.description,
            payment_method: request.payment_method,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> PaymentRequest {
        PaymentRequest {
            teacher_id: "1".to_string(),
            teacher_name: "Alynia Allan".to_string(),
            amount: 50.0,
            amount_input: "50.00".to_string(),
            payment_type: PaymentType::Salary,
            description: "Lesson".to_string(),
            payment_method: "cash".to_string(),
            scheduled_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_simulated_gateway_returns_pending_record() {
        let gateway = SimulatedGateway::new(Duration::from_millis(5), "USD");

        let record = gateway
            .schedule_payment(sample_request())
            .await
            .expect("Simulated gateway should always succeed");

        assert!(Uuid::parse_str(&record.id).is_ok());
        assert_eq!(record.teacher_id, "1");
        assert_eq!(record.amount, 50.0);
        assert_eq!(record.currency, "USD");
        assert_eq!(record.status, PaymentStatus::Pending);
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(record.payment_method, "cash");
    }

    #[tokio::test]
    async fn test_simulated_gateway_waits_for_delay() {
        let gateway = SimulatedGateway::new(Duration::from_millis(30), "USD");
        let started = std::time::Instant::now();

        gateway.schedule_payment(sample_request()).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn test_from_config() {
        let config = DashboardConfig {
            submission_delay_ms: 10,
            currency: "CAD".to_string(),
            ..DashboardConfig::default()
        };
        let gateway = SimulatedGateway::from_config(&config);
        assert_eq!(gateway.delay, Duration::from_millis(10));
        assert_eq!(gateway.currency, "CAD");
    }
}
