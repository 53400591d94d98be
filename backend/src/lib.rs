//! # Teacher Dashboard Backend
//!
//! UI-agnostic services behind the teacher dashboard:
//! - fixture loading and data-integrity checks
//! - weekly schedule lookup
//! - payment form validation and the submission workflow
//! - qualification and profile intents
//!
//! The egui frontend owns a single [`Backend`] and talks to the services
//! directly. The only asynchronous operation, scheduling a payment, runs on
//! the small tokio runtime owned by the backend so the UI thread never blocks.

use anyhow::{Context, Result};
use log::info;
use shared::DashboardSnapshot;
use std::sync::Arc;
use tokio::runtime::Runtime;

pub mod config;
pub mod domain;

pub use config::DashboardConfig;

use domain::{
    PaymentGateway, PaymentRequest, PaymentSubmission, PendingSubmission, ProfileService, QualificationService,
    ScheduleService, SimulatedGateway,
};

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub config: DashboardConfig,
    pub schedule_service: ScheduleService,
    pub qualification_service: QualificationService,
    pub profile_service: ProfileService,
    gateway: Arc<dyn PaymentGateway>,
    runtime: Runtime,
}

impl Backend {
    /// Create a backend with the simulated payment gateway
    pub fn new(config: DashboardConfig) -> Result<Self> {
        let gateway = Arc::new(SimulatedGateway::from_config(&config));
        Self::with_gateway(config, gateway)
    }

    /// Create a backend around a specific payment gateway
    pub fn with_gateway(config: DashboardConfig, gateway: Arc<dyn PaymentGateway>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("payment-gateway")
            .enable_all()
            .build()
            .context("Failed to start the payment runtime")?;

        Ok(Self {
            config,
            schedule_service: ScheduleService::new(),
            qualification_service: QualificationService::new(),
            profile_service: ProfileService::new(),
            gateway,
            runtime,
        })
    }

    /// Load the dashboard seed data, honouring a configured fixture path
    pub fn load_snapshot(&self) -> Result<DashboardSnapshot> {
        let snapshot = match &self.config.fixture_path {
            Some(path) => domain::fixtures::load_from_path(path)
                .with_context(|| format!("Failed to load fixture {}", path.display()))?,
            None => domain::fixtures::load_bundled().context("Failed to load bundled fixture")?,
        };
        Ok(snapshot)
    }

    /// Fresh payment form state for a teacher
    pub fn new_submission(&self, snapshot: &DashboardSnapshot) -> PaymentSubmission {
        PaymentSubmission::new(snapshot.profile.teacher.clone())
            .with_currency_symbol(self.config.currency_symbol.clone())
    }

    /// Hand a validated request to the gateway without blocking the caller
    pub fn spawn_submission(&self, request: PaymentRequest) -> PendingSubmission {
        PendingSubmission::spawn(self.runtime.handle(), Arc::clone(&self.gateway), request)
    }
}

/// Load configuration and seed data and build the backend
pub fn initialize_backend() -> Result<(Backend, DashboardSnapshot)> {
    info!("🚀 Initializing teacher dashboard backend");

    let config = DashboardConfig::load().context("Failed to load dashboard configuration")?;
    let backend = Backend::new(config)?;
    let snapshot = backend.load_snapshot()?;

    info!("✅ Backend ready for {}", snapshot.profile.teacher.name);
    Ok((backend, snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SubmissionEvent;
    use shared::PaymentStatus;
    use std::time::Duration;
    use tempfile::TempDir;

    fn fast_config() -> DashboardConfig {
        DashboardConfig {
            submission_delay_ms: 5,
            ..DashboardConfig::default()
        }
    }

    #[test]
    fn test_backend_loads_bundled_snapshot() {
        let backend = Backend::new(fast_config()).expect("Failed to create backend");
        let snapshot = backend.load_snapshot().expect("Failed to load snapshot");
        assert_eq!(snapshot.profile.teacher.name, "Alynia Allan");
    }

    #[test]
    fn test_backend_uses_configured_fixture() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("fixture.json");
        std::fs::write(&path, include_str!("../fixtures/dashboard.json").replace("Alynia Allan", "Ada Byron"))
            .unwrap();

        let config = DashboardConfig {
            fixture_path: Some(path),
            ..fast_config()
        };
        let backend = Backend::new(config).expect("Failed to create backend");
        let snapshot = backend.load_snapshot().expect("Failed to load snapshot");
        assert_eq!(snapshot.profile.teacher.name, "Ada Byron");
    }

    #[test]
    fn test_missing_configured_fixture_is_an_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = DashboardConfig {
            fixture_path: Some(temp_dir.path().join("missing.json")),
            ..fast_config()
        };
        let backend = Backend::new(config).expect("Failed to create backend");
        assert!(backend.load_snapshot().is_err());
    }

    #[test]
    fn test_spawned_submission_completes_and_appends_to_history() {
        let backend = Backend::new(fast_config()).expect("Failed to create backend");
        let snapshot = backend.load_snapshot().expect("Failed to load snapshot");
        let mut history = domain::PaymentHistory::new(snapshot.payment_history.clone());
        let mut submission = backend.new_submission(&snapshot);

        let form = submission.form_mut();
        form.amount = "120".to_string();
        form.description = "Masterclass".to_string();
        form.payment_method = "paypal".to_string();
        form.scheduled_date = "2024-07-01".to_string();

        let request = match submission.begin_submit() {
            SubmissionEvent::Started(request) => request,
            other => panic!("Expected start, got {:?}", other),
        };
        let mut pending = backend.spawn_submission(request);

        let mut answer = None;
        for _ in 0..200 {
            answer = pending.poll();
            if answer.is_some() {
                break;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        let request = pending.request().clone();
        let event = submission
            .complete(&request, answer.expect("Gateway should answer"))
            .expect("Submission was in flight");

        match event {
            SubmissionEvent::Scheduled { record, notification } => {
                assert_eq!(notification.description, "Payment of $120 has been scheduled for Alynia Allan");
                assert_eq!(record.status, PaymentStatus::Pending);
                history.append(record);
            }
            other => panic!("Expected scheduled payment, got {:?}", other),
        }

        assert_eq!(history.len(), snapshot.payment_history.len() + 1);
        assert_eq!(history.records()[0].description, "Masterclass");
        assert!(submission.form().amount.is_empty());
    }
}
