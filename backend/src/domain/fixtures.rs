//! Seed data for the dashboard.
//!
//! The dashboard has no persistence. At startup it is seeded from a JSON
//! fixture, either the one bundled into the binary or a file named in the
//! configuration. Every fixture goes through [`validate_snapshot`] so the
//! rest of the application can rely on the data-model invariants.

use log::{info, warn};
use shared::{DashboardSnapshot, QualificationType};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::schedule_service::{ScheduleError, ScheduleService};

const BUNDLED_FIXTURE: &str = include_str!("../../fixtures/dashboard.json");

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to read fixture {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid fixture JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid schedule: {0}")]
    Schedule(#[from] ScheduleError),
    #[error("Qualification {id} has a negative rate ({rate})")]
    NegativeRate { id: String, rate: f64 },
    #[error("Qualification {id} is a {actual} qualification listed under {listed}")]
    MisfiledQualification {
        id: String,
        listed: QualificationType,
        actual: QualificationType,
    },
    #[error("Payment {id} has a non-positive amount ({amount})")]
    NonPositivePayment { id: String, amount: f64 },
}

/// Load the fixture compiled into the backend
pub fn load_bundled() -> Result<DashboardSnapshot, FixtureError> {
    info!("📦 Loading bundled dashboard fixture");
    parse_snapshot(BUNDLED_FIXTURE)
}

pub fn load_from_path(path: &Path) -> Result<DashboardSnapshot, FixtureError> {
    info!("📦 Loading dashboard fixture from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|source| FixtureError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_snapshot(&content)
}

/// Parse and validate a fixture document
pub fn parse_snapshot(json: &str) -> Result<DashboardSnapshot, FixtureError> {
    let snapshot: DashboardSnapshot = serde_json::from_str(json)?;
    validate_snapshot(&snapshot)?;

    info!(
        "📦 Fixture loaded: {} with {} qualifications, {} schedule slots, {} payments",
        snapshot.profile.teacher.name,
        snapshot.profile.private_qualifications.len() + snapshot.profile.group_qualifications.len(),
        snapshot.profile.schedule.len(),
        snapshot.payment_history.len()
    );
    Ok(snapshot)
}

pub fn validate_snapshot(snapshot: &DashboardSnapshot) -> Result<(), FixtureError> {
    let profile = &snapshot.profile;

    for listed in [QualificationType::Private, QualificationType::Group] {
        for qualification in profile.qualifications(listed) {
            if qualification.qualification_type != listed {
                warn!("🚨 Qualification {} is in the wrong list", qualification.id);
                return Err(FixtureError::MisfiledQualification {
                    id: qualification.id.clone(),
                    listed,
                    actual: qualification.qualification_type,
                });
            }
            if qualification.rate < 0.0 || !qualification.rate.is_finite() {
                return Err(FixtureError::NegativeRate {
                    id: qualification.id.clone(),
                    rate: qualification.rate,
                });
            }
        }
    }

    ScheduleService::new().check_integrity(&profile.schedule)?;

    if let Some(payment) = snapshot
        .payment_history
        .iter()
        .find(|payment| payment.amount.is_nan() || payment.amount <= 0.0)
    {
        return Err(FixtureError::NonPositivePayment {
            id: payment.id.clone(),
            amount: payment.amount,
        });
    }

    Ok(())
}
