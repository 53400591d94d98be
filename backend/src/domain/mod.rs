pub mod fixtures;
pub mod payment_form_service;
pub mod payment_gateway;
pub mod payment_history;
pub mod payment_submission;
pub mod profile_service;
pub mod qualification_service;
pub mod schedule_service;

pub use fixtures::FixtureError;
pub use payment_form_service::PaymentFormService;
pub use payment_gateway::{PaymentGateway, PaymentRequest, SimulatedGateway, SubmissionError};
pub use payment_history::PaymentHistory;
pub use payment_submission::{PaymentSubmission, PendingSubmission, SubmissionEvent, SubmissionState};
pub use profile_service::ProfileService;
pub use qualification_service::QualificationService;
pub use schedule_service::{find_slot, ScheduleError, ScheduleService};
