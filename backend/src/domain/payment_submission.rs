//! Payment submission workflow.
//!
//! ```text
//! Idle ──submit──▶ Validating ──errors──▶ Invalid ──▶ Idle
//!                      │
//!                      └──ok──▶ Submitting ──▶ Completed ──▶ Idle
//!                                    │
//!                                    └──────▶ Failed ──▶ Idle
//! ```
//!
//! `Submitting` is the only state that outlives a single call: it lasts until
//! the gateway answers and [`PaymentSubmission::complete`] is invoked. While
//! it lasts the in-flight flag is set and further submit attempts are
//! ignored. There is no cancellation.

use log::{info, warn};
use shared::{FormErrors, Notification, PaymentForm, PaymentRecord, Teacher};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

use super::payment_form_service::PaymentFormService;
use super::payment_gateway::{PaymentGateway, PaymentRequest, SubmissionError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Invalid,
    Submitting,
    Completed,
    Failed,
}

/// What happened as the result of a submit attempt or a gateway answer
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionEvent {
    /// Validation failed; the per-field messages are on [`PaymentSubmission::errors`]
    Rejected(Notification),
    /// A submission was already running, nothing was started
    AlreadyInFlight,
    /// The request must now be sent to the gateway
    Started(PaymentRequest),
    /// The gateway accepted the payment
    Scheduled {
        record: PaymentRecord,
        notification: Notification,
    },
    /// The gateway failed; the form is kept for another attempt
    Failed(Notification),
}

impl SubmissionEvent {
    pub fn notification(&self) -> Option<&Notification> {
        match self {
            SubmissionEvent::Rejected(notification) | SubmissionEvent::Failed(notification) => Some(notification),
            SubmissionEvent::Scheduled { notification, .. } => Some(notification),
            SubmissionEvent::AlreadyInFlight | SubmissionEvent::Started(_) => None,
        }
    }
}

/// State of the "New Payment" form and its submission
#[derive(Debug, Clone)]
pub struct PaymentSubmission {
    teacher: Teacher,
    form_service: PaymentFormService,
    form: PaymentForm,
    errors: FormErrors,
    state: SubmissionState,
    currency_symbol: String,
    /// Last transient state reached (Invalid, Completed or Failed)
    last_outcome: Option<SubmissionState>,
}

impl PaymentSubmission {
    pub fn new(teacher: Teacher) -> Self {
        Self {
            teacher,
            form_service: PaymentFormService::new(),
            form: PaymentForm::default(),
            errors: FormErrors::new(),
            state: SubmissionState::Idle,
            currency_symbol: "$".to_string(),
            last_outcome: None,
        }
    }

    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    pub fn form(&self) -> &PaymentForm {
        &self.form
    }

    /// Mutable access for input widgets
    pub fn form_mut(&mut self) -> &mut PaymentForm {
        &mut self.form
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn last_outcome(&self) -> Option<SubmissionState> {
        self.last_outcome
    }

    /// True while a submission is outstanding; the submit control must be disabled
    pub fn is_in_flight(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    fn transition(&mut self, next: SubmissionState) {
        info!("💳 Payment submission: {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Handle a submit attempt from the form
    pub fn begin_submit(&mut self) -> SubmissionEvent {
        if self.is_in_flight() {
            warn!("⚠️ Submit ignored: a payment submission is already in flight");
            return SubmissionEvent::AlreadyInFlight;
        }

        self.transition(SubmissionState::Validating);

        match self.form_service.build_request(&self.form, &self.teacher) {
            Ok(request) => {
                self.errors = FormErrors::new();
                self.transition(SubmissionState::Submitting);
                SubmissionEvent::Started(request)
            }
            Err(errors) => {
                self.errors = errors;
                self.transition(SubmissionState::Invalid);
                self.last_outcome = Some(SubmissionState::Invalid);
                self.transition(SubmissionState::Idle);
                SubmissionEvent::Rejected(self.form_service.validation_failed_notification())
            }
        }
    }

    /// Apply the gateway's answer for the in-flight request.
    ///
    /// `request` is the one returned by [`begin_submit`](Self::begin_submit).
    /// Returns `None` when no submission is in flight.
    pub fn complete(
        &mut self,
        request: &PaymentRequest,
        result: Result<PaymentRecord, SubmissionError>,
    ) -> Option<SubmissionEvent> {
        if !self.is_in_flight() {
            warn!("⚠️ Gateway answer received with no submission in flight");
            return None;
        }

        let event = match result {
            Ok(record) => {
                self.transition(SubmissionState::Completed);
                self.last_outcome = Some(SubmissionState::Completed);
                self.form = PaymentForm::default();
                self.errors = FormErrors::new();
                let notification = Notification::info(
                    "Payment Scheduled",
                    format!(
                        "Payment of {}{} has been scheduled for {}",
                        self.currency_symbol, request.amount_input, request.teacher_name
                    ),
                );
                SubmissionEvent::Scheduled { record, notification }
            }
            Err(error) => {
                warn!("❌ Payment submission failed: {}", error);
                self.transition(SubmissionState::Failed);
                self.last_outcome = Some(SubmissionState::Failed);
                SubmissionEvent::Failed(Notification::destructive(
                    "Error",
                    "Failed to schedule payment. Please try again.",
                ))
            }
        };

        self.transition(SubmissionState::Idle);
        Some(event)
    }

    /// Run a whole submission against a gateway, awaiting its answer
    pub async fn submit(&mut self, gateway: &dyn PaymentGateway) -> SubmissionEvent {
        let request = match self.begin_submit() {
            SubmissionEvent::Started(request) => request,
            other => return other,
        };

        let result = gateway.schedule_payment(request.clone()).await;
        // complete() only returns None when nothing is in flight, which begin_submit just ruled out
        self.complete(&request, result)
            .unwrap_or(SubmissionEvent::AlreadyInFlight)
    }
}

/// A gateway call running on the backend runtime, polled from the UI thread
#[derive(Debug)]
pub struct PendingSubmission {
    request: PaymentRequest,
    receiver: oneshot::Receiver<Result<PaymentRecord, SubmissionError>>,
}

impl PendingSubmission {
    /// Spawn the gateway call for `request` on `handle`
    pub fn spawn(handle: &Handle, gateway: Arc<dyn PaymentGateway>, request: PaymentRequest) -> Self {
        let (sender, receiver) = oneshot::channel();
        let task_request = request.clone();

        handle.spawn(async move {
            let result = gateway.schedule_payment(task_request).await;
            if sender.send(result).is_err() {
                warn!("⚠️ Payment result dropped: nobody is waiting for it");
            }
        });

        Self { request, receiver }
    }

    pub fn request(&self) -> &PaymentRequest {
        &self.request
    }

    /// Non-blocking check for the gateway's answer
    pub fn poll(&mut self) -> Option<Result<PaymentRecord, SubmissionError>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => Some(Err(SubmissionError::Interrupted)),
        }
    }
}
