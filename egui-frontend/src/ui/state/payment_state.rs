//! # Payment State Module
//!
//! Ties the payment submission workflow to the frame loop. A submit click
//! spawns the gateway call on the backend runtime; every frame afterwards
//! polls it until the answer arrives and is applied here, on the UI thread.

use backend::domain::{PaymentHistory, PaymentSubmission, PendingSubmission, SubmissionEvent};
use backend::Backend;
use shared::{DashboardSnapshot, Notification};

#[derive(Debug)]
pub struct PaymentState {
    pub submission: PaymentSubmission,
    pub history: PaymentHistory,
    pending: Option<PendingSubmission>,
}

impl PaymentState {
    pub fn new(backend: &Backend, snapshot: &DashboardSnapshot) -> Self {
        Self {
            submission: backend.new_submission(snapshot),
            history: PaymentHistory::new(snapshot.payment_history.clone()),
            pending: None,
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.submission.is_in_flight()
    }

    /// Handle a click on "Schedule Payment"
    pub fn submit(&mut self, backend: &Backend) -> Option<Notification> {
        match self.submission.begin_submit() {
            SubmissionEvent::Started(request) => {
                self.pending = Some(backend.spawn_submission(request));
                None
            }
            event => event.notification().cloned(),
        }
    }

    /// Apply the gateway's answer if it has arrived
    pub fn poll(&mut self) -> Option<Notification> {
        let answer = self.pending.as_mut()?.poll()?;
        let pending = self.pending.take()?;

        match self.submission.complete(pending.request(), answer)? {
            SubmissionEvent::Scheduled { record, notification } => {
                self.history.append(record);
                Some(notification)
            }
            event => event.notification().cloned(),
        }
    }
}
