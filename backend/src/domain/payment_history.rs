//! In-memory payment history.
//!
//! Records are kept newest first. The history is append-only: records are
//! never edited or removed once added.

use log::info;
use shared::PaymentRecord;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentHistory {
    records: Vec<PaymentRecord>,
}

impl PaymentHistory {
    /// Seed the history from fixture records, which are already newest first
    pub fn new(records: Vec<PaymentRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[PaymentRecord] {
        &self.records
    }

    /// Add a freshly scheduled payment at the top of the history
    pub fn append(&mut self, record: PaymentRecord) {
        info!("🧾 Payment {} added to history ({:.2} {})", record.id, record.amount, record.currency);
        self.records.insert(0, record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
