use iso_currency::Currency;

use super::ids::{ReportId, TransactionId};

#[derive(Debug, Clone)]
pub struct Transaction {
    pub transaction_id: TransactionId,
    pub report_id: Option<ReportId>,
    /// Signed, in minor currency units. Negated for expense reports.
    pub amount: i64,
    pub currency: Option<Currency>,
    /// Hold reason, if someone put the expense on hold.
    pub hold: Option<String>,
    /// Local changes not yet acknowledged by the backend.
    pub has_pending_action: bool,
}

// --

impl Transaction {
    pub fn new(transaction_id: TransactionId, report_id: ReportId, amount: i64) -> Self {
        Self {
            transaction_id,
            report_id: Some(report_id),
            amount,
            currency: None,
            hold: None,
            has_pending_action: false,
        }
    }

    pub fn is_on_hold(&self) -> bool {
        self.hold.as_deref().is_some_and(|reason| !reason.is_empty())
    }

    pub fn belongs_to(&self, report_id: &ReportId) -> bool {
        self.report_id.as_ref() == Some(report_id)
    }
}
