use iso_currency::Currency;

use super::ids::{PolicyId, ReportId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    /// Workspace expense report. Totals are stored negated.
    Expense,
    Iou,
    Invoice,
}

/// Money-request report, as last synced from the backend.
///
/// Totals are signed integers in minor currency units. Missing totals mean the
/// backend has not (yet) provided them, which is not the same as zero for
/// `unheld_total`.
#[derive(Debug, Clone)]
pub struct Report {
    pub report_id: ReportId,
    pub policy_id: Option<PolicyId>,
    pub kind: ReportKind,
    pub currency: Option<Currency>,
    pub total: Option<i64>,
    pub non_reimbursable_total: Option<i64>,
    pub unheld_total: Option<i64>,
    pub unheld_non_reimbursable_total: Option<i64>,
    /// Workspace chat for this report is still being created.
    pub is_creating_chat: bool,
}

impl Report {
    pub fn new(report_id: ReportId, kind: ReportKind, currency: Option<Currency>) -> Self {
        Self {
            report_id,
            policy_id: None,
            kind,
            currency,
            total: None,
            non_reimbursable_total: None,
            unheld_total: None,
            unheld_non_reimbursable_total: None,
            is_creating_chat: false,
        }
    }

    pub fn is_expense_report(&self) -> bool {
        self.kind == ReportKind::Expense
    }
}

/// Split of a report's spend into display categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpendBreakdown {
    pub non_reimbursable_spend: i64,
    pub reimbursable_spend: i64,
    pub total_display_spend: i64,
}

/// Portion of a report's spend that is not on hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldSplit {
    pub non_held_amount: i64,
    pub full_amount: i64,
    /// Whether the non-held amount can be offered as a partial payment.
    pub has_valid_non_held_amount: bool,
}
