use iso_currency::Currency;

use super::{
    ids::ReportId,
    policy::Policy,
    report::{HeldSplit, Report, SpendBreakdown},
};

// Report state.
// ---

/// Read-only view over report state that amount resolution depends on.
///
/// Implementations must not fail: missing data is answered with the value that
/// means "condition not met".
pub trait ReportStateHandler {
    fn spend_breakdown(&self, report: Option<&Report>) -> SpendBreakdown;
    fn has_held_expenses(&self, report_id: Option<&ReportId>) -> bool;
    fn has_only_held_expenses(&self, report_id: Option<&ReportId>) -> bool;
    /// Whether the report total is authoritative enough to settle against.
    fn has_updated_total(&self, report: Option<&Report>, policy: Option<&Policy>) -> bool;
    fn non_held_and_full_amount(
        &self,
        report: Option<&Report>,
        policy: Option<&Policy>,
        exclude_non_reimbursable: bool,
    ) -> HeldSplit;
}

// Presentation.
// ---

pub trait AmountFormatHandler {
    /// Display string for an amount in minor units. `None` currency falls back
    /// to the formatter's default.
    fn display_string(&self, amount: i64, currency: Option<Currency>) -> String;
}
