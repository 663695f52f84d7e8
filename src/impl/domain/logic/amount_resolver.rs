use crate::entities::{ActionTag, AmountFormatHandler, Policy, Report, ReportStateHandler};

/// Amount to display on the primary action of a report preview.
///
/// Returns an empty string when no amount applies: for actions that don't carry
/// one, and for Pay when every expense on the report is held. Missing report
/// or policy data never fails, it just fails the corresponding condition.
pub fn resolve_amount<S, F>(
    report: Option<&Report>,
    policy: Option<&Policy>,
    action: ActionTag,
    state: &S,
    formatter: &F,
) -> String
where
    S: ReportStateHandler + ?Sized,
    F: AmountFormatHandler + ?Sized,
{
    if !action.carries_amount() {
        return String::new();
    }

    let report_id = report.map(|r| &r.report_id);
    let currency = report.and_then(|r| r.currency);
    let has_only_held_expenses = state.has_only_held_expenses(report_id);
    let can_allow_settlement = state.has_updated_total(report, policy);
    let breakdown = state.spend_breakdown(report);

    if action == ActionTag::Pay {
        if has_only_held_expenses {
            tracing::trace!(?report_id, "only held expenses, nothing payable");
            return String::new();
        }

        // Partial payment is only offered when the non-held amount is valid.
        let split = state.non_held_and_full_amount(report, policy, true);
        if state.has_held_expenses(report_id)
            && can_allow_settlement
            && split.has_valid_non_held_amount
        {
            return formatter.display_string(split.non_held_amount, currency);
        }

        return formatter.display_string(breakdown.reimbursable_spend, currency);
    }

    formatter.display_string(breakdown.total_display_spend, currency)
}
