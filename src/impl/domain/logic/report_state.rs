use crate::entities::{
    HeldSplit, Policy, Report, ReportId, ReportSnapshot, ReportStateHandler, SpendBreakdown,
};

/// Display value of a stored amount. Expense report totals are stored
/// negated. Saturates at the `i64` bounds.
fn display_value(report: Option<&Report>, stored: i64) -> i64 {
    match report {
        Some(r) if r.is_expense_report() => stored.saturating_neg(),
        _ => stored,
    }
}

impl ReportStateHandler for ReportSnapshot {
    fn spend_breakdown(&self, report: Option<&Report>) -> SpendBreakdown {
        let Some(report) = report else {
            return SpendBreakdown::default();
        };
        let non_reimbursable = report.non_reimbursable_total.unwrap_or(0);
        let total = report.total.unwrap_or(0);
        if non_reimbursable.saturating_add(total) == 0 {
            return SpendBreakdown::default();
        }

        // Expense reports can legitimately go negative (card credits,
        // offsetting entries), so only they keep their sign.
        let (non_reimbursable_spend, total_display_spend) = if report.is_expense_report() {
            (non_reimbursable.saturating_neg(), total.saturating_neg())
        } else {
            (non_reimbursable.saturating_abs(), total.saturating_abs())
        };
        SpendBreakdown {
            non_reimbursable_spend,
            reimbursable_spend: total_display_spend.saturating_sub(non_reimbursable_spend),
            total_display_spend,
        }
    }

    fn has_held_expenses(&self, report_id: Option<&ReportId>) -> bool {
        self.report_transactions(report_id).any(|t| t.is_on_hold())
    }

    fn has_only_held_expenses(&self, report_id: Option<&ReportId>) -> bool {
        !self.report_transactions(report_id).any(|t| !t.is_on_hold())
    }

    fn has_updated_total(&self, report: Option<&Report>, policy: Option<&Policy>) -> bool {
        let Some(report) = report else {
            return true;
        };
        let report_id = Some(&report.report_id);

        let has_pending_transaction = self
            .report_transactions(report_id)
            .any(|t| t.has_pending_action);
        let has_transaction_with_different_currency = self
            .report_transactions(report_id)
            .any(|t| t.currency != report.currency);
        let has_different_workspace_currency = report.is_creating_chat
            && report.is_expense_report()
            && report.currency != policy.and_then(|p| p.output_currency);
        let has_optimistic_held_expense =
            self.has_held_expenses(report_id) && report.unheld_total.is_none();

        !(has_pending_transaction
            && (has_transaction_with_different_currency || has_different_workspace_currency))
            && !has_optimistic_held_expense
    }

    fn non_held_and_full_amount(
        &self,
        report: Option<&Report>,
        policy: Option<&Policy>,
        exclude_non_reimbursable: bool,
    ) -> HeldSplit {
        let report_id = report.map(|r| &r.report_id);
        let has_pending_transaction = self
            .report_transactions(report_id)
            .any(|t| t.has_pending_action);

        // Backend totals lag behind local edits; recompute from transactions.
        if has_pending_transaction && self.has_updated_total(report, policy) {
            let unheld_total: i64 = self
                .report_transactions(report_id)
                .filter(|t| !t.is_on_hold())
                .fold(0, |sum, t| sum.saturating_add(t.amount));
            let non_held_amount = display_value(report, unheld_total);
            return HeldSplit {
                non_held_amount,
                full_amount: display_value(report, report.and_then(|r| r.total).unwrap_or(0)),
                has_valid_non_held_amount: non_held_amount >= 0,
            };
        }

        let (non_reimbursable_total, unheld_non_reimbursable_total) =
            match (report, exclude_non_reimbursable) {
                (Some(r), true) => (
                    r.non_reimbursable_total.unwrap_or(0),
                    r.unheld_non_reimbursable_total.unwrap_or(0),
                ),
                _ => (0, 0),
            };
        let total = report.and_then(|r| r.total).unwrap_or(0);
        let unheld_total = report.and_then(|r| r.unheld_total).unwrap_or(0);

        let non_held_amount = display_value(
            report,
            unheld_total.saturating_sub(unheld_non_reimbursable_total),
        );
        HeldSplit {
            non_held_amount,
            full_amount: display_value(report, total.saturating_sub(non_reimbursable_total)),
            has_valid_non_held_amount: non_held_amount >= 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use iso_currency::Currency;

    use super::*;
    use crate::entities::{policy_id, report_id, transaction_id, ReportKind, Transaction};

    fn expense_report(total: i64) -> Report {
        let mut report = Report::new(report_id("r1"), ReportKind::Expense, Some(Currency::USD));
        report.total = Some(total);
        report
    }

    fn transaction(id: &str, amount: i64, held: bool) -> Transaction {
        let mut t = Transaction::new(transaction_id(id), report_id("r1"), amount);
        t.currency = Some(Currency::USD);
        if held {
            t.hold = Some("Duplicate".to_string());
        }
        t
    }

    fn snapshot(report: &Report, transactions: Vec<Transaction>) -> ReportSnapshot {
        ReportSnapshot::new(vec![report.clone()], vec![], transactions, vec![]).unwrap()
    }

    #[test]
    fn expense_breakdown_flips_sign() {
        let mut report = expense_report(-5000);
        report.non_reimbursable_total = Some(-1500);
        let breakdown = snapshot(&report, vec![]).spend_breakdown(Some(&report));
        assert_eq!(
            breakdown,
            SpendBreakdown {
                non_reimbursable_spend: 1500,
                reimbursable_spend: 3500,
                total_display_spend: 5000,
            }
        );
    }

    #[test]
    fn expense_breakdown_keeps_credits_negative() {
        let report = expense_report(2000);
        let breakdown = snapshot(&report, vec![]).spend_breakdown(Some(&report));
        assert_eq!(breakdown.total_display_spend, -2000);
        assert_eq!(breakdown.reimbursable_spend, -2000);
    }

    #[test]
    fn iou_breakdown_uses_magnitude() {
        let mut report = Report::new(report_id("r1"), ReportKind::Iou, Some(Currency::USD));
        report.total = Some(-1200);
        let breakdown = snapshot(&report, vec![]).spend_breakdown(Some(&report));
        assert_eq!(breakdown.total_display_spend, 1200);
        assert_eq!(breakdown.reimbursable_spend, 1200);
    }

    #[test]
    fn breakdown_of_missing_report_is_zero() {
        let breakdown = ReportSnapshot::default().spend_breakdown(None);
        assert_eq!(breakdown, SpendBreakdown::default());
    }

    #[test]
    fn held_detection() {
        let report = expense_report(-5000);
        let s = snapshot(
            &report,
            vec![transaction("t1", -2500, true), transaction("t2", -2500, false)],
        );
        assert!(s.has_held_expenses(Some(&report.report_id)));
        assert!(!s.has_only_held_expenses(Some(&report.report_id)));

        let s = snapshot(&report, vec![transaction("t1", -2500, true)]);
        assert!(s.has_held_expenses(Some(&report.report_id)));
        assert!(s.has_only_held_expenses(Some(&report.report_id)));
    }

    #[test]
    fn empty_hold_reason_is_not_a_hold() {
        let report = expense_report(-2500);
        let mut t = transaction("t1", -2500, false);
        t.hold = Some(String::new());
        let s = snapshot(&report, vec![t]);
        assert!(!s.has_held_expenses(Some(&report.report_id)));
    }

    #[test]
    fn report_without_transactions_only_has_held_expenses_vacuously() {
        let report = expense_report(0);
        let s = snapshot(&report, vec![]);
        assert!(!s.has_held_expenses(Some(&report.report_id)));
        assert!(s.has_only_held_expenses(Some(&report.report_id)));
        assert!(s.has_only_held_expenses(None));
    }

    #[test]
    fn missing_report_has_updated_total() {
        assert!(ReportSnapshot::default().has_updated_total(None, None));
    }

    #[test]
    fn pending_foreign_currency_transaction_invalidates_total() {
        let mut report = expense_report(-5000);
        report.unheld_total = Some(-5000);
        let mut t = transaction("t1", -5000, false);
        t.currency = Some(Currency::EUR);
        t.has_pending_action = true;
        let s = snapshot(&report, vec![t]);
        assert!(!s.has_updated_total(Some(&report), None));
    }

    #[test]
    fn pending_chat_in_other_workspace_currency_invalidates_total() {
        let mut report = expense_report(-5000);
        report.is_creating_chat = true;
        let mut t = transaction("t1", -5000, false);
        t.has_pending_action = true;
        let s = snapshot(&report, vec![t]);
        let policy = Policy {
            policy_id: policy_id("p1"),
            output_currency: Some(Currency::EUR),
        };
        assert!(!s.has_updated_total(Some(&report), Some(&policy)));

        let policy = Policy {
            policy_id: policy_id("p1"),
            output_currency: Some(Currency::USD),
        };
        assert!(s.has_updated_total(Some(&report), Some(&policy)));
    }

    #[test]
    fn optimistic_hold_invalidates_total() {
        let report = expense_report(-5000);
        let s = snapshot(&report, vec![transaction("t1", -5000, true)]);
        assert!(!s.has_updated_total(Some(&report), None));
    }

    #[test]
    fn non_held_split_from_backend_totals() {
        let mut report = expense_report(-5000);
        report.non_reimbursable_total = Some(-1000);
        report.unheld_total = Some(-3000);
        report.unheld_non_reimbursable_total = Some(-500);
        let s = snapshot(&report, vec![]);

        let split = s.non_held_and_full_amount(Some(&report), None, true);
        assert_eq!(split.non_held_amount, 2500);
        assert_eq!(split.full_amount, 4000);
        assert!(split.has_valid_non_held_amount);

        let split = s.non_held_and_full_amount(Some(&report), None, false);
        assert_eq!(split.non_held_amount, 3000);
        assert_eq!(split.full_amount, 5000);
    }

    #[test]
    fn non_held_split_from_pending_transactions() {
        let mut report = expense_report(-5000);
        report.unheld_total = Some(-5000);
        let mut pending = transaction("t2", -1500, false);
        pending.has_pending_action = true;
        let s = snapshot(
            &report,
            vec![transaction("t1", -3500, true), pending],
        );

        let split = s.non_held_and_full_amount(Some(&report), None, true);
        assert_eq!(split.non_held_amount, 1500);
        assert_eq!(split.full_amount, 5000);
        assert!(split.has_valid_non_held_amount);
    }

    #[test]
    fn negative_non_held_amount_is_invalid() {
        let mut report = expense_report(-1000);
        report.unheld_total = Some(1000);
        let split = snapshot(&report, vec![]).non_held_and_full_amount(Some(&report), None, true);
        assert_eq!(split.non_held_amount, -1000);
        assert!(!split.has_valid_non_held_amount);
    }

    #[test]
    fn breakdown_saturates_at_i64_bounds() {
        let mut report = expense_report(i64::MIN);
        report.non_reimbursable_total = Some(i64::MAX);
        let breakdown = snapshot(&report, vec![]).spend_breakdown(Some(&report));
        assert_eq!(breakdown.total_display_spend, i64::MAX);
        assert_eq!(breakdown.non_reimbursable_spend, -i64::MAX);
        assert_eq!(breakdown.reimbursable_spend, i64::MAX);

        let mut report = Report::new(report_id("r1"), ReportKind::Iou, Some(Currency::USD));
        report.total = Some(i64::MIN);
        let breakdown = snapshot(&report, vec![]).spend_breakdown(Some(&report));
        assert_eq!(breakdown.total_display_spend, i64::MAX);
        assert_eq!(breakdown.reimbursable_spend, i64::MAX);
    }

    #[test]
    fn non_held_split_saturates_at_i64_bounds() {
        let mut report = expense_report(i64::MIN);
        report.unheld_total = Some(i64::MIN);
        report.non_reimbursable_total = Some(1);
        report.unheld_non_reimbursable_total = Some(i64::MAX);
        let s = snapshot(&report, vec![]);

        let split = s.non_held_and_full_amount(Some(&report), None, false);
        assert_eq!(split.non_held_amount, i64::MAX);
        assert_eq!(split.full_amount, i64::MAX);

        let split = s.non_held_and_full_amount(Some(&report), None, true);
        assert_eq!(split.non_held_amount, i64::MAX);
        assert_eq!(split.full_amount, i64::MAX);
        assert!(split.has_valid_non_held_amount);
    }

    #[test]
    fn pending_transaction_sum_saturates() {
        let mut report = expense_report(i64::MIN);
        report.unheld_total = Some(i64::MIN);
        let mut pending = transaction("t2", i64::MIN, false);
        pending.has_pending_action = true;
        let s = snapshot(&report, vec![transaction("t1", i64::MIN, false), pending]);

        let split = s.non_held_and_full_amount(Some(&report), None, true);
        assert_eq!(split.non_held_amount, i64::MAX);
        assert_eq!(split.full_amount, i64::MAX);
        assert!(split.has_valid_non_held_amount);

        let mut report = Report::new(report_id("r1"), ReportKind::Iou, Some(Currency::USD));
        report.total = Some(i64::MAX);
        report.unheld_total = Some(i64::MAX);
        let mut pending = transaction("t2", i64::MAX, false);
        pending.has_pending_action = true;
        let s = snapshot(&report, vec![transaction("t1", i64::MAX, false), pending]);
        let split = s.non_held_and_full_amount(Some(&report), None, true);
        assert_eq!(split.non_held_amount, i64::MAX);
    }

    #[test]
    fn non_held_split_of_missing_report_is_zero() {
        let split = ReportSnapshot::default().non_held_and_full_amount(None, None, true);
        assert_eq!(
            split,
            HeldSplit {
                non_held_amount: 0,
                full_amount: 0,
                has_valid_non_held_amount: true,
            }
        );
    }
}
