use crate::entities::{ReportAction, ReportId, Transaction, TransactionId};

/// First money-request action whose payload references the transaction.
pub(crate) fn iou_action_for_transaction<'a>(
    actions: &'a [ReportAction],
    transaction_id: &TransactionId,
) -> Option<&'a ReportAction> {
    actions.iter().find(|action| {
        action
            .iou_message()
            .and_then(|message| message.transaction_id.as_ref())
            == Some(transaction_id)
    })
}

/// Report IDs of the discussion threads belonging to each transaction.
///
/// Used to navigate between sibling transactions of a report. Follows the
/// order of `transactions`; transactions without a money-request action, or
/// whose action has no thread yet, are skipped.
///
/// A `childReportID` of `"0"` or `""` in a loaded snapshot is the backend's
/// placeholder for "thread not created yet" and is read as no thread, so such
/// transactions are skipped too.
pub fn thread_report_ids(actions: &[ReportAction], transactions: &[Transaction]) -> Vec<ReportId> {
    transactions
        .iter()
        .filter_map(|transaction| {
            iou_action_for_transaction(actions, &transaction.transaction_id)?
                .child_report_id
                .clone()
        })
        .collect()
}
