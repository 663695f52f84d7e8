use super::ids::{ReportActionId, ReportId, TransactionId};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActionName {
    /// Money request (IOU) action.
    Iou,
    /// Marker for the creation of the report.
    Created,
    AddComment,
    ReportPreview,
    Other(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IouActionType {
    Create,
    Track,
    Pay,
    Split,
    Delete,
    Other,
}

/// Payload of a money-request action.
#[derive(Debug, Clone)]
pub struct IouMessage {
    pub kind: IouActionType,
    pub transaction_id: Option<TransactionId>,
}

#[derive(Debug, Clone)]
pub struct ReportAction {
    pub report_action_id: ReportActionId,
    pub report_id: Option<ReportId>,
    pub name: ActionName,
    pub original_message: Option<IouMessage>,
    /// Discussion thread spawned from this action.
    pub child_report_id: Option<ReportId>,
}

impl ReportAction {
    pub fn is_money_request(&self) -> bool {
        self.name == ActionName::Iou
    }

    /// Original money-request payload. Only defined for money-request actions.
    pub fn iou_message(&self) -> Option<&IouMessage> {
        if !self.is_money_request() {
            return None;
        }
        self.original_message.as_ref()
    }
}
