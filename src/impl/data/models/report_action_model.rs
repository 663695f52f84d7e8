use fractic_server_error::ServerError;

use crate::{
    entities::{
        ActionName, IouActionType, IouMessage, ReportAction, ReportActionId, ReportId,
        TransactionId,
    },
    errors::InvalidIouMessage,
};

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct IouMessageModel {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(rename = "IOUTransactionID")]
    pub transaction_id: Option<String>,
}

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReportActionModel {
    #[serde(rename = "reportActionID")]
    pub report_action_id: String,
    #[serde(rename = "reportID")]
    pub report_id: Option<String>,
    pub action_name: String,
    /// Shape depends on the action name, so it is only decoded for money
    /// requests.
    pub original_message: Option<serde_json::Value>,
    #[serde(rename = "childReportID")]
    pub child_report_id: Option<String>,
}

impl From<&str> for ActionName {
    fn from(s: &str) -> Self {
        match s {
            "IOU" => ActionName::Iou,
            "CREATED" => ActionName::Created,
            "ADDCOMMENT" => ActionName::AddComment,
            "REPORTPREVIEW" => ActionName::ReportPreview,
            other => ActionName::Other(other.to_string()),
        }
    }
}

impl From<&str> for IouActionType {
    fn from(s: &str) -> Self {
        match s {
            "create" => IouActionType::Create,
            "track" => IouActionType::Track,
            "pay" => IouActionType::Pay,
            "split" => IouActionType::Split,
            "delete" => IouActionType::Delete,
            _ => IouActionType::Other,
        }
    }
}

impl Into<IouMessage> for IouMessageModel {
    fn into(self) -> IouMessage {
        IouMessage {
            kind: self
                .kind
                .as_deref()
                .map_or(IouActionType::Other, IouActionType::from),
            transaction_id: self
                .transaction_id
                .filter(|id| !id.is_empty())
                .map(TransactionId),
        }
    }
}

impl TryFrom<ReportActionModel> for ReportAction {
    type Error = ServerError;

    fn try_from(model: ReportActionModel) -> Result<Self, Self::Error> {
        let name = ActionName::from(model.action_name.as_str());
        let original_message = match (&name, model.original_message) {
            (ActionName::Iou, Some(raw)) if !raw.is_null() => {
                let message: IouMessageModel = serde_json::from_value(raw).map_err(|e| {
                    InvalidIouMessage::with_debug(model.report_action_id.as_str(), &e)
                })?;
                Some(message.into())
            }
            _ => None,
        };
        Ok(ReportAction {
            report_action_id: ReportActionId(model.report_action_id),
            report_id: model.report_id.filter(|id| !id.is_empty()).map(ReportId),
            name,
            original_message,
            child_report_id: model
                .child_report_id
                .filter(|id| !id.is_empty() && id != "0")
                .map(ReportId),
        })
    }
}
