use crate::entities::{ActionName, IouActionType, ReportAction};

/// Money-request types shown in the expense list at the top of the report
/// rather than in the feed.
const FEED_HIDDEN_IOU_TYPES: [IouActionType; 2] = [IouActionType::Create, IouActionType::Track];

/// Whether the action belongs in the message feed of a money-request report.
pub fn is_visible_in_feed(action: &ReportAction) -> bool {
    if action.is_money_request() {
        return action
            .iou_message()
            .is_some_and(|message| !FEED_HIDDEN_IOU_TYPES.contains(&message.kind));
    }
    action.name != ActionName::Created
}
