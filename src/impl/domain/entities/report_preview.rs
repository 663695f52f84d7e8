use super::action_tag::ActionTag;

/// What a report preview shows: the primary action and its amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPreview {
    pub action: ActionTag,
    /// Display amount. Empty when the action carries none.
    pub amount: String,
}
