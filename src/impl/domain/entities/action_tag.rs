use std::fmt;

/// Primary action surfaced on a report preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionTag {
    Pay,
    Approve,
    Export,
    Review,
    Submit,
    None,
}

impl ActionTag {
    pub const ALL: [ActionTag; 6] = [
        ActionTag::Pay,
        ActionTag::Approve,
        ActionTag::Export,
        ActionTag::Review,
        ActionTag::Submit,
        ActionTag::None,
    ];

    /// Key of the matching primary action in the application, if any.
    pub fn primary_action_key(&self) -> Option<&'static str> {
        match self {
            ActionTag::Pay => Some("pay"),
            ActionTag::Approve => Some("approve"),
            ActionTag::Export => Some("exportToAccounting"),
            ActionTag::Review => Some("reviewDuplicates"),
            ActionTag::Submit => Some("submit"),
            ActionTag::None => None,
        }
    }

    /// Whether a display amount can accompany this action at all.
    pub fn carries_amount(&self) -> bool {
        !matches!(self, ActionTag::None | ActionTag::Export)
    }
}

impl fmt::Display for ActionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.primary_action_key().unwrap_or("none"))
    }
}
