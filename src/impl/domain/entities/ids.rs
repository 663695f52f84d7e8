use std::fmt;

#[derive(Debug, PartialEq, Eq, Hash, Clone, PartialOrd, Ord)]
pub struct ReportId(pub(crate) String);

#[derive(Debug, PartialEq, Eq, Hash, Clone, PartialOrd, Ord)]
pub struct PolicyId(pub(crate) String);

#[derive(Debug, PartialEq, Eq, Hash, Clone, PartialOrd, Ord)]
pub struct TransactionId(pub(crate) String);

#[derive(Debug, PartialEq, Eq, Hash, Clone, PartialOrd, Ord)]
pub struct ReportActionId(pub(crate) String);

// Shorthand constructors.

pub fn report_id(id: impl Into<String>) -> ReportId {
    ReportId(id.into())
}

pub fn policy_id(id: impl Into<String>) -> PolicyId {
    PolicyId(id.into())
}

pub fn transaction_id(id: impl Into<String>) -> TransactionId {
    TransactionId(id.into())
}

pub fn report_action_id(id: impl Into<String>) -> ReportActionId {
    ReportActionId(id.into())
}

// Accessors.

macro_rules! id_accessors {
    ($($t:ty),*) => {
        $(
            impl $t {
                pub fn as_str(&self) -> &str {
                    &self.0
                }
            }

            impl fmt::Display for $t {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }
        )*
    };
}

id_accessors!(ReportId, PolicyId, TransactionId, ReportActionId);
