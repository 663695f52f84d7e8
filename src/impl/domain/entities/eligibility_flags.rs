/// Pre-computed eligibility signals for one report, as seen by one viewer.
///
/// The flags are independent of each other; any combination is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EligibilityFlags {
    pub can_submit: bool,
    pub can_export_to_accounting: bool,
    /// The report has reviewable issues (ex. duplicate expenses).
    pub has_reviewable_duplicates: bool,
    pub can_settle: bool,
    pub can_pay: bool,
    pub can_approve: bool,
}
