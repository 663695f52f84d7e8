use iso_currency::Currency;

use super::ids::PolicyId;

#[derive(Debug, Clone)]
pub struct Policy {
    pub policy_id: PolicyId,
    /// Currency the workspace reports in.
    pub output_currency: Option<Currency>,
}
