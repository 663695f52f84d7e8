use crate::entities::{ActionTag, EligibilityFlags};

/// Pick the single primary action to surface for a report.
///
/// Rules are checked in priority order and the first match wins. Settlement
/// (Pay, then Approve) outranks review, review is held back while the report
/// still needs submitting, and export only shows when neither settlement nor
/// review applies.
pub fn select_action(flags: &EligibilityFlags) -> ActionTag {
    let EligibilityFlags {
        can_submit,
        can_export_to_accounting,
        has_reviewable_duplicates,
        can_settle,
        can_pay,
        can_approve,
    } = *flags;

    let settle_without_review = can_settle && !has_reviewable_duplicates;
    let settle_or_review = can_settle || has_reviewable_duplicates;
    let settle_or_export = can_settle || can_export_to_accounting;

    if settle_without_review && can_pay {
        return ActionTag::Pay;
    }
    if settle_without_review && can_approve {
        return ActionTag::Approve;
    }
    if !settle_or_review && can_export_to_accounting {
        return ActionTag::Export;
    }
    if has_reviewable_duplicates && !can_submit && settle_or_export {
        return ActionTag::Review;
    }
    if can_submit {
        return ActionTag::Submit;
    }
    ActionTag::None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags_from_bits(bits: u8) -> EligibilityFlags {
        EligibilityFlags {
            can_submit: bits & 1 != 0,
            can_export_to_accounting: bits & 2 != 0,
            has_reviewable_duplicates: bits & 4 != 0,
            can_settle: bits & 8 != 0,
            can_pay: bits & 16 != 0,
            can_approve: bits & 32 != 0,
        }
    }

    /// Independent restatement of the priority table, one rule per row.
    fn expected(f: &EligibilityFlags) -> ActionTag {
        let rules: [(bool, ActionTag); 5] = [
            (
                f.can_settle && !f.has_reviewable_duplicates && f.can_pay,
                ActionTag::Pay,
            ),
            (
                f.can_settle && !f.has_reviewable_duplicates && f.can_approve,
                ActionTag::Approve,
            ),
            (
                !f.can_settle && !f.has_reviewable_duplicates && f.can_export_to_accounting,
                ActionTag::Export,
            ),
            (
                f.has_reviewable_duplicates
                    && !f.can_submit
                    && (f.can_settle || f.can_export_to_accounting),
                ActionTag::Review,
            ),
            (f.can_submit, ActionTag::Submit),
        ];
        rules
            .into_iter()
            .find(|(matches, _)| *matches)
            .map_or(ActionTag::None, |(_, tag)| tag)
    }

    #[test]
    fn every_flag_combination_matches_priority_table() {
        for bits in 0..64u8 {
            let flags = flags_from_bits(bits);
            assert_eq!(select_action(&flags), expected(&flags), "{flags:?}");
        }
    }

    #[test]
    fn every_tag_is_reachable() {
        let produced: Vec<ActionTag> = (0..64u8)
            .map(|bits| select_action(&flags_from_bits(bits)))
            .collect();
        for tag in ActionTag::ALL {
            assert!(produced.contains(&tag), "{tag:?} never selected");
        }
    }

    #[test]
    fn pay_beats_approve() {
        let flags = EligibilityFlags {
            can_settle: true,
            can_pay: true,
            can_approve: true,
            ..Default::default()
        };
        assert_eq!(select_action(&flags), ActionTag::Pay);
    }

    #[test]
    fn approve_when_settling_without_pay() {
        let flags = EligibilityFlags {
            can_settle: true,
            can_approve: true,
            can_submit: true,
            ..Default::default()
        };
        assert_eq!(select_action(&flags), ActionTag::Approve);
    }

    #[test]
    fn export_when_nothing_to_settle_or_review() {
        let flags = EligibilityFlags {
            can_export_to_accounting: true,
            can_submit: true,
            ..Default::default()
        };
        assert_eq!(select_action(&flags), ActionTag::Export);
    }

    #[test]
    fn review_outranks_settlement_when_duplicates_exist() {
        let flags = EligibilityFlags {
            has_reviewable_duplicates: true,
            can_settle: true,
            can_pay: true,
            can_approve: true,
            ..Default::default()
        };
        assert_eq!(select_action(&flags), ActionTag::Review);
    }

    #[test]
    fn review_through_export_eligibility() {
        let flags = EligibilityFlags {
            has_reviewable_duplicates: true,
            can_export_to_accounting: true,
            ..Default::default()
        };
        assert_eq!(select_action(&flags), ActionTag::Review);
    }

    #[test]
    fn submit_suppresses_review() {
        let flags = EligibilityFlags {
            has_reviewable_duplicates: true,
            can_settle: true,
            can_submit: true,
            ..Default::default()
        };
        assert_eq!(select_action(&flags), ActionTag::Submit);
    }

    #[test]
    fn review_without_settle_or_export_falls_through() {
        let flags = EligibilityFlags {
            has_reviewable_duplicates: true,
            ..Default::default()
        };
        assert_eq!(select_action(&flags), ActionTag::None);
    }

    #[test]
    fn settle_alone_is_none() {
        let flags = EligibilityFlags {
            can_settle: true,
            ..Default::default()
        };
        assert_eq!(select_action(&flags), ActionTag::None);
    }

    #[test]
    fn all_false_is_none() {
        assert_eq!(select_action(&EligibilityFlags::default()), ActionTag::None);
    }
}
