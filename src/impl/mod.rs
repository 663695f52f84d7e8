// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod snapshot_json_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod currency_code_model;
        pub(crate) mod policy_model;
        pub(crate) mod preview_config_model;
        pub(crate) mod report_action_model;
        pub(crate) mod report_model;
        pub(crate) mod snapshot_model;
        pub(crate) mod transaction_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod snapshot_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod action_tag;
        pub(crate) mod eligibility_flags;
        pub(crate) mod handlers;
        pub(crate) mod ids;
        pub(crate) mod policy;
        pub(crate) mod preview_config;
        pub(crate) mod report;
        pub(crate) mod report_action;
        pub(crate) mod report_preview;
        pub(crate) mod report_snapshot;
        pub(crate) mod transaction;
    }
    pub(crate) mod logic {
        pub(crate) mod action_selector;
        pub(crate) mod amount_resolver;
        pub(crate) mod feed_visibility;
        pub(crate) mod report_state;
        pub(crate) mod thread_lookup;
    }
    pub(crate) mod repositories {
        pub(crate) mod snapshot_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod load_snapshot_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod display_amount_fmt;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::action_tag::*;
        pub use crate::domain::entities::eligibility_flags::*;
        pub use crate::domain::entities::handlers::*;
        pub use crate::domain::entities::ids::*;
        pub use crate::domain::entities::policy::*;
        pub use crate::domain::entities::preview_config::*;
        pub use crate::domain::entities::report::*;
        pub use crate::domain::entities::report_action::*;
        pub use crate::domain::entities::report_preview::*;
        pub use crate::domain::entities::report_snapshot::*;
        pub use crate::domain::entities::transaction::*;
    }

    pub mod preview {
        pub use crate::domain::logic::action_selector::select_action;
        pub use crate::domain::logic::amount_resolver::resolve_amount;
        pub use crate::domain::logic::feed_visibility::is_visible_in_feed;
        pub use crate::domain::logic::thread_lookup::thread_report_ids;
        pub use crate::presentation::display_amount_fmt::DisplayAmountFormatter;
    }
}
