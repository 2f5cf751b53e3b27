// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod records_json_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod amount_model;
        pub(crate) mod meta_model;
        pub(crate) mod posting_model;
        pub(crate) mod record_model;
        pub(crate) mod scalar_models;
    }
    pub(crate) mod repositories {
        pub(crate) mod records_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod amount;
        pub(crate) mod config;
        pub(crate) mod display_context;
        pub(crate) mod meta;
        pub(crate) mod record;
        pub(crate) mod transaction;
    }
    pub(crate) mod logic {
        pub(crate) mod date_tree;
        pub(crate) mod ordering;
        pub(crate) mod posting_impl;
    }
    pub(crate) mod repositories {
        pub(crate) mod records_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod load_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod block_printer;
    pub(crate) mod date_tree_printer;
    pub(crate) mod entry_formatter;
    pub(crate) mod meta_fmt;
    pub(crate) mod posting_fmt;
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
        pub use crate::domain::entities::amount::*;
        pub use crate::domain::entities::config::*;
        pub use crate::domain::entities::display_context::*;
        pub use crate::domain::entities::meta::*;
        pub use crate::domain::entities::record::*;
        pub use crate::domain::entities::transaction::*;
    }

    pub mod printing {
        pub use crate::domain::logic::ordering::sort_records;
        pub use crate::presentation::block_printer::print_entries;
        pub use crate::presentation::date_tree_printer::DateTreeOrganizer;
        pub use crate::presentation::entry_formatter::EntryFormatter;
    }
}
