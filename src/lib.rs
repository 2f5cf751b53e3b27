//! Canonical, column-aligned printing of ledger records, grouped under
//! `;;; YEAR` and `;;;; YEAR Month` comment headers.
//!
//! ```
//! use chrono::NaiveDate;
//! use ledger_datetree::{entities::*, printing::DateTreeOrganizer};
//!
//! let date = NaiveDate::from_ymd_opt(2023, 1, 5).unwrap();
//! let records = vec![Record::new(date, open("Assets:Cash", &["USD"], None))];
//! let organizer = DateTreeOrganizer::new(PrinterConfig::default());
//! let ledger = organizer.render(&records).unwrap();
//! assert_eq!(
//!     ledger,
//!     ";;; 2023\n;;;; 2023 January\n\n2023-01-05 open Assets:Cash USD\n\n"
//! );
//! ```

mod r#impl;
pub(crate) use r#impl::data;
pub(crate) use r#impl::domain;
pub use r#impl::exports::*;
pub(crate) use r#impl::presentation;

mod impl_ext;
pub mod ext {
    pub use super::impl_ext::exports::*;
}

pub mod errors;
pub mod util;
