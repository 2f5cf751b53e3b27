use crate::entities::{Record, RecordKind};

impl RecordKind {
    /// Secondary sort rank among records sharing a date: accounts open
    /// first and close last, balance assertions run before the day's
    /// transactions, documents after them.
    pub fn sort_rank(&self) -> i8 {
        match self {
            RecordKind::Open => -2,
            RecordKind::Balance => -1,
            RecordKind::Document => 1,
            RecordKind::Close => 2,
            _ => 0,
        }
    }
}

/// Stable sort by `(date, kind rank)`, the order the date tree expects.
pub fn sort_records(records: &mut [Record]) {
    records.sort_by_key(|r| (r.date, r.kind().sort_rank()));
}
