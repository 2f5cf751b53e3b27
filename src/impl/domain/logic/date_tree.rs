use std::collections::HashMap;

use chrono::Datelike as _;

use crate::entities::Record;

pub(crate) struct YearGroup<'a> {
    pub(crate) year: i32,
    pub(crate) months: Vec<MonthGroup<'a>>,
}

pub(crate) struct MonthGroup<'a> {
    pub(crate) month: u32,
    pub(crate) records: Vec<&'a Record>,
}

/// Buckets records by `(year, month)`.
///
/// Years come out in first-seen order, months in first-seen order within
/// their year. Records sharing a bucket keep their input order, even when
/// the input interleaves them with other months.
pub(crate) fn group_by_year_month(records: &[Record]) -> Vec<YearGroup<'_>> {
    let mut years: Vec<YearGroup<'_>> = Vec::new();
    let mut year_index: HashMap<i32, usize> = HashMap::new();
    let mut month_index: HashMap<(i32, u32), usize> = HashMap::new();

    for record in records {
        let (year, month) = (record.date.year(), record.date.month());
        let yi = *year_index.entry(year).or_insert_with(|| {
            years.push(YearGroup {
                year,
                months: Vec::new(),
            });
            years.len() - 1
        });
        let months = &mut years[yi].months;
        let mi = *month_index.entry((year, month)).or_insert_with(|| {
            months.push(MonthGroup {
                month,
                records: Vec::new(),
            });
            months.len() - 1
        });
        months[mi].records.push(record);
    }

    years
}
