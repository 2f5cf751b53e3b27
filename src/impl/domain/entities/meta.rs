use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::amount::Amount;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaValue {
    Text(String),
    /// Account names render unquoted.
    Account(String),
    Currency(String),
    Number(Decimal),
    Date(NaiveDate),
    Bool(bool),
    Amount(Amount),
}

/// Metadata attached to a record or posting. Keys keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Meta(Vec<(String, MetaValue)>);

impl Meta {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Inserts a value, replacing (in place) any previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: MetaValue) {
        let key = key.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetaValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, MetaValue)> for Meta {
    fn from_iter<T: IntoIterator<Item = (K, MetaValue)>>(iter: T) -> Self {
        let mut meta = Meta::new();
        for (key, value) in iter {
            meta.insert(key, value);
        }
        meta
    }
}

// Easy conversion.

impl From<&str> for MetaValue {
    fn from(s: &str) -> Self {
        MetaValue::Text(s.to_string())
    }
}

impl From<Decimal> for MetaValue {
    fn from(d: Decimal) -> Self {
        MetaValue::Number(d)
    }
}

impl From<NaiveDate> for MetaValue {
    fn from(d: NaiveDate) -> Self {
        MetaValue::Date(d)
    }
}

impl From<bool> for MetaValue {
    fn from(b: bool) -> Self {
        MetaValue::Bool(b)
    }
}

impl From<Amount> for MetaValue {
    fn from(a: Amount) -> Self {
        MetaValue::Amount(a)
    }
}
