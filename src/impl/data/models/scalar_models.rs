use std::str::FromStr;

use chrono::NaiveDate;
use fractic_server_error::ServerError;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::{InvalidDecimal, InvalidIsoDate};

/// `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DateModel(pub(crate) NaiveDate);

/// Decimals travel as strings so no precision is lost to floats.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DecimalModel(pub(crate) Decimal);

impl FromStr for DateModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(DateModel)
            .map_err(|e| InvalidIsoDate::with_debug(s, &e))
    }
}

impl FromStr for DecimalModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim())
            .map(DecimalModel)
            .map_err(|e| InvalidDecimal::with_debug(s, &e))
    }
}

macro_rules! impl_deserialize_via_from_str {
    ($typ:ty) => {
        impl<'de> Deserialize<'de> for $typ {
            fn deserialize<D>(deserializer: D) -> Result<$typ, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                <$typ>::from_str(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

impl_deserialize_via_from_str!(DateModel);
impl_deserialize_via_from_str!(DecimalModel);

impl From<DateModel> for NaiveDate {
    fn from(model: DateModel) -> NaiveDate {
        model.0
    }
}

impl From<DecimalModel> for Decimal {
    fn from(model: DecimalModel) -> Decimal {
        model.0
    }
}
