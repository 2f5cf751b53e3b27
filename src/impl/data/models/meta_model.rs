use std::fmt;

use serde::{
    de::{MapAccess, Visitor},
    Deserialize, Deserializer,
};

use crate::entities::{Meta, MetaValue};

use super::{
    amount_model::AmountModel,
    scalar_models::{DateModel, DecimalModel},
};

/// Plain strings and booleans are written as-is; everything else is a
/// single-key object naming its type, e.g. `{"number": "1.5"}`.
#[derive(Debug, serde_derive::Deserialize)]
#[serde(untagged)]
pub(crate) enum MetaValueModel {
    Text(String),
    Bool(bool),
    Typed(TypedValueModel),
}

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum TypedValueModel {
    Account(String),
    Currency(String),
    Number(DecimalModel),
    Date(DateModel),
    Amount(AmountModel),
}

/// JSON object deserialized in document order.
#[derive(Debug, Default)]
pub(crate) struct MetaModel(Vec<(String, MetaValueModel)>);

impl<'de> Deserialize<'de> for MetaModel {
    fn deserialize<D>(deserializer: D) -> Result<MetaModel, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MetaVisitor;

        impl<'de> Visitor<'de> for MetaVisitor {
            type Value = MetaModel;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a metadata object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<MetaModel, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::new();
                while let Some(entry) = map.next_entry::<String, MetaValueModel>()? {
                    entries.push(entry);
                }
                Ok(MetaModel(entries))
            }
        }

        deserializer.deserialize_map(MetaVisitor)
    }
}

impl From<MetaValueModel> for MetaValue {
    fn from(model: MetaValueModel) -> MetaValue {
        match model {
            MetaValueModel::Text(s) => MetaValue::Text(s),
            MetaValueModel::Bool(b) => MetaValue::Bool(b),
            MetaValueModel::Typed(TypedValueModel::Account(a)) => MetaValue::Account(a),
            MetaValueModel::Typed(TypedValueModel::Currency(c)) => MetaValue::Currency(c),
            MetaValueModel::Typed(TypedValueModel::Number(n)) => MetaValue::Number(n.into()),
            MetaValueModel::Typed(TypedValueModel::Date(d)) => MetaValue::Date(d.into()),
            MetaValueModel::Typed(TypedValueModel::Amount(a)) => MetaValue::Amount(a.into()),
        }
    }
}

impl From<MetaModel> for Meta {
    fn from(model: MetaModel) -> Meta {
        model
            .0
            .into_iter()
            .map(|(k, v)| (k, MetaValue::from(v)))
            .collect()
    }
}
