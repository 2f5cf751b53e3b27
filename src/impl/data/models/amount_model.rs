use crate::entities::{Amount, Cost};

use super::scalar_models::{DateModel, DecimalModel};

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct AmountModel {
    number: DecimalModel,
    currency: String,
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct CostModel {
    number: DecimalModel,
    currency: String,
    date: Option<DateModel>,
    label: Option<String>,
}

impl From<AmountModel> for Amount {
    fn from(model: AmountModel) -> Amount {
        Amount::new(model.number.into(), model.currency)
    }
}

impl From<CostModel> for Cost {
    fn from(model: CostModel) -> Cost {
        Cost {
            number: model.number.into(),
            currency: model.currency,
            date: model.date.map(Into::into),
            label: model.label,
        }
    }
}
