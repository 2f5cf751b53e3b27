use crate::entities::Posting;

use super::{
    amount_model::{AmountModel, CostModel},
    meta_model::MetaModel,
};

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct PostingModel {
    account: String,
    flag: Option<char>,
    units: Option<AmountModel>,
    cost: Option<CostModel>,
    price: Option<AmountModel>,
    #[serde(default)]
    meta: MetaModel,
}

impl From<PostingModel> for Posting {
    fn from(model: PostingModel) -> Posting {
        Posting {
            account: model.account,
            flag: model.flag,
            units: model.units.map(Into::into),
            cost: model.cost.map(Into::into),
            price: model.price.map(Into::into),
            meta: model.meta.into(),
        }
    }
}
