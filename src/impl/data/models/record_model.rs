use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::{
    entities::{
        Balance, Booking, Close, Commodity, Custom, Document, Event, Note, Open, Pad, Price, Query,
        Record, RecordBody, RecordKind, Transaction,
    },
    errors::{InvalidBookingMethod, MissingRecordField, UnsupportedRecordKind},
};

use super::{
    amount_model::AmountModel,
    meta_model::{MetaModel, MetaValueModel},
    posting_model::PostingModel,
    scalar_models::{DateModel, DecimalModel},
};

/// Serialized directive: a `type` tag plus the union of all kind-specific
/// fields. Which fields are required depends on the tag and is checked
/// when converting into a [`Record`].
#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct RecordModel {
    #[serde(rename = "type")]
    kind: String,
    date: DateModel,
    #[serde(default)]
    meta: MetaModel,

    account: Option<String>,
    source_account: Option<String>,
    currency: Option<String>,
    currencies: Option<Vec<String>>,
    booking: Option<String>,
    amount: Option<AmountModel>,
    tolerance: Option<DecimalModel>,

    flag: Option<char>,
    payee: Option<String>,
    narration: Option<String>,
    tags: Option<Vec<String>>,
    links: Option<Vec<String>>,
    postings: Option<Vec<PostingModel>>,

    comment: Option<String>,
    event_type: Option<String>,
    description: Option<String>,
    name: Option<String>,
    query_string: Option<String>,
    filename: Option<String>,
    custom_type: Option<String>,
    values: Option<Vec<MetaValueModel>>,
}

fn required<T>(
    value: Option<T>,
    date: &NaiveDate,
    kind: RecordKind,
    field: &str,
) -> Result<T, ServerError> {
    value.ok_or_else(|| MissingRecordField::new(date, kind.name(), field))
}

impl RecordModel {
    pub(crate) fn into_record(self) -> Result<Record, ServerError> {
        let date: NaiveDate = self.date.into();
        let kind = RecordKind::from_name(&self.kind)
            .ok_or_else(|| UnsupportedRecordKind::new(&date, &self.kind))?;

        let body: RecordBody = match kind {
            RecordKind::Open => Open {
                account: required(self.account, &date, kind, "account")?,
                currencies: self.currencies.unwrap_or_default(),
                booking: self
                    .booking
                    .map(|b| Booking::from_name(&b).ok_or_else(|| InvalidBookingMethod::new(&b)))
                    .transpose()?,
            }
            .into(),
            RecordKind::Close => Close {
                account: required(self.account, &date, kind, "account")?,
            }
            .into(),
            RecordKind::Commodity => Commodity {
                currency: required(self.currency, &date, kind, "currency")?,
            }
            .into(),
            RecordKind::Pad => Pad {
                account: required(self.account, &date, kind, "account")?,
                source_account: required(self.source_account, &date, kind, "source_account")?,
            }
            .into(),
            RecordKind::Balance => Balance {
                account: required(self.account, &date, kind, "account")?,
                amount: required(self.amount, &date, kind, "amount")?.into(),
                tolerance: self.tolerance.map(Into::into),
            }
            .into(),
            RecordKind::Transaction => Transaction {
                flag: required(self.flag, &date, kind, "flag")?,
                payee: self.payee,
                narration: self.narration,
                tags: self.tags.unwrap_or_default().into_iter().collect(),
                links: self.links.unwrap_or_default().into_iter().collect(),
                postings: self
                    .postings
                    .unwrap_or_default()
                    .into_iter()
                    .map(Into::into)
                    .collect(),
            }
            .into(),
            RecordKind::Note => Note {
                account: required(self.account, &date, kind, "account")?,
                comment: required(self.comment, &date, kind, "comment")?,
            }
            .into(),
            RecordKind::Event => Event {
                event_type: required(self.event_type, &date, kind, "event_type")?,
                description: required(self.description, &date, kind, "description")?,
            }
            .into(),
            RecordKind::Query => Query {
                name: required(self.name, &date, kind, "name")?,
                query_string: required(self.query_string, &date, kind, "query_string")?,
            }
            .into(),
            RecordKind::Price => Price {
                currency: required(self.currency, &date, kind, "currency")?,
                amount: required(self.amount, &date, kind, "amount")?.into(),
            }
            .into(),
            RecordKind::Document => Document {
                account: required(self.account, &date, kind, "account")?,
                filename: required(self.filename, &date, kind, "filename")?,
                tags: self.tags.unwrap_or_default().into_iter().collect(),
                links: self.links.unwrap_or_default().into_iter().collect(),
            }
            .into(),
            RecordKind::Custom => Custom {
                custom_type: required(self.custom_type, &date, kind, "custom_type")?,
                values: self
                    .values
                    .unwrap_or_default()
                    .into_iter()
                    .map(Into::into)
                    .collect(),
            }
            .into(),
        };

        Ok(Record {
            date,
            meta: self.meta.into(),
            body,
        })
    }
}
