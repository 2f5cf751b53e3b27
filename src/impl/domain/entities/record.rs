use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{
    amount::Amount,
    meta::{Meta, MetaValue},
    transaction::Transaction,
};

/// One ledger directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub date: NaiveDate,
    pub meta: Meta,
    pub body: RecordBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordBody {
    Open(Open),
    Close(Close),
    Commodity(Commodity),
    Pad(Pad),
    Balance(Balance),
    Transaction(Transaction),
    Note(Note),
    Event(Event),
    Query(Query),
    Price(Price),
    Document(Document),
    Custom(Custom),
}

/// Payload-free discriminant of [`RecordBody`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordKind {
    Open,
    Close,
    Commodity,
    Pad,
    Balance,
    Transaction,
    Note,
    Event,
    Query,
    Price,
    Document,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Booking {
    Strict,
    StrictWithSize,
    None,
    Average,
    Fifo,
    Lifo,
    Hifo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Open {
    pub account: String,
    pub currencies: Vec<String>,
    pub booking: Option<Booking>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Close {
    pub account: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commodity {
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pad {
    pub account: String,
    pub source_account: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Balance {
    pub account: String,
    pub amount: Amount,
    pub tolerance: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub account: String,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub event_type: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub name: String,
    pub query_string: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price {
    pub currency: String,
    pub amount: Amount,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub account: String,
    pub filename: String,
    pub tags: BTreeSet<String>,
    pub links: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Custom {
    pub custom_type: String,
    pub values: Vec<MetaValue>,
}

// --

impl Record {
    pub fn new(date: NaiveDate, body: impl Into<RecordBody>) -> Self {
        Self {
            date,
            meta: Meta::new(),
            body: body.into(),
        }
    }

    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = meta;
        self
    }

    pub fn kind(&self) -> RecordKind {
        self.body.kind()
    }
}

impl RecordBody {
    pub fn kind(&self) -> RecordKind {
        match self {
            RecordBody::Open(_) => RecordKind::Open,
            RecordBody::Close(_) => RecordKind::Close,
            RecordBody::Commodity(_) => RecordKind::Commodity,
            RecordBody::Pad(_) => RecordKind::Pad,
            RecordBody::Balance(_) => RecordKind::Balance,
            RecordBody::Transaction(_) => RecordKind::Transaction,
            RecordBody::Note(_) => RecordKind::Note,
            RecordBody::Event(_) => RecordKind::Event,
            RecordBody::Query(_) => RecordKind::Query,
            RecordBody::Price(_) => RecordKind::Price,
            RecordBody::Document(_) => RecordKind::Document,
            RecordBody::Custom(_) => RecordKind::Custom,
        }
    }
}

impl RecordKind {
    pub const ALL: [RecordKind; 12] = [
        RecordKind::Open,
        RecordKind::Close,
        RecordKind::Commodity,
        RecordKind::Pad,
        RecordKind::Balance,
        RecordKind::Transaction,
        RecordKind::Note,
        RecordKind::Event,
        RecordKind::Query,
        RecordKind::Price,
        RecordKind::Document,
        RecordKind::Custom,
    ];

    /// Directive keyword, also used as the serialized `type` tag.
    pub fn name(&self) -> &'static str {
        match self {
            RecordKind::Open => "open",
            RecordKind::Close => "close",
            RecordKind::Commodity => "commodity",
            RecordKind::Pad => "pad",
            RecordKind::Balance => "balance",
            RecordKind::Transaction => "transaction",
            RecordKind::Note => "note",
            RecordKind::Event => "event",
            RecordKind::Query => "query",
            RecordKind::Price => "price",
            RecordKind::Document => "document",
            RecordKind::Custom => "custom",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        RecordKind::ALL.into_iter().find(|k| k.name() == name)
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Booking {
    pub fn name(&self) -> &'static str {
        match self {
            Booking::Strict => "STRICT",
            Booking::StrictWithSize => "STRICT_WITH_SIZE",
            Booking::None => "NONE",
            Booking::Average => "AVERAGE",
            Booking::Fifo => "FIFO",
            Booking::Lifo => "LIFO",
            Booking::Hifo => "HIFO",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        [
            Booking::Strict,
            Booking::StrictWithSize,
            Booking::None,
            Booking::Average,
            Booking::Fifo,
            Booking::Lifo,
            Booking::Hifo,
        ]
        .into_iter()
        .find(|b| b.name() == name)
    }
}

// Shorthand constructors.

pub fn open(account: impl Into<String>, currencies: &[&str], booking: Option<Booking>) -> Open {
    Open {
        account: account.into(),
        currencies: currencies.iter().map(|c| c.to_string()).collect(),
        booking,
    }
}

pub fn close(account: impl Into<String>) -> Close {
    Close {
        account: account.into(),
    }
}

pub fn commodity(currency: impl Into<String>) -> Commodity {
    Commodity {
        currency: currency.into(),
    }
}

pub fn balance(account: impl Into<String>, amount: Amount, tolerance: Option<Decimal>) -> Balance {
    Balance {
        account: account.into(),
        amount,
        tolerance,
    }
}

// Easy conversion.

macro_rules! impl_into_record_body {
    ($typ:ty, $variant:ident) => {
        impl From<$typ> for RecordBody {
            fn from(body: $typ) -> RecordBody {
                RecordBody::$variant(body)
            }
        }
    };
}

impl_into_record_body!(Open, Open);
impl_into_record_body!(Close, Close);
impl_into_record_body!(Commodity, Commodity);
impl_into_record_body!(Pad, Pad);
impl_into_record_body!(Balance, Balance);
impl_into_record_body!(Transaction, Transaction);
impl_into_record_body!(Note, Note);
impl_into_record_body!(Event, Event);
impl_into_record_body!(Query, Query);
impl_into_record_body!(Price, Price);
impl_into_record_body!(Document, Document);
impl_into_record_body!(Custom, Custom);
