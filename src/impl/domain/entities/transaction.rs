use std::collections::BTreeSet;

use super::{
    amount::{Amount, Cost},
    meta::Meta,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub flag: char,
    pub payee: Option<String>,
    pub narration: Option<String>,
    pub tags: BTreeSet<String>,
    pub links: BTreeSet<String>,
    pub postings: Vec<Posting>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posting {
    pub account: String,
    pub flag: Option<char>,
    /// `None` when the amount was elided (interpolated by the loader).
    pub units: Option<Amount>,
    pub cost: Option<Cost>,
    pub price: Option<Amount>,
    pub meta: Meta,
}

// --

impl Transaction {
    pub fn new(flag: char) -> Self {
        Self {
            flag,
            payee: None,
            narration: None,
            tags: BTreeSet::new(),
            links: BTreeSet::new(),
            postings: Vec::new(),
        }
    }

    pub fn with_payee(mut self, payee: impl Into<String>) -> Self {
        self.payee = Some(payee.into());
        self
    }

    pub fn with_narration(mut self, narration: impl Into<String>) -> Self {
        self.narration = Some(narration.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.links.insert(link.into());
        self
    }

    pub fn with_posting(mut self, posting: Posting) -> Self {
        self.postings.push(posting);
        self
    }
}

impl Posting {
    pub fn new(account: impl Into<String>, units: Amount) -> Self {
        Self {
            account: account.into(),
            flag: None,
            units: Some(units),
            cost: None,
            price: None,
            meta: Meta::new(),
        }
    }

    pub fn elided(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            flag: None,
            units: None,
            cost: None,
            price: None,
            meta: Meta::new(),
        }
    }

    pub fn with_flag(mut self, flag: char) -> Self {
        self.flag = Some(flag);
        self
    }

    pub fn with_cost(mut self, cost: Cost) -> Self {
        self.cost = Some(cost);
        self
    }

    pub fn with_price(mut self, price: Amount) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = meta;
        self
    }
}
