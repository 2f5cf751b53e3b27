use std::sync::LazyLock;

use regex::Regex;

use crate::entities::{Amount, Cost, DisplayContext, Posting};

static CURRENCY_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[A-Z]").expect("hardcoded regex should be valid"));

/// The three columns of a posting line, before alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PostingStrings {
    pub(crate) account: String,
    pub(crate) position: String,
    pub(crate) weight: String,
}

pub(crate) fn render_amount<C: DisplayContext>(amount: &Amount, ctx: &C) -> String {
    format!(
        "{} {}",
        ctx.format_number(&amount.number, &amount.currency),
        amount.currency
    )
}

fn render_cost<C: DisplayContext>(cost: &Cost, ctx: &C) -> String {
    let mut parts = vec![format!(
        "{} {}",
        ctx.format_number(&cost.number, &cost.currency),
        cost.currency
    )];
    if let Some(date) = cost.date {
        parts.push(date.to_string());
    }
    if let Some(label) = &cost.label {
        parts.push(format!("\"{}\"", ctx.escape_string(label)));
    }
    parts.join(", ")
}

pub(crate) fn render_posting_strings<C: DisplayContext>(
    posting: &Posting,
    ctx: &C,
) -> PostingStrings {
    let account = match posting.flag {
        Some(flag) => format!("{} {}", flag, posting.account),
        None => posting.account.clone(),
    };

    let mut position = match (&posting.units, &posting.cost) {
        (Some(units), Some(cost)) => {
            format!("{} {{{}}}", render_amount(units, ctx), render_cost(cost, ctx))
        }
        (Some(units), None) => render_amount(units, ctx),
        (None, _) => String::new(),
    };
    if let Some(price) = &posting.price {
        position.push_str(&format!(" @ {}", render_amount(price, ctx)));
    }

    // Weights are shown at full precision.
    let weight = posting.weight().map(|w| w.to_string()).unwrap_or_default();

    PostingStrings {
        account,
        position,
        weight,
    }
}

/// Character offset of the first uppercase letter, i.e. where the currency
/// starts in a rendered position.
pub(crate) fn currency_offset(s: &str) -> Option<usize> {
    CURRENCY_START
        .find(s)
        .map(|m| s[..m.start()].chars().count())
}

/// Aligns rendered positions so their first currency letters share a column.
///
/// Strings with no uppercase letter, or starting with one, cannot be split
/// into number and currency and are left-justified instead. Returns the
/// aligned strings (all of the same width) and that width.
pub(crate) fn align_position_strings<I, S>(strings: I) -> (Vec<String>, usize)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut max_before = 0usize;
    let mut max_after = 0usize;
    let mut max_unknown = 0usize;

    let items: Vec<(Option<usize>, String)> = strings
        .into_iter()
        .map(|s| {
            let s = s.as_ref().to_string();
            let len = s.chars().count();
            match currency_offset(&s) {
                Some(index) if index != 0 => {
                    max_before = max_before.max(index);
                    max_after = max_after.max(len - index);
                    (Some(index), s)
                }
                _ => {
                    max_unknown = max_unknown.max(len);
                    (None, s)
                }
            }
        })
        .collect();

    let max_total = (max_before + max_after).max(max_unknown);
    let width_after = max_total - max_before;

    let aligned: Vec<String> = items
        .into_iter()
        .map(|(index, s)| match index {
            Some(index) => {
                let split = s.char_indices().nth(index).map_or(s.len(), |(i, _)| i);
                let (number, currency) = s.split_at(split);
                format!(
                    "{:>before$}{:<after$}",
                    number,
                    currency,
                    before = max_before,
                    after = width_after
                )
            }
            None => format!("{:<max_total$}", s),
        })
        .collect();

    (aligned, max_total)
}
