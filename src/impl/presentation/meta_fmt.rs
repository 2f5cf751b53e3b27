use crate::entities::{DisplayContext, Meta, MetaValue};

/// Keys the loader attaches for its own bookkeeping.
fn is_internal_key(key: &str) -> bool {
    key == "filename" || key == "lineno" || key.starts_with("__")
}

pub(crate) fn render_meta_value<C: DisplayContext>(value: &MetaValue, ctx: &C) -> String {
    match value {
        MetaValue::Text(s) => format!("\"{}\"", ctx.escape_string(s)),
        MetaValue::Account(s) | MetaValue::Currency(s) => s.clone(),
        MetaValue::Number(n) => n.to_string(),
        MetaValue::Date(d) => d.to_string(),
        MetaValue::Bool(true) => "TRUE".to_string(),
        MetaValue::Bool(false) => "FALSE".to_string(),
        MetaValue::Amount(a) => a.to_string(),
    }
}

/// One `PREFIXkey: value` line per entry, in insertion order.
pub(crate) fn render_metadata<C: DisplayContext>(meta: &Meta, prefix: &str, ctx: &C) -> String {
    meta.iter()
        .filter(|(key, _)| !is_internal_key(key))
        .map(|(key, value)| format!("{}{}: {}\n", prefix, key, render_meta_value(value, ctx)))
        .collect()
}
