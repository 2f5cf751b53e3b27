use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::{
    entities::{
        Balance, Close, Commodity, Custom, DisplayContext, Document, Event, NaturalDisplayContext,
        Note, Open, Pad, Posting, Price, PrinterConfig, Query, Record, RecordBody, Transaction,
    },
    errors::PositionWithoutCurrency,
    presentation::{
        meta_fmt::{render_meta_value, render_metadata},
        posting_fmt::{
            align_position_strings, currency_offset, render_amount, render_posting_strings,
        },
    },
};

/// Width of everything on a balance line that is not the account, amount,
/// tolerance or currency: the date, the keyword and three separating spaces.
const BALANCE_LINE_OVERHEAD: &str = "0000-00-00 balance   ";

/// Renders single records as canonical, column-aligned ledger text.
///
/// Each call is independent: the formatter keeps no state between records.
pub struct EntryFormatter<C: DisplayContext = NaturalDisplayContext> {
    config: PrinterConfig,
    ctx: C,
}

impl EntryFormatter<NaturalDisplayContext> {
    /// Uses `config` as given. Configs built by hand are not validated; a
    /// zero currency column only makes every width clamp to 1. Use
    /// [`PrinterConfig::validate`] or [`PrinterConfig::from_ron`] to reject
    /// one up front.
    pub fn new(config: PrinterConfig) -> Self {
        Self {
            config,
            ctx: NaturalDisplayContext,
        }
    }
}

impl Default for EntryFormatter<NaturalDisplayContext> {
    fn default() -> Self {
        Self::new(PrinterConfig::default())
    }
}

impl<C: DisplayContext> EntryFormatter<C> {
    /// Same as [`EntryFormatter::new`], with a custom number formatter.
    pub fn with_display_context(config: PrinterConfig, ctx: C) -> Self {
        Self { config, ctx }
    }

    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    /// Renders one record, metadata included. Every line ends with a
    /// newline.
    pub fn format(&self, record: &Record) -> Result<String, ServerError> {
        let mut out = match &record.body {
            RecordBody::Open(open) => self.open(record.date, open),
            RecordBody::Close(close) => self.close(record.date, close),
            RecordBody::Commodity(commodity) => self.commodity(record.date, commodity),
            RecordBody::Pad(pad) => self.pad(record.date, pad),
            RecordBody::Balance(balance) => self.balance(record.date, balance),
            RecordBody::Note(note) => self.note(record.date, note),
            RecordBody::Event(event) => self.event(record.date, event),
            RecordBody::Query(query) => self.query(record.date, query),
            RecordBody::Price(price) => self.price(record.date, price),
            RecordBody::Document(document) => self.document(record.date, document),
            RecordBody::Custom(custom) => self.custom(record.date, custom),
            RecordBody::Transaction(tx) => return self.transaction(record, tx),
        };
        out.push_str(&render_metadata(&record.meta, &self.config.prefix, &self.ctx));
        Ok(out)
    }

    fn quoted(&self, s: &str) -> String {
        format!("\"{}\"", self.ctx.escape_string(s))
    }

    fn balance(&self, date: NaiveDate, balance: &Balance) -> String {
        let currency = &balance.amount.currency;
        let amount = self.ctx.format_number(&balance.amount.number, currency);
        let tolerance = match balance.tolerance {
            Some(tolerance) if !self.ctx.display_value(&tolerance, currency).is_zero() => {
                format!("~ {} ", self.ctx.format_number(&tolerance, currency))
            }
            _ => String::new(),
        };

        let width = clamp_width(
            self.config.target_currency_column as i64
                - char_len(&amount)
                - char_len(&tolerance)
                - char_len(BALANCE_LINE_OVERHEAD),
        );

        format!(
            "{} balance {:width$} {} {}{}\n",
            date, balance.account, amount, tolerance, currency
        )
    }

    fn open(&self, date: NaiveDate, open: &Open) -> String {
        let currencies = open.currencies.join(",");
        let booking = open
            .booking
            .map(|b| format!("\"{}\"", b.name()))
            .unwrap_or_default();
        let line = format!("{} open {} {} {}", date, open.account, currencies, booking);
        format!("{}\n", line.trim_end())
    }

    fn close(&self, date: NaiveDate, close: &Close) -> String {
        format!("{} close {}\n", date, close.account)
    }

    fn commodity(&self, date: NaiveDate, commodity: &Commodity) -> String {
        format!("{} commodity {}\n", date, commodity.currency)
    }

    fn pad(&self, date: NaiveDate, pad: &Pad) -> String {
        format!("{} pad {} {}\n", date, pad.account, pad.source_account)
    }

    fn note(&self, date: NaiveDate, note: &Note) -> String {
        format!("{} note {} {}\n", date, note.account, self.quoted(&note.comment))
    }

    fn event(&self, date: NaiveDate, event: &Event) -> String {
        format!(
            "{} event {} {}\n",
            date,
            self.quoted(&event.event_type),
            self.quoted(&event.description)
        )
    }

    fn query(&self, date: NaiveDate, query: &Query) -> String {
        format!(
            "{} query {} {}\n",
            date,
            self.quoted(&query.name),
            self.quoted(&query.query_string)
        )
    }

    fn price(&self, date: NaiveDate, price: &Price) -> String {
        format!(
            "{} price {} {}\n",
            date,
            price.currency,
            render_amount(&price.amount, &self.ctx)
        )
    }

    fn document(&self, date: NaiveDate, document: &Document) -> String {
        let mut line = format!(
            "{} document {} {}",
            date,
            document.account,
            self.quoted(&document.filename)
        );
        for tag in &document.tags {
            line.push_str(&format!(" #{}", tag));
        }
        for link in &document.links {
            line.push_str(&format!(" ^{}", link));
        }
        line.push('\n');
        line
    }

    fn custom(&self, date: NaiveDate, custom: &Custom) -> String {
        let mut line = format!("{} custom {}", date, self.quoted(&custom.custom_type));
        for value in &custom.values {
            line.push(' ');
            line.push_str(&render_meta_value(value, &self.ctx));
        }
        line.push('\n');
        line
    }

    fn transaction(&self, record: &Record, tx: &Transaction) -> Result<String, ServerError> {
        let prefix = self.config.prefix.as_str();
        let mut out = String::new();

        // Header.
        let payee = tx.payee.as_deref().filter(|s| !s.is_empty());
        let narration = tx.narration.as_deref().filter(|s| !s.is_empty());
        let mut strings = Vec::new();
        if let Some(payee) = payee {
            strings.push(self.quoted(payee));
        }
        match narration {
            Some(narration) => strings.push(self.quoted(narration)),
            None if payee.is_some() => strings.push("\"\"".to_string()),
            None => {}
        }
        out.push_str(&format!("{} {} {}\n", record.date, tx.flag, strings.join(" ")));

        for tag in &tx.tags {
            out.push_str(&format!("{}#{}\n", prefix, tag));
        }
        for link in &tx.links {
            out.push_str(&format!("{}^{}\n", prefix, link));
        }
        out.push_str(&render_metadata(&record.meta, prefix, &self.ctx));

        if tx.postings.is_empty() {
            return Ok(out);
        }

        // Postings.
        let rows: Vec<_> = tx
            .postings
            .iter()
            .map(|p| render_posting_strings(p, &self.ctx))
            .collect();
        let (positions, width_position) = align_position_strings(rows.iter().map(|r| &r.position));
        let (weights, width_weight) = align_position_strings(rows.iter().map(|r| &r.weight));

        let width_number = currency_offset(&positions[0]).ok_or_else(|| {
            PositionWithoutCurrency::new(&record.date, record.kind().name(), &rows[0].position)
        })?;
        let width_account = clamp_width(
            self.config.target_currency_column as i64
                - width_number as i64
                - char_len(prefix)
                - 2,
        );

        let render_weights =
            self.config.render_weight && tx.postings.iter().any(Posting::has_nontrivial_balance);
        let posting_meta_prefix = prefix.repeat(2);

        for (posting, (row, (position, weight))) in tx
            .postings
            .iter()
            .zip(rows.iter().zip(positions.iter().zip(weights.iter())))
        {
            let line = if render_weights {
                format!(
                    "{}{:wa$}  {:wp$}  ; {:ww$}",
                    prefix,
                    row.account,
                    position,
                    weight,
                    wa = width_account,
                    wp = width_position,
                    ww = width_weight
                )
            } else {
                format!(
                    "{}{:wa$}  {:wp$}",
                    prefix,
                    row.account,
                    position,
                    wa = width_account,
                    wp = width_position
                )
            };
            out.push_str(line.trim_end());
            out.push('\n');
            out.push_str(&render_metadata(&posting.meta, &posting_meta_prefix, &self.ctx));
        }

        Ok(out)
    }
}

fn char_len(s: &str) -> i64 {
    s.chars().count() as i64
}

/// Long accounts or currencies can push a computed column width to zero or
/// below; the field then takes its natural width.
fn clamp_width(width: i64) -> usize {
    if width < 1 {
        tracing::trace!(width, "clamping column width to 1");
        return 1;
    }
    width as usize
}

#[cfg(test)]
mod tests {
    use std::{collections::BTreeSet, str::FromStr as _};

    use rust_decimal::Decimal;

    use crate::{
        data::datasources::records_json_datasource::{
            RecordsJsonDatasource as _, RecordsJsonDatasourceImpl,
        },
        entities::{
            balance, close, commodity, open, Amount, Booking, Cost, Meta, MetaValue, RecordKind,
        },
        ext::display_contexts::CurrencyPrecisionContext,
    };

    use super::*;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn usd(s: &str) -> Amount {
        Amount::new(d(s), "USD")
    }

    fn coffee() -> Transaction {
        Transaction::new('*')
            .with_narration("Coffee")
            .with_posting(Posting::new("Assets:Cash", usd("-3.50")))
            .with_posting(Posting::new("Expenses:Food", usd("3.50")))
    }

    fn fmt(record: &Record) -> String {
        EntryFormatter::new(PrinterConfig::default()).format(record).unwrap()
    }

    #[test]
    fn test_balance_aligns_currency() {
        let record = Record::new(
            date(2023, 2, 1),
            balance("Assets:Cash", usd("100.00"), None),
        );
        let out = fmt(&record);
        assert_eq!(
            out,
            format!("2023-02-01 balance {:<39} 100.00 USD\n", "Assets:Cash")
        );
        assert_eq!(out.find("USD"), Some(66));
    }

    #[test]
    fn test_balance_with_tolerance() {
        let record = Record::new(
            date(2023, 2, 1),
            balance("Assets:Cash", usd("100.00"), Some(d("0.01"))),
        );
        let out = fmt(&record);
        assert_eq!(
            out,
            format!("2023-02-01 balance {:<32} 100.00 ~ 0.01 USD\n", "Assets:Cash")
        );
        assert_eq!(out.find("USD"), Some(66));
    }

    #[test]
    fn test_balance_zero_tolerance_is_omitted() {
        let with_zero = Record::new(
            date(2023, 2, 1),
            balance("Assets:Cash", usd("100.00"), Some(Decimal::ZERO)),
        );
        let without = Record::new(
            date(2023, 2, 1),
            balance("Assets:Cash", usd("100.00"), None),
        );
        assert_eq!(fmt(&with_zero), fmt(&without));
    }

    #[test]
    fn test_balance_long_account_clamps_width() {
        let config = PrinterConfig {
            target_currency_column: 10,
            ..PrinterConfig::default()
        };
        let record = Record::new(
            date(2023, 2, 1),
            balance("Assets:Cash", usd("1.00"), None),
        );
        assert_eq!(
            EntryFormatter::new(config).format(&record).unwrap(),
            "2023-02-01 balance Assets:Cash 1.00 USD\n"
        );
    }

    #[test]
    fn test_balance_with_metadata() {
        let meta: Meta = vec![("source", MetaValue::Text("statement".into()))]
            .into_iter()
            .collect();
        let record = Record::new(
            date(2023, 2, 1),
            balance("Assets:Cash", usd("100.00"), None),
        )
        .with_meta(meta);
        assert!(fmt(&record).ends_with(" 100.00 USD\n  source: \"statement\"\n"));
    }

    #[test]
    fn test_open() {
        let plain = Record::new(date(2023, 1, 5), open("Assets:Cash", &[], None));
        assert_eq!(fmt(&plain), "2023-01-05 open Assets:Cash\n");

        let full = Record::new(
            date(2023, 1, 5),
            open("Assets:Broker", &["USD", "HOOL"], Some(Booking::Fifo)),
        );
        assert_eq!(
            fmt(&full),
            "2023-01-05 open Assets:Broker USD,HOOL \"FIFO\"\n"
        );

        let currencies_only = Record::new(date(2023, 1, 5), open("Assets:Cash", &["USD"], None));
        assert_eq!(fmt(&currencies_only), "2023-01-05 open Assets:Cash USD\n");
    }

    #[test]
    fn test_transaction_aligns_postings() {
        let record = Record::new(date(2023, 1, 20), coffee());
        let expected = [
            "2023-01-20 * \"Coffee\"\n".to_string(),
            format!("  {:<56}  -3.50 USD\n", "Assets:Cash"),
            format!("  {:<56}   3.50 USD\n", "Expenses:Food"),
        ]
        .concat();
        let out = fmt(&record);
        assert_eq!(out, expected);
        for line in out.lines().skip(1) {
            assert_eq!(line.find("USD"), Some(66));
        }
    }

    #[test]
    fn test_transaction_header_variants() {
        let header = |tx: Transaction| {
            let out = fmt(&Record::new(date(2023, 1, 20), tx));
            out.lines().next().unwrap_or_default().to_string()
        };

        assert_eq!(
            header(Transaction::new('*').with_payee("Cafe").with_narration("Coffee")),
            "2023-01-20 * \"Cafe\" \"Coffee\""
        );
        assert_eq!(
            header(Transaction::new('!').with_payee("Cafe")),
            "2023-01-20 ! \"Cafe\" \"\""
        );
        assert_eq!(header(Transaction::new('*')), "2023-01-20 * ");
        assert_eq!(
            header(Transaction::new('*').with_payee("").with_narration("Coffee")),
            "2023-01-20 * \"Coffee\""
        );
        assert_eq!(
            header(Transaction::new('*').with_narration("The \"best\" coffee")),
            "2023-01-20 * \"The \\\"best\\\" coffee\""
        );
    }

    #[test]
    fn test_transaction_tags_links_and_meta() {
        let tx = Transaction::new('*')
            .with_narration("Trip")
            .with_tag("travel")
            .with_tag("berlin")
            .with_link("invoice-7");
        let meta: Meta = vec![("category", MetaValue::Text("misc".into()))]
            .into_iter()
            .collect();
        let record = Record::new(date(2023, 3, 2), tx).with_meta(meta);
        assert_eq!(
            fmt(&record),
            concat!(
                "2023-03-02 * \"Trip\"\n",
                "  #berlin\n",
                "  #travel\n",
                "  ^invoice-7\n",
                "  category: \"misc\"\n",
            )
        );
    }

    #[test]
    fn test_transaction_posting_meta_uses_doubled_prefix() {
        let meta: Meta = vec![("receipt", MetaValue::Bool(true))].into_iter().collect();
        let tx = Transaction::new('*')
            .with_narration("Coffee")
            .with_posting(Posting::new("Assets:Cash", usd("-3.50")).with_meta(meta))
            .with_posting(Posting::elided("Expenses:Food"));
        let out = fmt(&Record::new(date(2023, 1, 20), tx));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], "    receipt: TRUE");
        assert_eq!(lines[3], "  Expenses:Food");
    }

    #[test]
    fn test_transaction_elided_first_posting_fails() {
        let tx = Transaction::new('*')
            .with_narration("Coffee")
            .with_posting(Posting::elided("Expenses:Food"))
            .with_posting(Posting::new("Assets:Cash", usd("-3.50")));
        assert!(EntryFormatter::new(PrinterConfig::default())
            .format(&Record::new(date(2023, 1, 20), tx))
            .is_err());
    }

    #[test]
    fn test_transaction_without_postings() {
        let tx = Transaction::new('*').with_narration("Placeholder");
        assert_eq!(
            fmt(&Record::new(date(2023, 1, 20), tx)),
            "2023-01-20 * \"Placeholder\"\n"
        );
    }

    fn stock_purchase() -> Transaction {
        Transaction::new('*')
            .with_narration("Buy")
            .with_posting(
                Posting::new("Assets:Broker", Amount::new(d("10"), "HOOL"))
                    .with_cost(Cost::new(d("500.00"), "USD")),
            )
            .with_posting(Posting::new("Assets:Cash", usd("-5000.00")))
    }

    #[test]
    fn test_transaction_renders_weights_when_enabled() {
        let config = PrinterConfig {
            render_weight: true,
            ..PrinterConfig::default()
        };
        let out = EntryFormatter::new(config)
            .format(&Record::new(date(2023, 4, 3), stock_purchase()))
            .unwrap();
        let expected = [
            "2023-04-03 * \"Buy\"\n".to_string(),
            format!(
                "  {:<53}  {:<26}  ;  5000.00 USD\n",
                "Assets:Broker", "      10 HOOL {500.00 USD}"
            ),
            format!(
                "  {:<53}  {:<26}  ; -5000.00 USD\n",
                "Assets:Cash", "-5000.00 USD"
            ),
        ]
        .concat();
        assert_eq!(out, expected);
    }

    #[test]
    fn test_transaction_weights_disabled_by_default() {
        let out = fmt(&Record::new(date(2023, 4, 3), stock_purchase()));
        assert!(!out.contains(';'));
        assert!(out.contains("10 HOOL {500.00 USD}\n"));
    }

    #[test]
    fn test_transaction_weights_need_cost_or_price() {
        let config = PrinterConfig {
            render_weight: true,
            ..PrinterConfig::default()
        };
        let out = EntryFormatter::new(config)
            .format(&Record::new(date(2023, 1, 20), coffee()))
            .unwrap();
        assert_eq!(out, fmt(&Record::new(date(2023, 1, 20), coffee())));
    }

    #[test]
    fn test_transaction_custom_prefix() {
        let config = PrinterConfig {
            prefix: "    ".into(),
            ..PrinterConfig::default()
        };
        let out = EntryFormatter::new(config)
            .format(&Record::new(date(2023, 1, 20), coffee()))
            .unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], format!("    {:<54}  -3.50 USD", "Assets:Cash"));
        assert_eq!(lines[1].find("USD"), Some(66));
    }

    #[test]
    fn test_other_kinds() {
        let day = date(2023, 5, 1);
        let cases: Vec<(RecordBody, &str)> = vec![
            (close("Assets:Cash").into(), "2023-05-01 close Assets:Cash\n"),
            (commodity("HOOL").into(), "2023-05-01 commodity HOOL\n"),
            (
                Pad {
                    account: "Assets:Cash".into(),
                    source_account: "Equity:Opening".into(),
                }
                .into(),
                "2023-05-01 pad Assets:Cash Equity:Opening\n",
            ),
            (
                Note {
                    account: "Assets:Cash".into(),
                    comment: "Counted \"by hand\"".into(),
                }
                .into(),
                "2023-05-01 note Assets:Cash \"Counted \\\"by hand\\\"\"\n",
            ),
            (
                Event {
                    event_type: "location".into(),
                    description: "Berlin".into(),
                }
                .into(),
                "2023-05-01 event \"location\" \"Berlin\"\n",
            ),
            (
                Query {
                    name: "cash".into(),
                    query_string: "SELECT account".into(),
                }
                .into(),
                "2023-05-01 query \"cash\" \"SELECT account\"\n",
            ),
            (
                Price {
                    currency: "HOOL".into(),
                    amount: usd("520.00"),
                }
                .into(),
                "2023-05-01 price HOOL 520.00 USD\n",
            ),
            (
                Document {
                    account: "Assets:Cash".into(),
                    filename: "/docs/statement.pdf".into(),
                    tags: BTreeSet::from(["bank".to_string()]),
                    links: BTreeSet::from(["stmt-5".to_string()]),
                }
                .into(),
                "2023-05-01 document Assets:Cash \"/docs/statement.pdf\" #bank ^stmt-5\n",
            ),
            (
                Custom {
                    custom_type: "budget".into(),
                    values: vec![
                        MetaValue::Account("Expenses:Food".into()),
                        MetaValue::Text("monthly".into()),
                        MetaValue::Amount(usd("300")),
                        MetaValue::Bool(false),
                    ],
                }
                .into(),
                "2023-05-01 custom \"budget\" Expenses:Food \"monthly\" 300 USD FALSE\n",
            ),
        ];

        for (body, expected) in cases {
            let record = Record::new(day, body);
            assert_eq!(fmt(&record), expected, "kind {}", record.kind());
        }
    }

    #[test]
    fn test_every_kind_ends_with_newline() {
        let day = date(2023, 5, 1);
        let records = vec![
            Record::new(day, open("Assets:Cash", &["USD"], None)),
            Record::new(day, close("Assets:Cash")),
            Record::new(day, commodity("USD")),
            Record::new(day, balance("Assets:Cash", usd("1"), None)),
            Record::new(day, coffee()),
        ];
        for record in &records {
            let out = fmt(record);
            assert!(out.ends_with('\n'), "kind {}", record.kind());
            assert!(!out.ends_with("\n\n"), "kind {}", record.kind());
        }
        assert!(records.iter().any(|r| r.kind() == RecordKind::Transaction));
    }

    #[test]
    fn test_format_records_loaded_from_json() {
        let records = RecordsJsonDatasourceImpl::new()
            .from_string(
                r#"[{"type": "transaction", "date": "2023-04-03", "flag": "*",
                     "payee": "Broker", "narration": "Buy", "tags": ["invest"],
                     "meta": {"ref": "T-1"},
                     "postings": [
                        {"account": "Assets:Broker",
                         "units": {"number": "10", "currency": "HOOL"},
                         "cost": {"number": "500.00", "currency": "USD", "date": "2023-04-01"},
                         "meta": {"lot": {"number": "1"}}},
                        {"account": "Assets:Cash",
                         "units": {"number": "-5000.00", "currency": "USD"}}
                     ]}]"#,
            )
            .unwrap();
        let expected = [
            "2023-04-03 * \"Broker\" \"Buy\"\n".to_string(),
            "  #invest\n".to_string(),
            "  ref: \"T-1\"\n".to_string(),
            format!(
                "  {:<53}        10 HOOL {{500.00 USD, 2023-04-01}}\n",
                "Assets:Broker"
            ),
            "    lot: 1\n".to_string(),
            format!("  {:<53}  -5000.00 USD\n", "Assets:Cash"),
        ]
        .concat();
        assert_eq!(fmt(&records[0]), expected);
    }

    #[test]
    fn test_transaction_long_account_clamps_width() {
        let config = PrinterConfig {
            target_currency_column: 5,
            ..PrinterConfig::default()
        };
        let tx = Transaction::new('*')
            .with_narration("Transfer")
            .with_posting(Posting::new("Assets:VeryLongAccountName", usd("-1234567.89")))
            .with_posting(Posting::new("Expenses:Other", usd("1234567.89")));
        let out = EntryFormatter::new(config)
            .format(&Record::new(date(2023, 6, 1), tx))
            .unwrap();
        assert_eq!(
            out,
            concat!(
                "2023-06-01 * \"Transfer\"\n",
                "  Assets:VeryLongAccountName  -1234567.89 USD\n",
                "  Expenses:Other   1234567.89 USD\n",
            )
        );

        let account = format!("Assets:{}", "X".repeat(60));
        let tx = Transaction::new('*')
            .with_narration("Coffee")
            .with_posting(Posting::new(account.clone(), usd("-3.50")))
            .with_posting(Posting::new("Expenses:Food", usd("3.50")));
        let out = fmt(&Record::new(date(2023, 6, 1), tx));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], format!("  {}  -3.50 USD", account));
        assert_eq!(lines[2], format!("  {:<56}   3.50 USD", "Expenses:Food"));
    }

    #[test]
    fn test_zero_column_config_clamps_instead_of_failing() {
        let config = PrinterConfig {
            target_currency_column: 0,
            ..PrinterConfig::default()
        };
        assert!(config.clone().validate().is_err());
        let out = EntryFormatter::new(config)
            .format(&Record::new(date(2023, 1, 20), coffee()))
            .unwrap();
        assert!(out.contains("\n  Assets:Cash  -3.50 USD\n"));
    }

    #[test]
    fn test_tolerance_rounding_to_zero_is_omitted() {
        let formatter = EntryFormatter::with_display_context(
            PrinterConfig::default(),
            CurrencyPrecisionContext::new(),
        );
        let tiny = Record::new(
            date(2023, 2, 1),
            balance("Assets:Cash", usd("100"), Some(d("0.001"))),
        );
        assert_eq!(
            formatter.format(&tiny).unwrap(),
            format!("2023-02-01 balance {:<39} 100.00 USD\n", "Assets:Cash")
        );

        let shown = Record::new(
            date(2023, 2, 1),
            balance("Assets:Cash", usd("100"), Some(d("0.005"))),
        );
        assert!(formatter
            .format(&shown)
            .unwrap()
            .ends_with(" 100.00 ~ 0.01 USD\n"));
    }
}
