use std::io::Write;

use chrono::Month;
use fractic_server_error::{CriticalError, ServerError};

use crate::{
    domain::logic::date_tree::group_by_year_month,
    entities::{DisplayContext, NaturalDisplayContext, PrinterConfig, Record},
    presentation::{
        block_printer::{print_block, write_str, BlockState},
        entry_formatter::EntryFormatter,
    },
};

/// Prints records as a year/month tree of comment headers:
///
/// ```text
/// ;;; 2023
/// ;;;; 2023 January
///
/// 2023-01-05 open Assets:Cash
/// ```
///
/// Records are expected in `(date, kind rank)` order (see
/// [`sort_records`](crate::printing::sort_records)); records of the same
/// month are gathered under one header even when the input interleaves
/// them.
pub struct DateTreeOrganizer<C: DisplayContext = NaturalDisplayContext> {
    formatter: EntryFormatter<C>,
}

impl DateTreeOrganizer<NaturalDisplayContext> {
    /// See [`EntryFormatter::new`]: `config` is not validated here.
    pub fn new(config: PrinterConfig) -> Self {
        Self {
            formatter: EntryFormatter::new(config),
        }
    }
}

impl Default for DateTreeOrganizer<NaturalDisplayContext> {
    fn default() -> Self {
        Self::new(PrinterConfig::default())
    }
}

impl<C: DisplayContext> DateTreeOrganizer<C> {
    pub fn with_formatter(formatter: EntryFormatter<C>) -> Self {
        Self { formatter }
    }

    pub fn formatter(&self) -> &EntryFormatter<C> {
        &self.formatter
    }

    pub fn print<W: Write>(&self, records: &[Record], out: &mut W) -> Result<(), ServerError> {
        let years = group_by_year_month(records);
        let mut state = BlockState::new();
        let mut months_printed = 0;

        for year in &years {
            write_str(out, &format!(";;; {}\n", year.year))?;
            for month in &year.months {
                let name = Month::try_from(month.month as u8)
                    .map_err(|e| CriticalError::with_debug("invalid month in date tree", &e))?;
                write_str(out, &format!(";;;; {} {}\n", year.year, name.name()))?;
                state.after_header();
                print_block(
                    &self.formatter,
                    month.records.iter().copied(),
                    &mut state,
                    out,
                )?;
                write_str(out, "\n")?;
                months_printed += 1;
            }
        }

        tracing::debug!(
            records = records.len(),
            years = years.len(),
            months = months_printed,
            "printed date tree"
        );
        Ok(())
    }

    /// Same as [`print`](Self::print), collected into a string.
    pub fn render(&self, records: &[Record]) -> Result<String, ServerError> {
        let mut out = Vec::new();
        self.print(records, &mut out)?;
        String::from_utf8(out)
            .map_err(|e| CriticalError::with_debug("rendered ledger is not valid UTF-8", &e))
    }
}
