use std::io::Write;

use fractic_server_error::ServerError;

use crate::{
    entities::{DisplayContext, Record, RecordKind},
    errors::WriteError,
    presentation::entry_formatter::EntryFormatter,
};

/// The last thing written during a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PreviousItem {
    Nothing,
    Header,
    Record(RecordKind),
}

/// Pass-scoped separator state: decides where blank lines go between
/// records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BlockState {
    previous: PreviousItem,
}

impl BlockState {
    pub(crate) fn new() -> Self {
        Self {
            previous: PreviousItem::Nothing,
        }
    }

    pub(crate) fn starting_at(kind: RecordKind) -> Self {
        Self {
            previous: PreviousItem::Record(kind),
        }
    }

    pub(crate) fn after_header(&mut self) {
        self.previous = PreviousItem::Header;
    }

    pub(crate) fn needs_separator(&self, kind: RecordKind) -> bool {
        kind.always_separated() || self.previous != PreviousItem::Record(kind)
    }

    pub(crate) fn advance(&mut self, kind: RecordKind) {
        self.previous = PreviousItem::Record(kind);
    }
}

impl RecordKind {
    /// Records of these kinds are always preceded by a blank line.
    pub(crate) fn always_separated(&self) -> bool {
        matches!(self, RecordKind::Transaction | RecordKind::Commodity)
    }
}

pub(crate) fn write_str<W: Write>(out: &mut W, s: &str) -> Result<(), ServerError> {
    out.write_all(s.as_bytes())
        .map_err(|e| WriteError::with_debug(&e))
}

/// Writes a run of records, separating them with blank lines according to
/// `state`, which is left pointing at the last record written.
pub(crate) fn print_block<'a, C, W, I>(
    formatter: &EntryFormatter<C>,
    records: I,
    state: &mut BlockState,
    out: &mut W,
) -> Result<(), ServerError>
where
    C: DisplayContext,
    W: Write,
    I: IntoIterator<Item = &'a Record>,
{
    for record in records {
        let kind = record.kind();
        if state.needs_separator(kind) {
            write_str(out, "\n")?;
        }
        state.advance(kind);
        write_str(out, &formatter.format(record)?)?;
    }
    Ok(())
}

/// Prints records back to back, without any date headers.
///
/// The first record only gets a leading blank line if it is a transaction
/// or a commodity. Empty input writes nothing.
pub fn print_entries<C, W>(
    formatter: &EntryFormatter<C>,
    records: &[Record],
    out: &mut W,
) -> Result<(), ServerError>
where
    C: DisplayContext,
    W: Write,
{
    let Some(first) = records.first() else {
        return Ok(());
    };
    let mut state = BlockState::starting_at(first.kind());
    print_block(formatter, records, &mut state, out)?;
    tracing::debug!(records = records.len(), "printed flat entries");
    Ok(())
}
