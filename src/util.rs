use fractic_server_error::ServerError;

use crate::{
    domain::usecases::load_usecase::{LoadUsecase as _, LoadUsecaseImpl},
    entities::{DisplayContext, NaturalDisplayContext, PrinterConfig, Record},
    presentation::{date_tree_printer::DateTreeOrganizer, entry_formatter::EntryFormatter},
};

pub type Ledger = String;

/// Loads JSON record lists and prints them as a year/month date tree.
pub struct LedgerDateTreeUtil<C: DisplayContext = NaturalDisplayContext> {
    load_usecase: LoadUsecaseImpl,
    organizer: DateTreeOrganizer<C>,
}

impl LedgerDateTreeUtil<NaturalDisplayContext> {
    pub fn new() -> Self {
        Self::with_config(PrinterConfig::default())
    }

    pub fn with_config(config: PrinterConfig) -> Self {
        Self {
            load_usecase: LoadUsecaseImpl::new(),
            organizer: DateTreeOrganizer::new(config),
        }
    }
}

impl Default for LedgerDateTreeUtil<NaturalDisplayContext> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: DisplayContext> LedgerDateTreeUtil<C> {
    pub fn with_display_context(config: PrinterConfig, ctx: C) -> Self {
        Self {
            load_usecase: LoadUsecaseImpl::new(),
            organizer: DateTreeOrganizer::with_formatter(EntryFormatter::with_display_context(
                config, ctx,
            )),
        }
    }

    pub fn from_string(&self, records_json: &str) -> Result<(Vec<Record>, Ledger), ServerError> {
        let records = self.load_usecase.from_string(records_json)?;
        let ledger = self.organizer.render(&records)?;
        Ok((records, ledger))
    }

    pub fn from_file<P>(&self, records_json: P) -> Result<(Vec<Record>, Ledger), ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        self.from_files([records_json])
    }

    /// Merges several record files into one ledger.
    pub fn from_files<P, I>(&self, records_json: I) -> Result<(Vec<Record>, Ledger), ServerError>
    where
        P: AsRef<std::path::Path>,
        I: IntoIterator<Item = P>,
    {
        let records = self.load_usecase.from_files(records_json)?;
        let ledger = self.organizer.render(&records)?;
        Ok((records, ledger))
    }

    /// Prints already-sorted records.
    pub fn print(&self, records: &[Record]) -> Result<Ledger, ServerError> {
        self.organizer.render(records)
    }
}
