use fractic_server_error::ServerError;

use crate::{
    data::repositories::records_repository_impl::RecordsRepositoryImpl,
    domain::{logic::ordering::sort_records, repositories::records_repository::RecordsRepository},
    entities::Record,
};

pub trait LoadUsecase {
    /// Loads one record list and sorts it into printing order.
    fn from_string(&self, records_json: &str) -> Result<Vec<Record>, ServerError>;

    /// Loads and merges several record lists, then sorts the merged list
    /// into printing order.
    fn from_files<P, I>(&self, records_json: I) -> Result<Vec<Record>, ServerError>
    where
        P: AsRef<std::path::Path>,
        I: IntoIterator<Item = P>;
}

pub(crate) struct LoadUsecaseImpl<
    R = RecordsRepositoryImpl, // Default.
> where
    R: RecordsRepository,
{
    records_repository: R,
}

impl<R: RecordsRepository> LoadUsecase for LoadUsecaseImpl<R> {
    fn from_string(&self, records_json: &str) -> Result<Vec<Record>, ServerError> {
        let mut records = self.records_repository.from_string(records_json)?;
        sort_records(&mut records);
        Ok(records)
    }

    fn from_files<P, I>(&self, records_json: I) -> Result<Vec<Record>, ServerError>
    where
        P: AsRef<std::path::Path>,
        I: IntoIterator<Item = P>,
    {
        let mut records = Vec::new();
        let mut files = 0;
        for path in records_json {
            records.extend(self.records_repository.from_file(path)?);
            files += 1;
        }
        sort_records(&mut records);
        tracing::debug!(files, records = records.len(), "merged record files");
        Ok(records)
    }
}

impl LoadUsecaseImpl {
    pub(crate) fn new() -> Self {
        LoadUsecaseImpl {
            records_repository: RecordsRepositoryImpl::new(),
        }
    }
}
