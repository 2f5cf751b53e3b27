use std::fs;

use fractic_server_error::ServerError;

use crate::{
    data::models::record_model::RecordModel,
    entities::Record,
    errors::{InvalidJson, ReadError},
};

pub(crate) trait RecordsJsonDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<Record>, ServerError>;

    fn from_file<P>(&self, path: P) -> Result<Vec<Record>, ServerError>
    where
        P: AsRef<std::path::Path>;
}

pub(crate) struct RecordsJsonDatasourceImpl;

impl RecordsJsonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl RecordsJsonDatasource for RecordsJsonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<Record>, ServerError> {
        let models: Vec<RecordModel> =
            serde_json::from_str(s).map_err(|e| InvalidJson::with_debug("record list", &e))?;
        let records = models
            .into_iter()
            .map(RecordModel::into_record)
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(count = records.len(), "loaded records");
        Ok(records)
    }

    fn from_file<P>(&self, path: P) -> Result<Vec<Record>, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        self.from_string(&fs::read_to_string(path).map_err(|e| ReadError::with_debug(&e))?)
    }
}
