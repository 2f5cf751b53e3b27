use fractic_server_error::ServerError;

use crate::{
    data::datasources::records_json_datasource::{
        RecordsJsonDatasource, RecordsJsonDatasourceImpl,
    },
    domain::repositories::records_repository::RecordsRepository,
    entities::Record,
};

pub(crate) struct RecordsRepositoryImpl<DS: RecordsJsonDatasource = RecordsJsonDatasourceImpl> {
    records_datasource: DS,
}

impl<DS: RecordsJsonDatasource> RecordsRepository for RecordsRepositoryImpl<DS> {
    fn from_string(&self, records_json: &str) -> Result<Vec<Record>, ServerError> {
        self.records_datasource.from_string(records_json)
    }

    fn from_file<P>(&self, records_json: P) -> Result<Vec<Record>, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        self.records_datasource.from_file(records_json)
    }
}

impl RecordsRepositoryImpl<RecordsJsonDatasourceImpl> {
    pub(crate) fn new() -> Self {
        RecordsRepositoryImpl {
            records_datasource: RecordsJsonDatasourceImpl::new(),
        }
    }
}
