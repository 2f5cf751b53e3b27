use fractic_server_error::ServerError;

use crate::entities::Record;

pub trait RecordsRepository {
    fn from_string(&self, records_json: &str) -> Result<Vec<Record>, ServerError>;

    fn from_file<P>(&self, records_json: P) -> Result<Vec<Record>, ServerError>
    where
        P: AsRef<std::path::Path>;
}
