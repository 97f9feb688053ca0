use super::Credentials;
use super::Draft;

/// Requests from the UI to the actions service. Each one turns into a single
/// remote call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Login(Credentials),
    ListRecords(String),
    CreateRecord(String, Draft),
    UpdateRecord(String, i64, Draft),
    DeleteRecord(String, i64),
}
