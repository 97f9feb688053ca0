use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::Draft;
use super::Record;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Surrounding whitespace is never part of a credential.
    pub fn new(username: &str, password: &str) -> Credentials {
        return Credentials {
            username: username.trim().to_string(),
            password: password.trim().to_string(),
        };
    }
}

/// The remote document API. Every call other than `login` requires the token
/// handed back by `login`, passed explicitly.
#[async_trait]
pub trait Api {
    /// Exchanges credentials for a bearer token.
    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError>;

    /// Fetches every record visible to the token, in server order.
    async fn list_records(&self, token: &str) -> Result<Vec<Record>, ApiError>;

    /// Creates a record from a draft. The returned record carries the id the
    /// server assigned.
    async fn create_record(&self, token: &str, draft: &Draft) -> Result<Record, ApiError>;

    async fn update_record(&self, token: &str, id: i64, draft: &Draft)
        -> Result<Record, ApiError>;

    async fn delete_record(&self, token: &str, id: i64) -> Result<(), ApiError>;
}

pub type ApiBox = Box<dyn Api + Send + Sync>;
