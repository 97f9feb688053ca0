#[cfg(test)]
#[path = "envelope_test.rs"]
mod tests;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;

/// Wrapper every API response is delivered in. A zero `error_code` means
/// success regardless of what the transport said.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub error_code: i64,
    #[serde(default)]
    pub error_text: Option<String>,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl Envelope {
    pub fn parse(body: &str) -> Result<Envelope, ApiError> {
        return Ok(serde_json::from_str(body)?);
    }

    pub fn is_success(&self) -> bool {
        return self.error_code == 0;
    }

    fn check(&self) -> Result<(), ApiError> {
        if self.is_success() {
            return Ok(());
        }

        return Err(ApiError::Rejected {
            code: self.error_code,
            text: self.error_text.clone().unwrap_or_default(),
        });
    }

    /// Deserializes the payload of a successful response.
    pub fn into_data<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        self.check()?;
        return Ok(serde_json::from_value(self.data)?);
    }

    /// For calls where only the status matters and the payload is ignored.
    pub fn into_unit(self) -> Result<(), ApiError> {
        return self.check();
    }
}
