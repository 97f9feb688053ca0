#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::Deserialize;
use serde::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Api;
use crate::domain::models::ApiError;
use crate::domain::models::Credentials;
use crate::domain::models::Draft;
use crate::domain::models::Envelope;
use crate::domain::models::Record;

const BASE_PATH: &str = "/ru/data/v3/testmethods/docs";
const AUTH_HEADER: &str = "x-auth";

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct LoginData {
    token: String,
}

/// The document API over HTTPS. Every response is interpreted through
/// [`Envelope`].
pub struct HttpApi {
    url: String,
    client: reqwest::Client,
}

impl Default for HttpApi {
    fn default() -> HttpApi {
        return HttpApi::new(&Config::get(ConfigKey::ApiURL));
    }
}

impl HttpApi {
    pub fn new(url: &str) -> HttpApi {
        return HttpApi {
            url: url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        };
    }

    fn endpoint(&self, path: &str) -> String {
        return format!("{url}{BASE_PATH}{path}", url = self.url);
    }

    #[allow(clippy::implicit_return)]
    async fn send(&self, req: RequestBuilder) -> Result<Envelope, ApiError> {
        let res = req.send().await?;
        let status = res.status();
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "Unexpected HTTP status");
            return Err(ApiError::Status(status.as_u16()));
        }

        let envelope = Envelope::parse(&res.text().await?)?;
        tracing::debug!(error_code = envelope.error_code, "Response received");

        return Ok(envelope);
    }
}

#[async_trait]
impl Api for HttpApi {
    #[allow(clippy::implicit_return)]
    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        let req = self.client.post(self.endpoint("/login")).json(credentials);
        let data: LoginData = self.send(req).await?.into_data()?;
        if data.token.is_empty() {
            return Err(ApiError::Malformed("empty token".to_string()));
        }

        return Ok(data.token);
    }

    #[allow(clippy::implicit_return)]
    async fn list_records(&self, token: &str) -> Result<Vec<Record>, ApiError> {
        let req = self
            .client
            .get(self.endpoint("/userdocs/get"))
            .header(AUTH_HEADER, token);

        return self.send(req).await?.into_data();
    }

    #[allow(clippy::implicit_return)]
    async fn create_record(&self, token: &str, draft: &Draft) -> Result<Record, ApiError> {
        let req = self
            .client
            .post(self.endpoint("/userdocs/create"))
            .header(AUTH_HEADER, token)
            .json(draft);

        return self.send(req).await?.into_data();
    }

    #[allow(clippy::implicit_return)]
    async fn update_record(
        &self,
        token: &str,
        id: i64,
        draft: &Draft,
    ) -> Result<Record, ApiError> {
        let req = self
            .client
            .post(self.endpoint(&format!("/userdocs/set/{id}")))
            .header(AUTH_HEADER, token)
            .json(draft);

        return self.send(req).await?.into_data();
    }

    #[allow(clippy::implicit_return)]
    async fn delete_record(&self, token: &str, id: i64) -> Result<(), ApiError> {
        let req = self
            .client
            .post(self.endpoint(&format!("/userdocs/delete/{id}")))
            .header(AUTH_HEADER, token)
            .json(&serde_json::json!({}));

        return self.send(req).await?.into_unit();
    }
}
