// Datadog screenboard API gateway
use crate::application::screenboard_repository::{ScreenboardId, ScreenboardRepository};
use crate::domain::board::Board;
use crate::error::{Error, Result};
use crate::infrastructure::config::{DatadogSettings, DEFAULT_API_URL};
use crate::infrastructure::json_mapper::{board_from_json, board_to_json};
use async_trait::async_trait;
use reqwest::{header, Method, StatusCode};
use serde::Deserialize;

/// Client for a Datadog account's screenboards.
///
/// Every request carries the account's `api_key` and `application_key` as
/// query parameters. The underlying `reqwest::Client` is reused across calls.
#[derive(Clone)]
pub struct DataDogScreenboardGateway {
    client: reqwest::Client,
    api_url: String,
    application_key: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct ScreenboardResponse {
    id: ScreenboardId,
}

#[derive(Debug, Deserialize)]
struct ScreenboardUrlResponse {
    public_url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    errors: Vec<String>,
}

/// Whether a 404 means "this board does not exist" for the calling operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NotFoundPolicy {
    Report,
    Fail,
}

impl DataDogScreenboardGateway {
    pub fn new(application_key: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: DEFAULT_API_URL.to_string(),
            application_key: application_key.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_settings(settings: &DatadogSettings) -> Self {
        Self::new(settings.application_key.clone(), settings.api_key.clone())
            .with_api_url(settings.api_url.clone())
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn resource_url(&self, path: &[&str]) -> String {
        let mut url = self.api_url.clone();
        for segment in path {
            url.push('/');
            url.push_str(&urlencoding::encode(segment));
        }
        format!(
            "{}?api_key={}&application_key={}",
            url,
            urlencoding::encode(&self.api_key),
            urlencoding::encode(&self.application_key)
        )
    }

    async fn execute(
        &self,
        method: Method,
        path: &[&str],
        body: Option<&Board>,
        policy: NotFoundPolicy,
    ) -> Result<reqwest::Response> {
        tracing::debug!("{} {}/{}", method, self.api_url, path.join("/"));

        let mut request = self
            .client
            .request(method, self.resource_url(path))
            .header(header::ACCEPT, "application/json");
        if let Some(board) = body {
            request = request
                .header(header::CONTENT_TYPE, "application/json")
                .body(board_to_json(board)?);
        }

        let response = request.send().await?;
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(Self::classify(response, policy).await)
        }
    }

    /// Turn a non-success response into `NotFound` or `Gateway`, carrying
    /// the message list from the `{"errors": [...]}` body.
    async fn classify(response: reqwest::Response, policy: NotFoundPolicy) -> Error {
        let status = response.status();
        let failure = response.error_for_status_ref().err();
        let body = response.text().await.unwrap_or_default();

        let errors = match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(info) => info.errors,
            Err(e) => {
                tracing::warn!("Undecodable error body for status {}: {}", status, e);
                Vec::new()
            }
        };

        if status == StatusCode::NOT_FOUND && policy == NotFoundPolicy::Report {
            Error::NotFound { errors }
        } else {
            Error::Gateway {
                status: status.as_u16(),
                errors,
                source: failure,
            }
        }
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl std::fmt::Debug for DataDogScreenboardGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataDogScreenboardGateway")
            .field("api_url", &self.api_url)
            .field("application_key", &"<redacted>")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl ScreenboardRepository for DataDogScreenboardGateway {
    async fn create(&self, board: &Board) -> Result<ScreenboardId> {
        let response = self
            .execute(Method::POST, &[], Some(board), NotFoundPolicy::Fail)
            .await?;
        let created: ScreenboardResponse = Self::decode(response).await?;
        tracing::debug!("Created screenboard {}", created.id);
        Ok(created.id)
    }

    async fn update(&self, id: ScreenboardId, board: &Board) -> Result<()> {
        let id = id.to_string();
        self.execute(Method::PUT, &[id.as_str()], Some(board), NotFoundPolicy::Report)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: ScreenboardId) -> Result<()> {
        let path = id.to_string();
        match self
            .execute(Method::DELETE, &[path.as_str()], None, NotFoundPolicy::Report)
            .await
        {
            Ok(_) => Ok(()),
            Err(Error::NotFound { .. }) => {
                tracing::debug!("Screenboard {} already absent, nothing to delete", id);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    async fn get(&self, id: ScreenboardId) -> Result<Board> {
        let id = id.to_string();
        let response = self
            .execute(Method::GET, &[id.as_str()], None, NotFoundPolicy::Report)
            .await?;
        board_from_json(&response.text().await?)
    }

    async fn public_url(&self, id: ScreenboardId) -> Result<String> {
        let id = id.to_string();
        let response = self
            .execute(Method::GET, &["share", id.as_str()], None, NotFoundPolicy::Report)
            .await?;
        let shared: ScreenboardUrlResponse = Self::decode(response).await?;
        Ok(shared.public_url)
    }
}
