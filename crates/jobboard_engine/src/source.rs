use std::time::Duration;

use futures_util::StreamExt;
use jobboard_core::{JobId, SessionContext};
use portal_logging::portal_debug;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{RequestBuilder, Url};
use serde_json::Value;

use crate::raw::{decode_job_detail, decode_job_list};
use crate::{FailureKind, FetchError};

/// Base URL of the public job portal backend.
pub const DEFAULT_API_BASE_URL: &str = "https://api.etribes.mittalservices.com/";

#[derive(Debug, Clone)]
pub struct CatalogSettings {
    pub api_base_url: String,
    /// Prefix for relative company logo paths.
    pub logo_base_url: String,
    pub list_path: String,
    pub detail_path: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            logo_base_url: DEFAULT_API_BASE_URL.to_string(),
            list_path: "JobPortal/list_jobs".to_string(),
            detail_path: "Job_post".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 10 * 1024 * 1024,
        }
    }
}

/// Where raw job records come from.
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Every posting, as raw JSON records.
    async fn list_jobs(&self, session: Option<&SessionContext>) -> Result<Vec<Value>, FetchError>;

    /// One posting, or `None` when the backend has no record for the id.
    async fn job_detail(
        &self,
        job_id: &JobId,
        session: Option<&SessionContext>,
    ) -> Result<Option<Value>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestCatalogSource {
    settings: CatalogSettings,
}

impl ReqwestCatalogSource {
    pub fn new(settings: CatalogSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    fn endpoint(&self, path: &str) -> Result<Url, FetchError> {
        let base = if self.settings.api_base_url.ends_with('/') {
            self.settings.api_base_url.clone()
        } else {
            format!("{}/", self.settings.api_base_url)
        };
        Url::parse(&base)
            .and_then(|base| base.join(path.trim_start_matches('/')))
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    async fn read_body(
        &self,
        request: RequestBuilder,
        session: Option<&SessionContext>,
    ) -> Result<Vec<u8>, FetchError> {
        let response = with_session(request, session)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }

    fn too_large(&self, actual: u64) -> FetchError {
        FetchError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl CatalogSource for ReqwestCatalogSource {
    async fn list_jobs(&self, session: Option<&SessionContext>) -> Result<Vec<Value>, FetchError> {
        let url = self.endpoint(&self.settings.list_path)?;
        let client = self.build_client()?;
        portal_debug!("POST {}", url);
        let request = client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body("{}");
        let body = self.read_body(request, session).await?;
        decode_job_list(&body)
    }

    async fn job_detail(
        &self,
        job_id: &JobId,
        session: Option<&SessionContext>,
    ) -> Result<Option<Value>, FetchError> {
        let mut url = self.endpoint(&self.settings.detail_path)?;
        url.path_segments_mut()
            .map_err(|()| FetchError::new(FailureKind::InvalidUrl, "base url cannot take a path"))?
            .pop_if_empty()
            .push(job_id.as_str());
        let client = self.build_client()?;
        portal_debug!("GET {}", url);
        let body = self.read_body(client.get(url), session).await?;
        decode_job_detail(&body)
    }
}

/// Adds the bearer token and user id of a signed-in caller.
fn with_session(request: RequestBuilder, session: Option<&SessionContext>) -> RequestBuilder {
    let Some(session) = session else {
        return request;
    };
    let request = request.header(AUTHORIZATION, format!("Bearer {}", session.token));
    match &session.user_id {
        Some(user_id) => request.header("uid", user_id.as_str()),
        None => request,
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
