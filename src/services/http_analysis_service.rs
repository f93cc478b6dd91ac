use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use crate::config::constants::{timeout_duration, ANALYZE_ISSUE_ENDPOINT, DEVELOPER_INFO_ENDPOINT, HEALTH_ENDPOINT};
use crate::errors::{extract_error_detail, AssistantError, AssistantResult};
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::config::backend_config::BackendConfig;
use crate::structs::developer_info::DeveloperInfo;
use crate::traits::analysis_service::AnalysisService;

/// JSON-over-HTTP client for the analysis backend.
#[derive(Clone)]
pub struct HttpAnalysisService {
    base_url: String,
    client: Client,
}

impl HttpAnalysisService {
    /// Client for `config.base_url`, with the configured timeout if any.
    pub fn new(config: &BackendConfig) -> AssistantResult<Self> {
        let mut builder = Client::builder();
        if let Some(seconds) = config.request_timeout_secs {
            builder = builder.timeout(timeout_duration(seconds));
        }

        let client = builder
            .build()
            .map_err(|e| AssistantError::config_error(&format!("Could not build HTTP client: {}", e), Some("backend"), None))?;

        Ok(Self {
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    // A body that cannot be read means the connection broke mid-response
    async fn read_body(response: reqwest::Response, endpoint: &str, url: &str) -> AssistantResult<String> {
        response
            .text()
            .await
            .map_err(|e| AssistantError::connectivity_error(endpoint, Some(url), &e.to_string()))
    }

    async fn post<T: DeserializeOwned>(&self, endpoint: &str, request: &AnalysisRequest) -> AssistantResult<T> {
        let url = self.endpoint_url(endpoint);
        log::debug!("📡 POST {} for {}", url, request.label());

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| AssistantError::connectivity_error(endpoint, Some(&url), &e.to_string()))?;

        let status = response.status();
        let body = Self::read_body(response, endpoint, &url).await?;

        if !status.is_success() {
            log::debug!("❌ {} answered HTTP {}: {}", endpoint, status, body);
            return Err(AssistantError::remote_error(endpoint, Some(status.as_u16()), &extract_error_detail(&body)));
        }

        serde_json::from_str(&body).map_err(|e| {
            AssistantError::remote_error(endpoint, Some(status.as_u16()), &format!("Unexpected response from {}: {}", endpoint, e))
        })
    }

    /// Pings the backend's health endpoint.
    pub async fn health_check(&self) -> AssistantResult<()> {
        let url = self.endpoint_url(HEALTH_ENDPOINT);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AssistantError::connectivity_error(HEALTH_ENDPOINT, Some(&url), &e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = Self::read_body(response, HEALTH_ENDPOINT, &url).await?;
            return Err(AssistantError::remote_error(HEALTH_ENDPOINT, Some(status.as_u16()), &extract_error_detail(&body)));
        }

        Ok(())
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisService {

    async fn analyze_issue(&self, request: &AnalysisRequest) -> AssistantResult<AnalysisResult> {
        self.post(ANALYZE_ISSUE_ENDPOINT, request).await
    }

    async fn developer_info(&self, request: &AnalysisRequest) -> AssistantResult<DeveloperInfo> {
        self.post(DEVELOPER_INFO_ENDPOINT, request).await
    }
}
