//! HTTP implementation of the generation service client

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use shared::{ApiFailure, ErrorResponse, ExportRequest, GenerateRequest, GenerateResponse};
use crate::config::ClientSettings;
use crate::error::{ClientError, ClientResult};
use crate::traits::ComedyApi;

pub const GENERATE_PATH: &str = "/generate";
pub const EXPORT_PATH: &str = "/save";

/// Real generation service client over reqwest
#[derive(Clone)]
pub struct RealComedyApi {
    client: Client,
    generate_url: String,
    export_url: String,
}

impl RealComedyApi {
    /// Create a client for the configured base URL
    pub fn new(settings: &ClientSettings) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| ClientError::config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            generate_url: settings.endpoint(GENERATE_PATH),
            export_url: settings.endpoint(EXPORT_PATH),
        })
    }
}

#[async_trait]
impl ComedyApi for RealComedyApi {
    async fn generate(&self, request: &GenerateRequest) -> Result<Vec<String>, ApiFailure> {
        debug!(
            url = %self.generate_url,
            output_type = %request.output_type,
            num_jokes = request.num_jokes,
            "Sending generate request"
        );

        let response = self
            .client
            .post(&self.generate_url)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiFailure::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiFailure::Transport(e.to_string()))?;

        if !status.is_success() {
            let detail = ErrorResponse::detail_from_body(&body);
            warn!("Generate request returned {}: {:?}", status, detail);
            return Err(ApiFailure::Service {
                status: status.as_u16(),
                detail,
            });
        }

        let parsed = GenerateResponse::from_json(&body)
            .map_err(|e| ApiFailure::MalformedResponse(e.to_string()))?;
        debug!("Generate request returned {} jokes", parsed.jokes.len());
        Ok(parsed.jokes)
    }

    async fn export(&self, request: &ExportRequest) -> Result<Vec<u8>, ApiFailure> {
        debug!(
            url = %self.export_url,
            format = %request.format,
            jokes = request.jokes.len(),
            "Sending export request"
        );

        let response = self
            .client
            .post(&self.export_url)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiFailure::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Export request returned {}", status);
            return Err(ApiFailure::Service {
                status: status.as_u16(),
                detail: None,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiFailure::Transport(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
