use crate::domain::model::{AdvicePayload, AdviceResponse, AdviceView};
use crate::domain::ports::{AdviceGenerator, ConfigProvider};
use crate::utils::error::{AdviceError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub struct HttpAdviceClient {
    client: Client,
    endpoint: String,
}

impl HttpAdviceClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.advice_endpoint().to_string(),
        })
    }
}

#[async_trait]
impl AdviceGenerator for HttpAdviceClient {
    async fn generate(&self, payload: &AdvicePayload) -> Result<AdviceView> {
        tracing::debug!("Posting advice request to: {}", self.endpoint);
        let response = self.client.post(&self.endpoint).json(payload).send().await?;

        let status = response.status();
        tracing::debug!("Advice service response status: {}", status);
        if !status.is_success() {
            return Err(AdviceError::StatusError { status });
        }

        let body = response.text().await?;
        let parsed: AdviceResponse = serde_json::from_str(&body)?;

        if !parsed.success {
            return Err(AdviceError::ServiceError {
                message: parsed
                    .error
                    .unwrap_or_else(|| "Unknown error occurred".to_string()),
            });
        }

        parsed.advice.ok_or_else(|| AdviceError::ServiceError {
            message: "Response is missing the advice object".to_string(),
        })
    }
}
