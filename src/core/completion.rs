use crate::core::prompt::build_request;
use crate::core::{
    CompletionRequest, CompletionResponse, ConfigProvider, CredentialProvider, Summarizer,
};
use crate::utils::error::{Result, SummaryError};
use reqwest::Client;

pub struct CompletionClient<C: ConfigProvider, K: CredentialProvider> {
    config: C,
    credentials: K,
    client: Client,
}

impl<C: ConfigProvider, K: CredentialProvider> CompletionClient<C, K> {
    pub fn new(config: C, credentials: K) -> Self {
        Self {
            config,
            credentials,
            client: Client::new(),
        }
    }

    /// Performs exactly one request/response exchange with the completion endpoint.
    pub async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let api_key = self
            .credentials
            .credential()
            .ok_or_else(SummaryError::missing_credential)?;

        tracing::debug!(
            "Sending completion request to {} (model: {}, {} messages)",
            self.config.endpoint(),
            request.model,
            request.messages.len()
        );

        let response = self
            .client
            .post(self.config.endpoint())
            .bearer_auth(&api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Completion response status: {}", status);

        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!("Completion endpoint returned {}", status);
            return Err(SummaryError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        parse_completion(&body)
    }
}

/// Extracts the trimmed content of the first choice from a success body.
pub fn parse_completion(body: &str) -> Result<String> {
    let parsed: CompletionResponse = serde_json::from_str(body).map_err(|e| {
        tracing::debug!("Unparseable completion body: {}", body);
        SummaryError::SchemaError {
            message: e.to_string(),
        }
    })?;

    let first = parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| SummaryError::SchemaError {
            message: "response contained no choices".to_string(),
        })?;

    Ok(first.message.content.trim().to_string())
}

#[async_trait::async_trait]
impl<C: ConfigProvider, K: CredentialProvider> Summarizer for CompletionClient<C, K> {
    async fn summarize(&self, code: &str) -> Result<String> {
        let request = build_request(&self.config, code);
        self.complete(&request).await
    }
}
