use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::error::{GhIssuesError, Result};
use crate::types::ResultEnvelope;

pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/graphql";

const USER_AGENT: &str = concat!("gh-issues/", env!("CARGO_PKG_VERSION"));

/// Executes one GraphQL document against the API.
///
/// GraphQL-level errors come back inside the envelope; only transport and
/// HTTP failures are `Err`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<ResultEnvelope<serde_json::Value>>;
}

pub struct GitHubClient {
    http: Client,
    endpoint: Url,
    token: String,
}

#[derive(Serialize)]
struct GraphQLRequest<'a> {
    query: &'a str,
    variables: serde_json::Value,
}

impl GitHubClient {
    pub fn new(token: String, endpoint: Url, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            endpoint,
            token,
        })
    }
}

#[async_trait]
impl Transport for GitHubClient {
    async fn execute(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<ResultEnvelope<serde_json::Value>> {
        debug!(endpoint = %self.endpoint, %variables, "Executing GraphQL request");

        let request = GraphQLRequest { query, variables };

        let response = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(&self.token)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GhIssuesError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .text()
                    .await
                    .unwrap_or_else(|_| "<failed to read response body>".to_string()),
            });
        }

        let envelope: ResultEnvelope<serde_json::Value> = response.json().await?;
        debug!(
            has_data = envelope.data.is_some(),
            errors = envelope.error_messages().len(),
            "GraphQL response received"
        );

        Ok(envelope)
    }
}
