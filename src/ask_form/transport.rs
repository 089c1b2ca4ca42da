// src/ask_form/transport.rs
use async_trait::async_trait;
use reqwest::Client;

use crate::error::ClientError;
use crate::message::{AskReply, AskRequest};

#[async_trait]
pub trait AskTransport: Send + Sync {
    async fn ask(&self, request: &AskRequest) -> Result<AskReply, ClientError>;
}

/// Posts the request as JSON to a fixed endpoint.
///
/// The status code is not inspected: any body that parses as JSON is
/// returned, anything else is a [`ClientError::Decode`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self { client, endpoint: endpoint.into() }
    }
}

#[async_trait]
impl AskTransport for HttpTransport {
    async fn ask(&self, request: &AskRequest) -> Result<AskReply, ClientError> {
        let transport = |source: reqwest::Error| ClientError::Transport {
            url: self.endpoint.clone(),
            source,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(transport)?;

        tracing::debug!(status = %response.status(), "ask endpoint answered");
        let body = response.bytes().await.map_err(transport)?;
        Ok(serde_json::from_slice(&body)?)
    }
}
