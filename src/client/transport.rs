use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client};
use serde_json::Value;

use super::{
    errors::ClientError, models::generation_request::GenerationRequest, state::ProxyResponse,
    DEFAULT_PROXY_URL,
};

/// Sends one generation request to the proxy.
#[async_trait]
pub trait GenerationTransport: Send + Sync {
    async fn send(&self, request: &GenerationRequest) -> Result<ProxyResponse, ClientError>;
}

#[derive(Debug, Clone)]
pub struct ProxyClient {
    client: Client,
    url: String,
}

impl Default for ProxyClient {
    fn default() -> Self {
        Self::new(Client::new(), DEFAULT_PROXY_URL)
    }
}

impl ProxyClient {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl GenerationTransport for ProxyClient {
    async fn send(&self, request: &GenerationRequest) -> Result<ProxyResponse, ClientError> {
        let result = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await;

        let res = match result {
            Ok(res) => res,
            Err(e) => {
                tracing::error!(%e, url = %self.url, "failed to reach proxy");
                return Err(ClientError::Transport(e.to_string()));
            }
        };

        let status = res.status();

        match res.text().await {
            Ok(text) => match serde_json::from_str::<Value>(&text) {
                Ok(body) => Ok(ProxyResponse { status, body }),
                Err(e) => {
                    tracing::error!(%e, %status, %text, "proxy returned a non-json body");
                    Err(ClientError::Transport(
                        "Failed to parse the server response.".to_string(),
                    ))
                }
            },
            Err(e) => {
                tracing::error!(%e, %status, "failed to read proxy response");
                Err(ClientError::Transport(e.to_string()))
            }
        }
    }
}
