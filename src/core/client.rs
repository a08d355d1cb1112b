//! Async HTTP client for AIWF agent servers

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::config::ClientConfig;
use crate::core::errors::{ClientError, Result};
use crate::core::models::{
    primitive_output, AgentCall, AgentList, HealthStatus, PrimitiveInput, TranslateRequest,
    TranslateResponse,
};

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Name of the translation agent
pub const TRANSLATOR_AGENT: &str = "translator";

/// Client bound to one AIWF server
#[derive(Debug, Clone)]
pub struct AiwfClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl AiwfClient {
    /// Create a new client
    pub fn new(config: ClientConfig) -> Result<Self> {
        let config = config.normalized();
        config.validate()?;

        let client = reqwest::Client::builder().build()?;

        Ok(Self { client, config })
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        let config = ClientConfig::load()?;
        Self::new(config)
    }

    /// Base URL with trailing slashes removed
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn has_api_key(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Call the `translator` agent
    pub async fn translator(&self, request: &TranslateRequest) -> Result<TranslateResponse> {
        let call = self.call_agent(TRANSLATOR_AGENT, request).await?;
        Ok(call.into_data())
    }

    /// Call an agent with a structured input and output
    pub async fn call_agent<I, O>(&self, agent: &str, input: &I) -> Result<AgentCall<O>>
    where
        I: Serialize + ?Sized,
        O: DeserializeOwned,
    {
        let value = self.post_agent(agent, input).await?;

        AgentCall::from_value(value).map_err(|e| ClientError::Decode {
            agent: agent.to_string(),
            message: e.to_string(),
        })
    }

    /// Call an agent whose input and output are primitives
    pub async fn call_primitive<I>(&self, agent: &str, input: I) -> Result<String>
    where
        I: Serialize,
    {
        let value = self.post_agent(agent, &PrimitiveInput { input }).await?;

        let call = AgentCall::<Value>::from_value(value).map_err(|e| ClientError::Decode {
            agent: agent.to_string(),
            message: e.to_string(),
        })?;

        Ok(match call.data {
            Value::String(s) => s,
            Value::Null => String::new(),
            object @ Value::Object(_) => primitive_output(&object),
            other => other.to_string(),
        })
    }

    /// Check server health
    pub async fn health(&self) -> Result<HealthStatus> {
        let value = self.get("/health").await?;
        serde_json::from_value(value).map_err(|e| ClientError::Decode {
            agent: "health".to_string(),
            message: e.to_string(),
        })
    }

    /// List agents exposed by the server
    pub async fn list_agents(&self) -> Result<AgentList> {
        let value = self.get("/agents").await?;
        serde_json::from_value(value).map_err(|e| ClientError::Decode {
            agent: "agents".to_string(),
            message: e.to_string(),
        })
    }

    /// Send `POST /agent/{agent}` and return the decoded JSON body
    async fn post_agent<I>(&self, agent: &str, input: &I) -> Result<Value>
    where
        I: Serialize + ?Sized,
    {
        validate_agent_name(agent)?;

        let url = format!("{}/agent/{}", self.config.base_url, agent);
        debug!("Calling agent {} at {}", agent, url);

        let mut request = self.client.post(&url).json(input);

        if let Some(api_key) = &self.config.api_key {
            request = request.header(API_KEY_HEADER, api_key);
        }

        let response = request.send().await.map_err(|e| ClientError::Network {
            message: e.to_string(),
        })?;

        read_json(response).await
    }

    async fn get(&self, endpoint: &str) -> Result<Value> {
        let url = format!("{}{}", self.config.base_url, endpoint);
        debug!("GET {}", url);

        let mut request = self.client.get(&url);
        if let Some(api_key) = &self.config.api_key {
            request = request.header(API_KEY_HEADER, api_key);
        }

        let response = request.send().await.map_err(|e| ClientError::Network {
            message: e.to_string(),
        })?;

        read_json(response).await
    }
}

/// Map a response to JSON, treating anything but 200 as an error
async fn read_json(response: reqwest::Response) -> Result<Value> {
    let status = response.status().as_u16();
    let body = response.text().await.map_err(|e| ClientError::Network {
        message: e.to_string(),
    })?;

    if status != 200 {
        warn!("Server returned {}: {}", status, body);
        return Err(ClientError::Api { status, body });
    }

    serde_json::from_str(&body).map_err(|_| ClientError::InvalidJson { body })
}

fn validate_agent_name(agent: &str) -> Result<()> {
    let valid = !agent.is_empty()
        && agent
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid {
        Ok(())
    } else {
        Err(ClientError::InvalidAgent {
            name: agent.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = AiwfClient::new(ClientConfig::default()).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8080");
        assert!(!client.has_api_key());
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = AiwfClient::new(ClientConfig::new("http://localhost:9000/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000");
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let result = AiwfClient::new(ClientConfig::new(""));
        assert!(matches!(result, Err(ClientError::Config { .. })));
    }

    #[test]
    fn test_agent_name_validation() {
        assert!(validate_agent_name("translator").is_ok());
        assert!(validate_agent_name("text_analyzer-v2").is_ok());
        assert!(validate_agent_name("").is_err());
        assert!(validate_agent_name("../admin").is_err());
        assert!(validate_agent_name("a b").is_err());
    }

    #[tokio::test]
    async fn test_invalid_agent_fails_before_sending() {
        let client = AiwfClient::new(ClientConfig::default()).unwrap();
        let result = client
            .call_agent::<_, Value>("bad/name", &serde_json::json!({}))
            .await;
        assert!(matches!(result, Err(ClientError::InvalidAgent { .. })));
    }
}
