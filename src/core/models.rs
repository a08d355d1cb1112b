//! Request and response models exchanged with AIWF agents

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

/// Input of the `translator` agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub target_lang: String,
    pub text: String,
}

impl TranslateRequest {
    pub fn new(target_lang: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            target_lang: target_lang.into(),
            text: text.into(),
        }
    }
}

/// Output of the `translator` agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translated: String,
    pub source_lang: String,
    /// Score in `[0, 1]`
    pub confidence: f64,
}

impl TranslateResponse {
    /// Confidence scaled to a percentage
    pub fn confidence_percent(&self) -> f64 {
        self.confidence * 100.0
    }
}

/// Token counters reported by the server runtime
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tokens {
    #[serde(default, alias = "Prompt")]
    pub prompt: u64,
    #[serde(default, alias = "Completion")]
    pub completion: u64,
    #[serde(default, alias = "Total")]
    pub total: u64,
}

/// Execution metadata attached to an agent response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    #[serde(default, alias = "StepName")]
    pub step_name: Option<String>,
    #[serde(default, alias = "Usage")]
    pub usage: Tokens,
    #[serde(default, alias = "Attempts")]
    pub attempts: Option<u32>,
    /// Raw duration as emitted by the server (nanoseconds or a string)
    #[serde(default, alias = "Duration")]
    pub duration: Option<Value>,
    #[serde(default, alias = "ArtifactID", alias = "artifactId")]
    pub artifact_id: Option<String>,
}

/// The `{data, trace}` wrapper the server puts around agent output
#[derive(Debug, Clone, Deserialize)]
pub struct AgentEnvelope<T> {
    pub data: T,
    #[serde(default)]
    pub trace: Option<Trace>,
}

/// Keys an envelope may carry; any other key marks a bare payload
const ENVELOPE_KEYS: [&str; 2] = ["data", "trace"];

/// Decoded result of one agent call
#[derive(Debug, Clone)]
pub struct AgentCall<T> {
    pub data: T,
    pub trace: Option<Trace>,
}

impl<T> AgentCall<T> {
    pub fn into_data(self) -> T {
        self.data
    }
}

impl<T: DeserializeOwned> AgentCall<T> {
    /// Decode a response body, unwrapping the envelope when present
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        let wrapped = value
            .as_object()
            .map(|obj| {
                obj.contains_key("data")
                    && obj.keys().all(|key| ENVELOPE_KEYS.contains(&key.as_str()))
            })
            .unwrap_or(false);

        if wrapped {
            let envelope: AgentEnvelope<T> = serde_json::from_value(value)?;
            Ok(Self {
                data: envelope.data,
                trace: envelope.trace,
            })
        } else {
            Ok(Self {
                data: serde_json::from_value(value)?,
                trace: None,
            })
        }
    }
}

/// Request body for agents whose input is a primitive
#[derive(Debug, Clone, Serialize)]
pub struct PrimitiveInput<T> {
    pub input: T,
}

/// Extract primitive agent output: `output`, then `result`, then empty
pub fn primitive_output(value: &Value) -> String {
    ["output", "result"]
        .iter()
        .find_map(|key| value.get(*key).filter(|v| !v.is_null()))
        .map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .unwrap_or_default()
}

/// Response of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// One entry of `GET /agents`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AgentEntry {
    /// Bare agent name
    Name(String),
    /// Name with an optional description
    Detailed {
        name: String,
        #[serde(default)]
        description: Option<String>,
    },
}

impl AgentEntry {
    pub fn name(&self) -> &str {
        match self {
            AgentEntry::Name(name) => name,
            AgentEntry::Detailed { name, .. } => name,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            AgentEntry::Name(_) => None,
            AgentEntry::Detailed { description, .. } => description.as_deref(),
        }
    }
}

/// Response of `GET /agents`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentList {
    #[serde(default)]
    pub agents: Vec<AgentEntry>,
}

impl AgentList {
    pub fn names(&self) -> Vec<&str> {
        self.agents.iter().map(AgentEntry::name).collect()
    }
}
