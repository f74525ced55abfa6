use serde_json::Value;

use crate::error::ValidationError;
use crate::guards;
use crate::Part;

/// Handshake acknowledgment. At most one per session.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SetupComplete {}

/// Content produced by the server, one nested variant per message.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ServerContent {
    ModelTurn(ModelTurn),
    TurnComplete(bool),
    Interrupted(bool),
}

impl ServerContent {
    /// Same presence-test classification as the top-level message union, one
    /// level down.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        if !value.is_object() {
            return Err(ValidationError::NotAnObject);
        }

        let recognized = [
            guards::is_model_turn(value),
            guards::is_turn_complete(value),
            guards::is_interrupted(value),
        ];
        match recognized.iter().filter(|&&hit| hit).count() {
            0 => return Err(ValidationError::NoVariant),
            1 => {}
            _ => return Err(ValidationError::AmbiguousVariant),
        }

        if guards::is_model_turn(value) {
            serde_json::from_value(value["modelTurn"].clone())
                .map(ServerContent::ModelTurn)
                .map_err(|e| ValidationError::payload("modelTurn", e))
        } else if guards::is_turn_complete(value) {
            serde_json::from_value(value["turnComplete"].clone())
                .map(ServerContent::TurnComplete)
                .map_err(|e| ValidationError::payload("turnComplete", e))
        } else {
            serde_json::from_value(value["interrupted"].clone())
                .map(ServerContent::Interrupted)
                .map_err(|e| ValidationError::payload("interrupted", e))
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ModelTurn {
    parts: Vec<Part>,
}

impl ModelTurn {
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }
}

/// A request for the client to execute named functions and reply with a
/// correlated tool response.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCall {
    function_calls: Vec<LiveFunctionCall>,
}

impl ToolCall {
    pub fn function_calls(&self) -> &[LiveFunctionCall] {
        &self.function_calls
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LiveFunctionCall {
    id: String,
    name: String,
    #[serde(default)]
    args: serde_json::Value,
}

impl LiveFunctionCall {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &serde_json::Value {
        &self.args
    }
}

/// Invalidates previously issued, not-yet-answered tool calls by id. An id
/// with no outstanding call is a no-op for the receiver, not an error.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ToolCallCancellation {
    ids: Vec<String>,
}

impl ToolCallCancellation {
    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}
