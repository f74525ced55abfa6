use crate::content::Content;
use crate::Blob;

/// A conversational turn (or batch of turns) pushed by the client.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientContent {
    turns: Vec<Content>,
    turn_complete: bool,
}

impl ClientContent {
    pub fn new(turns: Vec<Content>, turn_complete: bool) -> Self {
        Self {
            turns,
            turn_complete,
        }
    }

    pub fn turns(&self) -> &[Content] {
        &self.turns
    }

    pub fn turn_complete(&self) -> bool {
        self.turn_complete
    }
}

/// Streamed media sent outside the turn-based content channel. Each frame is
/// a complete message; multi-chunk media goes out as independent frames.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealtimeInput {
    media_chunks: Vec<Blob>,
}

impl RealtimeInput {
    pub fn chunk(chunk: Blob) -> Self {
        Self {
            media_chunks: vec![chunk],
        }
    }

    pub fn media_chunks(&self) -> &[Blob] {
        &self.media_chunks
    }
}

/// The client's reply to a tool call, correlated by id.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResponse {
    function_responses: Vec<LiveFunctionResponse>,
}

impl ToolResponse {
    pub fn new(function_responses: Vec<LiveFunctionResponse>) -> Self {
        Self { function_responses }
    }

    pub fn function_responses(&self) -> &[LiveFunctionResponse] {
        &self.function_responses
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LiveFunctionResponse {
    id: String,
    response: serde_json::Value,
}

impl LiveFunctionResponse {
    pub fn new(id: &str, response: serde_json::Value) -> Self {
        Self {
            id: id.to_string(),
            response,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn response(&self) -> &serde_json::Value {
        &self.response
    }
}
