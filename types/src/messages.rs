pub mod client;
pub mod server;

pub use client::{ClientContent, LiveFunctionResponse, RealtimeInput, ToolResponse};
pub use server::{
    LiveFunctionCall, ModelTurn, ServerContent, SetupComplete, ToolCall, ToolCallCancellation,
};

use serde_json::Value;

use crate::content::Content;
use crate::error::ValidationError;
use crate::guards;
use crate::session::LiveConfig;
use crate::{Blob, Part};

/// A message sent from the client to the server. Each variant serializes as
/// an object whose single top-level key identifies the variant.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClientMessage {
    /// The handshake message. Sent exactly once, before anything else.
    Setup(LiveConfig),
    ClientContent(ClientContent),
    RealtimeInput(RealtimeInput),
    ToolResponse(ToolResponse),
}

impl ClientMessage {
    /// A complete single-part text turn from the user.
    pub fn text_turn(text: &str) -> Self {
        ClientMessage::ClientContent(ClientContent::new(
            vec![Content::user(vec![Part::text(text)])],
            true,
        ))
    }

    /// One chunk of streamed media, a self-contained message.
    pub fn realtime_input(chunk: Blob) -> Self {
        ClientMessage::RealtimeInput(RealtimeInput::chunk(chunk))
    }

    pub fn tool_response(responses: Vec<LiveFunctionResponse>) -> Self {
        ClientMessage::ToolResponse(ToolResponse::new(responses))
    }
}

/// A message received from the server, identified by its single top-level key.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ServerMessage {
    SetupComplete(SetupComplete),
    ServerContent(ServerContent),
    ToolCall(ToolCall),
    ToolCallCancellation(ToolCallCancellation),
}

impl ServerMessage {
    /// Classifies a decoded frame by presence of its discriminating key, then
    /// deserializes only that key's payload. Unrecognized fields next to the
    /// recognized key are ignored so that newer server messages do not break
    /// older clients; zero or multiple recognized keys are rejected.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        if !value.is_object() {
            return Err(ValidationError::NotAnObject);
        }

        let recognized = [
            guards::is_setup_complete(value),
            guards::is_server_content(value),
            guards::is_tool_call(value),
            guards::is_tool_call_cancellation(value),
        ];
        match recognized.iter().filter(|&&hit| hit).count() {
            0 => return Err(ValidationError::NoVariant),
            1 => {}
            _ => return Err(ValidationError::AmbiguousVariant),
        }

        if guards::is_setup_complete(value) {
            Ok(ServerMessage::SetupComplete(SetupComplete {}))
        } else if guards::is_server_content(value) {
            ServerContent::from_value(&value["serverContent"]).map(ServerMessage::ServerContent)
        } else if guards::is_tool_call(value) {
            serde_json::from_value(value["toolCall"].clone())
                .map(ServerMessage::ToolCall)
                .map_err(|e| ValidationError::payload("toolCall", e))
        } else {
            serde_json::from_value(value["toolCallCancellation"].clone())
                .map(ServerMessage::ToolCallCancellation)
                .map_err(|e| ValidationError::payload("toolCallCancellation", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn setup_round_trip() {
        let message = ClientMessage::Setup(
            LiveConfig::builder("m1")
                .with_system_instruction("be brief")
                .build(),
        );
        let json = serde_json::to_string(&message).unwrap();
        let back: ClientMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, message);
    }

    #[test]
    fn outgoing_wire_shapes() {
        assert_eq!(
            serde_json::to_string(&ClientMessage::text_turn("hi")).unwrap(),
            r#"{"clientContent":{"turns":[{"role":"user","parts":[{"text":"hi"}]}],"turnComplete":true}}"#
        );
        assert_eq!(
            serde_json::to_string(&ClientMessage::realtime_input(Blob::from_encoded(
                "audio/pcm", "AAAA"
            )))
            .unwrap(),
            r#"{"realtimeInput":{"mediaChunks":[{"mimeType":"audio/pcm","data":"AAAA"}]}}"#
        );
        assert_eq!(
            serde_json::to_string(&ClientMessage::tool_response(vec![
                LiveFunctionResponse::new("1", json!({"ok": true}))
            ]))
            .unwrap(),
            r#"{"toolResponse":{"functionResponses":[{"id":"1","response":{"ok":true}}]}}"#
        );
    }

    #[test]
    fn from_value_selects_each_variant() {
        let message =
            ServerMessage::from_value(&json!({"setupComplete": {}})).unwrap();
        assert!(matches!(message, ServerMessage::SetupComplete(_)));

        let message = ServerMessage::from_value(
            &json!({"serverContent": {"modelTurn": {"parts": [{"text": "hello"}]}}}),
        )
        .unwrap();
        match message {
            ServerMessage::ServerContent(ServerContent::ModelTurn(turn)) => {
                assert_eq!(turn.parts(), &[Part::text("hello")]);
            }
            other => panic!("unexpected message: {:?}", other),
        }

        let message = ServerMessage::from_value(
            &json!({"toolCall": {"functionCalls": [{"id": "1", "name": "f", "args": {}}]}}),
        )
        .unwrap();
        match message {
            ServerMessage::ToolCall(call) => {
                assert_eq!(call.function_calls()[0].id(), "1");
                assert_eq!(call.function_calls()[0].name(), "f");
            }
            other => panic!("unexpected message: {:?}", other),
        }

        let message =
            ServerMessage::from_value(&json!({"toolCallCancellation": {"ids": ["1", "2"]}}))
                .unwrap();
        match message {
            ServerMessage::ToolCallCancellation(cancellation) => {
                assert_eq!(cancellation.ids(), &["1".to_string(), "2".to_string()]);
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn from_value_rejects_zero_or_multiple_recognized_keys() {
        assert!(matches!(
            ServerMessage::from_value(&json!({"unknownThing": {}})),
            Err(ValidationError::NoVariant)
        ));
        assert!(matches!(
            ServerMessage::from_value(&json!({"setupComplete": {}, "toolCall": {}})),
            Err(ValidationError::AmbiguousVariant)
        ));
        assert!(matches!(
            ServerMessage::from_value(&json!("not an object")),
            Err(ValidationError::NotAnObject)
        ));
    }

    #[test]
    fn from_value_tolerates_unmodeled_fields() {
        // an unrecognized sibling key does not make the message ambiguous
        let message = ServerMessage::from_value(
            &json!({"setupComplete": {}, "usageMetadata": {"totalTokenCount": 7}}),
        )
        .unwrap();
        assert!(matches!(message, ServerMessage::SetupComplete(_)));

        // unknown fields inside a recognized payload are ignored
        let message = ServerMessage::from_value(&json!({
            "toolCall": {
                "functionCalls": [{"id": "1", "name": "f", "args": {}, "priority": "high"}],
                "experimental": true
            }
        }))
        .unwrap();
        assert!(matches!(message, ServerMessage::ToolCall(_)));
    }
}
