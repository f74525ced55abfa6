//! Predicates that classify an already-parsed message value into one of the
//! known variants, using presence of the discriminating key as the sole test.
//!
//! Mutual exclusivity is not checked here: [`crate::ServerMessage::from_value`]
//! rejects values with zero or multiple recognized keys before any variant is
//! assumed.

use serde_json::Value;

fn has_key(value: &Value, key: &str) -> bool {
    value.as_object().is_some_and(|map| map.contains_key(key))
}

// outgoing messages

pub fn is_setup(value: &Value) -> bool {
    has_key(value, "setup")
}

pub fn is_client_content(value: &Value) -> bool {
    has_key(value, "clientContent")
}

pub fn is_realtime_input(value: &Value) -> bool {
    has_key(value, "realtimeInput")
}

pub fn is_tool_response(value: &Value) -> bool {
    has_key(value, "toolResponse")
}

// incoming messages

pub fn is_setup_complete(value: &Value) -> bool {
    has_key(value, "setupComplete")
}

pub fn is_server_content(value: &Value) -> bool {
    has_key(value, "serverContent")
}

pub fn is_tool_call(value: &Value) -> bool {
    has_key(value, "toolCall")
}

pub fn is_tool_call_cancellation(value: &Value) -> bool {
    has_key(value, "toolCallCancellation")
}

// nested server content variants

pub fn is_model_turn(value: &Value) -> bool {
    has_key(value, "modelTurn")
}

pub fn is_turn_complete(value: &Value) -> bool {
    has_key(value, "turnComplete")
}

pub fn is_interrupted(value: &Value) -> bool {
    has_key(value, "interrupted")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn incoming(value: &Value) -> Vec<bool> {
        vec![
            is_setup_complete(value),
            is_server_content(value),
            is_tool_call(value),
            is_tool_call_cancellation(value),
        ]
    }

    #[test]
    fn exactly_one_discriminator_matches_each_incoming_variant() {
        let samples = [
            json!({"setupComplete": {}}),
            json!({"serverContent": {"modelTurn": {"parts": [{"text": "hi"}]}}}),
            json!({"toolCall": {"functionCalls": [{"id": "1", "name": "f", "args": {}}]}}),
            json!({"toolCallCancellation": {"ids": ["1"]}}),
        ];
        for sample in &samples {
            let hits = incoming(sample).into_iter().filter(|&hit| hit).count();
            assert_eq!(hits, 1, "sample: {}", sample);
        }
    }

    #[test]
    fn no_discriminator_matches_foreign_values() {
        for value in [json!({"somethingElse": {}}), json!(42), json!(null)] {
            assert!(incoming(&value).into_iter().all(|hit| !hit));
        }
    }

    #[test]
    fn outgoing_discriminators() {
        assert!(is_setup(&json!({"setup": {"model": "m1"}})));
        assert!(is_client_content(&json!({"clientContent": {}})));
        assert!(is_realtime_input(&json!({"realtimeInput": {}})));
        assert!(is_tool_response(&json!({"toolResponse": {}})));
        assert!(!is_setup(&json!({"clientContent": {}})));
    }
}
