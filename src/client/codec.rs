use serde_json::Value;

use gemini_live_types::DecodeError;

/// Parses a text frame as a single self-contained JSON value.
pub(crate) fn decode_text(text: &str) -> Result<Value, DecodeError> {
    Ok(serde_json::from_str(text)?)
}

/// Binary-tagged frames carry the same JSON text payload as text frames; the
/// binary flag only affects how the frame becomes text, not its content.
pub(crate) fn decode_binary(bytes: Vec<u8>) -> Result<Value, DecodeError> {
    let text = String::from_utf8(bytes)?;
    decode_text(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_and_binary_frames_decode_to_the_same_value() {
        let payload = r#"{"setupComplete":{}}"#;
        let from_text = decode_text(payload).unwrap();
        let from_binary = decode_binary(payload.as_bytes().to_vec()).unwrap();
        assert_eq!(from_text, from_binary);
        assert_eq!(from_text, json!({"setupComplete": {}}));
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        assert!(matches!(
            decode_text("{\"unterminated\""),
            Err(DecodeError::Json(_))
        ));
    }

    #[test]
    fn non_utf8_binary_is_a_decode_error() {
        assert!(matches!(
            decode_binary(vec![0xff, 0xfe, 0x00]),
            Err(DecodeError::Utf8(_))
        ));
    }
}
