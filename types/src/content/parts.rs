use base64::engine::general_purpose;
use base64::Engine as _;

use crate::error::DecodeError;

/// One typed fragment of a turn's content. Each variant serializes as an
/// object with a single discriminating key.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Part {
    Text(String),
    InlineData(Blob),
    FunctionCall(FunctionCall),
    FunctionResponse(FunctionResponse),
    FileData(FileData),
    ExecutableCode(ExecutableCode),
    CodeExecutionResult(CodeExecutionResult),
}

impl Part {
    pub fn text(text: &str) -> Self {
        Part::Text(text.to_string())
    }

    pub fn inline_data(blob: Blob) -> Self {
        Part::InlineData(blob)
    }
}

/// A media payload carried inline as base64 text plus its mime type.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    mime_type: String,
    /// base64-encoded
    data: String,
}

impl Blob {
    /// Encodes raw bytes into a blob.
    pub fn from_bytes(mime_type: &str, bytes: &[u8]) -> Self {
        Self {
            mime_type: mime_type.to_string(),
            data: general_purpose::STANDARD.encode(bytes),
        }
    }

    /// Wraps data that is already base64 text.
    pub fn from_encoded(mime_type: &str, data: &str) -> Self {
        Self {
            mime_type: mime_type.to_string(),
            data: data.to_string(),
        }
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    /// Decodes the payload back into raw bytes. Invalid base64 is an error,
    /// never a truncated buffer.
    pub fn decode(&self) -> Result<Vec<u8>, DecodeError> {
        Ok(general_purpose::STANDARD.decode(&self.data)?)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FunctionCall {
    name: String,
    #[serde(default)]
    args: serde_json::Value,
}

impl FunctionCall {
    pub fn new(name: &str, args: serde_json::Value) -> Self {
        Self {
            name: name.to_string(),
            args,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &serde_json::Value {
        &self.args
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FunctionResponse {
    name: String,
    response: serde_json::Value,
}

impl FunctionResponse {
    pub fn new(name: &str, response: serde_json::Value) -> Self {
        Self {
            name: name.to_string(),
            response,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn response(&self) -> &serde_json::Value {
        &self.response
    }
}

/// A reference to previously uploaded file data.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileData {
    mime_type: String,
    file_uri: String,
}

impl FileData {
    pub fn new(mime_type: &str, file_uri: &str) -> Self {
        Self {
            mime_type: mime_type.to_string(),
            file_uri: file_uri.to_string(),
        }
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn file_uri(&self) -> &str {
        &self.file_uri
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExecutableCode {
    language: Language,
    code: String,
}

impl ExecutableCode {
    pub fn new(language: Language, code: &str) -> Self {
        Self {
            language,
            code: code.to_string(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Language {
    #[serde(rename = "PYTHON")]
    Python,
    #[serde(rename = "LANGUAGE_UNSPECIFIED")]
    Unspecified,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CodeExecutionResult {
    outcome: Outcome,
    output: String,
}

impl CodeExecutionResult {
    pub fn new(outcome: Outcome, output: &str) -> Self {
        Self {
            outcome,
            output: output.to_string(),
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn output(&self) -> &str {
        &self.output
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Outcome {
    #[serde(rename = "OUTCOME_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "OUTCOME_OK")]
    Ok,
    #[serde(rename = "OUTCOME_FAILED")]
    Failed,
    #[serde(rename = "OUTCOME_DEADLINE_EXCEEDED")]
    DeadlineExceeded,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_discriminating_keys() {
        let part = Part::text("hello");
        assert_eq!(serde_json::to_string(&part).unwrap(), r#"{"text":"hello"}"#);

        let part = Part::InlineData(Blob::from_encoded("audio/pcm", "AAAA"));
        assert_eq!(
            serde_json::to_string(&part).unwrap(),
            r#"{"inlineData":{"mimeType":"audio/pcm","data":"AAAA"}}"#
        );

        let part = Part::ExecutableCode(ExecutableCode::new(Language::Python, "print(1)"));
        assert_eq!(
            serde_json::to_string(&part).unwrap(),
            r#"{"executableCode":{"language":"PYTHON","code":"print(1)"}}"#
        );
    }

    #[test]
    fn blob_round_trips_bytes() {
        let blob = Blob::from_bytes("audio/pcm", &[0x00, 0x01, 0xfe, 0xff]);
        assert_eq!(blob.decode().unwrap(), vec![0x00, 0x01, 0xfe, 0xff]);
    }

    #[test]
    fn blob_rejects_invalid_base64() {
        let blob = Blob::from_encoded("audio/pcm", "not base64!!!");
        assert!(matches!(blob.decode(), Err(DecodeError::Base64(_))));
    }

    #[test]
    fn function_call_args_default_to_null() {
        let part: Part = serde_json::from_str(r#"{"functionCall":{"name":"f"}}"#).unwrap();
        match part {
            Part::FunctionCall(call) => {
                assert_eq!(call.name(), "f");
                assert!(call.args().is_null());
            }
            other => panic!("unexpected part: {:?}", other),
        }
    }
}
