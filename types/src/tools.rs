/// A capability offered to the model: either a set of client-executed
/// function declarations or a built-in capability. Each variant serializes
/// as an object with a single discriminating key.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tool {
    FunctionDeclarations(Vec<FunctionDeclaration>),
    GoogleSearch {},
    CodeExecution {},
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FunctionDeclaration {
    /// The name of the function
    name: String,

    /// The description of the function
    description: String,

    /// The parameters of the function in JSON Schema format
    parameters: serde_json::Value,
}

impl FunctionDeclaration {
    pub fn new(name: &str, description: &str, parameters: serde_json::Value) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            parameters,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn parameters(&self) -> &serde_json::Value {
        &self.parameters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_wire_shapes() {
        let tool = Tool::FunctionDeclarations(vec![FunctionDeclaration::new(
            "get_weather",
            "Look up the weather",
            serde_json::json!({"type": "object", "properties": {"city": {"type": "string"}}}),
        )]);
        let json = serde_json::to_value(&tool).unwrap();
        assert!(json.get("functionDeclarations").is_some());

        assert_eq!(
            serde_json::to_string(&Tool::GoogleSearch {}).unwrap(),
            r#"{"googleSearch":{}}"#
        );
        assert_eq!(
            serde_json::to_string(&Tool::CodeExecution {}).unwrap(),
            r#"{"codeExecution":{}}"#
        );
    }
}
