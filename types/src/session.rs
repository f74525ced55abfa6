use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::content::{Content, Role};
use crate::error::ValidationError;
use crate::tools::Tool;
use crate::Part;

pub const DEFAULT_MODEL: &str = "models/gemini-2.0-flash-exp";

/// Configuration for one live session. Built once, sent exactly once as the
/// setup message, then immutable for the session's lifetime.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveConfig {
    /// Model identifier, ex: "models/gemini-2.0-flash-exp"
    model: String,

    /// System instructions prepended to the conversation.
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,

    /// Response modality and voice selection.
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,

    /// Tools (functions and built-in capabilities) available to the model.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    tools: Vec<Tool>,
}

impl LiveConfig {
    pub fn builder(model: &str) -> LiveConfigBuilder {
        LiveConfigBuilder::new(model)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn system_instruction(&self) -> Option<&Content> {
        self.system_instruction.as_ref()
    }

    pub fn generation_config(&self) -> Option<&GenerationConfig> {
        self.generation_config.as_ref()
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }
}

impl Default for LiveConfig {
    fn default() -> Self {
        LiveConfig::builder(DEFAULT_MODEL).build()
    }
}

pub struct LiveConfigBuilder {
    config: LiveConfig,
}

impl LiveConfigBuilder {
    pub fn new(model: &str) -> Self {
        Self {
            config: LiveConfig {
                model: model.to_string(),
                system_instruction: None,
                generation_config: None,
                tools: vec![],
            },
        }
    }

    pub fn with_system_instruction(mut self, text: &str) -> Self {
        self.config.system_instruction =
            Some(Content::new(Role::User, vec![Part::text(text)]));
        self
    }

    pub fn with_generation_config(mut self, generation_config: GenerationConfig) -> Self {
        self.config.generation_config = Some(generation_config);
        self
    }

    pub fn with_tools(mut self, tools: Vec<Tool>) -> Self {
        self.config.tools = tools;
        self
    }

    pub fn with_tool(mut self, tool: Tool) -> Self {
        self.config.tools.push(tool);
        self
    }

    pub fn build(self) -> LiveConfig {
        self.config
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    response_modalities: ResponseModality,

    #[serde(skip_serializing_if = "Option::is_none")]
    speech_config: Option<SpeechConfig>,
}

impl GenerationConfig {
    pub fn new(response_modalities: ResponseModality) -> Self {
        Self {
            response_modalities,
            speech_config: None,
        }
    }

    /// Selects a prebuilt voice for audio responses.
    pub fn with_voice(mut self, voice: Voice) -> Self {
        self.speech_config = Some(SpeechConfig::prebuilt(voice));
        self
    }

    pub fn response_modalities(&self) -> ResponseModality {
        self.response_modalities
    }

    pub fn speech_config(&self) -> Option<&SpeechConfig> {
        self.speech_config.as_ref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ResponseModality {
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "audio")]
    Audio,
    #[serde(rename = "image")]
    Image,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    voice_config: Option<VoiceConfig>,
}

impl SpeechConfig {
    pub fn prebuilt(voice: Voice) -> Self {
        Self {
            voice_config: Some(VoiceConfig {
                prebuilt_voice_config: Some(PrebuiltVoiceConfig { voice_name: voice }),
            }),
        }
    }

    pub fn voice(&self) -> Option<Voice> {
        self.voice_config
            .as_ref()
            .and_then(|vc| vc.prebuilt_voice_config.as_ref())
            .map(|pv| pv.voice_name)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct VoiceConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    prebuilt_voice_config: Option<PrebuiltVoiceConfig>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct PrebuiltVoiceConfig {
    voice_name: Voice,
}

/// The closed set of prebuilt voices. Anything else is rejected when the
/// value is constructed, not when the setup message is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Voice {
    Puck,
    Charon,
    Lore,
    Fenrir,
    Aoede,
}

impl Voice {
    pub fn as_str(&self) -> &'static str {
        match self {
            Voice::Puck => "Puck",
            Voice::Charon => "Charon",
            Voice::Lore => "Lore",
            Voice::Fenrir => "Fenrir",
            Voice::Aoede => "Aoede",
        }
    }
}

impl Serialize for Voice {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl FromStr for Voice {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Puck" => Voice::Puck,
            "Charon" => Voice::Charon,
            "Lore" => Voice::Lore,
            "Fenrir" => Voice::Fenrir,
            "Aoede" => Voice::Aoede,
            other => return Err(ValidationError::UnknownVoice(other.to_string())),
        })
    }
}

impl<'de> Deserialize<'de> for Voice {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Voice::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_wire_shape() {
        let config = LiveConfig::builder("m1").build();
        assert_eq!(serde_json::to_string(&config).unwrap(), r#"{"model":"m1"}"#);
    }

    #[test]
    fn config_round_trip() {
        let config = LiveConfig::builder(DEFAULT_MODEL)
            .with_system_instruction("You are a helpful assistant.")
            .with_generation_config(
                GenerationConfig::new(ResponseModality::Audio).with_voice(Voice::Aoede),
            )
            .build();

        let json = serde_json::to_string(&config).unwrap();
        let back: LiveConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn speech_config_nesting() {
        let config = GenerationConfig::new(ResponseModality::Audio).with_voice(Voice::Puck);
        assert_eq!(
            serde_json::to_string(&config).unwrap(),
            r#"{"responseModalities":"audio","speechConfig":{"voiceConfig":{"prebuiltVoiceConfig":{"voiceName":"Puck"}}}}"#
        );
        assert_eq!(config.speech_config().unwrap().voice(), Some(Voice::Puck));
    }

    #[test]
    fn voice_set_is_closed() {
        assert_eq!("Fenrir".parse::<Voice>().unwrap(), Voice::Fenrir);
        assert!(matches!(
            "Alloy".parse::<Voice>(),
            Err(ValidationError::UnknownVoice(_))
        ));
        assert!(serde_json::from_str::<Voice>(r#""Robot""#).is_err());
    }
}
