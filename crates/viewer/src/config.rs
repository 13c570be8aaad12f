use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid viewer config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Field holding the message type tag.
    pub tag_field: String,
    pub message_type: String,
    /// Field holding the result payload.
    pub payload_field: String,
    pub no_data_message: String,
    pub unclassified_message: String,
    /// Decimal places used when numbers are written as text.
    pub precision: usize,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            tag_field: "type".to_string(),
            message_type: "result".to_string(),
            payload_field: "result".to_string(),
            no_data_message: "No data received.".to_string(),
            unclassified_message: "No visual rule matched for this output.".to_string(),
            precision: 4,
        }
    }
}

impl ViewerConfig {
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(input)?)
    }
}
