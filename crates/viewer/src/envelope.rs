use resultview_core::Payload;
use serde_json::Value;
use thiserror::Error;

use crate::config::ViewerConfig;

/// Ways an inbound message can fail to carry a result payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    #[error("message is not a record")]
    NotARecord,
    #[error("message has no `{0}` tag")]
    MissingTag(String),
    #[error("unexpected message type `{found}`")]
    UnexpectedTag { found: String },
    #[error("message has no `{0}` payload")]
    MissingPayload(String),
    #[error("`{0}` payload is not a record")]
    PayloadNotARecord(String),
}

/// Borrows the result payload out of a tagged message.
pub fn open_envelope<'a>(
    message: &'a Value,
    config: &ViewerConfig,
) -> Result<&'a Payload, EnvelopeError> {
    let record = message.as_object().ok_or(EnvelopeError::NotARecord)?;

    let tag = record
        .get(&config.tag_field)
        .and_then(Value::as_str)
        .ok_or_else(|| EnvelopeError::MissingTag(config.tag_field.clone()))?;
    if tag != config.message_type {
        return Err(EnvelopeError::UnexpectedTag {
            found: tag.to_string(),
        });
    }

    match record.get(&config.payload_field) {
        None | Some(Value::Null) => Err(EnvelopeError::MissingPayload(
            config.payload_field.clone(),
        )),
        Some(Value::Object(payload)) => Ok(payload),
        Some(_) => Err(EnvelopeError::PayloadNotARecord(
            config.payload_field.clone(),
        )),
    }
}
