use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Generation parameters as received by the proxy. Values are kept as raw JSON
/// and forwarded untouched; the upstream API is the judge of their validity.
/// Unknown fields are dropped and absent ones are left out of the forward;
/// an explicit `null` is forwarded as `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateImagesDto {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub model: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub prompt: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub num_images: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub size: Option<Value>,
}

/// Only called for keys present in the body, so `null` becomes `Some(Null)`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
