use serde::Deserialize;

/// Partial update: absent fields are left untouched. An explicit empty
/// string is a write, not an omission.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateCardRequest {
    pub text: Option<String>,
    pub description: Option<String>,
}
