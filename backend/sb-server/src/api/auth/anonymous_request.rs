use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnonymousRequest {
    /// Display name for the guest; "Guest" when omitted or blank
    pub display_name: Option<String>,
}
