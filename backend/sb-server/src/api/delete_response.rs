use serde::Serialize;
use uuid::Uuid;

/// Response confirming which entity a delete removed.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub deleted_id: Uuid,
}
