use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveCardRequest {
    /// Destination column; may be the card's current column
    pub new_column_id: String,
    /// Position within the destination after the card left its old slot.
    /// Negative values land at the front, oversized values at the end.
    pub new_index: i64,
}
