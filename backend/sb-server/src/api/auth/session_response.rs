use crate::UserDto;

use serde::Serialize;
use uuid::Uuid;

/// Successful sign-in: a bearer token and the resolved user.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub token: Uuid,
    pub user: UserDto,
}
