use crate::User;

use serde::Deserialize;

/// Envelope of `GET /users/:id`
#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    pub data: User,
}
