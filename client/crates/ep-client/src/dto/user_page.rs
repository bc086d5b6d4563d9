use crate::User;

use serde::{Deserialize, Serialize};

/// One server-paginated slice of the user collection (`GET /users?page=N`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPage {
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub total: u32,
    pub total_pages: u32,
    pub data: Vec<User>,
}

impl UserPage {
    /// Page count with an empty collection still reported as one page
    pub fn page_count(&self) -> u32 {
        self.total_pages.max(1)
    }
}
