use serde::{Deserialize, Serialize};

/// Reply to `GET /identity/`.
///
/// The node answers with a bare string body; `data` carries it as the
/// HTTP layer handed it over. Nothing else of the reply is interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityResponse {
    pub data: String,
}

impl IdentityResponse {
    /// Whether the reply identifies the server as a grid node.
    pub fn is_grid_node(&self) -> bool {
        self.data == crate::constants::GRID_IDENTITY
    }
}
