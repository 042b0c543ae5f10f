use crate::CommunityId;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A community the current user belongs to.
///
/// The `communities` endpoint returns these in server order; the frontend
/// renders the sequence as-is without sorting or merging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Community {
    pub id: CommunityId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
