use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};

/// Id type wrapper helps ensure community ids don't get mixed up with
/// other uuids. The frontend treats the id as opaque.
#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CommunityId(pub Uuid);
