use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Field of a stored document that holds the serialized profile.
pub const DATA_FIELD: &str = "data";

/// Field set persisted for one key of a store collection.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Globally unique user identifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ProfileId(pub Uuid);

impl ProfileId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProfileId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ProfileId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl From<Uuid> for ProfileId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// A user's profile record.
///
/// `data` is opaque to the resolution layer. Serialization is symmetric:
/// `Profile::deserialize(&p.serialize()?)` yields `p` again.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub uuid: ProfileId,
    pub data: serde_json::Value,
}

impl Profile {
    pub fn new(uuid: ProfileId, data: serde_json::Value) -> Self {
        Self { uuid, data }
    }

    pub fn id(&self) -> ProfileId {
        self.uuid
    }

    /// Transport/storage form of the profile.
    pub fn serialize(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn deserialize(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
