use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Health {
    pub status: String,
}

impl Health {
    pub fn ok() -> Self { Self { status: "ok".into() } }
}

/// Body returned by delete endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub status: String,
}

impl StatusMessage {
    pub fn deleted() -> Self { Self { status: "deleted".into() } }
}
