//! Payload types crossing the REST client boundary.
//!
//! These mirror the client's JSON wire shapes (camelCase field names).
//! The state layer never inspects them; they are stored as-is in the
//! per-operation slices and handed back to the UI.

mod error;

pub use error::RestClientError;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw output of an info command: request string to response string.
pub type InfoMap = HashMap<String, String>;

/// Generic acknowledgement for write-style operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleResponse {
    pub message: String,
}

impl SimpleResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A stored record: bin values plus server-side metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(default)]
    pub bins: HashMap<String, Value>,
    pub generation: u32,
    pub ttl: i32,
}

/// One entry of a batch-read result. `record` is absent when the key
/// was not found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRead {
    pub record: Option<Record>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Privilege {
    pub code: String,
    pub namespace: String,
    pub set: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub name: String,
    pub privileges: Vec<Privilege>,
}

/// Metadata describing one secondary index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexMetadata {
    pub name: String,
    pub namespace: String,
    pub set: String,
    pub bin: String,
    pub index_type: String,
}

/// Cluster topology snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterInfo {
    pub node_names: Vec<String>,
    pub namespaces: Vec<String>,
}
