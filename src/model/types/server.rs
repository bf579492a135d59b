use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A transcription worker machine as the backend reports it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Server {
    /// Hex object id; empty until the backend has assigned one.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub hostname: String,
    pub address: String,
    pub description: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_jobs: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed_jobs: Vec<String>,
    pub cpu_info: String,
    pub gpu_info: String,
    pub ram_size_gb: i32,
}
