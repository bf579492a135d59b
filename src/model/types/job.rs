use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One transcription run, owned by a user and assigned to a server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Job {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub status: String,
    pub source_language: String,
    pub file_format: String,
    pub description: String,
    pub input_file: String,
    pub output_file: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub estimated_finish_datetime: DateTime<Utc>,
    pub host_id: String,
}

/// Draft of a job submission. This one goes over the wire as a multipart
/// form, not JSON, because it carries the recording itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobForm {
    pub title: String,
    pub description: String,
    pub source_language: String,
    pub file_format: String,
    pub file_name: String,
    pub file_bytes: Vec<u8>,
}
