use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Plain CRUD resource; the backend attaches no behavior to it yet.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Task {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
