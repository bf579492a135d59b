use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::null_as_default;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct User {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub permissions: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub payments: Vec<Payment>,
    /// Ids of the jobs this user owns.
    #[serde(default, deserialize_with = "null_as_default")]
    pub jobs: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Payment {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Kept as a string, the backend never does arithmetic on it.
    pub price: String,
    pub payment_method: String,
    pub payment_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub job_id: String,
}
