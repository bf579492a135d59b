//! Wrappers for the `/users` resource and its jobs/payments sub-resources.

use super::ApiClient;
use crate::model::{Error, Job, JobForm, Payment, User};
use chrono::{DateTime, Utc};
use http::Method;
use reqwest::multipart::{Form, Part};
use serde_json::Value;

/// Query filters understood by `GET /users`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    pub username: Option<String>,
    pub email: Option<String>,
    pub status: Option<String>,
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl UserFilter {
    pub fn by_username(username: &str) -> Self {
        Self {
            username: Some(username.to_owned()),
            ..Self::default()
        }
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(username) = &self.username {
            pairs.push(("username", username.clone()));
        }
        if let Some(email) = &self.email {
            pairs.push(("email", email.clone()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status", status.clone()));
        }
        if let Some(created_after) = &self.created_after {
            pairs.push(("created_after", created_after.to_rfc3339()));
        }
        if let Some(created_before) = &self.created_before {
            pairs.push(("created_before", created_before.to_rfc3339()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            pairs.push(("page_size", page_size.to_string()));
        }
        pairs
    }
}

pub async fn list_users(api: &ApiClient, filter: &UserFilter) -> Result<Vec<User>, Error> {
    let mut url = api.endpoint(["users"]);
    let pairs = filter.query_pairs();
    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(pairs);
    }
    let users: Option<Vec<User>> = api.get_json(url).await?;
    Ok(users.unwrap_or_default())
}

pub async fn get_user_by_id(api: &ApiClient, id: &str) -> Result<User, Error> {
    api.get_json(api.endpoint(["users", id])).await
}

pub async fn create_user(api: &ApiClient, user: &User) -> Result<User, Error> {
    api.send_json(Method::POST, api.endpoint(["users"]), user).await
}

pub async fn update_user(api: &ApiClient, id: &str, user: &User) -> Result<User, Error> {
    api.send_json(Method::PUT, api.endpoint(["users", id]), user)
        .await
}

/// Partial update; `fields` is whatever subset of the document should change.
pub async fn patch_user(api: &ApiClient, id: &str, fields: &Value) -> Result<User, Error> {
    api.send_json(Method::PATCH, api.endpoint(["users", id]), fields)
        .await
}

pub async fn delete_user(api: &ApiClient, id: &str) -> Result<(), Error> {
    api.delete(api.endpoint(["users", id])).await
}

pub async fn get_user_jobs(api: &ApiClient, id: &str) -> Result<Vec<Job>, Error> {
    let jobs: Option<Vec<Job>> = api.get_json(api.endpoint(["users", id, "jobs"])).await?;
    Ok(jobs.unwrap_or_default())
}

/// Submits a new job with its recording as one multipart form.
pub async fn add_user_job(api: &ApiClient, user_id: &str, form: JobForm) -> Result<Job, Error> {
    let multipart = Form::new()
        .text("title", form.title)
        .text("description", form.description)
        .text("source_language", form.source_language)
        .text("file_format", form.file_format)
        .part(
            "input_file",
            Part::bytes(form.file_bytes).file_name(form.file_name),
        );
    api.post_form(api.endpoint(["users", user_id, "jobs"]), multipart)
        .await
}

pub async fn delete_user_job(api: &ApiClient, id: &str, job_id: &str) -> Result<(), Error> {
    api.delete(api.endpoint(["users", id, "jobs", job_id])).await
}

pub async fn add_payment(api: &ApiClient, id: &str, payment: &Payment) -> Result<Payment, Error> {
    api.send_json(Method::POST, api.endpoint(["users", id, "payments"]), payment)
        .await
}

pub async fn delete_payment(api: &ApiClient, id: &str, payment_id: &str) -> Result<(), Error> {
    api.delete(api.endpoint(["users", id, "payments", payment_id]))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn by_username_sets_only_that_field() {
        let filter = UserFilter::by_username("ada");
        assert_eq!(
            filter.query_pairs(),
            vec![("username", "ada".to_string())]
        );
    }

    #[test]
    fn date_bounds_are_encoded_as_rfc3339() {
        let filter = UserFilter {
            created_after: Some(Utc.with_ymd_and_hms(2024, 11, 7, 10, 0, 0).unwrap()),
            page: Some(2),
            page_size: Some(25),
            ..UserFilter::default()
        };
        assert_eq!(
            filter.query_pairs(),
            vec![
                ("created_after", "2024-11-07T10:00:00+00:00".to_string()),
                ("page", "2".to_string()),
                ("page_size", "25".to_string()),
            ]
        );
    }
}
