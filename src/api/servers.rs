//! Wrappers for the `/servers` resource.

use super::{ApiClient, StatusMessage};
use crate::model::{Error, Job, Server};
use http::Method;
use serde_json::Value;

/// Query filters understood by `GET /servers`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerFilter {
    pub status: Option<String>,
    pub cpu: Option<String>,
    pub gpu: Option<String>,
    /// Minimum RAM in gigabytes.
    pub ram: Option<i32>,
}

impl ServerFilter {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = &self.status {
            pairs.push(("status", status.clone()));
        }
        if let Some(cpu) = &self.cpu {
            pairs.push(("cpu", cpu.clone()));
        }
        if let Some(gpu) = &self.gpu {
            pairs.push(("gpu", gpu.clone()));
        }
        if let Some(ram) = self.ram {
            pairs.push(("ram", ram.to_string()));
        }
        pairs
    }
}

pub async fn list_servers(api: &ApiClient, filter: &ServerFilter) -> Result<Vec<Server>, Error> {
    let mut url = api.endpoint(["servers"]);
    let pairs = filter.query_pairs();
    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(pairs);
    }
    let servers: Option<Vec<Server>> = api.get_json(url).await?;
    Ok(servers.unwrap_or_default())
}

pub async fn get_server_by_id(api: &ApiClient, id: &str) -> Result<Server, Error> {
    api.get_json(api.endpoint(["servers", id])).await
}

pub async fn create_server(api: &ApiClient, server: &Server) -> Result<Server, Error> {
    api.send_json(Method::POST, api.endpoint(["servers"]), server)
        .await
}

pub async fn update_server(api: &ApiClient, id: &str, server: &Server) -> Result<Server, Error> {
    api.send_json(Method::PUT, api.endpoint(["servers", id]), server)
        .await
}

/// Partial update; `fields` is whatever subset of the document should change.
pub async fn patch_server(api: &ApiClient, id: &str, fields: &Value) -> Result<Server, Error> {
    api.send_json(Method::PATCH, api.endpoint(["servers", id]), fields)
        .await
}

pub async fn delete_server(api: &ApiClient, id: &str) -> Result<(), Error> {
    api.delete(api.endpoint(["servers", id])).await
}

pub async fn get_server_current_jobs(api: &ApiClient, id: &str) -> Result<Vec<Job>, Error> {
    let jobs: Option<Vec<Job>> = api
        .get_json(api.endpoint(["servers", id, "currentJobs"]))
        .await?;
    Ok(jobs.unwrap_or_default())
}

pub async fn get_server_completed_jobs(api: &ApiClient, id: &str) -> Result<Vec<Job>, Error> {
    let jobs: Option<Vec<Job>> = api
        .get_json(api.endpoint(["servers", id, "completedJobs"]))
        .await?;
    Ok(jobs.unwrap_or_default())
}

/// Hands a queued job to a server. The body goes through untouched.
pub async fn add_job_to_server(
    api: &ApiClient,
    server_id: &str,
    job_id: &str,
    job: &Value,
) -> Result<StatusMessage, Error> {
    api.send_json(
        Method::POST,
        api.endpoint(["servers", server_id, "jobs", job_id]),
        job,
    )
    .await
}
