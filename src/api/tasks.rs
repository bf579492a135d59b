//! Wrappers for the `/tasks` resource.

use super::ApiClient;
use crate::model::{Error, Task};
use http::Method;

pub async fn list_tasks(api: &ApiClient) -> Result<Vec<Task>, Error> {
    let tasks: Option<Vec<Task>> = api.get_json(api.endpoint(["tasks"])).await?;
    Ok(tasks.unwrap_or_default())
}

pub async fn get_task_by_id(api: &ApiClient, id: &str) -> Result<Task, Error> {
    api.get_json(api.endpoint(["tasks", id])).await
}

pub async fn create_task(api: &ApiClient, task: &Task) -> Result<Task, Error> {
    api.send_json(Method::POST, api.endpoint(["tasks"]), task).await
}

pub async fn update_task(api: &ApiClient, id: &str, task: &Task) -> Result<Task, Error> {
    api.send_json(Method::PUT, api.endpoint(["tasks", id]), task)
        .await
}

pub async fn delete_task(api: &ApiClient, id: &str) -> Result<(), Error> {
    api.delete(api.endpoint(["tasks", id])).await
}
