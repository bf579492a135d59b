#![cfg(feature = "ssr")]

//! Drives every wrapper against a local recording backend and checks the
//! method, path, and body encoding each one puts on the wire.

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, Uri};
use axum::response::IntoResponse;
use scribe_hub::api::{self, ApiClient, servers::ServerFilter, users::UserFilter};
use scribe_hub::model::{Error, Job, JobForm, Payment, Server, Task, User};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
struct Recorded {
    method: String,
    path: String,
    query: Option<String>,
    content_type: Option<String>,
    body: Vec<u8>,
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<Recorded>>>,
    response: Value,
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    state.requests.lock().unwrap().push(Recorded {
        method: method.to_string(),
        path: uri.path().to_owned(),
        query: uri.query().map(str::to_owned),
        content_type: headers
            .get("content-type")
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned),
        body: body.to_vec(),
    });
    axum::Json(state.response.clone())
}

type Requests = Arc<Mutex<Vec<Recorded>>>;

async fn spawn_mock(response: Value) -> (Requests, ApiClient) {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        requests: Arc::clone(&requests),
        response,
    };
    let app = Router::new().fallback(record).with_state(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    let api = ApiClient::new(&format!("http://{addr}")).unwrap();
    (requests, api)
}

/// Like [`spawn_mock`] but answering with a body that is not JSON.
async fn spawn_text_mock() -> ApiClient {
    let app = Router::new().fallback(|| async { "certainly not json" });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    ApiClient::new(&format!("http://{addr}")).unwrap()
}

fn sample_server() -> Server {
    Server {
        id: "5".to_string(),
        hostname: "worker-1".to_string(),
        address: "10.0.0.4".to_string(),
        status: "idle".to_string(),
        cpu_info: "EPYC 7713".to_string(),
        gpu_info: "A100".to_string(),
        ram_size_gb: 256,
        ..Server::default()
    }
}

fn sample_user() -> User {
    User {
        id: "2".to_string(),
        username: "ada".to_string(),
        email: "ada@example.com".to_string(),
        ..User::default()
    }
}

fn sample_job() -> Job {
    Job {
        id: "j1".to_string(),
        user_id: "7".to_string(),
        title: "Standup recording".to_string(),
        status: "pending".to_string(),
        source_language: "en".to_string(),
        file_format: "wav".to_string(),
        ..Job::default()
    }
}

fn sample_task() -> Task {
    Task {
        id: "9".to_string(),
        title: "Re-run failed exports".to_string(),
        status: "open".to_string(),
        ..Task::default()
    }
}

#[tokio::test]
async fn get_server_by_id_issues_one_get_to_the_expected_path() {
    let (requests, api) = spawn_mock(serde_json::to_value(sample_server()).unwrap()).await;

    let server = api::servers::get_server_by_id(&api, "5").await.unwrap();
    assert_eq!(server, sample_server());

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/servers/5");
    assert_eq!(requests[0].query, None);
}

#[tokio::test]
async fn list_servers_is_a_bare_get_without_filters() {
    let (requests, api) = spawn_mock(json!([])).await;

    let servers = api::servers::list_servers(&api, &ServerFilter::default())
        .await
        .unwrap();
    assert!(servers.is_empty());

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/servers");
    assert_eq!(requests[0].query, None);
}

#[tokio::test]
async fn list_servers_encodes_filters_as_query_params() {
    let (requests, api) = spawn_mock(json!([])).await;

    let filter = ServerFilter {
        status: Some("idle".to_string()),
        ram: Some(32),
        ..ServerFilter::default()
    };
    api::servers::list_servers(&api, &filter).await.unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(requests[0].path, "/servers");
    assert_eq!(requests[0].query.as_deref(), Some("status=idle&ram=32"));
}

#[tokio::test]
async fn create_server_posts_json_with_the_content_type_header() {
    let (requests, api) = spawn_mock(serde_json::to_value(sample_server()).unwrap()).await;

    let payload = Server {
        id: String::new(),
        ..sample_server()
    };
    api::servers::create_server(&api, &payload).await.unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/servers");
    assert!(
        requests[0]
            .content_type
            .as_deref()
            .unwrap_or_default()
            .starts_with("application/json")
    );
    let sent: Server = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(sent, payload);
}

#[tokio::test]
async fn update_server_puts_to_the_id_path() {
    let (requests, api) = spawn_mock(serde_json::to_value(sample_server()).unwrap()).await;

    api::servers::update_server(&api, "5", &sample_server())
        .await
        .unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].path, "/servers/5");
}

#[tokio::test]
async fn patch_server_sends_only_the_partial_document() {
    let (requests, api) = spawn_mock(serde_json::to_value(sample_server()).unwrap()).await;

    let fields = json!({"status": "maintenance"});
    api::servers::patch_server(&api, "5", &fields).await.unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(requests[0].method, "PATCH");
    assert_eq!(requests[0].path, "/servers/5");
    let sent: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(sent, fields);
}

#[tokio::test]
async fn delete_server_hits_the_id_path() {
    let (requests, api) = spawn_mock(Value::Null).await;

    api::servers::delete_server(&api, "5").await.unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].path, "/servers/5");
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn server_job_listings_use_the_camel_case_sub_paths() {
    let (requests, api) = spawn_mock(json!([])).await;

    api::servers::get_server_current_jobs(&api, "5").await.unwrap();
    api::servers::get_server_completed_jobs(&api, "5")
        .await
        .unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].path, "/servers/5/currentJobs");
    assert_eq!(requests[1].path, "/servers/5/completedJobs");
}

#[tokio::test]
async fn add_job_to_server_posts_to_the_nested_path() {
    let (requests, api) =
        spawn_mock(json!({"message": "Job successfully added to server"})).await;

    let ack = api::servers::add_job_to_server(&api, "1", "2", &json!({}))
        .await
        .unwrap();
    assert_eq!(ack.message, "Job successfully added to server");

    let requests = requests.lock().unwrap();
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/servers/1/jobs/2");
}

#[tokio::test]
async fn task_crud_uses_the_expected_methods_and_paths() {
    let (requests, api) = spawn_mock(serde_json::to_value(sample_task()).unwrap()).await;

    api::tasks::get_task_by_id(&api, "9").await.unwrap();
    api::tasks::create_task(&api, &sample_task()).await.unwrap();
    api::tasks::update_task(&api, "9", &sample_task()).await.unwrap();
    api::tasks::delete_task(&api, "9").await.unwrap();

    let requests = requests.lock().unwrap();
    let seen: Vec<(&str, &str)> = requests
        .iter()
        .map(|r| (r.method.as_str(), r.path.as_str()))
        .collect();
    assert_eq!(
        seen,
        vec![
            ("GET", "/tasks/9"),
            ("POST", "/tasks"),
            ("PUT", "/tasks/9"),
            ("DELETE", "/tasks/9"),
        ]
    );
}

#[tokio::test]
async fn list_tasks_decodes_a_null_body_as_empty() {
    let (requests, api) = spawn_mock(Value::Null).await;

    let tasks = api::tasks::list_tasks(&api).await.unwrap();
    assert!(tasks.is_empty());

    let requests = requests.lock().unwrap();
    assert_eq!(requests[0].path, "/tasks");
}

#[tokio::test]
async fn list_users_passes_the_username_filter_through() {
    let (requests, api) = spawn_mock(serde_json::to_value(vec![sample_user()]).unwrap()).await;

    let users = api::users::list_users(&api, &UserFilter::by_username("ada"))
        .await
        .unwrap();
    assert_eq!(users, vec![sample_user()]);

    let requests = requests.lock().unwrap();
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/users");
    assert_eq!(requests[0].query.as_deref(), Some("username=ada"));
}

#[tokio::test]
async fn create_user_posts_json() {
    let (requests, api) = spawn_mock(serde_json::to_value(sample_user()).unwrap()).await;

    let payload = User {
        id: String::new(),
        ..sample_user()
    };
    api::users::create_user(&api, &payload).await.unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/users");
    assert!(
        requests[0]
            .content_type
            .as_deref()
            .unwrap_or_default()
            .starts_with("application/json")
    );
}

#[tokio::test]
async fn delete_user_hits_the_id_path() {
    let (requests, api) = spawn_mock(Value::Null).await;

    api::users::delete_user(&api, "3").await.unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].path, "/users/3");
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn patch_user_sends_only_the_partial_document() {
    let (requests, api) = spawn_mock(serde_json::to_value(sample_user()).unwrap()).await;

    let fields = json!({"email": "countess@example.com"});
    api::users::patch_user(&api, "4", &fields).await.unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(requests[0].method, "PATCH");
    assert_eq!(requests[0].path, "/users/4");
    let sent: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(sent, fields);
}

#[tokio::test]
async fn get_user_jobs_reads_the_nested_collection() {
    let (requests, api) = spawn_mock(json!([])).await;

    let jobs = api::users::get_user_jobs(&api, "7").await.unwrap();
    assert!(jobs.is_empty());

    let requests = requests.lock().unwrap();
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/users/7/jobs");
}

#[tokio::test]
async fn add_user_job_submits_a_multipart_form() {
    let (requests, api) = spawn_mock(serde_json::to_value(sample_job()).unwrap()).await;

    let form = JobForm {
        title: "Standup recording".to_string(),
        description: "Monday standup".to_string(),
        source_language: "en".to_string(),
        file_format: "wav".to_string(),
        file_name: "meeting.wav".to_string(),
        file_bytes: b"RIFFxxxxWAVE".to_vec(),
    };
    let job = api::users::add_user_job(&api, "7", form).await.unwrap();
    assert_eq!(job, sample_job());

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/users/7/jobs");
    assert!(
        requests[0]
            .content_type
            .as_deref()
            .unwrap_or_default()
            .starts_with("multipart/form-data")
    );
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"title\""));
    assert!(body.contains("Standup recording"));
    assert!(body.contains("name=\"input_file\""));
    assert!(body.contains("filename=\"meeting.wav\""));
}

#[tokio::test]
async fn delete_user_job_hits_the_nested_path() {
    let (requests, api) = spawn_mock(Value::Null).await;

    api::users::delete_user_job(&api, "7", "j1").await.unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].path, "/users/7/jobs/j1");
}

#[tokio::test]
async fn payment_endpoints_use_the_nested_paths() {
    let payment = Payment {
        id: "p1".to_string(),
        price: "12.50".to_string(),
        payment_method: "card".to_string(),
        payment_status: "pending".to_string(),
        ..Payment::default()
    };
    let (requests, api) = spawn_mock(serde_json::to_value(payment.clone()).unwrap()).await;

    let created = api::users::add_payment(&api, "2", &payment).await.unwrap();
    assert_eq!(created, payment);
    api::users::delete_payment(&api, "2", "p1").await.unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/users/2/payments");
    assert!(
        requests[0]
            .content_type
            .as_deref()
            .unwrap_or_default()
            .starts_with("application/json")
    );
    assert_eq!(requests[1].method, "DELETE");
    assert_eq!(requests[1].path, "/users/2/payments/p1");
}

#[tokio::test]
async fn a_body_that_is_not_json_surfaces_as_a_decode_error() {
    let api = spawn_text_mock().await;

    let err = api::tasks::get_task_by_id(&api, "9").await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn an_unreachable_backend_surfaces_as_a_transport_error() {
    // Nothing listens on this port; the bind is dropped right away.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = ApiClient::new(&format!("http://{addr}")).unwrap();
    let err = api::users::get_user_by_id(&api, "2").await.unwrap_err();
    assert!(matches!(err, Error::Http(_)));
}
