use crate::app::shell;
use crate::model::AppState;
use axum::{
    body::Body,
    extract::State,
    response::{IntoResponse, Response as AxumResponse},
};
use http::{Request, Response, StatusCode, Uri};
use tower::ServiceExt;
use tower_http::services::ServeDir;

pub async fn file_and_error_handler(
    uri: Uri,
    State(state): State<AppState>,
    req: Request<Body>,
) -> AxumResponse {
    let options = state.leptos_options.clone();
    let root = options.site_root.clone();
    let res = get_static_file(uri.clone(), &root).await;

    match res {
        Ok(res) if res.status() == StatusCode::OK => res.into_response(),
        Ok(_) => {
            let handler = leptos_axum::render_app_to_stream({
                let options = options.clone();
                move || shell(options.clone())
            });
            handler(req).await.into_response()
        }
        Err((status, msg)) => (status, msg).into_response(),
    }
}

async fn get_static_file(
    uri: Uri,
    root: &str,
) -> Result<Response<axum::body::Body>, (StatusCode, String)> {
    let req = Request::builder()
        .uri(uri.clone())
        .body(Body::empty())
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("error building request: {e}"),
            )
        })?;
    // This path is relative to the cargo root
    match ServeDir::new(root).oneshot(req).await {
        Ok(res) => Ok(res.into_response()),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("error serving files: {e}"),
        )),
    }
}
