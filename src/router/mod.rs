pub mod fileserv;
pub use fileserv::*;

use crate::app::shell;
use crate::model::AppState;
use axum::Router;
use leptos::prelude::*;
use leptos_axum::{AxumRouteListing, LeptosRoutes};

pub fn new(leptos_routes: Vec<AxumRouteListing>, app_state: AppState) -> Router {
    Router::new()
        .leptos_routes_with_context(
            &app_state,
            leptos_routes,
            {
                let api = app_state.api.clone();
                move || provide_context(api.clone())
            },
            {
                let leptos_options = app_state.leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(file_and_error_handler)
        .with_state(app_state)
}
