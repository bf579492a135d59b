use crate::api::ApiClient;
use crate::model::types::Error;
use axum::extract::FromRef;
use leptos::prelude::LeptosOptions;

#[derive(FromRef, Clone, Debug)]
pub struct AppState {
    pub api: ApiClient,
    pub leptos_options: LeptosOptions,
}

impl AppState {
    pub fn new(leptos_options: LeptosOptions) -> Result<Self, Error> {
        if dotenvy::dotenv().is_err() {
            tracing::warn!("didn't find env file");
        }
        let api = match std::env::var("SCRIBE_API_URL") {
            Ok(base) => ApiClient::new(&base)?,
            Err(_) => ApiClient::from_env(),
        };
        tracing::info!("backend base url: {}", api.base());

        Ok(Self { api, leptos_options })
    }
}
