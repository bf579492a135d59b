use crate::api::ApiClient;
use crate::components::NavBar;
use crate::model::Session;
use crate::pages;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    *,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <link rel="stylesheet" href="/pkg/scribe_hub.css" />

                <title>"Scribe Hub"</title>
                <meta
                    name="description"
                    content="Client for the transcription platform: register, submit recordings as jobs, follow the workers crunching them, settle payments."
                />

                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // On the server the router plumbing provides the client; in the browser
    // it is built from whatever was baked in at compile time.
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::from_env);
    provide_context(api);
    let session = RwSignal::new(Session::default());
    provide_context(session);

    view! {
        <Router>
            <NavBar />
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=pages::HomePage />
                    <Route path=path!("/about") view=pages::AboutPage />
                    <Route path=path!("/register") view=pages::RegisterPage />
                    <Route path=path!("/login") view=pages::LoginPage />
                    <Route path=path!("/user-panel") view=pages::UserPanelPage />
                    <Route path=path!("/user/:id/jobs") view=pages::UserJobsPage />
                </Routes>
            </main>
        </Router>
    }
}
