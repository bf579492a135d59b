use crate::components::Loading;
use crate::model::Error;
use leptos::{either::EitherOf3, logging::error, prelude::*, task::spawn_local};

/// The about copy ships as a site asset and is pulled in the first time the
/// route is visited instead of riding along in the bundle.
async fn fetch_about(origin: &str) -> Result<String, Error> {
    Ok(reqwest::get(format!("{origin}/about.md")).await?.text().await?)
}

#[derive(Debug, Clone)]
enum State {
    Loading,
    Loaded(String),
    Error(String),
}

#[component]
pub fn AboutPage() -> impl IntoView {
    let (state, set_state) = signal(State::Loading);

    Effect::new(move |_| {
        let origin = match web_sys::window().and_then(|window| window.location().origin().ok()) {
            Some(origin) => origin,
            None => {
                error!("window not found");
                return;
            }
        };
        spawn_local(async move {
            match fetch_about(&origin).await {
                Ok(content) => set_state.set(State::Loaded(content)),
                Err(e) => set_state.set(State::Error(format!("error loading the about text: {e}"))),
            }
        });
    });

    view! {
        <div class="about-page">
            {move || {
                match state.get() {
                    State::Loading => EitherOf3::A(view! { <Loading /> }),
                    State::Loaded(content) => {
                        EitherOf3::B(view! { <pre class="about-text">{content}</pre> })
                    }
                    State::Error(err) => EitherOf3::C(view! { <p class="error">{err}</p> }),
                }
            }}
        </div>
    }
}
