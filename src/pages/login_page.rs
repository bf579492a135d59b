use crate::api::{self, ApiClient, users::UserFilter};
use crate::components::{Loading, Modal};
use crate::model::Session;
use gloo::storage::{LocalStorage, Storage};
use leptos::{either::EitherOf3, prelude::*, task::spawn_local};
use leptos_router::{NavigateOptions, hooks::use_navigate};

#[derive(Debug, Clone)]
enum State {
    None,
    Loading,
    Error(String),
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<RwSignal<Session>>();
    let (username, set_username) = signal(String::new());
    let (state, set_state) = signal(State::None);

    // Prefill with whatever the register page remembered.
    Effect::new(move |_| {
        if let Ok(remembered) = LocalStorage::get::<String>("username") {
            set_username.set(remembered);
        }
    });

    let on_click = move |_| {
        set_state.set(State::Loading);
        let api = api.clone();
        spawn_local(async move {
            let wanted = username.get_untracked();
            let filter = UserFilter::by_username(&wanted);
            match api::users::list_users(&api, &filter).await {
                Ok(users) => {
                    match users.into_iter().find(|user| user.username == wanted) {
                        Some(user) => {
                            session.update(|session| session.login(user));
                            set_state.set(State::None);
                            let navigate = use_navigate();
                            navigate("/user-panel", NavigateOptions::default());
                        }
                        None => {
                            set_state
                                .set(State::Error(String::from("No account with that username")));
                        }
                    }
                }
                Err(e) => set_state.set(State::Error(format!("error signing in: {e}"))),
            }
        });
    };

    view! {
        <div class="login-page">
            <Modal
                visible=Signal::derive(move || {
                    matches!(state.get(), State::Loading | State::Error(_))
                })
                on_close=Callback::new(move |_| set_state.set(State::None))
            >
                {move || {
                    match state.get() {
                        State::Loading => EitherOf3::A(view! { <Loading /> }),
                        State::Error(err) => EitherOf3::B(view! { <p>{err}</p> }),
                        State::None => EitherOf3::C(()),
                    }
                }}
            </Modal>

            <h2>"Sign in"</h2>
            <div class="input-with-label">
                <label for="login-username">"Username"</label>
                <input
                    type="text"
                    id="login-username"
                    class="text-input"
                    prop:value=username
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                    class:glass-element-err=move || username.with(String::is_empty)
                />
            </div>
            <button class="button" on:click=on_click>
                "Sign in"
            </button>
        </div>
    }
}
