use crate::api::{self, ApiClient};
use crate::components::{Loading, Modal};
use crate::model::UserDraft;
use gloo::storage::{LocalStorage, Storage};
use leptos::{either::EitherOf3, logging::error, prelude::*, task::spawn_local};
use leptos_router::{NavigateOptions, hooks::use_navigate};

#[derive(Debug, Clone)]
enum State {
    None,
    Loading,
    Error(String),
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let draft = RwSignal::new(UserDraft::default());
    let (state, set_state) = signal(State::None);

    let on_click = move |_| {
        set_state.set(State::Loading);
        let api = api.clone();
        spawn_local(async move {
            let payload = draft.get_untracked().into_user();
            match api::users::create_user(&api, &payload).await {
                Ok(user) => {
                    if let Err(e) = LocalStorage::set("username", user.username.clone()) {
                        error!("error remembering username: {:?}", e);
                    }
                    draft.update(UserDraft::clear);
                    set_state.set(State::None);
                    let navigate = use_navigate();
                    navigate("/login", NavigateOptions::default());
                }
                Err(e) => set_state.set(State::Error(format!("error creating user: {e}"))),
            }
        });
    };

    view! {
        <div class="register-page">
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

            <h2>"Create an account"</h2>
            <div class="input-with-label">
                <label for="register-username">"Username"</label>
                <input
                    type="text"
                    id="register-username"
                    class="text-input"
                    prop:value=move || draft.with(|draft| draft.username.clone())
                    on:input=move |ev| {
                        draft.update(|draft| draft.username = event_target_value(&ev))
                    }
                />
            </div>
            <div class="input-with-label">
                <label for="register-email">"Email"</label>
                <input
                    type="email"
                    id="register-email"
                    class="text-input"
                    prop:value=move || draft.with(|draft| draft.email.clone())
                    on:input=move |ev| draft.update(|draft| draft.email = event_target_value(&ev))
                />
            </div>
            <div class="input-with-label">
                <label for="register-password">"Password"</label>
                <input
                    type="password"
                    id="register-password"
                    class="text-input"
                    prop:value=move || draft.with(|draft| draft.password_hash.clone())
                    on:input=move |ev| {
                        draft.update(|draft| draft.password_hash = event_target_value(&ev))
                    }
                />
            </div>
            <button class="button" on:click=on_click>
                "Register"
            </button>
        </div>
    }
}
