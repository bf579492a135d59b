use crate::model::Session;
use icondata::AiUserOutlined;
use leptos::{either::Either, prelude::*};
use leptos_router::{NavigateOptions, hooks::use_navigate};

fn go(to: &'static str) -> impl Fn(leptos::ev::MouseEvent) + Copy {
    move |_| {
        let navigate = use_navigate();
        navigate(to, NavigateOptions::default());
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    view! {
        <nav class="nav-bar">
            <button class="link" on:click=go("/")>
                "Home"
            </button>
            <button class="link" on:click=go("/about")>
                "About"
            </button>
            {move || {
                if session.with(|session| session.authenticated) {
                    Either::Left(
                        view! {
                            <button class="link account" on:click=go("/user-panel")>
                                <svg
                                    class="icon"
                                    viewBox=AiUserOutlined.view_box
                                    inner_html=AiUserOutlined.data
                                ></svg>
                                {move || {
                                    session
                                        .with(|session| {
                                            session
                                                .user
                                                .as_ref()
                                                .map(|user| user.username.clone())
                                                .unwrap_or_default()
                                        })
                                }}
                            </button>
                        },
                    )
                } else {
                    Either::Right(
                        view! {
                            <button class="link" on:click=go("/register")>
                                "Register"
                            </button>
                            <button class="link" on:click=go("/login")>
                                "Login"
                            </button>
                        },
                    )
                }
            }}
        </nav>
    }
}
