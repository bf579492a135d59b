use crate::api::{self, ApiClient};
use crate::components::{Modal, PaymentsList};
use crate::model::{Payment, Session};
use leptos::{logging::error, prelude::*, task::spawn_local};
use leptos_router::{NavigateOptions, hooks::use_navigate};

#[component]
pub fn UserPanelPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<RwSignal<Session>>();

    // Nothing to show to anonymous visitors.
    Effect::new(move |_| {
        if !session.with(|session| session.authenticated) {
            let navigate = use_navigate();
            navigate("/", NavigateOptions::default());
        }
    });

    let (price, set_price) = signal(String::new());
    let (method, set_method) = signal(String::new());
    let (error_msg, set_error_msg) = signal(None::<String>);

    // Payment endpoints answer with the payment alone, so the session copy
    // of the user is re-read afterwards.
    let refresh = {
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_local(async move {
                let Some(id) = session.with_untracked(|s| s.user_id().map(str::to_owned)) else {
                    return;
                };
                match api::users::get_user_by_id(&api, &id).await {
                    Ok(user) => {
                        session.update(|session| {
                            if session.authenticated {
                                session.user = Some(user);
                            }
                        });
                    }
                    Err(e) => error!("error refreshing user: {e}"),
                }
            });
        }
    };

    let on_add_payment = {
        let api = api.clone();
        let refresh = refresh.clone();
        move |_| {
            let api = api.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                let Some(id) = session.with_untracked(|s| s.user_id().map(str::to_owned)) else {
                    return;
                };
                let payment = Payment {
                    price: price.get_untracked(),
                    payment_method: method.get_untracked(),
                    payment_status: String::from("pending"),
                    ..Payment::default()
                };
                match api::users::add_payment(&api, &id, &payment).await {
                    Ok(_) => {
                        set_price.set(String::new());
                        set_method.set(String::new());
                        refresh();
                    }
                    Err(e) => set_error_msg.set(Some(format!("error adding payment: {e}"))),
                }
            });
        }
    };

    let on_remove_payment = Callback::new({
        let api = api.clone();
        let refresh = refresh.clone();
        move |payment_id: String| {
            let api = api.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                let Some(id) = session.with_untracked(|s| s.user_id().map(str::to_owned)) else {
                    return;
                };
                match api::users::delete_payment(&api, &id, &payment_id).await {
                    Ok(()) => refresh(),
                    Err(e) => set_error_msg.set(Some(format!("error removing payment: {e}"))),
                }
            });
        }
    });

    let on_logout = move |_| {
        session.update(Session::logout);
        let navigate = use_navigate();
        navigate("/", NavigateOptions::default());
    };

    let go_jobs = move |_| {
        let Some(id) = session.with_untracked(|s| s.user_id().map(str::to_owned)) else {
            return;
        };
        let navigate = use_navigate();
        navigate(&format!("/user/{id}/jobs"), NavigateOptions::default());
    };

    view! {
        <div class="user-panel-page">
            <Modal
                visible=Signal::derive(move || error_msg.get().is_some())
                on_close=Callback::new(move |_| set_error_msg.set(None))
            >
                {move || error_msg.get().map(|err| view! { <p>{err}</p> })}
            </Modal>

            <div class="profile">
                <h2>
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
                </h2>
                <p class="email">
                    {move || {
                        session
                            .with(|session| {
                                session
                                    .user
                                    .as_ref()
                                    .map(|user| user.email.clone())
                                    .unwrap_or_default()
                            })
                    }}
                </p>
                <p class="member-since">
                    {move || {
                        session
                            .with(|session| {
                                session
                                    .user
                                    .as_ref()
                                    .map(|user| {
                                        format!(
                                            "member since {}",
                                            user.created_at.format("%Y-%m-%d"),
                                        )
                                    })
                                    .unwrap_or_default()
                            })
                    }}
                </p>
                <button class="button" on:click=go_jobs>
                    "My jobs"
                </button>
                <button class="button logout" on:click=on_logout>
                    "Log out"
                </button>
            </div>

            <h2>"Payments"</h2>
            <PaymentsList
                payments=Signal::derive(move || {
                    session
                        .with(|session| {
                            session
                                .user
                                .as_ref()
                                .map(|user| user.payments.clone())
                                .unwrap_or_default()
                        })
                })
                remove=on_remove_payment
            />

            <div class="add-payment">
                <div class="input-with-label">
                    <label for="payment-price">"Amount"</label>
                    <input
                        type="text"
                        id="payment-price"
                        class="text-input"
                        placeholder="ex. 12.50"
                        prop:value=price
                        on:input=move |ev| set_price.set(event_target_value(&ev))
                    />
                </div>
                <div class="input-with-label">
                    <label for="payment-method">"Method"</label>
                    <input
                        type="text"
                        id="payment-method"
                        class="text-input"
                        placeholder="ex. card"
                        prop:value=method
                        on:input=move |ev| set_method.set(event_target_value(&ev))
                    />
                </div>
                <button class="button" on:click=on_add_payment>
                    "Add payment"
                </button>
            </div>
        </div>
    }
}
