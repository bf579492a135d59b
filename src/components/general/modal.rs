use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] visible: Signal<bool>,
    #[prop(optional)] on_close: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <dialog class="modal" prop:open=visible>
            <div class="modal-content">
                {children()}
                {on_close.map(|on_close| {
                    view! {
                        <button class="button" on:click=move |_| {
                            on_close.run(());
                        }>"Close"</button>
                    }
                })}
            </div>
        </dialog>
    }
}
