use leptos::prelude::*;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading-indicator">
            <p>"Loading..."</p>
        </div>
    }
}
