use crate::model::Payment;
use icondata::IoClose;
use leptos::{either::Either, prelude::*};

#[component]
pub fn PaymentsList(
    #[prop(into)] payments: Signal<Vec<Payment>>,
    remove: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="payments">
            {move || {
                if payments.with(Vec::is_empty) {
                    Either::Left(view! { <div class="no-payments">"No payments recorded"</div> })
                } else {
                    Either::Right(())
                }
            }}
            <For
                each=move || payments.get()
                key=|payment| payment.id.clone()
                children=move |payment| {
                    let payment_id = payment.id.clone();
                    view! {
                        <div class="payment" title=format!("for job {}", payment.job_id)>
                            <span class="price">{payment.price.clone()}</span>
                            <span class="method">{payment.payment_method.clone()}</span>
                            <span class="status">{payment.payment_status.clone()}</span>
                            <button class="remove" on:click=move |_| remove.run(payment_id.clone())>
                                <svg viewBox=IoClose.view_box inner_html=IoClose.data></svg>
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
