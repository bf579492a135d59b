use crate::model::Job;
use icondata::IoClose;
use leptos::{either::Either, logging::log, prelude::*};

#[derive(Clone, Debug, Copy)]
pub enum JobAction {
    Remove(Callback<String>),
    View,
}

impl JobAction {
    pub fn is_remove(&self) -> bool {
        matches!(self, JobAction::Remove(_))
    }
}

#[component]
pub fn JobCard(#[prop(optional_no_strip)] job: Option<Job>, action: JobAction) -> impl IntoView {
    let Some(job) = job else {
        return Either::Right(view! { <div class="job skeleton"></div> });
    };

    let job_id = job.id.clone();
    let on_click = move |_| {
        if let JobAction::Remove(remove) = action {
            log!("removing job {}", job_id);
            remove.run(job_id.clone());
        }
    };

    Either::Left(view! {
        <div
            class="job"
            class:remove=action.is_remove()
            title=job.description.clone()
            on:click=on_click
        >
            {action
                .is_remove()
                .then(|| {
                    view! {
                        <svg class="remove" viewBox=IoClose.view_box inner_html=IoClose.data></svg>
                    }
                })}
            <div class="info">
                <div class="title">{job.title.clone()}</div>
                <div class="meta">
                    {format!("{} ({})", job.source_language, job.file_format)}
                </div>
                <div class="status">
                    {job.status.clone()}
                    {format!(
                        ", expected by {}",
                        job.estimated_finish_datetime.format("%Y-%m-%d %H:%M"),
                    )}
                </div>
            </div>
        </div>
    })
}
