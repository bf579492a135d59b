use super::{JobAction, JobCard};
use crate::model::Job;
use leptos::{either::Either, prelude::*};

#[derive(Clone, Debug, Copy)]
pub enum JobListAction {
    Remove(Callback<String>),
    ReadOnly,
}

#[component]
pub fn JobList(
    #[prop(into)] jobs: Signal<Option<Vec<Job>>>,
    action: JobListAction,
) -> impl IntoView {
    view! {
        <div class="job-list">
            {move || {
                if jobs.with(|jobs| jobs.is_none()) {
                    let mut vec = Vec::new();
                    for _ in 0..3 {
                        vec.push(view! { <JobCard job=None action=JobAction::View /> });
                    }
                    Either::Left(vec.into_view())
                } else {
                    Either::Right(())
                }
            }}
            {move || {
                if let Some(jobs) = jobs.get() {
                    if jobs.is_empty() {
                        return Either::Left(view! { <div class="no-jobs">"No jobs here yet"</div> });
                    }
                }
                Either::Right(())
            }}
            <For
                each=move || jobs.get().unwrap_or_default()
                key=|job| job.id.clone()
                children=move |job| {
                    let action = match action {
                        JobListAction::Remove(cb) => JobAction::Remove(cb),
                        JobListAction::ReadOnly => JobAction::View,
                    };
                    view! { <JobCard job=Some(job) action=action /> }
                }
            />
        </div>
    }
}
