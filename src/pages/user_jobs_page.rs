use crate::api::{self, ApiClient};
use crate::components::{JobList, JobListAction, Loading, Modal};
use crate::model::{Job, JobForm};
use leptos::{
    either::EitherOf3,
    html,
    logging::{error, log, warn},
    prelude::*,
    task::spawn_local,
};
use leptos_router::{hooks::*, params::*, *};
use leptos_use::use_interval_fn;
use wasm_bindgen_futures::JsFuture;

#[derive(Debug, Clone)]
enum State {
    None,
    Loading,
    Error(String),
}

async fn read_selected_file(input: &web_sys::HtmlInputElement) -> Option<(String, Vec<u8>)> {
    let file = input.files()?.get(0)?;
    let buffer = JsFuture::from(file.array_buffer()).await.ok()?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Some((file.name(), bytes))
}

#[component]
pub fn UserJobsPage() -> impl IntoView {
    #[derive(PartialEq, Params)]
    struct UserJobsParams {
        id: Option<String>,
    }
    let params = use_params::<UserJobsParams>();
    let user_id = move || {
        params.with(|params| {
            params
                .as_ref()
                .map(|params| params.id.clone())
                .unwrap_or_else(|_| {
                    let navigate = use_navigate();
                    navigate("/", NavigateOptions::default());
                    warn!("No user id provided, redirecting to home page");
                    None
                })
        })
    };
    let user_id = Signal::derive(user_id);

    let api = expect_context::<ApiClient>();
    let (jobs, set_jobs) = signal(None::<Vec<Job>>);

    let fetch_jobs = {
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_local(async move {
                let Some(id) = user_id.get_untracked() else {
                    return;
                };
                match api::users::get_user_jobs(&api, &id).await {
                    Ok(list) => set_jobs.set(Some(list)),
                    Err(e) => error!("error fetching jobs: {e}"),
                }
            });
        }
    };

    Effect::new({
        let fetch_jobs = fetch_jobs.clone();
        move |_| {
            user_id.track();
            fetch_jobs();
        }
    });

    // The backend refreshes job statuses on every read, so a slow poll keeps
    // the list honest while a transcription runs.
    let _poll = use_interval_fn(
        {
            let fetch_jobs = fetch_jobs.clone();
            move || fetch_jobs()
        },
        5000,
    );

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (source_language, set_source_language) = signal(String::new());
    let (file_format, set_file_format) = signal(String::new());
    let input_ref: NodeRef<html::Input> = NodeRef::new();
    let (state, set_state) = signal(State::None);

    let on_submit = {
        let api = api.clone();
        let fetch_jobs = fetch_jobs.clone();
        move |_| {
            set_state.set(State::Loading);
            let api = api.clone();
            let fetch_jobs = fetch_jobs.clone();
            spawn_local(async move {
                let Some(id) = user_id.get_untracked() else {
                    return;
                };
                let input = match input_ref.get_untracked() {
                    Some(input) => input,
                    None => {
                        set_state.set(State::Error(String::from("file input not found")));
                        return;
                    }
                };
                let Some((file_name, file_bytes)) = read_selected_file(&input).await else {
                    set_state.set(State::Error(String::from("pick a recording first")));
                    return;
                };
                let form = JobForm {
                    title: title.get_untracked(),
                    description: description.get_untracked(),
                    source_language: source_language.get_untracked(),
                    file_format: file_format.get_untracked(),
                    file_name,
                    file_bytes,
                };
                match api::users::add_user_job(&api, &id, form).await {
                    Ok(job) => {
                        log!("created job {}", job.id);
                        set_state.set(State::None);
                        set_title.set(String::new());
                        set_description.set(String::new());
                        fetch_jobs();
                    }
                    Err(e) => set_state.set(State::Error(format!("error submitting job: {e}"))),
                }
            });
        }
    };

    let remove_job = Callback::new({
        let api = api.clone();
        let fetch_jobs = fetch_jobs.clone();
        move |job_id: String| {
            let api = api.clone();
            let fetch_jobs = fetch_jobs.clone();
            spawn_local(async move {
                let Some(id) = user_id.get_untracked() else {
                    return;
                };
                match api::users::delete_user_job(&api, &id, &job_id).await {
                    Ok(()) => fetch_jobs(),
                    Err(e) => error!("error removing job {job_id}: {e}"),
                }
            });
        }
    });

    view! {
        <div class="user-jobs-page">
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

            <h2>"Your jobs"</h2>
            <JobList jobs action=JobListAction::Remove(remove_job) />

            <div class="submit-job">
                <h2>"New job"</h2>
                <div class="input-with-label">
                    <label for="job-title">"Title"</label>
                    <input
                        type="text"
                        id="job-title"
                        class="text-input"
                        prop:value=title
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                </div>
                <div class="input-with-label">
                    <label for="job-description">"Description"</label>
                    <input
                        type="text"
                        id="job-description"
                        class="text-input"
                        prop:value=description
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    />
                </div>
                <div class="input-with-label">
                    <label for="job-language">"Source language"</label>
                    <input
                        type="text"
                        id="job-language"
                        class="text-input"
                        placeholder="ex. en"
                        prop:value=source_language
                        on:input=move |ev| set_source_language.set(event_target_value(&ev))
                    />
                </div>
                <div class="input-with-label">
                    <label for="job-format">"File format"</label>
                    <input
                        type="text"
                        id="job-format"
                        class="text-input"
                        placeholder="ex. wav"
                        prop:value=file_format
                        on:input=move |ev| set_file_format.set(event_target_value(&ev))
                    />
                </div>
                <div class="input-with-label">
                    <label for="job-file">"Recording"</label>
                    <input type="file" id="job-file" node_ref=input_ref />
                </div>
                <button class="button" on:click=on_submit>
                    "Submit job"
                </button>
            </div>
        </div>
    }
}
