use crate::api::{self, ApiClient, servers::ServerFilter};
use crate::components::Loading;
use crate::model::Server;
use itertools::Itertools;
use leptos::{either::Either, logging::error, prelude::*, task::spawn_local};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div id="home-page">
            <div class="hero">
                <h1>"Scribe Hub"</h1>
                <p>"Upload a recording, pick a worker, get your transcript back."</p>
            </div>
            <ServersIsland />
        </div>
    }
}

#[component]
fn ServersIsland() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let (servers, set_servers) = signal(None::<Vec<Server>>);

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            match api::servers::list_servers(&api, &ServerFilter::default()).await {
                Ok(list) => set_servers.set(Some(list)),
                Err(e) => error!("error listing servers: {e}"),
            }
        });
    });

    view! {
        <div id="servers-island">
            <h2>"Workers"</h2>
            {move || {
                match servers.get() {
                    None => Either::Left(view! { <Loading /> }),
                    Some(servers) => {
                        Either::Right(
                            servers
                                .into_iter()
                                .map(|server| {
                                    let jobs_preview = server
                                        .current_jobs
                                        .iter()
                                        .take(3)
                                        .join(", ");
                                    view! {
                                        <div
                                            class="server"
                                            class:busy=!server.current_jobs.is_empty()
                                        >
                                            <div class="hostname">{server.hostname.clone()}</div>
                                            <div class="specs">
                                                {format!(
                                                    "{}, {}, {} GB RAM",
                                                    server.cpu_info,
                                                    server.gpu_info,
                                                    server.ram_size_gb,
                                                )}
                                            </div>
                                            <div class="status">{server.status.clone()}</div>
                                            <div class="jobs" title=jobs_preview>
                                                {format!(
                                                    "{} running, {} done",
                                                    server.current_jobs.len(),
                                                    server.completed_jobs.len(),
                                                )}
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view(),
                        )
                    }
                }
            }}
        </div>
    }
}
