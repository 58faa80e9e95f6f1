use super::results::render_detail_sections;
use crate::api;
use shared::history::newest_first;
use shared::{AppConfig, HistoryEntry, SessionIdentity};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProfileProps {
    pub identity: SessionIdentity,
    pub config: AppConfig,
}

#[derive(Clone, PartialEq)]
enum HistoryState {
    Loading,
    Loaded(Vec<HistoryEntry>),
    Failed(String),
}

#[function_component(Profile)]
pub fn profile(props: &ProfileProps) -> Html {
    let history = use_state(|| HistoryState::Loading);
    let selected = use_state(|| None::<HistoryEntry>);

    {
        let history = history.clone();
        let url = props.config.user_history_url(&props.identity.id);

        use_effect_with(url, move |url| {
            let url = url.clone();
            history.set(HistoryState::Loading);
            spawn_local(async move {
                match api::fetch_history(url).await {
                    Ok(entries) => {
                        log::info!("Loaded {} history entries", entries.len());
                        history.set(HistoryState::Loaded(newest_first(entries)));
                    }
                    Err(e) => {
                        log::error!("Failed to load history: {}", e);
                        history.set(HistoryState::Failed(e));
                    }
                }
            });
        });
    }

    let close = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };

    html! {
        <main class="profile-page">
            <div class="profile-card">
                <div class="avatar"><i class="fa-solid fa-user"></i></div>
                <div>
                    <h1>{ props.identity.display_name() }</h1>
                    <p class="subtitle"><i class="fa-solid fa-envelope"></i>{ format!(" {}", props.identity.email) }</p>
                </div>
            </div>

            <h2>{"Detection History"}</h2>
            { render_history(&history, &selected) }

            if let Some(entry) = (*selected).clone() {
                { render_detail_modal(&entry, close) }
            }
        </main>
    }
}

fn render_history(history: &HistoryState, selected: &UseStateHandle<Option<HistoryEntry>>) -> Html {
    match history {
        HistoryState::Loading => html! {
            <div class="loading-preview">
                <i class="fa-solid fa-spinner fa-spin"></i>
                <p>{"Loading history..."}</p>
            </div>
        },
        HistoryState::Failed(message) => html! {
            <div class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ format!("Could not load history: {}", message) }</p>
            </div>
        },
        HistoryState::Loaded(entries) if entries.is_empty() => html! {
            <p class="no-results-message">{"No detections yet."}</p>
        },
        HistoryState::Loaded(entries) => html! {
            <div class="history-list">
                { for entries.iter().map(|entry| {
                    let open = {
                        let selected = selected.clone();
                        let entry = entry.clone();
                        Callback::from(move |_| selected.set(Some(entry.clone())))
                    };
                    html! {
                        <button key={entry.id.clone()} class="history-item" onclick={open}>
                            <img src={entry.image.clone()} alt={entry.animal.clone()} />
                            <div class="history-text">
                                <p class="history-disease">{ &entry.disease }</p>
                                <p class="history-animal">{ &entry.animal }</p>
                            </div>
                            <div class="history-date">
                                <i class="fa-solid fa-calendar"></i>{ format!(" {}", entry.date) }
                            </div>
                            <i class="fa-solid fa-chevron-right"></i>
                        </button>
                    }
                })}
            </div>
        },
    }
}

fn render_detail_modal(entry: &HistoryEntry, close: Callback<MouseEvent>) -> Html {
    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <div class="modal" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="modal-header">
                    <h3>{ &entry.disease }</h3>
                    <button class="modal-close" title="Close" onclick={close}>
                        <i class="fa-solid fa-xmark"></i>
                    </button>
                </div>
                <img class="modal-image" src={entry.image.clone()} alt={entry.animal.clone()} />
                { render_detail_sections(&entry.to_result()) }
            </div>
        </div>
    }
}
