use leptos::*;
use leptos_router::*;
use shared::{CreateGamePostRequest, GameSystem};

use crate::api::ApiClient;
use crate::components::alert::Alert;

#[component]
pub fn PostGame() -> impl IntoView {
    let navigate = use_navigate();

    let title = create_rw_signal(String::new());
    let system_id = create_rw_signal(Option::<i64>::None);
    let max_players = create_rw_signal(4i64);
    let description = create_rw_signal(String::new());
    let systems = create_rw_signal(Vec::<GameSystem>::new());
    let error = create_rw_signal(Option::<String>::None);
    let loading = create_rw_signal(false);

    // The system picker needs the catalog
    create_effect(move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            if let Ok(s) = ApiClient::list_systems().await {
                systems.set(s);
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if title.get().trim().is_empty() {
            error.set(Some("Title is required".to_string()));
            return;
        }
        if max_players.get() < 1 {
            error.set(Some("Max players must be at least 1".to_string()));
            return;
        }

        let nav = navigate.clone();

        loading.set(true);
        error.set(None);

        let trimmed_description = description.get().trim().to_string();
        let request = CreateGamePostRequest {
            title: title.get(),
            system_id: system_id.get(),
            max_players: max_players.get(),
            description: if trimmed_description.is_empty() {
                None
            } else {
                Some(trimmed_description)
            },
        };

        wasm_bindgen_futures::spawn_local(async move {
            match ApiClient::create_game_post(request).await {
                Ok(_) => {
                    nav("/", Default::default());
                }
                Err(e) => {
                    error.set(Some(e));
                    loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="page-header">
            <h1 class="page-title">"Post a Game"</h1>
            <p class="page-subtitle">"Describe your table and wait for players"</p>
        </div>

        {move || error.get().map(|e| view! { <Alert>{e}</Alert> })}

        <div class="card form-card">
            <form on:submit=on_submit>
                <div class="form-group">
                    <label class="form-label" for="title">"Title"</label>
                    <input
                        type="text"
                        id="title"
                        class="form-input"
                        placeholder="Name your game"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                        required
                    />
                </div>

                <div class="form-group">
                    <label class="form-label" for="system">"System"</label>
                    <select
                        id="system"
                        class="form-input"
                        on:change=move |ev| {
                            system_id.set(event_target_value(&ev).parse().ok());
                        }
                    >
                        <option value="">"No system / homebrew"</option>
                        {move || systems.get().into_iter().map(|system| {
                            let label = match system.abbreviation {
                                Some(abbr) => format!("{} ({})", system.title, abbr),
                                None => system.title,
                            };
                            view! {
                                <option value=system.id.to_string()>{label}</option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label class="form-label" for="max-players">"Max players"</label>
                    <input
                        type="number"
                        id="max-players"
                        class="form-input"
                        min="1"
                        prop:value=move || max_players.get().to_string()
                        on:input=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse() {
                                max_players.set(value);
                            }
                        }
                        required
                    />
                </div>

                <div class="form-group">
                    <label class="form-label" for="description">"Description"</label>
                    <textarea
                        id="description"
                        class="form-input"
                        rows="5"
                        placeholder="Setting, schedule, expectations..."
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </div>

                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || loading.get()
                >
                    {move || if loading.get() { "Posting..." } else { "Post Game" }}
                </button>
            </form>
        </div>
    }
}
