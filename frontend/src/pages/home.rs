use leptos::*;
use shared::{GamePost, GameSystem};

use crate::api::ApiClient;
use crate::components::alert::Alert;
use crate::components::empty_state::EmptyState;
use crate::components::game_card::GameCard;
use crate::components::game_detail_modal::GameDetailModal;
use crate::components::loading::Loading;

#[component]
pub fn Home() -> impl IntoView {
    let loading = create_rw_signal(true);
    let error = create_rw_signal(Option::<String>::None);
    let games = create_rw_signal(Vec::<GamePost>::new());
    let systems = create_rw_signal(Vec::<GameSystem>::new());
    let selected_game = create_rw_signal(Option::<i64>::None);

    // Load the board on mount
    create_effect(move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            if let Ok(s) = ApiClient::list_systems().await {
                systems.set(s);
            }
            match ApiClient::list_games().await {
                Ok(g) => {
                    games.set(g);
                    loading.set(false);
                }
                Err(e) => {
                    error.set(Some(e));
                    loading.set(false);
                }
            }
        });
    });

    view! {
        <div class="page-header">
            <h1 class="page-title">"Open Games"</h1>
            <p class="page-subtitle">"Find a table and join the adventure"</p>
        </div>

        {move || error.get().map(|e| view! { <Alert>{e}</Alert> })}

        <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
            <Show
                when=move || !games.get().is_empty()
                fallback=|| view! {
                    <EmptyState icon="🎲".to_string()>
                        <p>"No games have been posted yet."</p>
                    </EmptyState>
                }
            >
                <div class="game-grid">
                    {move || games.get().into_iter().map(|game| {
                        let system_title = game.system_id.and_then(|id| {
                            systems.get().iter().find(|s| s.id == id).map(|s| s.title.clone())
                        });
                        view! {
                            <GameCard
                                game=game
                                system_title=system_title
                                on_details=move |id| selected_game.set(Some(id))
                            />
                        }
                    }).collect_view()}
                </div>
            </Show>
        </Show>

        {move || selected_game.get().map(|game_id| view! {
            <GameDetailModal
                game_id=game_id
                on_close=move |_| selected_game.set(None)
            />
        })}
    }
}
