use leptos::*;
use shared::GamePost;

#[component]
pub fn GameCard(
    game: GamePost,
    #[prop(optional_no_strip)] system_title: Option<String>,
    #[prop(into)] on_details: Callback<i64>,
) -> impl IntoView {
    let game_id = game.id;
    let players = format!("Up to {} players", game.max_players);

    view! {
        <div class="card game-card">
            <h3 class="game-card-title">{game.title}</h3>
            {system_title.map(|system| view! {
                <span class="badge badge-system">{system}</span>
            })}
            <p class="game-card-meta">{players}</p>
            <button class="btn btn-primary" on:click=move |_| on_details.call(game_id)>
                "Details"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_players_text() {
        let max_players = 4i64;
        let players = format!("Up to {} players", max_players);
        assert_eq!(players, "Up to 4 players");
    }

    #[wasm_bindgen_test]
    fn test_details_button_classes() {
        assert_eq!("btn btn-primary", "btn btn-primary");
    }
}
