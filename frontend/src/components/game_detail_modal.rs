use leptos::*;
use shared::GameRecord;

use crate::api::{ApiClient, GameDataError};
use crate::components::loading::Loading;
use crate::components::modal::Modal;

/// Heading shown while the request is in flight.
const PENDING_TITLE: &str = "Game Details";
/// Fallback texts shown for any failed fetch, whatever the cause.
const ERROR_TITLE: &str = "Error";
const ERROR_BODY: &str = "Failed to load game data.";

/// Title and body text for a finished fetch. Success shows the record
/// verbatim; every failure collapses to the same fallback pair. Both
/// strings are rendered as text nodes, so markup in a record stays
/// inert.
fn content_for(outcome: &Result<GameRecord, GameDataError>) -> (String, String) {
    match outcome {
        Ok(record) => (record.title.clone(), record.description.clone()),
        Err(_) => (ERROR_TITLE.to_string(), ERROR_BODY.to_string()),
    }
}

#[component]
pub fn GameDetailModal(game_id: i64, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    // None while the request is in flight, then exactly one outcome.
    let outcome = create_rw_signal(Option::<Result<GameRecord, GameDataError>>::None);

    // Fire the single fetch when the modal mounts. The write goes through
    // try_set so a response that lands after the modal is gone is dropped.
    create_effect(move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            let result = ApiClient::game_data(game_id).await;
            if let Err(ref e) = result {
                logging::error!("Failed to load game data for game {}: {}", game_id, e);
            }
            let _ = outcome.try_set(Some(result));
        });
    });

    let title = Signal::derive(move || {
        outcome
            .get()
            .map(|result| content_for(&result).0)
            .unwrap_or_else(|| PENDING_TITLE.to_string())
    });

    view! {
        <Modal title=title on_close=on_close>
            <div class="modal-body game-detail-modal">
                {move || match outcome.get() {
                    None => view! { <Loading /> }.into_view(),
                    Some(result) => {
                        let (_, body) = content_for(&result);
                        view! { <p class="game-description">{body}</p> }.into_view()
                    }
                }}
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_content_for_success_shows_record() {
        let outcome = Ok(GameRecord {
            title: "Chess".to_string(),
            description: "A strategy game.".to_string(),
        });
        let (title, body) = content_for(&outcome);
        assert_eq!(title, "Chess");
        assert_eq!(body, "A strategy game.");
    }

    #[wasm_bindgen_test]
    fn test_content_for_http_error_shows_fallback() {
        let outcome = Err(GameDataError::Http(404));
        let (title, body) = content_for(&outcome);
        assert_eq!(title, "Error");
        assert_eq!(body, "Failed to load game data.");
    }

    #[wasm_bindgen_test]
    fn test_content_for_network_error_shows_fallback() {
        let outcome = Err(GameDataError::Network("connection refused".to_string()));
        let (title, body) = content_for(&outcome);
        assert_eq!(title, "Error");
        assert_eq!(body, "Failed to load game data.");
    }

    #[wasm_bindgen_test]
    fn test_content_for_decode_error_shows_fallback() {
        let outcome = Err(GameDataError::Decode("expected value".to_string()));
        let (title, body) = content_for(&outcome);
        assert_eq!(title, "Error");
        assert_eq!(body, "Failed to load game data.");
    }

    #[wasm_bindgen_test]
    fn test_content_for_keeps_markup_literal() {
        let outcome = Ok(GameRecord {
            title: "<script>alert('x')</script>".to_string(),
            description: "<b>bold</b> & <i>italic</i>".to_string(),
        });
        let (title, body) = content_for(&outcome);
        assert_eq!(title, "<script>alert('x')</script>");
        assert_eq!(body, "<b>bold</b> & <i>italic</i>");
    }
}
