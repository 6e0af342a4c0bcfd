use leptos::*;
use leptos_router::*;
use shared::Role;

use crate::api::{ApiClient, AuthState};
use crate::components::alert::Alert;

#[component]
pub fn Preferences() -> impl IntoView {
    let auth_state = expect_context::<AuthState>();
    let navigate = use_navigate();

    let player = create_rw_signal(false);
    let gm = create_rw_signal(false);
    let error = create_rw_signal(Option::<String>::None);
    let loading = create_rw_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let mut roles = Vec::new();
        if player.get() {
            roles.push(Role::Player);
        }
        if gm.get() {
            roles.push(Role::Gm);
        }

        if roles.is_empty() {
            error.set(Some("Select at least one role".to_string()));
            return;
        }

        let nav = navigate.clone();
        let auth = auth_state.clone();

        loading.set(true);
        error.set(None);

        wasm_bindgen_futures::spawn_local(async move {
            match ApiClient::set_preferences(roles).await {
                Ok(()) => {
                    auth.user.update(|user| {
                        if let Some(user) = user {
                            user.filled_preferences = true;
                        }
                    });
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
        <div class="auth-container">
            <div class="auth-card card">
                <div class="auth-header">
                    <h1 class="auth-title">"How do you play?"</h1>
                    <p class="auth-subtitle">"Pick every role that fits. You can be both."</p>
                </div>

                {move || error.get().map(|e| view! { <Alert>{e}</Alert> })}

                <form on:submit=on_submit>
                    <div class="form-group checkbox-group">
                        <label class="checkbox-label" for="player">
                            <input
                                type="checkbox"
                                id="player"
                                prop:checked=move || player.get()
                                on:change=move |ev| player.set(event_target_checked(&ev))
                            />
                            <span>"Player: I want to join games"</span>
                        </label>
                    </div>

                    <div class="form-group checkbox-group">
                        <label class="checkbox-label" for="gm">
                            <input
                                type="checkbox"
                                id="gm"
                                prop:checked=move || gm.get()
                                on:change=move |ev| gm.set(event_target_checked(&ev))
                            />
                            <span>"Game Master: I want to run games"</span>
                        </label>
                    </div>

                    <button
                        type="submit"
                        class="btn btn-primary"
                        style="width: 100%; margin-top: 1rem;"
                        disabled=move || loading.get()
                    >
                        {move || if loading.get() { "Saving..." } else { "Save" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
