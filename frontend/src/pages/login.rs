use leptos::*;
use leptos_router::*;
use shared::LoginRequest;

use crate::api::{ApiClient, AuthState};

#[component]
pub fn Login() -> impl IntoView {
    let auth_state = expect_context::<AuthState>();
    let navigate = use_navigate();

    let identity = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(Option::<String>::None);
    let loading = create_rw_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let nav = navigate.clone();
        let auth = auth_state.clone();

        loading.set(true);
        error.set(None);

        let request = LoginRequest {
            identity: identity.get(),
            password: password.get(),
        };

        wasm_bindgen_futures::spawn_local(async move {
            match ApiClient::login(request).await {
                Ok(response) => {
                    // First login still has the questionnaire ahead
                    let target = if response.user.filled_preferences {
                        "/"
                    } else {
                        "/preferences"
                    };
                    auth.set_auth(response);
                    nav(target, Default::default());
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
                    <h1 class="auth-title">"Log In"</h1>
                    <p class="auth-subtitle">"Pick up where you left off"</p>
                </div>

                {move || error.get().map(|e| view! {
                    <div class="alert alert-error">{e}</div>
                })}

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label class="form-label" for="identity">"Username or email"</label>
                        <input
                            type="text"
                            id="identity"
                            class="form-input"
                            placeholder="Your username or email"
                            prop:value=move || identity.get()
                            on:input=move |ev| identity.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-group">
                        <label class="form-label" for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            class="form-input"
                            placeholder="Your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn btn-primary"
                        style="width: 100%; margin-top: 1rem;"
                        disabled=move || loading.get()
                    >
                        {move || if loading.get() { "Logging in..." } else { "Log In" }}
                    </button>
                </form>

                <p style="text-align: center; margin-top: 1rem; color: var(--text-muted);">
                    "New here? "
                    <a href="/register" style="color: var(--primary-color);">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_button_text_not_loading() {
        let loading = false;
        let text = if loading { "Logging in..." } else { "Log In" };
        assert_eq!(text, "Log In");
    }

    #[wasm_bindgen_test]
    fn test_button_text_loading() {
        let loading = true;
        let text = if loading { "Logging in..." } else { "Log In" };
        assert_eq!(text, "Logging in...");
    }

    #[wasm_bindgen_test]
    fn test_redirect_target_for_new_user() {
        let filled_preferences = false;
        let target = if filled_preferences { "/" } else { "/preferences" };
        assert_eq!(target, "/preferences");
    }

    #[wasm_bindgen_test]
    fn test_redirect_target_for_returning_user() {
        let filled_preferences = true;
        let target = if filled_preferences { "/" } else { "/preferences" };
        assert_eq!(target, "/");
    }
}
