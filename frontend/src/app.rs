use leptos::*;
use leptos_router::*;

use crate::api::{ApiClient, AuthState};
use crate::components::navbar::Navbar;
use crate::pages::{
    home::Home, login::Login, post_game::PostGame, preferences::Preferences, profile::Profile,
    register::Register,
};

#[component]
pub fn App() -> impl IntoView {
    let auth_state = AuthState::new();
    provide_context(auth_state.clone());

    // Restore the session from a stored token
    let auth_state_effect = auth_state.clone();
    create_effect(move |_| {
        if auth_state_effect.is_authenticated() && auth_state_effect.user.get().is_none() {
            let auth = auth_state_effect.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::get_current_user().await {
                    Ok(user) => auth.user.set(Some(user)),
                    Err(_) => auth.logout(),
                }
            });
        }
    });

    view! {
        <Router>
            <Navbar />
            <main class="container">
                <Routes>
                    <Route path="/" view=Home />
                    <Route path="/login" view=Login />
                    <Route path="/register" view=Register />
                    <Route path="/post" view=|| view! { <RequireAuth><PostGame /></RequireAuth> } />
                    <Route path="/preferences" view=|| view! { <RequireAuth><Preferences /></RequireAuth> } />
                    <Route path="/profile" view=|| view! { <RequireAuth><Profile /></RequireAuth> } />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth_state = expect_context::<AuthState>();

    view! {
        <Show
            when=move || auth_state.is_authenticated()
            fallback=|| view! { <Redirect path="/login" /> }
        >
            {children()}
        </Show>
    }
}
