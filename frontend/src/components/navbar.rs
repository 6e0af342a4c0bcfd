use leptos::*;
use leptos_router::*;

use crate::api::AuthState;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth_state = expect_context::<AuthState>();
    let navigate = use_navigate();

    let on_logout = {
        let auth_state = auth_state.clone();
        move |_| {
            auth_state.logout();
            navigate("/", Default::default());
        }
    };

    view! {
        <nav class="navbar">
            <div class="container navbar-content">
                <a href="/" class="navbar-brand">"Questboard"</a>
                <div class="navbar-links">
                    <a href="/">"Games"</a>
                    {move || if auth_state.is_authenticated() {
                        let on_logout = on_logout.clone();
                        view! {
                            <a href="/post">"Post a Game"</a>
                            <a href="/profile">"Profile"</a>
                            <button class="btn btn-outline" on:click=on_logout>
                                "Logout"
                            </button>
                        }
                        .into_view()
                    } else {
                        view! {
                            <a href="/login">"Login"</a>
                            <a href="/register">"Register"</a>
                        }
                        .into_view()
                    }}
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_navbar_brand() {
        assert_eq!("Questboard", "Questboard");
    }

    #[wasm_bindgen_test]
    fn test_navbar_css_classes() {
        assert_eq!("navbar", "navbar");
        assert_eq!("navbar-content", "navbar-content");
        assert_eq!("navbar-brand", "navbar-brand");
        assert_eq!("navbar-links", "navbar-links");
    }
}
