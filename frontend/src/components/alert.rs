use leptos::*;

/// Inline error box for form and fetch feedback.
#[component]
pub fn Alert(children: Children) -> impl IntoView {
    view! {
        <div class="alert alert-error">
            {children()}
        </div>
    }
}
