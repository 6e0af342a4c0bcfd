use leptos::*;

/// Placeholder shown when a list has nothing to display.
#[component]
pub fn EmptyState(#[prop(optional, into)] icon: Option<String>, children: Children) -> impl IntoView {
    view! {
        <div class="empty-state">
            {icon.map(|i| view! {
                <span class="empty-state-icon">{i}</span>
            })}
            {children()}
        </div>
    }
}
