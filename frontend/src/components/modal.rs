use leptos::*;

#[component]
pub fn Modal(
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let close = move |_| on_close.call(());
    let modal_ref = create_node_ref::<html::Div>();

    // Move keyboard focus into the dialog when it opens
    create_effect(move |_| {
        if let Some(el) = modal_ref.get() {
            let _ = el.focus();
        }
    });

    view! {
        <div class="modal-backdrop" on:click=close>
            <div class="modal" tabindex="-1" node_ref=modal_ref on:click=|e| e.stop_propagation()>
                <div class="modal-header">
                    <h3 class="modal-title">{move || title.get()}</h3>
                    <button class="modal-close" on:click=close>"×"</button>
                </div>
                {children()}
            </div>
        </div>
    }
}
