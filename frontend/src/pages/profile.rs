use leptos::*;
use shared::UserProfile;

use crate::api::ApiClient;
use crate::components::alert::Alert;
use crate::components::loading::Loading;

fn role_badges(profile: &UserProfile) -> Vec<&'static str> {
    let mut badges = Vec::new();
    if profile.player {
        badges.push("Player");
    }
    if profile.gm {
        badges.push("Game Master");
    }
    badges
}

#[component]
pub fn Profile() -> impl IntoView {
    let loading = create_rw_signal(true);
    let error = create_rw_signal(Option::<String>::None);
    let profile = create_rw_signal(Option::<UserProfile>::None);

    create_effect(move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            match ApiClient::get_profile().await {
                Ok(p) => {
                    profile.set(Some(p));
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
            <h1 class="page-title">"Your Profile"</h1>
        </div>

        {move || error.get().map(|e| view! { <Alert>{e}</Alert> })}

        <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
            {move || profile.get().map(|p| {
                let badges = role_badges(&p);
                view! {
                    <div class="card profile-card">
                        <div class="profile-field">
                            <span class="profile-label">"Username"</span>
                            <span class="profile-value">{p.username.clone()}</span>
                        </div>
                        <div class="profile-field">
                            <span class="profile-label">"Email"</span>
                            <span class="profile-value">{p.email.clone()}</span>
                        </div>
                        <div class="profile-field">
                            <span class="profile-label">"Roles"</span>
                            <span class="profile-value">
                                {badges.into_iter().map(|badge| view! {
                                    <span class="badge badge-role">{badge}</span>
                                }).collect_view()}
                            </span>
                        </div>
                    </div>
                }
            })}
        </Show>
    }
}
