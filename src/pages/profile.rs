//! Profile Page
//!
//! Patient-facing profile view. Resolves the identity and profile row on
//! entry; unauthenticated visitors are sent to the hosted login page before
//! any profile data renders.

use leptos::*;
use leptos_router::*;

use crate::api::{self, ProfileRecord};
use crate::components::CardSkeleton;
use crate::profile::{load_profile, HostedBackend, LoadOutcome, LoadedProfile};
use crate::state::use_session;

/// Profile page component
#[component]
pub fn Profile() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let (outcome, set_outcome) = create_signal(None::<LoadOutcome>);

    // Resolve identity and profile on mount
    create_effect(move |_| {
        spawn_local(async move {
            let loaded = load_profile(&HostedBackend).await;
            if matches!(loaded, LoadOutcome::Unauthenticated) {
                api::redirect_to_login();
                return;
            }
            if let LoadOutcome::Ready { identity, .. } = &loaded {
                session.identity.set(Some(identity.clone()));
            }
            set_outcome.set(Some(loaded));
        });
    });

    let sign_out = move |_| {
        api::clear_session_token();
        session.identity.set(None);
        navigate("/", Default::default());
    };

    view! {
        <div class="container mx-auto px-4 py-10 max-w-2xl">
            <div class="flex items-center justify-between mb-6">
                <h1 class="text-3xl font-bold">"My Profile"</h1>
                <div class="flex items-center space-x-2">
                    <button
                        on:click=sign_out
                        class="px-4 py-2 border border-slate-300 dark:border-slate-600
                               rounded-lg font-medium hover:bg-slate-100
                               dark:hover:bg-slate-800 transition-colors"
                    >
                        "Sign out"
                    </button>
                    <A
                        href="/settings"
                        class="px-4 py-2 bg-sky-600 hover:bg-sky-700 text-white rounded-lg
                               font-medium transition-colors"
                    >
                        "Edit settings"
                    </A>
                </div>
            </div>

            {move || match outcome.get() {
                None => view! { <CardSkeleton /> }.into_view(),
                Some(LoadOutcome::Unauthenticated) => view! {}.into_view(),
                Some(LoadOutcome::Ready { profile, .. }) => {
                    view! { <ProfileCard profile=profile /> }.into_view()
                }
            }}
        </div>
    }
}

/// Profile summary card
#[component]
fn ProfileCard(profile: LoadedProfile) -> impl IntoView {
    let defaulted = profile.is_defaulted();
    let ProfileRecord {
        email,
        display_name,
        phone,
        avatar_url,
        updated_at,
        ..
    } = profile.into_record();

    let display_name = if display_name.is_empty() {
        "New patient".to_string()
    } else {
        display_name
    };
    let phone = if phone.is_empty() {
        "Not set".to_string()
    } else {
        phone
    };
    let updated = updated_at
        .map(|at| at.format("%B %e, %Y").to_string())
        .unwrap_or_else(|| "Never".to_string());

    view! {
        <div class="bg-white dark:bg-slate-800 border border-slate-200 dark:border-slate-700
                    rounded-xl p-6">
            <div class="flex items-center space-x-4">
                {if avatar_url.is_empty() {
                    view! {
                        <div class="w-16 h-16 rounded-full bg-slate-200 dark:bg-slate-700
                                    flex items-center justify-center text-2xl">
                            "🙂"
                        </div>
                    }.into_view()
                } else {
                    view! {
                        <img src=avatar_url class="w-16 h-16 rounded-full object-cover" />
                    }.into_view()
                }}
                <div>
                    <h2 class="text-xl font-semibold">{display_name}</h2>
                    <p class="text-sm text-slate-500 dark:text-slate-400">{email}</p>
                </div>
            </div>

            <dl class="mt-6 space-y-3 text-sm">
                <div class="flex justify-between">
                    <dt class="text-slate-500 dark:text-slate-400">"Phone"</dt>
                    <dd>{phone}</dd>
                </div>
                <div class="flex justify-between">
                    <dt class="text-slate-500 dark:text-slate-400">"Last updated"</dt>
                    <dd>{updated}</dd>
                </div>
            </dl>

            {defaulted.then(|| view! {
                <p class="mt-6 text-sm text-amber-600 dark:text-amber-400">
                    "Finish setting up your profile so the front desk can reach you."
                </p>
            })}
        </div>
    }
}
