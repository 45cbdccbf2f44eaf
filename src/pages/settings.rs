//! Settings Page
//!
//! Editable profile fields seeded from the loaded record. Email is shown
//! read-only. Saving writes the auth metadata first, then upserts the
//! profile row; on success the visitor returns to the profile view, and a
//! failed save keeps them on the form.

use leptos::*;
use leptos_router::*;

use crate::api::{self, Identity};
use crate::components::Loading;
use crate::console;
use crate::profile::{load_profile, save_profile, HostedBackend, LoadOutcome, ProfileForm};
use crate::state::use_session;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (identity, set_identity) = create_signal(None::<Identity>);
    let (email, set_email) = create_signal(String::new());
    let (display_name, set_display_name) = create_signal(String::new());
    let (phone, set_phone) = create_signal(String::new());
    let (avatar_url, set_avatar_url) = create_signal(String::new());
    let (saving, set_saving) = create_signal(false);

    // Seed the form from the loaded profile
    create_effect(move |_| {
        spawn_local(async move {
            match load_profile(&HostedBackend).await {
                LoadOutcome::Unauthenticated => api::redirect_to_login(),
                LoadOutcome::Ready {
                    identity: who,
                    profile,
                } => {
                    let record = profile.into_record();
                    set_email.set(record.email.clone());
                    set_display_name.set(record.display_name.clone());
                    set_phone.set(record.phone.clone());
                    set_avatar_url.set(record.avatar_url);
                    session.identity.set(Some(who.clone()));
                    set_identity.set(Some(who));
                }
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let who = match identity.get() {
            Some(who) => who,
            None => return,
        };
        let form = ProfileForm {
            display_name: display_name.get(),
            phone: phone.get(),
            avatar_url: avatar_url.get(),
        };

        set_saving.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            match save_profile(&HostedBackend, &who, &form).await {
                Ok(record) => {
                    session.identity.update(|identity| {
                        if let Some(identity) = identity {
                            identity.display_name = Some(record.display_name.clone());
                        }
                    });
                    navigate("/profile", Default::default());
                }
                Err(err) => {
                    // Failed saves keep the visitor on the form.
                    console::error(&format!("profile save failed: {}", err));
                }
            }
            set_saving.set(false);
        });
    };

    let on_delete = move |_| {
        // No backing endpoint exists for account deletion yet.
        console::warn("account deletion requested; not implemented");
    };

    view! {
        <div class="container mx-auto px-4 py-10 max-w-2xl space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Settings"</h1>
                <p class="text-slate-500 dark:text-slate-400 mt-1">
                    "Keep your contact details up to date"
                </p>
            </div>

            {move || identity.get().is_none().then(|| view! { <Loading /> })}

            <section class="bg-white dark:bg-slate-800 border border-slate-200
                            dark:border-slate-700 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Profile"</h2>

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-slate-500 dark:text-slate-400 mb-2">
                            "Full name"
                        </label>
                        <input
                            type="text"
                            prop:value=move || display_name.get()
                            on:input=move |ev| set_display_name.set(event_target_value(&ev))
                            class="w-full bg-slate-50 dark:bg-slate-700 rounded-lg px-4 py-3
                                   border border-slate-200 dark:border-slate-600
                                   focus:border-sky-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-slate-500 dark:text-slate-400 mb-2">
                            "Email"
                        </label>
                        <input
                            type="email"
                            prop:value=move || email.get()
                            disabled=true
                            class="w-full bg-slate-100 dark:bg-slate-700/50 rounded-lg px-4 py-3
                                   border border-slate-200 dark:border-slate-600
                                   text-slate-400 cursor-not-allowed"
                        />
                        <p class="text-xs text-slate-400 mt-1">
                            "Your email comes from your sign-in and can't be changed here."
                        </p>
                    </div>

                    <div>
                        <label class="block text-sm text-slate-500 dark:text-slate-400 mb-2">
                            "Phone"
                        </label>
                        <input
                            type="tel"
                            prop:value=move || phone.get()
                            on:input=move |ev| set_phone.set(event_target_value(&ev))
                            class="w-full bg-slate-50 dark:bg-slate-700 rounded-lg px-4 py-3
                                   border border-slate-200 dark:border-slate-600
                                   focus:border-sky-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-slate-500 dark:text-slate-400 mb-2">
                            "Photo URL"
                        </label>
                        <input
                            type="url"
                            prop:value=move || avatar_url.get()
                            on:input=move |ev| set_avatar_url.set(event_target_value(&ev))
                            class="w-full bg-slate-50 dark:bg-slate-700 rounded-lg px-4 py-3
                                   border border-slate-200 dark:border-slate-600
                                   focus:border-sky-500 focus:outline-none"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled=move || saving.get() || identity.get().is_none()
                        class="w-full bg-sky-600 hover:bg-sky-700 disabled:bg-slate-400
                               disabled:cursor-not-allowed text-white rounded-lg py-3
                               font-semibold transition-colors"
                    >
                        {move || if saving.get() { "Saving..." } else { "Save changes" }}
                    </button>
                </form>
            </section>

            // Danger zone
            <section class="border border-red-200 dark:border-red-900/50 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-2 text-red-600 dark:text-red-400">
                    "Delete account"
                </h2>
                <p class="text-sm text-slate-500 dark:text-slate-400 mb-4">
                    "Removes your profile and sign-in. This cannot be undone."
                </p>
                <button
                    on:click=on_delete
                    class="px-4 py-2 border border-red-300 dark:border-red-800 text-red-600
                           dark:text-red-400 rounded-lg hover:bg-red-50 dark:hover:bg-red-900/20
                           transition-colors"
                >
                    "Delete my account"
                </button>
            </section>
        </div>
    }
}
