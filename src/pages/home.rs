//! Home Page
//!
//! Brochure landing page for the clinic resolved from the current domain.

use leptos::*;
use leptos_router::*;

use crate::site::use_site;

/// Landing page component
#[component]
pub fn Home() -> impl IntoView {
    let site = use_site();

    view! {
        <div>
            // Hero
            <section class="bg-sky-50 dark:bg-slate-800">
                <div class="container mx-auto px-4 py-20 text-center">
                    <h1 class="text-4xl md:text-5xl font-bold mb-4">{site.name}</h1>
                    <p class="text-lg text-slate-600 dark:text-slate-300 max-w-2xl mx-auto mb-8">
                        {site.tagline}
                    </p>
                    <div class="flex items-center justify-center space-x-4">
                        <A
                            href="/book"
                            class="px-6 py-3 bg-sky-600 hover:bg-sky-700 text-white rounded-lg
                                   font-semibold transition-colors"
                        >
                            "Book a visit"
                        </A>
                        <a
                            href=format!("tel:{}", site.phone)
                            class="px-6 py-3 border border-slate-300 dark:border-slate-600 rounded-lg
                                   font-semibold hover:bg-white dark:hover:bg-slate-700 transition-colors"
                        >
                            {format!("Call {}", site.phone)}
                        </a>
                    </div>
                </div>
            </section>

            // Services
            <section class="container mx-auto px-4 py-16">
                <h2 class="text-2xl font-bold mb-8 text-center">"What we do"</h2>
                <div class="grid md:grid-cols-3 gap-6">
                    {site.services.iter().map(|service| view! {
                        <div class="p-6 rounded-xl border border-slate-200 dark:border-slate-700
                                    bg-white dark:bg-slate-800">
                            <h3 class="font-semibold mb-2">{service.name}</h3>
                            <p class="text-sm text-slate-500 dark:text-slate-400">{service.blurb}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            // Insurance teaser
            <section class="bg-slate-50 dark:bg-slate-800/50">
                <div class="container mx-auto px-4 py-12 text-center">
                    <h2 class="text-2xl font-bold mb-3">"We work with your insurance"</h2>
                    <p class="text-slate-600 dark:text-slate-300 mb-6">
                        {format!(
                            "We are in network with {} and most major PPO plans.",
                            site.insurers[..3].join(", ")
                        )}
                    </p>
                    <A
                        href="/insurance"
                        class="text-sky-700 dark:text-sky-300 font-medium hover:underline"
                    >
                        "See all accepted plans"
                    </A>
                </div>
            </section>
        </div>
    }
}
