//! Site Footer

use chrono::Datelike;
use leptos::*;
use leptos_router::*;

use crate::site::use_site;

/// Footer with contact details, office hours and quick links.
#[component]
pub fn Footer() -> impl IntoView {
    let site = use_site();
    let year = chrono::Utc::now().year();

    view! {
        <footer class="bg-slate-50 border-t border-slate-200 dark:bg-slate-800
                       dark:border-slate-700 mt-16">
            <div class="container mx-auto px-4 py-10 grid gap-8 md:grid-cols-3">
                <div>
                    <h3 class="font-semibold mb-3">{site.name}</h3>
                    <p class="text-sm text-slate-500 dark:text-slate-400">{site.address}</p>
                    <p class="text-sm mt-2">
                        <a href=format!("tel:{}", site.phone) class="hover:underline">
                            {site.phone}
                        </a>
                    </p>
                    <p class="text-sm">
                        <a href=format!("mailto:{}", site.email) class="hover:underline">
                            {site.email}
                        </a>
                    </p>
                </div>

                <div>
                    <h3 class="font-semibold mb-3">"Office Hours"</h3>
                    <ul class="text-sm text-slate-500 dark:text-slate-400 space-y-1">
                        {site.hours.iter().map(|(days, times)| view! {
                            <li class="flex justify-between max-w-xs">
                                <span>{*days}</span>
                                <span>{*times}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                </div>

                <div>
                    <h3 class="font-semibold mb-3">"Quick Links"</h3>
                    <ul class="text-sm space-y-1">
                        <li>
                            <A href="/insurance" class="hover:underline">"Insurance we accept"</A>
                        </li>
                        <li>
                            <A href="/book" class="hover:underline">"Book a visit"</A>
                        </li>
                        <li>
                            <A href="/profile" class="hover:underline">"Patient portal"</A>
                        </li>
                    </ul>
                </div>
            </div>

            <div class="border-t border-slate-200 dark:border-slate-700 py-4 text-center
                        text-xs text-slate-400">
                {format!("© {} {}. All rights reserved.", year, site.name)}
            </div>
        </footer>
    }
}
