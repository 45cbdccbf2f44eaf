//! Booking Page

use leptos::*;

use crate::site::use_site;

/// Booking page with the external scheduler link and phone fallback
#[component]
pub fn Book() -> impl IntoView {
    let site = use_site();

    view! {
        <div class="container mx-auto px-4 py-10 max-w-3xl">
            <h1 class="text-3xl font-bold mb-2">"Book a Visit"</h1>
            <p class="text-slate-600 dark:text-slate-300 mb-8">
                "Pick a time online, or call and we will find one for you."
            </p>

            <div class="grid md:grid-cols-2 gap-6">
                <div class="p-6 rounded-xl border border-slate-200 dark:border-slate-700
                            bg-white dark:bg-slate-800">
                    <h2 class="font-semibold mb-2">"Schedule online"</h2>
                    <p class="text-sm text-slate-500 dark:text-slate-400 mb-4">
                        "Real-time availability for cleanings, exams and consultations."
                    </p>
                    <a
                        href=site.booking_url
                        target="_blank"
                        rel="noopener"
                        class="inline-block px-6 py-3 bg-sky-600 hover:bg-sky-700 text-white
                               rounded-lg font-medium transition-colors"
                    >
                        "Open scheduler"
                    </a>
                </div>

                <div class="p-6 rounded-xl border border-slate-200 dark:border-slate-700
                            bg-white dark:bg-slate-800">
                    <h2 class="font-semibold mb-2">"Call or visit"</h2>
                    <p class="text-sm mb-1">
                        <a href=format!("tel:{}", site.phone) class="hover:underline">
                            {site.phone}
                        </a>
                    </p>
                    <p class="text-sm text-slate-500 dark:text-slate-400">{site.address}</p>

                    <h3 class="font-medium mt-4 mb-2 text-sm">"Hours"</h3>
                    <ul class="text-sm text-slate-500 dark:text-slate-400 space-y-1">
                        {site.hours.iter().map(|(days, times)| view! {
                            <li class="flex justify-between">
                                <span>{*days}</span>
                                <span>{*times}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                </div>
            </div>

            <p class="mt-8 text-sm text-slate-500 dark:text-slate-400">
                "New patient? Arrive ten minutes early so we can scan your insurance card."
            </p>
        </div>
    }
}
