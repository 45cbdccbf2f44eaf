//! Insurance Page

use leptos::*;

use crate::site::use_site;

/// Insurance and payment information page
#[component]
pub fn Insurance() -> impl IntoView {
    let site = use_site();

    view! {
        <div class="container mx-auto px-4 py-10 max-w-3xl">
            <h1 class="text-3xl font-bold mb-2">"Insurance & Payment"</h1>
            <p class="text-slate-600 dark:text-slate-300 mb-8">
                "We file claims with every major PPO plan and will verify your \
                 benefits before your first visit."
            </p>

            <section class="mb-10">
                <h2 class="text-xl font-semibold mb-4">"Plans we accept"</h2>
                <ul class="grid grid-cols-2 md:grid-cols-3 gap-3">
                    {site.insurers.iter().map(|insurer| view! {
                        <li class="px-4 py-3 rounded-lg bg-slate-50 dark:bg-slate-800 text-sm">
                            {*insurer}
                        </li>
                    }).collect_view()}
                </ul>
            </section>

            <section class="mb-10">
                <h2 class="text-xl font-semibold mb-3">"No insurance?"</h2>
                <p class="text-sm text-slate-600 dark:text-slate-300">
                    "Our in-house membership plan covers two cleanings, exams and x-rays \
                     per year, plus 15% off other treatment. Ask the front desk for details."
                </p>
            </section>

            <section>
                <h2 class="text-xl font-semibold mb-3">"Questions about your coverage?"</h2>
                <p class="text-sm text-slate-600 dark:text-slate-300">
                    "Call us at "
                    <a
                        href=format!("tel:{}", site.phone)
                        class="text-sky-700 dark:text-sky-300 hover:underline"
                    >
                        {site.phone}
                    </a>
                    " and we will check your benefits for free."
                </p>
            </section>
        </div>
    }
}
