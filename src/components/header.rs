//! Site Header
//!
//! Navigation chrome shared by every page: brand link, desktop nav, the
//! services overlay and the mobile nav sheet. Either overlay being open
//! locks body scroll; the lock is released on toggle and on teardown.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;
use leptos_router::*;

use crate::site::use_site;
use crate::state::scroll::{sync_body_scroll, ScrollLock};
use crate::state::{use_session, use_theme};

/// Header component with overlay and mobile-nav toggles.
#[component]
pub fn Header() -> impl IntoView {
    let site = use_site();
    let session = use_session();

    let (services_open, set_services_open) = create_signal(false);
    let (nav_open, set_nav_open) = create_signal(false);

    // The saved overflow value lives across effect runs; teardown releases
    // the lock so a locked scroll state never outlives the header.
    let lock = Rc::new(RefCell::new(ScrollLock::new()));
    {
        let lock = Rc::clone(&lock);
        create_effect(move |_| {
            let locked = services_open.get() || nav_open.get();
            sync_body_scroll(&mut lock.borrow_mut(), locked);
        });
    }
    {
        let lock = Rc::clone(&lock);
        on_cleanup(move || sync_body_scroll(&mut lock.borrow_mut(), false));
    }

    let portal_label = move || {
        if session.identity.get().is_some() {
            "My profile"
        } else {
            "Patient portal"
        }
    };

    view! {
        <header class="sticky top-0 z-40 bg-white border-b border-slate-200
                       dark:bg-slate-900 dark:border-slate-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Brand
                    <A href="/" class="flex items-center space-x-2">
                        <span class="text-2xl">"🦷"</span>
                        <span class="text-lg font-bold">{site.name}</span>
                    </A>

                    // Desktop navigation
                    <nav class="hidden md:flex items-center space-x-1">
                        <button
                            on:click=move |_| set_services_open.update(|open| *open = !*open)
                            class="px-4 py-2 rounded-lg text-slate-600 hover:text-slate-900 hover:bg-slate-100
                                   dark:text-slate-300 dark:hover:text-white dark:hover:bg-slate-800
                                   transition-colors"
                        >
                            "Services"
                        </button>
                        <NavLink href="/insurance" label="Insurance" />
                        <NavLink href="/book" label="Book a Visit" />
                        <A
                            href="/profile"
                            class="px-4 py-2 rounded-lg font-medium text-sky-700 hover:bg-sky-50
                                   dark:text-sky-300 dark:hover:bg-slate-800 transition-colors"
                        >
                            {portal_label}
                        </A>
                        <ThemeToggle />
                    </nav>

                    // Mobile controls
                    <div class="flex md:hidden items-center space-x-2">
                        <ThemeToggle />
                        <button
                            on:click=move |_| set_nav_open.set(true)
                            class="px-3 py-2 rounded-lg text-xl"
                            title="Open menu"
                        >
                            "☰"
                        </button>
                    </div>
                </div>
            </div>

            // Overlays
            {move || services_open.get().then(|| view! {
                <ServicesOverlay set_open=set_services_open />
            })}
            {move || nav_open.get().then(|| view! {
                <MobileNav set_open=set_nav_open />
            })}
        </header>
    }
}

/// Individual navigation link
#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-slate-600 hover:text-slate-900 hover:bg-slate-100
                   dark:text-slate-300 dark:hover:text-white dark:hover:bg-slate-800 transition-colors"
            active_class="bg-slate-100 text-slate-900 dark:bg-slate-800 dark:text-white"
        >
            {label}
        </A>
    }
}

/// Light/dark toggle persisted to local storage.
#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            on:click=move |_| theme.toggle()
            class="px-3 py-2 rounded-lg hover:bg-slate-100 dark:hover:bg-slate-800 transition-colors"
            title="Toggle theme"
        >
            {move || if theme.theme.get().is_dark() { "☀️" } else { "🌙" }}
        </button>
    }
}

/// Full-width services overlay. Backdrop, the close button and the booking
/// shortcut all close it.
#[component]
fn ServicesOverlay(set_open: WriteSignal<bool>) -> impl IntoView {
    let site = use_site();
    let navigate = use_navigate();

    let book_now = move |_| {
        set_open.set(false);
        navigate("/book", Default::default());
    };

    view! {
        <div class="fixed inset-0 z-50">
            <div
                class="absolute inset-0 bg-slate-900/60"
                on:click=move |_| set_open.set(false)
            />
            <div class="absolute inset-x-0 top-0 bg-white dark:bg-slate-900 border-b
                        border-slate-200 dark:border-slate-700 shadow-xl">
                <div class="container mx-auto px-4 py-8">
                    <div class="flex items-center justify-between mb-6">
                        <h2 class="text-xl font-semibold">"Our Services"</h2>
                        <button
                            on:click=move |_| set_open.set(false)
                            class="text-2xl text-slate-400 hover:text-slate-600 dark:hover:text-slate-200"
                            title="Close"
                        >
                            "×"
                        </button>
                    </div>

                    <div class="grid md:grid-cols-3 gap-4">
                        {site.services.iter().map(|service| view! {
                            <div class="p-4 rounded-lg bg-slate-50 dark:bg-slate-800">
                                <h3 class="font-medium">{service.name}</h3>
                                <p class="text-sm text-slate-500 dark:text-slate-400 mt-1">
                                    {service.blurb}
                                </p>
                            </div>
                        }).collect_view()}
                    </div>

                    <div class="mt-6">
                        <button
                            on:click=book_now
                            class="px-6 py-3 bg-sky-600 hover:bg-sky-700 text-white rounded-lg
                                   font-medium transition-colors"
                        >
                            "Book a visit"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Slide-over navigation sheet for small screens.
#[component]
fn MobileNav(set_open: WriteSignal<bool>) -> impl IntoView {
    let navigate = use_navigate();

    let go = move |path: &str| {
        set_open.set(false);
        navigate(path, Default::default());
    };

    let links = [
        ("/", "Home"),
        ("/insurance", "Insurance"),
        ("/book", "Book a Visit"),
        ("/profile", "Patient portal"),
    ];

    view! {
        <div class="fixed inset-0 z-50 md:hidden">
            <div
                class="absolute inset-0 bg-slate-900/60"
                on:click=move |_| set_open.set(false)
            />
            <div class="absolute inset-y-0 right-0 w-72 bg-white dark:bg-slate-900 shadow-xl p-6">
                <div class="flex items-center justify-between mb-8">
                    <span class="font-semibold">"Menu"</span>
                    <button
                        on:click=move |_| set_open.set(false)
                        class="text-2xl text-slate-400 hover:text-slate-600 dark:hover:text-slate-200"
                        title="Close menu"
                    >
                        "×"
                    </button>
                </div>

                <nav class="flex flex-col space-y-2">
                    {links.into_iter().map(|(href, label)| {
                        let go = go.clone();
                        view! {
                            <button
                                on:click=move |_| go(href)
                                class="text-left px-4 py-3 rounded-lg hover:bg-slate-100
                                       dark:hover:bg-slate-800 transition-colors"
                            >
                                {label}
                            </button>
                        }
                    }).collect_view()}
                </nav>
            </div>
        </div>
    }
}
