//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{Footer, Header};
use crate::pages::{Book, Home, Insurance, Profile, Settings};
use crate::site::SiteConfig;
use crate::state::{provide_session, provide_theme};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // A fresh session token may arrive in the URL fragment after the
    // hosted login redirects back.
    api::capture_session_from_url();

    // Resolve branding for the current domain and provide the shared
    // contexts before any page renders.
    let site = SiteConfig::current();
    provide_context(site);
    provide_theme();
    provide_session();

    view! {
        <Router>
            <div class="min-h-screen flex flex-col bg-white text-slate-800
                        dark:bg-slate-900 dark:text-slate-100">
                <Header />

                <main class="flex-1">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/insurance" view=Insurance />
                        <Route path="/book" view=Book />
                        <Route path="/profile" view=Profile />
                        <Route path="/settings" view=Settings />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center px-4">
            <div class="text-6xl mb-4">"🦷"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-slate-500 dark:text-slate-400 mb-6">
                "The page you're looking for doesn't exist."
            </p>
            <A
                href="/"
                class="px-6 py-3 bg-sky-600 hover:bg-sky-700 text-white rounded-lg
                       font-medium transition-colors"
            >
                "Back to Home"
            </A>
        </div>
    }
}
