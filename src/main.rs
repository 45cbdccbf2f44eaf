//! Brightway Dental Web
//!
//! Marketing sites and patient portal for the Brightway Dental clinics,
//! built with Leptos (WASM).
//!
//! # Features
//!
//! - Brochure pages (services, insurance, booking) branded per clinic domain
//! - Patient profile backed by a hosted auth and database service
//! - Settings form for name, phone and photo
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All persistence and authentication are delegated to a hosted
//! backend reached over HTTP; the app itself holds only ephemeral UI state
//! plus a single theme preference in browser local storage.

use leptos::*;

mod api;
mod app;
mod components;
mod console;
mod pages;
mod profile;
mod site;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
