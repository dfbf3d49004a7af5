//! Billedy Dashboard
//!
//! Personal finance dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - One route per finance section (accounts, budgets, categories, billing
//!   cycles, savings, templates, transactions) with shaped loading skeletons
//! - Entity image uploads through the Billedy API
//! - Light/dark theme, session context and toast notifications
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the Billedy API via HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod sections;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
