//! OpSpend Console
//!
//! IT expenditure administration dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Payment tracking with an approval workflow
//! - Contractor / legal entity / department / category directory
//! - Cost-saving records and support tickets
//! - Role-based access control over console actions
//! - Drag/resize dashboard layout editor
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the OpSpend API via HTTP, sending an
//! auth token header and exchanging JSON bodies.

use leptos::*;

mod analytics;
mod api;
mod app;
mod components;
mod layout;
mod models;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
