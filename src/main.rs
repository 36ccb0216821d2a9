//! Momentum
//!
//! Personal journaling PWA client built with Leptos (WASM).
//!
//! # Features
//!
//! - Cookie-based session with login, registration and logout
//! - Journal feed of dated entries composed of content tiles
//! - Entry composer with image upload, music search and workout generation
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All persistence and business logic live in the remote Momentum
//! API; this crate is the presentation and request-orchestration layer.

use leptos::*;

mod api;
mod app;
mod components;
mod model;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
