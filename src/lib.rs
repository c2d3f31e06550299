//! Inteliq chat client.
//!
//! The core (chat store, composer, sidebar, auth forms) is plain Rust and is
//! always built. The Dioxus front end lives behind the `ui` feature and only
//! forwards events into the core and renders its state.

pub mod attachments;
pub mod auth;
pub mod composer;
pub mod config;
pub mod counter;
pub mod logging;
pub mod palette;
pub mod routes;
pub mod sidebar;
pub mod store;
pub mod types;

#[cfg(feature = "ui")]
pub mod ui;
#[cfg(feature = "ui")]
pub mod views;
