//! Welcome - greets the signed-in user on page load
//!
//! The page URL carries the credential blob as `?tokens=...`. On load the
//! web frontend asks `/auth/whoami` who that is and, if the answer has no
//! `error`, swaps the `#body` container for a banner with the user's
//! picture, name and a logout link.
//!
//! ## Architecture
//!
//! - **Core** (all targets): query parsing, whoami client, banner markup and
//!   the renderer flow, written against the [`welcome::Page`] and
//!   [`whoami::WhoAmIClient`] traits
//! - **Web**: `welcome-web` binds the flow to the DOM with `web-sys`
//! - **Server**: `welcome-server` serves the page and forwards whoami to the
//!   auth backend
//!
//! ## Usage
//!
//! For the server:
//! ```bash
//! cargo run --bin welcome-server --features server
//! ```
//!
//! For the web bundle:
//! ```bash
//! cargo build --bin welcome-web --target wasm32-unknown-unknown --no-default-features --features dom-web
//! ```

pub mod query;
pub mod render;
pub mod types;
pub mod welcome;
pub mod whoami;

// Platform bindings (DOM page on wasm32)
pub mod platform;

#[cfg(feature = "server")]
pub mod config;

#[cfg(feature = "server")]
pub mod server;

pub use types::{Outcome, WhoAmI};
pub use welcome::{run, Page};
pub use whoami::{HttpWhoAmIClient, WhoAmIClient};
