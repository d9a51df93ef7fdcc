//! HTTP API over the race results database.
//!
//! A single action-routed endpoint: `?action=<name>` plus the parameters the
//! action needs. See [`dispatch::Action`] for the supported actions.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod features;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
