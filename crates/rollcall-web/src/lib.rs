//! Admin dashboard web server for rollcall

#![forbid(unsafe_code)]

pub mod api_client;
pub mod handlers;
pub mod paths;
pub mod routes;
pub mod server;
pub mod state;
pub mod views;

pub use server::build_app;
pub use state::AppState;
