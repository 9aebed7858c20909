//! Provisioning tool library
//!
//! Exposes settings loading, app state wiring and the CLI commands so they can
//! be exercised from integration tests.

pub mod app_state;
pub mod cli;
pub mod commands;
pub mod init_telemetry;
pub mod settings;
pub mod utils;

pub use app_state::AppState;
