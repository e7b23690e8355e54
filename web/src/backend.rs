mod app;
mod auth;
mod config;

pub use app::{App, AppState};
pub use config::{Config, ConfigError};
