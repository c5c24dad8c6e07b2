mod app;
mod core;

pub use app::{AppConfig, AppConfigError, ProviderKeys};
pub use core::Config;
