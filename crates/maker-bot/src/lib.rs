//! Market-making bot wiring: configuration and errors.

pub mod config;
pub mod error;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
