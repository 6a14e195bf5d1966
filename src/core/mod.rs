/// コアシステムモジュール
pub mod config;
pub mod config_validation;

pub use config::{AppConfig, ConfigError};
pub use config_validation::ValidationError;
