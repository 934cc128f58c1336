//! Shared configuration, error types and CSV export for the trendscope
//! fetchers.

pub mod app_config;
pub mod config;
pub mod error;
pub mod export;

pub use app_config::{AppConfig, TwitterCredentials};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, ExportError};
pub use export::{read_csv_shape, to_csv_string, write_csv_file, CsvShape, Tabular};
