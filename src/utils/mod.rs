pub mod config;
pub mod errors;

pub use config::{AppConfig, DictionaryConfig, FilesConfig, LoggingConfig, TransformConfig};
pub use errors::{FillError, Result};
