mod attendance_config;
mod auth_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use attendance_config::AttendanceConfig;
pub use auth_config::AuthConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use storage_config::{StorageBackend, StorageConfig};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STORE_FILENAME: &str = "store.json";
const DEFAULT_ALLOW_ANONYMOUS: bool = true;
const DEFAULT_SESSION_TTL_SECS: u64 = 86_400;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const MIN_PORT: u16 = 1024;
