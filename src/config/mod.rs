#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::path::Path;

/// 載入並驗證設定檔；沒有指定檔案時使用預設設定
pub fn load_settings(path: Option<&Path>) -> Result<TomlConfig> {
    let config = match path {
        Some(path) => {
            tracing::debug!("Loading settings from {}", path.display());
            TomlConfig::from_file(path)?
        }
        None => {
            tracing::debug!("No settings file given, using defaults");
            TomlConfig::default()
        }
    };
    config.validate()?;
    Ok(config)
}
