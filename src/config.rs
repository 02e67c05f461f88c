use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::call::CallSettings;

pub const DEFAULT_CONFIG_PATH: &str = "config/messenger.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_title: String,
    /// Tên hiển thị trong trang Profile
    pub user_name: String,
    pub ringing_delay_ms: u64,
    pub tick_interval_ms: u64,
    /// Thử mở camera/micro để xem trước khi gọi video
    pub self_preview: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Rust Messenger".to_string(),
            user_name: "Вы".to_string(),
            ringing_delay_ms: 2000,
            tick_interval_ms: 1000,
            self_preview: true,
        }
    }
}

impl AppConfig {
    pub fn call_settings(&self) -> CallSettings {
        CallSettings {
            ringing_delay: Duration::from_millis(self.ringing_delay_ms),
            // 0 would spin the interval
            tick_interval: Duration::from_millis(self.tick_interval_ms.max(1)),
            self_preview: self.self_preview,
        }
    }
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}

pub fn save_config(path: &str, config: &AppConfig) -> std::io::Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("rust_messenger_cfg_{}_{name}", std::process::id()))
            .join("messenger.json")
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_config("does/not/exist.json");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.call_settings(), CallSettings::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let path = temp_path("partial");
        let parent = Path::new(&path).parent().unwrap().to_path_buf();
        fs::create_dir_all(&parent).unwrap();
        fs::write(&path, r#"{ "ringing_delay_ms": 500, "self_preview": false }"#).unwrap();

        let config = load_config(&path);
        assert_eq!(config.ringing_delay_ms, 500);
        assert!(!config.self_preview);
        assert_eq!(config.tick_interval_ms, 1000);
        assert_eq!(config.window_title, "Rust Messenger");

        fs::remove_dir_all(parent).unwrap();
    }

    #[test]
    fn invalid_json_falls_back_to_defaults() {
        let path = temp_path("invalid");
        let parent = Path::new(&path).parent().unwrap().to_path_buf();
        fs::create_dir_all(&parent).unwrap();
        fs::write(&path, "not json").unwrap();

        assert_eq!(load_config(&path), AppConfig::default());

        fs::remove_dir_all(parent).unwrap();
    }

    #[test]
    fn save_then_load_creates_parent_dir() {
        let path = temp_path("save");
        let config = AppConfig {
            user_name: "Тест".to_string(),
            ..AppConfig::default()
        };

        save_config(&path, &config).unwrap();
        assert_eq!(load_config(&path), config);

        fs::remove_dir_all(Path::new(&path).parent().unwrap()).unwrap();
    }

    #[test]
    fn zero_tick_interval_is_clamped() {
        let config = AppConfig {
            tick_interval_ms: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.call_settings().tick_interval, Duration::from_millis(1));
    }
}
