use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "config/client.json";
pub const DEFAULT_ENDPOINT_BASE: &str = "ws://localhost:8000";
pub const DEFAULT_ROOM: &str = "sala1";
pub const DEFAULT_DISPLAY_NAME: &str = "You";

/// Cấu hình của một phiên chat: server, phòng và tên hiển thị.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub endpoint_base: String,
    pub room: String,
    pub display_name: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint_base: DEFAULT_ENDPOINT_BASE.to_string(),
            room: DEFAULT_ROOM.to_string(),
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
        }
    }
}

impl ClientConfig {
    /// `<endpoint_base>/ws/<room>`
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/ws/{}",
            self.endpoint_base.trim_end_matches('/'),
            self.room.trim_matches('/')
        )
    }

    /// CLI/env values win over the file. Blank values are ignored.
    pub fn with_overrides(
        mut self,
        endpoint_base: Option<String>,
        room: Option<String>,
        display_name: Option<String>,
    ) -> Self {
        let pick = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        if let Some(endpoint_base) = pick(endpoint_base) {
            self.endpoint_base = endpoint_base;
        }
        if let Some(room) = pick(room) {
            self.room = room;
        }
        if let Some(display_name) = pick(display_name) {
            self.display_name = display_name;
        }
        self
    }
}

pub fn load_config(path: &str) -> ClientConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<ClientConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                ClientConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            ClientConfig::default()
        }
    }
}

pub fn save_config(path: &str, config: &ClientConfig) -> std::io::Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)
}
