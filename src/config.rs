//! 检测配置模块
//!
//! # 设计思路
//!
//! 把检测流水线里可调的常量集中到 `SnapConfig`，默认值与内置规则完全一致。
//! 配置文件缺失或损坏时回退到默认值并记录警告，不阻断检测。

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::detection::compose::DEFAULT_SOLUTIONS_DIR;
use crate::detection::sanitize::TITLE_MAX_LENGTH;
use crate::detection::title::DEFAULT_SCAN_LINES;
use crate::error::SnapError;

/// 页面标题清洗为空时使用的文件名
pub const DEFAULT_FALLBACK_NAME: &str = "code-snippet";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    /// 标题提取扫描的行数
    pub scan_line_limit: usize,
    /// 页面标题 slug 的长度上限
    pub title_max_length: usize,
    /// 无平台时的目录
    pub solutions_dir: String,
    /// 页面标题清洗为空时的替代名
    pub fallback_name: String,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            scan_line_limit: DEFAULT_SCAN_LINES,
            title_max_length: TITLE_MAX_LENGTH,
            solutions_dir: DEFAULT_SOLUTIONS_DIR.to_string(),
            fallback_name: DEFAULT_FALLBACK_NAME.to_string(),
        }
    }
}

/// 从 JSON 文件加载配置，失败时回退默认值
pub fn load_config_from_path(config_path: &Path) -> SnapConfig {
    if !config_path.exists() {
        log::debug!("配置文件不存在，使用默认配置: {}", config_path.display());
        return SnapConfig::default();
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            log::warn!("读取配置文件失败，使用默认配置: {}", e);
            return SnapConfig::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("解析配置文件失败，使用默认配置: {}", e);
            SnapConfig::default()
        }
    }
}

/// 将配置写为格式化 JSON
pub fn save_config_to_path(config_path: &Path, config: &SnapConfig) -> Result<(), SnapError> {
    let content = serde_json::to_string_pretty(config)
        .map_err(|e| SnapError::Config(format!("序列化配置失败: {}", e)))?;
    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(config_path, content)
        .map_err(|e| SnapError::Config(format!("写入配置文件失败: {}", e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::*;

    fn unique_temp_dir() -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock error")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("codesnap-config-test-{nanos}"));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn defaults_match_builtin_rules() {
        let config = SnapConfig::default();
        assert_eq!(config.scan_line_limit, 30);
        assert_eq!(config.title_max_length, 50);
        assert_eq!(config.solutions_dir, "solutions");
        assert_eq!(config.fallback_name, "code-snippet");
    }

    #[test]
    fn save_and_load_config_roundtrip() {
        let dir = unique_temp_dir();
        let config_path = dir.join("nested").join("config.json");
        let config = SnapConfig {
            solutions_dir: "snippets".to_string(),
            ..SnapConfig::default()
        };

        save_config_to_path(&config_path, &config).expect("save config");
        assert_eq!(load_config_from_path(&config_path), config);

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn partial_config_fills_missing_fields() {
        let dir = unique_temp_dir();
        let config_path = dir.join("config.json");
        std::fs::write(&config_path, r#"{"scan_line_limit": 10}"#).expect("write config");

        let loaded = load_config_from_path(&config_path);
        assert_eq!(loaded.scan_line_limit, 10);
        assert_eq!(loaded.solutions_dir, "solutions");

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn bad_or_missing_config_falls_back_to_default() {
        let dir = unique_temp_dir();
        let config_path = dir.join("config.json");
        assert_eq!(load_config_from_path(&config_path), SnapConfig::default());

        std::fs::write(&config_path, "not-json").expect("write invalid config");
        assert_eq!(load_config_from_path(&config_path), SnapConfig::default());

        let _ = std::fs::remove_dir_all(dir);
    }
}
