use crate::utils::error::{Result, StudentKitError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 설정/캐시 디렉토리 이름
pub const APP_DIR: &str = "studentkit";

/// 사용자 설정 (`<config_dir>/studentkit/config.toml`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitConfig {
    /// 시작 테마 이름 (dark, light 또는 themes/ 아래 파일 이름)
    pub theme: String,
    /// 키트 데이터 파일 경로 (없으면 내장 파일)
    pub kit_file: Option<PathBuf>,
    /// tracing 필터 (예: "info", "studentkit=debug")
    pub log_filter: String,
}

impl Default for KitConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            kit_file: None,
            log_filter: "info".to_string(),
        }
    }
}

impl KitConfig {
    /// 설정 디렉토리
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR))
    }

    /// 사용자 테마 디렉토리
    pub fn themes_dir() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("themes"))
    }

    /// 기본 위치에서 설정 로드. 파일이 없으면 기본값
    pub fn load() -> Result<Self> {
        match Self::config_dir() {
            Some(dir) => Self::load_or_default(&dir.join("config.toml")),
            None => Ok(Self::default()),
        }
    }

    /// 지정한 경로에서 로드. 파일이 없으면 기본값
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| StudentKitError::Config(format!("{}: {}", path.display(), e)))
    }
}
