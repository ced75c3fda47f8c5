use crate::system::config::APP_DIR;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// 필터를 덮어쓰는 환경 변수
pub const LOG_ENV: &str = "STUDENTKIT_LOG";

/// 로그 파일 경로 (`<cache_dir>/studentkit/studentkit.log`)
pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(APP_DIR).join("studentkit.log"))
}

/// 파일 로거 초기화
///
/// 터미널은 TUI가 점유하므로 파일로만 기록합니다.
/// 로그 파일을 열 수 없으면 로깅 없이 진행합니다 (None 반환).
pub fn init(default_filter: &str) -> Option<PathBuf> {
    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(default_filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .ok()?;

    Some(path)
}

fn build_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
