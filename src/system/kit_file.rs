//! 학생 키트 데이터 파일 (TOML)
//!
//! 랜딩 문구, 캠퍼스 생활 탭 카탈로그, 키트 카드 카탈로그, 문서 본문을
//! 하나의 파일에서 읽어 검증합니다. 기본 파일은 바이너리에 포함됩니다.

use crate::models::{Catalog, ContentLibrary, ContentRef, PanelDescriptor};
use crate::utils::error::{Result, StudentKitError};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::rc::Rc;
use tracing::{info, warn};

/// 내장 기본 키트 파일
pub const BUILTIN_KIT: &str = include_str!("../../assets/student_kit.toml");

/// 랜딩 화면 문구
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LandingInfo {
    pub title: String,
    #[serde(default)]
    pub rotating_words: Vec<String>,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub command: String,
    #[serde(default)]
    pub tagline: String,
}

#[derive(Debug, Deserialize)]
struct KitFile {
    landing: LandingInfo,
    #[serde(default)]
    life: Vec<PanelDescriptor>,
    #[serde(default)]
    kit: Vec<PanelDescriptor>,
    #[serde(default)]
    content: ContentLibrary,
}

/// 검증이 끝난 키트 데이터
#[derive(Debug, Clone)]
pub struct StudentKit {
    pub landing: LandingInfo,
    pub life: Rc<Catalog>,
    pub kit: Rc<Catalog>,
    pub content: ContentLibrary,
}

impl StudentKit {
    /// 내장 키트 로드
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_KIT, "<builtin>")
    }

    /// 파일에서 키트 로드
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|e| {
            StudentKitError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::parse(&source, &path.display().to_string())
    }

    /// TOML 문자열 파싱 + 카탈로그 검증
    pub fn parse(source: &str, origin: &str) -> Result<Self> {
        let file: KitFile = toml::from_str(source)
            .map_err(|e| StudentKitError::Config(format!("{}: {}", origin, e)))?;

        let life = Catalog::new(file.life)?;
        let kit = Catalog::new(file.kit)?;

        let kit = Self {
            landing: file.landing,
            life: Rc::new(life),
            kit: Rc::new(kit),
            content: file.content,
        };

        for (panel_id, content_ref) in kit.dangling_refs() {
            warn!(panel = panel_id, content = %content_ref, "content not found, placeholder will be shown");
        }
        info!(
            origin,
            life_tabs = kit.life.len(),
            kit_panels = kit.kit.len(),
            documents = kit.content.len(),
            "student kit loaded"
        );
        Ok(kit)
    }

    /// 콘텐츠 라이브러리에 없는 참조 목록 (패널 ID, 참조)
    pub fn dangling_refs(&self) -> Vec<(&str, &ContentRef)> {
        self.life
            .iter()
            .chain(self.kit.iter())
            .filter(|panel| !self.content.contains(&panel.content_ref))
            .map(|panel| (panel.id.as_str(), &panel.content_ref))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SelectionError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MINIMAL: &str = r#"
[landing]
title = "Welcome to"

[[life]]
id = "academics"
label = "Academics"
content = "life_academics"

[[kit]]
id = "documents"
label = "Documents Required"
content = "documents"

[[kit]]
id = "faq"
label = "FAQ"
content = "faq"

[content.life_academics]
file_name = "academics.md"

[content.documents]
file_name = "documents_required.md"
"#;

    #[test]
    fn test_builtin_kit_is_valid() {
        let kit = StudentKit::builtin().unwrap();
        assert_eq!(kit.life.len(), 5);
        assert_eq!(kit.kit.len(), 11);
        assert_eq!(kit.life.at(0).map(|p| p.id.as_str()), Some("academics"));
        assert!(kit.kit.position("schedule").is_some());
        assert!(kit.dangling_refs().is_empty());
        assert!(!kit.landing.rotating_words.is_empty());
    }

    #[test]
    fn test_parse_minimal_reports_dangling_refs() {
        let kit = StudentKit::parse(MINIMAL, "test").unwrap();
        assert_eq!(kit.dangling_refs().len(), 1);
        assert_eq!(kit.dangling_refs()[0].0, "faq");
    }

    #[test]
    fn test_duplicate_kit_ids_rejected() {
        let source = MINIMAL.replace("id = \"faq\"", "id = \"documents\"");
        let err = StudentKit::parse(&source, "test").unwrap_err();
        assert!(matches!(
            err,
            StudentKitError::Selection(SelectionError::InvalidCatalog { .. })
        ));
    }

    #[test]
    fn test_syntax_error_mentions_origin() {
        let err = StudentKit::parse("[landing", "broken.toml").unwrap_err();
        match err {
            StudentKitError::Config(message) => assert!(message.starts_with("broken.toml")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();

        let kit = StudentKit::load(file.path()).unwrap();
        assert_eq!(kit.kit.len(), 2);
        assert_eq!(kit.landing.title, "Welcome to");
    }

    #[test]
    fn test_load_missing_file() {
        let err = StudentKit::load(Path::new("/nonexistent/student_kit.toml")).unwrap_err();
        assert!(matches!(err, StudentKitError::Config(_)));
    }
}
