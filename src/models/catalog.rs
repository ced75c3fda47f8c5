use crate::models::selection::SelectionError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// 패널 콘텐츠 참조
///
/// 컨트롤러는 내용을 해석하지 않고, 렌더 계층이 [`ContentLibrary`]에서 조회합니다.
///
/// [`ContentLibrary`]: crate::models::content::ContentLibrary
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentRef(String);

impl ContentRef {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 패널 정의 (카드 한 장, 또는 탭 하나)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelDescriptor {
    /// 고유 ID (비어 있으면 안 됨)
    pub id: String,
    /// 표시 이름
    pub label: String,
    /// 콘텐츠 참조
    #[serde(rename = "content")]
    pub content_ref: ContentRef,
    /// 카드 설명 (선택)
    #[serde(default)]
    pub description: String,
    /// 터미널 스타일 힌트 (예: `$ ls Documents`)
    #[serde(default)]
    pub hint: String,
}

impl PanelDescriptor {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        content_ref: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            content_ref: ContentRef::new(content_ref),
            description: String::new(),
            hint: String::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }
}

/// 고정된 패널 목록 (순서 유지, ID 중복 없음)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    panels: Vec<PanelDescriptor>,
}

impl Catalog {
    /// 카탈로그 생성
    ///
    /// 빈 ID 또는 중복 ID가 있으면 `InvalidCatalog`
    pub fn new(panels: Vec<PanelDescriptor>) -> Result<Self, SelectionError> {
        let mut seen = HashSet::with_capacity(panels.len());
        for (index, panel) in panels.iter().enumerate() {
            if panel.id.trim().is_empty() {
                return Err(SelectionError::InvalidCatalog {
                    reason: format!("panel #{} has an empty id", index + 1),
                });
            }
            if !seen.insert(panel.id.as_str()) {
                return Err(SelectionError::InvalidCatalog {
                    reason: format!("duplicate panel id '{}'", panel.id),
                });
            }
        }
        Ok(Self { panels })
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.panels.iter().position(|panel| panel.id == id)
    }

    pub fn at(&self, index: usize) -> Option<&PanelDescriptor> {
        self.panels.get(index)
    }

    pub fn as_slice(&self) -> &[PanelDescriptor] {
        &self.panels
    }

    pub fn iter(&self) -> impl Iterator<Item = &PanelDescriptor> {
        self.panels.iter()
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panels(ids: &[&str]) -> Vec<PanelDescriptor> {
        ids.iter()
            .map(|id| PanelDescriptor::new(*id, id.to_uppercase(), *id))
            .collect()
    }

    #[test]
    fn test_catalog_keeps_order() {
        let catalog = Catalog::new(panels(&["documents", "schedule", "hotels"])).unwrap();
        let ids: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["documents", "schedule", "hotels"]);
        assert_eq!(catalog.position("hotels"), Some(2));
        assert_eq!(catalog.at(0).map(|p| p.id.as_str()), Some("documents"));
        assert_eq!(catalog.position("missing"), None);
    }

    #[test]
    fn test_catalog_rejects_duplicate_ids() {
        let err = Catalog::new(panels(&["a", "b", "a"])).unwrap_err();
        assert!(matches!(err, SelectionError::InvalidCatalog { .. }));
        assert!(err.to_string().contains("'a'"));
    }

    #[test]
    fn test_catalog_rejects_empty_id() {
        let err = Catalog::new(panels(&["a", "  "])).unwrap_err();
        assert!(matches!(err, SelectionError::InvalidCatalog { .. }));
    }

    #[test]
    fn test_empty_catalog_is_allowed() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.at(0).is_none());
    }

    #[test]
    fn test_descriptor_deserializes_content_key() {
        let panel: PanelDescriptor = toml::from_str(
            r#"
id = "hotels"
label = "Hotels near IIIT-H"
content = "hotels"
hint = "$ curl localhost:3000/hotels"
"#,
        )
        .unwrap();
        assert_eq!(panel.content_ref.as_str(), "hotels");
        assert_eq!(panel.hint, "$ curl localhost:3000/hotels");
        assert!(panel.description.is_empty());
    }
}
