use crate::models::catalog::{ContentRef, PanelDescriptor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 문서 안의 한 구역 (제목 + 항목들)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSection {
    pub heading: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub note: Option<String>,
}

/// 패널 하나의 정적 콘텐츠
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// 모달 상단 코드 헤더에 표시되는 파일 이름
    pub file_name: String,
    #[serde(default)]
    pub intro: Option<String>,
    #[serde(default)]
    pub sections: Vec<DocumentSection>,
    #[serde(default)]
    pub footer: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl Document {
    /// 콘텐츠가 아직 없는 패널용 안내 문서
    pub fn placeholder(panel: &PanelDescriptor) -> Self {
        let title = panel.label.to_lowercase();
        let file_stem = title.split_whitespace().collect::<Vec<_>>().join("_");
        Self {
            file_name: format!("{}.md", file_stem),
            intro: Some(format!(
                "This section will contain detailed information about {}.",
                title
            )),
            sections: Vec::new(),
            footer: Some("// Content for this section is on its way.".to_string()),
            link: None,
        }
    }
}

/// 콘텐츠 참조 → 문서 매핑
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentLibrary {
    documents: BTreeMap<String, Document>,
}

impl ContentLibrary {

    pub fn get(&self, content_ref: &ContentRef) -> Option<&Document> {
        self.documents.get(content_ref.as_str())
    }

    pub fn contains(&self, content_ref: &ContentRef) -> bool {
        self.documents.contains_key(content_ref.as_str())
    }

    /// 패널의 문서를 조회하고, 없으면 안내 문서를 만듭니다
    pub fn resolve(&self, panel: &PanelDescriptor) -> std::borrow::Cow<'_, Document> {
        match self.get(&panel.content_ref) {
            Some(document) => std::borrow::Cow::Borrowed(document),
            None => std::borrow::Cow::Owned(Document::placeholder(panel)),
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }
}
