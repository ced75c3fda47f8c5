use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 색상 테마 시스템
///
/// 애플리케이션 전체의 색상 테마를 관리합니다.
/// TOML 파일에서 테마를 로드하거나 미리 정의된 테마를 사용할 수 있습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    // 배경/전경
    pub bg_primary: ColorDef,
    pub fg_primary: ColorDef,
    pub fg_muted: ColorDef,

    // 헤더 (섹션 내비게이션)
    pub header_bg: ColorDef,
    pub header_fg: ColorDef,

    // 카드
    pub card_border: ColorDef,
    pub card_focused_border: ColorDef,
    pub card_title: ColorDef,
    pub card_hint: ColorDef,

    // 탭
    pub tab_active_bg: ColorDef,
    pub tab_active_fg: ColorDef,
    pub tab_inactive_fg: ColorDef,

    // 모달
    pub modal_bg: ColorDef,
    pub modal_border: ColorDef,
    pub code_header_bg: ColorDef,

    // UI 컴포넌트
    pub status_bar_bg: ColorDef,
    pub status_bar_fg: ColorDef,
    pub command_bar_bg: ColorDef,
    pub command_bar_fg: ColorDef,

    // 강조
    pub accent: ColorDef,
    pub highlight: ColorDef,
    pub link: ColorDef,
    pub warning: ColorDef,
    pub error: ColorDef,
    pub success: ColorDef,
}

/// 색상 정의 (TOML 직렬화/역직렬화 지원)
///
/// Hex 문자열("#1e1e1e") 또는 색상 이름("Red")을 지원합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorDef {
    Hex(String),
    Named(String),
}

impl ColorDef {
    /// ColorDef를 ratatui의 Color로 변환
    ///
    /// untagged 역직렬화는 항상 `Hex`로 들어오므로 접두사로 판별합니다.
    pub fn to_color(&self) -> Color {
        let (ColorDef::Hex(value) | ColorDef::Named(value)) = self;
        if value.starts_with('#') {
            parse_hex_color(value)
        } else {
            parse_named_color(value)
        }
    }
}

impl From<&str> for ColorDef {
    fn from(s: &str) -> Self {
        if s.starts_with('#') {
            ColorDef::Hex(s.to_string())
        } else {
            ColorDef::Named(s.to_string())
        }
    }
}

/// Hex 색상 문자열을 Color로 파싱
fn parse_hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color::Rgb(r, g, b)
    } else {
        Color::Reset
    }
}

/// 색상 이름을 Color로 파싱
fn parse_named_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "white" => Color::White,
        _ => Color::Reset,
    }
}

impl Theme {
    /// Dark 테마 (기본)
    pub fn dark() -> Self {
        Theme {
            bg_primary: "#0d1117".into(),
            fg_primary: "#e6edf3".into(),
            fg_muted: "#7d8590".into(),

            header_bg: "#161b22".into(),
            header_fg: "#e6edf3".into(),

            card_border: "#30363d".into(),
            card_focused_border: "#58a6ff".into(),
            card_title: "#ffffff".into(),
            card_hint: "#3fb950".into(),

            tab_active_bg: "#1f6feb".into(),
            tab_active_fg: "#ffffff".into(),
            tab_inactive_fg: "#8b949e".into(),

            modal_bg: "#161b22".into(),
            modal_border: "#8957e5".into(),
            code_header_bg: "#21262d".into(),

            status_bar_bg: "#1f6feb".into(),
            status_bar_fg: "#ffffff".into(),
            command_bar_bg: "#161b22".into(),
            command_bar_fg: "#c9d1d9".into(),

            accent: "#58a6ff".into(),
            highlight: "#d2a8ff".into(),
            link: "#79c0ff".into(),
            warning: "#d29922".into(),
            error: "#f85149".into(),
            success: "#3fb950".into(),
        }
    }

    /// Light 테마
    pub fn light() -> Self {
        Theme {
            bg_primary: "#ffffff".into(),
            fg_primary: "#1f2328".into(),
            fg_muted: "#656d76".into(),

            header_bg: "#f6f8fa".into(),
            header_fg: "#1f2328".into(),

            card_border: "#d0d7de".into(),
            card_focused_border: "#0969da".into(),
            card_title: "#1f2328".into(),
            card_hint: "#1a7f37".into(),

            tab_active_bg: "#0969da".into(),
            tab_active_fg: "#ffffff".into(),
            tab_inactive_fg: "#656d76".into(),

            modal_bg: "#ffffff".into(),
            modal_border: "#8250df".into(),
            code_header_bg: "#eaeef2".into(),

            status_bar_bg: "#0969da".into(),
            status_bar_fg: "#ffffff".into(),
            command_bar_bg: "#f6f8fa".into(),
            command_bar_fg: "#1f2328".into(),

            accent: "#0969da".into(),
            highlight: "#8250df".into(),
            link: "#0550ae".into(),
            warning: "#9a6700".into(),
            error: "#cf222e".into(),
            success: "#1a7f37".into(),
        }
    }

    /// TOML 파일에서 테마 로드
    pub fn from_file(path: &Path) -> Result<Self, anyhow::Error> {
        let content = fs::read_to_string(path)?;
        let theme: Theme = toml::from_str(&content)?;
        Ok(theme)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// 테마 관리자
///
/// 현재 활성 테마를 관리하고 런타임에 테마를 전환합니다.
pub struct ThemeManager {
    current_name: String,
    current_theme: Theme,
    available_themes: Vec<(String, Theme)>,
}

impl ThemeManager {
    /// 기본 테마 관리자 생성 (Dark 테마)
    pub fn new() -> Self {
        Self {
            current_name: "dark".to_string(),
            current_theme: Theme::dark(),
            available_themes: vec![
                ("dark".to_string(), Theme::dark()),
                ("light".to_string(), Theme::light()),
            ],
        }
    }

    /// 현재 테마 반환
    pub fn current(&self) -> &Theme {
        &self.current_theme
    }

    /// 현재 테마 이름
    pub fn current_name(&self) -> &str {
        &self.current_name
    }

    pub fn is_dark(&self) -> bool {
        self.current_name == "dark"
    }

    /// 테마 전환 (이름으로)
    pub fn switch_theme(&mut self, name: &str) -> Result<(), String> {
        if let Some((found, theme)) = self.available_themes.iter().find(|(n, _)| n == name) {
            self.current_name = found.clone();
            self.current_theme = theme.clone();
            Ok(())
        } else {
            Err(format!("theme not found: {}", name))
        }
    }

    /// 다크/라이트 전환
    pub fn toggle_dark_light(&mut self) {
        let next = if self.is_dark() { "light" } else { "dark" };
        // dark/light는 항상 등록되어 있음
        let _ = self.switch_theme(next);
    }

    /// 커스텀 테마 추가. 같은 이름이 있으면 교체
    pub fn add_theme(&mut self, name: String, theme: Theme) {
        if name == self.current_name {
            self.current_theme = theme.clone();
        }
        match self.available_themes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = theme,
            None => self.available_themes.push((name, theme)),
        }
    }

    /// 디렉토리의 *.toml 테마 파일 로드
    ///
    /// 파싱에 실패한 파일은 건너뜁니다. 로드한 테마 수를 반환합니다.
    pub fn load_themes_from_dir(&mut self, themes_dir: &Path) -> Result<usize, anyhow::Error> {
        if !themes_dir.exists() {
            return Ok(0);
        }

        let mut loaded = 0;
        for entry in fs::read_dir(themes_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                continue;
            }
            match Theme::from_file(&path) {
                Ok(theme) => {
                    let name = path
                        .file_stem()
                        .and_then(|s| s.to_str())
                        .unwrap_or("custom")
                        .to_string();
                    self.add_theme(name, theme);
                    loaded += 1;
                }
                Err(err) => tracing::warn!(path = %path.display(), %err, "skipping theme file"),
            }
        }

        Ok(loaded)
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}
