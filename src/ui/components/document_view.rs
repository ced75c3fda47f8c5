// Document view - 패널 문서를 줄 단위로 변환
//
// 캠퍼스 생활 탭 본문과 키트 패널 모달이 같은 변환을 사용합니다.
// 너비가 좁으면 긴 문단이 여러 줄로 나뉩니다.

use crate::models::Document;
use crate::ui::Theme;
use crate::utils::text_display::wrap_text;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

const BULLET: &str = "  • ";
const NOTE_MARK: &str = "  ↳ ";

/// 문서 렌더링 색상
#[derive(Debug, Clone, Copy)]
pub struct DocumentStyle {
    pub text: Color,
    pub heading: Color,
    pub muted: Color,
    pub link: Color,
}

impl DocumentStyle {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            text: theme.fg_primary.to_color(),
            heading: theme.accent.to_color(),
            muted: theme.fg_muted.to_color(),
            link: theme.link.to_color(),
        }
    }
}

impl Default for DocumentStyle {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

/// 접두어를 붙여 줄바꿈 (이어지는 줄은 접두어 너비만큼 들여쓰기)
fn push_prefixed(
    lines: &mut Vec<Line<'static>>,
    prefix: &str,
    text: &str,
    width: usize,
    style: Style,
    prefix_style: Style,
) {
    let indent = " ".repeat(prefix.width());
    let wrapped = wrap_text(text, width.saturating_sub(prefix.width()).max(1));
    if wrapped.is_empty() {
        lines.push(Line::from(Span::styled(prefix.to_string(), prefix_style)));
        return;
    }
    for (i, chunk) in wrapped.into_iter().enumerate() {
        let lead = if i == 0 { prefix.to_string() } else { indent.clone() };
        lines.push(Line::from(vec![
            Span::styled(lead, prefix_style),
            Span::styled(chunk, style),
        ]));
    }
}

fn push_wrapped(lines: &mut Vec<Line<'static>>, text: &str, width: usize, style: Style) {
    for chunk in wrap_text(text, width.max(1)) {
        lines.push(Line::from(Span::styled(chunk, style)));
    }
}

/// 문서를 주어진 너비의 줄 목록으로 변환
pub fn document_lines(
    document: &Document,
    width: usize,
    style: DocumentStyle,
) -> Vec<Line<'static>> {
    let text = Style::default().fg(style.text);
    let muted = Style::default().fg(style.muted);
    let heading = Style::default()
        .fg(style.heading)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();

    if let Some(intro) = &document.intro {
        push_wrapped(&mut lines, intro, width, text);
        lines.push(Line::default());
    }

    for section in &document.sections {
        push_wrapped(&mut lines, &section.heading, width, heading);
        if let Some(body) = &section.body {
            push_wrapped(&mut lines, body, width, text);
        }
        for item in &section.items {
            push_prefixed(&mut lines, BULLET, item, width, text, heading);
        }
        if let Some(note) = &section.note {
            push_prefixed(
                &mut lines,
                NOTE_MARK,
                note,
                width,
                muted.add_modifier(Modifier::ITALIC),
                muted,
            );
        }
        lines.push(Line::default());
    }

    if let Some(footer) = &document.footer {
        push_wrapped(&mut lines, footer, width, muted);
    }

    if let Some(link) = &document.link {
        push_prefixed(
            &mut lines,
            "→ ",
            link,
            width,
            Style::default()
                .fg(style.link)
                .add_modifier(Modifier::UNDERLINED),
            Style::default().fg(style.link),
        );
    }

    lines
}
