// Status bar component - 상태바 컴포넌트
//
// 현재 섹션, 포커스/선택 위치, 토스트 메시지, 테마 이름 표시

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 상태바 컴포넌트
pub struct StatusBar<'a> {
    /// 현재 섹션 이름
    section: &'a str,
    /// 섹션별 위치 정보 (예: "3/11 Documents Required")
    position: Option<&'a str>,
    /// 열린 패널 이름
    selected: Option<&'a str>,
    /// 토스트 메시지
    toast: Option<&'a str>,
    /// 대기 중인 시퀀스 키 표시
    pending_key: Option<&'a str>,
    /// 테마 이름
    theme_name: &'a str,
    /// 배경색
    bg_color: Color,
    /// 전경색
    fg_color: Color,
    /// 강조색 (섹션, 선택)
    accent_color: Color,
    /// 토스트 색상
    toast_color: Color,
    /// 보조 텍스트 색상
    muted_color: Color,
}

impl Default for StatusBar<'_> {
    fn default() -> Self {
        Self {
            section: "",
            position: None,
            selected: None,
            toast: None,
            pending_key: None,
            theme_name: "dark",
            bg_color: Color::Rgb(22, 27, 34),
            fg_color: Color::Rgb(201, 209, 217),
            accent_color: Color::Rgb(88, 166, 255),
            toast_color: Color::Rgb(210, 153, 34),
            muted_color: Color::Rgb(110, 118, 129),
        }
    }
}

impl<'a> StatusBar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 섹션 이름 설정
    pub fn section(mut self, section: &'a str) -> Self {
        self.section = section;
        self
    }

    /// 위치 정보 설정
    pub fn position(mut self, position: Option<&'a str>) -> Self {
        self.position = position;
        self
    }

    /// 열린 패널 설정
    pub fn selected(mut self, selected: Option<&'a str>) -> Self {
        self.selected = selected;
        self
    }

    /// 토스트 메시지 설정
    pub fn toast(mut self, toast: Option<&'a str>) -> Self {
        self.toast = toast;
        self
    }

    /// 대기 키 설정
    pub fn pending_key(mut self, pending_key: Option<&'a str>) -> Self {
        self.pending_key = pending_key;
        self
    }

    /// 테마 이름 설정
    pub fn theme_name(mut self, name: &'a str) -> Self {
        self.theme_name = name;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.status_bar_bg.to_color();
        self.fg_color = theme.status_bar_fg.to_color();
        self.accent_color = theme.accent.to_color();
        self.toast_color = theme.warning.to_color();
        self.muted_color = theme.fg_muted.to_color();
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // 배경 채우기
        buf.set_style(area, Style::default().bg(self.bg_color));

        let mut spans = vec![Span::styled(
            format!(" {} ", self.section),
            Style::default()
                .fg(self.accent_color)
                .add_modifier(Modifier::BOLD),
        )];
        let mut left_width = self.section.width() + 2;

        if let Some(position) = self.position {
            let text = format!("| {} ", position);
            left_width += text.width();
            spans.push(Span::styled(text, Style::default().fg(self.fg_color)));
        }

        if let Some(selected) = self.selected {
            let text = format!("| open: {} ", selected);
            left_width += text.width();
            spans.push(Span::styled(text, Style::default().fg(self.accent_color)));
        }

        // 토스트가 있으면 위치 정보 뒤에 표시
        if let Some(toast) = self.toast {
            let text = format!("| {} ", toast);
            left_width += text.width();
            spans.push(Span::styled(
                text,
                Style::default()
                    .fg(self.toast_color)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        // 오른쪽 정보: 대기 키 + 테마
        let right_info = match self.pending_key {
            Some(key) => format!("{} [{}] ", key, self.theme_name),
            None => format!("[{}] ", self.theme_name),
        };

        let padding_len = (area.width as usize).saturating_sub(left_width + right_info.width());
        spans.push(Span::raw(" ".repeat(padding_len)));
        spans.push(Span::styled(right_info, Style::default().fg(self.muted_color)));

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_line(bar: StatusBar<'_>, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);
        (0..width)
            .filter_map(|x| buf.cell((x, 0)).map(|c| c.symbol().to_string()))
            .collect()
    }

    #[test]
    fn test_status_bar_creation() {
        let status_bar = StatusBar::new()
            .section("Student Kit")
            .position(Some("4/11"))
            .theme_name("light");

        assert_eq!(status_bar.section, "Student Kit");
        assert_eq!(status_bar.position, Some("4/11"));
        assert_eq!(status_bar.theme_name, "light");
        assert!(status_bar.selected.is_none());
    }

    #[test]
    fn test_status_bar_renders_selection_and_toast() {
        let line = render_line(
            StatusBar::new()
                .section("Student Kit")
                .selected(Some("Documents Required"))
                .toast(Some("Theme: light")),
            100,
        );
        assert!(line.contains("Student Kit"));
        assert!(line.contains("open: Documents Required"));
        assert!(line.contains("Theme: light"));
        assert!(line.trim_end().ends_with("[dark]"));
    }

    #[test]
    fn test_status_bar_pending_key() {
        let line = render_line(StatusBar::new().section("Welcome").pending_key(Some("g_")), 40);
        assert!(line.contains("g_ [dark]"));
    }
}
