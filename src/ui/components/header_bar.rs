// Header bar component - 상단 헤더 컴포넌트
//
// 앱 이름과 섹션 내비게이션 표시

use crate::ui::layout::Section;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// 헤더 왼쪽에 표시되는 앱 이름
const APP_NAME: &str = "StudentKit";

/// 헤더 컴포넌트
pub struct HeaderBar {
    /// 현재 섹션
    current: Section,
    /// 배경색
    bg_color: Color,
    /// 전경색
    fg_color: Color,
    /// 선택된 섹션 배경색
    selected_bg: Color,
    /// 선택된 섹션 전경색
    selected_fg: Color,
}

impl Default for HeaderBar {
    fn default() -> Self {
        Self {
            current: Section::Landing,
            bg_color: Color::Rgb(22, 27, 34),
            fg_color: Color::Rgb(201, 209, 217),
            selected_bg: Color::Rgb(88, 166, 255),
            selected_fg: Color::Rgb(13, 17, 23),
        }
    }
}

impl HeaderBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// 현재 섹션 설정
    pub fn current(mut self, section: Section) -> Self {
        self.current = section;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.header_bg.to_color();
        self.fg_color = theme.header_fg.to_color();
        self.selected_bg = theme.accent.to_color();
        self.selected_fg = theme.bg_primary.to_color();
        self
    }
}

impl Widget for HeaderBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // 배경 채우기
        buf.set_style(area, Style::default().bg(self.bg_color));

        let mut spans = vec![Span::styled(
            format!("[{}] ", APP_NAME),
            Style::default()
                .fg(self.fg_color)
                .add_modifier(Modifier::BOLD),
        )];

        for (i, section) in Section::ALL.iter().enumerate() {
            let style = if *section == self.current {
                Style::default()
                    .fg(self.selected_fg)
                    .bg(self.selected_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.fg_color)
            };

            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(format!(" {} ", section.title()), style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, area: Rect) -> String {
        (0..area.width)
            .filter_map(|x| buf.cell((x, 0)).map(|c| c.symbol().to_string()))
            .collect()
    }

    #[test]
    fn test_header_bar_creation() {
        let header = HeaderBar::new().current(Section::Kit);
        assert_eq!(header.current, Section::Kit);
    }

    #[test]
    fn test_header_lists_sections_in_order() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        HeaderBar::new().render(area, &mut buf);

        let text = row_text(&buf, area);
        assert!(text.starts_with("[StudentKit]"));
        let welcome = text.find("Welcome").unwrap();
        let life = text.find("Life @ IIIT-H").unwrap();
        let kit = text.find("Student Kit").unwrap();
        assert!(welcome < life && life < kit);
    }

    #[test]
    fn test_current_section_is_highlighted() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        let header = HeaderBar::new().current(Section::Life);
        let selected_bg = header.selected_bg;
        header.render(area, &mut buf);

        // "[StudentKit] " + " Welcome " + 구분 공백 다음 칸부터 Life 항목
        let x = ("[StudentKit] ".len() + " Welcome ".len() + 1) as u16;
        let cell = buf.cell((x + 1, 0)).expect("cell in range");
        assert_eq!(cell.symbol(), "L");
        assert_eq!(cell.bg, selected_bg);
    }
}
