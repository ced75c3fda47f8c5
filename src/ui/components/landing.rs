// Landing component - 첫 화면
//
// 환영 문구, 순환 단어, 터미널 프롬프트 박스 표시

use crate::system::LandingInfo;
use crate::ui::Theme;
use crate::utils::text_display::wrap_text;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// 프롬프트 박스 최대 너비
const PROMPT_BOX_MAX_WIDTH: u16 = 72;

/// 랜딩 화면 컴포넌트
pub struct Landing<'a> {
    info: &'a LandingInfo,
    /// 현재 표시할 순환 단어 인덱스
    word_index: usize,
    bg_color: Color,
    fg_color: Color,
    accent_color: Color,
    muted_color: Color,
    border_color: Color,
    header_bg: Color,
    success_color: Color,
}

impl<'a> Landing<'a> {
    pub fn new(info: &'a LandingInfo) -> Self {
        let theme = Theme::dark();
        Self {
            info,
            word_index: 0,
            bg_color: theme.bg_primary.to_color(),
            fg_color: theme.fg_primary.to_color(),
            accent_color: theme.highlight.to_color(),
            muted_color: theme.fg_muted.to_color(),
            border_color: theme.card_border.to_color(),
            header_bg: theme.code_header_bg.to_color(),
            success_color: theme.success.to_color(),
        }
    }

    /// 순환 단어 인덱스 설정 (단어 수로 나머지 연산)
    pub fn word_index(mut self, index: usize) -> Self {
        self.word_index = index;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.bg_primary.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.accent_color = theme.highlight.to_color();
        self.muted_color = theme.fg_muted.to_color();
        self.border_color = theme.card_border.to_color();
        self.header_bg = theme.code_header_bg.to_color();
        self.success_color = theme.success.to_color();
        self
    }

    /// 현재 순환 단어
    pub fn current_word(&self) -> &str {
        let words = &self.info.rotating_words;
        if words.is_empty() {
            return "";
        }
        &words[self.word_index % words.len()]
    }

    fn render_prompt_box(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color))
            .style(Style::default().bg(self.bg_color));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        // 창 제목줄 (● ● ●)
        let title_area = Rect { height: 1, ..inner };
        buf.set_style(title_area, Style::default().bg(self.header_bg));
        Paragraph::new(Line::from(vec![
            Span::styled(" ● ", Style::default().fg(Color::Rgb(255, 95, 86))),
            Span::styled("● ", Style::default().fg(Color::Rgb(255, 189, 46))),
            Span::styled("● ", Style::default().fg(Color::Rgb(39, 201, 63))),
            Span::styled(" terminal", Style::default().fg(self.muted_color)),
        ]))
        .render(title_area, buf);

        let mut lines = vec![Line::from(vec![
            Span::styled(
                format!("{} ", self.info.prompt),
                Style::default()
                    .fg(self.success_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(self.info.command.clone(), Style::default().fg(self.fg_color)),
        ])];
        for chunk in wrap_text(&self.info.tagline, inner.width.saturating_sub(2) as usize) {
            lines.push(Line::from(Span::styled(
                format!("> {}", chunk),
                Style::default().fg(self.muted_color),
            )));
        }

        let body = Rect {
            x: inner.x + 1,
            y: inner.y + 2,
            width: inner.width.saturating_sub(1),
            height: inner.height.saturating_sub(2),
        };
        Paragraph::new(lines).render(body, buf);
    }
}

impl Widget for Landing<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(20),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(8),
                Constraint::Min(1),
            ])
            .split(area);

        let hero = vec![
            Line::from(Span::styled(
                self.info.title.clone(),
                Style::default().fg(self.fg_color),
            )),
            Line::from(Span::styled(
                self.current_word().to_string(),
                Style::default()
                    .fg(self.accent_color)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        Paragraph::new(hero)
            .alignment(Alignment::Center)
            .render(chunks[1], buf);

        let box_width = PROMPT_BOX_MAX_WIDTH.min(area.width.saturating_sub(4));
        let box_area = Rect {
            x: area.x + (area.width.saturating_sub(box_width)) / 2,
            width: box_width,
            ..chunks[3]
        };
        self.render_prompt_box(box_area, buf);

        Paragraph::new(Line::from(Span::styled(
            "Press Tab to explore  ·  ? for help",
            Style::default().fg(self.muted_color),
        )))
        .alignment(Alignment::Center)
        .render(chunks[4], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info() -> LandingInfo {
        LandingInfo {
            title: "Welcome to".to_string(),
            rotating_words: vec!["Coding".to_string(), "IIIT-H !!".to_string()],
            prompt: "student@iiith:~$".to_string(),
            command: "./start_journey.sh".to_string(),
            tagline: "Everything you need.".to_string(),
        }
    }

    fn buffer_text(buf: &Buffer, area: Rect) -> String {
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                if let Some(cell) = buf.cell((x, y)) {
                    text.push_str(cell.symbol());
                }
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_current_word_wraps_around() {
        let info = info();
        assert_eq!(Landing::new(&info).current_word(), "Coding");
        assert_eq!(Landing::new(&info).word_index(1).current_word(), "IIIT-H !!");
        assert_eq!(Landing::new(&info).word_index(2).current_word(), "Coding");
    }

    #[test]
    fn test_no_words_is_empty() {
        let mut info = info();
        info.rotating_words.clear();
        assert_eq!(Landing::new(&info).word_index(5).current_word(), "");
    }

    #[test]
    fn test_render_shows_prompt_and_word() {
        let info = info();
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        Landing::new(&info).word_index(1).render(area, &mut buf);

        let text = buffer_text(&buf, area);
        assert!(text.contains("Welcome to"));
        assert!(text.contains("IIIT-H !!"));
        assert!(text.contains("student@iiith:~$ ./start_journey.sh"));
        assert!(text.contains("> Everything you need."));
    }
}
