// Warning screen component - 경고 화면 컴포넌트
//
// 터미널이 최소 크기보다 작으면 본문 대신 표시

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::ui::layout::{MIN_HEIGHT, MIN_WIDTH};
use crate::ui::Theme;

#[derive(Debug, Clone, Copy)]
struct WarningPalette {
    bg: Color,
    fg: Color,
    muted: Color,
    accent: Color,
    too_small: Color,
    enough: Color,
}

impl From<&Theme> for WarningPalette {
    fn from(theme: &Theme) -> Self {
        Self {
            bg: theme.bg_primary.to_color(),
            fg: theme.fg_primary.to_color(),
            muted: theme.fg_muted.to_color(),
            accent: theme.warning.to_color(),
            too_small: theme.error.to_color(),
            enough: theme.success.to_color(),
        }
    }
}

/// "터미널이 너무 작음" 화면
pub struct WarningScreen {
    /// 현재 터미널 크기
    current_size: (u16, u16),
    palette: WarningPalette,
}

impl Default for WarningScreen {
    fn default() -> Self {
        Self {
            current_size: (0, 0),
            palette: WarningPalette::from(&Theme::default()),
        }
    }
}

impl WarningScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// 현재 터미널 크기 설정
    pub fn current_size(mut self, width: u16, height: u16) -> Self {
        self.current_size = (width, height);
        self
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.palette = WarningPalette::from(theme);
        self
    }

    fn size_line(&self, label: &'static str, size: (u16, u16), color: Color) -> Line<'static> {
        Line::from(vec![
            Span::styled(label, Style::default().fg(self.palette.muted)),
            Span::styled(
                format!("{}x{}", size.0, size.1),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ])
    }
}

impl Widget for WarningScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        buf.set_style(area, Style::default().bg(p.bg));

        let bold_accent = Style::default().fg(p.accent).add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::from(Span::styled("$ stty size", Style::default().fg(p.muted))),
            Line::from(""),
            Line::from(Span::styled("Terminal Too Small", bold_accent)),
            Line::from(""),
            self.size_line("now  ", self.current_size, p.too_small),
            self.size_line("need ", (MIN_WIDTH, MIN_HEIGHT), p.enough),
            Line::from(""),
            Line::from(Span::styled(
                "Resize to open the student kit",
                Style::default().fg(p.fg).add_modifier(Modifier::DIM),
            )),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" ⚠ ")
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(p.accent))
            .style(Style::default().bg(p.bg));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}
