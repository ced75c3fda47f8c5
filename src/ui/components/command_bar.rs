// Command bar component - 하단 커맨드 바 컴포넌트
//
// 현재 화면에서 쓸 수 있는 단축키 표시. 폭이 모자라면 우선순위가 낮은 뒤쪽 항목부터 생략

use crate::core::actions::generate_command_bar_items;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 항목 사이 간격
const GAP: &str = "  ";
/// 오른쪽 끝 도움말 힌트
const HELP_HINT: &str = "?:Help ";

/// 커맨드 항목 (단축키 + 레이블)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandItem {
    pub key: String,
    pub label: String,
}

impl CommandItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }

    /// "key:label" 표시 폭
    fn width(&self) -> usize {
        self.key.width() + 1 + self.label.width()
    }
}

/// 커맨드 바 컴포넌트
pub struct CommandBar {
    commands: Vec<CommandItem>,
    bg_color: Color,
    key_color: Color,
    label_color: Color,
    hint_color: Color,
}

impl Default for CommandBar {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandBar {
    /// 액션 레지스트리 기반 기본 목록
    pub fn new() -> Self {
        let theme = Theme::default();
        Self {
            commands: generate_command_bar_items(),
            bg_color: theme.command_bar_bg.to_color(),
            key_color: theme.accent.to_color(),
            label_color: theme.command_bar_fg.to_color(),
            hint_color: theme.fg_muted.to_color(),
        }
    }

    /// 패널(모달)이 열려 있을 때의 커맨드 목록
    pub fn panel_commands() -> Vec<CommandItem> {
        vec![
            CommandItem::new("Esc", "Close"),
            CommandItem::new("j/k", "Scroll"),
            CommandItem::new("PgUp/PgDn", "Page"),
            CommandItem::new("t", "Theme"),
        ]
    }

    pub fn commands(mut self, commands: Vec<CommandItem>) -> Self {
        self.commands = commands;
        self
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.command_bar_bg.to_color();
        self.key_color = theme.accent.to_color();
        self.label_color = theme.command_bar_fg.to_color();
        self.hint_color = theme.fg_muted.to_color();
        self
    }

    /// 주어진 폭 안에 들어가는 앞쪽 항목 수
    fn fitting_count(&self, width: usize) -> usize {
        let mut used = 1; // 왼쪽 패딩
        self.commands
            .iter()
            .enumerate()
            .take_while(|(i, cmd)| {
                used += cmd.width() + if *i > 0 { GAP.len() } else { 0 };
                used <= width
            })
            .count()
    }
}

impl Widget for CommandBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let width = usize::from(area.width);
        // 힌트 자리가 남을 때만 오른쪽에 표시
        let hint_fits =
            self.fitting_count(width.saturating_sub(HELP_HINT.len())) == self.commands.len();
        let budget = if hint_fits {
            width.saturating_sub(HELP_HINT.len())
        } else {
            width
        };
        let shown = self.fitting_count(budget);

        let key_style = Style::default()
            .fg(self.key_color)
            .add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(self.label_color);

        let mut spans = vec![Span::raw(" ")];
        for (i, cmd) in self.commands.iter().take(shown).enumerate() {
            if i > 0 {
                spans.push(Span::raw(GAP));
            }
            spans.push(Span::styled(cmd.key.clone(), key_style));
            spans.push(Span::styled(format!(":{}", cmd.label), label_style));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);

        if hint_fits && area.width as usize >= HELP_HINT.len() {
            let x = area.x + area.width - HELP_HINT.len() as u16;
            buf.set_string(x, area.y, HELP_HINT, Style::default().fg(self.hint_color));
        }
    }
}
