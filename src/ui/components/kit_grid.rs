// Kit grid component - 키트 카드 그리드
//
// 카드 하나 = 힌트(명령어) + 제목 + 설명. 포커스 카드는 강조 테두리,
// 현재 열린 패널의 카드는 굵은 테두리로 표시합니다.

use crate::models::{Catalog, PanelDescriptor};
use crate::ui::layout::CARD_HEIGHT;
use crate::ui::Theme;
use crate::utils::text_display::{truncate_end, wrap_text};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// 카드 사이 가로 간격
const CARD_GAP: u16 = 1;

/// 키트 카드 그리드 컴포넌트
pub struct KitGrid<'a> {
    catalog: &'a Catalog,
    /// 포커스 카드 인덱스
    focus: usize,
    /// 열린 패널 ID
    selected_id: Option<&'a str>,
    /// 열 수
    columns: usize,
    bg_color: Color,
    border_color: Color,
    focused_border_color: Color,
    title_color: Color,
    hint_color: Color,
    fg_color: Color,
}

impl<'a> KitGrid<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        let theme = Theme::dark();
        Self {
            catalog,
            focus: 0,
            selected_id: None,
            columns: 1,
            bg_color: theme.bg_primary.to_color(),
            border_color: theme.card_border.to_color(),
            focused_border_color: theme.card_focused_border.to_color(),
            title_color: theme.card_title.to_color(),
            hint_color: theme.card_hint.to_color(),
            fg_color: theme.fg_muted.to_color(),
        }
    }

    /// 포커스 인덱스 설정
    pub fn focus(mut self, focus: usize) -> Self {
        self.focus = focus;
        self
    }

    /// 열린 패널 설정
    pub fn selected_id(mut self, id: Option<&'a str>) -> Self {
        self.selected_id = id;
        self
    }

    /// 열 수 설정 (최소 1)
    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.bg_primary.to_color();
        self.border_color = theme.card_border.to_color();
        self.focused_border_color = theme.card_focused_border.to_color();
        self.title_color = theme.card_title.to_color();
        self.hint_color = theme.card_hint.to_color();
        self.fg_color = theme.fg_muted.to_color();
        self
    }

    /// 포커스 카드가 보이도록 하는 첫 행
    pub fn first_visible_row(&self, visible_rows: usize) -> usize {
        let focus_row = self.focus / self.columns;
        focus_row.saturating_sub(visible_rows.max(1) - 1)
    }

    fn render_card(&self, panel: &PanelDescriptor, focused: bool, area: Rect, buf: &mut Buffer) {
        let selected = self.selected_id == Some(panel.id.as_str());
        let border_style = if focused {
            Style::default()
                .fg(self.focused_border_color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.border_color)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if selected {
                BorderType::Double
            } else {
                BorderType::Rounded
            })
            .border_style(border_style)
            .style(Style::default().bg(self.bg_color));
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width.saturating_sub(2) as usize;
        let mut lines = vec![
            Line::from(Span::styled(
                truncate_end(&panel.hint, width),
                Style::default().fg(self.hint_color),
            )),
            Line::from(Span::styled(
                truncate_end(&panel.label, width),
                Style::default()
                    .fg(self.title_color)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        let description_rows = inner.height.saturating_sub(2) as usize;
        let wrapped = wrap_text(&panel.description, width);
        let overflow = wrapped.len() > description_rows;
        for (i, chunk) in wrapped.into_iter().take(description_rows).enumerate() {
            let text = if overflow && i + 1 == description_rows {
                truncate_end(&format!("{} ...", chunk), width)
            } else {
                chunk
            };
            lines.push(Line::from(Span::styled(
                text,
                Style::default().fg(self.fg_color),
            )));
        }

        let text_area = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            ..inner
        };
        Paragraph::new(lines).render(text_area, buf);
    }
}

impl Widget for KitGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));
        if self.catalog.is_empty() || area.height < CARD_HEIGHT {
            return;
        }

        let columns = self.columns as u16;
        let gaps = CARD_GAP * columns.saturating_sub(1);
        let card_width = area.width.saturating_sub(gaps) / columns;
        let visible_rows = (area.height / CARD_HEIGHT) as usize;
        let first_row = self.first_visible_row(visible_rows);

        for (index, panel) in self.catalog.iter().enumerate() {
            let row = index / self.columns;
            let col = (index % self.columns) as u16;
            if row < first_row || row >= first_row + visible_rows {
                continue;
            }
            let card_area = Rect {
                x: area.x + col * (card_width + CARD_GAP),
                y: area.y + ((row - first_row) as u16) * CARD_HEIGHT,
                width: card_width,
                height: CARD_HEIGHT,
            };
            self.render_card(panel, index == self.focus, card_area, buf);
        }
    }
}
