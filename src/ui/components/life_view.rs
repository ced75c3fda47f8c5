// Life view component - 캠퍼스 생활 탭 화면
//
// 상단 탭 줄 + 활성 탭 문서 본문. 탭은 항상 하나가 활성 상태입니다.

use super::document_view::{document_lines, DocumentStyle};
use crate::models::{Catalog, Document};
use crate::ui::Theme;
use crate::utils::text_display::truncate_end;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 본문 안쪽 좌우 여백
const BODY_H_PADDING: u16 = 2;

/// 캠퍼스 생활 화면 컴포넌트
pub struct LifeView<'a> {
    catalog: &'a Catalog,
    active_index: usize,
    document: &'a Document,
    bg_color: Color,
    border_color: Color,
    title_color: Color,
    active_bg: Color,
    active_fg: Color,
    inactive_fg: Color,
    document_style: DocumentStyle,
}

impl<'a> LifeView<'a> {
    pub fn new(catalog: &'a Catalog, active_index: usize, document: &'a Document) -> Self {
        let theme = Theme::dark();
        Self {
            catalog,
            active_index,
            document,
            bg_color: theme.bg_primary.to_color(),
            border_color: theme.card_border.to_color(),
            title_color: theme.card_title.to_color(),
            active_bg: theme.tab_active_bg.to_color(),
            active_fg: theme.tab_active_fg.to_color(),
            inactive_fg: theme.tab_inactive_fg.to_color(),
            document_style: DocumentStyle::from_theme(&theme),
        }
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.bg_primary.to_color();
        self.border_color = theme.card_border.to_color();
        self.title_color = theme.card_title.to_color();
        self.active_bg = theme.tab_active_bg.to_color();
        self.active_fg = theme.tab_active_fg.to_color();
        self.inactive_fg = theme.tab_inactive_fg.to_color();
        self.document_style = DocumentStyle::from_theme(theme);
        self
    }

    /// 탭 레이블 목록. 한 줄에 다 안 들어가면 비활성 탭은 번호만 표시
    fn tab_labels(&self, width: u16) -> Vec<String> {
        let full: Vec<String> = self
            .catalog
            .iter()
            .enumerate()
            .map(|(i, panel)| format!(" {}:{} ", i + 1, panel.label))
            .collect();
        let total: usize = full.iter().map(|l| l.width() + 1).sum();
        if total <= width as usize {
            return full;
        }

        full.into_iter()
            .enumerate()
            .map(|(i, label)| {
                if i == self.active_index {
                    label
                } else {
                    format!(" {} ", i + 1)
                }
            })
            .collect()
    }

    fn render_tab_strip(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, label) in self.tab_labels(area.width).into_iter().enumerate() {
            let style = if i == self.active_index {
                Style::default()
                    .fg(self.active_fg)
                    .bg(self.active_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.inactive_fg)
            };
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(label, style));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

impl Widget for LifeView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));
        if area.height < 3 {
            return;
        }

        let strip = Rect {
            x: area.x + 1,
            width: area.width.saturating_sub(2),
            height: 1,
            ..area
        };
        self.render_tab_strip(strip, buf);

        let body_area = Rect {
            y: area.y + 1,
            height: area.height - 1,
            ..area
        };
        let title = self
            .catalog
            .at(self.active_index)
            .map(|panel| panel.label.as_str())
            .unwrap_or_default();
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", truncate_end(title, body_area.width.saturating_sub(4) as usize)),
                Style::default()
                    .fg(self.title_color)
                    .add_modifier(Modifier::BOLD),
            ))
            .title_bottom(Span::styled(
                format!(" {} ", self.document.file_name),
                Style::default().fg(self.document_style.muted),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color))
            .style(Style::default().bg(self.bg_color));
        let inner = block.inner(body_area);
        block.render(body_area, buf);

        let text_area = Rect {
            x: inner.x + BODY_H_PADDING,
            y: inner.y + 1,
            width: inner.width.saturating_sub(BODY_H_PADDING * 2),
            height: inner.height.saturating_sub(1),
        };
        let lines = document_lines(
            self.document,
            text_area.width as usize,
            self.document_style,
        );
        Paragraph::new(lines).render(text_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PanelDescriptor;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            PanelDescriptor::new("academics", "Academics", "life_academics"),
            PanelDescriptor::new("clubs", "Clubs", "life_clubs"),
            PanelDescriptor::new("fest", "Fest", "life_fest"),
        ])
        .unwrap()
    }

    fn document() -> Document {
        Document {
            file_name: "clubs.md".to_string(),
            intro: Some("Vibrant student clubs.".to_string()),
            sections: Vec::new(),
            footer: None,
            link: Some("https://clubs.iiit.ac.in/".to_string()),
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
    fn test_tab_labels_full_when_room() {
        let catalog = catalog();
        let document = document();
        let view = LifeView::new(&catalog, 1, &document);
        assert_eq!(
            view.tab_labels(80),
            vec![" 1:Academics ", " 2:Clubs ", " 3:Fest "]
        );
    }

    #[test]
    fn test_tab_labels_compact_when_narrow() {
        let catalog = catalog();
        let document = document();
        let view = LifeView::new(&catalog, 1, &document);
        assert_eq!(view.tab_labels(20), vec![" 1 ", " 2:Clubs ", " 3 "]);
    }

    #[test]
    fn test_render_active_tab_and_body() {
        let catalog = catalog();
        let document = document();
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        let view = LifeView::new(&catalog, 1, &document);
        let active_bg = view.active_bg;
        view.render(area, &mut buf);

        let text = buffer_text(&buf, area);
        assert!(text.contains("2:Clubs"));
        assert!(text.contains("Vibrant student clubs."));
        assert!(text.contains("→ https://clubs.iiit.ac.in/"));
        assert!(text.contains("clubs.md"));

        // " 1:Academics " (1..14) 다음 공백 뒤가 활성 탭
        let cell = buf.cell((16, 0)).expect("cell in range");
        assert_eq!(cell.symbol(), "2");
        assert_eq!(cell.bg, active_bg);
    }
}
