//! 모달 오버레이
//!
//! 키트 패널 문서 모달과 단축키 도움말 오버레이. 화면 중앙에
//! 배경을 지우고 그리며, 내용이 영역보다 길면 스크롤합니다.

use super::document_view::{document_lines, DocumentStyle};
use crate::core::actions::generate_help_entries;
use crate::models::{Document, PanelDescriptor};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 모달 내부 좌우 패딩 (border 안쪽 여백)
const MODAL_H_PADDING: u16 = 2;
/// 코드 헤더 줄 + 빈 줄
const MODAL_HEADER_ROWS: u16 = 2;

/// 모달 내용
#[derive(Debug, Clone, Copy)]
pub enum ModalContent<'a> {
    /// 키트 패널 문서
    Panel {
        panel: &'a PanelDescriptor,
        document: &'a Document,
    },
    /// 단축키 도움말
    Help,
}

/// 모달 위젯
pub struct PanelModal<'a> {
    content: ModalContent<'a>,
    scroll: u16,
    bg_color: Color,
    border_color: Color,
    title_color: Color,
    header_bg: Color,
    muted_color: Color,
    key_color: Color,
    document_style: DocumentStyle,
}

impl<'a> PanelModal<'a> {
    pub fn new(content: ModalContent<'a>) -> Self {
        let theme = Theme::dark();
        Self {
            content,
            scroll: 0,
            bg_color: theme.modal_bg.to_color(),
            border_color: theme.modal_border.to_color(),
            title_color: theme.fg_primary.to_color(),
            header_bg: theme.code_header_bg.to_color(),
            muted_color: theme.fg_muted.to_color(),
            key_color: theme.accent.to_color(),
            document_style: DocumentStyle::from_theme(&theme),
        }
    }

    /// 스크롤 오프셋 설정 (렌더링 시 내용 길이로 제한)
    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.modal_bg.to_color();
        self.border_color = theme.modal_border.to_color();
        self.title_color = theme.fg_primary.to_color();
        self.header_bg = theme.code_header_bg.to_color();
        self.muted_color = theme.fg_muted.to_color();
        self.key_color = theme.accent.to_color();
        self.document_style = DocumentStyle::from_theme(theme);
        self
    }

    /// 모달 영역 계산 (화면 중앙, 반응형)
    pub fn calculate_area(&self, screen: Rect) -> Rect {
        let sw = screen.width;
        let sh = screen.height;

        let (width, height) = match self.content {
            ModalContent::Panel { .. } => {
                let w = ((sw as f32 * 0.8) as u16).clamp(40, 100);
                let h = sh.saturating_sub(4).max(10);
                (w, h)
            }
            ModalContent::Help => {
                let w = 60u16.min(sw.saturating_sub(4)).max(40);
                let h = sh.saturating_sub(6).max(12);
                (w, h)
            }
        };

        let width = width.min(sw.saturating_sub(4));
        let height = height.min(sh.saturating_sub(2));

        Rect {
            x: screen.x + (sw.saturating_sub(width)) / 2,
            y: screen.y + (sh.saturating_sub(height)) / 2,
            width,
            height,
        }
    }

    fn help_lines(&self) -> Vec<Line<'static>> {
        let header_style = Style::default()
            .fg(self.key_color)
            .add_modifier(Modifier::BOLD);
        let key_style = Style::default().fg(self.key_color);
        let desc_style = Style::default().fg(self.title_color);

        let mut lines = Vec::new();
        for (i, (category, items)) in generate_help_entries().into_iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled(category, header_style)));
            for (key, desc) in items {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:<16}", key), key_style),
                    Span::styled(desc, desc_style),
                ]));
            }
        }
        lines
    }

    /// 모달 영역 안의 본문 영역 (테두리, 코드 헤더, 좌우 여백 제외)
    fn body_area(&self, modal_area: Rect) -> Rect {
        let inner = Block::default().borders(Borders::ALL).inner(modal_area);
        let top = match self.content {
            ModalContent::Panel { .. } => MODAL_HEADER_ROWS,
            ModalContent::Help => 1,
        };
        Rect {
            x: inner.x + MODAL_H_PADDING,
            y: inner.y + top.min(inner.height),
            width: inner.width.saturating_sub(MODAL_H_PADDING * 2),
            height: inner.height.saturating_sub(top),
        }
    }

    /// 본문 너비로 줄바꿈한 내용
    fn body_lines(&self, width: u16) -> Vec<Line<'static>> {
        match self.content {
            ModalContent::Panel { document, .. } => {
                document_lines(document, width as usize, self.document_style)
            }
            ModalContent::Help => self.help_lines(),
        }
    }

    /// 화면 크기에서의 최대 스크롤 (마지막 줄이 본문 맨 아래에 오는 위치)
    pub fn max_scroll(&self, screen: Rect) -> u16 {
        let body = self.body_area(self.calculate_area(screen));
        let lines = self.body_lines(body.width).len();
        lines
            .saturating_sub(body.height as usize)
            .min(u16::MAX as usize) as u16
    }

    /// 테두리 + 제목 + 하단 힌트
    fn render_frame(&self, area: Rect, buf: &mut Buffer, title: &str, hint: &str) {
        Block::default()
            .title(Span::styled(
                format!(" {} ", title),
                Style::default()
                    .fg(self.title_color)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color))
            .style(Style::default().bg(self.bg_color))
            .render(area, buf);

        let hint_x = area.x + (area.width.saturating_sub(hint.width() as u16)) / 2;
        let hint_y = area.y + area.height.saturating_sub(1);
        buf.set_string(hint_x, hint_y, hint, Style::default().fg(self.muted_color));
    }

    /// 본문 스크롤 렌더링. 위치 표시는 아래 테두리 오른쪽에
    fn render_body(&self, modal_area: Rect, buf: &mut Buffer) {
        let body = self.body_area(modal_area);
        if body.height == 0 {
            return;
        }
        let lines = self.body_lines(body.width);
        let visible = body.height as usize;
        let max_scroll = lines.len().saturating_sub(visible);
        let scroll = (self.scroll as usize).min(max_scroll);

        Paragraph::new(lines.into_iter().skip(scroll).take(visible).collect::<Vec<_>>())
            .render(body, buf);

        if max_scroll > 0 {
            let indicator = format!(" {}/{} ", scroll, max_scroll);
            let x = (modal_area.x + modal_area.width)
                .saturating_sub(indicator.width() as u16 + 1)
                .max(modal_area.x);
            let y = modal_area.y + modal_area.height.saturating_sub(1);
            buf.set_string(x, y, &indicator, Style::default().fg(self.muted_color));
        }
    }

    fn render_panel(
        &self,
        area: Rect,
        buf: &mut Buffer,
        panel: &PanelDescriptor,
        document: &Document,
    ) {
        self.render_frame(area, buf, &panel.label, " j/k: scroll  ?: help  Esc: close ");
        let inner = Block::default().borders(Borders::ALL).inner(area);
        if inner.height <= MODAL_HEADER_ROWS {
            return;
        }

        // 코드 블록 헤더 (● ● ● file_name)
        let header = Rect { height: 1, ..inner };
        buf.set_style(header, Style::default().bg(self.header_bg));
        Paragraph::new(Line::from(vec![
            Span::styled(" ● ● ● ", Style::default().fg(self.muted_color)),
            Span::styled(
                document.file_name.clone(),
                Style::default().fg(self.title_color),
            ),
        ]))
        .render(header, buf);

        self.render_body(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        self.render_frame(
            area,
            buf,
            "Keyboard Shortcuts",
            " j/k: scroll  Esc/?: close ",
        );
        self.render_body(area, buf);
    }
}

impl Widget for PanelModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = self.calculate_area(area);

        // 배경 클리어
        Clear.render(modal_area, buf);

        match self.content {
            ModalContent::Panel { panel, document } => {
                self.render_panel(modal_area, buf, panel, document)
            }
            ModalContent::Help => self.render_help(modal_area, buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::content::DocumentSection;

    fn panel() -> PanelDescriptor {
        PanelDescriptor::new("documents", "Documents Required", "documents")
    }

    fn long_document() -> Document {
        Document {
            file_name: "documents_required.md".to_string(),
            intro: Some("Bring these with you.".to_string()),
            sections: vec![DocumentSection {
                heading: "Checklist".to_string(),
                body: None,
                items: (1..=30).map(|i| format!("Item {}", i)).collect(),
                note: None,
            }],
            footer: Some("// Last line".to_string()),
            link: None,
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
    fn test_modal_area_is_centered() {
        let panel = panel();
        let document = long_document();
        let modal = PanelModal::new(ModalContent::Panel {
            panel: &panel,
            document: &document,
        });
        let screen = Rect::new(0, 0, 100, 30);
        let area = modal.calculate_area(screen);

        assert_eq!(area.width, 80);
        assert_eq!(area.height, 26);
        assert_eq!(area.x, 10);
        assert_eq!(area.y, 2);
    }

    #[test]
    fn test_modal_area_fits_small_screen() {
        let modal = PanelModal::new(ModalContent::Help);
        let area = modal.calculate_area(Rect::new(0, 0, 40, 15));
        assert!(area.width <= 36);
        assert!(area.height <= 13);
    }

    #[test]
    fn test_panel_modal_renders_header_and_title() {
        let panel = panel();
        let document = long_document();
        let screen = Rect::new(0, 0, 100, 30);
        let mut buf = Buffer::empty(screen);
        PanelModal::new(ModalContent::Panel {
            panel: &panel,
            document: &document,
        })
        .render(screen, &mut buf);

        let text = buffer_text(&buf, screen);
        assert!(text.contains("Documents Required"));
        assert!(text.contains("documents_required.md"));
        assert!(text.contains("Bring these with you."));
        assert!(!text.contains("// Last line"));
    }

    #[test]
    fn test_scroll_is_clamped_to_content() {
        let panel = panel();
        let document = long_document();
        let screen = Rect::new(0, 0, 100, 30);
        let mut buf = Buffer::empty(screen);
        PanelModal::new(ModalContent::Panel {
            panel: &panel,
            document: &document,
        })
        .scroll(u16::MAX)
        .render(screen, &mut buf);

        let text = buffer_text(&buf, screen);
        assert!(text.contains("// Last line"));
        assert!(!text.contains("Bring these with you."));
    }

    #[test]
    fn test_help_overlay_lists_shortcuts() {
        let screen = Rect::new(0, 0, 100, 40);
        let mut buf = Buffer::empty(screen);
        PanelModal::new(ModalContent::Help).render(screen, &mut buf);

        let text = buffer_text(&buf, screen);
        assert!(text.contains("Keyboard Shortcuts"));
        assert!(text.contains("Navigation"));
        assert!(text.contains("Open focused card"));
    }

    #[test]
    fn test_max_scroll_counts_wrapped_lines() {
        let panel = panel();
        let mut document = long_document();
        document.intro = Some("word ".repeat(200));
        let modal = PanelModal::new(ModalContent::Panel {
            panel: &panel,
            document: &document,
        });
        let screen = Rect::new(0, 0, 80, 24);
        let body = modal.body_area(modal.calculate_area(screen));
        let wrapped = modal.body_lines(body.width).len();

        assert!(wrapped > body.height as usize);
        assert_eq!(
            modal.max_scroll(screen) as usize,
            wrapped - body.height as usize
        );
    }

    #[test]
    fn test_scrolled_to_max_shows_last_line() {
        let panel = panel();
        let mut document = long_document();
        document.intro = Some("word ".repeat(200));
        let screen = Rect::new(0, 0, 80, 24);
        let modal = PanelModal::new(ModalContent::Panel {
            panel: &panel,
            document: &document,
        });
        let max = modal.max_scroll(screen);

        let mut buf = Buffer::empty(screen);
        modal.scroll(max).render(screen, &mut buf);
        let text = buffer_text(&buf, screen);
        assert!(text.contains("// Last line"));
    }

    #[test]
    fn test_scroll_indicator_sits_on_border() {
        let panel = panel();
        let document = long_document();
        let screen = Rect::new(0, 0, 80, 24);
        let modal = PanelModal::new(ModalContent::Panel {
            panel: &panel,
            document: &document,
        });
        let area = modal.calculate_area(screen);
        let max = modal.max_scroll(screen);

        let mut buf = Buffer::empty(screen);
        modal.scroll(3).render(screen, &mut buf);

        let border_row: String = (area.x..area.x + area.width)
            .filter_map(|x| buf.cell((x, area.y + area.height - 1)))
            .map(|c| c.symbol().to_string())
            .collect();
        assert!(border_row.contains(&format!("3/{}", max)));

        let body_bottom: String = (area.x..area.x + area.width)
            .filter_map(|x| buf.cell((x, area.y + area.height - 2)))
            .map(|c| c.symbol().to_string())
            .collect();
        assert!(!body_bottom.contains('/'));
    }
}
