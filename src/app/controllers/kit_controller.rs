use super::super::*;
use crate::models::SelectionError;
use crate::ui::{ModalContent, PanelModal};

pub(in crate::app) fn execute(app: &mut App, action: Action) {
    match action {
        Action::OpenPanel => app.open_focused(),
        Action::ClosePanel => app.close_kit_panel(),
        Action::ScrollDown => app.scroll_panel_by(1),
        Action::ScrollUp => app.scroll_panel_by(-1),
        Action::PageDown => app.scroll_panel_by(app.page_size() as i32),
        Action::PageUp => app.scroll_panel_by(-(app.page_size() as i32)),
        Action::ScrollTop => app.scroll_panel_by(i32::MIN),
        Action::ScrollBottom => app.scroll_panel_by(i32::MAX),
        _ => unreachable!("non-panel action: {:?}", action),
    }
}

impl App {
    /// Enter: 키트에서는 포커스 카드 열기, 그 외에는 다음 섹션으로
    pub fn open_focused(&mut self) {
        match self.section {
            Section::Kit => {
                let Some(id) = self.focused_card().map(|card| card.id.clone()) else {
                    return;
                };
                if let Err(e) = self.open_kit_panel(&id) {
                    warn!(panel = %id, error = %e, "cannot open panel");
                    self.set_toast(&e.to_string());
                }
            }
            Section::Landing | Section::Life => self.go_to_section(self.section.next()),
        }
    }

    /// ID로 키트 패널 열기. 그리드 포커스도 해당 카드로 옮김
    pub fn open_kit_panel(&mut self, id: &str) -> std::result::Result<(), SelectionError> {
        self.kit.select(id)?;
        if let Some(index) = self.kit.catalog().position(id) {
            self.kit_focus = index;
        }
        info!(panel = id, "panel opened");
        Ok(())
    }

    /// 열린 패널 닫기
    pub fn close_kit_panel(&mut self) {
        if !self.kit.has_selection() {
            return;
        }
        match self.kit.clear() {
            Ok(()) => debug!("panel closed"),
            Err(e) => warn!(error = %e, "cannot close panel"),
        }
    }

    /// 열린 패널의 최대 스크롤 (현재 화면에서 줄바꿈된 문서 기준)
    pub fn panel_max_scroll(&self) -> u16 {
        let Some((panel, document)) = self.open_panel() else {
            return 0;
        };
        PanelModal::new(ModalContent::Panel {
            panel,
            document: &*document,
        })
        .max_scroll(self.screen_area())
    }

    /// 패널 문서 스크롤
    fn scroll_panel_by(&mut self, delta: i32) {
        if !self.kit.has_selection() {
            return;
        }
        let max = i64::from(self.panel_max_scroll());
        let next = (i64::from(self.modal_scroll.get()) + i64::from(delta)).clamp(0, max);
        self.modal_scroll.set(next as u16);
    }
}
