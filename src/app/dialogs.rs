use super::*;
use crate::ui::{ModalContent, PanelModal};

/// 토스트 표시 시간 (초)
const TOAST_SECS: u64 = 3;

pub(super) fn execute(app: &mut App, action: Action) {
    match action {
        Action::ToggleTheme => app.toggle_theme(),
        Action::ShowHelp => {
            if app.help_open {
                app.close_help();
            } else {
                app.show_help();
            }
        }
        Action::ClosePanel => app.close_help(),
        Action::ScrollDown => app.help_scroll_by(1),
        Action::ScrollUp => app.help_scroll_by(-1),
        Action::PageDown => app.help_scroll_by(app.page_size() as i32),
        Action::PageUp => app.help_scroll_by(-(app.page_size() as i32)),
        Action::ScrollTop => app.help_scroll = 0,
        Action::ScrollBottom => app.help_scroll = app.help_max_scroll(),
        // 도움말이 떠 있는 동안 나머지 키는 무시
        _ => {}
    }
}

impl App {
    /// 도움말 표시
    pub fn show_help(&mut self) {
        self.help_open = true;
        self.help_scroll = 0;
    }

    /// 도움말 닫기
    pub fn close_help(&mut self) {
        self.help_open = false;
    }

    fn help_max_scroll(&self) -> u16 {
        PanelModal::new(ModalContent::Help).max_scroll(self.screen_area())
    }

    fn help_scroll_by(&mut self, delta: i32) {
        let next = (self.help_scroll as i32 + delta).clamp(0, self.help_max_scroll() as i32);
        self.help_scroll = next as u16;
    }

    /// 모달 한 페이지 높이
    pub(super) fn page_size(&self) -> u16 {
        self.layout.areas().body.height.saturating_sub(6).max(1)
    }

    /// 다크/라이트 테마 전환
    pub fn toggle_theme(&mut self) {
        self.theme_manager.toggle_dark_light();
        let name = self.theme_manager.current_name().to_string();
        info!(theme = %name, "theme toggled");
        self.set_toast(&format!("Theme: {}", name));
    }

    /// 토스트 메시지 설정
    pub fn set_toast(&mut self, message: &str) {
        self.toast_message = Some((message.to_string(), Instant::now()));
    }

    /// 만료된 토스트 제거
    pub fn clear_expired_toast(&mut self) {
        if let Some((_, time)) = &self.toast_message {
            if time.elapsed().as_secs() >= TOAST_SECS {
                self.toast_message = None;
            }
        }
    }

    /// 표시할 토스트 메시지
    pub fn toast_display(&self) -> Option<&str> {
        self.toast_message.as_ref().and_then(|(msg, time)| {
            if time.elapsed().as_secs() < TOAST_SECS {
                Some(msg.as_str())
            } else {
                None
            }
        })
    }
}
