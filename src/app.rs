use crate::core::actions::Action;
use crate::models::{
    ContentLibrary, Document, PanelDescriptor, PanelSelector, SelectionController, TabController,
};
use crate::system::{KitConfig, LandingInfo, StudentKit};
use crate::ui::{LayoutManager, Section, ThemeManager};
use crate::utils::error::Result;
use ratatui::layout::Rect;
use std::borrow::Cow;
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

mod controllers;
mod dialogs;
mod navigation;

/// 랜딩 순환 단어 교체 주기
pub const WORD_ROTATION: Duration = Duration::from_secs(3);

/// 앱 상태
pub struct App {
    /// 종료 플래그
    pub should_quit: bool,
    /// 레이아웃 매니저
    pub layout: LayoutManager,
    /// 테마 관리자
    pub theme_manager: ThemeManager,
    /// 현재 섹션
    pub section: Section,
    /// 랜딩 문구
    pub landing: LandingInfo,
    /// 현재 순환 단어 인덱스
    word_index: usize,
    /// 마지막 단어 교체 시각
    word_changed_at: Instant,
    /// 캠퍼스 생활 탭 (항상 하나 활성)
    pub life: TabController,
    /// 키트 패널 선택 (모달 열림 = 선택 있음)
    pub kit: SelectionController,
    /// 키트 그리드 포커스 (선택과 별개)
    pub kit_focus: usize,
    /// 모달 스크롤 (선택이 바뀔 때마다 구독자가 0으로 되돌림)
    modal_scroll: Rc<Cell<u16>>,
    /// 도움말 오버레이
    help_open: bool,
    help_scroll: u16,
    /// 패널 문서
    content: ContentLibrary,
    // Vim 스타일 키 시퀀스
    /// 대기 중인 키 (예: 'g' for 'gk')
    pub pending_key: Option<char>,
    /// 대기 키 입력 시각
    pub pending_key_time: Option<Instant>,
    /// 토스트 메시지 (3초 후 자동 소멸)
    pub toast_message: Option<(String, Instant)>,
}

impl App {
    /// 키트 데이터와 설정으로 앱 생성
    pub fn new(kit: StudentKit, config: &KitConfig) -> Result<Self> {
        let mut theme_manager = ThemeManager::new();
        if let Some(dir) = KitConfig::themes_dir() {
            match theme_manager.load_themes_from_dir(&dir) {
                Ok(0) => {}
                Ok(count) => info!(count, dir = %dir.display(), "custom themes loaded"),
                Err(e) => warn!(dir = %dir.display(), error = %e, "cannot read theme directory"),
            }
        }
        if let Err(e) = theme_manager.switch_theme(&config.theme) {
            warn!(theme = %config.theme, error = %e, "falling back to default theme");
        }

        let app = Self::from_kit(kit, theme_manager)?;
        info!(
            theme = app.theme_manager.current_name(),
            life_tabs = app.life.tab_count(),
            kit_panels = app.kit.catalog().len(),
            "app initialized"
        );
        Ok(app)
    }

    fn from_kit(kit: StudentKit, theme_manager: ThemeManager) -> Result<Self> {
        let life = TabController::new(Rc::clone(&kit.life))?;
        let mut selection = SelectionController::new(Rc::clone(&kit.kit));

        let modal_scroll = Rc::new(Cell::new(0u16));
        let scroll = Rc::clone(&modal_scroll);
        selection.subscribe(Box::new(move |change| {
            // 다른 패널이든 같은 패널 재선택이든 맨 위부터 표시
            scroll.set(0);
            debug!(
                previous = change.previous.as_deref().unwrap_or("-"),
                current = change.current.as_deref().unwrap_or("-"),
                "kit panel changed"
            );
        }));

        Ok(Self {
            should_quit: false,
            layout: LayoutManager::new(),
            theme_manager,
            section: Section::default(),
            landing: kit.landing,
            word_index: 0,
            word_changed_at: Instant::now(),
            life,
            kit: selection,
            kit_focus: 0,
            modal_scroll,
            help_open: false,
            help_scroll: 0,
            content: kit.content,
            pending_key: None,
            pending_key_time: None,
            toast_message: None,
        })
    }

    #[cfg(test)]
    pub(crate) fn new_for_test() -> Self {
        let kit = StudentKit::builtin().expect("builtin kit must be valid");
        Self::from_kit(kit, ThemeManager::new()).expect("builtin kit has life tabs")
    }

    /// 종료
    pub fn quit(&mut self) {
        info!("quit requested");
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// 현재 순환 단어 인덱스
    pub fn word_index(&self) -> usize {
        self.word_index
    }

    /// 다음 순환 단어로
    pub fn advance_word(&mut self) {
        let count = self.landing.rotating_words.len();
        if count > 0 {
            self.word_index = (self.word_index + 1) % count;
        }
    }

    /// 주기 작업: 단어 순환, 토스트/대기 키 만료
    pub fn tick(&mut self, now: Instant) {
        if now.saturating_duration_since(self.word_changed_at) >= WORD_ROTATION {
            self.advance_word();
            self.word_changed_at = now;
        }
        self.clear_expired_toast();
        if self.is_pending_key_expired() {
            self.clear_pending_key();
        }
    }

    /// 마지막으로 그린 터미널 전체 영역 (모달 크기 계산 기준)
    pub(crate) fn screen_area(&self) -> Rect {
        let (width, height) = self.layout.terminal_size();
        Rect::new(0, 0, width, height)
    }

    /// 모달(패널 또는 도움말)이 떠 있는지
    pub fn is_modal_active(&self) -> bool {
        self.help_open || self.kit.has_selection()
    }

    pub fn is_help_open(&self) -> bool {
        self.help_open
    }

    /// 패널 모달 스크롤 오프셋
    pub fn modal_scroll(&self) -> u16 {
        self.modal_scroll.get()
    }

    /// 도움말 스크롤 오프셋
    pub fn help_scroll(&self) -> u16 {
        self.help_scroll
    }

    /// 패널 문서 조회 (없으면 안내 문서)
    pub fn document_for(&self, panel: &PanelDescriptor) -> Cow<'_, Document> {
        self.content.resolve(panel)
    }

    /// 열린 키트 패널과 문서
    pub fn open_panel(&self) -> Option<(&PanelDescriptor, Cow<'_, Document>)> {
        let panel = self.kit.current()?;
        Some((panel, self.document_for(panel)))
    }

    /// 활성 캠퍼스 생활 탭 문서
    pub fn life_document(&self) -> Cow<'_, Document> {
        self.document_for(self.life.current())
    }

    /// 포커스된 키트 카드
    pub fn focused_card(&self) -> Option<&PanelDescriptor> {
        self.kit.catalog().at(self.kit_focus)
    }

    /// 상태바 위치 정보
    pub fn position_display(&self) -> Option<String> {
        match self.section {
            Section::Landing => None,
            Section::Life => Some(format!(
                "tab {}/{} {}",
                self.life.active_index() + 1,
                self.life.tab_count(),
                self.life.current().label
            )),
            Section::Kit => self.focused_card().map(|card| {
                format!(
                    "{}/{} {}",
                    self.kit_focus + 1,
                    self.kit.catalog().len(),
                    card.label
                )
            }),
        }
    }

    /// 액션 실행 (단일 진실 원천)
    pub fn execute_action(&mut self, action: Action) {
        debug!(?action, section = ?self.section, "execute action");
        match action {
            Action::Quit => self.quit(),
            // 도움말이 떠 있으면 도움말이 키를 가져감
            _ if self.help_open => dialogs::execute(self, action),
            Action::NextSection
            | Action::PrevSection
            | Action::GoLanding
            | Action::GoLife
            | Action::GoKit
            | Action::MoveUp
            | Action::MoveDown
            | Action::MoveLeft
            | Action::MoveRight => navigation::execute(self, action),
            Action::OpenPanel
            | Action::ClosePanel
            | Action::ScrollUp
            | Action::ScrollDown
            | Action::PageUp
            | Action::PageDown
            | Action::ScrollTop
            | Action::ScrollBottom => controllers::kit_controller::execute(self, action),
            Action::NextTab | Action::PrevTab | Action::SelectTab(_) => {
                controllers::life_controller::execute(self, action)
            }
            Action::ToggleTheme | Action::ShowHelp => dialogs::execute(self, action),
        }
    }
}
