mod app;
mod core;
mod models;
mod system;
mod ui;
mod utils;

use app::App;
use core::actions::{find_action, find_panel_action, find_sequence_action, is_sequence_prefix};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use models::PanelSelector;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use system::{logging, KitConfig, StudentKit};
use tracing::{error, info, warn};
use ui::{
    CommandBar, HeaderBar, KitGrid, Landing, LayoutMode, LifeView, ModalContent, PanelModal,
    Section, StatusBar, WarningScreen,
};
use utils::error::Result;

/// 이벤트 대기 시간 (단어 순환/토스트 만료 체크 주기)
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    // 설정 → 로깅 → 키트 데이터 순으로 준비 (터미널 전환 전에 실패를 보고)
    let (config, config_error) = match KitConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (KitConfig::default(), Some(e)),
    };
    let log_path = logging::init(&config.log_filter);
    info!(log = ?log_path, "studentkit starting");
    if let Some(e) = config_error {
        warn!(error = %e, "using default configuration");
    }

    let kit = match &config.kit_file {
        Some(path) => StudentKit::load(path)?,
        None => StudentKit::builtin()?,
    };
    let mut app = App::new(kit, &config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "run loop failed");
        eprintln!("Error: {:?}", err);
    }
    info!("studentkit exited");

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| {
            let size = f.area();

            // 레이아웃 업데이트
            app.layout.update(size);

            match app.layout.mode() {
                LayoutMode::TooSmall => {
                    // 경고 화면 표시
                    let (width, height) = app.layout.terminal_size();
                    let warning = WarningScreen::new()
                        .current_size(width, height)
                        .theme(app.theme_manager.current());
                    f.render_widget(warning, size);
                }
                LayoutMode::Normal => {
                    render_main_ui(f, app);
                }
            }
        })?;

        if event::poll(POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if app.is_modal_active() {
                        handle_modal_keys(app, key.modifiers, key.code);
                    } else {
                        handle_normal_keys(app, key.modifiers, key.code);
                    }
                }
                Event::Resize(width, height) => {
                    tracing::debug!(width, height, "terminal resized");
                }
                _ => {}
            }
        }

        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// 일반 모드 키 처리 (액션 레지스트리 기반)
fn handle_normal_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    // 1) pending 키 시퀀스 처리
    if let Some(pending) = app.pending_key {
        app.clear_pending_key();
        if let KeyCode::Char(c) = code {
            if let Some(action) = find_sequence_action(pending, c) {
                app.execute_action(action);
                return;
            }
        }
    }

    // 2) 시퀀스 prefix 입력 시 대기
    if modifiers == KeyModifiers::NONE {
        if let KeyCode::Char(c) = code {
            if is_sequence_prefix(c) {
                app.set_pending_key(c);
                return;
            }
        }
    }

    // 3) 테이블 조회 → 액션 실행
    if let Some(action) = find_action(modifiers, code) {
        app.execute_action(action);
    }
}

/// 모달(패널/도움말) 모드 키 처리
fn handle_modal_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    match find_panel_action(modifiers, code) {
        Some(action) => app.execute_action(action),
        None => tracing::debug!(?code, "key ignored while modal is open"),
    }
}

/// 섹션 본문 렌더링
fn render_body(f: &mut ratatui::Frame<'_>, app: &App, theme: &ui::Theme, area: ratatui::layout::Rect) {
    match app.section {
        Section::Landing => {
            let landing = Landing::new(&app.landing)
                .word_index(app.word_index())
                .theme(theme);
            f.render_widget(landing, area);
        }
        Section::Life => {
            let document = app.life_document();
            let life = LifeView::new(app.life.catalog(), app.life.active_index(), &document)
                .theme(theme);
            f.render_widget(life, area);
        }
        Section::Kit => {
            let grid = KitGrid::new(app.kit.catalog())
                .focus(app.kit_focus)
                .selected_id(app.kit.current_id())
                .columns(app.layout.grid_columns())
                .theme(theme);
            f.render_widget(grid, area);
        }
    }
}

/// 메인 UI 렌더링
fn render_main_ui(f: &mut ratatui::Frame<'_>, app: &App) {
    let areas = app.layout.areas();
    let theme = app.theme_manager.current();

    let header = HeaderBar::new().current(app.section).theme(theme);
    f.render_widget(header, areas.header);

    render_body(f, app, theme, areas.body);

    let position = app.position_display();
    let pending = app.pending_key_display();
    let selected = app.kit.current().map(|panel| panel.label.as_str());
    let status_bar = StatusBar::new()
        .section(app.section.title())
        .position(position.as_deref())
        .selected(selected)
        .toast(app.toast_display())
        .pending_key(pending.as_deref())
        .theme_name(app.theme_manager.current_name())
        .theme(theme);
    f.render_widget(status_bar, areas.status_bar);

    let command_bar = if app.is_modal_active() {
        CommandBar::new().commands(CommandBar::panel_commands())
    } else {
        CommandBar::new()
    };
    f.render_widget(command_bar.theme(theme), areas.command_bar);

    // 모달은 맨 위에 (도움말이 패널보다 위)
    if let Some((panel, document)) = app.open_panel() {
        let modal = PanelModal::new(ModalContent::Panel {
            panel,
            document: &*document,
        })
        .scroll(app.modal_scroll())
        .theme(theme);
        f.render_widget(modal, f.area());
    }
    if app.is_help_open() {
        let help = PanelModal::new(ModalContent::Help)
            .scroll(app.help_scroll())
            .theme(theme);
        f.render_widget(help, f.area());
    }
}
