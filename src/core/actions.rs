//! 액션 시스템: 단일 진실 원천 (Single Source of Truth)
//!
//! 모든 키 바인딩, 커맨드바 항목, 도움말 내용이
//! 이 모듈의 레지스트리를 참조합니다.

use crate::ui::components::command_bar::CommandItem;
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::LazyLock;

/// 모든 가능한 액션의 열거
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    NextSection,
    PrevSection,
    GoLanding,
    GoLife,
    GoKit,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    // Panels
    OpenPanel,
    ClosePanel,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollTop,
    ScrollBottom,
    // Tabs
    NextTab,
    PrevTab,
    /// 1부터 시작하는 탭 번호
    SelectTab(usize),
    // System
    ToggleTheme,
    ShowHelp,
    Quit,
}

/// 액션 카테고리
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    Navigation,
    Panel,
    Tab,
    System,
}

impl ActionCategory {
    pub fn title(self) -> &'static str {
        match self {
            ActionCategory::Navigation => "Navigation",
            ActionCategory::Panel => "Kit Panels",
            ActionCategory::Tab => "Life Tabs",
            ActionCategory::System => "System",
        }
    }
}

/// 커맨드바 표시 정보
pub struct CommandBarEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub priority: u8,
}

/// 액션 정의 (메타데이터)
pub struct ActionDef {
    pub action: Action,
    pub label: &'static str,
    pub category: ActionCategory,
    pub shortcut_display: Option<&'static str>,
    pub command_bar: Option<CommandBarEntry>,
}

/// 키 바인딩 정의
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifiers>, // None = any modifier
    pub action: Action,
}

/// 시퀀스 키 바인딩 정의 (예: `g` + `k`)
pub struct SequenceBinding {
    pub prefix: char,
    pub key: char,
    pub action: Action,
}

/// 모든 액션 메타데이터
pub static ACTION_DEFS: &[ActionDef] = &[
    // Navigation
    ActionDef {
        action: Action::NextSection,
        label: "Next section",
        category: ActionCategory::Navigation,
        shortcut_display: Some("Tab"),
        command_bar: Some(CommandBarEntry {
            key: "Tab",
            label: "Section",
            priority: 10,
        }),
    },
    ActionDef {
        action: Action::PrevSection,
        label: "Previous section",
        category: ActionCategory::Navigation,
        shortcut_display: Some("Shift+Tab"),
        command_bar: None,
    },
    ActionDef {
        action: Action::GoLanding,
        label: "Go to welcome",
        category: ActionCategory::Navigation,
        shortcut_display: Some("gw"),
        command_bar: None,
    },
    ActionDef {
        action: Action::GoLife,
        label: "Go to campus life",
        category: ActionCategory::Navigation,
        shortcut_display: Some("gl"),
        command_bar: None,
    },
    ActionDef {
        action: Action::GoKit,
        label: "Go to student kit",
        category: ActionCategory::Navigation,
        shortcut_display: Some("gk"),
        command_bar: None,
    },
    ActionDef {
        action: Action::MoveUp,
        label: "Move focus up",
        category: ActionCategory::Navigation,
        shortcut_display: Some("k / ↑"),
        command_bar: None,
    },
    ActionDef {
        action: Action::MoveDown,
        label: "Move focus down",
        category: ActionCategory::Navigation,
        shortcut_display: Some("j / ↓"),
        command_bar: None,
    },
    ActionDef {
        action: Action::MoveLeft,
        label: "Move focus left",
        category: ActionCategory::Navigation,
        shortcut_display: Some("h / ←"),
        command_bar: None,
    },
    ActionDef {
        action: Action::MoveRight,
        label: "Move focus right",
        category: ActionCategory::Navigation,
        shortcut_display: Some("l / →"),
        command_bar: None,
    },
    // Panels
    ActionDef {
        action: Action::OpenPanel,
        label: "Open focused card",
        category: ActionCategory::Panel,
        shortcut_display: Some("Enter / Space"),
        command_bar: Some(CommandBarEntry {
            key: "Enter",
            label: "Open",
            priority: 20,
        }),
    },
    ActionDef {
        action: Action::ClosePanel,
        label: "Close panel",
        category: ActionCategory::Panel,
        shortcut_display: Some("Esc / q"),
        command_bar: None,
    },
    ActionDef {
        action: Action::ScrollDown,
        label: "Scroll down",
        category: ActionCategory::Panel,
        shortcut_display: Some("j / ↓"),
        command_bar: None,
    },
    ActionDef {
        action: Action::ScrollUp,
        label: "Scroll up",
        category: ActionCategory::Panel,
        shortcut_display: Some("k / ↑"),
        command_bar: None,
    },
    ActionDef {
        action: Action::PageDown,
        label: "Page down",
        category: ActionCategory::Panel,
        shortcut_display: Some("PgDn / Ctrl+D"),
        command_bar: None,
    },
    ActionDef {
        action: Action::PageUp,
        label: "Page up",
        category: ActionCategory::Panel,
        shortcut_display: Some("PgUp / Ctrl+U"),
        command_bar: None,
    },
    ActionDef {
        action: Action::ScrollTop,
        label: "Scroll to top",
        category: ActionCategory::Panel,
        shortcut_display: Some("Home"),
        command_bar: None,
    },
    ActionDef {
        action: Action::ScrollBottom,
        label: "Scroll to bottom",
        category: ActionCategory::Panel,
        shortcut_display: Some("End"),
        command_bar: None,
    },
    // Tabs
    ActionDef {
        action: Action::NextTab,
        label: "Next tab",
        category: ActionCategory::Tab,
        shortcut_display: Some("]"),
        command_bar: Some(CommandBarEntry {
            key: "[ ]",
            label: "Tabs",
            priority: 30,
        }),
    },
    ActionDef {
        action: Action::PrevTab,
        label: "Previous tab",
        category: ActionCategory::Tab,
        shortcut_display: Some("["),
        command_bar: None,
    },
    ActionDef {
        action: Action::SelectTab(1),
        label: "Jump to tab N",
        category: ActionCategory::Tab,
        shortcut_display: Some("1-9"),
        command_bar: None,
    },
    // System
    ActionDef {
        action: Action::ToggleTheme,
        label: "Toggle dark/light theme",
        category: ActionCategory::System,
        shortcut_display: Some("t"),
        command_bar: Some(CommandBarEntry {
            key: "t",
            label: "Theme",
            priority: 40,
        }),
    },
    ActionDef {
        action: Action::ShowHelp,
        label: "Help",
        category: ActionCategory::System,
        shortcut_display: Some("? / F1"),
        command_bar: Some(CommandBarEntry {
            key: "?",
            label: "Help",
            priority: 50,
        }),
    },
    ActionDef {
        action: Action::Quit,
        label: "Quit",
        category: ActionCategory::System,
        shortcut_display: Some("q"),
        command_bar: Some(CommandBarEntry {
            key: "q",
            label: "Quit",
            priority: 60,
        }),
    },
];

fn build_key_bindings() -> Vec<KeyBinding> {
    let mut bindings = vec![
        // 종료
        KeyBinding {
            code: KeyCode::Char('q'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::Quit,
        },
        KeyBinding {
            code: KeyCode::Char('c'),
            modifiers: Some(KeyModifiers::CONTROL),
            action: Action::Quit,
        },
        // 섹션
        KeyBinding {
            code: KeyCode::Tab,
            modifiers: None,
            action: Action::NextSection,
        },
        KeyBinding {
            code: KeyCode::BackTab,
            modifiers: None,
            action: Action::PrevSection,
        },
        // 열기
        KeyBinding {
            code: KeyCode::Enter,
            modifiers: None,
            action: Action::OpenPanel,
        },
        KeyBinding {
            code: KeyCode::Char(' '),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::OpenPanel,
        },
        // 탭
        KeyBinding {
            code: KeyCode::Char(']'),
            modifiers: None,
            action: Action::NextTab,
        },
        KeyBinding {
            code: KeyCode::Char('['),
            modifiers: None,
            action: Action::PrevTab,
        },
        // 시스템
        KeyBinding {
            code: KeyCode::Char('t'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::ToggleTheme,
        },
        KeyBinding {
            code: KeyCode::Char('?'),
            modifiers: None,
            action: Action::ShowHelp,
        },
        KeyBinding {
            code: KeyCode::F(1),
            modifiers: None,
            action: Action::ShowHelp,
        },
    ];

    // 포커스 이동: Vim + 화살표
    for (vim, arrow, action) in [
        ('k', KeyCode::Up, Action::MoveUp),
        ('j', KeyCode::Down, Action::MoveDown),
        ('h', KeyCode::Left, Action::MoveLeft),
        ('l', KeyCode::Right, Action::MoveRight),
    ] {
        bindings.push(KeyBinding {
            code: KeyCode::Char(vim),
            modifiers: Some(KeyModifiers::NONE),
            action,
        });
        bindings.push(KeyBinding {
            code: arrow,
            modifiers: None,
            action,
        });
    }

    bindings
}

/// 패널(모달) 열림 상태의 키 바인딩
fn build_panel_key_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding {
            code: KeyCode::Esc,
            modifiers: None,
            action: Action::ClosePanel,
        },
        KeyBinding {
            code: KeyCode::Char('q'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::ClosePanel,
        },
        KeyBinding {
            code: KeyCode::Enter,
            modifiers: None,
            action: Action::ClosePanel,
        },
        KeyBinding {
            code: KeyCode::Char('c'),
            modifiers: Some(KeyModifiers::CONTROL),
            action: Action::Quit,
        },
        KeyBinding {
            code: KeyCode::Char('j'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::ScrollDown,
        },
        KeyBinding {
            code: KeyCode::Down,
            modifiers: None,
            action: Action::ScrollDown,
        },
        KeyBinding {
            code: KeyCode::Char('k'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::ScrollUp,
        },
        KeyBinding {
            code: KeyCode::Up,
            modifiers: None,
            action: Action::ScrollUp,
        },
        KeyBinding {
            code: KeyCode::PageDown,
            modifiers: None,
            action: Action::PageDown,
        },
        KeyBinding {
            code: KeyCode::Char('d'),
            modifiers: Some(KeyModifiers::CONTROL),
            action: Action::PageDown,
        },
        KeyBinding {
            code: KeyCode::PageUp,
            modifiers: None,
            action: Action::PageUp,
        },
        KeyBinding {
            code: KeyCode::Char('u'),
            modifiers: Some(KeyModifiers::CONTROL),
            action: Action::PageUp,
        },
        KeyBinding {
            code: KeyCode::Home,
            modifiers: None,
            action: Action::ScrollTop,
        },
        KeyBinding {
            code: KeyCode::End,
            modifiers: None,
            action: Action::ScrollBottom,
        },
        KeyBinding {
            code: KeyCode::Char('t'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::ToggleTheme,
        },
        // 도움말은 같은 키로 열고 닫음
        KeyBinding {
            code: KeyCode::Char('?'),
            modifiers: None,
            action: Action::ShowHelp,
        },
        KeyBinding {
            code: KeyCode::F(1),
            modifiers: None,
            action: Action::ShowHelp,
        },
    ]
}

static KEY_BINDINGS: LazyLock<Vec<KeyBinding>> = LazyLock::new(build_key_bindings);
static PANEL_KEY_BINDINGS: LazyLock<Vec<KeyBinding>> = LazyLock::new(build_panel_key_bindings);

/// 키 바인딩 목록 조회 (1회 초기화 후 재사용)
pub fn key_bindings() -> &'static [KeyBinding] {
    KEY_BINDINGS.as_slice()
}

/// 패널 모드 키 바인딩 목록 조회
pub fn panel_key_bindings() -> &'static [KeyBinding] {
    PANEL_KEY_BINDINGS.as_slice()
}

fn lookup(bindings: &[KeyBinding], modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    bindings
        .iter()
        .find(|binding| {
            let mod_matches = match binding.modifiers {
                None => true, // any modifier
                Some(required) => modifiers == required,
            };
            binding.code == code && mod_matches
        })
        .map(|binding| binding.action)
}

/// 키 입력으로 액션 조회
pub fn find_action(modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    // 숫자 키는 탭 번호
    if let KeyCode::Char(c @ '1'..='9') = code {
        if modifiers == KeyModifiers::NONE {
            return c.to_digit(10).map(|n| Action::SelectTab(n as usize));
        }
    }
    lookup(key_bindings(), modifiers, code)
}

/// 패널(모달)이 열린 상태에서 키 입력으로 액션 조회
pub fn find_panel_action(modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    lookup(panel_key_bindings(), modifiers, code)
}

/// 시퀀스 입력(prefix + key)으로 액션 조회
pub fn find_sequence_action(prefix: char, key: char) -> Option<Action> {
    sequence_bindings()
        .iter()
        .find(|binding| binding.prefix == prefix && binding.key == key)
        .map(|binding| binding.action)
}

/// 시퀀스 시작 prefix 여부
pub fn is_sequence_prefix(c: char) -> bool {
    sequence_bindings().iter().any(|binding| binding.prefix == c)
}

fn build_sequence_bindings() -> Vec<SequenceBinding> {
    vec![
        SequenceBinding {
            prefix: 'g',
            key: 'w',
            action: Action::GoLanding,
        },
        SequenceBinding {
            prefix: 'g',
            key: 'l',
            action: Action::GoLife,
        },
        SequenceBinding {
            prefix: 'g',
            key: 'k',
            action: Action::GoKit,
        },
    ]
}

static SEQUENCE_BINDINGS: LazyLock<Vec<SequenceBinding>> = LazyLock::new(build_sequence_bindings);

/// 시퀀스 키 바인딩 목록 조회 (1회 초기화 후 재사용)
pub fn sequence_bindings() -> &'static [SequenceBinding] {
    SEQUENCE_BINDINGS.as_slice()
}

/// 커맨드바용 항목 생성 (priority 순 정렬)
pub fn generate_command_bar_items() -> Vec<CommandItem> {
    let mut entries: Vec<&CommandBarEntry> = ACTION_DEFS
        .iter()
        .filter_map(|def| def.command_bar.as_ref())
        .collect();

    entries.sort_by_key(|cb| cb.priority);

    entries
        .into_iter()
        .map(|cb| CommandItem::new(cb.key, cb.label))
        .collect()
}

/// 도움말 오버레이용 엔트리 생성
///
/// 반환: (카테고리명, Vec<(단축키, 설명)>) 목록
pub fn generate_help_entries() -> Vec<(&'static str, Vec<(&'static str, &'static str)>)> {
    let categories = [
        ActionCategory::Navigation,
        ActionCategory::Panel,
        ActionCategory::Tab,
        ActionCategory::System,
    ];

    categories
        .iter()
        .map(|cat| {
            let items: Vec<(&'static str, &'static str)> = ACTION_DEFS
                .iter()
                .filter(|d| d.category == *cat)
                .filter_map(|d| d.shortcut_display.map(|key| (key, d.label)))
                .collect();
            (cat.title(), items)
        })
        .filter(|(_, items)| !items.is_empty())
        .collect()
}
