// Layout system - 반응형 레이아웃 시스템
//
// 터미널 크기에 따른 레이아웃 모드:
// - 40x15 이상: 일반 모드 (헤더 | 본문 | 상태바 | 커맨드바)
// - 그 미만: 경고 메시지 표시
//
// 키트 카드 그리드의 열 수도 터미널 너비로 결정합니다.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 최소 터미널 크기 상수
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 15;

/// 카드 한 장의 최소 너비/높이
pub const CARD_MIN_WIDTH: u16 = 30;
pub const CARD_HEIGHT: u16 = 6;
/// 그리드 최대 열 수
pub const MAX_GRID_COLUMNS: usize = 4;

/// 레이아웃 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// 일반 모드
    Normal,
    /// 경고 모드 (터미널이 너무 작음)
    TooSmall,
}

/// 화면 섹션 (랜딩, 캠퍼스 생활, 키트)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Landing,
    Life,
    Kit,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Landing, Section::Life, Section::Kit];

    /// 다음 섹션 (순환)
    pub fn next(self) -> Self {
        match self {
            Section::Landing => Section::Life,
            Section::Life => Section::Kit,
            Section::Kit => Section::Landing,
        }
    }

    /// 이전 섹션 (순환)
    pub fn prev(self) -> Self {
        match self {
            Section::Landing => Section::Kit,
            Section::Life => Section::Landing,
            Section::Kit => Section::Life,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Landing => "Welcome",
            Section::Life => "Life @ IIIT-H",
            Section::Kit => "Student Kit",
        }
    }
}

/// 레이아웃 영역
#[derive(Debug, Clone, Default)]
pub struct LayoutAreas {
    /// 상단 헤더 영역
    pub header: Rect,
    /// 본문 영역
    pub body: Rect,
    /// 상태바 영역
    pub status_bar: Rect,
    /// 하단 커맨드 바 영역
    pub command_bar: Rect,
}

/// 레이아웃 상태
#[derive(Debug, Clone)]
pub struct LayoutState {
    /// 현재 레이아웃 모드
    pub mode: LayoutMode,
    /// 터미널 크기
    pub terminal_size: (u16, u16),
    /// 계산된 레이아웃 영역
    pub areas: LayoutAreas,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            mode: LayoutMode::Normal,
            terminal_size: (80, 24),
            areas: LayoutAreas::default(),
        }
    }
}

/// 레이아웃 매니저
#[derive(Debug)]
pub struct LayoutManager {
    state: LayoutState,
}

impl Default for LayoutManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutManager {
    pub fn new() -> Self {
        Self {
            state: LayoutState::default(),
        }
    }

    /// 터미널 크기에 따라 레이아웃 모드 결정
    fn determine_mode(width: u16, height: u16) -> LayoutMode {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            LayoutMode::TooSmall
        } else {
            LayoutMode::Normal
        }
    }

    /// 터미널 크기 업데이트 및 레이아웃 재계산
    pub fn update(&mut self, area: Rect) {
        self.state.terminal_size = (area.width, area.height);
        self.state.mode = Self::determine_mode(area.width, area.height);
        self.state.areas = self.calculate_areas(area);
    }

    /// 레이아웃 영역 계산
    fn calculate_areas(&self, area: Rect) -> LayoutAreas {
        match self.state.mode {
            // 경고 화면이 전체 영역을 씀
            LayoutMode::TooSmall => LayoutAreas::default(),
            LayoutMode::Normal => {
                // 헤더 | 본문 | 상태바 | 커맨드바
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(1),
                        Constraint::Min(3),
                        Constraint::Length(1),
                        Constraint::Length(1),
                    ])
                    .split(area);

                LayoutAreas {
                    header: chunks[0],
                    body: chunks[1],
                    status_bar: chunks[2],
                    command_bar: chunks[3],
                }
            }
        }
    }

    /// 현재 레이아웃 모드 반환
    pub fn mode(&self) -> LayoutMode {
        self.state.mode
    }

    /// 레이아웃 영역 반환
    pub fn areas(&self) -> &LayoutAreas {
        &self.state.areas
    }

    /// 터미널 크기 반환
    pub fn terminal_size(&self) -> (u16, u16) {
        self.state.terminal_size
    }

    /// 현재 본문 너비 기준 카드 그리드 열 수
    pub fn grid_columns(&self) -> usize {
        grid_columns_for(self.state.terminal_size.0)
    }
}

/// 너비에 맞는 그리드 열 수 (1..=MAX_GRID_COLUMNS)
pub fn grid_columns_for(width: u16) -> usize {
    usize::from(width / CARD_MIN_WIDTH).clamp(1, MAX_GRID_COLUMNS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determine_mode() {
        assert_eq!(LayoutManager::determine_mode(80, 24), LayoutMode::Normal);
        assert_eq!(LayoutManager::determine_mode(40, 15), LayoutMode::Normal);

        // TooSmall 모드
        assert_eq!(LayoutManager::determine_mode(39, 24), LayoutMode::TooSmall);
        assert_eq!(LayoutManager::determine_mode(80, 14), LayoutMode::TooSmall);
    }

    #[test]
    fn test_update_splits_areas() {
        let mut manager = LayoutManager::new();
        manager.update(Rect::new(0, 0, 100, 30));

        let areas = manager.areas();
        assert_eq!(areas.header.height, 1);
        assert_eq!(areas.body.height, 27);
        assert_eq!(areas.status_bar.y, 28);
        assert_eq!(areas.command_bar.y, 29);
    }

    #[test]
    fn test_too_small_leaves_no_sections() {
        let mut manager = LayoutManager::new();
        manager.update(Rect::new(0, 0, 30, 10));
        assert_eq!(manager.mode(), LayoutMode::TooSmall);
        assert_eq!(manager.terminal_size(), (30, 10));
        assert_eq!(manager.areas().body, Rect::default());

        manager.update(Rect::new(0, 0, 80, 24));
        assert_eq!(manager.mode(), LayoutMode::Normal);
        assert_eq!(manager.areas().body.height, 21);
    }

    #[test]
    fn test_grid_columns() {
        assert_eq!(grid_columns_for(40), 1);
        assert_eq!(grid_columns_for(60), 2);
        assert_eq!(grid_columns_for(95), 3);
        assert_eq!(grid_columns_for(200), MAX_GRID_COLUMNS);
    }

    #[test]
    fn test_section_cycle() {
        assert_eq!(Section::Landing.next(), Section::Life);
        assert_eq!(Section::Kit.next(), Section::Landing);
        assert_eq!(Section::Landing.prev(), Section::Kit);
        for section in Section::ALL {
            assert_eq!(section.next().prev(), section);
        }
    }
}
