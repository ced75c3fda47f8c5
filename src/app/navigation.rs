use super::*;

pub(super) fn execute(app: &mut App, action: Action) {
    match action {
        Action::NextSection => app.go_to_section(app.section.next()),
        Action::PrevSection => app.go_to_section(app.section.prev()),
        Action::GoLanding => app.go_to_section(Section::Landing),
        Action::GoLife => app.go_to_section(Section::Life),
        Action::GoKit => app.go_to_section(Section::Kit),
        Action::MoveUp => app.move_focus_up(),
        Action::MoveDown => app.move_focus_down(),
        Action::MoveLeft => app.move_focus_left(),
        Action::MoveRight => app.move_focus_right(),
        _ => unreachable!("non-navigation action: {:?}", action),
    }
}

impl App {
    /// 섹션 이동
    pub fn go_to_section(&mut self, section: Section) {
        if self.section != section {
            debug!(from = ?self.section, to = ?section, "section changed");
            self.section = section;
        }
    }

    /// 위로 (키트: 한 행 위)
    pub fn move_focus_up(&mut self) {
        match self.section {
            Section::Kit => {
                let columns = self.layout.grid_columns();
                if self.kit_focus >= columns {
                    self.kit_focus -= columns;
                }
            }
            Section::Life => self.go_to_section(Section::Landing),
            Section::Landing => {}
        }
    }

    /// 아래로 (키트: 한 행 아래, 마지막 행이면 그대로)
    pub fn move_focus_down(&mut self) {
        match self.section {
            Section::Kit => {
                let columns = self.layout.grid_columns();
                if self.kit_focus + columns < self.kit.catalog().len() {
                    self.kit_focus += columns;
                }
            }
            Section::Life => self.go_to_section(Section::Kit),
            Section::Landing => self.go_to_section(Section::Life),
        }
    }

    /// 왼쪽 (생활: 이전 탭)
    pub fn move_focus_left(&mut self) {
        match self.section {
            Section::Kit => self.kit_focus = self.kit_focus.saturating_sub(1),
            Section::Life => self.life.prev(),
            Section::Landing => {}
        }
    }

    /// 오른쪽 (생활: 다음 탭)
    pub fn move_focus_right(&mut self) {
        match self.section {
            Section::Kit => {
                if self.kit_focus + 1 < self.kit.catalog().len() {
                    self.kit_focus += 1;
                }
            }
            Section::Life => self.life.next(),
            Section::Landing => {}
        }
    }

    // === 키 시퀀스 (gw / gl / gk) ===

    /// 대기 키 설정
    pub fn set_pending_key(&mut self, key: char) {
        self.pending_key = Some(key);
        self.pending_key_time = Some(Instant::now());
    }

    /// 대기 키 초기화
    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
        self.pending_key_time = None;
    }

    /// 대기 키 만료 여부 (800ms)
    pub fn is_pending_key_expired(&self) -> bool {
        self.pending_key_time
            .is_some_and(|t| t.elapsed().as_millis() > 800)
    }

    /// 대기 키 표시 문자열 (상태바용)
    pub fn pending_key_display(&self) -> Option<String> {
        self.pending_key.map(|k| format!("{}_", k))
    }
}
