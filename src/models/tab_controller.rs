use crate::models::catalog::{Catalog, PanelDescriptor};
use crate::models::listeners::{Listeners, SelectionChange, SubscriptionId};
use crate::models::selection::{PanelSelector, SelectionError};
use std::rc::Rc;
use tracing::debug;

/// 탭 방식 선택 컨트롤러
///
/// 생성 후에는 항상 정확히 하나의 탭이 활성화되어 있습니다.
/// `clear()`는 노출되지만 항상 `UnsupportedOperation`으로 실패합니다.
#[derive(Debug)]
pub struct TabController {
    catalog: Rc<Catalog>,
    /// 활성 탭 인덱스 (0-based)
    active_tab: usize,
    listeners: Listeners,
}

impl TabController {
    /// 첫 번째 항목을 활성 탭으로 생성
    ///
    /// 카탈로그가 비어 있으면 `InvalidCatalog`
    pub fn new(catalog: Rc<Catalog>) -> Result<Self, SelectionError> {
        if catalog.is_empty() {
            return Err(SelectionError::InvalidCatalog {
                reason: "tab catalog must not be empty".to_string(),
            });
        }
        Ok(Self {
            catalog,
            active_tab: 0,
            listeners: Listeners::new(),
        })
    }

    /// 지정한 ID를 활성 탭으로 생성
    pub fn with_default(catalog: Rc<Catalog>, default_id: &str) -> Result<Self, SelectionError> {
        let mut controller = Self::new(catalog)?;
        controller.active_tab =
            controller
                .catalog
                .position(default_id)
                .ok_or_else(|| SelectionError::InvalidDefault {
                    id: default_id.to_string(),
                })?;
        Ok(controller)
    }

    /// 활성 탭 (항상 존재)
    pub fn current(&self) -> &PanelDescriptor {
        // 생성 시 비어 있지 않음을 확인했고 인덱스는 catalog 범위 안에서만 바뀜
        &self.catalog.as_slice()[self.active_tab]
    }

    pub fn current_id(&self) -> &str {
        &self.current().id
    }

    /// 활성 탭 인덱스 (0-based)
    pub fn active_index(&self) -> usize {
        self.active_tab
    }

    /// 탭 개수
    pub fn tab_count(&self) -> usize {
        self.catalog.len()
    }

    /// 탭 번호로 전환 (1-based)
    pub fn select_nth(&mut self, number: usize) -> Result<(), SelectionError> {
        let index = number.saturating_sub(1);
        if number == 0 || index >= self.catalog.len() {
            return Err(SelectionError::unknown(&format!("#{}", number)));
        }
        self.activate(index);
        Ok(())
    }

    /// 다음 탭 (순환)
    pub fn next(&mut self) {
        let next = (self.active_tab + 1) % self.catalog.len();
        self.activate(next);
    }

    /// 이전 탭 (순환)
    pub fn prev(&mut self) {
        let prev = if self.active_tab == 0 {
            self.catalog.len() - 1
        } else {
            self.active_tab - 1
        };
        self.activate(prev);
    }

    fn activate(&mut self, index: usize) {
        let change = SelectionChange {
            previous: Some(self.current().id.clone()),
            current: self.catalog.at(index).map(|panel| panel.id.clone()),
        };
        self.active_tab = index;
        debug!(previous = ?change.previous, current = ?change.current, "tab selection");
        self.listeners.notify(&change);
    }
}

impl PanelSelector for TabController {
    fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn select(&mut self, id: &str) -> Result<(), SelectionError> {
        let index = self
            .catalog
            .position(id)
            .ok_or_else(|| SelectionError::unknown(id))?;
        self.activate(index);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SelectionError> {
        Err(SelectionError::UnsupportedOperation { operation: "clear" })
    }

    fn is_selected(&self, id: &str) -> Result<bool, SelectionError> {
        let index = self
            .catalog
            .position(id)
            .ok_or_else(|| SelectionError::unknown(id))?;
        Ok(index == self.active_tab)
    }

    fn current_panel(&self) -> Option<&PanelDescriptor> {
        Some(self.current())
    }

    fn subscribe(&mut self, listener: Box<dyn FnMut(&SelectionChange)>) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn catalog(ids: &[&str]) -> Rc<Catalog> {
        let panels = ids
            .iter()
            .map(|id| PanelDescriptor::new(*id, *id, *id))
            .collect();
        Rc::new(Catalog::new(panels).unwrap())
    }

    fn life_tabs() -> TabController {
        TabController::new(catalog(&["academics", "clubs", "fest"])).unwrap()
    }

    #[test]
    fn test_first_entry_is_default() {
        let tabs = TabController::new(catalog(&["documents", "schedule", "hotels"])).unwrap();
        assert_eq!(tabs.current_id(), "documents");
        assert_eq!(tabs.active_index(), 0);
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let err = TabController::new(catalog(&[])).unwrap_err();
        assert!(matches!(err, SelectionError::InvalidCatalog { .. }));
    }

    #[test]
    fn test_with_default() {
        let tabs = TabController::with_default(catalog(&["a", "b", "c"]), "c").unwrap();
        assert_eq!(tabs.current_id(), "c");

        let err = TabController::with_default(catalog(&["a", "b"]), "z").unwrap_err();
        assert_eq!(err, SelectionError::InvalidDefault { id: "z".to_string() });
    }

    #[test]
    fn test_clear_is_unsupported() {
        let mut tabs = life_tabs();
        tabs.select("clubs").unwrap();
        assert_eq!(
            tabs.clear(),
            Err(SelectionError::UnsupportedOperation { operation: "clear" })
        );
        assert_eq!(tabs.current_id(), "clubs"); // 변경 안 됨
    }

    #[test]
    fn test_never_none_after_selects() {
        let mut tabs = life_tabs();
        for id in ["fest", "academics", "fest", "bogus", "clubs"] {
            let _ = tabs.select(id);
            assert!(tabs.current_panel().is_some());
        }
        assert_eq!(tabs.current_id(), "clubs");
    }

    #[test]
    fn test_unknown_select_keeps_state() {
        let mut tabs = life_tabs();
        tabs.select("fest").unwrap();
        assert!(matches!(
            tabs.select("bogus"),
            Err(SelectionError::UnknownPanel { .. })
        ));
        assert_eq!(tabs.current_id(), "fest");
        assert!(tabs.is_selected("bogus").is_err());
        assert_eq!(tabs.is_selected("academics"), Ok(false));
    }

    #[test]
    fn test_select_nth() {
        let mut tabs = life_tabs();
        assert!(tabs.select_nth(3).is_ok()); // 0-based: 2
        assert_eq!(tabs.active_index(), 2);

        assert!(tabs.select_nth(4).is_err()); // 4번 탭 없음
        assert!(tabs.select_nth(0).is_err());
        assert_eq!(tabs.active_index(), 2); // 변경 안 됨
    }

    #[test]
    fn test_next_prev_tab() {
        let mut tabs = life_tabs();

        tabs.next();
        assert_eq!(tabs.active_index(), 1);

        tabs.next();
        assert_eq!(tabs.active_index(), 2);

        tabs.next(); // 순환
        assert_eq!(tabs.active_index(), 0);

        tabs.prev(); // 순환
        assert_eq!(tabs.active_index(), 2);

        tabs.prev();
        assert_eq!(tabs.active_index(), 1);
    }

    #[test]
    fn test_every_select_notifies() {
        let mut tabs = life_tabs();
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        tabs.subscribe(Box::new(move |change| sink.borrow_mut().push(change.clone())));

        tabs.select("clubs").unwrap();
        tabs.select("clubs").unwrap();
        let _ = tabs.clear();
        tabs.next();

        let log = log.borrow();
        assert_eq!(log.len(), 3);
        assert_eq!(log[1].previous, log[1].current);
        assert_eq!(log[2].current.as_deref(), Some("fest"));
    }
}
