//! 패널 선택 컨트롤러 (모달 방식)
//!
//! 고정된 [`Catalog`] 위에서 "선택 없음" 또는 "패널 하나 선택" 상태만 유지합니다.
//! 모든 연산은 검증을 먼저 끝낸 뒤 상태를 씁니다. 실패한 호출은 상태를 바꾸지 않습니다.

use crate::models::catalog::{Catalog, PanelDescriptor};
use crate::models::listeners::{Listeners, SelectionChange, SubscriptionId};
use std::rc::Rc;
use thiserror::Error;
use tracing::debug;

/// 선택 연산 에러
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("invalid catalog: {reason}")]
    InvalidCatalog { reason: String },

    #[error("default panel '{id}' is not in the catalog")]
    InvalidDefault { id: String },

    #[error("unknown panel '{id}'")]
    UnknownPanel { id: String },

    #[error("operation '{operation}' is not supported")]
    UnsupportedOperation { operation: &'static str },
}

impl SelectionError {
    pub(crate) fn unknown(id: &str) -> Self {
        SelectionError::UnknownPanel { id: id.to_string() }
    }
}

/// 모달/탭 컨트롤러 공통 인터페이스
///
/// 렌더 계층은 이 트레이트만 보고 선택 상태를 읽고 바꿉니다.
pub trait PanelSelector {
    /// 컨트롤러가 다루는 카탈로그
    fn catalog(&self) -> &Catalog;

    /// 패널 선택. 카탈로그에 없는 ID면 `UnknownPanel`
    fn select(&mut self, id: &str) -> Result<(), SelectionError>;

    /// 선택 해제
    fn clear(&mut self) -> Result<(), SelectionError>;

    /// 해당 ID가 선택되어 있는지. 카탈로그에 없는 ID면 `UnknownPanel`
    fn is_selected(&self, id: &str) -> Result<bool, SelectionError>;

    /// 현재 선택된 패널
    fn current_panel(&self) -> Option<&PanelDescriptor>;

    fn subscribe(&mut self, listener: Box<dyn FnMut(&SelectionChange)>) -> SubscriptionId;

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;
}

/// 모달 방식 선택 컨트롤러 (NONE | SELECTED(id))
#[derive(Debug)]
pub struct SelectionController {
    catalog: Rc<Catalog>,
    selected: Option<usize>,
    listeners: Listeners,
}

impl SelectionController {
    /// 선택 없음 상태로 생성
    pub fn new(catalog: Rc<Catalog>) -> Self {
        Self {
            catalog,
            selected: None,
            listeners: Listeners::new(),
        }
    }

    /// 기본 선택 패널을 지정해 생성
    pub fn with_default(catalog: Rc<Catalog>, default_id: &str) -> Result<Self, SelectionError> {
        let index = catalog
            .position(default_id)
            .ok_or_else(|| SelectionError::InvalidDefault {
                id: default_id.to_string(),
            })?;
        Ok(Self {
            catalog,
            selected: Some(index),
            listeners: Listeners::new(),
        })
    }

    /// 현재 선택된 패널 (없으면 None)
    pub fn current(&self) -> Option<&PanelDescriptor> {
        self.selected.and_then(|index| self.catalog.at(index))
    }

    /// 현재 선택된 패널 ID
    pub fn current_id(&self) -> Option<&str> {
        self.current().map(|panel| panel.id.as_str())
    }

    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    fn id_at(&self, index: Option<usize>) -> Option<String> {
        index
            .and_then(|i| self.catalog.at(i))
            .map(|panel| panel.id.clone())
    }

    fn transition(&mut self, next: Option<usize>) {
        let change = SelectionChange {
            previous: self.id_at(self.selected),
            current: self.id_at(next),
        };
        self.selected = next;
        debug!(previous = ?change.previous, current = ?change.current, "panel selection");
        self.listeners.notify(&change);
    }
}

impl PanelSelector for SelectionController {
    fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn select(&mut self, id: &str) -> Result<(), SelectionError> {
        let index = self
            .catalog
            .position(id)
            .ok_or_else(|| SelectionError::unknown(id))?;
        self.transition(Some(index));
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SelectionError> {
        if self.selected.is_some() {
            self.transition(None);
        }
        Ok(())
    }

    fn is_selected(&self, id: &str) -> Result<bool, SelectionError> {
        let index = self
            .catalog
            .position(id)
            .ok_or_else(|| SelectionError::unknown(id))?;
        Ok(self.selected == Some(index))
    }

    fn current_panel(&self) -> Option<&PanelDescriptor> {
        self.current()
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

    fn kit_catalog() -> Rc<Catalog> {
        catalog(&["documents", "schedule", "hotels"])
    }

    fn recorder(controller: &mut SelectionController) -> Rc<RefCell<Vec<SelectionChange>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        controller.subscribe(Box::new(move |change| sink.borrow_mut().push(change.clone())));
        log
    }

    #[test]
    fn test_starts_with_no_selection() {
        let controller = SelectionController::new(kit_catalog());
        assert!(controller.current().is_none());
        assert!(!controller.has_selection());
    }

    #[test]
    fn test_select_then_current_for_every_panel() {
        let mut controller = SelectionController::new(kit_catalog());
        for id in ["documents", "schedule", "hotels"] {
            controller.select(id).unwrap();
            assert_eq!(controller.current_id(), Some(id));
            assert_eq!(controller.is_selected(id), Ok(true));
        }
    }

    #[test]
    fn test_unknown_id_keeps_state() {
        let mut controller = SelectionController::new(kit_catalog());
        controller.select("hotels").unwrap();
        let log = recorder(&mut controller);

        let err = controller.select("bogus").unwrap_err();
        assert_eq!(
            err,
            SelectionError::UnknownPanel {
                id: "bogus".to_string()
            }
        );
        assert_eq!(controller.current_id(), Some("hotels"));
        assert!(log.borrow().is_empty()); // 실패 시 알림 없음
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut controller = SelectionController::new(kit_catalog());
        controller.select("schedule").unwrap();
        let log = recorder(&mut controller);

        controller.clear().unwrap();
        controller.clear().unwrap();
        assert!(controller.current().is_none());
        // 실제로 바뀐 첫 번째 clear만 알림
        assert_eq!(log.borrow().len(), 1);
        assert_eq!(log.borrow()[0].current, None);
    }

    #[test]
    fn test_clear_on_empty_does_not_notify() {
        let mut controller = SelectionController::new(kit_catalog());
        let log = recorder(&mut controller);
        controller.clear().unwrap();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_reselect_notifies_once_per_call() {
        let mut controller = SelectionController::new(kit_catalog());
        let log = recorder(&mut controller);

        controller.select("documents").unwrap();
        let after_first = controller.current().cloned();
        controller.select("documents").unwrap();

        assert_eq!(controller.current().cloned(), after_first);
        let log = log.borrow();
        assert_eq!(log.len(), 2);
        assert_ne!(log[0].previous, log[0].current);
        assert_eq!(log[1].previous, log[1].current);
    }

    #[test]
    fn test_is_selected_distinguishes_unknown() {
        let mut controller = SelectionController::new(kit_catalog());
        controller.select("documents").unwrap();
        assert_eq!(controller.is_selected("schedule"), Ok(false));
        assert!(matches!(
            controller.is_selected("nope"),
            Err(SelectionError::UnknownPanel { .. })
        ));
    }

    #[test]
    fn test_with_default() {
        let controller = SelectionController::with_default(kit_catalog(), "hotels").unwrap();
        assert_eq!(controller.current_id(), Some("hotels"));

        let err = SelectionController::with_default(kit_catalog(), "missing").unwrap_err();
        assert_eq!(
            err,
            SelectionError::InvalidDefault {
                id: "missing".to_string()
            }
        );
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut controller = SelectionController::new(kit_catalog());
        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        let id = controller.subscribe(Box::new(move |_| *counter.borrow_mut() += 1));

        controller.select("documents").unwrap();
        assert!(controller.unsubscribe(id));
        controller.select("schedule").unwrap();
        assert_eq!(*count.borrow(), 1);
        assert!(!controller.unsubscribe(id));
    }

    /// documents → schedule → bogus → clear 시나리오
    #[test]
    fn test_modal_scenario() {
        let mut controller = SelectionController::new(kit_catalog());
        assert!(controller.current().is_none());

        controller.select("schedule").unwrap();
        assert_eq!(controller.current_id(), Some("schedule"));

        assert!(matches!(
            controller.select("bogus"),
            Err(SelectionError::UnknownPanel { .. })
        ));
        assert_eq!(controller.current_id(), Some("schedule"));

        controller.clear().unwrap();
        assert!(controller.current().is_none());
    }

    #[test]
    fn test_change_carries_previous_and_current() {
        let mut controller = SelectionController::new(kit_catalog());
        let log = recorder(&mut controller);
        controller.select("documents").unwrap();
        controller.select("hotels").unwrap();

        let log = log.borrow();
        assert_eq!(log[1].previous.as_deref(), Some("documents"));
        assert_eq!(log[1].current.as_deref(), Some("hotels"));
    }
}
