/// 선택 변경 알림
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    /// 변경 전 선택 ID
    pub previous: Option<String>,
    /// 변경 후 선택 ID
    pub current: Option<String>,
}

/// 구독 해제용 핸들
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&SelectionChange)>;

/// 구독자 목록
///
/// 등록 순서대로, 변경을 일으킨 호출 안에서 동기적으로 호출됩니다.
#[derive(Default)]
pub struct Listeners {
    entries: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&SelectionChange) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// 성공 시 true, 이미 해제된 핸들이면 false
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn notify(&mut self, change: &SelectionChange) {
        for (_, listener) in self.entries.iter_mut() {
            listener(change);
        }
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
