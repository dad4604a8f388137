pub const NOTICE_VISIBLE_MS: u32 = 3_200;
pub const NOTICE_FADE_MS: u32 = 350;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeKind {
    #[default]
    Success,
    Error,
}

impl NoticeKind {
    pub fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticePhase {
    Visible,
    Leaving,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
    pub kind: NoticeKind,
    pub phase: NoticePhase,
}

/// Holds at most one transient notice; a new one replaces the old.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeBoard {
    next_id: u64,
    current: Option<Notice>,
}

impl NoticeBoard {
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Returns the id the dismiss timers must refer to.
    pub fn show(&mut self, message: impl Into<String>, kind: NoticeKind) -> u64 {
        self.next_id = self.next_id.wrapping_add(1);
        let id = self.next_id;
        self.current = Some(Notice {
            id,
            message: message.into(),
            kind,
            phase: NoticePhase::Visible,
        });
        id
    }

    pub fn begin_leave(&mut self, id: u64) {
        if let Some(notice) = self.current.as_mut().filter(|notice| notice.id == id) {
            notice.phase = NoticePhase::Leaving;
        }
    }

    pub fn remove(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|notice| notice.id == id) {
            self.current = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_timers_do_not_touch_newer_notice() {
        let mut board = NoticeBoard::default();
        let first = board.show("one", NoticeKind::Success);
        let second = board.show("two", NoticeKind::Error);
        board.begin_leave(first);
        board.remove(first);
        let current = board.current().unwrap();
        assert_eq!(current.id, second);
        assert_eq!(current.message, "two");
        assert_eq!(current.phase, NoticePhase::Visible);
    }

    #[test]
    fn notice_leaves_then_disappears() {
        let mut board = NoticeBoard::default();
        let id = board.show("saved", NoticeKind::Success);
        board.begin_leave(id);
        assert_eq!(board.current().map(|notice| notice.phase), Some(NoticePhase::Leaving));
        board.remove(id);
        assert!(board.current().is_none());
    }
}
