//! Transient status banners.
//!
//! Notices are purely cosmetic: nothing else in the crate reads them back, and
//! each one disappears [`DISMISS_AFTER`] after it was posted.

use crate::commands::{CmdMessage, MessageLevel};
use std::time::{Duration, Instant};

pub const DISMISS_AFTER: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
pub struct Notice {
    pub level: MessageLevel,
    pub content: String,
    pub posted_at: Instant,
}

impl Notice {
    pub fn is_visible(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.posted_at) < DISMISS_AFTER
    }
}

#[derive(Debug, Default)]
pub struct Notifier {
    notices: Vec<Notice>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post_at(&mut self, message: CmdMessage, now: Instant) {
        self.notices.push(Notice {
            level: message.level,
            content: message.content,
            posted_at: now,
        });
    }

    pub fn post_all(&mut self, messages: Vec<CmdMessage>) {
        let now = Instant::now();
        for message in messages {
            self.post_at(message, now);
        }
    }

    /// Notices still on screen at `now`, oldest first.
    pub fn visible(&self, now: Instant) -> impl Iterator<Item = &Notice> {
        self.notices.iter().filter(move |n| n.is_visible(now))
    }

    pub fn dismiss_expired(&mut self, now: Instant) {
        self.notices.retain(|n| n.is_visible(now));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_expire_after_three_seconds() {
        let start = Instant::now();
        let mut notifier = Notifier::new();
        notifier.post_at(CmdMessage::success("Card added successfully!"), start);

        assert_eq!(notifier.visible(start).count(), 1);
        assert_eq!(
            notifier.visible(start + Duration::from_millis(2_999)).count(),
            1
        );
        assert_eq!(notifier.visible(start + DISMISS_AFTER).count(), 0);
    }

    #[test]
    fn dismiss_expired_keeps_fresh_notices() {
        let start = Instant::now();
        let mut notifier = Notifier::new();
        notifier.post_at(CmdMessage::info("Card removed"), start);
        notifier.post_at(CmdMessage::error("Please fill in all fields"), start + DISMISS_AFTER);

        notifier.dismiss_expired(start + DISMISS_AFTER);
        let left: Vec<_> = notifier.visible(start + DISMISS_AFTER).collect();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].content, "Please fill in all fields");
        assert!(matches!(left[0].level, MessageLevel::Error));
    }
}
