use std::collections::VecDeque;
use std::time::{Duration, Instant};

const MAX_NOTICES: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
    posted_at: Instant,
}

/// Short-lived toasts shown in the corner of the window.
#[derive(Debug)]
pub struct Notices {
    items: VecDeque<Notice>,
    lifetime: Duration,
}

impl Notices {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            items: VecDeque::with_capacity(MAX_NOTICES),
            lifetime,
        }
    }

    pub fn success(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.push_at(NoticeKind::Success, title.into(), body.into(), Instant::now());
    }

    pub fn error(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.push_at(NoticeKind::Error, title.into(), body.into(), Instant::now());
    }

    fn push_at(&mut self, kind: NoticeKind, title: String, body: String, now: Instant) {
        if self.items.len() == MAX_NOTICES {
            self.items.pop_front();
        }
        self.items.push_back(Notice {
            kind,
            title,
            body,
            posted_at: now,
        });
    }

    /// Drops expired notices and returns how long until the next one expires.
    pub fn prune(&mut self, now: Instant) -> Option<Duration> {
        let lifetime = self.lifetime;
        self.items
            .retain(|n| now.saturating_duration_since(n.posted_at) < lifetime);
        self.items
            .front()
            .map(|n| lifetime.saturating_sub(now.saturating_duration_since(n.posted_at)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn dismiss(&mut self, index: usize) {
        self.items.remove(index);
    }
}
