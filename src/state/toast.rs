// Toast scheduler - a single slot of transient feedback with an expiry deadline
use std::time::{Duration, Instant};

/// Source of the current time for toast expiry.
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Toast {
    pub fn expires_at(&self) -> Instant {
        self.created_at + self.ttl
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at()
    }
}

pub struct ToastScheduler<C: Clock> {
    clock: C,
    default_ttl: Duration,
    current: Option<Toast>,
    generation: u64,
}

impl<C: Clock> ToastScheduler<C> {
    pub fn new(clock: C, default_ttl: Duration) -> Self {
        Self {
            clock,
            default_ttl,
            current: None,
            generation: 0,
        }
    }

    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) {
        let ttl = self.default_ttl;
        self.show_for(message, kind, ttl);
    }

    /// Replaces whatever toast is showing; the previous deadline is dropped with it.
    pub fn show_for(&mut self, message: impl Into<String>, kind: ToastKind, ttl: Duration) {
        self.generation += 1;
        self.current = Some(Toast {
            message: message.into(),
            kind,
            created_at: self.clock.now(),
            ttl,
        });
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Drops the toast once its deadline has passed. Returns true if one was dropped.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        match &self.current {
            Some(toast) if toast.is_expired(now) => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// The visible toast, never one whose deadline has passed.
    pub fn current(&self) -> Option<&Toast> {
        let now = self.clock.now();
        self.current.as_ref().filter(|t| !t.is_expired(now))
    }

    pub fn next_expiry(&self) -> Option<Instant> {
        self.current().map(Toast::expires_at)
    }

    /// Counts `show` calls; lets callers tell whether a toast appeared since a given point.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }
}

#[cfg(test)]
pub(crate) use testing::ManualClock;
