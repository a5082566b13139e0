//! One-shot delayed tick.
//!
//! At most one tick is outstanding. Every arm issues a fresh token, so a
//! token from a cancelled or replaced schedule can never fire.

use serde::{Deserialize, Serialize};
use sortscope_core::LogicalTime;
use std::time::Duration;
use tracing::{debug, warn};

/// Identity of one armed tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TickToken(u64);

impl TickToken {
    /// Raw token value
    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

/// An armed tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTick {
    /// Token the tick was armed with
    pub token: TickToken,
    /// When it fires
    pub due: LogicalTime,
}

/// Slot holding the single outstanding tick
#[derive(Debug, Default)]
pub struct TickSlot {
    pending: Option<PendingTick>,
    issued: u64,
}

impl TickSlot {
    /// Create an empty slot
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a tick `delay` after `now`, replacing any pending one
    pub fn arm(&mut self, now: LogicalTime, delay: Duration) -> PendingTick {
        if let Some(old) = self.pending.take() {
            warn!(token = old.token.0, due = %old.due, "replacing pending tick");
        }
        self.issued += 1;
        let tick = PendingTick {
            token: TickToken(self.issued),
            due: now.saturating_add(delay),
        };
        debug!(token = tick.token.0, due = %tick.due, "tick armed");
        self.pending = Some(tick);
        tick
    }

    /// Drop the pending tick, if any
    pub fn cancel(&mut self) -> Option<PendingTick> {
        let cancelled = self.pending.take();
        if let Some(tick) = cancelled {
            debug!(token = tick.token.0, "tick cancelled");
        }
        cancelled
    }

    /// Pending tick
    #[must_use]
    pub fn pending(&self) -> Option<PendingTick> {
        self.pending
    }

    /// Pending tick if it is due at `now`
    #[must_use]
    pub fn due(&self, now: LogicalTime) -> Option<PendingTick> {
        self.pending.filter(|tick| tick.due <= now)
    }

    /// Claim the pending tick; false for a stale or unknown token
    pub fn take(&mut self, token: TickToken) -> bool {
        match self.pending {
            Some(tick) if tick.token == token => {
                self.pending = None;
                true
            }
            _ => {
                warn!(token = token.0, "stale tick rejected");
                false
            }
        }
    }

    /// Time from `now` until the pending tick, zero if overdue
    #[must_use]
    pub fn remaining(&self, now: LogicalTime) -> Option<Duration> {
        self.pending
            .map(|tick| tick.due.saturating_duration_since(now))
    }

    /// Whether a tick is pending
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}
