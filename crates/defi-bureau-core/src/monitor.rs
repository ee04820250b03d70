//! Cached gate decision, re-evaluated on a caller-driven tick.
//!
//! The monitor has no internal thread; the caller invokes `tick()` once per
//! minute with the current local time. It mutates only the cached decision,
//! never score state.

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::events::Event;
use crate::gate::{evaluate, GateDecision, WorkHoursPolicy};

/// Caches the current [`GateDecision`] between evaluations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateMonitor {
    policy: WorkHoursPolicy,
    decision: GateDecision,
}

impl GateMonitor {
    /// Create a monitor and evaluate immediately (the "on mount" check).
    pub fn new(policy: WorkHoursPolicy, now: NaiveDateTime) -> Self {
        let decision = evaluate(now, &policy);
        Self { policy, decision }
    }

    /// The cached decision from the most recent evaluation.
    pub fn decision(&self) -> &GateDecision {
        &self.decision
    }

    /// Re-evaluate at `now`. Returns `Some(Event::GateChanged)` only when
    /// the allowed flag flips; the advisory message is refreshed either way.
    pub fn tick(&mut self, now: NaiveDateTime) -> Option<Event> {
        let next = evaluate(now, &self.policy);
        let flipped = next.allowed != self.decision.allowed;
        self.decision = next;
        if flipped {
            Some(Event::GateChanged {
                allowed: self.decision.allowed,
                reason: self.decision.reason.clone(),
                at: Utc::now(),
            })
        } else {
            None
        }
    }
}
