use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::score::{LeaderResult, Participant};

/// Every state change produces an Event. The CLI prints them as JSON;
/// display surfaces consume them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A stand-up was counted for a participant.
    ScoreIncremented {
        participant: Participant,
        count: u32,
        at: DateTime<Utc>,
    },
    /// All counts were reset to zero.
    ScoresReset {
        at: DateTime<Utc>,
    },
    /// The cached gate decision flipped between allowed and blocked.
    GateChanged {
        allowed: bool,
        reason: Option<String>,
        at: DateTime<Utc>,
    },
    /// Full board state: counts, derived stats, and the current gate status.
    BoardSnapshot {
        brice: u32,
        cecile: u32,
        leader: LeaderResult,
        total: u32,
        difference: u32,
        allowed: bool,
        reason: Option<String>,
        at: DateTime<Utc>,
    },
}
