//! Score state for the two participants.
//!
//! The participant set is fixed and closed, so the state is a plain struct
//! rather than a map. The serialized JSON shape (`{"brice":N,"cecile":N}`)
//! is the persisted payload; counts only ever move upward except through
//! [`ScoreState::clear`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two fixed participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Participant {
    Brice,
    Cecile,
}

impl Participant {
    /// Storage identifier, matching the persisted JSON field names.
    pub fn as_str(self) -> &'static str {
        match self {
            Participant::Brice => "brice",
            Participant::Cecile => "cecile",
        }
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Participant::Brice => write!(f, "Brice"),
            Participant::Cecile => write!(f, "C\u{e9}cile"),
        }
    }
}

/// Error for an unrecognized participant name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownParticipant(pub String);

impl fmt::Display for UnknownParticipant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown participant '{}' (expected brice or cecile)", self.0)
    }
}

impl std::error::Error for UnknownParticipant {}

impl FromStr for Participant {
    type Err = UnknownParticipant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "brice" => Ok(Participant::Brice),
            "cecile" | "c\u{e9}cile" => Ok(Participant::Cecile),
            other => Err(UnknownParticipant(other.to_string())),
        }
    }
}

/// The participant with the strictly higher count, or a tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaderResult {
    Leader(Participant),
    Tie,
}

/// Per-participant stand-up counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreState {
    pub brice: u32,
    pub cecile: u32,
}

impl ScoreState {
    pub fn count(&self, participant: Participant) -> u32 {
        match participant {
            Participant::Brice => self.brice,
            Participant::Cecile => self.cecile,
        }
    }

    /// Increment one participant's count by exactly 1.
    pub fn bump(&mut self, participant: Participant) {
        match participant {
            Participant::Brice => self.brice += 1,
            Participant::Cecile => self.cecile += 1,
        }
    }

    /// Set every participant's count to 0.
    pub fn clear(&mut self) {
        *self = ScoreState::default();
    }

    /// Strictly-greater comparison; equal counts have no leader.
    pub fn leader(&self) -> LeaderResult {
        use std::cmp::Ordering;
        match self.brice.cmp(&self.cecile) {
            Ordering::Greater => LeaderResult::Leader(Participant::Brice),
            Ordering::Less => LeaderResult::Leader(Participant::Cecile),
            Ordering::Equal => LeaderResult::Tie,
        }
    }

    pub fn total(&self) -> u32 {
        self.brice + self.cecile
    }

    pub fn difference(&self) -> u32 {
        self.brice.abs_diff(self.cecile)
    }
}
