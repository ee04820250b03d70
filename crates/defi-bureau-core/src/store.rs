//! Persistent score store.
//!
//! Holds the two participants' counts under a single key in the database's
//! kv table, mirroring the original single-key local store. Every successful
//! mutation writes the complete state back before returning, so a crash
//! right after a call never loses that call's effect. Reads never fail
//! outward: absent or unparseable data loads as the all-zero default.

use chrono::Utc;

use crate::error::{CoreError, GateError};
use crate::gate::GateDecision;
use crate::score::{Participant, ScoreState};
use crate::storage::Database;

/// The single kv key holding the serialized [`ScoreState`].
pub const SCORES_KEY: &str = "defi-bureau-scores";

/// Gated, persisted access to the score state.
pub struct ScoreStore {
    db: Database,
}

impl ScoreStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Open the store over the default on-disk database.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened.
    pub fn open() -> Result<Self, CoreError> {
        Ok(Self::new(Database::open()?))
    }

    /// Read the persisted state; absent or malformed data yields zeros.
    pub fn load(&self) -> ScoreState {
        match self.db.kv_get(SCORES_KEY) {
            Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_default(),
            _ => ScoreState::default(),
        }
    }

    /// Count one stand-up for `participant` if the gate allows it.
    ///
    /// A blocked decision fails with the advisory reason and leaves the
    /// state untouched. On success the full state is persisted before
    /// returning and a history row is recorded for the statistics.
    ///
    /// # Errors
    /// Returns a [`GateError`] when the decision disallows scoring.
    pub fn increment(
        &self,
        participant: Participant,
        decision: &GateDecision,
    ) -> Result<ScoreState, GateError> {
        if !decision.allowed {
            return Err(GateError::from_decision(decision));
        }

        let mut state = self.load();
        state.bump(participant);

        // Writes are best-effort: on failure the previously persisted state
        // wins and the next successful mutation rewrites everything.
        let _ = self.persist(&state);
        let _ = self.db.record_standup(participant, Utc::now());

        Ok(state)
    }

    /// Reset every count to zero, but only when `confirmed` is true.
    ///
    /// Confirmation acquisition is the caller's concern; an unconfirmed
    /// reset is a no-op returning the current state.
    pub fn reset(&self, confirmed: bool) -> ScoreState {
        let current = self.load();
        if !confirmed {
            return current;
        }

        let cleared = ScoreState::default();
        let _ = self.persist(&cleared);
        cleared
    }

    fn persist(&self, state: &ScoreState) -> Result<(), CoreError> {
        let json = serde_json::to_string(state)?;
        self.db.kv_set(SCORES_KEY, &json)?;
        Ok(())
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::{evaluate, WorkHoursPolicy};
    use crate::score::LeaderResult;
    use chrono::NaiveDate;

    fn store() -> ScoreStore {
        ScoreStore::new(Database::open_memory().unwrap())
    }

    fn decision_at(y: i32, m: u32, d: u32, hour: u32, minute: u32) -> GateDecision {
        let now = NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap();
        evaluate(now, &WorkHoursPolicy::default())
    }

    #[test]
    fn load_defaults_when_nothing_persisted() {
        let store = store();
        assert_eq!(store.load(), ScoreState::default());
    }

    #[test]
    fn load_defaults_on_corrupted_payload() {
        let store = store();
        store.db.kv_set(SCORES_KEY, "{not json").unwrap();
        assert_eq!(store.load(), ScoreState::default());

        store.db.kv_set(SCORES_KEY, r#"{"wrong":"shape"}"#).unwrap();
        assert_eq!(store.load(), ScoreState::default());
    }

    #[test]
    fn persisted_state_round_trips() {
        let store = store();
        let allowed = GateDecision::allowed();
        store.increment(Participant::Brice, &allowed).unwrap();
        store.increment(Participant::Brice, &allowed).unwrap();
        store.increment(Participant::Cecile, &allowed).unwrap();
        assert_eq!(store.load(), ScoreState { brice: 2, cecile: 1 });
    }

    #[test]
    fn blocked_increment_leaves_state_unchanged() {
        let store = store();
        let blocked = GateDecision::blocked("challenge active only on weekdays".to_string());
        let err = store.increment(Participant::Brice, &blocked).unwrap_err();
        assert_eq!(err.reason, "challenge active only on weekdays");
        assert_eq!(store.load(), ScoreState::default());
    }

    #[test]
    fn unconfirmed_reset_is_a_no_op() {
        let store = store();
        store
            .increment(Participant::Cecile, &GateDecision::allowed())
            .unwrap();
        let state = store.reset(false);
        assert_eq!(state, ScoreState { brice: 0, cecile: 1 });
        assert_eq!(store.load(), state);
    }

    #[test]
    fn confirmed_reset_zeroes_everything() {
        let store = store();
        let allowed = GateDecision::allowed();
        store.increment(Participant::Brice, &allowed).unwrap();
        store.increment(Participant::Cecile, &allowed).unwrap();
        let state = store.reset(true);
        assert_eq!(state, ScoreState::default());
        assert_eq!(store.load(), ScoreState::default());
    }

    #[test]
    fn increments_record_history_rows() {
        let store = store();
        let allowed = GateDecision::allowed();
        store.increment(Participant::Brice, &allowed).unwrap();
        store.increment(Participant::Cecile, &allowed).unwrap();
        let stats = store.database().stats_all().unwrap();
        assert_eq!(stats.brice, 1);
        assert_eq!(stats.cecile, 1);
    }

    #[test]
    fn wednesday_morning_scenario() {
        let store = store();
        let decision = decision_at(2025, 1, 1, 10, 0);
        assert!(decision.allowed);

        let state = store.increment(Participant::Brice, &decision).unwrap();
        assert_eq!(state, ScoreState { brice: 1, cecile: 0 });
        assert_eq!(state.leader(), LeaderResult::Leader(Participant::Brice));

        let state = store.increment(Participant::Cecile, &decision).unwrap();
        assert_eq!(state, ScoreState { brice: 1, cecile: 1 });
        assert_eq!(state.leader(), LeaderResult::Tie);

        let state = store.reset(true);
        assert_eq!(state, ScoreState::default());
    }

    #[test]
    fn saturday_noon_scenario() {
        let store = store();
        let decision = decision_at(2025, 1, 4, 12, 0);
        let err = store.increment(Participant::Brice, &decision).unwrap_err();
        assert_eq!(err.reason, "challenge active only on weekdays");
        assert_eq!(store.load(), ScoreState::default());
    }

    #[test]
    fn friday_evening_scenario() {
        let store = store();
        let decision = decision_at(2025, 1, 3, 16, 45);
        let err = store.increment(Participant::Brice, &decision).unwrap_err();
        assert!(err.reason.contains("Friday"));
        assert_eq!(store.load(), ScoreState::default());
    }
}
