//! # Défi Bureau Core Library
//!
//! Core business logic for Défi Bureau, a two-person "stand-up challenge"
//! counter. Two participants each accrue a tally of stand-up actions during
//! a configurable work-hours window; scores persist locally between runs.
//! All operations are available via the standalone CLI binary, which is a
//! thin layer over this library.
//!
//! ## Architecture
//!
//! - **Gate**: A pure function of wall-clock time deciding whether scoring
//!   is currently permitted, with a human-readable advisory when it is not
//! - **Score store**: Holds the two counts, derives the leader, and persists
//!   the full state on every mutation
//! - **Monitor**: A caller-driven minute tick that caches the current gate
//!   decision; it never mutates score state
//! - **Storage**: SQLite-backed key-value persistence and TOML configuration
//!
//! ## Key Components
//!
//! - [`evaluate`]: The work-hours gate
//! - [`ScoreStore`]: Gated increments, confirmed resets, load-or-default
//! - [`GateMonitor`]: Cached gate decision, re-evaluated per tick
//! - [`Config`]: Work-hours window configuration

pub mod error;
pub mod events;
pub mod gate;
pub mod monitor;
pub mod score;
pub mod storage;
pub mod store;

pub use error::{ConfigError, CoreError, GateError, Result};
pub use events::Event;
pub use gate::{evaluate, GateDecision, WorkHoursPolicy};
pub use monitor::GateMonitor;
pub use score::{LeaderResult, Participant, ScoreState};
pub use storage::{data_dir, Config, Database, Stats};
pub use store::{ScoreStore, SCORES_KEY};
