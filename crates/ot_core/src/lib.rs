//! # ot_core - Deterministic Tennis Match Simulation Engine
//!
//! This library provides a turn-based, point-by-point tennis match
//! simulation with a JSON API for easy integration with UIs and game
//! engines.
//!
//! ## Features
//! - 100% deterministic simulation (same seed = same match)
//! - Probabilistic shot outcome model with risk/skill/fatigue modifiers
//! - Court positioning and rally momentum
//! - Opponent AI with distinct play-style tendencies
//! - Full tennis scoring (deuce, advantage, games, sets, best of 3)
//! - JSON API for easy integration

pub mod api;
pub mod engine;
pub mod error;
pub mod models;

// Re-export the main API surface
pub use api::{handle_action_json, snapshot_json, ActionRequest};
pub use engine::outcome::{resolve_shot, success_probability};
pub use engine::{
    CourtView, MatchEngine, MatchPhase, MatchSnapshot, RallyContext, ScoreEvent, Scoreboard,
    ShotCategory, ShotOutcome, Side,
};
pub use error::{CoreError, Result};
pub use models::{
    CourtSide, Player, Position, ShotKind, ShotProfile, SkillSet, Tendency, MAX_FATIGUE,
};
