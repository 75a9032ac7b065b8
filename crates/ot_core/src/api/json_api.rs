//! String-in / string-out JSON boundary around the match engine.
//!
//! Requests are tagged by `action`; every response is a serialized
//! `MatchSnapshot`, so a renderer can stay stateless and redraw from each
//! reply.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::engine::{MatchEngine, MatchSnapshot};
use crate::error::Result;
use crate::models::ShotKind;

/// One engine action, deserialized from a tagged JSON object.
///
/// ```json
/// {"action": "player_hit", "shot": "forehand_cross_court"}
/// {"action": "opponent_hit"}
/// {"action": "status"}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ActionRequest {
    PlayerHit { shot: ShotKind },
    OpponentHit,
    NewGame,
    NewMatch,
    Status,
}

/// Parse one JSON request, apply it to the engine and return the resulting
/// snapshot as JSON.
pub fn handle_action_json<R: Rng>(engine: &mut MatchEngine<R>, request: &str) -> Result<String> {
    let action: ActionRequest = serde_json::from_str(request)?;
    let snapshot = match action {
        ActionRequest::PlayerHit { shot } => engine.player_hit(shot),
        ActionRequest::OpponentHit => engine.opponent_hit(),
        ActionRequest::NewGame => engine.start_new_game(),
        ActionRequest::NewMatch => engine.start_new_match(),
        ActionRequest::Status => engine.snapshot(),
    };
    snapshot_json(&snapshot)
}

/// Serialize a snapshot to JSON.
pub fn snapshot_json(snapshot: &MatchSnapshot) -> Result<String> {
    Ok(serde_json::to_string(snapshot)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MatchPhase;
    use crate::error::CoreError;

    #[test]
    fn status_request_returns_a_full_snapshot() {
        let mut engine = MatchEngine::from_seed(42);
        let reply = handle_action_json(&mut engine, r#"{"action": "status"}"#).unwrap();
        assert!(reply.contains("Sets: 0-0 | Games: 0-0 | Points: 0 - 0"));
        let snapshot: MatchSnapshot = serde_json::from_str(&reply).unwrap();
        assert_eq!(snapshot.phase, MatchPhase::ReadyToServe);
        assert_eq!(snapshot, engine.snapshot());
    }

    #[test]
    fn player_hit_request_carries_the_shot_kind() {
        let request = r#"{"action": "player_hit", "shot": "first_serve"}"#;
        let action: ActionRequest = serde_json::from_str(request).unwrap();
        assert_eq!(action, ActionRequest::PlayerHit { shot: ShotKind::FirstServe });
    }

    #[test]
    fn player_hit_request_advances_the_engine() {
        let mut engine = MatchEngine::from_seed(42);
        let request = r#"{"action": "player_hit", "shot": "first_serve"}"#;
        let reply = handle_action_json(&mut engine, request).unwrap();
        let snapshot: MatchSnapshot = serde_json::from_str(&reply).unwrap();
        // The serve either resolved the point or started a rally; either
        // way the reply mirrors the engine state.
        assert_eq!(snapshot, engine.snapshot());
    }

    #[test]
    fn new_match_request_resets_the_score() {
        let mut engine = MatchEngine::from_seed(7);
        engine.player_hit(ShotKind::FirstServe);
        let reply = handle_action_json(&mut engine, r#"{"action": "new_match"}"#).unwrap();
        assert!(reply.contains("Sets: 0-0 | Games: 0-0 | Points: 0 - 0"));
    }

    #[test]
    fn malformed_json_is_a_deserialization_error() {
        let mut engine = MatchEngine::from_seed(42);
        let err = handle_action_json(&mut engine, "{not json").unwrap_err();
        assert!(matches!(err, CoreError::DeserializationError(_)));
    }

    #[test]
    fn unknown_action_is_a_deserialization_error() {
        let mut engine = MatchEngine::from_seed(42);
        let err = handle_action_json(&mut engine, r#"{"action": "moonball"}"#).unwrap_err();
        assert!(matches!(err, CoreError::DeserializationError(_)));
    }

    #[test]
    fn unknown_shot_kind_is_rejected() {
        let request = r#"{"action": "player_hit", "shot": "tweener"}"#;
        assert!(serde_json::from_str::<ActionRequest>(request).is_err());
    }
}
