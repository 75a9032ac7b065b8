//! Status snapshot: the read-only projection handed to presentation layers.
//!
//! External renderers consume only this struct; it carries everything needed
//! to draw a court, a scoreboard and the legal input set, without the engine
//! prescribing any layout.

use serde::{Deserialize, Serialize};

use crate::models::{CourtSide, Position, ShotKind};

use super::scoring::Side;
use super::MatchPhase;

/// Shot button groups a presentation layer may enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotCategory {
    FirstServe,
    SecondServe,
    GroundStrokes,
    Special,
}

/// Court placement of one player, for any renderer to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourtView {
    pub position: Position,
    pub court_side: CourtSide,
}

/// Serializable projection of the full match state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub player_profile: String,
    pub opponent_profile: String,
    /// "Sets: a-b | Games: c-d | Points: <label>"
    pub score: String,
    /// Narrative status line.
    pub rally_status: String,
    /// "Fatigue: n/100 (<band>)"
    pub fatigue: String,
    /// Most recent events, truncated to the last 8.
    pub history: Vec<String>,
    pub phase: MatchPhase,
    pub server: Side,
    pub player_turn: bool,
    pub is_serving: bool,
    pub second_serve: bool,
    pub rally_count: u32,
    pub last_shot: Option<ShotKind>,
    pub player_court: CourtView,
    pub opponent_court: CourtView,
    pub available_shots: Vec<ShotCategory>,
}

/// Shot categories currently legal for the user.
pub fn legal_shot_categories(
    player_turn: bool,
    is_serving: bool,
    server_is_user: bool,
    second_serve: bool,
    position: Position,
) -> Vec<ShotCategory> {
    if !player_turn {
        return Vec::new();
    }
    if is_serving && server_is_user {
        if second_serve {
            return vec![ShotCategory::SecondServe];
        }
        return vec![ShotCategory::FirstServe];
    }
    match position {
        Position::Baseline | Position::MidCourt => {
            vec![ShotCategory::GroundStrokes, ShotCategory::Special]
        }
        Position::Net => vec![ShotCategory::Special],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_players_turn_yields_nothing() {
        assert!(legal_shot_categories(false, true, true, false, Position::Baseline).is_empty());
    }

    #[test]
    fn serving_states_offer_the_matching_serve() {
        assert_eq!(
            legal_shot_categories(true, true, true, false, Position::Baseline),
            vec![ShotCategory::FirstServe]
        );
        assert_eq!(
            legal_shot_categories(true, true, true, true, Position::Baseline),
            vec![ShotCategory::SecondServe]
        );
    }

    #[test]
    fn rally_categories_depend_on_depth() {
        assert_eq!(
            legal_shot_categories(true, false, false, false, Position::Baseline),
            vec![ShotCategory::GroundStrokes, ShotCategory::Special]
        );
        assert_eq!(
            legal_shot_categories(true, false, false, false, Position::MidCourt),
            vec![ShotCategory::GroundStrokes, ShotCategory::Special]
        );
        assert_eq!(
            legal_shot_categories(true, false, false, false, Position::Net),
            vec![ShotCategory::Special]
        );
    }
}
