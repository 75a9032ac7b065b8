//! Match Simulation Engine
//!
//! Core turn-based tennis simulation. The engine orchestrates:
//!
//! - Score state management (points, games, sets, serve rotation)
//! - Shot resolution via the outcome model (`outcome.rs`)
//! - Court positioning updates (`positioning.rs`)
//! - Opponent shot selection (`ai_policy.rs`)
//! - Status snapshots for external presentation layers (`snapshot.rs`)
//!
//! The simulation follows a 3-layer split:
//! - L1: `outcome.rs` / `ai_policy.rs` - stateless probability and weighting
//!   functions
//! - L2: `scoring.rs` - pure score progression (point -> game -> set -> match)
//! - L3: `mod.rs` - the stateful `MatchEngine` with the two external
//!   transitions (`player_hit`, `opponent_hit`) plus lifecycle entry points
//!
//! Exactly one logical actor is to move at any time; calls out of turn and
//! calls after match end are silent no-ops returning the current snapshot.
//! All randomness flows through one injectable source (`ChaCha8Rng` by
//! default), so the same seed replays the same match.

pub mod ai_policy;
pub mod outcome;
pub mod positioning;
pub mod scoring;
pub mod snapshot;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::models::{Player, ShotKind};

pub use outcome::{RallyContext, ShotOutcome};
pub use scoring::{ScoreEvent, Scoreboard, Side};
pub use snapshot::{legal_shot_categories, CourtView, MatchSnapshot, ShotCategory};

/// Best of 3: two sets win the match.
const SETS_TO_WIN: u8 = 2;

/// Snapshot history window.
const HISTORY_WINDOW: usize = 8;

const SERVE_FATIGUE_COST: u8 = 3;
const RALLY_FATIGUE_BASE: u32 = 5;

/// Match state machine phases. `MatchOver` is terminal; every other phase
/// loops back to `ReadyToServe` through the rally reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    ReadyToServe,
    FirstServe,
    SecondServe,
    RallyPlayerTurn,
    RallyOpponentTurn,
    PointOver,
    GameOver,
    SetOver,
    MatchOver,
}

/// Fatigue charged for one rally shot: special shots cost more, and long
/// rallies grind.
fn rally_fatigue_cost(kind: ShotKind, rally_count: u32) -> u8 {
    let mut cost = RALLY_FATIGUE_BASE;
    if matches!(kind, ShotKind::DropShot | ShotKind::Lob) {
        cost += 2;
    }
    if rally_count > 4 {
        cost += rally_count - 4;
    }
    cost.min(u8::MAX as u32) as u8
}

fn server_title(side: Side) -> &'static str {
    match side {
        Side::User => "Player",
        Side::Opponent => "Opponent",
    }
}

/// The aggregate root: owns both players, the scoreboard, the rally
/// sub-state and the randomness source.
#[derive(Debug)]
pub struct MatchEngine<R: Rng = ChaCha8Rng> {
    player: Player,
    opponent: Player,
    score: Scoreboard,
    server: Side,
    phase: MatchPhase,
    is_serving: bool,
    second_serve: bool,
    player_turn: bool,
    rally_count: u32,
    last_shot: Option<ShotKind>,
    history: Vec<String>,
    status_line: String,
    rng: R,
}

impl MatchEngine<ChaCha8Rng> {
    /// Engine with the default deterministic randomness source.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> MatchEngine<R> {
    /// Engine with an injected randomness source.
    pub fn with_rng(mut rng: R) -> Self {
        let opponent = Player::opponent(&mut rng);
        let mut engine = MatchEngine {
            player: Player::user(),
            opponent,
            score: Scoreboard::new(SETS_TO_WIN),
            server: Side::User,
            phase: MatchPhase::ReadyToServe,
            is_serving: true,
            second_serve: false,
            player_turn: true,
            rally_count: 0,
            last_shot: None,
            history: Vec::new(),
            status_line: String::new(),
            rng,
        };
        engine.server = engine.random_server();
        engine.reset_rally();
        engine
            .history
            .push(format!("New match started. {} is serving.", server_title(engine.server)));
        engine
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn server(&self) -> Side {
        self.server
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.score
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn opponent(&self) -> &Player {
        &self.opponent
    }

    /// Start a completely new match against a freshly generated opponent.
    pub fn start_new_match(&mut self) -> MatchSnapshot {
        self.opponent = Player::opponent(&mut self.rng);
        self.score = Scoreboard::new(SETS_TO_WIN);
        self.server = self.random_server();
        self.history.clear();
        self.reset_rally();
        self.history.push(format!(
            "New match started against a new opponent. {} is serving.",
            server_title(self.server)
        ));
        self.status_line =
            format!("New match started. {} is serving.", server_title(self.server));
        self.snapshot()
    }

    /// Start the next game: point score and rally state reset, games and
    /// sets persist. No-op once the match is over.
    pub fn start_new_game(&mut self) -> MatchSnapshot {
        if self.phase == MatchPhase::MatchOver {
            return self.snapshot();
        }
        self.score.reset_points();
        let total = self.score.total_games();
        if total == 0 {
            // First game of a set: randomize the server.
            self.server = self.random_server();
        } else if total % 2 == 1 {
            self.server = self.server.opposite();
        }
        self.reset_rally();
        let line = format!("New game started. {} is serving.", server_title(self.server));
        self.status_line = line.clone();
        self.history.push(line);
        self.snapshot()
    }

    /// Process the user's shot. Valid only on the user's turn; otherwise a
    /// silent no-op.
    pub fn player_hit(&mut self, kind: ShotKind) -> MatchSnapshot {
        if self.phase == MatchPhase::MatchOver || !self.player_turn {
            return self.snapshot();
        }
        if self.is_serving {
            // Coerce the shot to the serve the state demands.
            let kind = if self.second_serve {
                ShotKind::SecondServe
            } else if kind.is_serve() {
                kind
            } else {
                ShotKind::FirstServe
            };
            self.phase = if self.second_serve {
                MatchPhase::SecondServe
            } else {
                MatchPhase::FirstServe
            };
            self.history.push(format!("You serve: {}", kind.display_name()));
            self.player.add_fatigue(SERVE_FATIGUE_COST);
            let ctx = RallyContext {
                rally_count: self.rally_count,
                last_shot: self.last_shot,
                skill_override: Some(self.player.skills.serve as f64 - 5.0),
            };
            let outcome =
                outcome::resolve_shot(kind, &self.player, &self.opponent, &ctx, true, &mut self.rng);
            tracing::trace!(shot = kind.display_name(), ?outcome, "user serve");
            match outcome {
                ShotOutcome::Fault if !self.second_serve => {
                    self.second_serve = true;
                    self.phase = MatchPhase::SecondServe;
                    self.history.push("Fault! Second serve needed.".to_string());
                    self.status_line = "Fault on first serve. Select 'Second Serve'.".to_string();
                }
                ShotOutcome::Fault => {
                    self.history.push("Double fault!".to_string());
                    self.record_point(Side::Opponent);
                    self.end_point("Point lost. You made a double fault.");
                }
                ShotOutcome::Ace => {
                    self.history.push("Ace!".to_string());
                    self.record_point(Side::User);
                    self.end_point("Point won! You hit an ace!");
                }
                _ => {
                    self.is_serving = false;
                    self.last_shot = Some(kind);
                    self.player_turn = false;
                    self.phase = MatchPhase::RallyOpponentTurn;
                    positioning::apply_shot(
                        kind,
                        &mut self.player,
                        &mut self.opponent,
                        &mut self.rng,
                    );
                    self.status_line = format!(
                        "You served a {}. Opponent will return the serve.",
                        kind.display_name()
                    );
                }
            }
        } else {
            self.rally_count += 1;
            self.history.push(format!("Rally #{}: You hit {}", self.rally_count, kind.display_name()));
            self.player.add_fatigue(rally_fatigue_cost(kind, self.rally_count));
            let ctx = RallyContext {
                rally_count: self.rally_count,
                last_shot: self.last_shot,
                skill_override: None,
            };
            let outcome = outcome::resolve_shot(
                kind,
                &self.player,
                &self.opponent,
                &ctx,
                false,
                &mut self.rng,
            );
            tracing::trace!(shot = kind.display_name(), ?outcome, rally = self.rally_count, "user shot");
            positioning::apply_shot(kind, &mut self.player, &mut self.opponent, &mut self.rng);
            match outcome {
                ShotOutcome::Error => {
                    self.history
                        .push(format!("You made an error with your {}.", kind.display_name()));
                    self.record_point(Side::Opponent);
                    self.end_point(&format!(
                        "Point lost. You made an error with your {}.",
                        kind.display_name()
                    ));
                }
                ShotOutcome::Winner => {
                    self.history
                        .push(format!("You hit a winner with your {}!", kind.display_name()));
                    self.record_point(Side::User);
                    self.end_point(&format!(
                        "Point won! You hit a winner with your {}!",
                        kind.display_name()
                    ));
                }
                _ => {
                    self.last_shot = Some(kind);
                    self.player_turn = false;
                    self.phase = MatchPhase::RallyOpponentTurn;
                    self.status_line =
                        format!("You hit a {}. Opponent's turn.", kind.display_name());
                }
            }
        }
        self.snapshot()
    }

    /// Advance the opponent's turn: serve from the serve state, otherwise
    /// let the AI policy pick a rally shot. Silent no-op on the user's turn.
    pub fn opponent_hit(&mut self) -> MatchSnapshot {
        if self.phase == MatchPhase::MatchOver || self.player_turn {
            return self.snapshot();
        }
        if self.is_serving {
            let kind = if self.second_serve { ShotKind::SecondServe } else { ShotKind::FirstServe };
            self.phase = if self.second_serve {
                MatchPhase::SecondServe
            } else {
                MatchPhase::FirstServe
            };
            self.history.push(format!("Opponent serves: {}", kind.display_name()));
            let ctx = RallyContext {
                rally_count: self.rally_count,
                last_shot: self.last_shot,
                skill_override: Some(self.opponent.skills.serve as f64 - 5.0),
            };
            let outcome = outcome::resolve_shot(
                kind,
                &self.opponent,
                &self.player,
                &ctx,
                true,
                &mut self.rng,
            );
            tracing::trace!(shot = kind.display_name(), ?outcome, "opponent serve");
            match outcome {
                ShotOutcome::Fault if !self.second_serve => {
                    // Wait for the next call rather than auto-serving again.
                    self.second_serve = true;
                    self.phase = MatchPhase::SecondServe;
                    self.history.push("Fault! Second serve needed.".to_string());
                    self.status_line =
                        "Opponent faulted on first serve. Waiting for second serve.".to_string();
                }
                ShotOutcome::Fault => {
                    self.history.push("Double fault!".to_string());
                    self.record_point(Side::User);
                    self.end_point("Point won! Opponent made a double fault.");
                }
                ShotOutcome::Ace => {
                    self.history.push("Ace!".to_string());
                    self.record_point(Side::Opponent);
                    self.end_point("Point lost. Opponent hit an ace!");
                }
                _ => {
                    self.is_serving = false;
                    self.last_shot = Some(kind);
                    self.player_turn = true;
                    self.phase = MatchPhase::RallyPlayerTurn;
                    positioning::apply_shot(
                        kind,
                        &mut self.opponent,
                        &mut self.player,
                        &mut self.rng,
                    );
                    self.status_line = format!(
                        "Opponent served a {}. Your turn to return.",
                        kind.display_name()
                    );
                }
            }
        } else {
            let choice_ctx = RallyContext {
                rally_count: self.rally_count,
                last_shot: self.last_shot,
                skill_override: None,
            };
            let kind = ai_policy::choose_shot(
                &self.opponent,
                self.player.position,
                &choice_ctx,
                &mut self.rng,
            );
            self.rally_count += 1;
            self.history
                .push(format!("Rally #{}: Opponent hits {}", self.rally_count, kind.display_name()));
            // Opponent fatigue is not tracked.
            let ctx = RallyContext { rally_count: self.rally_count, ..choice_ctx };
            let outcome = outcome::resolve_shot(
                kind,
                &self.opponent,
                &self.player,
                &ctx,
                false,
                &mut self.rng,
            );
            tracing::trace!(shot = kind.display_name(), ?outcome, rally = self.rally_count, "opponent shot");
            positioning::apply_shot(kind, &mut self.opponent, &mut self.player, &mut self.rng);
            match outcome {
                ShotOutcome::Error => {
                    self.history
                        .push(format!("Opponent made an error with their {}.", kind.display_name()));
                    self.record_point(Side::User);
                    self.end_point(&format!(
                        "Point won! Opponent made an error with their {}.",
                        kind.display_name()
                    ));
                }
                ShotOutcome::Winner => {
                    self.history
                        .push(format!("Opponent hit a winner with their {}!", kind.display_name()));
                    self.record_point(Side::Opponent);
                    self.end_point(&format!(
                        "Point lost. Opponent hit a winner with their {}!",
                        kind.display_name()
                    ));
                }
                _ => {
                    self.last_shot = Some(kind);
                    self.player_turn = true;
                    self.phase = MatchPhase::RallyPlayerTurn;
                    self.status_line =
                        format!("Opponent hit a {}. Your turn.", kind.display_name());
                }
            }
        }
        self.snapshot()
    }

    /// Read-only projection of the current state.
    pub fn snapshot(&self) -> MatchSnapshot {
        let start = self.history.len().saturating_sub(HISTORY_WINDOW);
        MatchSnapshot {
            player_profile: self.player.profile_description(),
            opponent_profile: self.opponent.profile_description(),
            score: self.score.score_line(),
            rally_status: self.status_line.clone(),
            fatigue: format!(
                "Fatigue: {}/100 ({})",
                self.player.fatigue,
                self.player.fatigue_description()
            ),
            history: self.history[start..].to_vec(),
            phase: self.phase,
            server: self.server,
            player_turn: self.player_turn,
            is_serving: self.is_serving,
            second_serve: self.second_serve,
            rally_count: self.rally_count,
            last_shot: self.last_shot,
            player_court: CourtView {
                position: self.player.position,
                court_side: self.player.court_side,
            },
            opponent_court: CourtView {
                position: self.opponent.position,
                court_side: self.opponent.court_side,
            },
            available_shots: legal_shot_categories(
                self.player_turn,
                self.is_serving,
                self.server == Side::User,
                self.second_serve,
                self.player.position,
            ),
        }
    }

    fn random_server(&mut self) -> Side {
        if self.rng.gen_bool(0.5) {
            Side::User
        } else {
            Side::Opponent
        }
    }

    /// Reset rally-local state for the next point. Scores are never touched
    /// here.
    fn reset_rally(&mut self) {
        self.rally_count = 0;
        self.last_shot = None;
        self.is_serving = true;
        self.second_serve = false;
        self.player_turn = self.server == Side::User;
        self.player.reset_court();
        self.opponent.reset_court();
        self.player.recover_fatigue();
        self.phase = MatchPhase::ReadyToServe;
        self.status_line = if self.player_turn {
            "Your serve. Select 'First Serve'.".to_string()
        } else {
            "Opponent's serve. Advance the rally to see their serve.".to_string()
        };
    }

    /// Settle one point: append milestones to the history and advance the
    /// scoreboard as far as the point carries.
    fn record_point(&mut self, winner: Side) {
        self.history.push(format!("Point won by {}!", winner.label()));
        self.phase = MatchPhase::PointOver;
        for event in self.score.award_point(winner) {
            match event {
                ScoreEvent::Deuce => self.history.push("Deuce!".to_string()),
                ScoreEvent::Advantage(side) => {
                    self.history.push(format!("Advantage {}!", side.label()));
                }
                ScoreEvent::BackToDeuce => self.history.push("Back to deuce!".to_string()),
                ScoreEvent::GameWon { winner, games } => {
                    self.history.push(format!(
                        "Game won by {}! Score: {}-{}",
                        winner.label(),
                        games.0,
                        games.1
                    ));
                    self.server = self.server.opposite();
                    self.phase = MatchPhase::GameOver;
                    tracing::debug!(winner = winner.label(), ?games, "game complete");
                }
                ScoreEvent::SetWon { winner, sets } => {
                    self.history.push(format!(
                        "Set won by {}! Sets: {}-{}",
                        winner.label(),
                        sets.0,
                        sets.1
                    ));
                    self.phase = MatchPhase::SetOver;
                    tracing::debug!(winner = winner.label(), ?sets, "set complete");
                }
                ScoreEvent::MatchWon(side) => {
                    self.history.push(format!("Match won by {}!", side.label()));
                    self.status_line = format!("Match won by {}!", side.label());
                    self.phase = MatchPhase::MatchOver;
                    tracing::debug!(winner = side.label(), "match complete");
                }
            }
        }
    }

    /// Close out a finished point: reset the rally and prepend the point
    /// summary to the serve prompt. Terminal once the match is over.
    fn end_point(&mut self, summary: &str) {
        if self.phase != MatchPhase::MatchOver {
            self.reset_rally();
            self.status_line = format!("{summary} {}", self.status_line);
        }
    }
}
