//! Tennis scoring progression: points into games into sets.
//!
//! Advancement happens in exactly one place (`award_point`); the score
//! string and point label are pure reads of already-settled state.
//!
//! Sets follow the plain 2-game-lead rule with no tiebreak: a set ends only
//! at six or more games with a lead of at least two, so 7-6 is unreachable.

use serde::{Deserialize, Serialize};

/// One side of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    User,
    Opponent,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::User => Side::Opponent,
            Side::Opponent => Side::User,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::User => 0,
            Side::Opponent => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::User => "player",
            Side::Opponent => "opponent",
        }
    }
}

/// Scoring milestones produced by a single awarded point, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreEvent {
    Deuce,
    Advantage(Side),
    BackToDeuce,
    /// Game counts captured before any set reset.
    GameWon { winner: Side, games: (u8, u8) },
    /// Set counts after the increment.
    SetWon { winner: Side, sets: (u8, u8) },
    MatchWon(Side),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scoreboard {
    points: [u8; 2],
    games: [u8; 2],
    sets: [u8; 2],
    deuce: bool,
    sets_to_win: u8,
}

impl Scoreboard {
    pub fn new(sets_to_win: u8) -> Scoreboard {
        Scoreboard { points: [0, 0], games: [0, 0], sets: [0, 0], deuce: false, sets_to_win }
    }

    pub fn points(&self, side: Side) -> u8 {
        self.points[side.index()]
    }

    pub fn games(&self, side: Side) -> u8 {
        self.games[side.index()]
    }

    pub fn sets(&self, side: Side) -> u8 {
        self.sets[side.index()]
    }

    pub fn total_games(&self) -> u8 {
        self.games[0] + self.games[1]
    }

    pub fn is_deuce(&self) -> bool {
        self.deuce
    }

    pub fn match_winner(&self) -> Option<Side> {
        if self.sets[0] >= self.sets_to_win {
            Some(Side::User)
        } else if self.sets[1] >= self.sets_to_win {
            Some(Side::Opponent)
        } else {
            None
        }
    }

    /// Reset point score and deuce only; games and sets persist.
    pub fn reset_points(&mut self) {
        self.points = [0, 0];
        self.deuce = false;
    }

    /// Award one point and advance games/sets/match as far as it carries.
    pub fn award_point(&mut self, winner: Side) -> Vec<ScoreEvent> {
        let mut events = Vec::new();
        let w = winner.index();
        let l = 1 - w;

        if !self.deuce {
            self.points[w] += 1;
            if self.points[0] == 3 && self.points[1] == 3 {
                self.deuce = true;
                events.push(ScoreEvent::Deuce);
            } else if self.points[w] > 3 {
                self.win_game(winner, &mut events);
            }
        } else if self.points[w] == self.points[l] {
            // From deuce to advantage.
            self.points[w] += 1;
            events.push(ScoreEvent::Advantage(winner));
        } else if self.points[w] > self.points[l] {
            // Converting the advantage gives a two-point margin.
            self.points[w] += 1;
            self.win_game(winner, &mut events);
        } else {
            // Losing the advantage returns to deuce exactly.
            self.points[w] = self.points[l];
            events.push(ScoreEvent::BackToDeuce);
        }

        events
    }

    fn win_game(&mut self, winner: Side, events: &mut Vec<ScoreEvent>) {
        let w = winner.index();
        let l = 1 - w;
        self.games[w] += 1;
        self.points = [0, 0];
        self.deuce = false;
        events.push(ScoreEvent::GameWon { winner, games: (self.games[0], self.games[1]) });

        if self.games[w] >= 6 && self.games[w] >= self.games[l] + 2 {
            self.sets[w] += 1;
            self.games = [0, 0];
            events.push(ScoreEvent::SetWon { winner, sets: (self.sets[0], self.sets[1]) });
            if self.sets[w] >= self.sets_to_win {
                events.push(ScoreEvent::MatchWon(winner));
            }
        }
    }

    /// Current point score label: "0", "15", "30", "40", "Deuce", "Ad - 40".
    pub fn point_label(&self) -> String {
        if self.deuce {
            if self.points[0] == self.points[1] {
                "Deuce".to_string()
            } else if self.points[0] > self.points[1] {
                "Ad - 40".to_string()
            } else {
                "40 - Ad".to_string()
            }
        } else {
            format!("{} - {}", point_name(self.points[0]), point_name(self.points[1]))
        }
    }

    /// Full formatted score line. Pure read; never advances state.
    pub fn score_line(&self) -> String {
        format!(
            "Sets: {}-{} | Games: {}-{} | Points: {}",
            self.sets[0],
            self.sets[1],
            self.games[0],
            self.games[1],
            self.point_label()
        )
    }
}

fn point_name(points: u8) -> &'static str {
    match points {
        0 => "0",
        1 => "15",
        2 => "30",
        _ => "40",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Scoreboard {
        Scoreboard::new(2)
    }

    fn award_n(board: &mut Scoreboard, side: Side, n: usize) {
        for _ in 0..n {
            board.award_point(side);
        }
    }

    /// Win a full game for `side` from a fresh point score.
    fn win_game(board: &mut Scoreboard, side: Side) {
        award_n(board, side, 4);
    }

    #[test]
    fn point_sequence_labels() {
        let mut board = board();
        assert_eq!(board.point_label(), "0 - 0");
        board.award_point(Side::User);
        assert_eq!(board.point_label(), "15 - 0");
        board.award_point(Side::Opponent);
        assert_eq!(board.point_label(), "15 - 15");
        award_n(&mut board, Side::User, 2);
        assert_eq!(board.point_label(), "40 - 15");
    }

    #[test]
    fn deuce_is_set_at_three_all() {
        let mut board = board();
        award_n(&mut board, Side::User, 3);
        award_n(&mut board, Side::Opponent, 2);
        assert!(!board.is_deuce());
        let events = board.award_point(Side::Opponent);
        assert!(board.is_deuce());
        assert_eq!(events, vec![ScoreEvent::Deuce]);
        assert_eq!(board.point_label(), "Deuce");
    }

    #[test]
    fn deuce_point_gives_advantage_not_game() {
        let mut board = board();
        award_n(&mut board, Side::User, 3);
        award_n(&mut board, Side::Opponent, 3);
        let events = board.award_point(Side::User);
        assert_eq!(events, vec![ScoreEvent::Advantage(Side::User)]);
        assert_eq!(board.games(Side::User), 0);
        assert_eq!(board.point_label(), "Ad - 40");
    }

    #[test]
    fn losing_advantage_returns_to_deuce_exactly() {
        let mut board = board();
        award_n(&mut board, Side::User, 3);
        award_n(&mut board, Side::Opponent, 3);
        board.award_point(Side::User);
        let events = board.award_point(Side::Opponent);
        assert_eq!(events, vec![ScoreEvent::BackToDeuce]);
        assert_eq!(board.points(Side::User), board.points(Side::Opponent));
        assert_eq!(board.point_label(), "Deuce");
    }

    #[test]
    fn two_point_margin_wins_the_game_after_deuce() {
        let mut board = board();
        award_n(&mut board, Side::User, 3);
        award_n(&mut board, Side::Opponent, 3);
        board.award_point(Side::Opponent);
        let events = board.award_point(Side::Opponent);
        assert_eq!(
            events,
            vec![ScoreEvent::GameWon { winner: Side::Opponent, games: (0, 1) }]
        );
        assert_eq!(board.point_label(), "0 - 0");
        assert!(!board.is_deuce());
    }

    #[test]
    fn straight_game_win_before_deuce() {
        let mut board = board();
        award_n(&mut board, Side::User, 2);
        let events = {
            award_n(&mut board, Side::User, 1);
            board.award_point(Side::User)
        };
        assert_eq!(events, vec![ScoreEvent::GameWon { winner: Side::User, games: (1, 0) }]);
    }

    #[test]
    fn six_games_with_one_game_lead_does_not_win_the_set() {
        let mut board = board();
        for _ in 0..5 {
            win_game(&mut board, Side::User);
            win_game(&mut board, Side::Opponent);
        }
        assert_eq!((board.games(Side::User), board.games(Side::Opponent)), (5, 5));
        win_game(&mut board, Side::User);
        assert_eq!(board.games(Side::User), 6);
        assert_eq!(board.sets(Side::User), 0, "6-5 is not a set");
        // 7-5 closes it out.
        win_game(&mut board, Side::User);
        assert_eq!(board.sets(Side::User), 1);
        assert_eq!((board.games(Side::User), board.games(Side::Opponent)), (0, 0));
    }

    #[test]
    fn set_won_at_six_with_two_game_lead() {
        let mut board = board();
        for _ in 0..4 {
            win_game(&mut board, Side::Opponent);
        }
        for _ in 0..5 {
            win_game(&mut board, Side::User);
        }
        award_n(&mut board, Side::User, 3);
        let events = board.award_point(Side::User);
        assert_eq!(
            events,
            vec![
                ScoreEvent::GameWon { winner: Side::User, games: (6, 4) },
                ScoreEvent::SetWon { winner: Side::User, sets: (1, 0) },
            ]
        );
    }

    #[test]
    fn match_won_at_two_sets() {
        let mut board = board();
        for _ in 0..12 {
            win_game(&mut board, Side::User);
        }
        assert_eq!(board.sets(Side::User), 2);
        assert_eq!(board.match_winner(), Some(Side::User));

        // The final point carries all three milestones.
        let mut replay = Scoreboard::new(2);
        for _ in 0..11 {
            win_game(&mut replay, Side::User);
        }
        award_n(&mut replay, Side::User, 3);
        let events = replay.award_point(Side::User);
        assert_eq!(
            events,
            vec![
                ScoreEvent::GameWon { winner: Side::User, games: (6, 0) },
                ScoreEvent::SetWon { winner: Side::User, sets: (2, 0) },
                ScoreEvent::MatchWon(Side::User),
            ]
        );
    }

    #[test]
    fn score_line_format() {
        let mut board = board();
        win_game(&mut board, Side::User);
        board.award_point(Side::Opponent);
        assert_eq!(board.score_line(), "Sets: 0-0 | Games: 1-0 | Points: 0 - 15");
    }

    #[test]
    fn reset_points_preserves_games_and_sets() {
        let mut board = board();
        for _ in 0..7 {
            win_game(&mut board, Side::User);
        }
        award_n(&mut board, Side::User, 2);
        board.reset_points();
        assert_eq!(board.point_label(), "0 - 0");
        assert_eq!(board.sets(Side::User), 1);
        assert_eq!(board.games(Side::User), 1);
    }
}
