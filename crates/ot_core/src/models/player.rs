//! Player entity: skill profile, AI tendency, court position, fatigue.
//!
//! Fatigue is tracked only for the user-controlled player; the opponent's
//! mutators are no-ops. This asymmetry is intentional.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::shot::ShotKind;

/// Per-player skill attributes on a 1-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet {
    pub serve: u8,
    pub forehand: u8,
    pub backhand: u8,
    pub volley: u8,
    pub drop_shot: u8,
    pub lob: u8,
    /// Movement/Endurance: governs how well drop shots are chased down.
    pub movement: u8,
}

impl SkillSet {
    /// The fixed user profile: average serve, great forehand, weak volley.
    pub const USER: SkillSet = SkillSet {
        serve: 5,
        forehand: 8,
        backhand: 5,
        volley: 3,
        drop_shot: 7,
        lob: 5,
        movement: 5,
    };

    /// Random opponent profile, each skill uniform in 3..=9.
    pub fn random_opponent<R: Rng + ?Sized>(rng: &mut R) -> SkillSet {
        SkillSet {
            serve: rng.gen_range(3..=9),
            forehand: rng.gen_range(3..=9),
            backhand: rng.gen_range(3..=9),
            volley: rng.gen_range(3..=9),
            drop_shot: rng.gen_range(3..=9),
            lob: rng.gen_range(3..=9),
            movement: rng.gen_range(3..=9),
        }
    }
}

/// Behavioral archetype governing an AI opponent's shot-selection weighting.
/// Chosen once at creation and fixed for the player's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tendency {
    AggressiveBaseliner,
    DefensiveBaseliner,
    ServeAndVolleyer,
    AllCourtPlayer,
    ForehandDominant,
    BackhandDominant,
}

impl Tendency {
    pub const ALL: [Tendency; 6] = [
        Tendency::AggressiveBaseliner,
        Tendency::DefensiveBaseliner,
        Tendency::ServeAndVolleyer,
        Tendency::AllCourtPlayer,
        Tendency::ForehandDominant,
        Tendency::BackhandDominant,
    ];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Tendency {
        Tendency::ALL[rng.gen_range(0..Tendency::ALL.len())]
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Tendency::AggressiveBaseliner => "Aggressive Baseliner",
            Tendency::DefensiveBaseliner => "Defensive Baseliner",
            Tendency::ServeAndVolleyer => "Serve-and-Volleyer",
            Tendency::AllCourtPlayer => "All-Court Player",
            Tendency::ForehandDominant => "Forehand Dominant",
            Tendency::BackhandDominant => "Backhand Dominant",
        }
    }
}

/// Court depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Baseline,
    MidCourt,
    Net,
}

impl Position {
    pub fn display_name(self) -> &'static str {
        match self {
            Position::Baseline => "Baseline",
            Position::MidCourt => "Mid-court",
            Position::Net => "Net",
        }
    }
}

/// Lateral court zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourtSide {
    Center,
    ForehandSide,
    BackhandSide,
}

pub const MAX_FATIGUE: u8 = 100;

/// Fatigue recovered between points.
const FATIGUE_RECOVERY: u8 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub is_user: bool,
    pub skills: SkillSet,
    /// Present only for the AI opponent.
    pub tendency: Option<Tendency>,
    pub position: Position,
    pub court_side: CourtSide,
    /// 0..=100, tracked only for the user.
    pub fatigue: u8,
}

impl Player {
    /// The user-controlled player with the fixed skill profile.
    pub fn user() -> Player {
        Player {
            is_user: true,
            skills: SkillSet::USER,
            tendency: None,
            position: Position::Baseline,
            court_side: CourtSide::Center,
            fatigue: 0,
        }
    }

    /// A freshly generated AI opponent with random skills and tendency.
    pub fn opponent<R: Rng + ?Sized>(rng: &mut R) -> Player {
        Player {
            is_user: false,
            skills: SkillSet::random_opponent(rng),
            tendency: Some(Tendency::random(rng)),
            position: Position::Baseline,
            court_side: CourtSide::Center,
            fatigue: 0,
        }
    }

    /// Skill governing a shot kind. Pure lookup.
    ///
    /// Approach shots blend groundstroke and net play; slice leans on the
    /// backhand but is anchored at the midpoint 5 as a default-competent
    /// shot.
    pub fn skill_for(&self, kind: ShotKind) -> f64 {
        let s = &self.skills;
        match kind {
            ShotKind::ForehandCrossCourt | ShotKind::ForehandDownTheLine => s.forehand as f64,
            ShotKind::BackhandCrossCourt | ShotKind::BackhandDownTheLine => s.backhand as f64,
            ShotKind::DropShot => s.drop_shot as f64,
            ShotKind::Lob => s.lob as f64,
            ShotKind::Volley => s.volley as f64,
            ShotKind::ApproachShot => (s.forehand as f64 + s.volley as f64) / 2.0,
            ShotKind::Slice => (s.backhand as f64 + 5.0) / 2.0,
            ShotKind::FirstServe | ShotKind::SecondServe => s.serve as f64,
        }
    }

    /// Add fatigue, clamped to [`MAX_FATIGUE`]. No-op for the opponent.
    pub fn add_fatigue(&mut self, amount: u8) {
        if self.is_user {
            self.fatigue = self.fatigue.saturating_add(amount).min(MAX_FATIGUE);
        }
    }

    /// Partial recovery between points. No-op for the opponent.
    pub fn recover_fatigue(&mut self) {
        if self.is_user {
            self.fatigue = self.fatigue.saturating_sub(FATIGUE_RECOVERY);
        }
    }

    pub fn fatigue_description(&self) -> &'static str {
        match self.fatigue {
            0..=19 => "Fresh",
            20..=39 => "Slightly Tired",
            40..=59 => "Tiring",
            60..=79 => "Very Tired",
            _ => "Exhausted",
        }
    }

    /// Move back to the baseline center for a new point.
    pub fn reset_court(&mut self) {
        self.position = Position::Baseline;
        self.court_side = CourtSide::Center;
    }

    /// Human-readable profile for the status snapshot.
    pub fn profile_description(&self) -> String {
        if self.is_user {
            return "Your Profile:\nServe: Average\nForehand: Great\nBackhand: Average\n\
                    Volley: Bad\nDrop Shot: Good\nMovement/Endurance: Average"
                .to_string();
        }
        let header = match self.tendency {
            Some(tendency) => {
                format!("Opponent Profile (Tendency: {}):\n", tendency.display_name())
            }
            None => "Opponent Profile:\n".to_string(),
        };
        let s = &self.skills;
        let rows = [
            ("Serve", s.serve),
            ("Forehand", s.forehand),
            ("Backhand", s.backhand),
            ("Volley", s.volley),
            ("Drop Shot", s.drop_shot),
            ("Lob", s.lob),
            ("Movement/Endurance", s.movement),
        ];
        let mut out = header;
        for (label, value) in rows {
            out.push_str(&format!("{}: {}/10 ({})\n", label, value, skill_term(value)));
        }
        out
    }
}

fn skill_term(value: u8) -> &'static str {
    match value {
        1 => "Very Poor",
        2 => "Poor",
        3 => "Below Average",
        4 => "Slightly Below Average",
        5 => "Average",
        6 => "Slightly Above Average",
        7 => "Above Average",
        8 => "Good",
        9 => "Excellent",
        10 => "Outstanding",
        _ => "Unknown",
    }
}
