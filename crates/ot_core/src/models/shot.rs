//! Shot catalog: the closed set of shot kinds and their intrinsic parameters.
//!
//! Shot classification is structural (enum predicates) rather than
//! name-based, so the skill lookup and AI weighting tables stay exhaustive
//! and statically checkable.

use serde::{Deserialize, Serialize};

/// Intrinsic parameters of a shot kind.
///
/// `risk` and `base_success` are in `[0, 1]`; `ace_chance` is present for
/// serves only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotProfile {
    pub risk: f64,
    pub base_success: f64,
    pub ace_chance: Option<f64>,
}

impl ShotProfile {
    /// Fallback parameters for a kind without a dedicated catalog entry.
    pub const DEFAULT: ShotProfile =
        ShotProfile { risk: 0.2, base_success: 0.7, ace_chance: None };

    /// Ace chance applied when a serve profile carries none.
    pub const DEFAULT_ACE_CHANCE: f64 = 0.10;
}

/// The fixed set of shot kinds: 4 groundstrokes, 3 special shots, 2 net
/// shots, 2 serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotKind {
    ForehandCrossCourt,
    ForehandDownTheLine,
    BackhandCrossCourt,
    BackhandDownTheLine,
    DropShot,
    Lob,
    Slice,
    ApproachShot,
    Volley,
    FirstServe,
    SecondServe,
}

impl ShotKind {
    pub const ALL: [ShotKind; 11] = [
        ShotKind::ForehandCrossCourt,
        ShotKind::ForehandDownTheLine,
        ShotKind::BackhandCrossCourt,
        ShotKind::BackhandDownTheLine,
        ShotKind::DropShot,
        ShotKind::Lob,
        ShotKind::Slice,
        ShotKind::ApproachShot,
        ShotKind::Volley,
        ShotKind::FirstServe,
        ShotKind::SecondServe,
    ];

    /// Catalog entry for this kind. Total over the closed set; unknown kinds
    /// cannot exist, so [`ShotProfile::DEFAULT`] is reached only if a new
    /// variant is added without a catalog row.
    pub fn profile(self) -> ShotProfile {
        match self {
            ShotKind::ForehandCrossCourt => {
                ShotProfile { risk: 0.10, base_success: 0.75, ace_chance: None }
            }
            ShotKind::ForehandDownTheLine => {
                ShotProfile { risk: 0.20, base_success: 0.65, ace_chance: None }
            }
            ShotKind::BackhandCrossCourt => {
                ShotProfile { risk: 0.15, base_success: 0.70, ace_chance: None }
            }
            ShotKind::BackhandDownTheLine => {
                ShotProfile { risk: 0.25, base_success: 0.60, ace_chance: None }
            }
            ShotKind::DropShot => {
                ShotProfile { risk: 0.35, base_success: 0.55, ace_chance: None }
            }
            ShotKind::Lob => ShotProfile { risk: 0.30, base_success: 0.60, ace_chance: None },
            ShotKind::Slice => ShotProfile { risk: 0.15, base_success: 0.70, ace_chance: None },
            ShotKind::ApproachShot => {
                ShotProfile { risk: 0.25, base_success: 0.65, ace_chance: None }
            }
            ShotKind::Volley => ShotProfile { risk: 0.20, base_success: 0.70, ace_chance: None },
            ShotKind::FirstServe => {
                ShotProfile { risk: 0.25, base_success: 0.65, ace_chance: Some(0.15) }
            }
            ShotKind::SecondServe => {
                ShotProfile { risk: 0.10, base_success: 0.85, ace_chance: Some(0.05) }
            }
        }
    }

    pub fn is_serve(self) -> bool {
        matches!(self, ShotKind::FirstServe | ShotKind::SecondServe)
    }

    /// Forehand groundstrokes (not the forehand-sided approach shot).
    pub fn is_forehand(self) -> bool {
        matches!(self, ShotKind::ForehandCrossCourt | ShotKind::ForehandDownTheLine)
    }

    /// Backhand groundstrokes (slice is classified separately).
    pub fn is_backhand(self) -> bool {
        matches!(self, ShotKind::BackhandCrossCourt | ShotKind::BackhandDownTheLine)
    }

    pub fn is_cross_court(self) -> bool {
        matches!(self, ShotKind::ForehandCrossCourt | ShotKind::BackhandCrossCourt)
    }

    pub fn is_down_the_line(self) -> bool {
        matches!(self, ShotKind::ForehandDownTheLine | ShotKind::BackhandDownTheLine)
    }

    /// Shots that bring the hitter to the net.
    pub fn is_net_shot(self) -> bool {
        matches!(self, ShotKind::ApproachShot | ShotKind::Volley)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ShotKind::ForehandCrossCourt => "Forehand Cross-court",
            ShotKind::ForehandDownTheLine => "Forehand Down-the-line",
            ShotKind::BackhandCrossCourt => "Backhand Cross-court",
            ShotKind::BackhandDownTheLine => "Backhand Down-the-line",
            ShotKind::DropShot => "Drop Shot",
            ShotKind::Lob => "Lob",
            ShotKind::Slice => "Slice",
            ShotKind::ApproachShot => "Approach Shot",
            ShotKind::Volley => "Volley",
            ShotKind::FirstServe => "First Serve",
            ShotKind::SecondServe => "Second Serve",
        }
    }
}
