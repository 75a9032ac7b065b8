//! AI shot selection: weighted random choice over context-filtered
//! candidates, biased by the opponent's skills and fixed tendency.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::models::{Player, Position, ShotKind, Tendency};

use super::outcome::RallyContext;

const BASELINE_CANDIDATES: [ShotKind; 8] = [
    ShotKind::ForehandCrossCourt,
    ShotKind::ForehandDownTheLine,
    ShotKind::BackhandCrossCourt,
    ShotKind::BackhandDownTheLine,
    ShotKind::DropShot,
    ShotKind::Lob,
    ShotKind::Slice,
    ShotKind::ApproachShot,
];

/// Mid-court drops the lob.
const MID_COURT_CANDIDATES: [ShotKind; 7] = [
    ShotKind::ForehandCrossCourt,
    ShotKind::ForehandDownTheLine,
    ShotKind::BackhandCrossCourt,
    ShotKind::BackhandDownTheLine,
    ShotKind::DropShot,
    ShotKind::ApproachShot,
    ShotKind::Slice,
];

const NET_CANDIDATES: [ShotKind; 2] = [ShotKind::Volley, ShotKind::DropShot];

/// Safe groundstrokes used if the candidate set is somehow empty.
const FALLBACK_CANDIDATES: [ShotKind; 2] =
    [ShotKind::ForehandCrossCourt, ShotKind::BackhandCrossCourt];

/// Candidate shots for the opponent's current depth.
pub fn candidates_for(position: Position) -> &'static [ShotKind] {
    match position {
        Position::Baseline => &BASELINE_CANDIDATES,
        Position::MidCourt => &MID_COURT_CANDIDATES,
        Position::Net => &NET_CANDIDATES,
    }
}

/// Selection weight for one candidate shot. Pure.
pub fn shot_weight(
    kind: ShotKind,
    opponent: &Player,
    user_position: Position,
    ctx: &RallyContext,
) -> f64 {
    // Quadratic emphasis on skill advantage or disadvantage.
    let mut weight = (opponent.skill_for(kind) / 5.0).powi(2);

    // Direction-change heuristic after a cross-court ball.
    if let Some(last) = ctx.last_shot {
        if last.is_cross_court() && kind.is_down_the_line() {
            weight *= 1.3;
        }
    }

    match opponent.tendency {
        Some(Tendency::AggressiveBaseliner) => {
            if kind.is_down_the_line() {
                weight *= 1.5;
            }
            if kind == ShotKind::DropShot {
                weight *= 0.7;
            }
        }
        Some(Tendency::DefensiveBaseliner) => {
            if kind.is_cross_court() {
                weight *= 1.5;
            }
            if kind.is_net_shot() {
                weight *= 0.5;
            }
        }
        Some(Tendency::ServeAndVolleyer) => {
            if kind.is_net_shot() {
                weight *= 2.0;
            }
        }
        Some(Tendency::ForehandDominant) => {
            if kind.is_forehand() {
                weight *= 1.8;
            }
        }
        Some(Tendency::BackhandDominant) => {
            if kind.is_backhand() {
                weight *= 1.8;
            }
        }
        Some(Tendency::AllCourtPlayer) | None => {}
    }

    if opponent.position == Position::Net {
        if kind == ShotKind::Volley {
            weight *= 3.0;
        } else {
            weight *= 0.2;
        }
    }

    if user_position == Position::Net && kind == ShotKind::Lob {
        weight *= 2.0;
    }

    // Aggressive archetypes get impatient in long rallies.
    if ctx.rally_count > 6
        && matches!(
            opponent.tendency,
            Some(Tendency::AggressiveBaseliner) | Some(Tendency::ForehandDominant)
        )
        && (kind.is_down_the_line() || kind == ShotKind::DropShot)
    {
        weight *= 1.0 + (ctx.rally_count - 6) as f64 * 0.1;
    }

    weight
}

/// Choose the opponent's next shot.
pub fn choose_shot<R: Rng + ?Sized>(
    opponent: &Player,
    user_position: Position,
    ctx: &RallyContext,
    rng: &mut R,
) -> ShotKind {
    let mut candidates = candidates_for(opponent.position);
    if candidates.is_empty() {
        candidates = &FALLBACK_CANDIDATES;
    }
    let weights: Vec<f64> =
        candidates.iter().map(|&kind| shot_weight(kind, opponent, user_position, ctx)).collect();
    candidates[weighted_pick(&weights, rng)]
}

/// Index draw over non-normalized weights, uniform if the total is zero or
/// otherwise unusable.
pub(crate) fn weighted_pick<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> usize {
    match WeightedIndex::new(weights) {
        Ok(dist) => dist.sample(rng),
        Err(_) => rng.gen_range(0..weights.len()),
    }
}
