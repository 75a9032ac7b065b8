//! Shot outcome model.
//!
//! All functions here are pure given their randomness source - they take the
//! hitter, receiver and rally context as input and resolve a single shot.
//! The probability assembly is split out of the draw so monotonicity and
//! clamping can be unit-tested without randomness.

use rand::Rng;

use crate::models::{CourtSide, Player, Position, ShotKind, ShotProfile};

/// Success probability is clamped to this range regardless of how many
/// bonuses or penalties stack.
pub const MIN_SUCCESS_PROB: f64 = 0.10;
pub const MAX_SUCCESS_PROB: f64 = 0.95;

/// Uniform noise added to every shot, in `[-NOISE_RANGE, NOISE_RANGE]`.
pub const NOISE_RANGE: f64 = 0.05;

/// Outcome of a single shot. `Fault`/`Ace` apply to serves,
/// `Error`/`Winner` to rally shots; `Returnable` continues the rally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    Fault,
    Ace,
    Error,
    Winner,
    Returnable,
}

/// The slice of match state the outcome model needs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RallyContext {
    pub rally_count: u32,
    pub last_shot: Option<ShotKind>,
    /// Serve-skill delta supplied by the state machine for serves,
    /// replacing the catalog-driven skill lookup.
    pub skill_override: Option<f64>,
}

/// Assemble the success probability for a shot, clamped to
/// `[MIN_SUCCESS_PROB, MAX_SUCCESS_PROB]`. `noise` is the already-drawn
/// uniform term in `[-NOISE_RANGE, NOISE_RANGE]`.
///
/// Term order matters: every modifier is additive on the probability before
/// the single outcome draw.
pub fn success_probability(
    kind: ShotKind,
    hitter: &Player,
    receiver: &Player,
    ctx: &RallyContext,
    is_serve: bool,
    noise: f64,
) -> f64 {
    let profile = kind.profile();
    let skill_modifier = match ctx.skill_override {
        Some(delta) => delta * 0.05,
        None => (hitter.skill_for(kind) - 5.0) * 0.05,
    };
    let mut prob = profile.base_success + skill_modifier;

    if !is_serve {
        match kind {
            // Better receiver movement defeats drop shots.
            ShotKind::DropShot => {
                prob -= (receiver.skills.movement as f64 - 5.0) * 0.03;
            }
            // Lobs punish a receiver caught at the net.
            ShotKind::Lob if receiver.position == Position::Net => {
                prob += 0.15;
            }
            _ => {}
        }
        // Sequencing synergy: drop shot sets up the lob, lob sets up the
        // volley.
        if let Some(last) = ctx.last_shot {
            if (last == ShotKind::DropShot && kind == ShotKind::Lob)
                || (last == ShotKind::Lob && kind == ShotKind::Volley)
            {
                prob += 0.1;
            }
        }
    }

    if hitter.court_side != CourtSide::Center {
        prob -= 0.05;
    }

    // Opponent fatigue is not modeled; only the user pays this.
    if hitter.is_user {
        prob -= hitter.fatigue as f64 * 0.002;
    }

    // Long rallies bias toward continuation, capped at +5%.
    if ctx.rally_count > 3 {
        prob += (ctx.rally_count as f64 * 0.01).min(0.05);
    }

    prob += noise;
    prob.clamp(MIN_SUCCESS_PROB, MAX_SUCCESS_PROB)
}

/// Resolve one shot into an outcome using a single randomness source.
pub fn resolve_shot<R: Rng + ?Sized>(
    kind: ShotKind,
    hitter: &Player,
    receiver: &Player,
    ctx: &RallyContext,
    is_serve: bool,
    rng: &mut R,
) -> ShotOutcome {
    let noise = rng.gen_range(-NOISE_RANGE..NOISE_RANGE);
    let prob = success_probability(kind, hitter, receiver, ctx, is_serve, noise);

    if is_serve {
        if rng.gen::<f64>() > prob {
            return ShotOutcome::Fault;
        }
        let ace_chance = kind.profile().ace_chance.unwrap_or(ShotProfile::DEFAULT_ACE_CHANCE)
            + (hitter.skills.serve as f64 - 5.0) * 0.02;
        if rng.gen::<f64>() < ace_chance {
            ShotOutcome::Ace
        } else {
            ShotOutcome::Returnable
        }
    } else {
        let roll = rng.gen::<f64>();
        if roll > prob {
            ShotOutcome::Error
        } else if roll > prob * 0.85 {
            // Narrow winner band keeps rallies long.
            ShotOutcome::Winner
        } else {
            ShotOutcome::Returnable
        }
    }
}
