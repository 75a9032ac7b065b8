//! Positioning model: depth moves and lateral drift after each shot.

use rand::Rng;

use crate::models::{CourtSide, Player, Position, ShotKind};

/// Lateral re-roll weights when the hitter starts at center: players drift
/// away from center...
const WEIGHTS_FROM_CENTER: [f64; 3] = [0.6, 0.2, 0.2];
/// ...and are more likely to stay off-center once there.
const WEIGHTS_OFF_CENTER: [f64; 3] = [0.4, 0.3, 0.3];

/// Update both players' court zones after `hitter` plays `kind`.
///
/// The receiver's lateral zone is untouched by this call.
pub fn apply_shot<R: Rng + ?Sized>(
    kind: ShotKind,
    hitter: &mut Player,
    receiver: &mut Player,
    rng: &mut R,
) {
    if kind.is_net_shot() {
        hitter.position = Position::Net;
    } else if kind == ShotKind::DropShot {
        hitter.position = Position::MidCourt;
    }

    if kind == ShotKind::DropShot {
        receiver.position = Position::MidCourt;
    } else if kind == ShotKind::Lob && receiver.position == Position::Net {
        receiver.position = Position::Baseline;
    }

    let weights = if hitter.court_side == CourtSide::Center {
        WEIGHTS_FROM_CENTER
    } else {
        WEIGHTS_OFF_CENTER
    };
    let roll: f64 = rng.gen();
    hitter.court_side = if roll < weights[0] {
        CourtSide::Center
    } else if roll < weights[0] + weights[1] {
        CourtSide::ForehandSide
    } else {
        CourtSide::BackhandSide
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn players() -> (Player, Player) {
        (Player::user(), Player::opponent(&mut StdRng::seed_from_u64(7)))
    }

    #[test]
    fn approach_and_volley_take_hitter_to_net() {
        let mut rng = test_rng();
        for kind in [ShotKind::ApproachShot, ShotKind::Volley] {
            let (mut hitter, mut receiver) = players();
            apply_shot(kind, &mut hitter, &mut receiver, &mut rng);
            assert_eq!(hitter.position, Position::Net, "{kind:?}");
        }
    }

    #[test]
    fn drop_shot_pulls_both_players_to_mid_court() {
        let (mut hitter, mut receiver) = players();
        apply_shot(ShotKind::DropShot, &mut hitter, &mut receiver, &mut test_rng());
        assert_eq!(hitter.position, Position::MidCourt);
        assert_eq!(receiver.position, Position::MidCourt);
    }

    #[test]
    fn lob_pushes_net_receiver_back_to_baseline() {
        let (mut hitter, mut receiver) = players();
        receiver.position = Position::Net;
        apply_shot(ShotKind::Lob, &mut hitter, &mut receiver, &mut test_rng());
        assert_eq!(receiver.position, Position::Baseline);

        // A receiver not at the net stays put.
        let (mut hitter, mut receiver) = players();
        receiver.position = Position::MidCourt;
        apply_shot(ShotKind::Lob, &mut hitter, &mut receiver, &mut test_rng());
        assert_eq!(receiver.position, Position::MidCourt);
    }

    #[test]
    fn groundstrokes_leave_depth_unchanged() {
        let (mut hitter, mut receiver) = players();
        apply_shot(ShotKind::ForehandCrossCourt, &mut hitter, &mut receiver, &mut test_rng());
        assert_eq!(hitter.position, Position::Baseline);
        assert_eq!(receiver.position, Position::Baseline);
    }

    #[test]
    fn receiver_lateral_zone_is_untouched() {
        let mut rng = test_rng();
        for _ in 0..100 {
            let (mut hitter, mut receiver) = players();
            receiver.court_side = CourtSide::BackhandSide;
            apply_shot(ShotKind::ForehandCrossCourt, &mut hitter, &mut receiver, &mut rng);
            assert_eq!(receiver.court_side, CourtSide::BackhandSide);
        }
    }

    #[test]
    fn lateral_drift_frequencies_match_weights() {
        let mut rng = test_rng();
        let samples = 20_000;
        let mut center = 0u32;
        for _ in 0..samples {
            let (mut hitter, mut receiver) = players();
            apply_shot(ShotKind::Slice, &mut hitter, &mut receiver, &mut rng);
            if hitter.court_side == CourtSide::Center {
                center += 1;
            }
        }
        let freq = center as f64 / samples as f64;
        assert!((freq - 0.6).abs() < 0.02, "center frequency {freq} too far from 0.6");
    }
}
