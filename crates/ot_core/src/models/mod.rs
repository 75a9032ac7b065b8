pub mod player;
pub mod shot;

pub use player::{CourtSide, Player, Position, SkillSet, Tendency, MAX_FATIGUE};
pub use shot::{ShotKind, ShotProfile};
