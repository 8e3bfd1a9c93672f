pub mod engine;
pub mod pillars;

pub use engine::{calculate_score, encouragement_score, PillarResult, ScoreReport};
pub use pillars::{Band, Pillar};
