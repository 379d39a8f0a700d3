pub mod discipline_type;
pub mod outcome;
pub mod points_tier;
pub mod resolved_score;
pub mod snapshot;
pub mod standings;
