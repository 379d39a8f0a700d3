use crate::{
    database::db_structs::PointsConfig,
    model::{constants::REQUIRED_TIERS, structures::points_tier::PointsTier}
};
use indexmap::IndexMap;
use serde::Serialize;
use strum::IntoEnumIterator;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PointsTableError {
    #[error("Points configuration has {found} tiers, {required} are required")]
    MissingTiers { found: usize, required: usize }
}

/// Decrement schedules keyed by a discipline's maximum points.
#[derive(Debug, Clone, Default)]
pub struct PointsTable {
    tiers: IndexMap<i32, PointsTier>
}

/// Points awarded per position for one configured tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierSchedule {
    pub tier: PointsTier,
    pub max_points: i32,
    pub points_by_position: Vec<i32>
}

impl PointsTable {
    /// Builds the table from the points configuration, which must configure
    /// all four tiers. Rows past the fourth are ignored. When two tiers share
    /// the same maximum, the later tier's schedule applies.
    pub fn from_config(config: &[PointsConfig]) -> Result<PointsTable, PointsTableError> {
        let named = Self::name_tiers(config)?;
        let mut tiers = IndexMap::with_capacity(named.len());

        for (tier, max_points) in named {
            if let Some(previous) = tiers.insert(max_points, tier) {
                warn!(
                    "Tiers {:?} and {:?} are both worth {} points, using {:?}",
                    previous, tier, max_points, tier
                );
            }
        }

        Ok(PointsTable { tiers })
    }

    fn name_tiers(config: &[PointsConfig]) -> Result<IndexMap<PointsTier, i32>, PointsTableError> {
        if config.len() < REQUIRED_TIERS {
            return Err(PointsTableError::MissingTiers {
                found: config.len(),
                required: REQUIRED_TIERS
            });
        }

        if config.len() > REQUIRED_TIERS {
            warn!(
                "Points configuration has {} tiers, ignoring all past the first {}",
                config.len(),
                REQUIRED_TIERS
            );
        }

        Ok(PointsTier::iter()
            .zip(config.iter())
            .map(|(tier, c)| (tier, c.first_place_points))
            .collect())
    }

    /// `max_points` minus the tier's decrement for `position`.
    ///
    /// Returns 0 when `max_points` is not configured or the position is
    /// outside 1..=8.
    pub fn points_for_position(&self, max_points: i32, position: u32) -> i32 {
        let tier = match self.tiers.get(&max_points) {
            Some(tier) => tier,
            None => return 0
        };

        let decrements = tier.decrements();
        if position < 1 || position as usize > decrements.len() {
            return 0;
        }

        max_points - decrements[position as usize - 1]
    }

    pub fn tier_for(&self, max_points: i32) -> Option<PointsTier> {
        self.tiers.get(&max_points).copied()
    }

    pub fn schedules(&self) -> Vec<TierSchedule> {
        self.tiers
            .iter()
            .map(|(max_points, tier)| TierSchedule {
                tier: *tier,
                max_points: *max_points,
                points_by_position: tier.decrements().iter().map(|d| max_points - d).collect()
            })
            .collect()
    }
}
