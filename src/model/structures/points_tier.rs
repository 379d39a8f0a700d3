use crate::model::constants::{
    FIRST_TIER_DECREMENTS, FOURTH_TIER_DECREMENTS, POSITIONS_PER_TIER, SECOND_TIER_DECREMENTS, THIRD_TIER_DECREMENTS
};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::convert::TryFrom;
use strum_macros::EnumIter;

/// One of the four discipline value tiers of the points configuration.
///
/// The n-th `puntajes` row (ordered by id) configures the n-th tier.
#[derive(Deserialize_repr, Serialize_repr, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
#[repr(u8)]
pub enum PointsTier {
    First = 0,
    Second = 1,
    Third = 2,
    Fourth = 3
}

impl PointsTier {
    /// Points deducted from the discipline's maximum, indexed by `position - 1`
    pub fn decrements(&self) -> &'static [i32; POSITIONS_PER_TIER] {
        match self {
            PointsTier::First => &FIRST_TIER_DECREMENTS,
            PointsTier::Second => &SECOND_TIER_DECREMENTS,
            PointsTier::Third => &THIRD_TIER_DECREMENTS,
            PointsTier::Fourth => &FOURTH_TIER_DECREMENTS
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl TryFrom<usize> for PointsTier {
    type Error = ();

    fn try_from(v: usize) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(PointsTier::First),
            1 => Ok(PointsTier::Second),
            2 => Ok(PointsTier::Third),
            3 => Ok(PointsTier::Fourth),
            _ => Err(())
        }
    }
}
