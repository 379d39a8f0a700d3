use crate::model::constants::NOT_PRESENTED_SENTINEL;
use serde::Serialize;
use std::cmp::Ordering;

/// A team's raw score for one discipline after sentinel interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum ResolvedScore {
    Numeric(i32),
    /// Registered but did not present (raw value 9999)
    NotPresented,
    /// No data for this team and discipline
    Absent
}

impl ResolvedScore {
    /// The only place the 9999 sentinel is interpreted.
    pub fn from_raw(raw: Option<i32>) -> ResolvedScore {
        match raw {
            None => ResolvedScore::Absent,
            Some(NOT_PRESENTED_SENTINEL) => ResolvedScore::NotPresented,
            Some(value) => ResolvedScore::Numeric(value)
        }
    }

    pub fn value(&self) -> Option<i32> {
        match self {
            ResolvedScore::Numeric(v) => Some(*v),
            _ => None
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, ResolvedScore::Numeric(_))
    }

    /// Ranking order: higher numeric scores first, then any numeric score,
    /// then `NotPresented`, then `Absent`. Non-numeric states of the same kind
    /// compare equal.
    pub fn ranking_cmp(&self, other: &ResolvedScore) -> Ordering {
        match (self, other) {
            (ResolvedScore::Numeric(a), ResolvedScore::Numeric(b)) => b.cmp(a),
            (ResolvedScore::Numeric(_), _) => Ordering::Less,
            (_, ResolvedScore::Numeric(_)) => Ordering::Greater,
            (ResolvedScore::NotPresented, ResolvedScore::Absent) => Ordering::Less,
            (ResolvedScore::Absent, ResolvedScore::NotPresented) => Ordering::Greater,
            _ => Ordering::Equal
        }
    }
}
