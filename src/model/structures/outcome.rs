use serde::Serialize;

/// What a team earned in one discipline of its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum DisciplineOutcome {
    Points(i32),
    NotPresented,
    Absent
}

impl DisciplineOutcome {
    /// Contribution to the category total
    pub fn points(&self) -> i32 {
        match self {
            DisciplineOutcome::Points(p) => *p,
            _ => 0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtraKind {
    /// Opening ceremony (`inauguracion`)
    Opening,
    /// Additional points (`adicional`)
    Additional
}

/// A resolved extra-points column. A missing record and a stored zero are
/// both `Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum ExtraPoints {
    Points(i32),
    Absent
}

impl ExtraPoints {
    pub fn points(&self) -> i32 {
        match self {
            ExtraPoints::Points(p) => *p,
            ExtraPoints::Absent => 0
        }
    }
}
