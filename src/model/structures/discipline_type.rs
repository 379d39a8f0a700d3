use serde::{Deserialize, Serialize};

/// How a discipline produces its raw score.
///
/// Stored as free text in `disciplinas.tipo`: `"colectiva"` is collective and
/// every other value is scored individually.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum DisciplineType {
    /// Per-match team points, summed across entries
    Collective,
    /// One authoritative competition result per team
    Individual
}

impl DisciplineType {
    pub const COLLECTIVE_TAG: &'static str = "colectiva";
    pub const INDIVIDUAL_TAG: &'static str = "individual";

    pub fn as_str(&self) -> &'static str {
        match self {
            DisciplineType::Collective => Self::COLLECTIVE_TAG,
            DisciplineType::Individual => Self::INDIVIDUAL_TAG
        }
    }
}

impl From<&str> for DisciplineType {
    fn from(v: &str) -> Self {
        if v == Self::COLLECTIVE_TAG {
            DisciplineType::Collective
        } else {
            DisciplineType::Individual
        }
    }
}

impl From<String> for DisciplineType {
    fn from(v: String) -> Self {
        DisciplineType::from(v.as_str())
    }
}

impl From<DisciplineType> for String {
    fn from(v: DisciplineType) -> Self {
        v.as_str().to_string()
    }
}
