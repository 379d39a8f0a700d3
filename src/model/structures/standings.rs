use crate::model::{
    constants::{ABSENT_MARKER, NOT_PRESENTED_MARKER},
    structures::outcome::{DisciplineOutcome, ExtraPoints}
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Presentation intent for a cell. Renderers decide what it looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellStyle {
    Normal,
    /// FALTA: no data
    Muted,
    /// NP: did not present
    Alert
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub display: String,
    pub value: Option<i32>,
    pub style: CellStyle
}

impl Cell {
    fn points(value: i32) -> Cell {
        Cell {
            display: value.to_string(),
            value: Some(value),
            style: CellStyle::Normal
        }
    }

    fn absent() -> Cell {
        Cell {
            display: ABSENT_MARKER.to_string(),
            value: None,
            style: CellStyle::Muted
        }
    }

    fn not_presented() -> Cell {
        Cell {
            display: NOT_PRESENTED_MARKER.to_string(),
            value: None,
            style: CellStyle::Alert
        }
    }
}

impl From<DisciplineOutcome> for Cell {
    fn from(outcome: DisciplineOutcome) -> Self {
        match outcome {
            DisciplineOutcome::Points(p) => Cell::points(p),
            DisciplineOutcome::NotPresented => Cell::not_presented(),
            DisciplineOutcome::Absent => Cell::absent()
        }
    }
}

impl From<ExtraPoints> for Cell {
    fn from(extra: ExtraPoints) -> Self {
        match extra {
            ExtraPoints::Points(p) => Cell::points(p),
            ExtraPoints::Absent => Cell::absent()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamRow {
    pub team_id: i32,
    pub team_name: String,
    pub opening: Cell,
    pub additional: Cell,
    /// One cell per discipline, in global discipline order
    pub disciplines: Vec<Cell>,
    pub total: i32
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStandings {
    pub category_id: i32,
    pub category_name: String,
    /// Sorted by total, descending
    pub rows: Vec<TeamRow>
}

#[derive(Debug, Clone, Serialize)]
pub struct StandingsReport {
    pub title: Option<String>,
    pub generated_at: DateTime<Utc>,
    /// Discipline names, matching the order of [`TeamRow::disciplines`]
    pub columns: Vec<String>,
    pub categories: Vec<CategoryStandings>
}

impl StandingsReport {
    pub fn has_data(&self) -> bool {
        !self.categories.is_empty()
    }
}

/// One line of the extras administration sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtrasSheetRow {
    pub team_id: i32,
    pub team_name: String,
    pub category_name: String,
    pub opening: i32,
    pub additional: i32
}
