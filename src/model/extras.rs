use crate::model::structures::{
    outcome::{ExtraKind, ExtraPoints},
    snapshot::TournamentSnapshot
};

/// A team's extra points of one kind. No record, or a stored 0, is `Absent`.
pub fn resolve_extra(snapshot: &TournamentSnapshot, team_id: i32, kind: ExtraKind) -> ExtraPoints {
    let record = match snapshot.extra_scores.iter().find(|e| e.team_id == team_id) {
        Some(record) => record,
        None => return ExtraPoints::Absent
    };

    let value = match kind {
        ExtraKind::Opening => record.opening,
        ExtraKind::Additional => record.additional
    };

    if value == 0 {
        ExtraPoints::Absent
    } else {
        ExtraPoints::Points(value)
    }
}
