use crate::{
    database::db_structs::Discipline,
    model::{
        extras::resolve_extra,
        points_table::PointsTable,
        position_ranker::{find_team, rank, RankedTeam},
        structures::{
            outcome::{DisciplineOutcome, ExtraKind, ExtraPoints},
            resolved_score::ResolvedScore,
            snapshot::TournamentSnapshot
        }
    }
};
use itertools::Itertools;

/// Converts a team's place in a discipline ranking into what it earned there.
/// Only a numeric score with a position earns points.
pub fn discipline_outcome(
    table: &PointsTable,
    ranking: &[RankedTeam],
    team_id: i32,
    discipline: &Discipline
) -> DisciplineOutcome {
    let ranked = match find_team(ranking, team_id) {
        Some(ranked) => ranked,
        None => return DisciplineOutcome::Absent
    };

    match (ranked.score, ranked.position) {
        (ResolvedScore::NotPresented, _) => DisciplineOutcome::NotPresented,
        (ResolvedScore::Numeric(_), Some(position)) => {
            DisciplineOutcome::Points(table.points_for_position(discipline.max_points, position))
        }
        _ => DisciplineOutcome::Absent
    }
}

/// Discipline points plus both extras; non-numeric states contribute 0.
///
/// Saturates at the `i32` bounds. Stored extras may already sit at `i32::MAX`.
pub fn sum_total(outcomes: &[DisciplineOutcome], opening: ExtraPoints, additional: ExtraPoints) -> i32 {
    outcomes
        .iter()
        .map(|o| o.points())
        .chain([opening.points(), additional.points()])
        .fold(0i32, |total, points| total.saturating_add(points))
}

/// A team's total within a category, over every discipline of the snapshot.
pub fn total_for(snapshot: &TournamentSnapshot, table: &PointsTable, team_id: i32, category_id: i32) -> i32 {
    let team_ids = snapshot
        .teams_in_category(category_id)
        .iter()
        .map(|t| t.id)
        .collect_vec();

    let outcomes = snapshot
        .disciplines
        .iter()
        .map(|discipline| {
            let ranking = rank(snapshot, &team_ids, discipline);
            discipline_outcome(table, &ranking, team_id, discipline)
        })
        .collect_vec();

    sum_total(
        &outcomes,
        resolve_extra(snapshot, team_id, ExtraKind::Opening),
        resolve_extra(snapshot, team_id, ExtraKind::Additional)
    )
}
