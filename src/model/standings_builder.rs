use crate::{
    database::db_structs::{Category, Discipline, Team},
    model::{
        extras::resolve_extra,
        points_table::PointsTable,
        position_ranker::{break_tie, rank, RankedTeam},
        structures::{
            outcome::ExtraKind,
            snapshot::TournamentSnapshot,
            standings::{Cell, CategoryStandings, TeamRow}
        },
        totals::{discipline_outcome, sum_total}
    }
};
use itertools::Itertools;

/// Builds the standings of every category, in category order.
///
/// Each discipline is ranked once per category and every row is derived from
/// those rankings. Without categories, teams or disciplines there is nothing
/// to rank and no standings are produced.
pub fn build_standings(snapshot: &TournamentSnapshot, table: &PointsTable) -> Vec<CategoryStandings> {
    if snapshot.categories.is_empty() || snapshot.teams.is_empty() || snapshot.disciplines.is_empty() {
        return Vec::new();
    }

    snapshot
        .categories
        .iter()
        .map(|category| build_category(snapshot, table, category))
        .collect()
}

fn build_category(snapshot: &TournamentSnapshot, table: &PointsTable, category: &Category) -> CategoryStandings {
    let teams = snapshot.teams_in_category(category.id);
    let team_ids = teams.iter().map(|t| t.id).collect_vec();

    let rankings = snapshot
        .disciplines
        .iter()
        .map(|discipline| (discipline, rank(snapshot, &team_ids, discipline)))
        .collect_vec();

    let rows = teams
        .iter()
        .map(|team| build_row(snapshot, table, team, &rankings))
        .sorted_by(|a, b| b.total.cmp(&a.total).then_with(|| break_tie(a.team_id, b.team_id)))
        .collect();

    CategoryStandings {
        category_id: category.id,
        category_name: category.name.clone(),
        rows
    }
}

fn build_row(
    snapshot: &TournamentSnapshot,
    table: &PointsTable,
    team: &Team,
    rankings: &[(&Discipline, Vec<RankedTeam>)]
) -> TeamRow {
    let outcomes = rankings
        .iter()
        .map(|(discipline, ranking)| discipline_outcome(table, ranking, team.id, discipline))
        .collect_vec();

    let opening = resolve_extra(snapshot, team.id, ExtraKind::Opening);
    let additional = resolve_extra(snapshot, team.id, ExtraKind::Additional);

    TeamRow {
        team_id: team.id,
        team_name: team.name.clone(),
        opening: opening.into(),
        additional: additional.into(),
        total: sum_total(&outcomes, opening, additional),
        disciplines: outcomes.into_iter().map(Cell::from).collect()
    }
}
