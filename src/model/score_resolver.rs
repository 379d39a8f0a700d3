use crate::{
    database::db_structs::Discipline,
    model::structures::{discipline_type::DisciplineType, resolved_score::ResolvedScore, snapshot::TournamentSnapshot}
};
use tracing::warn;

/// Resolves a team's raw score for a discipline by id. An unknown discipline
/// resolves to [`ResolvedScore::Absent`].
pub fn resolve_score(snapshot: &TournamentSnapshot, team_id: i32, discipline_id: i32) -> ResolvedScore {
    match snapshot.discipline(discipline_id) {
        Some(discipline) => resolve_discipline_score(snapshot, team_id, discipline),
        None => ResolvedScore::Absent
    }
}

/// Resolves a team's raw score, choosing the scoring path from the
/// discipline's type.
pub fn resolve_discipline_score(snapshot: &TournamentSnapshot, team_id: i32, discipline: &Discipline) -> ResolvedScore {
    match discipline.discipline_type {
        DisciplineType::Collective => resolve_collective(snapshot, team_id, discipline.id),
        DisciplineType::Individual => resolve_individual(snapshot, team_id, discipline.id)
    }
}

/// Sums every entry of the team in this discipline. No entries at all is
/// `Absent`; a sum of exactly 9999 is `NotPresented`.
fn resolve_collective(snapshot: &TournamentSnapshot, team_id: i32, discipline_id: i32) -> ResolvedScore {
    let mut entries = snapshot
        .collective_scores
        .iter()
        .filter(|s| s.team_id == team_id && s.discipline_id == discipline_id)
        .peekable();

    if entries.peek().is_none() {
        return ResolvedScore::Absent;
    }

    let total = entries.map(|s| i64::from(s.points_for_team.unwrap_or(0))).sum::<i64>();
    let total = match i32::try_from(total) {
        Ok(total) => total,
        Err(_) => {
            warn!(
                "Collective score {} for team {} in discipline {} is out of range, clamping",
                total, team_id, discipline_id
            );
            total.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
        }
    };

    ResolvedScore::from_raw(Some(total))
}

/// Only the first competition of the discipline is considered.
fn resolve_individual(snapshot: &TournamentSnapshot, team_id: i32, discipline_id: i32) -> ResolvedScore {
    let competition = match snapshot.competitions.iter().find(|c| c.discipline_id == discipline_id) {
        Some(competition) => competition,
        None => return ResolvedScore::Absent
    };

    let raw = snapshot
        .team_results
        .iter()
        .find(|r| r.team_id == team_id && r.competition_id == competition.id)
        .and_then(|r| r.team_result);

    ResolvedScore::from_raw(raw)
}

#[cfg(test)]
mod tests {
    use super::resolve_score;
    use crate::{
        database::db_structs::CollectiveScore,
        model::structures::{discipline_type::DisciplineType, resolved_score::ResolvedScore},
        utils::test_utils::{
            empty_snapshot, generate_collective_score, generate_competition, generate_discipline, generate_team,
            generate_team_result
        }
    };

    fn collective_snapshot(entries: &[i32]) -> crate::model::structures::snapshot::TournamentSnapshot {
        let mut snapshot = empty_snapshot();
        snapshot.teams.push(generate_team(1, "Halcones", 1));
        snapshot
            .disciplines
            .push(generate_discipline(10, "Futbol", DisciplineType::Collective, 10));
        snapshot
            .collective_scores
            .extend(entries.iter().map(|p| generate_collective_score(1, 10, *p)));

        snapshot
    }

    #[test]
    fn test_collective_sums_entries() {
        let snapshot = collective_snapshot(&[3, 1, 0, 4]);
        assert_eq!(resolve_score(&snapshot, 1, 10), ResolvedScore::Numeric(8));
    }

    #[test]
    fn test_collective_without_entries_is_absent() {
        let snapshot = collective_snapshot(&[]);
        assert_eq!(resolve_score(&snapshot, 1, 10), ResolvedScore::Absent);
    }

    #[test]
    fn test_collective_zero_sum_is_numeric() {
        let snapshot = collective_snapshot(&[0, 0]);
        assert_eq!(resolve_score(&snapshot, 1, 10), ResolvedScore::Numeric(0));
    }

    #[test]
    fn test_collective_sum_equal_to_sentinel_is_not_presented() {
        let snapshot = collective_snapshot(&[5000, 4999]);
        assert_eq!(resolve_score(&snapshot, 1, 10), ResolvedScore::NotPresented);
    }

    #[test]
    fn test_collective_large_sum_is_numeric() {
        let snapshot = collective_snapshot(&[9999, 3]);
        assert_eq!(resolve_score(&snapshot, 1, 10), ResolvedScore::Numeric(10002));
    }

    #[test]
    fn test_collective_sum_outside_i32_is_clamped() {
        let snapshot = collective_snapshot(&[i32::MAX, 5]);
        assert_eq!(resolve_score(&snapshot, 1, 10), ResolvedScore::Numeric(i32::MAX));

        let snapshot = collective_snapshot(&[i32::MIN, -1]);
        assert_eq!(resolve_score(&snapshot, 1, 10), ResolvedScore::Numeric(i32::MIN));
    }

    #[test]
    fn test_collective_intermediate_overflow_is_exact() {
        let snapshot = collective_snapshot(&[i32::MAX, 5, -10]);
        assert_eq!(resolve_score(&snapshot, 1, 10), ResolvedScore::Numeric(i32::MAX - 5));
    }

    #[test]
    fn test_collective_null_entry_counts_as_zero() {
        let mut snapshot = collective_snapshot(&[6]);
        snapshot.collective_scores.push(CollectiveScore {
            team_id: 1,
            discipline_id: 10,
            points_for_team: None
        });

        assert_eq!(resolve_score(&snapshot, 1, 10), ResolvedScore::Numeric(6));
    }

    #[test]
    fn test_collective_ignores_other_teams_and_disciplines() {
        let mut snapshot = collective_snapshot(&[2]);
        snapshot.collective_scores.push(generate_collective_score(2, 10, 50));
        snapshot.collective_scores.push(generate_collective_score(1, 11, 50));

        assert_eq!(resolve_score(&snapshot, 1, 10), ResolvedScore::Numeric(2));
    }

    fn individual_snapshot() -> crate::model::structures::snapshot::TournamentSnapshot {
        let mut snapshot = empty_snapshot();
        snapshot.teams.push(generate_team(1, "Halcones", 1));
        snapshot.teams.push(generate_team(2, "Pumas", 1));
        snapshot
            .disciplines
            .push(generate_discipline(20, "Ajedrez", DisciplineType::Individual, 15));
        snapshot.competitions.push(generate_competition(200, 20));

        snapshot
    }

    #[test]
    fn test_individual_result() {
        let mut snapshot = individual_snapshot();
        snapshot.team_results.push(generate_team_result(1, 200, Some(42)));

        assert_eq!(resolve_score(&snapshot, 1, 20), ResolvedScore::Numeric(42));
        assert_eq!(resolve_score(&snapshot, 2, 20), ResolvedScore::Absent);
    }

    #[test]
    fn test_individual_null_result_is_absent() {
        let mut snapshot = individual_snapshot();
        snapshot.team_results.push(generate_team_result(1, 200, None));

        assert_eq!(resolve_score(&snapshot, 1, 20), ResolvedScore::Absent);
    }

    #[test]
    fn test_individual_sentinel_is_not_presented() {
        let mut snapshot = individual_snapshot();
        snapshot.team_results.push(generate_team_result(1, 200, Some(9999)));

        assert_eq!(resolve_score(&snapshot, 1, 20), ResolvedScore::NotPresented);
    }

    #[test]
    fn test_individual_without_competition_is_absent() {
        let mut snapshot = individual_snapshot();
        snapshot.competitions.clear();
        snapshot.team_results.push(generate_team_result(1, 200, Some(42)));

        assert_eq!(resolve_score(&snapshot, 1, 20), ResolvedScore::Absent);
    }

    #[test]
    fn test_individual_uses_first_competition_only() {
        let mut snapshot = individual_snapshot();
        snapshot.competitions.push(generate_competition(201, 20));
        snapshot.team_results.push(generate_team_result(1, 201, Some(42)));

        assert_eq!(resolve_score(&snapshot, 1, 20), ResolvedScore::Absent);
    }

    #[test]
    fn test_individual_ignores_collective_entries() {
        let mut snapshot = individual_snapshot();
        snapshot.collective_scores.push(generate_collective_score(1, 20, 7));

        assert_eq!(resolve_score(&snapshot, 1, 20), ResolvedScore::Absent);
    }

    #[test]
    fn test_unknown_discipline_is_absent() {
        let snapshot = individual_snapshot();
        assert_eq!(resolve_score(&snapshot, 1, 99), ResolvedScore::Absent);
    }
}
