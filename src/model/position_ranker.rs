use crate::{
    database::db_structs::Discipline,
    model::{
        score_resolver::resolve_discipline_score,
        structures::{resolved_score::ResolvedScore, snapshot::TournamentSnapshot}
    }
};
use itertools::Itertools;
use serde::Serialize;
use std::cmp::Ordering;

/// A team's place in one discipline of its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedTeam {
    pub team_id: i32,
    pub score: ResolvedScore,
    /// 1-based, only for numeric scores
    pub position: Option<u32>
}

/// Orders teams whose ranking keys compare equal: lower team id first.
pub fn break_tie(team_a: i32, team_b: i32) -> Ordering {
    team_a.cmp(&team_b)
}

/// Ranks `team_ids` in a discipline.
///
/// Teams are ordered by [`ResolvedScore::ranking_cmp`], then by [`break_tie`].
/// Positions count only the numeric scores, so equal scores still get
/// distinct consecutive positions. Teams without a numeric score get no
/// position but keep their resolved score.
pub fn rank(snapshot: &TournamentSnapshot, team_ids: &[i32], discipline: &Discipline) -> Vec<RankedTeam> {
    let mut next_position = 0;

    team_ids
        .iter()
        .map(|&team_id| (team_id, resolve_discipline_score(snapshot, team_id, discipline)))
        .sorted_by(|(id_a, score_a), (id_b, score_b)| {
            score_a.ranking_cmp(score_b).then_with(|| break_tie(*id_a, *id_b))
        })
        .map(|(team_id, score)| {
            let position = if score.is_numeric() {
                next_position += 1;
                Some(next_position)
            } else {
                None
            };

            RankedTeam {
                team_id,
                score,
                position
            }
        })
        .collect()
}

/// Ranks every team of a category in a discipline. An unknown discipline
/// ranks nobody.
pub fn rank_category(snapshot: &TournamentSnapshot, category_id: i32, discipline_id: i32) -> Vec<RankedTeam> {
    let discipline = match snapshot.discipline(discipline_id) {
        Some(discipline) => discipline,
        None => return Vec::new()
    };

    let team_ids = snapshot
        .teams_in_category(category_id)
        .iter()
        .map(|t| t.id)
        .collect_vec();

    rank(snapshot, &team_ids, discipline)
}

pub fn find_team(ranking: &[RankedTeam], team_id: i32) -> Option<&RankedTeam> {
    ranking.iter().find(|r| r.team_id == team_id)
}
