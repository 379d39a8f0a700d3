use crate::{
    database::db_structs::{
        Category, CollectiveScore, Competition, Discipline, ExtraScore, PointsConfig, Team, TeamResult, Tournament
    },
    model::{constants::NOT_PRESENTED_SENTINEL, structures::{discipline_type::DisciplineType, snapshot::TournamentSnapshot}}
};

/// First-place points of the four tiers, in config order
pub const DEFAULT_TIER_POINTS: [i32; 4] = [5, 10, 15, 8];

pub fn generate_tournament(id: i32, name: &str) -> Tournament {
    Tournament {
        id,
        name: name.to_string()
    }
}

pub fn generate_category(id: i32, name: &str) -> Category {
    Category {
        id,
        name: name.to_string()
    }
}

pub fn generate_team(id: i32, name: &str, category_id: i32) -> Team {
    Team {
        id,
        name: name.to_string(),
        category_id
    }
}

pub fn generate_discipline(id: i32, name: &str, discipline_type: DisciplineType, max_points: i32) -> Discipline {
    Discipline {
        id,
        name: name.to_string(),
        discipline_type,
        max_points
    }
}

pub fn generate_competition(id: i32, discipline_id: i32) -> Competition {
    Competition { id, discipline_id }
}

pub fn generate_team_result(team_id: i32, competition_id: i32, team_result: Option<i32>) -> TeamResult {
    TeamResult {
        team_id,
        competition_id,
        team_result
    }
}

pub fn generate_collective_score(team_id: i32, discipline_id: i32, points_for_team: i32) -> CollectiveScore {
    CollectiveScore {
        team_id,
        discipline_id,
        points_for_team: Some(points_for_team)
    }
}

pub fn generate_extra_score(team_id: i32, opening: i32, additional: i32) -> ExtraScore {
    ExtraScore {
        team_id,
        opening,
        additional
    }
}

pub fn generate_points_config(tier_points: &[i32]) -> Vec<PointsConfig> {
    tier_points
        .iter()
        .map(|p| PointsConfig { first_place_points: *p })
        .collect()
}

pub fn default_points_config() -> Vec<PointsConfig> {
    generate_points_config(&DEFAULT_TIER_POINTS)
}

/// An otherwise empty snapshot with the default points configuration
pub fn empty_snapshot() -> TournamentSnapshot {
    TournamentSnapshot {
        points_config: default_points_config(),
        ..Default::default()
    }
}

/// Generates a deterministic snapshot of `n_categories` categories with
/// `teams_per_category` teams each, competing in `n_disciplines` disciplines.
///
/// Even disciplines are collective (two entries per team), odd ones are
/// individual. Every seventh team has no data in a discipline and every
/// eleventh did not present.
pub fn generate_snapshot(n_categories: i32, teams_per_category: i32, n_disciplines: i32) -> TournamentSnapshot {
    let mut snapshot = empty_snapshot();
    snapshot.tournaments.push(generate_tournament(1, "Generated Games"));

    for c in 1..=n_categories {
        snapshot.categories.push(generate_category(c, &format!("Category {}", c)));

        for t in 0..teams_per_category {
            let id = (c - 1) * teams_per_category + t + 1;
            snapshot.teams.push(generate_team(id, &format!("Team {}", id), c));
        }
    }

    for d in 1..=n_disciplines {
        let tier_points = DEFAULT_TIER_POINTS[(d as usize - 1) % DEFAULT_TIER_POINTS.len()];
        let discipline_type = if d % 2 == 0 {
            DisciplineType::Collective
        } else {
            DisciplineType::Individual
        };

        snapshot.disciplines.push(generate_discipline(
            d,
            &format!("Discipline {}", d),
            discipline_type,
            tier_points
        ));

        if discipline_type == DisciplineType::Individual {
            snapshot.competitions.push(generate_competition(100 + d, d));
        }

        for team in &snapshot.teams {
            let seed = team.id * 31 + d * 17;
            if seed % 7 == 0 {
                continue;
            }

            match discipline_type {
                DisciplineType::Collective if seed % 11 == 0 => {
                    snapshot.collective_scores.push(generate_collective_score(team.id, d, 5000));
                    snapshot.collective_scores.push(generate_collective_score(team.id, d, 4999));
                }
                DisciplineType::Collective => {
                    snapshot.collective_scores.push(generate_collective_score(team.id, d, seed % 13));
                    snapshot.collective_scores.push(generate_collective_score(team.id, d, seed % 5));
                }
                DisciplineType::Individual => {
                    let result = if seed % 11 == 0 {
                        NOT_PRESENTED_SENTINEL
                    } else {
                        seed % 97
                    };
                    snapshot
                        .team_results
                        .push(generate_team_result(team.id, 100 + d, Some(result)));
                }
            }
        }
    }

    snapshot.extra_scores = snapshot
        .teams
        .iter()
        .filter(|t| t.id % 3 != 0)
        .map(|t| generate_extra_score(t.id, t.id % 4, t.id % 2))
        .collect();

    snapshot
}
