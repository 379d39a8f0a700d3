use crate::database::db_structs::{
    Category, CollectiveScore, Competition, Discipline, ExtraScore, PointsConfig, Team, TeamResult, Tournament
};
use serde::{Deserialize, Serialize};

/// Everything one standings computation reads. Loaded once, never mutated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TournamentSnapshot {
    pub tournaments: Vec<Tournament>,
    pub categories: Vec<Category>,
    pub teams: Vec<Team>,
    /// Global display order of the standings columns
    pub disciplines: Vec<Discipline>,
    pub competitions: Vec<Competition>,
    pub team_results: Vec<TeamResult>,
    pub collective_scores: Vec<CollectiveScore>,
    pub extra_scores: Vec<ExtraScore>,
    pub points_config: Vec<PointsConfig>
}

impl TournamentSnapshot {
    pub fn discipline(&self, discipline_id: i32) -> Option<&Discipline> {
        self.disciplines.iter().find(|d| d.id == discipline_id)
    }

    pub fn team(&self, team_id: i32) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }

    pub fn category(&self, category_id: i32) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    /// Teams of a category, in snapshot order
    pub fn teams_in_category(&self, category_id: i32) -> Vec<&Team> {
        self.teams.iter().filter(|t| t.category_id == category_id).collect()
    }

    pub fn title(&self) -> Option<&str> {
        self.tournaments.first().map(|t| t.name.as_str())
    }
}
