use crate::{
    database::{db::DbClient, DbError},
    model::{
        extras::resolve_extra,
        points_table::{PointsTable, PointsTableError},
        position_ranker::{rank, rank_category, RankedTeam},
        score_resolver::resolve_score,
        standings_builder::build_standings,
        structures::{
            outcome::{ExtraKind, ExtraPoints},
            resolved_score::ResolvedScore,
            snapshot::TournamentSnapshot,
            standings::{CategoryStandings, StandingsReport}
        },
        totals::total_for
    }
};
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum StandingsError {
    #[error("Failed to fetch tournament data: {0}")]
    Fetch(#[from] DbError),

    #[error("Invalid points configuration: {0}")]
    PointsTable(#[from] PointsTableError)
}

/// The standings engine over one immutable snapshot.
///
/// Nothing is cached besides the points table: every call recomputes from the
/// snapshot, so results only depend on the data.
pub struct StandingsModel<'a> {
    snapshot: &'a TournamentSnapshot,
    points_table: PointsTable
}

impl<'a> StandingsModel<'a> {
    pub fn new(snapshot: &'a TournamentSnapshot) -> Result<StandingsModel<'a>, PointsTableError> {
        Ok(StandingsModel {
            snapshot,
            points_table: PointsTable::from_config(&snapshot.points_config)?
        })
    }

    pub fn resolve_score(&self, team_id: i32, discipline_id: i32) -> ResolvedScore {
        resolve_score(self.snapshot, team_id, discipline_id)
    }

    /// Ranks the given teams in a discipline; an unknown discipline ranks nobody.
    pub fn rank(&self, team_ids: &[i32], discipline_id: i32) -> Vec<RankedTeam> {
        match self.snapshot.discipline(discipline_id) {
            Some(discipline) => rank(self.snapshot, team_ids, discipline),
            None => Vec::new()
        }
    }

    pub fn rank_category(&self, category_id: i32, discipline_id: i32) -> Vec<RankedTeam> {
        rank_category(self.snapshot, category_id, discipline_id)
    }

    pub fn points_for_position(&self, max_points: i32, position: u32) -> i32 {
        self.points_table.points_for_position(max_points, position)
    }

    pub fn resolve_extra(&self, team_id: i32, kind: ExtraKind) -> ExtraPoints {
        resolve_extra(self.snapshot, team_id, kind)
    }

    pub fn total_for(&self, team_id: i32, category_id: i32) -> i32 {
        total_for(self.snapshot, &self.points_table, team_id, category_id)
    }

    pub fn build_standings(&self) -> Vec<CategoryStandings> {
        build_standings(self.snapshot, &self.points_table)
    }

    pub fn report(&self, generated_at: DateTime<Utc>) -> StandingsReport {
        let categories = self.build_standings();
        info!("Standings built for {} categories", categories.len());

        StandingsReport {
            title: self.snapshot.title().map(str::to_string),
            generated_at,
            columns: self.snapshot.disciplines.iter().map(|d| d.name.clone()).collect(),
            categories
        }
    }
}

/// Computes the standings report of a snapshot.
pub fn compute_standings(
    snapshot: &TournamentSnapshot,
    generated_at: DateTime<Utc>
) -> Result<StandingsReport, StandingsError> {
    let model = StandingsModel::new(snapshot)?;
    Ok(model.report(generated_at))
}

/// Fetches a fresh snapshot and computes its standings report.
pub async fn fetch_and_compute(client: &DbClient) -> Result<StandingsReport, StandingsError> {
    let snapshot = client.fetch_snapshot().await?;
    compute_standings(&snapshot, Utc::now())
}
