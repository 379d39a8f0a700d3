use super::{
    db_structs::{
        Category, CollectiveScore, Competition, Discipline, ExtraScore, PointsConfig, Team, TeamResult, Tournament
    },
    error::DbError
};
use crate::{model::structures::snapshot::TournamentSnapshot, utils::progress_utils::progress_bar};
use indicatif::ProgressBar;
use postgres_types::ToSql;
use std::{future::Future, sync::Arc};
use tokio_postgres::{Client, NoTls, Row};
use tracing::{debug, error, info, warn};

const SNAPSHOT_COLLECTIONS: u64 = 9;

#[derive(Clone)]
pub struct DbClient {
    client: Arc<Client>
}

impl DbClient {
    // Connect to the database and return a DbClient instance
    pub async fn connect(connection_str: &str) -> Result<Self, DbError> {
        let (client, connection) = tokio_postgres::connect(connection_str, NoTls)
            .await
            .map_err(DbError::Connection)?;

        // Spawn the connection object to run in the background
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                error!("connection error: {}", e);
            }
        });

        Ok(DbClient {
            client: Arc::new(client)
        })
    }

    /// Fetches every collection a standings computation needs in one fan-out.
    ///
    /// Any failing collection aborts the whole fetch, except the extras: when
    /// only those fail, every fetched team gets a zero-valued extras record so
    /// the standings can still be computed.
    pub async fn fetch_snapshot(&self) -> Result<TournamentSnapshot, DbError> {
        info!("Fetching tournament data...");
        let p_bar = progress_bar(SNAPSHOT_COLLECTIONS, "Fetching tournament data".to_string());

        let (core, extras) = tokio::join!(
            async {
                tokio::try_join!(
                    tracked(&p_bar, self.get_tournaments()),
                    tracked(&p_bar, self.get_categories()),
                    tracked(&p_bar, self.get_teams()),
                    tracked(&p_bar, self.get_disciplines()),
                    tracked(&p_bar, self.get_competitions()),
                    tracked(&p_bar, self.get_team_results()),
                    tracked(&p_bar, self.get_collective_scores()),
                    tracked(&p_bar, self.get_points_config())
                )
            },
            tracked(&p_bar, self.get_extra_scores())
        );

        if let Some(bar) = &p_bar {
            bar.finish_and_clear();
        }

        let (
            tournaments,
            categories,
            teams,
            disciplines,
            competitions,
            team_results,
            collective_scores,
            points_config
        ) = core?;

        let extra_scores = match extras {
            Ok(extra_scores) => extra_scores,
            Err(e) => {
                warn!(
                    "Failed to fetch extra scores, defaulting {} teams to zero: {}",
                    teams.len(),
                    e
                );
                default_extra_scores(&teams)
            }
        };

        info!(
            "Tournament data fetched: {} categories, {} teams, {} disciplines",
            categories.len(),
            teams.len(),
            disciplines.len()
        );

        Ok(TournamentSnapshot {
            tournaments,
            categories,
            teams,
            disciplines,
            competitions,
            team_results,
            collective_scores,
            extra_scores,
            points_config
        })
    }

    pub async fn get_tournaments(&self) -> Result<Vec<Tournament>, DbError> {
        self.query_all(
            "SELECT id, nombre FROM torneos ORDER BY id",
            "tournaments",
            Self::tournament_from_row
        )
        .await
    }

    pub async fn get_categories(&self) -> Result<Vec<Category>, DbError> {
        self.query_all(
            "SELECT id, nombre FROM categorias ORDER BY id",
            "categories",
            Self::category_from_row
        )
        .await
    }

    pub async fn get_teams(&self) -> Result<Vec<Team>, DbError> {
        self.query_all(
            "SELECT id, nombre, categoria_id FROM equipos ORDER BY id",
            "teams",
            Self::team_from_row
        )
        .await
    }

    pub async fn get_disciplines(&self) -> Result<Vec<Discipline>, DbError> {
        self.query_all(
            "SELECT id, nombre, tipo, valor_puntos FROM disciplinas ORDER BY id",
            "disciplines",
            Self::discipline_from_row
        )
        .await
    }

    pub async fn get_competitions(&self) -> Result<Vec<Competition>, DbError> {
        self.query_all(
            "SELECT id, disciplina_id FROM competencias ORDER BY id",
            "competitions",
            Self::competition_from_row
        )
        .await
    }

    pub async fn get_team_results(&self) -> Result<Vec<TeamResult>, DbError> {
        self.query_all(
            "SELECT equipo_id, competencia_id, resultado_equipo FROM resultados_equipos \
            ORDER BY competencia_id, equipo_id",
            "team results",
            Self::team_result_from_row
        )
        .await
    }

    pub async fn get_collective_scores(&self) -> Result<Vec<CollectiveScore>, DbError> {
        self.query_all(
            "SELECT equipo_id, disciplina_id, puntaje_por_equipo FROM puntuaciones \
            ORDER BY disciplina_id, equipo_id",
            "collective scores",
            Self::collective_score_from_row
        )
        .await
    }

    pub async fn get_extra_scores(&self) -> Result<Vec<ExtraScore>, DbError> {
        self.query_all(
            "SELECT equipo_id, inauguracion, adicional FROM puntuaciones_extras ORDER BY equipo_id",
            "extra scores",
            Self::extra_score_from_row
        )
        .await
    }

    /// Points configuration rows in tier order
    pub async fn get_points_config(&self) -> Result<Vec<PointsConfig>, DbError> {
        self.query_all(
            "SELECT puntaje_primer_puesto FROM puntajes ORDER BY id",
            "points config tiers",
            Self::points_config_from_row
        )
        .await
    }

    /// Stores one team's extras, replacing whatever was stored before.
    pub async fn save_extras(&self, team_id: i32, opening: i32, additional: i32) -> Result<(), DbError> {
        let query = "INSERT INTO puntuaciones_extras (equipo_id, inauguracion, adicional) VALUES ($1, $2, $3) \
        ON CONFLICT (equipo_id) DO UPDATE SET inauguracion = EXCLUDED.inauguracion, adicional = EXCLUDED.adicional";
        let values: &[&(dyn ToSql + Sync)] = &[&team_id, &opening, &additional];

        self.client.execute(query, values).await?;

        info!(
            "Saved extras for team {} (opening {}, additional {})",
            team_id, opening, additional
        );
        Ok(())
    }

    async fn query_all<T>(
        &self,
        query: &str,
        collection: &str,
        from_row: fn(&Row) -> Result<T, tokio_postgres::Error>
    ) -> Result<Vec<T>, DbError> {
        let rows = self.client.query(query, &[]).await?;
        let items = rows.iter().map(from_row).collect::<Result<Vec<T>, _>>()?;

        debug!("Fetched {} {}", items.len(), collection);
        Ok(items)
    }

    fn tournament_from_row(row: &Row) -> Result<Tournament, tokio_postgres::Error> {
        Ok(Tournament {
            id: row.try_get("id")?,
            name: row.try_get("nombre")?
        })
    }

    fn category_from_row(row: &Row) -> Result<Category, tokio_postgres::Error> {
        Ok(Category {
            id: row.try_get("id")?,
            name: row.try_get("nombre")?
        })
    }

    fn team_from_row(row: &Row) -> Result<Team, tokio_postgres::Error> {
        Ok(Team {
            id: row.try_get("id")?,
            name: row.try_get("nombre")?,
            category_id: row.try_get("categoria_id")?
        })
    }

    fn discipline_from_row(row: &Row) -> Result<Discipline, tokio_postgres::Error> {
        Ok(Discipline {
            id: row.try_get("id")?,
            name: row.try_get("nombre")?,
            discipline_type: row.try_get::<_, &str>("tipo")?.into(),
            max_points: row.try_get("valor_puntos")?
        })
    }

    fn competition_from_row(row: &Row) -> Result<Competition, tokio_postgres::Error> {
        Ok(Competition {
            id: row.try_get("id")?,
            discipline_id: row.try_get("disciplina_id")?
        })
    }

    fn team_result_from_row(row: &Row) -> Result<TeamResult, tokio_postgres::Error> {
        Ok(TeamResult {
            team_id: row.try_get("equipo_id")?,
            competition_id: row.try_get("competencia_id")?,
            team_result: row.try_get("resultado_equipo")?
        })
    }

    fn collective_score_from_row(row: &Row) -> Result<CollectiveScore, tokio_postgres::Error> {
        Ok(CollectiveScore {
            team_id: row.try_get("equipo_id")?,
            discipline_id: row.try_get("disciplina_id")?,
            points_for_team: row.try_get("puntaje_por_equipo")?
        })
    }

    fn extra_score_from_row(row: &Row) -> Result<ExtraScore, tokio_postgres::Error> {
        Ok(ExtraScore {
            team_id: row.try_get("equipo_id")?,
            opening: row.try_get("inauguracion")?,
            additional: row.try_get("adicional")?
        })
    }

    fn points_config_from_row(row: &Row) -> Result<PointsConfig, tokio_postgres::Error> {
        Ok(PointsConfig {
            first_place_points: row.try_get("puntaje_primer_puesto")?
        })
    }
}

/// Zero-valued extras for every team, used when the extras collection cannot
/// be loaded.
pub fn default_extra_scores(teams: &[Team]) -> Vec<ExtraScore> {
    teams.iter().map(|t| ExtraScore::zeroed(t.id)).collect()
}

async fn tracked<T, F>(p_bar: &Option<ProgressBar>, fetch: F) -> Result<T, DbError>
where
    F: Future<Output = Result<T, DbError>>
{
    let result = fetch.await;
    if let Some(bar) = p_bar {
        bar.inc(1);
    }

    result
}
