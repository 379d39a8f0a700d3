use chrono::Utc;
use serial_test::serial;
use standings_processor::{
    database::{db::DbClient, db_structs::ExtraScore},
    model::{compute_standings, fetch_and_compute, structures::discipline_type::DisciplineType, StandingsError}
};

use super::test_helpers::TestDatabase;
use crate::common::init_test_env;

async fn seeded_client() -> (TestDatabase, DbClient) {
    init_test_env();
    let test_db = TestDatabase::new().await.expect("Failed to create test database");
    test_db.seed_test_data().await.expect("Failed to seed test data");

    let db_client = DbClient::connect(&test_db.connection_string)
        .await
        .expect("Failed to connect");

    (test_db, db_client)
}

#[tokio::test]
#[serial]
#[ignore = "requires Docker"]
async fn test_fetch_snapshot() {
    let (_db, client) = seeded_client().await;

    let snapshot = client.fetch_snapshot().await.expect("Failed to fetch snapshot");

    assert_eq!(snapshot.title(), Some("Juegos Intercolegiales"));
    assert_eq!(snapshot.categories.len(), 2);
    assert_eq!(snapshot.teams.len(), 4);
    assert_eq!(snapshot.teams[3].category_id, 2);
    assert_eq!(snapshot.disciplines[0].discipline_type, DisciplineType::Collective);
    assert_eq!(snapshot.disciplines[1].discipline_type, DisciplineType::Individual);
    assert_eq!(snapshot.collective_scores.len(), 7);
    assert_eq!(snapshot.team_results.len(), 3);
    assert_eq!(snapshot.team_results[1].team_result, None);
    assert_eq!(snapshot.extra_scores.len(), 2);
    assert_eq!(snapshot.points_config.len(), 4);
    assert_eq!(snapshot.points_config[1].first_place_points, 10);
}

#[tokio::test]
#[serial]
#[ignore = "requires Docker"]
async fn test_fetch_and_compute() {
    let (_db, client) = seeded_client().await;

    let report = fetch_and_compute(&client).await.expect("Failed to compute standings");

    assert_eq!(report.columns, vec!["Futbol", "Natacion"]);

    let juvenil = &report.categories[0];
    let names = juvenil.rows.iter().map(|r| r.team_name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Halcones", "Condores", "Pumas"]);
    assert_eq!(juvenil.rows.iter().map(|r| r.total).collect::<Vec<_>>(), vec![18, 15, 10]);

    let condores = &juvenil.rows[1];
    assert_eq!(condores.disciplines[0].display, "NP");
    assert_eq!(condores.disciplines[1].display, "15");

    let pumas = &juvenil.rows[2];
    assert_eq!(pumas.opening.display, "F");
    assert_eq!(pumas.disciplines[1].display, "F");

    let mayores = &report.categories[1];
    assert_eq!(mayores.rows[0].team_name, "Lobos");
    assert_eq!(mayores.rows[0].total, 10);
}

#[tokio::test]
#[serial]
#[ignore = "requires Docker"]
async fn test_save_extras_overwrites() {
    let (_db, client) = seeded_client().await;

    client.save_extras(4, 2, 5).await.expect("Failed to insert extras");
    client.save_extras(4, 6, 1).await.expect("Failed to update extras");
    client.save_extras(4, 6, 1).await.expect("Failed to repeat update");

    let extras = client.get_extra_scores().await.expect("Failed to fetch extras");
    let lobos = extras.iter().filter(|e| e.team_id == 4).collect::<Vec<_>>();

    assert_eq!(
        lobos,
        vec![&ExtraScore {
            team_id: 4,
            opening: 6,
            additional: 1
        }]
    );
}

#[tokio::test]
#[serial]
#[ignore = "requires Docker"]
async fn test_extras_failure_falls_back_to_zero() {
    let (db, client) = seeded_client().await;
    let raw = db.get_client().await.expect("Failed to connect");
    raw.batch_execute("DROP TABLE puntuaciones_extras").await.unwrap();

    let snapshot = client.fetch_snapshot().await.expect("Extras failure should not abort");

    assert_eq!(snapshot.extra_scores.len(), 4);
    assert!(snapshot.extra_scores.iter().all(|e| e.opening == 0 && e.additional == 0));

    let report = compute_standings(&snapshot, Utc::now()).unwrap();
    assert_eq!(report.categories[0].rows[0].total, 15);
}

#[tokio::test]
#[serial]
#[ignore = "requires Docker"]
async fn test_other_fetch_failures_abort() {
    let (db, client) = seeded_client().await;
    let raw = db.get_client().await.expect("Failed to connect");
    raw.batch_execute("DROP TABLE competencias CASCADE").await.unwrap();

    assert!(client.fetch_snapshot().await.is_err());

    let err = fetch_and_compute(&client).await.unwrap_err();
    assert!(matches!(err, StandingsError::Fetch(_)));
}
