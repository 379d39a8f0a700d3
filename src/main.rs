use clap::Parser;
use serde_json::json;
use standings_processor::{
    args::{Args, Command, OutputFormat},
    database::{db::DbClient, DbError},
    model::{
        extras_sheet::{extras_sheet, parse_extra_points},
        fetch_and_compute,
        points_table::{PointsTable, PointsTableError},
        StandingsError
    },
    utils::render_utils::{render_extras_sheet, render_points_table, render_standings}
};
use std::io::IsTerminal;
use thiserror::Error;
use tracing::{error, info};
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Error)]
enum ProcessorError {
    #[error(transparent)]
    Standings(#[from] StandingsError),

    #[error(transparent)]
    Database(#[from] DbError),

    #[error(transparent)]
    PointsTable(#[from] PointsTableError),

    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error)
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let args = Args::parse();

    init_logging(&args.log_level);

    let connection_string = match &args.connection_string {
        Some(connection_string) => connection_string.clone(),
        None => {
            error!("CONNECTION_STRING environment variable must be set");
            std::process::exit(1);
        }
    };

    let client = match DbClient::connect(&connection_string).await {
        Ok(client) => client,
        Err(e) => {
            error!("{}", e);
            error!("Application cannot start without a valid database connection");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&client, &args).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn init_logging(log_level: &str) {
    let indicatif_layer = IndicatifLayer::new();
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(indicatif_layer.get_stderr_writer()))
        .with(indicatif_layer)
        .init();
}

async fn run(client: &DbClient, args: &Args) -> Result<(), ProcessorError> {
    let color = std::io::stdout().is_terminal();

    match args.command() {
        Command::Standings => {
            let report = fetch_and_compute(client).await?;

            match args.format {
                OutputFormat::Text => print!("{}", render_standings(&report, color)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?)
            }
        }
        Command::Extras => {
            let snapshot = client.fetch_snapshot().await?;
            let sheet = extras_sheet(&snapshot);

            match args.format {
                OutputFormat::Text => print!("{}", render_extras_sheet(&sheet)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&sheet)?)
            }
        }
        Command::SaveExtras {
            team_id,
            opening,
            additional
        } => {
            let opening = parse_extra_points(&opening);
            let additional = parse_extra_points(&additional);

            client.save_extras(team_id, opening, additional).await?;

            match args.format {
                OutputFormat::Text => println!(
                    "Saved extras for team {}: opening {}, additional {}",
                    team_id, opening, additional
                ),
                OutputFormat::Json => println!(
                    "{}",
                    json!({
                        "success": true,
                        "equipo_id": team_id,
                        "inauguracion": opening,
                        "adicional": additional
                    })
                )
            }
        }
        Command::PointsTable => {
            let config = client.get_points_config().await?;
            let schedules = PointsTable::from_config(&config)?.schedules();

            match args.format {
                OutputFormat::Text => print!("{}", render_points_table(&schedules)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&schedules)?)
            }
        }
    }

    info!("Done");
    Ok(())
}
