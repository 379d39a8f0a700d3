use lazy_static::lazy_static;
use std::sync::Arc;
use testcontainers::{clients::Cli, Container};
use testcontainers_modules::postgres::Postgres;
use tokio_postgres::{Client, NoTls};

pub struct TestDatabase {
    pub connection_string: String,
    _container: Container<'static, Postgres>
}

impl TestDatabase {
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        lazy_static! {
            static ref DOCKER: Arc<Cli> = Arc::new(Cli::default());
        }

        let container = DOCKER.run(Postgres::default());
        let port = container.get_host_port_ipv4(5432);

        let connection_string = format!(
            "host=localhost port={} user=postgres password=postgres dbname=postgres",
            port
        );

        let database = TestDatabase {
            connection_string,
            _container: container
        };

        let client = database.get_client().await?;
        client.batch_execute(include_str!("schema.sql")).await?;

        Ok(database)
    }

    pub async fn get_client(&self) -> Result<Client, Box<dyn std::error::Error>> {
        let (client, connection) = tokio_postgres::connect(&self.connection_string, NoTls).await?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                eprintln!("Database connection error: {}", e);
            }
        });

        Ok(client)
    }

    /// Seeds one tournament:
    ///
    /// - categories Juvenil (1) and Mayores (2)
    /// - Juvenil: Halcones (1), Pumas (2), Condores (3); Mayores: Lobos (4)
    /// - Futbol (1): collective, worth 10 (second tier)
    /// - Natacion (2): individual, worth 15 (third tier), competition 1
    /// - tiers worth 5, 10, 15 and 8
    pub async fn seed_test_data(&self) -> Result<(), Box<dyn std::error::Error>> {
        let client = self.get_client().await?;

        client
            .batch_execute(
                "INSERT INTO torneos (nombre) VALUES ('Juegos Intercolegiales');

                 INSERT INTO categorias (nombre) VALUES ('Juvenil'), ('Mayores');

                 INSERT INTO equipos (nombre, categoria_id) VALUES
                 ('Halcones', 1), ('Pumas', 1), ('Condores', 1), ('Lobos', 2);

                 INSERT INTO disciplinas (nombre, tipo, valor_puntos) VALUES
                 ('Futbol', 'colectiva', 10), ('Natacion', 'individual', 15);

                 INSERT INTO competencias (disciplina_id) VALUES (2);

                 INSERT INTO puntajes (puntaje_primer_puesto) VALUES (5), (10), (15), (8);"
            )
            .await?;

        // Futbol: Halcones 4, Pumas 7 over two matches, Condores did not present
        client
            .batch_execute(
                "INSERT INTO puntuaciones (equipo_id, disciplina_id, puntaje_por_equipo) VALUES
                 (1, 1, 3), (1, 1, 1), (2, 1, 4), (2, 1, 3), (3, 1, 5000), (3, 1, 4999), (4, 1, 2);"
            )
            .await?;

        // Natacion: Condores 1st, Halcones 2nd, Pumas has a NULL result
        client
            .batch_execute(
                "INSERT INTO resultados_equipos (equipo_id, competencia_id, resultado_equipo) VALUES
                 (1, 1, 20), (2, 1, NULL), (3, 1, 35);"
            )
            .await?;

        client
            .batch_execute(
                "INSERT INTO puntuaciones_extras (equipo_id, inauguracion, adicional) VALUES
                 (1, 3, 0), (2, 0, 0);"
            )
            .await?;

        Ok(())
    }
}
