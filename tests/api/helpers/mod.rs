mod campaign;
mod http;
mod message;

pub use campaign::campaign_payload;
pub use message::message_payload;

use campaignhub::configuration::{self, Configuration, DatabaseConfigs, StoreBackend};
use campaignhub::startup::Application;
use campaignhub::telemetry;
use sqlx::{Connection, Executor, PgConnection};
use std::sync::OnceLock;
use uuid::Uuid;

#[derive(Debug)]
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

static TRACING: OnceLock<()> = OnceLock::new();

pub fn init_tracing() {
    TRACING.get_or_init(|| {
        let default_filter_level = "info".to_string();
        let subscriber_name = "test".to_string();

        if std::env::var("TEST_LOG").is_ok() {
            let subscriber = telemetry::get_subscriber(
                subscriber_name,
                default_filter_level,
                std::io::stdout,
            );
            telemetry::init_subscriber(subscriber).expect("Failed to init tracing");
        } else {
            let subscriber =
                telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::sink);
            telemetry::init_subscriber(subscriber).expect("Failed to init tracing");
        };
    });
}

/// Starts the application on a random port with a fresh, empty store.
///
/// The store is in-memory unless `TEST_DATABASE` is set, in which case every test gets
/// its own freshly migrated PostgreSQL database from the configured server.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

pub async fn spawn_app_with(customise: impl FnOnce(&mut Configuration)) -> TestApp {
    init_tracing();

    let configuration = {
        let mut c = configuration::get_config().expect("Failed to read configuration.");
        c.application.host = "127.0.0.1".to_string();
        c.application.port = 0;
        if std::env::var("TEST_DATABASE").is_ok() {
            c.database.backend = StoreBackend::Postgres;
            c.database.database_name = Uuid::new_v4().to_string();
        } else {
            c.database.backend = StoreBackend::Memory;
        }
        customise(&mut c);
        c
    };

    if configuration.database.backend == StoreBackend::Postgres {
        create_database(&configuration.database).await;
    }

    let application = Application::build(configuration)
        .await
        .expect("Failed to build application.");
    let application_port = application.port();
    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address: format!("http://127.0.0.1:{}", application_port),
        api_client: reqwest::Client::new(),
    }
}

// Migrations run when the application builds its store.
async fn create_database(config: &DatabaseConfigs) {
    let maintenance_settings = DatabaseConfigs {
        database_name: "postgres".to_string(),
        ..config.clone()
    };

    let mut connection = PgConnection::connect_with(&maintenance_settings.connect_options())
        .await
        .expect("Failed to connect to Postgres");

    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.database_name).as_str())
        .await
        .expect("Failed to create database.");
}
