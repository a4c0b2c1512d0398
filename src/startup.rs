use crate::configuration::{Configuration, DatabaseConfigs, StoreBackend};
use crate::repository::{InMemoryRepository, PgRepository, Repository};
use crate::routes::{campaign_routes, health_check, message_routes};
use crate::utils::{json_error_handler, path_error_handler};
use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
    repository: Arc<dyn Repository>,
}

impl Application {
    pub async fn build(config: Configuration) -> Result<Self, anyhow::Error> {
        let repository = build_repository(&config.database).await?;

        let address = format!("{}:{}", config.application.host, config.application.port);
        let listener = TcpListener::bind(address)
            .with_context(|| "Failed to bind TCP listener for application")?;
        let port = listener
            .local_addr()
            .with_context(|| "Failed to read local address of TCP listener")?
            .port();
        let server = run(
            listener,
            repository.clone(),
            config.application.allowed_origins,
        )
        .context("Failed to run Actix web server")?;

        Ok(Self {
            port,
            server,
            repository,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serves until actix-web shuts down (SIGINT/SIGTERM), then closes the store.
    pub async fn run_until_stopped(self) -> Result<(), anyhow::Error> {
        let result = self.server.await.context("Server stopped with an error");
        self.repository.close().await;
        tracing::info!("record store closed");
        result
    }
}

pub fn get_connection_pool(config: &DatabaseConfigs) -> PgPool {
    PgPoolOptions::new().connect_lazy_with(config.connect_options())
}

#[tracing::instrument(skip_all, fields(backend=?config.backend))]
pub async fn build_repository(
    config: &DatabaseConfigs,
) -> Result<Arc<dyn Repository>, anyhow::Error> {
    match config.backend {
        StoreBackend::Postgres => {
            let pool = get_connection_pool(config);
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to migrate the database")?;
            Ok(Arc::new(PgRepository::new(pool)))
        }
        StoreBackend::Memory => Ok(Arc::new(InMemoryRepository::new())),
    }
}

/// `"*"` admits any origin; otherwise only the listed origins get CORS headers.
fn cors(allowed_origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600);

    if allowed_origins.iter().any(|origin| origin == "*") {
        return cors.allow_any_origin();
    }

    allowed_origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}

fn run(
    tcp_listener: TcpListener,
    repository: Arc<dyn Repository>,
    allowed_origins: Vec<String>,
) -> Result<Server, anyhow::Error> {
    // the store is shared by every worker; handlers extract it as `web::Data<dyn Repository>`
    let repository: web::Data<dyn Repository> = web::Data::from(repository);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors(&allowed_origins))
            .wrap(TracingLogger::default())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .configure(configure_routes)
            .app_data(repository.clone())
    })
    .listen(tcp_listener)
    .with_context(|| "Failed to bind Actix server to TCP listener")?
    .run();

    Ok(server)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health_check", web::get().to(health_check))
        .service(
            web::scope("/api")
                .service(web::scope("/campaigns").configure(campaign_routes))
                .service(web::scope("/messages").configure(message_routes)),
        );
}
