use anyhow::Context;
use campaignhub::configuration::get_config;
use campaignhub::startup::Application;
use campaignhub::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("campaignhub".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber)?;

    let configuration = get_config().context("Failed to read configuration")?;
    let application = Application::build(configuration).await?;
    tracing::info!(port = application.port(), "campaign hub is listening");

    application.run_until_stopped().await
}
