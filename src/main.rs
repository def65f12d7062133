use snowflake_resolver::cli_service::CliService;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("snowflake_resolver=info")),
        )
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Snowflake destination resolver");
    debug!("Environment variables: DESTINATION_CONFIG_PATH={}, CONNECTOR_SPEC_PATH={}",
        std::env::var("DESTINATION_CONFIG_PATH").unwrap_or_else(|_| "not set".to_string()),
        std::env::var("CONNECTOR_SPEC_PATH").unwrap_or_else(|_| "not set".to_string())
    );

    let config_location = CliService::config_location(std::env::args().nth(1))?;
    let service = CliService::new().await?;

    let outcome = service.run(&config_location).await?;
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
