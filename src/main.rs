use bogus_basin_conditions::publishers::TwitterPublisher;
use bogus_basin_conditions::scrapers::ChromeRenderer;
use bogus_basin_conditions::{logging, run, Config, RunOutcome};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let config = Config::from_env();
    let renderer = ChromeRenderer::new(config.render.clone());
    let publisher = TwitterPublisher::from_config(&config)?;

    match run(&config, &renderer, &publisher).await? {
        RunOutcome::Published { .. } => info!("Conditions report posted"),
        RunOutcome::Aborted => info!("Run finished without posting"),
    }

    Ok(())
}
