use crate::config::Config;
use crate::message::{format_message, is_valid, message_length};
use crate::publishers::Publisher;
use crate::scrapers::{extract, PageRenderer};
use anyhow::{Context, Result};
use tracing::{debug, error, info};

/// How a run ended when nothing went wrong
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The report was posted
    Published { message: String },
    /// The page had no temperature, nothing was posted
    Aborted,
}

/// Render, extract, format and publish the conditions report once
pub async fn run(
    config: &Config,
    renderer: &dyn PageRenderer,
    publisher: &dyn Publisher,
) -> Result<RunOutcome> {
    info!("Begin handling request to url: {}...", config.target_url);

    let html = renderer
        .render(&config.target_url)
        .await
        .with_context(|| format!("Failed to render {}", config.target_url))?;

    info!("Begin parsing out data from response");
    let snapshot = extract(&html).context("Failed to extract conditions")?;

    info!("##### CONDITIONS #####");
    for (name, value) in snapshot.fields() {
        info!("{}: {}", name, value);
    }
    info!("######################");
    debug!("Snapshot: {}", serde_json::to_string(&snapshot)?);
    info!("Finished parsing data from response");

    if !is_valid(&snapshot) {
        error!("An issue occurred with the request, no value for temperature, aborting!");
        return Ok(RunOutcome::Aborted);
    }

    let message = format_message(&snapshot, &config.short_link);
    info!("Attempting to post to {}:\n{}", publisher.destination(), message);
    info!("Message length: {}", message_length(&message));

    publisher
        .publish(&message)
        .await
        .with_context(|| format!("Failed to post to {}", publisher.destination()))?;

    Ok(RunOutcome::Published { message })
}
