use anyhow::Result;
use destishare_client::{DestinationRepository, RestStore};
use destishare_types::NewDestination;

use crate::types::OutputFormat;
use crate::views;

pub async fn handle(
    store: &RestStore,
    text: &str,
    source: &str,
    category: &str,
    format: OutputFormat,
) -> Result<()> {
    let new = NewDestination::new(text, source, category)?;
    let stored = store.create(new).await?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stored)?),
        OutputFormat::Plain => {
            println!("Added destination #{}:", stored.id);
            println!("{}", views::format_destination_line(&stored));
        }
    }

    Ok(())
}
