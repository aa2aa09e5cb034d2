use anyhow::Result;
use destishare_client::{DestinationRepository, RestStore};
use destishare_types::VoteField;

use crate::types::OutputFormat;
use crate::views;

pub async fn handle(
    store: &RestStore,
    id: u64,
    field: VoteField,
    format: OutputFormat,
) -> Result<()> {
    let updated = store.increment_vote(id, field).await?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&updated)?),
        OutputFormat::Plain => {
            println!(
                "Voted {} on destination #{} (now {})",
                field,
                updated.id,
                updated.votes(field)
            );
            println!("{}", views::format_destination_line(&updated));
        }
    }

    Ok(())
}
