use anyhow::Result;
use destishare_client::{DestinationRepository, ListQuery, RestStore};
use destishare_types::{CategoryFilter, OrderBy, VoteField};

use crate::types::OutputFormat;
use crate::views;

pub async fn handle(
    store: &RestStore,
    category: &str,
    order_field: VoteField,
    ascending: bool,
    limit: usize,
    format: OutputFormat,
) -> Result<()> {
    let filter: CategoryFilter = category.parse()?;
    let query = ListQuery::new()
        .filter(filter)
        .order(OrderBy {
            field: order_field,
            descending: !ascending,
        })
        .limit(limit);

    let destinations = store.list(query).await?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&destinations)?),
        OutputFormat::Plain => views::print_destinations(&destinations),
    }

    Ok(())
}
