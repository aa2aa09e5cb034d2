use anyhow::Result;
use destishare_client::RestStore;

use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;

pub fn run(mut cli: Cli) -> Result<()> {
    let Some(command) = cli.command.take() else {
        show_guidance();
        return Ok(());
    };

    match command {
        Commands::Init { url, api_key } => {
            handlers::init::handle(cli.config.as_deref(), url, api_key)
        }

        Commands::List {
            category,
            order_by,
            ascending,
            limit,
        } => {
            let store = connect(&cli)?;
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(handlers::list::handle(
                &store,
                &category,
                order_by.field(),
                ascending,
                limit,
                cli.format,
            ))
        }

        Commands::Add {
            text,
            source,
            category,
        } => {
            let store = connect(&cli)?;
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(handlers::add::handle(
                &store, &text, &source, &category, cli.format,
            ))
        }

        Commands::Vote { id, field } => {
            let store = connect(&cli)?;
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(handlers::vote::handle(&store, id, field.field(), cli.format))
        }

        Commands::Browse => {
            let store = connect(&cli)?;
            let runtime = tokio::runtime::Runtime::new()?;
            handlers::browse::handle(&runtime, store)
        }
    }
}

fn connect(cli: &Cli) -> Result<RestStore> {
    let config = Config::load(cli.config.as_deref())?;
    Ok(RestStore::new(&config.url, &config.api_key)?)
}

fn show_guidance() {
    println!("destishare - Share, filter, and vote on travel destinations\n");
    println!("Get started:");
    println!("  destishare init --url <URL> --api-key <KEY>\n");
    println!("Quick commands:");
    println!("  destishare list                   # Most recommended destinations");
    println!("  destishare list --category beach  # One category only");
    println!("  destishare add --text .. --source .. --category ..");
    println!("  destishare vote <ID> recommended  # Cast a vote");
    println!("  destishare browse                 # Interactive TUI\n");
    println!("For more commands:");
    println!("  destishare --help");
}
