use clap::{Parser, Subcommand};

use crate::types::{OutputFormat, VoteFieldArg};
use destishare_types::DEFAULT_LIST_LIMIT;

#[derive(Parser)]
#[command(name = "destishare")]
#[command(about = "Share, filter, and vote on travel destinations", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the config file (default: the platform data dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List destinations, most recommended first
    List {
        /// Restrict to one category, or "all"
        #[arg(long, default_value = "all")]
        category: String,

        /// Vote counter to order by
        #[arg(long, default_value = "recommended")]
        order_by: VoteFieldArg,

        /// Order ascending instead of descending
        #[arg(long)]
        ascending: bool,

        #[arg(long, default_value_t = DEFAULT_LIST_LIMIT)]
        limit: usize,
    },

    /// Add a new destination
    Add {
        /// Description of the destination
        #[arg(long)]
        text: String,

        /// Source URL for the suggestion
        #[arg(long)]
        source: String,

        /// One of: city, nature, beach, adventure, culture, relaxation
        #[arg(long)]
        category: String,
    },

    /// Cast a vote on a destination
    Vote {
        /// Id of the destination to vote on
        id: u64,

        /// Which counter to bump
        field: VoteFieldArg,
    },

    /// Browse, vote, and submit interactively
    Browse,

    /// Write the config file with the store URL and api key
    Init {
        /// Base URL of the hosted store (e.g. https://xyz.supabase.co)
        #[arg(long)]
        url: Option<String>,

        /// Anonymous api key for the store
        #[arg(long)]
        api_key: Option<String>,
    },
}
