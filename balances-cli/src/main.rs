//! Balances CLI
//!
//! Command-line interface for the Balances API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use balances_client::BalancesClient;
use balances_types::{BalanceTransaction, DEFAULT_PAGE_SIZE, PaginationOptions};

#[derive(Parser)]
#[command(name = "balances")]
#[command(author, version, about = "Balances API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Balances API
    #[arg(
        long,
        env = "BALANCES_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current balance
    Balance,
    /// List balance transactions, newest first
    Transactions {
        /// Items per page (1-100)
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: u32,
        /// Return items after this transaction id
        #[arg(long, conflicts_with = "end_before")]
        start_after: Option<String>,
        /// Return items before this transaction id
        #[arg(long)]
        end_before: Option<String>,
        /// Follow cursors until the last page and print one line per transaction
        #[arg(long, conflicts_with_all = ["start_after", "end_before"])]
        all: bool,
    },
    /// Check API health
    Health,
}

fn summary_line(tx: &BalanceTransaction) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        tx.id,
        tx.kind().unwrap_or("-"),
        tx.amount().map(|a| a.to_string()).unwrap_or_else(|| "-".into()),
        tx.currency().unwrap_or("-"),
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let client = BalancesClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Balance => match client.balance().await? {
            Some(balance) => println!("{}", serde_json::to_string_pretty(&balance)?),
            None => {
                println!("No balance records found.");
                std::process::exit(1);
            }
        },

        Commands::Transactions {
            page_size,
            all: true,
            ..
        } => {
            for tx in client.all_balance_transactions(page_size).await? {
                println!("{}", summary_line(&tx));
            }
        }

        Commands::Transactions {
            page_size,
            start_after,
            end_before,
            all: false,
        } => {
            let mut options = PaginationOptions::new(page_size);
            options.start_after = start_after;
            options.end_before = end_before;

            let view = client.balance_transactions(&options).await?;
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_flags_conflict() {
        let parsed = Cli::try_parse_from([
            "balances",
            "transactions",
            "--start-after",
            "txn_1",
            "--end-before",
            "txn_2",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_transactions_defaults() {
        let cli = Cli::try_parse_from(["balances", "transactions"]).unwrap();
        match cli.command {
            Commands::Transactions {
                page_size, all, ..
            } => {
                assert_eq!(page_size, DEFAULT_PAGE_SIZE);
                assert!(!all);
            }
            _ => panic!("expected transactions command"),
        }
    }

    #[test]
    fn test_summary_line_with_missing_fields() {
        let tx = BalanceTransaction::new("txn_1").with_field("amount", 250);
        assert_eq!(summary_line(&tx), "txn_1\t-\t250\t-");
    }
}
