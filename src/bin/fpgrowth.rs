use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fpgrowth::fp::{into_levels, mine_with_config, MinSupport, MiningConfig};
use fpgrowth::transactions::{read_transactions, reorder_by_frequency};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "fpgrowth", about = "Mine frequent itemsets with FP-Growth")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every frequent itemset with its support ratio
    Mine {
        /// Comma-delimited transactions, one per line
        file: PathBuf,

        /// Minimum support as a fraction of all transactions
        min_support: f64,

        /// Treat MIN_SUPPORT as an absolute transaction count
        #[arg(long)]
        count: bool,
    },
    /// Print each transaction with items ordered by global frequency
    Reorder {
        /// Comma-delimited transactions, one per line
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    let args = Args::parse();

    match args.command {
        Command::Mine {
            file,
            min_support,
            count,
        } => {
            let transactions = read_transactions(&file)?;
            let min_support = if count {
                MinSupport::Count(min_support)
            } else {
                MinSupport::Ratio(min_support)
            };
            let config = MiningConfig::new(min_support);
            info!(?config, transactions = transactions.len(), "mining {}", file.display());

            let patterns = mine_with_config::<String, _>(&transactions, &config)
                .context("mining failed")?;
            let num_transactions = transactions.len() as f64;

            for level in into_levels(&patterns) {
                for (itemset, support) in level.iter() {
                    println!("[{}] {}", itemset.join(", "), support / num_transactions);
                }
            }
        }
        Command::Reorder { file } => {
            let transactions = read_transactions(&file)?;
            for transaction in reorder_by_frequency(&transactions) {
                println!("[{}]", transaction.join(", "));
            }
        }
    }

    Ok(())
}
