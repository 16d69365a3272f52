//! CryptoBuddy
//!
//! Interactive command-line assistant for Bitcoin, Ethereum and Cardano.
//! Combines live market data with a static sustainability table and answers
//! keyword-classified questions on stdin/stdout.

mod chat;
mod config;
mod replies;

use std::sync::Arc;

use anyhow::Context;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use buddy_market::{CoinAnalyzer, SustainabilityTable};

use crate::chat::Chat;
use crate::config::BuddyConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load environment before reading RUST_LOG
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the chat
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = BuddyConfig::from_env()
        .inspect_err(|e| eprintln!("{}", replies::fatal_error(e)))
        .context("invalid configuration")?;
    let market = config
        .market_client()
        .context("failed to set up the market data client")?;

    tracing::info!(
        client = market.name(),
        ranking = ?config.ranking,
        timeout_secs = config.coingecko.timeout_secs,
        "starting CryptoBuddy"
    );

    let table = Arc::new(SustainabilityTable::builtin());
    let analyzer = CoinAnalyzer::new(market, table);

    let mut chat = Chat::new(
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        analyzer,
        config.ranking,
    );
    chat.run()
        .await
        .inspect_err(|e| eprintln!("{}", replies::fatal_error(e)))
        .context("conversation aborted")?;

    Ok(())
}
