use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use crypto_gainer_scanner_rs::{
    Binance, Bybit, CEXTrait, GainerQuery, MarketScannerError, QueryKind, ScannerConfig,
};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Query 24h tickers and top gainers from Binance or Bybit. Prints JSON on stdout.
#[derive(Debug, Parser)]
#[command(name = "crypto-gainers", version)]
struct Cli {
    #[arg(value_enum)]
    exchange: ExchangeArg,

    /// Bybit market category: spot, linear, option or inverse. Ignored for Binance.
    #[arg(long, default_value = "spot")]
    market: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExchangeArg {
    Binance,
    Bybit,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check connectivity to the exchange REST API
    Health,
    /// Every 24h ticker
    Tickers,
    /// 24h ticker for one symbol, e.g. BTCUSDT
    Ticker { symbol: String },
    /// Symbols ending with the given quote currency
    Symbols { ending: String },
    /// Ranked gainers (default limit 500, no quote filter)
    Gainers {
        #[arg(long, allow_negative_numbers = true)]
        limit: Option<i64>,
        #[arg(long)]
        ending: Option<String>,
    },
    /// Ranked gainers formatted as BASE/QUOTE (defaults: 100, USDT, excluding BNB)
    Pairs {
        #[arg(long, allow_negative_numbers = true)]
        limit: Option<i64>,
        #[arg(long)]
        ending: Option<String>,
        #[arg(long)]
        exclude: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<String, MarketScannerError> {
    let config = ScannerConfig::from_env()?;

    match cli.exchange {
        ExchangeArg::Binance => execute(&Binance::from_config(&config), cli.command).await,
        ExchangeArg::Bybit => {
            let bybit = Bybit::from_config(&config).for_market(&cli.market)?;
            execute(&bybit, cli.command).await
        }
    }
}

async fn execute<E: CEXTrait>(
    exchange: &E,
    command: Command,
) -> Result<String, MarketScannerError> {
    let cex = exchange.cex();

    let json = match command {
        Command::Health => {
            exchange.health_check().await?;
            serde_json::to_string_pretty(&serde_json::json!({ "exchange": cex, "status": "ok" }))?
        }
        Command::Tickers => serde_json::to_string_pretty(&exchange.get_all_tickers().await?)?,
        Command::Ticker { symbol } => {
            serde_json::to_string_pretty(&exchange.get_ticker_for_symbol(&symbol).await?)?
        }
        Command::Symbols { ending } => {
            serde_json::to_string_pretty(&exchange.symbols_ending_with(&ending).await?)?
        }
        Command::Gainers { limit, ending } => {
            let query = GainerQuery::defaults_for(cex, QueryKind::Gainers)
                .with_overrides(limit, ending, None);
            let gainers = exchange
                .get_gainers(query.limit, &query.ending_filter)
                .await?;
            serde_json::to_string_pretty(&gainers)?
        }
        Command::Pairs {
            limit,
            ending,
            exclude,
        } => {
            let query = GainerQuery::defaults_for(cex, QueryKind::GainerPairs)
                .with_overrides(limit, ending, exclude);
            serde_json::to_string_pretty(&exchange.get_gainer_pairs(&query).await?)?
        }
    };

    Ok(json)
}
