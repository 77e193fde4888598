use anyhow::Context;
use chrono::{DateTime, SecondsFormat};
use clap::{Parser, Subcommand};
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Table};
use configuration::ServeOverrides;
use core_types::{LookbackWindow, PriceSeries, Symbol};
use simulator::MockMarket;

/// The main entry point for the mockquote application.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables (e.g. PORT) from a .env file when one exists.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Serve(overrides) => handle_serve(overrides).await,
        Commands::Sample(args) => handle_sample(args),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A mock stock-market API serving synthetic prices and correlation data.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server.
    Serve(ServeOverrides),
    /// Print one generated price series without starting the server.
    Sample(SampleArgs),
}

#[derive(Parser)]
struct SampleArgs {
    /// The symbol to generate prices for (AAPL, GOOGL or MSFT).
    #[arg(long)]
    symbol: String,

    /// The lookback window in minutes (1-60).
    #[arg(long, default_value_t = LookbackWindow::DEFAULT as i64, allow_negative_numbers = true)]
    minutes: i64,

    /// Emit the same JSON body the HTTP endpoint returns.
    #[arg(long)]
    json: bool,
}

// ==============================================================================
// Command Logic
// ==============================================================================

async fn handle_serve(overrides: ServeOverrides) -> anyhow::Result<()> {
    let mut config = configuration::load_config(overrides.config.as_deref())
        .context("Failed to load configuration")?;
    overrides.apply(&mut config);
    config.validate()?;

    let _log_guard = configuration::init_tracing(&config.logging)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting mockquote.");

    web_server::run_server(&config).await
}

fn handle_sample(args: SampleArgs) -> anyhow::Result<()> {
    let symbol: Symbol = args.symbol.parse()?;
    let window = LookbackWindow::new(args.minutes)?;
    let series = MockMarket::live().price_series(symbol, window);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&series)?);
    } else {
        println!("{}", render_table(&series));
        println!("{symbol} average over {} minutes: {:.4}", window.minutes(), series.average);
    }
    Ok(())
}

/// Renders a price series as a two-column table with RFC 3339 timestamps.
fn render_table(series: &PriceSeries) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Time (UTC)", "Price"]);

    for point in &series.prices {
        let time = DateTime::from_timestamp_millis(point.timestamp)
            .map(|t| t.to_rfc3339_opts(SecondsFormat::Millis, true))
            .unwrap_or_else(|| point.timestamp.to_string());
        table.add_row(vec![
            Cell::new(time),
            Cell::new(format!("{:.4}", point.price)).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::PricePoint;

    #[test]
    fn cli_parses_serve_overrides() {
        let cli = Cli::parse_from(["mockquote", "serve", "--port", "8080", "--seed", "4"]);
        match cli.command {
            Commands::Serve(overrides) => {
                assert_eq!(overrides.port, Some(8080));
                assert_eq!(overrides.seed, Some(4));
                assert!(overrides.host.is_none());
            }
            Commands::Sample(_) => panic!("expected serve"),
        }
    }

    #[test]
    fn sample_defaults_to_thirty_minutes() {
        let cli = Cli::parse_from(["mockquote", "sample", "--symbol", "AAPL"]);
        match cli.command {
            Commands::Sample(args) => {
                assert_eq!(args.minutes, 30);
                assert!(!args.json);
            }
            Commands::Serve(_) => panic!("expected sample"),
        }
    }

    #[test]
    fn sample_rejects_bad_input() {
        let bad_symbol = SampleArgs { symbol: "TSLA".into(), minutes: 5, json: true };
        assert!(handle_sample(bad_symbol).is_err());

        let bad_window = SampleArgs { symbol: "MSFT".into(), minutes: 0, json: true };
        assert!(handle_sample(bad_window).is_err());
    }

    #[test]
    fn table_renders_rfc3339_times() {
        let series = PriceSeries::from_points(vec![PricePoint {
            timestamp: 1_700_000_000_000,
            price: 150.25,
        }]);
        let rendered = render_table(&series).to_string();
        assert!(rendered.contains("2023-11-14T22:13:20.000Z"), "{rendered}");
        assert!(rendered.contains("150.2500"), "{rendered}");
    }
}
