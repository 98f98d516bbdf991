use clap::Parser;

use market_dashboard::{
    charts,
    cli::{Cli, Commands},
    config::Config,
    errors::Error,
    fundamentals,
    io::{JsonFileSink, RenderSink, StdoutSink},
    listings,
    models::{asset::AssetClass, date_range::DateRange, symbol::Symbol},
    requests::historical::MarketData,
    trends::TrendsClient,
};

/// Symbol-set size the comparison surface accepts, matching the six input
/// fields of the hosting UI.
const MAX_COMPARISON_SYMBOLS: usize = 6;

fn preprocess() {
    dotenvy::dotenv().ok();
    env_logger::init();
}

#[tokio::main]
async fn main() {
    preprocess();

    let cli = Cli::parse();
    // Every taxonomy error becomes a message, never a panic.
    if let Err(error) = run(cli).await {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

enum Sink {
    Stdout(StdoutSink),
    File(JsonFileSink),
}

impl Sink {
    async fn emit<T: serde::Serialize>(&self, label: &str, artifact: &T) -> Result<(), Error> {
        let value = serde_json::to_value(artifact).map_err(|e| Error::Sink(e.to_string()))?;
        match self {
            Sink::Stdout(sink) => {
                sink.write(label, &value)
                    .await
                    .map_err(|e| Error::Sink(e.to_string()))?;
            }
            Sink::File(sink) => {
                let path = sink
                    .write(label, &value)
                    .await
                    .map_err(|e| Error::Sink(e.to_string()))?;
                println!("{}", path.display());
            }
        }
        Ok(())
    }
}

fn build_client(config: &Config) -> Result<reqwest::Client, Error> {
    reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .build()
        .map_err(|e| Error::Config(e.to_string()))
}

async fn run(cli: Cli) -> Result<(), Error> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env(),
    };
    let sink = if cli.to_file {
        Sink::File(JsonFileSink::temp())
    } else {
        Sink::Stdout(StdoutSink)
    };

    match cli.command {
        Commands::History {
            symbol,
            class,
            interval,
            start,
            end,
            windows,
        } => {
            let range = DateRange::new(start, end)?;
            let symbol = Symbol::normalize(&symbol, class);
            let market = MarketData::yahoo(&config)?;
            let series = market.fetch_single(&symbol, range, class, interval).await?;

            sink.emit(
                "candlestick",
                &charts::candlestick_with_averages(&series, &windows)?,
            )
            .await?;
            sink.emit("trend", &charts::single_trend(&series)).await?;
            if series.has_volume() {
                sink.emit("volume", &charts::single_volume(&series)).await?;
            }
        }

        Commands::Compare {
            symbols,
            class,
            interval,
            start,
            end,
        } => {
            let range = DateRange::new(start, end)?;
            let symbols: Vec<Symbol> = symbols
                .split(',')
                .map(|raw| Symbol::normalize(raw, class))
                .collect();
            if symbols.iter().filter(|s| !s.is_empty()).count() > MAX_COMPARISON_SYMBOLS {
                return Err(Error::InvalidParameter(format!(
                    "at most {MAX_COMPARISON_SYMBOLS} symbols per comparison"
                )));
            }

            let market = MarketData::yahoo(&config)?;
            let frame = market
                .fetch_comparison(&symbols, range, class, interval)
                .await?;

            sink.emit("trend_comparison", &charts::trend_comparison(&frame))
                .await?;
            let volume = charts::volume_comparison(&frame);
            if !volume.traces.is_empty() {
                sink.emit("volume_comparison", &volume).await?;
            }
        }

        Commands::Fundamentals { symbol, language } => {
            let symbol = Symbol::normalize(&symbol, AssetClass::Equity);
            let client = build_client(&config)?;
            let table =
                fundamentals::fetch_fundamentals(&client, &symbol, language.labels()).await?;
            sink.emit("fundamentals", &table).await?;
        }

        Commands::Statement {
            symbol,
            kind,
            language,
        } => {
            let symbol = Symbol::normalize(&symbol, AssetClass::Equity);
            let client = build_client(&config)?;
            let table =
                fundamentals::fetch_statement(&client, &symbol, kind, language.labels()).await?;
            sink.emit("statement", &table).await?;
        }

        Commands::Listing { kind } => {
            let client = build_client(&config)?;
            let table = listings::fetch_listing(&client, kind).await?;
            sink.emit("listing", &table).await?;
        }

        Commands::Trends {
            keywords,
            locale,
            start,
            end,
        } => {
            let range = DateRange::new(start, end)?;
            let keywords: Vec<String> =
                keywords.split(',').map(|k| k.trim().to_string()).collect();

            let client = TrendsClient::new(&config, locale)?;
            let frame = client.interest_over_time(&keywords, range).await?;
            if frame.is_empty() {
                // Rate-limited upstream; a normal outcome, not an error.
                println!("no interest data available");
                return Ok(());
            }

            sink.emit("interest", &charts::interest_comparison(&frame))
                .await?;
            sink.emit("interest_histogram", &charts::interest_histogram(&frame))
                .await?;
        }
    }

    Ok(())
}
