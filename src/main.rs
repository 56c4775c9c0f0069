// Standard library imports
use std::path::PathBuf;
use std::sync::Arc;

// External crate imports
use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use futures_util::{stream, StreamExt};
use log::{debug, error, info, warn, LevelFilter};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::time::Duration;

// Internal crate imports
use xiv_market_board::config_loader::AppConfig;
use xiv_market_board::domain::enums::{MarketScope, DATA_CENTERS, REGIONS};
use xiv_market_board::infrastructure::http;
use xiv_market_board::market_board::render::{render_json, render_table};
use xiv_market_board::market_board::search::{debounce_queries, SessionInput};
use xiv_market_board::market_board::{MarketBrowser, MarketServices};
use xiv_market_board::{TranslationTable, UniversalisClient, XivApiClient};

/// Cheapest NQ and HQ market board prices per item
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to $XIV_MARKET_CONFIG, ./config.toml, ../config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Page through every tradeable item
    Browse {
        /// Region, data center or world
        #[arg(short, long)]
        scope: Option<String>,

        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show prices for items matching free text
    Search {
        query: String,

        #[arg(short, long)]
        scope: Option<String>,

        #[arg(short, long, default_value_t = 1)]
        page: usize,

        #[arg(long)]
        json: bool,
    },

    /// Read search text from stdin, one line per edit.
    /// Lines starting with ':' are commands: :next, :prev, :page N, :scope S, :quit
    Interactive {
        #[arg(short, long)]
        scope: Option<String>,
    },

    /// List known regions and data centers
    Scopes,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    // Explicit level from the command line, RUST_LOG is not consulted
    let parsed_level = parse_log_level(&cli.log_level);
    let level = parsed_level.unwrap_or(LevelFilter::Info);
    env_logger::Builder::new().filter_level(level).init();
    if parsed_level.is_none() {
        warn!("Unknown log level '{}', using {}", cli.log_level, level);
    }
    debug!("Logger initialized at {}", level);

    if let Command::Scopes = cli.command {
        print_scopes();
        return Ok(());
    }

    let config = AppConfig::load(cli.config.as_deref())?;
    let translations = load_translations(&config);
    let mut browser = MarketBrowser::new(build_services(&config)?, &config, translations)?;

    match cli.command {
        Command::Browse { scope, page, json } => {
            apply_scope(&mut browser, scope.as_deref())?;
            browser.load_catalogue().await;
            browser.set_page(page);
            show_page(&browser, json).await
        }
        Command::Search { query, scope, page, json } => {
            apply_scope(&mut browser, scope.as_deref())?;
            browser.load_catalogue().await;
            browser.search(&query).await;
            browser.set_page(page);
            show_page(&browser, json).await
        }
        Command::Interactive { scope } => {
            apply_scope(&mut browser, scope.as_deref())?;
            browser.load_catalogue().await;
            run_interactive(browser, Duration::from_millis(config.search.debounce_ms)).await
        }
        Command::Scopes => Ok(()),
    }
}

fn parse_log_level(raw: &str) -> Option<LevelFilter> {
    raw.trim().parse::<LevelFilter>().ok()
}

/// Both clients share one connection pool
fn build_services(config: &AppConfig) -> Result<MarketServices> {
    let client = http::build_client(&config.services)?;
    let universalis = Arc::new(UniversalisClient::with_client(client.clone(), config)?);
    let xivapi = Arc::new(XivApiClient::with_client(client, config)?);

    Ok(MarketServices {
        catalogue: universalis.clone(),
        market: universalis,
        search: xivapi.clone(),
        metadata: xivapi,
    })
}

/// A broken translation table is not fatal, names fall back to the metadata service
fn load_translations(config: &AppConfig) -> Option<TranslationTable> {
    let path = config.app.translation_table.as_ref()?;
    match TranslationTable::from_file(path) {
        Ok(table) => Some(table),
        Err(e) => {
            warn!("Running without translations: {:#}", e);
            None
        }
    }
}

fn apply_scope(browser: &mut MarketBrowser, scope: Option<&str>) -> Result<()> {
    if let Some(token) = scope {
        browser.set_scope(MarketScope::from_str(token)?);
    }
    Ok(())
}

async fn show_page(browser: &MarketBrowser, json: bool) -> Result<()> {
    let view = browser.load_page().await;
    if json {
        println!("{}", render_json(&view)?);
    } else {
        print!("{}", render_table(&view));
    }
    Ok(())
}

fn print_scopes() {
    println!("Regions:");
    for region in REGIONS {
        println!("  {}", region);
        for (dc, _) in DATA_CENTERS.iter().filter(|(_, r)| r == region) {
            println!("    {}", dc);
        }
    }
    println!("Any other token is treated as a world name.");
}

#[derive(Debug, Clone, PartialEq)]
enum InteractiveCommand {
    Next,
    Prev,
    Page(usize),
    Scope(String),
    Quit,
}

fn parse_command(line: &str) -> Option<InteractiveCommand> {
    let mut parts = line.trim_start_matches(':').split_whitespace();
    match (parts.next()?, parts.next()) {
        ("next" | "n", None) => Some(InteractiveCommand::Next),
        ("prev" | "p", None) => Some(InteractiveCommand::Prev),
        ("page", Some(n)) => n.parse().ok().map(InteractiveCommand::Page),
        ("scope", Some(token)) => Some(InteractiveCommand::Scope(token.to_string())),
        ("quit" | "q", None) => Some(InteractiveCommand::Quit),
        _ => None,
    }
}

/// Search-as-you-type over stdin. Query lines are debounced; a command line
/// first flushes the query typed before it, then acts.
async fn run_interactive(mut browser: MarketBrowser, delay: Duration) -> Result<()> {
    let (input_tx, input_rx) = mpsc::channel::<SessionInput<InteractiveCommand>>(64);
    let mut inputs = debounce_queries(input_rx, delay);

    tokio::spawn(async move {
        let lines = BufReader::new(tokio::io::stdin()).lines();
        let mut lines = Box::pin(stream::unfold(lines, |mut lines| async move {
            match lines.next_line().await {
                Ok(Some(line)) => Some((line, lines)),
                Ok(None) => None,
                Err(e) => {
                    error!("Failed to read stdin: {}", e);
                    None
                }
            }
        }));

        while let Some(line) = lines.next().await {
            let input = if line.starts_with(':') {
                match parse_command(&line) {
                    Some(command) => SessionInput::Command(command),
                    None => {
                        warn!("Unknown command: {}", line);
                        continue;
                    }
                }
            } else {
                SessionInput::Query(line)
            };
            if input_tx.send(input).await.is_err() {
                break;
            }
        }
    });

    info!("Type to search, :next / :prev / :page N / :scope S / :quit");
    show_page(&browser, false).await?;

    // stdin closed once every line before the close has been handled
    while let Some(input) = inputs.recv().await {
        match input {
            SessionInput::Query(text) => {
                browser.search(&text).await;
            }
            SessionInput::Command(InteractiveCommand::Next) => {
                browser.next_page();
            }
            SessionInput::Command(InteractiveCommand::Prev) => {
                browser.prev_page();
            }
            SessionInput::Command(InteractiveCommand::Page(n)) => {
                browser.set_page(n);
            }
            SessionInput::Command(InteractiveCommand::Scope(token)) => match MarketScope::from_str(&token) {
                Ok(scope) => browser.set_scope(scope),
                Err(e) => {
                    warn!("{}", e);
                    continue;
                }
            },
            SessionInput::Command(InteractiveCommand::Quit) => break,
        }
        show_page(&browser, false).await?;
    }

    info!("Exiting");
    Ok(())
}
