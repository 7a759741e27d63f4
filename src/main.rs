use actiondeck::Tab;
use actiondeck::core::config;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "actiondeck", about = "Async action-state widgets for the terminal")]
struct Args {
    /// Panel to open on startup
    #[arg(short, long, value_enum)]
    tab: Option<Tab>,

    /// Root URL of the JSONPlaceholder-compatible API
    #[arg(long)]
    base_url: Option<String>,

    /// Number of posts to request per fetch
    #[arg(long)]
    posts_limit: Option<u8>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - stdout belongs to the terminal UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("actiondeck.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        config::DeckConfig::default()
    });
    let overrides = config::CliOverrides {
        tab: args.tab,
        base_url: args.base_url,
        posts_limit: args.posts_limit,
    };
    let resolved = config::resolve(&file_config, &overrides);

    log::info!(
        "ActionDeck starting up: tab={:?}, base_url={}",
        resolved.start_tab,
        resolved.base_url
    );

    actiondeck::tui::run(resolved)
}
