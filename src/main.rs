use clap::{Parser, Subcommand};
use either::{Left, Right};
use itertools::Itertools;
use pubwatch::{
    Bot, Command, DateRange, Error, MedlineParser, PubMedClient, Reply, Settings, load_settings,
};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Watch a journal's PubMed listing and render new articles as chat messages
#[derive(Parser, Debug)]
#[command(name = "pubwatch")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a local MEDLINE export and print the articles as JSON
    Parse {
        /// The `.nbib` / MEDLINE text file
        file: PathBuf,
    },

    /// List the articles of the default look-back window
    Articles,

    /// List the articles published between two dates (YYYY-MM-DD)
    Custom { start: String, end: String },

    /// Show the abstract of one recent article
    Abstract { pmid: String },

    /// Read chat messages from stdin, one per line, and print the replies
    Chat,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("pubwatch={default_level}")),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(path) = &cli.config {
        tracing::info!("Using config file: {}", path.display());
    }
    let settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        Commands::Parse { file } => parse_file(&file),
        Commands::Articles => run_once(settings, Command::Articles).await,
        Commands::Custom { start, end } => {
            let range = format!("{start} to {end}");
            DateRange::parse(&range)?;
            run_once(settings, Command::Range(range)).await
        }
        Commands::Abstract { pmid } => run_once(settings, Command::Abstract(Some(pmid))).await,
        Commands::Chat => chat(settings).await,
    }
}

fn parse_file(path: &Path) -> Result<(), Error> {
    let source = std::fs::read_to_string(path)?;
    let (records, skipped): (Vec<_>, Vec<_>) = MedlineParser::new()
        .parse_outcomes(&source)
        .into_iter()
        .partition_map(|outcome| match outcome {
            Ok(record) => Left(record),
            Err(err) => Right(err),
        });

    for err in &skipped {
        #[cfg(feature = "diagnostics")]
        eprintln!("{}", err.to_diagnostic(&path.display().to_string(), &source));
        #[cfg(not(feature = "diagnostics"))]
        tracing::warn!("{err}");
    }
    tracing::info!(parsed = records.len(), skipped = skipped.len(), "parsed {}", path.display());

    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}

async fn run_once(settings: Settings, command: Command) -> Result<(), Error> {
    let today = chrono::Local::now().date_naive();
    let bot = Bot::new(PubMedClient::new(settings.clone())?, settings);
    print_replies(&bot.handle(command, today).await);
    Ok(())
}

async fn chat(settings: Settings) -> Result<(), Error> {
    let bot = Bot::new(PubMedClient::new(settings.clone())?, settings);
    tracing::info!("Reading chat messages from stdin");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        print_replies(&bot.handle_text(&line).await);
    }
    tracing::info!("Input closed, stopping");
    Ok(())
}

fn print_replies(replies: &[Reply]) {
    for reply in replies {
        println!("{}\n", reply.text.trim_end());
    }
}
