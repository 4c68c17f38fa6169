mod commands;
mod source;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "interlang",
    version,
    about = "Language-selection engine for interlanguage-link overlays",
    long_about = "interlang turns a page's interlanguage links and a local record of\n\
        previously chosen languages into a ranked, grouped, searchable view:\n\
        a preferred section ordered by usage frequency, and an all-languages\n\
        section with script variants nested under their base language.\n\n\
        Quick start:\n  \
        interlang list --links langlinks.json\n  \
        interlang search \"zh\" --links langlinks.json\n  \
        interlang record zh"
)]
struct Cli {
    /// Enable verbose logging (set log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (default: .interlang/config.toml)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the preferred-languages section
    ///
    /// Ranks the page's languages by how often each was previously chosen
    /// (stored usage counts), ties broken by the order the Language Source
    /// listed them.
    ///
    /// Example: interlang preferred --links langlinks.json
    Preferred {
        /// Path to the interlanguage-links JSON payload
        #[arg(long)]
        links: String,

        /// Path to the frequency store file (default: from config)
        #[arg(long)]
        store: Option<String>,

        /// Device language code; never surfaced as a preferred link target
        #[arg(long)]
        device_lang: Option<String>,

        /// Current page language code; never surfaced as a link target
        #[arg(long)]
        current_lang: Option<String>,
    },
    /// Render the full overlay view (preferred + grouped all-languages)
    ///
    /// Optionally applies a search query first; hidden entries are
    /// suppressed from the output the way a renderer would.
    ///
    /// Examples:
    ///   interlang list --links langlinks.json
    ///   interlang list --links langlinks.json --query "ўз"
    List {
        /// Path to the interlanguage-links JSON payload
        #[arg(long)]
        links: String,

        /// Path to the frequency store file (default: from config)
        #[arg(long)]
        store: Option<String>,

        /// Filter query applied before rendering
        #[arg(long)]
        query: Option<String>,

        /// Device language code; never surfaced as a preferred link target
        #[arg(long)]
        device_lang: Option<String>,

        /// Current page language code; never surfaced as a link target
        #[arg(long)]
        current_lang: Option<String>,
    },
    /// Filter the language list by a substring query
    ///
    /// A record matches when the query, case-folded, occurs literally in
    /// its code, autonym, or title. A base language stays visible when one
    /// of its variants matches.
    ///
    /// Examples:
    ///   interlang search "zh" --links langlinks.json
    ///   interlang search "ўз" --links langlinks.json
    Search {
        /// Search query
        query: String,

        /// Path to the interlanguage-links JSON payload
        #[arg(long)]
        links: String,
    },
    /// Record one selection of a language code
    ///
    /// Increments the persisted usage count that feeds the preferred
    /// section on the next overlay open.
    ///
    /// Example: interlang record zh
    Record {
        /// Language code that was chosen
        code: String,

        /// Path to the frequency store file (default: from config)
        #[arg(long)]
        store: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let config_file = cli.config.as_deref().map(std::path::Path::new);

    match cli.command {
        Commands::Preferred {
            links,
            store,
            device_lang,
            current_lang,
        } => {
            commands::preferred::run(
                std::path::Path::new(&links),
                store.as_deref().map(std::path::Path::new),
                device_lang.as_deref().unwrap_or_default(),
                current_lang.as_deref().unwrap_or_default(),
                config_file,
            )?;
        }
        Commands::List {
            links,
            store,
            query,
            device_lang,
            current_lang,
        } => {
            commands::list::run(
                std::path::Path::new(&links),
                store.as_deref().map(std::path::Path::new),
                query.as_deref(),
                device_lang.as_deref().unwrap_or_default(),
                current_lang.as_deref().unwrap_or_default(),
                config_file,
            )?;
        }
        Commands::Search { query, links } => {
            commands::search::run(&query, std::path::Path::new(&links))?;
        }
        Commands::Record { code, store } => {
            commands::record::run(
                &code,
                store.as_deref().map(std::path::Path::new),
                config_file,
            )?;
        }
    }

    Ok(())
}
