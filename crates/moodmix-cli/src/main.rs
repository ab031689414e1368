use anyhow::Result;
use clap::{Parser, Subcommand};
use moodmix_core::Language;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

mod commands;

#[derive(Parser)]
#[command(name = "moodmix")]
#[command(about = "Moodmix - brew how you feel into a mood cocktail", long_about = None)]
struct Cli {
    /// Directory holding config.toml, secret.json and history.json
    #[arg(long, global = true, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score text locally without calling the model
    Estimate {
        /// Text to score
        #[arg(required = true)]
        text: Vec<String>,
        /// Language for labels
        #[arg(long)]
        lang: Option<Language>,
    },
    /// Brew a cocktail from text and add it to the history
    Brew {
        #[arg(required = true)]
        text: Vec<String>,
        /// Language of the cocktail (defaults to config.toml)
        #[arg(long)]
        lang: Option<Language>,
    },
    /// List past cocktails, newest first
    History {
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        lang: Option<Language>,
    },
    /// Show one cocktail from the history
    Show {
        id: String,
        /// Switch the cocktail to the other language
        #[arg(long)]
        translate: bool,
    },
    /// Emotional wave and mood breakdown over recent days
    Insights {
        #[arg(long, default_value_t = 7)]
        days: u32,
        #[arg(long)]
        lang: Option<Language>,
        /// Also ask the model for a written report and a suggested drink
        #[arg(long)]
        report: bool,
    },
    /// Store the Gemini API key in secret.json
    Key { api_key: String },
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("moodmix=info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let ctx = commands::context::AppContext::new(cli.config_dir)?;

    match cli.command {
        Commands::Estimate { text, lang } => commands::estimate::run(&ctx, &text.join(" "), lang)?,
        Commands::Brew { text, lang } => commands::brew::run(&ctx, &text.join(" "), lang).await?,
        Commands::History { limit, lang } => commands::history::run(&ctx, limit, lang).await?,
        Commands::Show { id, translate } => commands::show::run(&ctx, &id, translate).await?,
        Commands::Insights { days, lang, report } => {
            commands::insights::run(&ctx, days, lang, report).await?
        }
        Commands::Key { api_key } => commands::key::run(&ctx, &api_key)?,
    }

    Ok(())
}
