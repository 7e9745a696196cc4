use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use contact_scraper::config::Config;
use contact_scraper::constants::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
use contact_scraper::infra::{HtmlSearchClient, ReqwestPageFetcher};
use contact_scraper::logging;
use contact_scraper::ports::{SearchPort, StaticSearch};
use contact_scraper::{Company, IdentityResolver, ResolverSettings};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "contact_scraper")]
#[command(about = "Finds who to address a cover letter to at a company")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to the TOML config (falls back to $CONTACT_SCRAPER_CONFIG, then config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a contact for each company
    Resolve {
        /// Company name; repeat for several companies
        #[arg(long = "company", required = true)]
        companies: Vec<String>,
        /// Use these candidate URLs instead of searching
        #[arg(long = "url")]
        urls: Vec<String>,
        /// Print contacts as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Load the config and dictionaries and report what was found
    CheckConfig,
}

fn config_path(cli_path: Option<PathBuf>) -> PathBuf {
    cli_path
        .or_else(|| std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

async fn resolve_all<S: SearchPort>(
    search: S,
    config: &Config,
    companies: &[String],
    json: bool,
) -> Result<()> {
    let dictionaries = Arc::new(config.load_dictionaries().context("loading dictionaries")?);
    let settings = ResolverSettings::from_config(config)?;
    let fetcher = ReqwestPageFetcher::new(&config.fetch)?;
    let resolver = IdentityResolver::new(search, fetcher, dictionaries, settings);

    for name in companies {
        let company = Company::new(name.trim());
        let contact = resolver.resolve_contact(&company).await;
        info!(
            "Resolved {} {} at {}",
            contact.greeting, contact.fullname, contact.workplace
        );
        if json {
            println!("{}", serde_json::to_string(&contact)?);
        } else {
            println!("{}", contact);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let _log_guard = logging::init_logging();

    let cli = Cli::parse();
    let path = config_path(cli.config);
    let config = Config::load(&path).with_context(|| format!("loading {}", path.display()))?;

    match cli.command {
        Commands::Resolve {
            companies,
            urls,
            json,
        } => {
            if urls.is_empty() {
                let search = HtmlSearchClient::new(&config.search, &config.fetch)?;
                resolve_all(search, &config, &companies, json).await?;
            } else {
                resolve_all(StaticSearch::new(urls), &config, &companies, json).await?;
            }
        }
        Commands::CheckConfig => {
            let dictionaries = config.load_dictionaries()?;
            let sites = config.site_queries()?;
            println!("Config: {}", path.display());
            println!("  Professional network marker: {}", sites.professional_network);
            println!("  Reserved markers: {}", sites.reserved.join(", "));
            println!("  Candidate budget: {}", config.search.max_results);
            println!("  Brand match mode: {:?}", config.resolver.brand_match);
            println!("  First names: {}", dictionaries.first_names.len());
            println!("  Common words: {}", dictionaries.common_words.len());
            println!("  Brand names: {}", dictionaries.brand_names.len());
        }
    }
    Ok(())
}
