use std::sync::Arc;

use clap::Parser;
use serde_json::json;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_client::portfolio::domain::display::{skill_categories, unique_companies};
use portfolio_client::shared::env::load_env_files;
use portfolio_client::{
    ApiEndpoints, AssetConfig, CachedPortfolioService, MemorySessionStore, PortfolioFeed,
    ReqwestTransport, TransportConfig,
};

/// Fetch every portfolio section once through the session cache and print a
/// summary.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Only featured projects
    #[arg(long)]
    featured: bool,

    /// Drop cached entries before fetching
    #[arg(long)]
    clear_cache: bool,

    /// Backend base address, overrides PORTFOLIO_API_URL
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_env_files();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let endpoints = match cli.api_url {
        Some(url) => ApiEndpoints::new(url),
        None => ApiEndpoints::from_env(),
    };
    let assets = AssetConfig::from_env();
    let transport = ReqwestTransport::new(&TransportConfig::from_env())?;

    info!(api = endpoints.base_url(), "Fetching portfolio sections...");

    let service = CachedPortfolioService::new(transport, MemorySessionStore::new(), endpoints);
    let feed = PortfolioFeed::new(Arc::new(service));

    if cli.clear_cache {
        feed.clear_cache();
    }

    let profile = feed.fetch_profile().await;
    let experience = feed.fetch_experience().await;
    let projects = feed.fetch_projects(cli.featured).await;
    let skills = feed.fetch_skills().await;
    let certifications = feed.fetch_certifications().await;

    let summary = json!({
        "profile": profile,
        "experience": experience
            .iter()
            .map(|e| json!({
                "company": e.company,
                "role": e.role,
                "duration": e.duration_label(),
            }))
            .collect::<Vec<_>>(),
        "companies": unique_companies(&experience),
        "projects": projects
            .iter()
            .map(|p| json!({
                "title": p.title,
                "featured": p.featured,
                "repo": p.has_repo().then(|| p.repo_link.clone()),
                "live": p.has_live_demo().then(|| p.live_link.clone()),
            }))
            .collect::<Vec<_>>(),
        "skill_categories": skill_categories(&skills),
        "skills": skills.len(),
        "certifications": certifications.len(),
        "assets": {
            "resume": assets.resume_url(),
            "profile_image": assets.profile_image_url(),
            "profile_image_no_bg": assets.profile_image_no_bg_url(),
        },
    });

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
