use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gitfolio::models::load_static_projects;
use gitfolio::{Aggregator, Config, GitHubClient, Language, OverrideConfig, Portfolio};

#[derive(Parser, Debug)]
#[command(name = "gitfolio")]
#[command(version = "0.1.0")]
#[command(about = "Build a portfolio project list from GitHub and a curated static list")]
struct Args {
    /// GitHub account to pull repositories from (falls back to
    /// GITHUB_USERNAME; without either, only the static list is used)
    #[arg(short, long)]
    username: Option<String>,

    /// GitHub API token (falls back to GITHUB_TOKEN; raises rate limits)
    #[arg(long)]
    token: Option<String>,

    /// JSON file with the hand-authored project list
    #[arg(short, long)]
    projects: Option<PathBuf>,

    /// JSON file with override tables (defaults to the built-in ones)
    #[arg(long)]
    overrides: Option<PathBuf>,

    /// UI language for localized defaults (pt, en)
    #[arg(long)]
    lang: Option<String>,

    /// Output format (json, text, markdown)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Follow pagination links instead of the default single page
    #[arg(long)]
    all_pages: bool,
}

const MAX_PAGES: u32 = 10;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("gitfolio=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env()?;

    let username = args.username.clone().or(config.username).unwrap_or_default();
    let token = args.token.clone().or(config.github_token);
    let language: Language = match &args.lang {
        Some(lang) => lang.parse()?,
        None => config.language,
    };

    let overrides = match &args.overrides {
        Some(path) => OverrideConfig::from_file(path)?,
        None => OverrideConfig::builtin(),
    };

    let static_projects = match &args.projects {
        Some(path) => load_static_projects(path)?,
        None => Vec::new(),
    };

    let mut client = GitHubClient::new(token.as_deref())?;
    if args.all_pages {
        client = client.with_pagination(MAX_PAGES);
    }

    let aggregator = Aggregator::new(Arc::new(client), overrides, language);

    if username.is_empty() {
        tracing::info!("No GitHub account configured, using the static list only");
    }
    let portfolio = aggregator.load_projects(&username, &static_projects).await;

    output_portfolio(&portfolio, &args)?;

    Ok(())
}

fn output_portfolio(portfolio: &Portfolio, args: &Args) -> anyhow::Result<()> {
    let output = match args.format.as_str() {
        "json" => serde_json::to_string_pretty(portfolio)?,
        "markdown" => format_markdown(portfolio),
        _ => format_text(portfolio),
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!("Output written to: {}", path.display());
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_text(portfolio: &Portfolio) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "\n=== Portfolio ({} projects) ===\n",
        portfolio.len()
    ));

    if !portfolio.featured.is_empty() {
        output.push_str("\nFeatured:\n");
        for project in &portfolio.featured {
            output.push_str(&format_project_line(project));
        }
    }

    if !portfolio.projects.is_empty() {
        output.push_str("\nProjects:\n");
        for project in &portfolio.projects {
            output.push_str(&format_project_line(project));
        }
    }

    output
}

fn format_project_line(project: &gitfolio::models::Project) -> String {
    let category = project.category.as_deref().unwrap_or("-");
    format!(
        "  - {} ({}) [{}] {}\n      {}\n",
        project.name,
        project.date,
        category,
        project.tech.join(", "),
        project.github,
    )
}

fn format_markdown(portfolio: &Portfolio) -> String {
    let mut output = String::new();

    output.push_str("# Portfolio\n");

    if !portfolio.featured.is_empty() {
        output.push_str("\n## Featured\n\n");
        output.push_str(&markdown_table(&portfolio.featured));
    }

    output.push_str("\n## Projects\n\n");
    output.push_str(&markdown_table(&portfolio.projects));

    output
}

fn markdown_table(projects: &[gitfolio::models::Project]) -> String {
    let mut output = String::new();
    output.push_str("| Project | Year | Category | Technologies | Repository |\n");
    output.push_str("|---------|------|----------|--------------|------------|\n");

    for project in projects {
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            project.name,
            project.date,
            project.category.as_deref().unwrap_or("-"),
            project.tech.join(", "),
            project.github,
        ));
    }

    output
}
