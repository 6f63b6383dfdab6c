use chrono::Datelike;

use crate::config::Language;
use crate::models::project::{Project, AI_ML_CATEGORY, DERIVED_ID_BASE, PLACEHOLDER_IMAGE};
use crate::models::Repository;
use crate::overrides::OverrideConfig;
use crate::taxonomy::{infer_technologies, normalize_name, prettify_name};

/// Derives a display-ready project from a raw repository. `index` is the
/// position in the classified/filtered sequence; ids are not stable across
/// fetches. Never fails, whatever optional fields are absent.
pub fn to_project(
    repo: &Repository,
    index: usize,
    overrides: &OverrideConfig,
    language: Language,
) -> Project {
    let slug = normalize_name(&repo.name);

    let name = overrides
        .display_name(&slug)
        .map(str::to_string)
        .unwrap_or_else(|| prettify_name(&repo.name));

    let tech = build_technologies(repo, &slug, &name, overrides);

    let description = overrides
        .description(&slug)
        .map(str::to_string)
        .or_else(|| repo.description.clone().filter(|d| !d.is_empty()))
        .unwrap_or_else(|| language.default_project_description().to_string());

    Project {
        id: DERIVED_ID_BASE + index as u32,
        name,
        slug,
        image: PLACEHOLDER_IMAGE.to_string(),
        date: format!("{:04}", repo.created_at.year()),
        tech,
        category: Some(AI_ML_CATEGORY.to_string()),
        description,
        demo_video: String::new(),
        github: repo.html_url.clone(),
        live: String::new(),
    }
}

/// Technology signals in precedence order: primary language, description
/// keywords, name keywords, topic keywords, then the manual override table.
/// First occurrence wins; an empty result falls back to Python.
fn build_technologies(
    repo: &Repository,
    slug: &str,
    display_name: &str,
    overrides: &OverrideConfig,
) -> Vec<String> {
    let mut tech: Vec<String> = Vec::new();

    if let Some(language) = &repo.language {
        tech.push(language.clone());
    }

    if let Some(description) = &repo.description {
        tech.extend(infer_technologies(&description.to_lowercase()));
    }
    tech.extend(infer_technologies(&repo.name.to_lowercase()));

    for topic in repo.topics.as_deref().unwrap_or_default() {
        tech.extend(infer_technologies(&topic.to_lowercase()));
    }

    if let Some(extra) = overrides
        .technologies(slug)
        .or_else(|| overrides.technologies(&normalize_name(display_name)))
    {
        tech.extend(extra.iter().cloned());
    }

    let tech = dedup_preserving_order(tech);
    if tech.is_empty() {
        vec!["Python".to_string()]
    } else {
        tech
    }
}

fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
