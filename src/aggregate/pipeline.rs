use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;

use crate::aggregate::classifier::is_ml_related;
use crate::aggregate::enricher::to_project;
use crate::aggregate::guard::StaleGuard;
use crate::config::Language;
use crate::github::RepoSource;
use crate::models::Project;
use crate::overrides::OverrideConfig;
use crate::taxonomy::normalize_name;

/// Merged project list, partitioned for display.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Portfolio {
    pub featured: Vec<Project>,
    pub projects: Vec<Project>,
}

impl Portfolio {
    pub fn len(&self) -> usize {
        self.featured.len() + self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.featured.is_empty() && self.projects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.featured.iter().chain(self.projects.iter())
    }
}

pub struct Aggregator {
    source: Arc<dyn RepoSource>,
    overrides: OverrideConfig,
    language: Language,
    guard: StaleGuard,
}

impl Aggregator {
    pub fn new(source: Arc<dyn RepoSource>, overrides: OverrideConfig, language: Language) -> Self {
        Self {
            source,
            overrides,
            language,
            guard: StaleGuard::new(),
        }
    }

    /// Builds the merged, partitioned project list. A failed or empty fetch
    /// degrades to the static list alone; this never fails.
    pub async fn load_projects(&self, account: &str, static_projects: &[Project]) -> Portfolio {
        let derived = self.fetch_derived(account).await;
        self.merge(static_projects, derived)
    }

    /// Like `load_projects`, but discards the result when a newer call was
    /// issued before this one resolved. Interactive consumers that re-invoke
    /// on input changes use this to keep only the latest response.
    pub async fn load_projects_latest(
        &self,
        account: &str,
        static_projects: &[Project],
    ) -> Option<Portfolio> {
        let ticket = self.guard.issue();
        let portfolio = self.load_projects(account, static_projects).await;
        if self.guard.is_current(ticket) {
            Some(portfolio)
        } else {
            tracing::debug!("Discarding stale project load (ticket {})", ticket);
            None
        }
    }

    /// Fetch, classify, exclude and enrich the GitHub-derived portion. An
    /// unset account or a fetch failure yields an empty list.
    async fn fetch_derived(&self, account: &str) -> Vec<Project> {
        if account.is_empty() {
            return Vec::new();
        }

        let repos = match self.source.fetch_repos(account).await {
            Ok(repos) => repos,
            Err(e) => {
                tracing::error!("Failed to load projects from GitHub: {}", e);
                return Vec::new();
            }
        };
        tracing::info!("Fetched {} repositories for {}", repos.len(), account);

        let relevant: Vec<_> = repos
            .into_iter()
            .filter(is_ml_related)
            .filter(|repo| !self.overrides.is_excluded(&normalize_name(&repo.name)))
            .collect();

        relevant
            .iter()
            .enumerate()
            .map(|(index, repo)| to_project(repo, index, &self.overrides, self.language))
            .collect()
    }

    fn merge(&self, static_projects: &[Project], derived: Vec<Project>) -> Portfolio {
        let mut merged: Vec<Project> = static_projects.to_vec();
        for project in merged.iter_mut() {
            if project.slug.is_empty() {
                project.slug = normalize_name(&project.name);
            }
        }

        // Static entries win on display-name collision.
        let taken: HashSet<String> = merged
            .iter()
            .map(|p| normalize_name(&p.name))
            .collect();
        for project in derived {
            if taken.contains(&normalize_name(&project.name)) {
                tracing::debug!("Dropping derived duplicate of {}", project.name);
                continue;
            }
            merged.push(project);
        }

        // Second override pass also reaches static entries, and exclusion is
        // re-checked against the possibly overridden name.
        let mut finalized = Vec::with_capacity(merged.len());
        for mut project in merged {
            let name_key = normalize_name(&project.name);
            if let Some(name) = self
                .overrides
                .display_name(&project.slug)
                .or_else(|| self.overrides.display_name(&name_key))
            {
                project.name = name.to_string();
            }
            if let Some(description) = self
                .overrides
                .description(&project.slug)
                .or_else(|| self.overrides.description(&name_key))
            {
                project.description = description.to_string();
            }

            if self.overrides.is_excluded(&normalize_name(&project.name)) {
                continue;
            }
            finalized.push(project);
        }

        self.partition_featured(finalized)
    }

    fn partition_featured(&self, merged: Vec<Project>) -> Portfolio {
        let mut portfolio = Portfolio::default();
        for mut project in merged {
            let name_key = normalize_name(&project.name);
            match self.overrides.featured_entry(&name_key, &project.slug) {
                Some(substitution) => {
                    if let Some(name) = substitution {
                        project.name = name.to_string();
                    }
                    portfolio.featured.push(project);
                }
                None => portfolio.projects.push(project),
            }
        }
        portfolio
    }
}
