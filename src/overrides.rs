use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::error::Result;
use crate::taxonomy::normalize_name;

/// Hand-curated override tables consumed by the merge pipeline. Lookup keys
/// are normalized once at construction; the tables themselves are plain data
/// and are not validated beyond that.
#[derive(Debug, Clone, Default)]
pub struct OverrideConfig {
    excluded: HashSet<String>,
    name_overrides: HashMap<String, String>,
    description_overrides: HashMap<String, String>,
    /// Normalized key → optional display-name substitution. An entry with no
    /// value still marks the project as featured.
    featured: Vec<(String, Option<String>)>,
    tech_overrides: HashMap<String, Vec<String>>,
}

/// On-disk shape of the override tables, before key normalization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideFile {
    #[serde(default)]
    pub excluded: Vec<String>,
    #[serde(default)]
    pub name_overrides: HashMap<String, String>,
    #[serde(default)]
    pub description_overrides: HashMap<String, String>,
    #[serde(default)]
    pub featured: HashMap<String, Option<String>>,
    #[serde(default)]
    pub tech_overrides: HashMap<String, Vec<String>>,
}

impl OverrideConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let file: OverrideFile = serde_json::from_str(&raw)?;
        Ok(Self::from_tables(file))
    }

    pub fn from_tables(file: OverrideFile) -> Self {
        let mut featured: Vec<(String, Option<String>)> = file
            .featured
            .into_iter()
            .map(|(k, v)| (normalize_name(&k), v.filter(|s| !s.is_empty())))
            .collect();
        featured.sort();

        Self {
            excluded: file.excluded.iter().map(|n| normalize_name(n)).collect(),
            name_overrides: file
                .name_overrides
                .into_iter()
                .map(|(k, v)| (normalize_name(&k), v))
                .collect(),
            description_overrides: file
                .description_overrides
                .into_iter()
                .map(|(k, v)| (normalize_name(&k), v))
                .collect(),
            featured,
            tech_overrides: file
                .tech_overrides
                .into_iter()
                .map(|(k, v)| (normalize_name(&k), v))
                .collect(),
        }
    }

    /// The tables the original portfolio ships with.
    pub fn builtin() -> Self {
        Self::from_tables(OverrideFile {
            excluded: [
                "orb-run",
                "util-tools-discord-boot",
                "fastin-vision-chat",
                "deep-chat-discord",
                "cv-boost",
                "ml-azure-experiments",
                "collegefunctions",
                "util-tools",
                "task manager",
                "dio-lab-open-source",
                "Util-Tools-Disord-Bot",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            name_overrides: [
                ("big-data-hackathon-forecast-2025", "Previsão forecast"),
                (
                    "azure-ml-previsao-vendas-regressao-linear",
                    "Previsão de vendas com regressão linear e Azure ML",
                ),
                ("chatbot-previsao-ia", "Chatbot de previsão"),
                ("assistente-virtual", "Assistente virtual"),
            ]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
            description_overrides: HashMap::new(),
            featured: vec![
                ("senti-pred".to_string(), None),
                ("Chatbot de previsão".to_string(), None),
                ("assistente-virtual".to_string(), None),
            ]
            .into_iter()
            .collect(),
            tech_overrides: [
                (
                    "senti-pred",
                    vec![
                        "Python",
                        "Scikit-Learn",
                        "Pandas",
                        "NumPy",
                        "Transformers",
                        "Hugging Face",
                    ],
                ),
                (
                    "chatbot-previsao-ia",
                    vec!["Python", "Transformers", "Hugging Face", "Flask", "Scikit-Learn"],
                ),
                (
                    "assistente-virtual",
                    vec!["Python", "Transformers", "Hugging Face", "Keras", "Pandas", "NumPy"],
                ),
                (
                    "previsao-forecast",
                    vec!["Python", "Prophet", "Statsmodels", "Pandas", "NumPy"],
                ),
            ]
            .iter()
            .map(|(k, v)| (k.to_string(), v.iter().map(|s| s.to_string()).collect()))
            .collect(),
        })
    }

    pub fn is_excluded(&self, key: &str) -> bool {
        self.excluded.contains(key)
    }

    pub fn display_name(&self, key: &str) -> Option<&str> {
        self.name_overrides.get(key).map(String::as_str)
    }

    pub fn description(&self, key: &str) -> Option<&str> {
        self.description_overrides.get(key).map(String::as_str)
    }

    pub fn technologies(&self, key: &str) -> Option<&[String]> {
        self.tech_overrides.get(key).map(Vec::as_slice)
    }

    /// Featured lookup for a project known by its normalized display name
    /// and slug. `Some(None)` means featured without a rename,
    /// `Some(Some(_))` featured with a display-name substitution. Both keys
    /// and (non-empty) values of the table match.
    pub fn featured_entry(&self, name_key: &str, slug: &str) -> Option<Option<&str>> {
        for (key, substitution) in &self.featured {
            if key == name_key || key == slug {
                return Some(substitution.as_deref());
            }
            if let Some(value) = substitution {
                let value_key = normalize_name(value);
                if value_key == name_key || value_key == slug {
                    return Some(Some(value.as_str()));
                }
            }
        }
        None
    }
}
