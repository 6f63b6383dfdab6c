use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Synthetic id base for GitHub-derived projects. Ids are positional and not
/// stable across fetches.
pub const DERIVED_ID_BASE: u32 = 100_000;

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Category tag applied to every GitHub-derived project. Hand-authored
/// entries may carry any category, or none.
pub const AI_ML_CATEGORY: &str = "ai-ml";

/// A display-ready portfolio project, either hand-authored or derived from a
/// GitHub repository. Serialized in camelCase for the consuming frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub name: String,
    /// Normalized lookup key. For derived projects this is the normalized
    /// raw repository name, which keeps override tables keyed by repository
    /// name working after the display name has been replaced.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub slug: String,
    pub image: String,
    pub date: String,
    pub tech: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub description: String,
    #[serde(default)]
    pub demo_video: String,
    pub github: String,
    #[serde(default)]
    pub live: String,
}

/// Loads the hand-authored project list from a JSON file.
pub fn load_static_projects<P: AsRef<Path>>(path: P) -> Result<Vec<Project>> {
    let raw = std::fs::read_to_string(path)?;
    let projects: Vec<Project> = serde_json::from_str(&raw)?;
    Ok(projects)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let project = Project {
            id: 1,
            name: "Frecomu".to_string(),
            slug: String::new(),
            image: PLACEHOLDER_IMAGE.to_string(),
            date: "2025".to_string(),
            tech: vec!["React".to_string(), "TypeScript".to_string()],
            category: None,
            description: "Sistema de gerenciamento escolar".to_string(),
            demo_video: "https://example.com/demo1.mp4".to_string(),
            github: "https://github.com/test/frecomu".to_string(),
            live: String::new(),
        };

        let json = serde_json::to_string(&project).unwrap();
        assert!(json.contains("\"demoVideo\""));
        assert!(!json.contains("\"slug\""));
        assert!(!json.contains("\"category\""));
    }

    #[test]
    fn test_static_entry_parses_without_optional_fields() {
        let project: Project = serde_json::from_str(
            r#"{
                "id": 3,
                "name": "Task Manager",
                "image": "/placeholder.svg",
                "date": "2025",
                "tech": ["Flutter", "Firebase", "Dart"],
                "description": "Aplicativo de controle financeiro",
                "github": "https://github.com/test/task-manager"
            }"#,
        )
        .unwrap();

        assert_eq!(project.name, "Task Manager");
        assert!(project.slug.is_empty());
        assert!(project.category.is_none());
        assert!(project.demo_video.is_empty());
        assert!(project.live.is_empty());
    }
}
