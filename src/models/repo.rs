use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A repository as returned by the GitHub listing API. Fields GitHub reports
/// as nullable are optional; unknown fields in the payload are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_optional_fields_absent() {
        let repo: Repository = serde_json::from_str(
            r#"{
                "name": "senti-pred",
                "html_url": "https://github.com/test/senti-pred",
                "created_at": "2024-03-15T12:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(repo.name, "senti-pred");
        assert!(repo.description.is_none());
        assert!(repo.language.is_none());
        assert!(repo.topics.is_none());
    }

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let repo: Repository = serde_json::from_str(
            r#"{
                "name": "ml-classifier",
                "description": null,
                "html_url": "https://github.com/test/ml-classifier",
                "language": "Python",
                "topics": ["machine-learning"],
                "created_at": "2024-01-01T00:00:00Z",
                "stargazers_count": 12,
                "fork": false
            }"#,
        )
        .unwrap();

        assert_eq!(repo.language.as_deref(), Some("Python"));
        assert_eq!(repo.topics.as_deref(), Some(&["machine-learning".to_string()][..]));
    }
}
