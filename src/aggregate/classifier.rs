use crate::models::Repository;

/// Domain terms, framework names and artifact nouns searched as substrings
/// of "{name} {description}".
const ML_KEYWORDS: &[&str] = &[
    "machine learning",
    "deep learning",
    "ml",
    "ai",
    "nlp",
    "vision",
    "cv",
    "pytorch",
    "tensorflow",
    "scikit-learn",
    "xgboost",
    "lstm",
    "transformer",
    "dataset",
    "notebook",
];

const ML_TOPICS: &[&str] = &["machine-learning", "deep-learning", "ai", "ml", "nlp", "cv"];

const ML_LANGUAGES: &[&str] = &["python", "jupyter notebook"];

/// Whether a repository looks AI/ML-relevant. OR of three signals: keyword
/// hits in name+description, primary language, and topic tags. Tolerates
/// every optional field being absent.
pub fn is_ml_related(repo: &Repository) -> bool {
    let text = format!(
        "{} {}",
        repo.name,
        repo.description.as_deref().unwrap_or_default()
    )
    .to_lowercase();
    let by_keyword = ML_KEYWORDS.iter().any(|k| text.contains(k));

    let by_language = repo
        .language
        .as_deref()
        .map(|l| ML_LANGUAGES.contains(&l.to_lowercase().as_str()))
        .unwrap_or(false);

    let by_topics = repo
        .topics
        .as_deref()
        .map(|topics| {
            topics
                .iter()
                .any(|t| ML_TOPICS.contains(&t.to_lowercase().as_str()))
        })
        .unwrap_or(false);

    by_keyword || by_language || by_topics
}
