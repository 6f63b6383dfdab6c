pub mod tech;

pub use tech::infer_technologies;

/// Fixed display forms for acronyms the prettifier would otherwise
/// title-case. "ai" renders as the Portuguese "IA".
const ACRONYMS: &[(&str, &str)] = &[("ai", "IA"), ("ml", "ML"), ("nlp", "NLP"), ("cv", "CV")];

/// Canonicalizes a name into the lookup key used by the override tables and
/// for de-duplication: lowercase, runs of whitespace/underscores/hyphens
/// collapse to a single hyphen, anything else outside `[a-z0-9-]` is
/// stripped. Idempotent.
pub fn normalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.chars() {
        if c.is_whitespace() || c == '_' || c == '-' {
            pending_separator = !out.is_empty();
            continue;
        }
        for lc in c.to_lowercase() {
            if lc.is_ascii_alphanumeric() {
                if pending_separator {
                    out.push('-');
                    pending_separator = false;
                }
                out.push(lc);
            }
        }
    }

    out
}

/// Turns a raw repository name into a human-facing one: separator runs
/// become single spaces and each word is title-cased, with the fixed acronym
/// forms applied regardless of input casing.
pub fn prettify_name(name: &str) -> String {
    name.split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|w| !w.is_empty())
        .map(prettify_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn prettify_word(word: &str) -> String {
    let lower = word.to_lowercase();
    if let Some((_, fixed)) = ACRONYMS.iter().find(|(k, _)| *k == lower) {
        return fixed.to_string();
    }

    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_is_idempotent() {
        for s in [
            "Big Data Hackathon_2025",
            "big-data-hackathon-2025",
            "Chatbot-Previsao-IA",
            "ml-azure experiments",
            "  weird -- Name__here  ",
            "",
        ] {
            let once = normalize_name(s);
            assert_eq!(normalize_name(&once), once, "not idempotent for {:?}", s);
        }
    }

    #[test]
    fn test_normalize_is_case_and_punctuation_insensitive() {
        assert_eq!(
            normalize_name("Big Data Hackathon_2025"),
            normalize_name("big-data-hackathon-2025")
        );
        assert_eq!(normalize_name("ml-azure experiments"), "ml-azure-experiments");
        assert_eq!(normalize_name("Chatbot de previsão"), "chatbot-de-previso");
    }

    #[test]
    fn test_normalize_strips_leading_and_collapses_runs() {
        assert_eq!(normalize_name("  Task   Manager "), "task-manager");
        assert_eq!(normalize_name("a_-_b"), "a-b");
    }

    #[test]
    fn test_prettify_title_cases_words() {
        assert_eq!(prettify_name("task-manager"), "Task Manager");
        assert_eq!(prettify_name("senti_pred"), "Senti Pred");
    }

    #[test]
    fn test_prettify_applies_acronym_forms() {
        assert_eq!(prettify_name("chatbot-previsao-ai"), "Chatbot Previsao IA");
        assert_eq!(prettify_name("NLP-cv-demo"), "NLP CV Demo");
        assert_eq!(prettify_name("ML-pipeline"), "ML Pipeline");
    }
}
