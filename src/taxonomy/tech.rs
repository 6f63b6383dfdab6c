/// Keyword → technology display name. Order matters: hits are collected in
/// table order for each scanned source, and the first occurrence wins during
/// de-duplication.
const TECH_KEYWORDS: &[(&str, &str)] = &[
    ("pytorch", "PyTorch"),
    ("tensorflow", "TensorFlow"),
    ("keras", "Keras"),
    ("scikit", "Scikit-Learn"),
    ("sklearn", "Scikit-Learn"),
    ("xgboost", "XGBoost"),
    ("opencv", "OpenCV"),
    ("transformers", "Transformers"),
    ("hugging face", "Hugging Face"),
    ("huggingface", "Hugging Face"),
    ("pandas", "Pandas"),
    ("numpy", "NumPy"),
    ("flask", "Flask"),
    ("streamlit", "Streamlit"),
    ("prophet", "Prophet"),
    ("statsmodels", "Statsmodels"),
];

/// Scans lowercased text for known technology keywords. The input is
/// expected to be lowercased already; hits come back in table order.
pub fn infer_technologies(text: &str) -> Vec<String> {
    TECH_KEYWORDS
        .iter()
        .filter(|(keyword, _)| text.contains(keyword))
        .map(|(_, name)| name.to_string())
        .collect()
}
