use crate::error::{Error, Result};
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub username: Option<String>,
    pub github_token: Option<String>,
    pub language: Language,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let username = env::var("GITHUB_USERNAME")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let github_token = env::var("GITHUB_TOKEN")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let language = match env::var("PORTFOLIO_LANG") {
            Ok(v) => v.parse()?,
            Err(_) => Language::default(),
        };

        Ok(Self {
            username,
            github_token,
            language,
        })
    }
}

/// Active UI language. Only affects the default description given to
/// repositories that carry none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Portuguese,
    English,
}

impl Language {
    pub fn default_project_description(&self) -> &'static str {
        match self {
            Language::Portuguese => "Projeto de IA/ML",
            Language::English => "AI/ML project",
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pt" | "pt-br" | "portuguese" => Ok(Language::Portuguese),
            "en" | "en-us" | "english" => Ok(Language::English),
            other => Err(Error::Config(format!("unknown language: {}", other))),
        }
    }
}
