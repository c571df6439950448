use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::app::error::{AppError, Result};

/// The page sections, in display order. Navigation entries, anchor targets
/// and the active-section highlight all key off this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Certificates,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Certificates,
        SectionId::Contact,
    ];

    /// Label shown in the navigation bar.
    pub fn nav_label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Certificates => "Certificates",
            SectionId::Contact => "Contact",
        }
    }
}

/// What a preview dialog is showing. Projects and certificates get
/// different metadata rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKind {
    Project,
    Certificate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    pub tagline: String,
    pub about: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    /// Display value, digits plus an optional suffix ("40+", "98%").
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub group: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub summary: String,
    pub technology: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub title: String,
    pub issuer: String,
    pub year: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Where the contact form posts to.
    pub endpoint: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub owner: Owner,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
    pub contact: Contact,
}

const EMBEDDED_PORTFOLIO: &str = include_str!("../../../assets/portfolio.toml");

impl Portfolio {
    /// Load the portfolio document: a `portfolio.toml` next to the settings
    /// file wins, otherwise the embedded default is used.
    pub fn load() -> Self {
        match fs::read_to_string(Self::override_path()) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(portfolio) => portfolio,
                Err(e) => {
                    tracing::warn!("ignoring invalid portfolio override: {e}");
                    Self::embedded()
                }
            },
            Err(_) => Self::embedded(),
        }
    }

    pub fn embedded() -> Self {
        Self::parse(EMBEDDED_PORTFOLIO).expect("embedded portfolio.toml is valid")
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let portfolio: Portfolio =
            toml::from_str(contents).map_err(|e| AppError::Content(e.to_string()))?;
        if portfolio.contact.endpoint.trim().is_empty() {
            return Err(AppError::Content(
                "contact.endpoint must not be empty".to_string(),
            ));
        }
        Ok(portfolio)
    }

    pub fn override_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("foliodesk");
        path.push("portfolio.toml");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_portfolio_parses() {
        let portfolio = Portfolio::embedded();
        assert!(!portfolio.owner.name.is_empty());
        assert!(!portfolio.stats.is_empty());
        assert!(!portfolio.projects.is_empty());
        assert!(!portfolio.contact.endpoint.is_empty());
    }

    #[test]
    fn test_missing_endpoint_rejected() {
        let toml = r#"
            [owner]
            name = "A"
            tagline = "B"
            about = "C"

            [contact]
            endpoint = ""
            email = "a@b.co"
        "#;
        let err = Portfolio::parse(toml).unwrap_err();
        assert!(err.to_string().contains("contact.endpoint"));
    }

    #[test]
    fn test_optional_collections_default_empty() {
        let toml = r#"
            [owner]
            name = "A"
            tagline = "B"
            about = "C"

            [contact]
            endpoint = "https://example.test/submit"
            email = "a@b.co"
        "#;
        let portfolio = Portfolio::parse(toml).unwrap();
        assert!(portfolio.projects.is_empty());
        assert!(portfolio.stats.is_empty());
    }

    #[test]
    fn test_section_order_is_stable() {
        assert_eq!(SectionId::ALL[0], SectionId::Home);
        assert_eq!(SectionId::ALL[5], SectionId::Contact);
        assert_eq!(SectionId::Projects.nav_label(), "Projects");
    }
}
