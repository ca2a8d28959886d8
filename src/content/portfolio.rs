use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::content::resume::Role;
use crate::nav::SectionId;

const BUNDLED_FILE: &str = "portfolio.toml";

#[derive(Embed)]
#[folder = "assets/content/"]
struct ContentAssets;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse portfolio: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("bundled portfolio is missing")]
    MissingBundled,
    #[error("project id `{0}` is used more than once")]
    DuplicateProjectId(String),
    #[error("project `{0}` has an empty id")]
    EmptyProjectId(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub name: String,
    #[serde(default)]
    pub greeting: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub cv_path: Option<String>,
    #[serde(default)]
    pub colophon: String,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub contact: Vec<ContactLink>,
}

impl Portfolio {
    /// Load from an explicit path, then the user's config dir, then the
    /// bundled copy.
    pub fn load(path: Option<&Path>) -> Result<Self, ContentError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        let user_path = Self::user_path();
        if user_path.exists() {
            return Self::from_file(&user_path);
        }
        Self::bundled()
    }

    /// Like [`load`](Self::load), but a broken user file falls back to the
    /// bundled portfolio.
    pub fn load_or_bundled(path: Option<&Path>) -> Result<Self, ContentError> {
        match Self::load(path) {
            Ok(portfolio) => Ok(portfolio),
            Err(err) => {
                warn!(error = %err, "falling back to bundled portfolio");
                Self::bundled()
            }
        }
    }

    pub fn bundled() -> Result<Self, ContentError> {
        let file = ContentAssets::get(BUNDLED_FILE).ok_or(ContentError::MissingBundled)?;
        let content =
            std::str::from_utf8(file.data.as_ref()).map_err(|_| ContentError::MissingBundled)?;
        Self::parse(content)
    }

    pub fn from_file(path: &Path) -> Result<Self, ContentError> {
        let content = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let portfolio = Self::parse(&content)?;
        info!(path = %path.display(), projects = portfolio.projects.len(), "loaded portfolio");
        Ok(portfolio)
    }

    pub fn parse(content: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio = toml::from_str(content)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if project.id.trim().is_empty() {
                return Err(ContentError::EmptyProjectId(project.name.clone()));
            }
            if !seen.insert(project.id.as_str()) {
                return Err(ContentError::DuplicateProjectId(project.id.clone()));
            }
        }
        Ok(())
    }

    fn user_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("folio")
            .join(BUNDLED_FILE)
    }

    /// Sections with nothing to show are never mounted.
    pub fn has_content(&self, section: SectionId) -> bool {
        match section {
            SectionId::About => !self.about.is_empty(),
            SectionId::Projects => !self.projects.is_empty(),
            SectionId::Experience => !self.roles.is_empty(),
            SectionId::Contact => !self.contact.is_empty(),
        }
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_portfolio_parses() {
        let portfolio = Portfolio::bundled().unwrap();
        assert!(!portfolio.name.is_empty());
        assert!(portfolio.has_content(SectionId::About));
        assert!(portfolio.has_content(SectionId::Projects));
        assert!(portfolio.has_content(SectionId::Experience));
        assert!(portfolio.has_content(SectionId::Contact));
    }

    #[test]
    fn test_minimal_portfolio_has_no_sections() {
        let portfolio = Portfolio::parse(r#"name = "Someone""#).unwrap();
        assert!(!portfolio.has_content(SectionId::About));
        assert!(!portfolio.has_content(SectionId::Contact));
        assert!(portfolio.project("x").is_none());
    }

    #[test]
    fn test_duplicate_project_ids_rejected() {
        let toml_str = r#"
name = "Someone"

[[projects]]
id = "a"
name = "First"

[[projects]]
id = "a"
name = "Second"
"#;
        let err = Portfolio::parse(toml_str).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateProjectId(id) if id == "a"));
    }

    #[test]
    fn test_empty_project_id_rejected() {
        let toml_str = r#"
name = "Someone"

[[projects]]
id = " "
name = "Nameless"
"#;
        assert!(matches!(
            Portfolio::parse(toml_str),
            Err(ContentError::EmptyProjectId(_))
        ));
    }

    #[test]
    fn test_load_from_file_and_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.toml");
        fs::write(&good, "name = \"From File\"\nabout = [\"hello\"]\n").unwrap();
        let portfolio = Portfolio::load(Some(&good)).unwrap();
        assert_eq!(portfolio.name, "From File");

        let bad = dir.path().join("bad.toml");
        fs::write(&bad, "name = [").unwrap();
        assert!(matches!(
            Portfolio::load(Some(&bad)),
            Err(ContentError::Parse(_))
        ));
        let fallback = Portfolio::load_or_bundled(Some(&bad)).unwrap();
        assert_eq!(fallback, Portfolio::bundled().unwrap());

        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            Portfolio::load(Some(&missing)),
            Err(ContentError::Io { .. })
        ));
    }
}
