//! Site content configuration.
//!
//! Page text (owner, contact address, stats, skills, projects) is read from a
//! JSON document embedded in `index.html`:
//!
//! ```html
//! <script id="folio-config" type="application/json">{ "owner": "..." }</script>
//! ```
//!
//! Every field has a default, so a partial document only overrides what it
//! names. A missing or malformed document falls back to [`SiteConfig::default`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// DOM id of the embedded JSON config.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config element #folio-config not found")]
    Missing,
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("contact_email {0:?} is not an email address")]
    InvalidContactEmail(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub owner: String,
    pub title: String,
    pub tagline: String,
    pub contact_email: String,
    pub github_url: Option<String>,
    pub location: Option<String>,
    pub about: Vec<String>,
    pub stats: Vec<Stat>,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: "Alex Morgan".to_owned(),
            title: "Hi, I'm Alex".to_owned(),
            tagline: "Software engineer building fast, friendly web experiences".to_owned(),
            contact_email: "hello@example.com".to_owned(),
            github_url: None,
            location: None,
            about: vec![
                "I build reliable software with a focus on clear interfaces and careful engineering.".to_owned(),
            ],
            stats: vec![
                Stat { value: "5+".to_owned(), label: "Years Experience".to_owned() },
                Stat { value: "30".to_owned(), label: "Projects Completed".to_owned() },
                Stat { value: "12".to_owned(), label: "Technologies".to_owned() },
            ],
            skills: vec![
                SkillCategory {
                    name: "Languages".to_owned(),
                    skills: vec!["Rust".to_owned(), "TypeScript".to_owned(), "SQL".to_owned()],
                },
                SkillCategory {
                    name: "Tools".to_owned(),
                    skills: vec!["Git".to_owned(), "Docker".to_owned(), "Linux".to_owned()],
                },
            ],
            projects: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON config.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let email = self.contact_email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(ConfigError::InvalidContactEmail(self.contact_email.clone())),
        }
    }

    /// Load the embedded page config, falling back to defaults.
    pub fn load() -> Self {
        match Self::read_embedded() {
            Ok(config) => config,
            Err(ConfigError::Missing) => {
                log::info!("no embedded site config, using defaults");
                Self::default()
            }
            Err(err) => {
                log::warn!("{err}; using default site config");
                Self::default()
            }
        }
    }

    fn read_embedded() -> Result<Self, ConfigError> {
        #[cfg(feature = "csr")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content())
                .ok_or(ConfigError::Missing)?;
            Self::from_json(&raw)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ConfigError::Missing)
        }
    }
}
