#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::app::navigation::{self, NavLink};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CMS_URL: &str = "http://localhost:1337";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CONTACT_STORE: &str = "data/contacts.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CmsSettings {
    pub base_url: String,
    pub token: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactSettings {
    pub store_path: String,
    pub in_memory: bool,
}

/// Fully resolved runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub cms: CmsSettings,
    pub server: ServerSettings,
    pub contact: ContactSettings,
    pub navigation: Vec<NavLink>,
    pub log_format: LogFormat,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            cms: CmsSettings {
                base_url: DEFAULT_CMS_URL.to_string(),
                token: None,
            },
            server: ServerSettings {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            },
            contact: ContactSettings {
                store_path: DEFAULT_CONTACT_STORE.to_string(),
                in_memory: false,
            },
            navigation: navigation::default_menu(),
            log_format: LogFormat::default(),
        }
    }
}

impl ConfigProvider for SiteConfig {
    fn cms_base_url(&self) -> &str {
        &self.cms.base_url
    }

    fn cms_token(&self) -> Option<&str> {
        self.cms.token.as_deref().filter(|t| !t.is_empty())
    }

    fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    fn contact_store_path(&self) -> &str {
        &self.contact.store_path
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("cms.base_url", &self.cms.base_url)?;
        validation::validate_non_empty_string("server.host", &self.server.host)?;
        validation::validate_range("server.port", self.server.port, 1, u16::MAX)?;
        if !self.contact.in_memory {
            validation::validate_path("contact.store_path", &self.contact.store_path)?;
        }
        for link in &self.navigation {
            validation::validate_non_empty_string("navigation.links.id", &link.id)?;
        }
        Ok(())
    }
}
