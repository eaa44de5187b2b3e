use crate::app::navigation::NavLink;
use crate::config::{LogFormat, SiteConfig};
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid"));

/// Site configuration file. Every section is optional; anything left out
/// keeps its built-in default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub cms: Option<CmsSection>,
    pub server: Option<ServerSection>,
    pub contact: Option<ContactSection>,
    pub navigation: Option<NavigationSection>,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CmsSection {
    pub base_url: Option<String>,
    pub token: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactSection {
    pub store_path: Option<String>,
    pub in_memory: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavigationSection {
    #[serde(default)]
    pub links: Vec<NavLink>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub format: Option<LogFormat>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| SiteError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. Unknown variables are
    /// left as written so validation can point at them.
    fn substitute_env_vars(content: &str) -> String {
        ENV_PLACEHOLDER
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Overlays the values present in this file onto `config`.
    pub fn apply_to(&self, config: &mut SiteConfig) {
        if let Some(cms) = &self.cms {
            if let Some(base_url) = &cms.base_url {
                config.cms.base_url = base_url.clone();
            }
            if let Some(token) = &cms.token {
                config.cms.token = Some(token.clone());
            }
        }

        if let Some(server) = &self.server {
            if let Some(host) = &server.host {
                config.server.host = host.clone();
            }
            if let Some(port) = server.port {
                config.server.port = port;
            }
        }

        if let Some(contact) = &self.contact {
            if let Some(store_path) = &contact.store_path {
                config.contact.store_path = store_path.clone();
            }
            if let Some(in_memory) = contact.in_memory {
                config.contact.in_memory = in_memory;
            }
        }

        if let Some(navigation) = &self.navigation {
            if !navigation.links.is_empty() {
                config.navigation = navigation.links.clone();
            }
        }

        if let Some(format) = self.logging.as_ref().and_then(|l| l.format) {
            config.log_format = format;
        }
    }

    pub fn into_site_config(self) -> SiteConfig {
        let mut config = SiteConfig::default();
        self.apply_to(&mut config);
        config
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.clone().into_site_config().validate()
    }
}
