use crate::config::toml_config::TomlConfig;
use crate::config::{LogFormat, SiteConfig};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

/// Command-line flags. Every flag is optional so that an explicitly given
/// value overrides the config file, which in turn overrides the defaults.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "storefront")]
#[command(about = "Server-rendered storefront backed by a headless CMS")]
pub struct CliConfig {
    #[arg(long, env = "STOREFRONT_CONFIG", help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "CMS_API_URL", help = "CMS base URL [default: http://localhost:1337]")]
    pub cms_url: Option<String>,

    #[arg(long, env = "CMS_API_TOKEN", hide_env_values = true)]
    pub cms_token: Option<String>,

    #[arg(long, env = "STOREFRONT_HOST")]
    pub host: Option<String>,

    #[arg(long, env = "STOREFRONT_PORT")]
    pub port: Option<u16>,

    #[arg(long, env = "CONTACT_STORE_PATH")]
    pub contact_store: Option<String>,

    #[arg(long, help = "Keep contact submissions in memory only")]
    pub contact_in_memory: bool,

    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn resolve(&self) -> Result<SiteConfig> {
        let mut config = SiteConfig::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading config file {}", path.display());
            TomlConfig::from_file(path)?.apply_to(&mut config);
        }

        if let Some(url) = &self.cms_url {
            config.cms.base_url = url.clone();
        }
        if let Some(token) = &self.cms_token {
            config.cms.token = Some(token.clone());
        }
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(path) = &self.contact_store {
            config.contact.store_path = path.clone();
        }
        if self.contact_in_memory {
            config.contact.in_memory = true;
        }
        if let Some(format) = self.log_format {
            config.log_format = format;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_flags_override_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[server]\nport = 4000\nhost = \"0.0.0.0\"\n")
            .unwrap();

        let cli = CliConfig::try_parse_from([
            "storefront",
            "--config",
            file.path().to_str().unwrap(),
            "--port",
            "5000",
            "--log-format",
            "json",
        ])
        .unwrap();

        let config = cli.resolve().unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_resolve_without_flags_uses_defaults() {
        let config = CliConfig::default().resolve().unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let cli = CliConfig {
            config: Some(PathBuf::from("/nonexistent/storefront.toml")),
            ..Default::default()
        };
        assert!(cli.resolve().is_err());
    }
}
