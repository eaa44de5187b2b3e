use crate::utils::error::{Result, SiteError};
use std::path::Path;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SiteError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    if path.ends_with(std::path::MAIN_SEPARATOR) || Path::new(path).is_dir() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path must name a file, not a directory".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("cms.base_url", "https://cms.example.com").is_ok());
        assert!(validate_url("cms.base_url", "http://localhost:1337").is_ok());
        assert!(validate_url("cms.base_url", "").is_err());
        assert!(validate_url("cms.base_url", "invalid-url").is_err());
        assert!(validate_url("cms.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("contact.store_path", "data/contacts.json").is_ok());
        assert!(validate_path("contact.store_path", "").is_err());
        assert!(validate_path("contact.store_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_path_rejects_directories() {
        let dir = tempfile::TempDir::new().unwrap();
        let as_dir = dir.path().to_string_lossy().to_string();
        assert!(validate_path("contact.store_path", &as_dir).is_err());

        let trailing = format!("{}{}", as_dir, std::path::MAIN_SEPARATOR);
        assert!(validate_path("contact.store_path", &trailing).is_err());

        let file = dir.path().join("contacts.json");
        assert!(validate_path("contact.store_path", &file.to_string_lossy()).is_ok());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("server.port", 3000u16, 1, u16::MAX).is_ok());
        assert!(validate_range("server.port", 0u16, 1, u16::MAX).is_err());
    }
}
