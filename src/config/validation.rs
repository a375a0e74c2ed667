use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings.
///
/// The API domain cannot be empty and must look like a URL or domain name.
/// A log file path, when provided, must be non-empty and its parent
/// directory must exist or be creatable.
pub fn validate_config(api_domain: &str, log_file_path: &Option<String>) -> Result<(), AppError> {
    if api_domain.is_empty() {
        return Err(AppError::config_error("API domain cannot be empty"));
    }

    if !api_domain.starts_with("http://") && !api_domain.starts_with("https://") {
        // Without a protocol it should at least look like a domain
        if !api_domain.contains('.') && !api_domain.starts_with("localhost") {
            return Err(AppError::config_error(
                "API domain must be a valid URL or domain name",
            ));
        }
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.exists()
        {
            // Try to create the directory to validate the path
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_domain_rejected() {
        assert!(validate_config("", &None).is_err());
    }

    #[test]
    fn test_valid_domains_accepted() {
        for domain in [
            "https://api.example.com",
            "http://localhost:4000",
            "api.example.com",
            "localhost",
        ] {
            assert!(validate_config(domain, &None).is_ok(), "{domain} rejected");
        }
    }

    #[test]
    fn test_bare_word_domain_rejected() {
        assert!(validate_config("notadomain", &None).is_err());
    }

    #[test]
    fn test_empty_log_path_rejected() {
        assert!(validate_config("localhost", &Some(String::new())).is_err());
    }
}
