use thiserror::Error;

/// Environment variable holding the database connection URL
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DATABASE_URL is not set (export it or add it to .env)")]
    MissingDatabaseUrl,
}

/// Resolves the database URL, preferring `explicit` over the process environment.
///
/// Blank values are treated as unset on both paths. `.env` is loaded by the binary.
pub fn database_url(explicit: Option<String>) -> Result<String, ConfigError> {
    match explicit {
        Some(url) => non_blank(url),
        None => std::env::var(DATABASE_URL_VAR)
            .map_err(|_| ConfigError::MissingDatabaseUrl)
            .and_then(non_blank),
    }
}

fn non_blank(url: String) -> Result<String, ConfigError> {
    if url.trim().is_empty() {
        Err(ConfigError::MissingDatabaseUrl)
    } else {
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_url_is_used() {
        let url = database_url(Some("sqlite::memory:".to_string())).unwrap();
        assert_eq!(url, "sqlite::memory:");
    }

    #[test]
    fn blank_explicit_url_is_missing() {
        for blank in ["", "   "] {
            let err = database_url(Some(blank.to_string())).unwrap_err();
            assert!(matches!(err, ConfigError::MissingDatabaseUrl));
        }
    }
}
