use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    #[error("Failed to parse API response: {0}")]
    ApiParse(#[from] serde_json::Error),

    // Specific HTTP status code errors
    #[error("API request not found (404): {url}")]
    ApiNotFound { url: String },

    #[error("API server error ({status}): {message} (URL: {url})")]
    ApiServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API client error ({status}): {message} (URL: {url})")]
    ApiClientError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API rate limit exceeded (429): {message} (URL: {url})")]
    ApiRateLimit { message: String, url: String },

    #[error("API service unavailable ({status}): {message} (URL: {url})")]
    ApiServiceUnavailable {
        status: u16,
        message: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Data parsing and validation errors
    #[error("API returned malformed JSON: {message} (URL: {url})")]
    ApiMalformedJson { message: String, url: String },

    #[error("API returned unexpected data structure: {message} (URL: {url})")]
    ApiUnexpectedStructure { message: String, url: String },

    #[error("API returned empty or missing data: {message} (URL: {url})")]
    ApiNoData { message: String, url: String },

    // Backend envelope rejected the request with its own message
    #[error("{0}")]
    BackendRejected(String),

    // Business-level lookups
    #[error("Tournament not found: {tournament_id}")]
    TournamentNotFound { tournament_id: i64 },

    #[error("Match not found: match_id={match_id}, tournament={tournament_id}")]
    MatchNotFound { match_id: i64, tournament_id: i64 },

    // Finalize preconditions; these are raised before any network call
    #[error("Cannot finalize: teams are not assigned yet")]
    TeamsNotAssigned,

    #[error("Cannot finalize: invalid score - {0}")]
    InvalidScore(String),

    #[error("Cannot finalize: a drawn result is not allowed in single elimination")]
    DrawNotAllowed,

    #[error("Cannot finalize: match {0} has already been played")]
    MatchAlreadyPlayed(i64),

    #[error("Tournament already has results: {0}")]
    TournamentHasResults(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),

    #[error("{0}")]
    Custom(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an API not found error
    pub fn api_not_found(url: impl Into<String>) -> Self {
        Self::ApiNotFound { url: url.into() }
    }

    /// Create an API server error (5xx status codes)
    pub fn api_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API client error (4xx status codes except 404 and 429)
    pub fn api_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API rate limit error
    pub fn api_rate_limit(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiRateLimit {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API service unavailable error
    pub fn api_service_unavailable(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServiceUnavailable {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an unexpected structure error
    pub fn api_unexpected_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiUnexpectedStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an empty/missing data error
    pub fn api_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an invalid score error with context
    pub fn invalid_score(msg: impl Into<String>) -> Self {
        Self::InvalidScore(msg.into())
    }

    /// True for errors raised by finalize precondition checks, i.e. errors
    /// the user can fix by changing their input.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::TeamsNotAssigned
                | Self::InvalidScore(_)
                | Self::DrawNotAllowed
                | Self::MatchAlreadyPlayed(_)
        )
    }

    /// A single human-readable message suitable for surfacing at the call
    /// site. Backend-provided messages are passed through verbatim.
    pub fn user_message(&self) -> String {
        match self {
            Self::BackendRejected(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_classification() {
        assert!(AppError::DrawNotAllowed.is_validation_error());
        assert!(AppError::TeamsNotAssigned.is_validation_error());
        assert!(AppError::MatchAlreadyPlayed(7).is_validation_error());
        assert!(AppError::invalid_score("negative").is_validation_error());
        assert!(!AppError::api_not_found("http://x").is_validation_error());
        assert!(!AppError::BackendRejected("nope".into()).is_validation_error());
    }

    #[test]
    fn test_user_message_passes_backend_message_through() {
        let err = AppError::BackendRejected("team roster incomplete".into());
        assert_eq!(err.user_message(), "team roster incomplete");

        let err = AppError::DrawNotAllowed;
        assert!(err.user_message().contains("drawn result"));
    }
}
