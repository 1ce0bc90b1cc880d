use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GhIssuesError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Star mutation failed: {}", messages.join(", "))]
    MutationFailed { messages: Vec<String> },

    #[error("Nothing to continue: fetch the first page of a repository before loading more")]
    NothingToContinue,

    #[error("The last page did not return an end cursor; there is nothing more to load")]
    NoCursor,

    #[error("Invalid repository path '{0}': expected <organization>/<repository>")]
    InvalidPath(String),

    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(String),

    #[error("Failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write config file at {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error(
        "No GitHub token found. Set GITHUB_TOKEN env var or add token to ~/.config/gh-issues/config.toml"
    )]
    MissingToken,
}

pub type Result<T> = std::result::Result<T, GhIssuesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_failed_joins_messages() {
        let err = GhIssuesError::MutationFailed {
            messages: vec!["first".to_string(), "second".to_string()],
        };
        assert_eq!(err.to_string(), "Star mutation failed: first, second");
    }

    #[test]
    fn test_api_error_display() {
        let err = GhIssuesError::ApiError {
            status: 401,
            message: "Bad credentials".to_string(),
        };
        assert_eq!(err.to_string(), "API error (status 401): Bad credentials");
    }
}
