use thiserror::Error;

/// Errors that stop a run (or a single driver step).
///
/// Field extraction never produces one of these; a missing or malformed
/// field is represented by that field's absent value instead.
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to start WebDriver session at {url}: {source}")]
    Session {
        url: String,
        #[source]
        source: fantoccini::error::NewSessionError,
    },

    #[error("WebDriver command failed while {context} {url}: {source}")]
    Command {
        context: &'static str,
        url: String,
        #[source]
        source: fantoccini::error::CmdError,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("{0} already exists. use \"-o a\" to append. use \"-o w\" to overwrite.")]
    OutputExists(String),

    #[error("invalid range: begin {begin} is past end {end}")]
    InvalidRange { begin: usize, end: usize },
}

impl HarvestError {
    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, HarvestError>;
