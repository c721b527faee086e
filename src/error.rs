use thiserror::Error;

#[derive(Error, Debug)]
pub enum TicketHubError {
    #[error("ticket '{0}' not found")]
    TicketNotFound(String),

    #[error("invalid status '{0}'")]
    InvalidStatus(String),

    #[error("invalid priority '{0}'")]
    InvalidPriority(String),

    #[error("invalid storage key '{0}'")]
    InvalidStorageKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to persist storage slot: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("TUI error: {0}")]
    Tui(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, TicketHubError>;
