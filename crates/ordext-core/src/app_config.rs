use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Optional path to a YAML vendor registry; absent means the
    /// compiled-in defaults are used.
    pub vendors_path: Option<PathBuf>,
    /// Directory of `.eml`-style message fixtures for the file source.
    pub mailbox_dir: PathBuf,
    /// Cap on messages fetched and parsed per batch run.
    pub max_messages_per_run: usize,
    /// Account scope for order-store upserts.
    pub account_id: String,
}
