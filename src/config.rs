//! Storage connection settings (environment variables + defaults).

/// Environment variable holding the database URL.
pub const DATABASE_URL_VAR: &str = "INVENTORY_DATABASE_URL";

/// Used when no URL is configured; creates the file on first run.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://inventory.db?mode=rwc";

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub url: String,
}

impl DatabaseConfig {
    #[cfg(test)]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Reads the URL from the environment, loading `.env` first if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let url = lookup(DATABASE_URL_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        Self { url }
    }

    /// A private, throwaway database.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::new("sqlite::memory:")
    }
}
