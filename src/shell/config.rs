// Runtime configuration read from the environment.
//
// Only diagnostics are configurable. The interactive surface takes no flags.

pub const DEFAULT_LOG_FILTER: &str = "warn";

const LOG_FILTER_VAR: &str = "EVENT_SCHEDULER_LOG";
const FALLBACK_LOG_FILTER_VAR: &str = "RUST_LOG";
const LOG_ANSI_VAR: &str = "EVENT_SCHEDULER_LOG_ANSI";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_filter: String,
    pub log_ansi: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_ansi: false,
        }
    }
}

impl Config {
    /// Loads `.env` when present, then reads the process environment.
    /// A `.env` file that exists but cannot be read or parsed is an error.
    pub fn from_env() -> Result<Self, dotenvy::Error> {
        skip_missing_dotenv(dotenvy::dotenv())?;
        Ok(Self::from_lookup(|key| std::env::var(key).ok()))
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_filter = lookup(LOG_FILTER_VAR)
            .or_else(|| lookup(FALLBACK_LOG_FILTER_VAR))
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let log_ansi = lookup(LOG_ANSI_VAR)
            .map(|value| matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        Self {
            log_filter,
            log_ansi,
        }
    }
}

fn skip_missing_dotenv<T>(result: Result<T, dotenvy::Error>) -> Result<(), dotenvy::Error> {
    match result {
        Ok(_) => Ok(()),
        Err(error) if error.not_found() => Ok(()),
        Err(error) => Err(error),
    }
}
