/// Order hub configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment (a `.env` file is
/// loaded first by [`setup_environment`](crate::setup_environment)):
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | SEED_PATH | (built-in seed) | JSON file with the initial chefs |
/// | LOG_LEVEL | info | tracing max level |
/// | LOG_DIR | (stdout) | directory for daily rolling log files |
/// | ENVIRONMENT | development | runtime environment name |
/// | EVENT_CHANNEL_CAPACITY | 1024 | buffered state updates per subscriber |
/// | DEFAULT_MAX_PREORDERS | 10 | planned meal capacity when none is given |
///
/// # Example
///
/// ```ignore
/// SEED_PATH=./chefs.json LOG_LEVEL=debug cargo run -p order-hub
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Seed dataset override
    pub seed_path: Option<String>,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// development | staging | production
    pub environment: String,
    pub event_channel_capacity: usize,
    pub default_max_preorders: u32,
}

pub const DEFAULT_EVENT_CHANNEL_CAPACITY: usize = 1024;
pub const DEFAULT_MAX_PREORDERS: u32 = 10;

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_path: None,
            log_level: "info".into(),
            log_dir: None,
            environment: "development".into(),
            event_channel_capacity: DEFAULT_EVENT_CHANNEL_CAPACITY,
            default_max_preorders: DEFAULT_MAX_PREORDERS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self {
            seed_path: std::env::var("SEED_PATH").ok().filter(|p| !p.trim().is_empty()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|p| !p.trim().is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            event_channel_capacity: std::env::var("EVENT_CHANNEL_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&c: &usize| c > 0)
                .unwrap_or(DEFAULT_EVENT_CHANNEL_CAPACITY),
            default_max_preorders: std::env::var("DEFAULT_MAX_PREORDERS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&n: &u32| n > 0)
                .unwrap_or(DEFAULT_MAX_PREORDERS),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
