use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub max_body_size: usize,
    pub cache_ttl: Duration,
    pub intervals: IntervalsConfig,
}

#[derive(Debug, Clone)]
pub struct IntervalsConfig {
    pub athlete_id: Option<String>,
    pub api_key: Option<String>,
    pub base_url: String,
    /// Oldest date requested when pulling lifetime history.
    pub oldest: String,
}

impl Config {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let max_body_size_mb: usize = std::env::var("MAX_BODY_SIZE_MB")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);

        let cache_ttl_seconds = std::env::var("CACHE_TTL_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3600);

        Self {
            port,
            max_body_size: max_body_size_mb * 1024 * 1024,
            cache_ttl: Duration::from_secs(cache_ttl_seconds),
            intervals: IntervalsConfig::from_env(),
        }
    }
}

impl IntervalsConfig {
    fn from_env() -> Self {
        Self {
            athlete_id: non_empty_var("INTERVALS_ATHLETE_ID"),
            api_key: non_empty_var("INTERVALS_API_KEY"),
            base_url: non_empty_var("INTERVALS_BASE_URL")
                .unwrap_or_else(|| "https://intervals.icu".to_string()),
            oldest: non_empty_var("INTERVALS_OLDEST").unwrap_or_else(|| "2015-01-01".to_string()),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
