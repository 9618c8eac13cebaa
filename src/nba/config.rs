use std::time::Duration;

pub const NBA_STATS_BASE_URL: &str = "https://stats.nba.com/stats";
pub const NBA_LIVE_BASE_URL: &str = "https://cdn.nba.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
// stats.nba.com drops connections from clients it doesn't recognise
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:72.0) Gecko/20100101 Firefox/72.0";

#[derive(Debug, Clone)]
pub struct Config {
    pub stats_base_url: String,
    pub live_base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Config {
    pub fn new(stats_base_url: &str, live_base_url: &str, timeout_secs: u64, user_agent: &str) -> Self {
        Config {
            stats_base_url: stats_base_url.trim_end_matches('/').to_string(),
            live_base_url: live_base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(timeout_secs),
            user_agent: user_agent.to_string(),
        }
    }

    /// Points both providers at one host, as the mock servers in tests do.
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Config::new(&format!("{}/stats", base), base, 5, DEFAULT_USER_AGENT)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(NBA_STATS_BASE_URL, NBA_LIVE_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let cfg = Config::new("http://localhost:9000/stats/", "http://localhost:9000/", 3, "ua");
        assert_eq!(cfg.stats_base_url, "http://localhost:9000/stats");
        assert_eq!(cfg.live_base_url, "http://localhost:9000");
        assert_eq!(cfg.timeout, Duration::from_secs(3));
    }

    #[test]
    fn single_host_layout() {
        let cfg = Config::with_base_url("http://127.0.0.1:5000/");
        assert_eq!(cfg.stats_base_url, "http://127.0.0.1:5000/stats");
        assert_eq!(cfg.live_base_url, "http://127.0.0.1:5000");
    }
}
