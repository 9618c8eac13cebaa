use std::time::Instant;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::nba::config::Config;
use crate::nba::error::FetchError;

pub struct StatsClient {
    agent: ureq::Agent,
    config: Config,
}

impl StatsClient {
    pub fn new(config: Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .build();
        StatsClient { agent, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// GET against stats.nba.com. The site stalls requests that don't look
    /// like they came from its own front end, hence the header set.
    pub fn get_stats_json(&self, url: &str) -> Result<Value, FetchError> {
        let req = self.agent.get(url)
            .set("User-Agent", &self.config.user_agent)
            .set("Accept", "application/json, text/plain, */*")
            .set("Accept-Language", "en-US,en;q=0.5")
            .set("x-nba-stats-origin", "stats")
            .set("x-nba-stats-token", "true")
            .set("Origin", "https://www.nba.com")
            .set("Referer", "https://stats.nba.com/")
            .set("Pragma", "no-cache")
            .set("Cache-Control", "no-cache");
        call_json(url, req)
    }

    /// GET against the live-data CDN, which needs no special headers.
    pub fn get_live_json(&self, url: &str) -> Result<Value, FetchError> {
        let req = self.agent.get(url)
            .set("User-Agent", &self.config.user_agent)
            .set("Accept", "application/json");
        call_json(url, req)
    }

    pub fn get_live<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let json = self.get_live_json(url)?;
        Ok(serde_json::from_value(json)?)
    }
}

fn call_json(url: &str, req: ureq::Request) -> Result<Value, FetchError> {
    debug!("GET {}", url);
    let started = Instant::now();
    let resp = match req.call() {
        Ok(resp) => resp,
        Err(ureq::Error::Status(status, _)) => {
            warn!("{} answered with HTTP {}", url, status);
            return Err(FetchError::Status { url: url.to_string(), status });
        }
        Err(ureq::Error::Transport(transport)) => {
            warn!("request to {} failed: {}", url, transport);
            return Err(FetchError::Transport { url: url.to_string(), source: Box::new(transport) });
        }
    };
    let json: Value = resp.into_json().map_err(|source| FetchError::Body { url: url.to_string(), source })?;
    debug!("{} took {:?}", url, started.elapsed());
    Ok(json)
}
