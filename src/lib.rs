//! Command-line helpers over the NBA stats API and live-data CDN: resolve a
//! player, make one pass-through request, reshape the answer into a flat
//! JSON record.

pub mod nba;

pub use nba::client::StatsClient;
pub use nba::config::Config;
pub use nba::error::{FetchError, StatsError};
