use std::env;
use std::io;

use anyhow::Result;
use clap::{CommandFactory, ErrorKind, Parser, Subcommand};
use log::LevelFilter;

use nbastatline::nba::commands;
use nbastatline::nba::config::{Config, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, NBA_LIVE_BASE_URL, NBA_STATS_BASE_URL};
use nbastatline::nba::output::{emit, OutputFormat};
use nbastatline::nba::params::{Season, SeasonParseError, SeasonType};
use nbastatline::StatsClient;

/// NBA player lookups, printed as JSON for the league server
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct NBACli {
    #[clap(subcommand)]
    cmd: Commands,

    /// Output format
    #[clap(long, global = true, arg_enum, default_value = "json")]
    format: OutputFormat,

    #[clap(long, global = true, env = "NBA_STATS_BASE_URL", default_value_t = NBA_STATS_BASE_URL.to_string())]
    stats_base_url: String,

    #[clap(long, global = true, env = "NBA_LIVE_BASE_URL", default_value_t = NBA_LIVE_BASE_URL.to_string())]
    live_base_url: String,

    /// Request timeout in seconds
    #[clap(long, global = true, env = "NBA_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    #[clap(long, global = true, env = "NBA_USER_AGENT", default_value_t = DEFAULT_USER_AGENT.to_string(), hide_default_value = true)]
    user_agent: String,

    /// Log to stderr: -v info, -vv debug, -vvv trace. RUST_LOG overrides.
    #[clap(short, long, global = true, parse(from_occurrences))]
    verbose: u64,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Stat line for a player in today's games, live or final
    LiveStats {
        #[clap(required = true)]
        name: Vec<String>,
    },
    /// Every game a player logged in a season
    GameLog {
        /// Player name, optionally followed by the season (LeBron James 2023-24)
        #[clap(required = true)]
        name: Vec<String>,

        #[clap(short, long)]
        season: Option<Season>,

        #[clap(long, default_value = "regular")]
        season_type: SeasonType,
    },
    /// Per-game career averages for the regular season
    CareerStats {
        #[clap(required = true)]
        name: Vec<String>,
    },
    /// Biographical info for a player
    CommonInfo {
        #[clap(required = true)]
        name: Vec<String>,
    },
    /// Today's games with scores by period
    Scoreboard,
    /// Search players by partial name
    Lookup {
        #[clap(required = true)]
        fragment: Vec<String>,
    },
}

fn log_level(verbose: u64) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logger(verbose: u64) {
    let mut builder = pretty_env_logger::formatted_builder();
    match env::var("RUST_LOG") {
        Ok(filters) => {
            builder.parse_filters(&filters);
        }
        Err(_) => {
            builder.filter_level(log_level(verbose));
        }
    }
    builder.init();
}

impl NBACli {
    fn config(&self) -> Config {
        Config::new(&self.stats_base_url, &self.live_base_url, self.timeout, &self.user_agent)
    }
}

fn usage_error(message: &str) -> ! {
    let mut cmd = NBACli::command();
    cmd.error(ErrorKind::InvalidValue, message).exit()
}

fn join_words(words: &[String]) -> Option<String> {
    let joined = words
        .iter()
        .flat_map(|w| w.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ");
    if joined.is_empty() { None } else { Some(joined) }
}

fn player_name(words: &[String]) -> String {
    match join_words(words) {
        Some(name) => name,
        None => usage_error("player name must not be empty"),
    }
}

/// `game-log LeBron James 2023-24`: the trailing word is the season when it
/// has the season shape and something precedes it.
fn split_trailing_season(words: &[String]) -> (&[String], Option<&str>) {
    match words.split_last() {
        Some((last, rest)) if !rest.is_empty() && Season::looks_like(last.trim()) => (rest, Some(last.trim())),
        _ => (words, None),
    }
}

/// Splits the season off a `game-log` invocation. An explicit `--season`
/// wins; otherwise a trailing season-shaped word must be a valid season.
fn game_log_season(words: &[String], explicit: Option<Season>) -> std::result::Result<(&[String], Season), SeasonParseError> {
    if let Some(season) = explicit {
        return Ok((words, season));
    }
    match split_trailing_season(words) {
        (rest, Some(raw)) => Ok((rest, raw.parse::<Season>()?)),
        (rest, None) => Ok((rest, Season::default())),
    }
}

fn main() -> Result<()> {
    let args = NBACli::parse();
    init_logger(args.verbose);

    let client = StatsClient::new(args.config());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.cmd {
        Commands::LiveStats { name } => {
            let name = player_name(&name);
            emit(&mut out, &commands::live_stats(&client, &name), args.format)
        }
        Commands::GameLog { name, season, season_type } => {
            let (words, season) = game_log_season(&name, season).unwrap_or_else(|e| usage_error(&e.to_string()));
            let name = player_name(words);
            emit(&mut out, &commands::game_log(&client, &name, season, season_type), args.format)
        }
        Commands::CareerStats { name } => {
            let name = player_name(&name);
            emit(&mut out, &commands::career_stats(&client, &name), args.format)
        }
        Commands::CommonInfo { name } => {
            let name = player_name(&name);
            emit(&mut out, &commands::common_info(&client, &name), args.format)
        }
        Commands::Scoreboard => emit(&mut out, &commands::scoreboard(&client), args.format),
        Commands::Lookup { fragment } => {
            let fragment = player_name(&fragment);
            emit(&mut out, &commands::lookup(&client, &fragment), args.format)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &[&str]) -> Vec<String> {
        s.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn trailing_season_is_split_off() {
        let w = words(&["LeBron", "James", "2022-23"]);
        let (rest, season) = split_trailing_season(&w);
        assert_eq!(join_words(rest).unwrap(), "LeBron James");
        assert_eq!(season, Some("2022-23"));
    }

    #[test]
    fn name_only_keeps_every_word() {
        let w = words(&["Gary", "Payton", "II"]);
        let (rest, season) = split_trailing_season(&w);
        assert_eq!(rest.len(), 3);
        assert_eq!(season, None);
    }

    #[test]
    fn lone_season_shaped_word_stays_a_name() {
        let w = words(&["2023-24"]);
        let (rest, season) = split_trailing_season(&w);
        assert_eq!(rest.len(), 1);
        assert_eq!(season, None);
    }

    #[test]
    fn quoted_names_are_normalized() {
        assert_eq!(join_words(&words(&["  Stephen   Curry "])).unwrap(), "Stephen Curry");
        assert_eq!(join_words(&words(&["Stephen", "Curry"])).unwrap(), "Stephen Curry");
        assert!(join_words(&words(&["   "])).is_none());
    }

    #[test]
    fn cli_parses_game_log_flags() {
        let args = NBACli::try_parse_from(vec![
            "nbastatline", "game-log", "LeBron", "James", "--season", "2022-23", "--season-type", "playoffs", "--format", "table",
        ])
        .unwrap();
        assert_eq!(args.format, OutputFormat::Table);
        match args.cmd {
            Commands::GameLog { name, season, season_type } => {
                assert_eq!(name, words(&["LeBron", "James"]));
                assert_eq!(season.unwrap().as_str(), "2022-23");
                assert_eq!(season_type, SeasonType::Playoffs);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn cli_rejects_bad_explicit_season() {
        assert!(NBACli::try_parse_from(vec!["nbastatline", "game-log", "LeBron", "James", "--season", "2022-24"]).is_err());
    }

    #[test]
    fn cli_command_is_well_formed() {
        NBACli::command().debug_assert();
    }

    #[test]
    fn trailing_season_must_be_valid() {
        let w = words(&["LeBron", "James", "2023-25"]);
        let err = game_log_season(&w, None).unwrap_err();
        assert_eq!(err, SeasonParseError("2023-25".to_string()));

        let w2 = words(&["LeBron", "James", "2023-24"]);
        let (rest, season) = game_log_season(&w2, None).unwrap();
        assert_eq!(join_words(rest).unwrap(), "LeBron James");
        assert_eq!(season.as_str(), "2023-24");
    }

    #[test]
    fn explicit_season_keeps_trailing_words_in_the_name() {
        let explicit: Season = "2019-20".parse().unwrap();
        let w = words(&["LeBron", "James", "2023-25"]);
        let (rest, season) = game_log_season(&w, Some(explicit)).unwrap();
        assert_eq!(rest.len(), 3);
        assert_eq!(season.as_str(), "2019-20");
    }

    #[test]
    fn missing_season_defaults_to_current() {
        let (_, season) = game_log_season(&words(&["LeBron", "James"]), None).unwrap();
        assert_eq!(season, Season::default());
    }

    #[test]
    fn verbosity_raises_log_level() {
        assert_eq!(log_level(0), LevelFilter::Warn);
        assert_eq!(log_level(1), LevelFilter::Info);
        assert_eq!(log_level(2), LevelFilter::Debug);
        assert_eq!(log_level(3), LevelFilter::Trace);
        assert_eq!(log_level(7), LevelFilter::Trace);

        let args = NBACli::try_parse_from(vec!["nbastatline", "-vv", "scoreboard"]).unwrap();
        assert_eq!(log_level(args.verbose), LevelFilter::Debug);
        let args = NBACli::try_parse_from(vec!["nbastatline", "scoreboard", "-v"]).unwrap();
        assert_eq!(log_level(args.verbose), LevelFilter::Info);
    }

    // the only test that touches these variables, since the process env is shared
    #[test]
    fn env_vars_feed_config_and_flags_override_them() {
        env::set_var("NBA_STATS_BASE_URL", "http://stats.local/stats/");
        env::set_var("NBA_LIVE_BASE_URL", "http://live.local/");
        env::set_var("NBA_TIMEOUT_SECS", "7");
        env::set_var("NBA_USER_AGENT", "nbastatline-test");

        let from_env = NBACli::try_parse_from(vec!["nbastatline", "scoreboard"]).map(|a| a.config());
        let from_flags = NBACli::try_parse_from(vec![
            "nbastatline", "scoreboard", "--stats-base-url", "http://flag.local/stats", "--timeout", "2",
        ])
        .map(|a| a.config());

        env::remove_var("NBA_STATS_BASE_URL");
        env::remove_var("NBA_LIVE_BASE_URL");
        env::remove_var("NBA_TIMEOUT_SECS");
        env::remove_var("NBA_USER_AGENT");

        let cfg = from_env.unwrap();
        assert_eq!(cfg.stats_base_url, "http://stats.local/stats");
        assert_eq!(cfg.live_base_url, "http://live.local");
        assert_eq!(cfg.timeout, std::time::Duration::from_secs(7));
        assert_eq!(cfg.user_agent, "nbastatline-test");

        let cfg = from_flags.unwrap();
        assert_eq!(cfg.stats_base_url, "http://flag.local/stats");
        assert_eq!(cfg.live_base_url, "http://live.local");
        assert_eq!(cfg.timeout, std::time::Duration::from_secs(2));
    }
}
