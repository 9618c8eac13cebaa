use log::{debug, info};

use crate::nba::client::StatsClient;
use crate::nba::endpoints::{CommonPlayerInfo, LoadResultSets, PlayerCareerStats, PlayerGameLog};
use crate::nba::error::{FetchContext, Result, StatsError};
use crate::nba::live_data::{fetch_boxscore, fetch_scoreboard, GameStatus};
use crate::nba::params::{PlayerID, Season, SeasonType};
use crate::nba::players::{fetch_directory, resolve_player, PlayerDirectory};
use crate::nba::reshape::{self, CareerReport, CommonInfoReport, GameLogReport, LivePlayerLine, LookupReport, ScoreboardReport};

/// Walks today's games in scoreboard order and returns the player's line
/// from the first boxscore that lists them.
pub fn live_stats(client: &StatsClient, name: &str) -> Result<LivePlayerLine> {
    let player = resolve_player(client, name)?;
    let scoreboard = fetch_scoreboard(client).fetching("scoreboard")?;
    info!("{} games on the {} scoreboard", scoreboard.games.len(), scoreboard.game_date);

    for game in &scoreboard.games {
        if game.status() == GameStatus::Scheduled {
            debug!("skipping {} ({}), not started", game.game_id, game.matchup());
            continue;
        }
        let box_score = fetch_boxscore(client, &game.game_id).fetching("boxscore")?;
        if let Some(line) = box_score.find_player(player.id) {
            return Ok(reshape::live_line(&player, game, line));
        }
    }
    Err(StatsError::NotPlaying(name.to_string()))
}

pub fn game_log(client: &StatsClient, name: &str, season: Season, season_type: SeasonType) -> Result<GameLogReport> {
    let player = resolve_player(client, name)?;
    let endpoint = PlayerGameLog {
        player_id: PlayerID(player.id),
        season: season.clone(),
        season_type,
    };
    let sets = endpoint.load_result_sets(client).fetching("game log")?;
    let set = sets.require("PlayerGameLog").fetching("game log")?;
    if set.is_empty() {
        return Err(StatsError::NoGameLogs { player: name.to_string(), season: season.as_str().to_string() });
    }
    let games = set
        .rows()
        .map(|row| reshape::game_log_entry(&row))
        .collect::<std::result::Result<Vec<_>, _>>()
        .fetching("game log")?;
    Ok(GameLogReport { player: name.to_string(), season: season.as_str().to_string(), games })
}

pub fn career_stats(client: &StatsClient, name: &str) -> Result<CareerReport> {
    let player = resolve_player(client, name)?;
    let endpoint = PlayerCareerStats {
        player_id: PlayerID(player.id),
        per_mode: Default::default(),
        league_id: Default::default(),
    };
    let sets = endpoint.load_result_sets(client).fetching("career stats")?;
    let set = sets.require("CareerTotalsRegularSeason").fetching("career stats")?;
    let row = set.first_row().ok_or_else(|| StatsError::NoCareerStats(name.to_string()))?;
    let career = reshape::career_line(&row).fetching("career stats")?;
    Ok(CareerReport { player: name.to_string(), career })
}

pub fn common_info(client: &StatsClient, name: &str) -> Result<CommonInfoReport> {
    let player = resolve_player(client, name)?;
    let endpoint = CommonPlayerInfo { player_id: PlayerID(player.id), league_id: Default::default() };
    let sets = endpoint.load_result_sets(client).fetching("player info")?;
    let set = sets.require("CommonPlayerInfo").fetching("player info")?;
    let row = set.first_row().ok_or_else(|| StatsError::PlayerNotFound(name.to_string()))?;
    reshape::common_info(name, &row).fetching("player info")
}

pub fn scoreboard(client: &StatsClient) -> Result<ScoreboardReport> {
    let scoreboard = fetch_scoreboard(client).fetching("scoreboard")?;
    Ok(ScoreboardReport {
        game_date: scoreboard.game_date.clone(),
        games: scoreboard.games.iter().map(reshape::scoreboard_line).collect(),
    })
}

/// Partial-name search over the full provider listing, topped up with any
/// bundled players the listing leaves out.
pub fn lookup(client: &StatsClient, fragment: &str) -> Result<LookupReport> {
    let bundled = PlayerDirectory::bundled().fetching("player list")?;
    let remote = fetch_directory(client).fetching("player list")?;
    let directory = bundled.merge(remote);
    let matches: Vec<_> = directory.search(fragment).into_iter().map(reshape::lookup_match).collect();
    debug!("{} players match '{}'", matches.len(), fragment);
    Ok(LookupReport { query: fragment.to_string(), matches })
}
