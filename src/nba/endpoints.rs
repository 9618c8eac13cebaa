use crate::nba::client::StatsClient;
use crate::nba::error::FetchError;
use crate::nba::params::*;
use crate::nba::resultsets::ResultSets;
use serde_json::Value;

pub struct CommonAllPlayers {
    pub league_id: LeagueID,
    pub season: Season,
    pub only_current_season: bool,
}

pub struct PlayerGameLog {
    pub player_id: PlayerID,
    pub season: Season,
    pub season_type: SeasonType,
}

pub struct PlayerCareerStats {
    pub player_id: PlayerID,
    pub per_mode: PerMode,
    pub league_id: LeagueID,
}

pub struct CommonPlayerInfo {
    pub player_id: PlayerID,
    pub league_id: LeagueID,
}

impl LoadResultSets for CommonAllPlayers {
}

impl LoadResultSets for PlayerGameLog {
}

impl LoadResultSets for PlayerCareerStats {
}

impl LoadResultSets for CommonPlayerInfo {
}

pub trait NBAEndpoint {
    /// Path and query relative to the stats base URL.
    fn endpoint_path(&self) -> String;

    fn send_request(&self, client: &StatsClient) -> Result<Value, FetchError> {
        let endpoint_url = format!("{}/{}", client.config().stats_base_url, self.endpoint_path());
        client.get_stats_json(&endpoint_url)
    }
}

pub trait LoadResultSets: NBAEndpoint {
    fn load_result_sets(&self, client: &StatsClient) -> Result<ResultSets, FetchError> {
        let endpoint_json = self.send_request(client)?;
        ResultSets::from_value(&endpoint_json)
    }
}

impl CommonAllPlayers {
    pub fn new(league_id: LeagueID, season: Season) -> Self {
        CommonAllPlayers { league_id, season, only_current_season: false }
    }
}

impl NBAEndpoint for CommonAllPlayers {
    fn endpoint_path(&self) -> String {
        format!("commonallplayers?{}&{}&IsOnlyCurrentSeason={}", self.league_id, self.season, self.only_current_season as u8)
    }
}

impl NBAEndpoint for PlayerGameLog {
    fn endpoint_path(&self) -> String {
        format!("playergamelog?{}&{}&{}", self.player_id, self.season, self.season_type)
    }
}

impl NBAEndpoint for PlayerCareerStats {
    fn endpoint_path(&self) -> String {
        format!("playercareerstats?{}&{}&{}", self.player_id, self.per_mode, self.league_id)
    }
}

impl NBAEndpoint for CommonPlayerInfo {
    fn endpoint_path(&self) -> String {
        format!("commonplayerinfo?{}&{}", self.player_id, self.league_id)
    }
}
