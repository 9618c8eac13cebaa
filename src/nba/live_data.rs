use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::nba::client::StatsClient;
use crate::nba::error::FetchError;

const SCOREBOARD_PATH: &str = "static/json/liveData/scoreboard/todaysScoreboard_00.json";
const BOXSCORE_PATH: &str = "static/json/liveData/boxscore";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Scheduled,
    InProgress,
    Final,
    Unknown,
}

impl From<u8> for GameStatus {
    fn from(code: u8) -> Self {
        match code {
            1 => GameStatus::Scheduled,
            2 => GameStatus::InProgress,
            3 => GameStatus::Final,
            _ => GameStatus::Unknown,
        }
    }
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Scheduled => "scheduled",
            GameStatus::InProgress => "in_progress",
            GameStatus::Final => "final",
            GameStatus::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Deserialize)]
struct ScoreboardEnvelope {
    scoreboard: Scoreboard,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scoreboard {
    #[serde(default)]
    pub game_date: String,
    #[serde(default)]
    pub games: Vec<ScoreboardGame>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreboardGame {
    pub game_id: String,
    #[serde(default)]
    pub game_status: u8,
    #[serde(default)]
    pub game_status_text: String,
    pub home_team: LiveTeam,
    pub away_team: LiveTeam,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LiveTeam {
    pub team_id: i64,
    pub team_name: String,
    pub team_city: String,
    pub team_tricode: String,
    pub score: i64,
    pub periods: Vec<PeriodScore>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PeriodScore {
    pub period: u32,
    pub score: i64,
}

#[derive(Debug, Deserialize)]
struct BoxScoreEnvelope {
    game: BoxScore,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxScore {
    pub game_id: String,
    #[serde(default)]
    pub game_status: u8,
    pub home_team: BoxScoreTeam,
    pub away_team: BoxScoreTeam,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoxScoreTeam {
    pub team_tricode: String,
    pub players: Vec<BoxScorePlayer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoxScorePlayer {
    pub person_id: i64,
    pub name: String,
    pub status: String,
    pub statistics: PlayerStatistics,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerStatistics {
    pub points: i64,
    pub rebounds_total: i64,
    pub assists: i64,
    pub steals: i64,
    pub blocks: i64,
    pub minutes_calculated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct QuarterBreakdown {
    pub q1: i64,
    pub q2: i64,
    pub q3: i64,
    pub q4: i64,
    pub ot: i64,
    pub total: i64,
}

impl ScoreboardGame {
    pub fn status(&self) -> GameStatus {
        GameStatus::from(self.game_status)
    }

    pub fn matchup(&self) -> String {
        format!("{} @ {}", self.away_team.team_tricode, self.home_team.team_tricode)
    }
}

impl BoxScore {
    pub fn players(&self) -> impl Iterator<Item = &BoxScorePlayer> {
        self.home_team.players.iter().chain(self.away_team.players.iter())
    }

    pub fn find_player(&self, person_id: i64) -> Option<&BoxScorePlayer> {
        self.players().find(|p| p.person_id == person_id)
    }
}

pub fn team_label(team: &LiveTeam) -> String {
    format!("({}) {} {}", team.team_tricode, team.team_city, team.team_name)
}

/// Periods 1-4 land in their own column, every overtime is summed into `ot`.
pub fn quarter_breakdown(team: &LiveTeam) -> QuarterBreakdown {
    let mut quarter_data: Vec<i64> = vec![0; 4];
    let mut ot = 0;
    for p in &team.periods {
        match p.period {
            1..=4 => quarter_data[(p.period - 1) as usize] = p.score,
            0 => {}
            _ => ot += p.score,
        }
    }
    QuarterBreakdown { q1: quarter_data[0], q2: quarter_data[1], q3: quarter_data[2], q4: quarter_data[3], ot, total: team.score }
}

pub fn fetch_scoreboard(client: &StatsClient) -> Result<Scoreboard, FetchError> {
    let url = format!("{}/{}", client.config().live_base_url, SCOREBOARD_PATH);
    let envelope: ScoreboardEnvelope = client.get_live(&url)?;
    Ok(envelope.scoreboard)
}

pub fn fetch_boxscore(client: &StatsClient, game_id: &str) -> Result<BoxScore, FetchError> {
    let url = format!("{}/{}/boxscore_{}.json", client.config().live_base_url, BOXSCORE_PATH, game_id);
    let envelope: BoxScoreEnvelope = client.get_live(&url)?;
    Ok(envelope.game)
}
