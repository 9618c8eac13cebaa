//! Flat records handed to the downstream client.

use serde::Serialize;
use tabled::Tabled;

use crate::nba::error::FetchError;
use crate::nba::live_data::{quarter_breakdown, team_label, BoxScorePlayer, GameStatus, QuarterBreakdown, ScoreboardGame};
use crate::nba::players::PlayerRecord;
use crate::nba::resultsets::Row;

#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct LivePlayerLine {
    pub name: String,
    pub points: i64,
    pub rebounds: i64,
    pub assists: i64,
    pub steals: i64,
    pub blocks: i64,
    pub minutes: String,
    pub game_id: String,
    pub matchup: String,
    pub game_status: String,
    pub game_in_progress: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameLogReport {
    pub player: String,
    pub season: String,
    pub games: Vec<GameLogEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct GameLogEntry {
    pub date: String,
    pub matchup: String,
    pub points: i64,
    pub rebounds: i64,
    pub assists: i64,
    pub steals: i64,
    pub blocks: i64,
    pub turnovers: i64,
    pub fg: String,
    #[serde(rename = "3pt")]
    pub three_pt: String,
    pub ft: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerReport {
    pub player: String,
    pub career: CareerLine,
}

#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct CareerLine {
    pub games_played: i64,
    pub points_per_game: f64,
    pub rebounds_per_game: f64,
    pub assists_per_game: f64,
    pub steals_per_game: f64,
    pub blocks_per_game: f64,
    pub turnovers_per_game: f64,
    pub fg_percentage: String,
    #[serde(rename = "3pt_percentage")]
    pub three_pt_percentage: String,
    pub ft_percentage: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct CommonInfoReport {
    pub player: String,
    pub id: i64,
    pub birthdate: String,
    pub country: String,
    pub school: String,
    pub height: String,
    pub weight: String,
    pub jersey: String,
    pub position: String,
    pub team: String,
    pub from_year: i64,
    pub to_year: i64,
    pub draft: String,
    pub season_exp: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreboardReport {
    pub game_date: String,
    pub games: Vec<ScoreboardLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreboardLine {
    pub game_id: String,
    pub status: String,
    pub status_text: String,
    pub home: String,
    pub away: String,
    pub home_score: i64,
    pub away_score: i64,
    pub home_periods: QuarterBreakdown,
    pub away_periods: QuarterBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupReport {
    pub query: String,
    pub matches: Vec<LookupMatch>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct LookupMatch {
    pub id: i64,
    pub name: String,
    pub active: bool,
}

/// `made/attempted (pct%)` where `pct` is the provider's 0-1 fraction.
pub fn shooting_split(made: i64, attempted: i64, pct: f64) -> String {
    format!("{}/{} ({})", made, attempted, percentage(pct))
}

pub fn percentage(pct: f64) -> String {
    format!("{:.1}%", pct * 100.0)
}

pub fn live_line(player: &PlayerRecord, game: &ScoreboardGame, line: &BoxScorePlayer) -> LivePlayerLine {
    let status = game.status();
    let stats = &line.statistics;
    LivePlayerLine {
        name: player.slug(),
        points: stats.points,
        rebounds: stats.rebounds_total,
        assists: stats.assists,
        steals: stats.steals,
        blocks: stats.blocks,
        minutes: stats.minutes_calculated.clone(),
        game_id: game.game_id.clone(),
        matchup: game.matchup(),
        game_status: status.as_str().to_string(),
        game_in_progress: status == GameStatus::InProgress,
    }
}

pub fn game_log_entry(row: &Row) -> Result<GameLogEntry, FetchError> {
    Ok(GameLogEntry {
        date: row.string("GAME_DATE")?,
        matchup: row.string("MATCHUP")?,
        points: row.i64("PTS")?,
        rebounds: row.i64("REB")?,
        assists: row.i64("AST")?,
        steals: row.i64("STL")?,
        blocks: row.i64("BLK")?,
        turnovers: row.i64("TOV")?,
        fg: shooting_split(row.i64("FGM")?, row.i64("FGA")?, row.f64("FG_PCT")?),
        three_pt: shooting_split(row.i64("FG3M")?, row.i64("FG3A")?, row.f64("FG3_PCT")?),
        ft: shooting_split(row.i64("FTM")?, row.i64("FTA")?, row.f64("FT_PCT")?),
    })
}

pub fn career_line(row: &Row) -> Result<CareerLine, FetchError> {
    Ok(CareerLine {
        games_played: row.i64("GP")?,
        points_per_game: row.f64("PTS")?,
        rebounds_per_game: row.f64("REB")?,
        assists_per_game: row.f64("AST")?,
        steals_per_game: row.f64("STL")?,
        blocks_per_game: row.f64("BLK")?,
        turnovers_per_game: row.f64("TOV")?,
        fg_percentage: percentage(row.f64("FG_PCT")?),
        three_pt_percentage: percentage(row.f64("FG3_PCT")?),
        ft_percentage: percentage(row.f64("FT_PCT")?),
    })
}

/// `2003 R1 P1`. Round or pick the provider left blank are dropped.
pub fn draft_label(year: &str, round: &str, pick: &str) -> String {
    let known = |s: &str| !s.is_empty() && !s.eq_ignore_ascii_case("undrafted");
    if !known(year) {
        return "Undrafted".to_string();
    }
    let mut label = year.to_string();
    if known(round) {
        label.push_str(&format!(" R{}", round));
    }
    if known(pick) {
        label.push_str(&format!(" P{}", pick));
    }
    label
}

pub fn common_info(player: &str, row: &Row) -> Result<CommonInfoReport, FetchError> {
    let birthdate = row.string("BIRTHDATE")?;
    let draft = draft_label(&row.string("DRAFT_YEAR")?, &row.string("DRAFT_ROUND")?, &row.string("DRAFT_NUMBER")?);
    let team = format!("{} {}", row.string("TEAM_CITY")?, row.string("TEAM_NAME")?);
    Ok(CommonInfoReport {
        player: player.to_string(),
        id: row.i64("PERSON_ID")?,
        // 1984-12-30T00:00:00
        birthdate: birthdate.split('T').next().unwrap_or_default().to_string(),
        country: row.string("COUNTRY")?,
        school: row.string("SCHOOL")?,
        height: row.string("HEIGHT")?,
        weight: row.string("WEIGHT")?,
        jersey: row.string("JERSEY")?,
        position: row.string("POSITION")?,
        team: team.trim().to_string(),
        from_year: row.i64("FROM_YEAR")?,
        to_year: row.i64("TO_YEAR")?,
        draft,
        season_exp: row.i64("SEASON_EXP")?,
    })
}

pub fn scoreboard_line(game: &ScoreboardGame) -> ScoreboardLine {
    ScoreboardLine {
        game_id: game.game_id.clone(),
        status: game.status().as_str().to_string(),
        status_text: game.game_status_text.trim().to_string(),
        home: team_label(&game.home_team),
        away: team_label(&game.away_team),
        home_score: game.home_team.score,
        away_score: game.away_team.score,
        home_periods: quarter_breakdown(&game.home_team),
        away_periods: quarter_breakdown(&game.away_team),
    }
}

pub fn lookup_match(player: &PlayerRecord) -> LookupMatch {
    LookupMatch { id: player.id, name: player.full_name.clone(), active: player.is_active }
}
