//! Player name → provider id resolution.
//!
//! A short list of players ships inside the binary so the common lookups
//! cost no request. Names missing from it are looked up in the full
//! `commonallplayers` listing, which is fetched once and kept in memory
//! for the rest of the command.

use std::collections::HashSet;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::nba::client::StatsClient;
use crate::nba::endpoints::{CommonAllPlayers, LoadResultSets};
use crate::nba::error::{FetchContext, FetchError, StatsError};
use crate::nba::resultsets::ResultSet;

const BUNDLED_PLAYERS: &str = include_str!("../../data/players.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: i64,
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct PlayerDirectory {
    players: Vec<PlayerRecord>,
}

impl PlayerRecord {
    /// `first-last` form, e.g. `lebron-james`.
    pub fn slug(&self) -> String {
        self.full_name
            .split_whitespace()
            .map(|w| w.to_lowercase())
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl PlayerDirectory {
    pub fn bundled() -> Result<Self, FetchError> {
        let players: Vec<PlayerRecord> = serde_json::from_str(BUNDLED_PLAYERS)?;
        Ok(PlayerDirectory { players })
    }

    /// Builds a directory from the `CommonAllPlayers` result set.
    pub fn from_result_set(set: &ResultSet) -> Result<Self, FetchError> {
        let mut players = Vec::with_capacity(set.row_set.len());
        for row in set.rows() {
            let full_name = row.string("DISPLAY_FIRST_LAST")?;
            let last_comma_first = row.string("DISPLAY_LAST_COMMA_FIRST")?;
            let (first_name, last_name) = match last_comma_first.split_once(',') {
                Some((last, first)) => (first.trim().to_string(), last.trim().to_string()),
                None => match full_name.split_once(' ') {
                    Some((first, last)) => (first.to_string(), last.to_string()),
                    None => (String::new(), full_name.clone()),
                },
            };
            players.push(PlayerRecord {
                id: row.i64("PERSON_ID")?,
                full_name,
                first_name,
                last_name,
                is_active: row.i64("ROSTERSTATUS")? == 1,
            });
        }
        Ok(PlayerDirectory { players })
    }

    /// Union of both lists keyed by player id. Records from `newer` win,
    /// so roster status comes from the provider once it has been fetched.
    pub fn merge(self, newer: PlayerDirectory) -> PlayerDirectory {
        let known: HashSet<i64> = newer.players.iter().map(|p| p.id).collect();
        let mut players = newer.players;
        players.extend(self.players.into_iter().filter(|p| !known.contains(&p.id)));
        PlayerDirectory { players }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&PlayerRecord> {
        let wanted = normalize_name(name);
        if wanted.is_empty() {
            return None;
        }
        self.players.iter().find(|p| normalize_name(&p.full_name) == wanted)
    }

    pub fn search(&self, fragment: &str) -> Vec<&PlayerRecord> {
        let wanted = normalize_name(fragment);
        if wanted.is_empty() {
            return Vec::new();
        }
        let mut matches: Vec<&PlayerRecord> = self
            .players
            .iter()
            .filter(|p| normalize_name(&p.full_name).contains(&wanted))
            .collect();
        matches.sort_by(|a, b| a.full_name.cmp(&b.full_name).then(a.id.cmp(&b.id)));
        matches
    }
}

/// Lowercase, single-spaced, with the accents the provider uses folded to
/// ASCII so `Nikola Jokic` finds `Nikola Jokić`.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(|w| w.chars().flat_map(char::to_lowercase).map(fold_accent).collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' | 'ā' => 'a',
        'ć' | 'č' | 'ç' => 'c',
        'đ' | 'ď' => 'd',
        'é' | 'è' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' => 'e',
        'ģ' | 'ğ' => 'g',
        'í' | 'ì' | 'î' | 'ï' | 'ī' => 'i',
        'ķ' => 'k',
        'ļ' | 'ł' => 'l',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'ø' | 'ő' => 'o',
        'ř' => 'r',
        'š' | 'ś' | 'ş' => 's',
        'ť' | 'ţ' => 't',
        'ú' | 'ù' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ž' | 'ź' | 'ż' => 'z',
        other => other,
    }
}

pub fn fetch_directory(client: &StatsClient) -> Result<PlayerDirectory, FetchError> {
    let endpoint = CommonAllPlayers::new(Default::default(), Default::default());
    let sets = endpoint.load_result_sets(client)?;
    let set = sets.require("CommonAllPlayers")?;
    let directory = PlayerDirectory::from_result_set(set)?;
    if directory.is_empty() {
        warn!("commonallplayers returned no players");
    }
    debug!("loaded {} players from commonallplayers", directory.len());
    Ok(directory)
}

/// Looks `name` up in the bundled list, then in the full provider listing.
pub fn resolve_player(client: &StatsClient, name: &str) -> Result<PlayerRecord, StatsError> {
    let bundled = PlayerDirectory::bundled().fetching("player list")?;
    if let Some(player) = bundled.find(name) {
        debug!("resolved '{}' to {} from bundled list", name, player.id);
        return Ok(player.clone());
    }
    info!("'{}' is not in the bundled list, checking commonallplayers", name);
    let directory = fetch_directory(client).fetching("player list")?;
    directory
        .find(name)
        .cloned()
        .ok_or_else(|| StatsError::PlayerNotFound(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bundled_list_resolves_case_and_spacing_insensitively() {
        let dir = PlayerDirectory::bundled().unwrap();
        assert!(!dir.is_empty());
        assert_eq!(dir.find("LeBron James").unwrap().id, 2544);
        assert_eq!(dir.find("  lebron   JAMES ").unwrap().id, 2544);
        assert_eq!(dir.find("Stephen Curry").unwrap().id, 201939);
        assert!(dir.find("LeBron").is_none());
        assert!(dir.find("   ").is_none());
    }

    #[test]
    fn accents_fold_to_ascii() {
        let dir = PlayerDirectory::bundled().unwrap();
        assert_eq!(dir.find("Nikola Jokic").unwrap().id, 203999);
        assert_eq!(dir.find("Luka Doncic").unwrap().id, 1629029);
        assert_eq!(normalize_name("Nikola Jokić"), "nikola jokic");
    }

    #[test]
    fn slug_joins_lowercased_words() {
        let dir = PlayerDirectory::bundled().unwrap();
        assert_eq!(dir.find("LeBron James").unwrap().slug(), "lebron-james");
        assert_eq!(dir.find("Shai Gilgeous-Alexander").unwrap().slug(), "shai-gilgeous-alexander");
    }

    #[test]
    fn search_matches_fragments_sorted_by_name() {
        let dir = PlayerDirectory::bundled().unwrap();
        let names: Vec<&str> = dir.search("tyrese").iter().map(|p| p.full_name.as_str()).collect();
        assert_eq!(names, vec!["Tyrese Haliburton", "Tyrese Maxey"]);
        assert!(dir.search("zzzz").is_empty());
        assert!(dir.search("").is_empty());
    }

    #[test]
    fn directory_from_common_all_players() {
        let set: ResultSet = serde_json::from_value(json!({
            "name": "CommonAllPlayers",
            "headers": ["PERSON_ID", "DISPLAY_LAST_COMMA_FIRST", "DISPLAY_FIRST_LAST", "ROSTERSTATUS", "FROM_YEAR"],
            "rowSet": [
                [1627780, "Payton II, Gary", "Gary Payton II", 1, "2016"],
                [76375, "Zaslofsky, Max", "Max Zaslofsky", 0, "1946"],
                [1, "Nene", "Nene", 0, "2002"]
            ]
        }))
        .unwrap();
        let dir = PlayerDirectory::from_result_set(&set).unwrap();
        assert_eq!(dir.len(), 3);
        let gp = dir.find("gary payton ii").unwrap();
        assert_eq!(gp.id, 1627780);
        assert_eq!(gp.first_name, "Gary");
        assert_eq!(gp.last_name, "Payton II");
        assert!(gp.is_active);
        assert!(!dir.find("Max Zaslofsky").unwrap().is_active);
        assert_eq!(dir.find("nene").unwrap().last_name, "Nene");
    }

    #[test]
    fn merge_dedupes_by_id_and_prefers_newer_records() {
        let set: ResultSet = serde_json::from_value(json!({
            "name": "CommonAllPlayers",
            "headers": ["PERSON_ID", "DISPLAY_LAST_COMMA_FIRST", "DISPLAY_FIRST_LAST", "ROSTERSTATUS"],
            "rowSet": [
                [201939, "Curry, Stephen", "Stephen Curry", 0],
                [203552, "Curry, Seth", "Seth Curry", 1]
            ]
        }))
        .unwrap();
        let bundled = PlayerDirectory::bundled().unwrap();
        let bundled_len = bundled.len();
        let merged = bundled.merge(PlayerDirectory::from_result_set(&set).unwrap());
        assert_eq!(merged.len(), bundled_len + 1);
        let curries = merged.search("curry");
        assert_eq!(curries.len(), 2);
        assert!(!merged.find("Stephen Curry").unwrap().is_active);
        assert_eq!(merged.find("LeBron James").unwrap().id, 2544);
    }
}
