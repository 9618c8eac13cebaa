    use core::fmt;
    use std::fmt::Display;
    use std::str::FromStr;
    use chrono::{Datelike, NaiveDate};

    /// Month the regular season tips off. Dates from here on belong to the
    /// season that ends next calendar year.
    const SEASON_START_MONTH: u32 = 10;

    pub enum LeagueID {
        NBA,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Season(String);

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum SeasonType {
        Regular,
        Playoffs,
        PreSeason,
        AllStar,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum PerMode {
        PerGame,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PlayerID(pub i64);

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SeasonParseError(pub String);

    impl Display for SeasonParseError {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "invalid season '{}', expected YYYY-YY (e.g. 2023-24)", self.0)
        }
    }

    impl std::error::Error for SeasonParseError {}

    impl Season {
        /// The season in play on `date`.
        pub fn for_date(date: NaiveDate) -> Self {
            let first_year = if date.month() >= SEASON_START_MONTH {
                date.year()
            } else {
                date.year() - 1
            };
            Season(format!("{}-{:02}", first_year, (first_year + 1) % 100))
        }

        pub fn as_str(&self) -> &str {
            &self.0
        }

        /// Cheap shape check used to tell a trailing season apart from a
        /// player name word. Does not validate the year pairing.
        pub fn looks_like(s: &str) -> bool {
            let b = s.as_bytes();
            b.len() == 7
                && b[4] == b'-'
                && b[..4].iter().all(u8::is_ascii_digit)
                && b[5..].iter().all(u8::is_ascii_digit)
        }
    }

    impl FromStr for Season {
        type Err = SeasonParseError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            let s = s.trim();
            if !Season::looks_like(s) {
                return Err(SeasonParseError(s.to_string()));
            }
            let first: i32 = s[..4].parse().map_err(|_| SeasonParseError(s.to_string()))?;
            let second: i32 = s[5..].parse().map_err(|_| SeasonParseError(s.to_string()))?;
            if (first + 1) % 100 != second {
                return Err(SeasonParseError(s.to_string()));
            }
            Ok(Season(s.to_string()))
        }
    }

    impl SeasonType {
        pub fn label(&self) -> &'static str {
            match self {
                SeasonType::Regular => "Regular Season",
                SeasonType::Playoffs => "Playoffs",
                SeasonType::PreSeason => "Pre Season",
                SeasonType::AllStar => "All Star",
            }
        }
    }

    impl FromStr for SeasonType {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.to_lowercase().replace(&['-', '_', ' '][..], "").as_str() {
                "regular" | "regularseason" => Ok(SeasonType::Regular),
                "playoffs" => Ok(SeasonType::Playoffs),
                "preseason" => Ok(SeasonType::PreSeason),
                "allstar" => Ok(SeasonType::AllStar),
                _ => Err(format!("unknown season type '{}' (regular, playoffs, preseason, allstar)", s)),
            }
        }
    }

    impl Display for PlayerID {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "PlayerID={}", self.0)
        }
    }

    impl Display for Season {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "Season={}", self.0)
        }
    }

    impl Display for SeasonType {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "SeasonType={}", self.label().replace(' ', "%20"))
        }
    }

    impl Display for PerMode {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                PerMode::PerGame => write!(f, "PerMode=PerGame"),
            }
        }
    }

    impl Display for LeagueID {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                LeagueID::NBA => write!(f, "LeagueID=00")
            }
        }
    }

    impl Default for LeagueID {
        fn default() -> Self { LeagueID::NBA }
    }

    impl Default for Season {
        fn default() -> Self {
            Season::for_date(chrono::Utc::now().date_naive())
        }
    }

    impl Default for SeasonType {
        fn default() -> Self { SeasonType::Regular }
    }

    impl Default for PerMode {
        fn default() -> Self { PerMode::PerGame }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn date(y: i32, m: u32, d: u32) -> NaiveDate {
            NaiveDate::from_ymd_opt(y, m, d).unwrap()
        }

        #[test]
        fn season_follows_october_tipoff() {
            assert_eq!(Season::for_date(date(2024, 3, 1)).as_str(), "2023-24");
            assert_eq!(Season::for_date(date(2024, 9, 30)).as_str(), "2023-24");
            assert_eq!(Season::for_date(date(2024, 10, 1)).as_str(), "2024-25");
            assert_eq!(Season::for_date(date(1999, 11, 2)).as_str(), "1999-00");
        }

        #[test]
        fn season_parse_checks_year_pairing() {
            assert_eq!("2023-24".parse::<Season>().unwrap().as_str(), "2023-24");
            assert_eq!(" 1999-00 ".parse::<Season>().unwrap().as_str(), "1999-00");
            assert!("2023-25".parse::<Season>().is_err());
            assert!("2023".parse::<Season>().is_err());
            assert!("23-24".parse::<Season>().is_err());
            assert!("abcd-ef".parse::<Season>().is_err());
        }

        #[test]
        fn looks_like_is_shape_only() {
            assert!(Season::looks_like("2023-25"));
            assert!(!Season::looks_like("James"));
            assert!(!Season::looks_like("2023/24"));
        }

        #[test]
        fn params_render_as_query_fragments() {
            assert_eq!(LeagueID::default().to_string(), "LeagueID=00");
            assert_eq!(PlayerID(2544).to_string(), "PlayerID=2544");
            assert_eq!(SeasonType::Regular.to_string(), "SeasonType=Regular%20Season");
            assert_eq!(SeasonType::Playoffs.to_string(), "SeasonType=Playoffs");
            assert_eq!(PerMode::default().to_string(), "PerMode=PerGame");
        }

        #[test]
        fn season_type_accepts_loose_spellings() {
            assert_eq!("Regular Season".parse::<SeasonType>(), Ok(SeasonType::Regular));
            assert_eq!("playoffs".parse::<SeasonType>(), Ok(SeasonType::Playoffs));
            assert_eq!("pre-season".parse::<SeasonType>(), Ok(SeasonType::PreSeason));
            assert_eq!("all_star".parse::<SeasonType>(), Ok(SeasonType::AllStar));
            assert!("finals".parse::<SeasonType>().is_err());
            assert_eq!("2023-24".parse::<Season>().unwrap().to_string(), "Season=2023-24");
        }
    }
