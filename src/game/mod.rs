//! Game logic: daily puzzle generation, round resolution, answer matching,
//! round/session state machines, and the fixed NFL domain data they draw from.

pub mod daily;
pub mod matcher;
pub mod resolve;
pub mod rng;
pub mod round;
pub mod session;

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The 32 current NFL team abbreviations (no historical aliases).
/// Order matters: the daily generator indexes into this list.
pub const DAILY_TEAMS: [&str; 32] = [
    "ARI", "ATL", "BAL", "BUF", "CAR", "CHI", "CIN", "CLE", "DAL", "DEN",
    "DET", "GB", "HOU", "IND", "JAX", "KC", "LV", "LAC", "LAR", "MIA",
    "MIN", "NE", "NO", "NYG", "NYJ", "PHI", "PIT", "SF", "SEA", "TB",
    "TEN", "WAS",
];

/// Easy mode positions for the daily challenge: QB, RB, WR only.
pub const DAILY_POSITIONS: [&str; 3] = ["QB", "RB", "WR"];

/// Inclusive season range for the daily challenge.
pub const DAILY_YEAR_MIN: u16 = 2010;
pub const DAILY_YEAR_MAX: u16 = 2025;

/// Rounds per daily game.
pub const NUM_DAILY_ROUNDS: usize = 10;

/// Seconds on the clock for each daily round.
pub const DAILY_TIMER_SECONDS: u32 = 30;

/// Default inclusive season range for casual games.
pub const DEFAULT_YEAR_MIN: u16 = 2000;
pub const DEFAULT_YEAR_MAX: u16 = 2025;

/// Default position groups on the casual wheel.
pub const DEFAULT_POSITION_GROUPS: [&str; 4] = ["QB", "RB", "WR", "TE"];

/// Selectable position groups for the casual wheel, as (id, label).
/// DEF = any defensive player (LB, DL, CB, S).
pub const POSITION_GROUPS: [(&str, &str); 10] = [
    ("QB", "QB"),
    ("RB", "RB"),
    ("WR", "WR"),
    ("TE", "TE"),
    ("OL", "OL"),
    ("DEF", "DEF (any defensive)"),
    ("LB", "LB"),
    ("DL", "DL"),
    ("CB", "CB"),
    ("S", "S"),
];

/// Team display names (abbreviation -> full name). Historical aliases map
/// to the current franchise for display only; they never appear on the wheel.
static TEAM_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("ARI", "Arizona Cardinals"),
        ("ATL", "Atlanta Falcons"),
        ("BAL", "Baltimore Ravens"),
        ("BUF", "Buffalo Bills"),
        ("CAR", "Carolina Panthers"),
        ("CHI", "Chicago Bears"),
        ("CIN", "Cincinnati Bengals"),
        ("CLE", "Cleveland Browns"),
        ("DAL", "Dallas Cowboys"),
        ("DEN", "Denver Broncos"),
        ("DET", "Detroit Lions"),
        ("GB", "Green Bay Packers"),
        ("HOU", "Houston Texans"),
        ("IND", "Indianapolis Colts"),
        ("JAX", "Jacksonville Jaguars"),
        ("KC", "Kansas City Chiefs"),
        ("LV", "Las Vegas Raiders"),
        ("LAC", "Los Angeles Chargers"),
        ("LAR", "Los Angeles Rams"),
        ("MIA", "Miami Dolphins"),
        ("MIN", "Minnesota Vikings"),
        ("NE", "New England Patriots"),
        ("NO", "New Orleans Saints"),
        ("NYG", "New York Giants"),
        ("NYJ", "New York Jets"),
        ("PHI", "Philadelphia Eagles"),
        ("PIT", "Pittsburgh Steelers"),
        ("SF", "San Francisco 49ers"),
        ("SEA", "Seattle Seahawks"),
        ("TB", "Tampa Bay Buccaneers"),
        ("TEN", "Tennessee Titans"),
        ("WAS", "Washington Commanders"),
        ("OAK", "Las Vegas Raiders"),
        ("SD", "Los Angeles Chargers"),
        ("STL", "Los Angeles Rams"),
    ])
});

/// Full display name for a team abbreviation, falling back to the
/// abbreviation itself for unknown codes.
pub fn team_display_name(abbreviation: &str) -> &str {
    TEAM_NAMES
        .get(abbreviation)
        .copied()
        .unwrap_or(abbreviation)
}

/// One (team, position group, season year) challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSpec {
    pub team: String,
    pub position: String,
    pub year: u16,
}

impl RoundSpec {
    /// Season label like "2015–16" for display.
    pub fn season_label(&self) -> String {
        format!("{}\u{2013}{:02}", self.year, (self.year + 1) % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_display_name_known() {
        assert_eq!(team_display_name("KC"), "Kansas City Chiefs");
        assert_eq!(team_display_name("WAS"), "Washington Commanders");
    }

    #[test]
    fn test_team_display_name_historical_alias() {
        assert_eq!(team_display_name("OAK"), "Las Vegas Raiders");
        assert_eq!(team_display_name("STL"), "Los Angeles Rams");
    }

    #[test]
    fn test_team_display_name_unknown_falls_back() {
        assert_eq!(team_display_name("XYZ"), "XYZ");
    }

    #[test]
    fn test_daily_teams_are_current_only() {
        assert_eq!(DAILY_TEAMS.len(), 32);
        assert!(!DAILY_TEAMS.contains(&"OAK"));
        assert!(!DAILY_TEAMS.contains(&"SD"));
        assert!(!DAILY_TEAMS.contains(&"STL"));
    }

    #[test]
    fn test_season_label() {
        let spec = RoundSpec {
            team: "KC".into(),
            position: "QB".into(),
            year: 2015,
        };
        assert_eq!(spec.season_label(), "2015\u{2013}16");

        let spec = RoundSpec {
            team: "SF".into(),
            position: "WR".into(),
            year: 2009,
        };
        assert_eq!(spec.season_label(), "2009\u{2013}10");
    }
}
