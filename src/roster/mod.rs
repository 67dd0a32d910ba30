//! Roster lookup: the data source the resolver and casual spins probe
//!
//! The lookup is a trait so game logic can run against the SQLite-backed
//! roster in production and an in-memory stub in tests. An empty result
//! means "no data for that team/position/year", which is common since the
//! (team, position, year) space is sparse.

/// A player record acceptable as a correct answer for a resolved round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    /// Depth-chart rank; lower is more prominent. Unranked sorts last.
    pub depth_rank: Option<u32>,
    /// External headshot image id, when known.
    pub espn_id: Option<String>,
}

impl Candidate {
    /// A bare name with no rank or image id.
    #[cfg(test)]
    pub fn named(name: &str) -> Self {
        Candidate {
            name: name.to_string(),
            depth_rank: None,
            espn_id: None,
        }
    }
}

/// The lookup backend itself failed (as opposed to returning no rows).
#[derive(Debug)]
pub struct LookupError(pub String);

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "roster lookup failed: {}", self.0)
    }
}

impl std::error::Error for LookupError {}

/// Map a wheel position group to roster position codes.
/// OL covers the three line positions; DEF covers all defensive codes.
/// Pure membership lookup, no weighting.
pub fn position_codes(group: &str) -> Vec<&str> {
    match group {
        "OL" => vec!["OG", "OT", "OC"],
        "DEF" => vec!["LB", "DL", "CB", "S"],
        other => vec![other],
    }
}

/// Roster data source consumed by round resolution and casual spins.
pub trait RosterLookup {
    /// All players on `team` in `year` at any code the position group
    /// expands to, ordered by depth rank with unranked players last.
    /// Empty means no data, never an error.
    fn players_for_round(
        &self,
        team: &str,
        position_group: &str,
        year: u16,
    ) -> Result<Vec<Candidate>, LookupError>;
}

/// In-memory lookup for tests: maps (team, position group, year) to a
/// canned candidate list; anything unmapped is empty.
#[cfg(test)]
pub struct StubRoster {
    entries: std::collections::HashMap<(String, String, u16), Vec<Candidate>>,
    /// When set, every lookup fails with this message instead.
    pub fail_with: Option<String>,
}

#[cfg(test)]
impl StubRoster {
    pub fn empty() -> Self {
        StubRoster {
            entries: std::collections::HashMap::new(),
            fail_with: None,
        }
    }

    pub fn with(mut self, team: &str, group: &str, year: u16, names: &[&str]) -> Self {
        self.entries.insert(
            (team.to_string(), group.to_string(), year),
            names.iter().map(|n| Candidate::named(n)).collect(),
        );
        self
    }
}

#[cfg(test)]
impl RosterLookup for StubRoster {
    fn players_for_round(
        &self,
        team: &str,
        position_group: &str,
        year: u16,
    ) -> Result<Vec<Candidate>, LookupError> {
        if let Some(msg) = &self.fail_with {
            return Err(LookupError(msg.clone()));
        }
        Ok(self
            .entries
            .get(&(team.to_string(), position_group.to_string(), year))
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_positions_map_to_themselves() {
        assert_eq!(position_codes("QB"), vec!["QB"]);
        assert_eq!(position_codes("TE"), vec!["TE"]);
        assert_eq!(position_codes("S"), vec!["S"]);
    }

    #[test]
    fn test_offensive_line_expands_to_three_codes() {
        assert_eq!(position_codes("OL"), vec!["OG", "OT", "OC"]);
    }

    #[test]
    fn test_generic_defense_expands_to_four_codes() {
        assert_eq!(position_codes("DEF"), vec!["LB", "DL", "CB", "S"]);
    }

    #[test]
    fn test_stub_roster_lookup() {
        let roster = StubRoster::empty().with("KC", "QB", 2020, &["Patrick Mahomes"]);
        let hit = roster.players_for_round("KC", "QB", 2020).unwrap();
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].name, "Patrick Mahomes");
        assert!(roster.players_for_round("KC", "QB", 2019).unwrap().is_empty());
    }
}
