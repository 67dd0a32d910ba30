//! Deterministic daily puzzle: same 10 (team, position, year) rounds for
//! everyone for a given Eastern calendar day.
//!
//! The date key is the cross-session contract: every client that computes
//! today's key gets the same seed and therefore the same puzzle, with no
//! puzzle storage anywhere.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc, Weekday};

use super::rng::SeededRng;
use super::{
    RoundSpec, DAILY_POSITIONS, DAILY_TEAMS, DAILY_YEAR_MAX, DAILY_YEAR_MIN, NUM_DAILY_ROUNDS,
};

/// The daily challenge rolls over at midnight US Eastern (EST/EDT).
const EASTERN_STANDARD_OFFSET_SECS: i32 = -5 * 3600;
const EASTERN_DAYLIGHT_OFFSET_SECS: i32 = -4 * 3600;

/// A calendar date canonicalized to US Eastern time, formatted `YYYY-MM-DD`.
/// The sole seed source for the daily puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateKey(String);

impl DateKey {
    /// Today's key, from the system clock.
    pub fn today() -> Self {
        Self::from_utc(Utc::now())
    }

    /// Key for the Eastern calendar day containing the given instant.
    pub fn from_utc(instant: DateTime<Utc>) -> Self {
        let local = instant.with_timezone(&eastern_offset(instant));
        DateKey(format!(
            "{:04}-{:02}-{:02}",
            local.year(),
            local.month(),
            local.day()
        ))
    }

    /// Accept an already-canonical `YYYY-MM-DD` key as-is.
    pub fn parse(s: &str) -> Option<Self> {
        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
        // Reject non-canonical spellings like "2024-1-5".
        let canonical = format!(
            "{:04}-{:02}-{:02}",
            date.year(),
            date.month(),
            date.day()
        );
        (canonical == s).then_some(DateKey(canonical))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// US Eastern offset for an instant: UTC-4 during daylight saving, UTC-5
/// otherwise. Daylight runs from 02:00 local on the second Sunday of March
/// (07:00 UTC) to 02:00 local on the first Sunday of November (06:00 UTC).
fn eastern_offset(instant: DateTime<Utc>) -> FixedOffset {
    let year = instant.year();
    let secs = if instant >= dst_start_utc(year) && instant < dst_end_utc(year) {
        EASTERN_DAYLIGHT_OFFSET_SECS
    } else {
        EASTERN_STANDARD_OFFSET_SECS
    };
    FixedOffset::east_opt(secs).expect("valid offset")
}

fn dst_start_utc(year: i32) -> DateTime<Utc> {
    nth_weekday_utc(year, 3, Weekday::Sun, 2, 7)
}

fn dst_end_utc(year: i32) -> DateTime<Utc> {
    nth_weekday_utc(year, 11, Weekday::Sun, 1, 6)
}

fn nth_weekday_utc(year: i32, month: u32, weekday: Weekday, n: u8, hour: u32) -> DateTime<Utc> {
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, n)
        .and_then(|d| d.and_hms_opt(hour, 0, 0))
        .expect("valid transition date")
        .and_utc()
}

/// Draw one round, consuming exactly three RNG values in a fixed order:
/// team, then position, then year. The resolver reuses this so primary and
/// fallback candidates share one draw discipline.
pub(crate) fn draw_round(rng: &mut SeededRng) -> RoundSpec {
    let team = DAILY_TEAMS[rng.pick_index(DAILY_TEAMS.len())];
    let position = DAILY_POSITIONS[rng.pick_index(DAILY_POSITIONS.len())];
    let year = rng.pick_year(DAILY_YEAR_MIN, DAILY_YEAR_MAX);
    RoundSpec {
        team: team.to_string(),
        position: position.to_string(),
        year,
    }
}

/// Generate the 10 rounds for the given date. Pure function of the key:
/// same date, same rounds, for everyone.
pub fn generate_daily_rounds(key: &DateKey) -> Vec<RoundSpec> {
    let mut rng = SeededRng::from_key(key.as_str());
    (0..NUM_DAILY_ROUNDS).map(|_| draw_round(&mut rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn test_generate_is_deterministic() {
        let key = DateKey::parse("2024-01-15").unwrap();
        assert_eq!(generate_daily_rounds(&key), generate_daily_rounds(&key));
    }

    #[test]
    fn test_known_rounds_for_fixed_date() {
        // Locked-in expected output for the 2024-01-15 puzzle; computed with
        // the reference implementation. If this test breaks, the shared
        // daily sequence has changed for every player.
        let key = DateKey::parse("2024-01-15").unwrap();
        let rounds = generate_daily_rounds(&key);
        assert_eq!(rounds.len(), 10);
        assert_eq!(
            (rounds[0].team.as_str(), rounds[0].position.as_str(), rounds[0].year),
            ("PIT", "QB", 2012)
        );
        assert_eq!(
            (rounds[1].team.as_str(), rounds[1].position.as_str(), rounds[1].year),
            ("DEN", "QB", 2015)
        );
        assert_eq!(
            (rounds[2].team.as_str(), rounds[2].position.as_str(), rounds[2].year),
            ("CAR", "WR", 2012)
        );
        assert_eq!(
            (rounds[3].team.as_str(), rounds[3].position.as_str(), rounds[3].year),
            ("JAX", "WR", 2021)
        );
    }

    #[test]
    fn test_rounds_stay_in_domain() {
        let key = DateKey::parse("2031-06-01").unwrap();
        for spec in generate_daily_rounds(&key) {
            assert!(DAILY_TEAMS.contains(&spec.team.as_str()));
            assert!(DAILY_POSITIONS.contains(&spec.position.as_str()));
            assert!((DAILY_YEAR_MIN..=DAILY_YEAR_MAX).contains(&spec.year));
        }
    }

    #[test]
    fn test_zero_draws_give_first_team_first_position_min_year() {
        use crate::game::rng::{index_from_unit, year_from_unit};
        assert_eq!(DAILY_TEAMS[index_from_unit(0.0, DAILY_TEAMS.len())], "ARI");
        assert_eq!(
            DAILY_POSITIONS[index_from_unit(0.0, DAILY_POSITIONS.len())],
            "QB"
        );
        assert_eq!(
            year_from_unit(0.0, DAILY_YEAR_MIN, DAILY_YEAR_MAX),
            DAILY_YEAR_MIN
        );
    }

    #[test]
    fn test_different_days_use_independent_seeds() {
        let a = generate_daily_rounds(&DateKey::parse("2024-01-15").unwrap());
        let b = generate_daily_rounds(&DateKey::parse("2024-01-16").unwrap());
        // Not required to differ, but these two known days do; the real
        // guarantee is that each is seeded only from its own key.
        assert_ne!(a, b);
    }

    #[test]
    fn test_parse_accepts_canonical_key() {
        assert_eq!(
            DateKey::parse("2024-01-15").unwrap().as_str(),
            "2024-01-15"
        );
    }

    #[test]
    fn test_parse_rejects_malformed_keys() {
        assert!(DateKey::parse("2024-1-15").is_none());
        assert!(DateKey::parse("01-15-2024").is_none());
        assert!(DateKey::parse("2024-13-01").is_none());
        assert!(DateKey::parse("not a date").is_none());
        assert!(DateKey::parse("").is_none());
    }

    #[test]
    fn test_midnight_eastern_rollover_in_winter() {
        // 04:59 UTC on Jan 1 is still 23:59 EST on Dec 31.
        assert_eq!(
            DateKey::from_utc(utc(2024, 1, 1, 4, 59)).as_str(),
            "2023-12-31"
        );
        assert_eq!(
            DateKey::from_utc(utc(2024, 1, 1, 5, 0)).as_str(),
            "2024-01-01"
        );
    }

    #[test]
    fn test_midnight_eastern_rollover_in_summer() {
        // During daylight saving the day rolls over at 04:00 UTC.
        assert_eq!(
            DateKey::from_utc(utc(2024, 7, 1, 3, 59)).as_str(),
            "2024-06-30"
        );
        assert_eq!(
            DateKey::from_utc(utc(2024, 7, 1, 4, 0)).as_str(),
            "2024-07-01"
        );
    }

    #[test]
    fn test_dst_transition_boundaries_2024() {
        // DST begins 2024-03-10 02:00 EST (07:00 UTC).
        assert_eq!(eastern_offset(utc(2024, 3, 10, 6, 59)).local_minus_utc(), -5 * 3600);
        assert_eq!(eastern_offset(utc(2024, 3, 10, 7, 0)).local_minus_utc(), -4 * 3600);
        // DST ends 2024-11-03 02:00 EDT (06:00 UTC).
        assert_eq!(eastern_offset(utc(2024, 11, 3, 5, 59)).local_minus_utc(), -4 * 3600);
        assert_eq!(eastern_offset(utc(2024, 11, 3, 6, 0)).local_minus_utc(), -5 * 3600);
    }

    #[test]
    fn test_same_eastern_day_same_key() {
        // Morning and evening of the same Eastern day agree on the key.
        let morning = DateKey::from_utc(utc(2024, 5, 20, 11, 0));
        let evening = DateKey::from_utc(utc(2024, 5, 21, 3, 30));
        assert_eq!(morning, evening);
        assert_eq!(morning.as_str(), "2024-05-20");
    }
}
