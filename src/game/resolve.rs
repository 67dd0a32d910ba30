//! Round resolution: deterministic fallback candidates probed against the
//! roster until one has data
//!
//! Not every (team, position, year) triple has known players, so each round
//! owns an infinite deterministic candidate sequence: attempt 0 is the
//! shared daily round, attempts 1.. are reseeded from
//! `"{date}-{round}-{attempt}"`. Every client probes the same sequence in
//! the same order and therefore lands on the same resolved round.

use super::daily::{draw_round, generate_daily_rounds, DateKey};
use super::rng::SeededRng;
use super::RoundSpec;
use crate::roster::{Candidate, RosterLookup};

/// Fallback budget before a round is declared unresolvable. Inherited from
/// the original product; configurable at the call site.
pub const MAX_RESOLVE_ATTEMPTS: u32 = 80;

/// Resolution exhausted its attempt budget without finding roster data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    RoundUnresolved { round_index: usize, attempts: u32 },
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveError::RoundUnresolved {
                round_index,
                attempts,
            } => write!(
                f,
                "no roster data found for round {} after {} attempts",
                round_index + 1,
                attempts
            ),
        }
    }
}

impl std::error::Error for ResolveError {}

/// A round spec together with its non-empty accepted-answer list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRound {
    pub spec: RoundSpec,
    answers: Vec<Candidate>,
}

impl ResolvedRound {
    /// Only constructible with at least one answer.
    fn new(spec: RoundSpec, answers: Vec<Candidate>) -> Self {
        debug_assert!(!answers.is_empty());
        ResolvedRound { spec, answers }
    }

    /// For callers outside the resolver (the casual spin): `None` when the
    /// answer list is empty, upholding the non-empty invariant.
    pub(crate) fn from_parts(spec: RoundSpec, answers: Vec<Candidate>) -> Option<Self> {
        (!answers.is_empty()).then(|| ResolvedRound::new(spec, answers))
    }

    /// Accepted answers ordered by ascending depth rank, unranked last.
    pub fn answers_ranked(&self) -> Vec<Candidate> {
        let mut ranked = self.answers.clone();
        ranked.sort_by_key(|c| c.depth_rank.unwrap_or(u32::MAX));
        ranked
    }

    pub fn answer_names(&self) -> Vec<&str> {
        self.answers.iter().map(|c| c.name.as_str()).collect()
    }
}

/// Deterministic candidate for (date, round, attempt). Attempt 0 is the
/// primary round from the shared daily sequence; higher attempts reseed
/// from the triple so two callers always agree on every fallback.
///
/// `round_index` must be below [`super::NUM_DAILY_ROUNDS`].
pub fn get_candidate(key: &DateKey, round_index: usize, attempt_index: u32) -> RoundSpec {
    if attempt_index == 0 {
        return generate_daily_rounds(key)[round_index].clone();
    }
    let mut rng = SeededRng::from_key(&format!("{}-{}-{}", key, round_index, attempt_index));
    draw_round(&mut rng)
}

/// Probe candidates 0..`max_attempts` in order and stop at the first with
/// roster data. Attempts are strictly sequential; a lookup error counts as
/// a miss and probing continues, so a flaky backend cannot abort an
/// otherwise-resolvable round.
pub fn resolve_round(
    lookup: &dyn RosterLookup,
    key: &DateKey,
    round_index: usize,
    max_attempts: u32,
) -> Result<ResolvedRound, ResolveError> {
    for attempt in 0..max_attempts {
        let candidate = get_candidate(key, round_index, attempt);
        match lookup.players_for_round(&candidate.team, &candidate.position, candidate.year) {
            Ok(answers) if !answers.is_empty() => {
                return Ok(ResolvedRound::new(candidate, answers));
            }
            Ok(_) | Err(_) => {}
        }
    }
    Err(ResolveError::RoundUnresolved {
        round_index,
        attempts: max_attempts,
    })
}
