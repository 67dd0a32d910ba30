//! Per-round state machine: resolve, present, accept one submission or one
//! timeout, then hold feedback until the session advances
//!
//! Both game modes drive the same machine; the daily mode configures a
//! countdown, casual games may run untimed. `Answering` honors exactly one
//! terminal event: the phase check makes a near-simultaneous timer expiry
//! and submission collapse to a single transition.

use super::matcher::matches_any;
use super::resolve::{ResolveError, ResolvedRound};
use crate::roster::Candidate;

/// Lifecycle of one round. `Feedback` and `Error` are terminal; the
/// enclosing session decides whether to advance or end the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    Loading,
    Answering,
    Feedback,
    Error,
}

/// What happened to a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Evaluated against the accepted answers; the round is now in feedback.
    Evaluated { is_correct: bool },
    /// Empty or whitespace-only input; rejected without consuming the round.
    RejectedEmpty,
    /// The round was not accepting input (already resolved, or still loading).
    Ignored,
}

/// The record of a finished round, owned by the session for scoring and review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub user_answer: String,
    /// Full accepted-candidate list, ordered by ascending depth rank.
    pub accepted: Vec<Candidate>,
    pub is_correct: bool,
}

/// State machine for a single round.
#[derive(Debug)]
pub struct RoundState {
    phase: RoundPhase,
    timer_seconds: Option<u32>,
    time_remaining: Option<u32>,
    resolved: Option<ResolvedRound>,
    input: String,
    outcome: Option<RoundOutcome>,
    error: Option<ResolveError>,
}

impl RoundState {
    /// A fresh round in `Loading`. `timer_seconds` of `None` means untimed.
    pub fn new(timer_seconds: Option<u32>) -> Self {
        RoundState {
            phase: RoundPhase::Loading,
            timer_seconds,
            time_remaining: None,
            resolved: None,
            input: String::new(),
            outcome: None,
            error: None,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn resolved(&self) -> Option<&ResolvedRound> {
        self.resolved.as_ref()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn time_remaining(&self) -> Option<u32> {
        self.time_remaining
    }

    pub fn outcome(&self) -> Option<&RoundOutcome> {
        self.outcome.as_ref()
    }

    pub fn error(&self) -> Option<&ResolveError> {
        self.error.as_ref()
    }

    /// Resolution succeeded: start answering with a fresh timer.
    /// Ignored outside `Loading` (a stale result must not restart a round).
    pub fn on_resolved(&mut self, resolved: ResolvedRound) {
        if self.phase != RoundPhase::Loading {
            return;
        }
        self.resolved = Some(resolved);
        self.time_remaining = self.timer_seconds;
        self.input.clear();
        self.phase = RoundPhase::Answering;
    }

    /// Resolution exhausted its budget: terminal error for this round.
    pub fn on_resolve_failed(&mut self, err: ResolveError) {
        if self.phase != RoundPhase::Loading {
            return;
        }
        self.error = Some(err);
        self.phase = RoundPhase::Error;
    }

    /// Typed input; locked outside `Answering`.
    pub fn on_char(&mut self, c: char) {
        if self.phase == RoundPhase::Answering {
            self.input.push(c);
        }
    }

    pub fn on_backspace(&mut self) {
        if self.phase == RoundPhase::Answering {
            self.input.pop();
        }
    }

    /// Submit the typed answer. Empty or whitespace-only input is rejected
    /// without ending the round; anything else is evaluated and the round
    /// moves to feedback.
    pub fn submit(&mut self) -> Submission {
        if self.phase != RoundPhase::Answering {
            return Submission::Ignored;
        }
        if self.input.trim().is_empty() {
            return Submission::RejectedEmpty;
        }
        let answer = std::mem::take(&mut self.input);
        self.finish(answer)
    }

    /// One-second timer tick. At zero the round ends as an automatic
    /// incorrect submission with an empty answer. No-op when untimed or
    /// outside `Answering`, so a late callback after a submission race
    /// cannot produce a second outcome.
    pub fn tick(&mut self) {
        if self.phase != RoundPhase::Answering {
            return;
        }
        let Some(remaining) = self.time_remaining else {
            return;
        };
        if remaining > 1 {
            self.time_remaining = Some(remaining - 1);
        } else {
            self.time_remaining = Some(0);
            self.finish(String::new());
        }
    }

    fn finish(&mut self, user_answer: String) -> Submission {
        // `Answering` implies a resolved round; guard anyway.
        let Some(resolved) = &self.resolved else {
            return Submission::Ignored;
        };
        let is_correct =
            !user_answer.is_empty() && matches_any(&user_answer, &resolved.answer_names());
        self.outcome = Some(RoundOutcome {
            user_answer,
            accepted: resolved.answers_ranked(),
            is_correct,
        });
        self.phase = RoundPhase::Feedback;
        Submission::Evaluated { is_correct }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::daily::DateKey;
    use crate::game::resolve::{get_candidate, resolve_round, MAX_RESOLVE_ATTEMPTS};
    use crate::roster::StubRoster;

    fn resolved_with(names: &[&str]) -> ResolvedRound {
        let key = DateKey::parse("2024-01-15").unwrap();
        let primary = get_candidate(&key, 0, 0);
        let roster = StubRoster::empty().with(&primary.team, &primary.position, primary.year, names);
        resolve_round(&roster, &key, 0, MAX_RESOLVE_ATTEMPTS).unwrap()
    }

    fn answering(names: &[&str], timer: Option<u32>) -> RoundState {
        let mut round = RoundState::new(timer);
        round.on_resolved(resolved_with(names));
        round
    }

    fn type_answer(round: &mut RoundState, s: &str) {
        for c in s.chars() {
            round.on_char(c);
        }
    }

    #[test]
    fn test_starts_loading_then_answers_on_resolution() {
        let mut round = RoundState::new(Some(30));
        assert_eq!(round.phase(), RoundPhase::Loading);
        round.on_resolved(resolved_with(&["Ben Roethlisberger"]));
        assert_eq!(round.phase(), RoundPhase::Answering);
        assert_eq!(round.time_remaining(), Some(30));
    }

    #[test]
    fn test_resolution_failure_is_terminal() {
        let mut round = RoundState::new(Some(30));
        round.on_resolve_failed(ResolveError::RoundUnresolved {
            round_index: 0,
            attempts: 80,
        });
        assert_eq!(round.phase(), RoundPhase::Error);
        assert!(round.error().is_some());
        // Nothing else moves the round out of Error.
        round.on_resolved(resolved_with(&["X"]));
        round.tick();
        assert_eq!(round.phase(), RoundPhase::Error);
    }

    #[test]
    fn test_correct_submission() {
        let mut round = answering(&["Ben Roethlisberger"], None);
        type_answer(&mut round, "ben   roethlisberger");
        assert_eq!(round.submit(), Submission::Evaluated { is_correct: true });
        assert_eq!(round.phase(), RoundPhase::Feedback);
        let outcome = round.outcome().unwrap();
        assert!(outcome.is_correct);
        assert_eq!(outcome.user_answer, "ben   roethlisberger");
    }

    #[test]
    fn test_incorrect_submission() {
        let mut round = answering(&["Ben Roethlisberger"], None);
        type_answer(&mut round, "Mason Rudolph");
        assert_eq!(round.submit(), Submission::Evaluated { is_correct: false });
        assert!(!round.outcome().unwrap().is_correct);
    }

    #[test]
    fn test_empty_submission_rejected_without_consuming_round() {
        let mut round = answering(&["Ben Roethlisberger"], Some(30));
        assert_eq!(round.submit(), Submission::RejectedEmpty);
        type_answer(&mut round, "   ");
        assert_eq!(round.submit(), Submission::RejectedEmpty);
        assert_eq!(round.phase(), RoundPhase::Answering);
        assert!(round.outcome().is_none());
    }

    #[test]
    fn test_timer_expiry_is_an_automatic_incorrect_answer() {
        let mut round = answering(&["Ben Roethlisberger"], Some(3));
        round.tick();
        round.tick();
        assert_eq!(round.phase(), RoundPhase::Answering);
        round.tick();
        assert_eq!(round.phase(), RoundPhase::Feedback);
        let outcome = round.outcome().unwrap();
        assert_eq!(outcome.user_answer, "");
        assert!(!outcome.is_correct);
        assert_eq!(round.time_remaining(), Some(0));
    }

    #[test]
    fn test_at_most_one_transition_out_of_answering() {
        // Timer fires first; a racing submission is ignored.
        let mut round = answering(&["Ben Roethlisberger"], Some(1));
        type_answer(&mut round, "Ben Roethlisberger");
        round.tick();
        assert_eq!(round.phase(), RoundPhase::Feedback);
        assert!(!round.outcome().unwrap().is_correct);
        assert_eq!(round.submit(), Submission::Ignored);
        assert!(!round.outcome().unwrap().is_correct);

        // Submission first; a racing tick is ignored.
        let mut round = answering(&["Ben Roethlisberger"], Some(1));
        type_answer(&mut round, "Ben Roethlisberger");
        assert_eq!(round.submit(), Submission::Evaluated { is_correct: true });
        round.tick();
        let outcome = round.outcome().unwrap();
        assert!(outcome.is_correct, "late tick must not overwrite the outcome");
    }

    #[test]
    fn test_untimed_round_never_times_out() {
        let mut round = answering(&["Ben Roethlisberger"], None);
        for _ in 0..100 {
            round.tick();
        }
        assert_eq!(round.phase(), RoundPhase::Answering);
        assert_eq!(round.time_remaining(), None);
    }

    #[test]
    fn test_input_locked_outside_answering() {
        let mut round = RoundState::new(None);
        round.on_char('x');
        assert_eq!(round.input(), "");

        let mut round = answering(&["A"], None);
        type_answer(&mut round, "B");
        round.submit();
        round.on_char('x');
        round.on_backspace();
        assert_eq!(round.phase(), RoundPhase::Feedback);
    }

    #[test]
    fn test_stale_resolution_does_not_restart_a_finished_round() {
        let mut round = answering(&["Ben Roethlisberger"], Some(1));
        round.tick();
        assert_eq!(round.phase(), RoundPhase::Feedback);
        round.on_resolved(resolved_with(&["Someone Else"]));
        assert_eq!(round.phase(), RoundPhase::Feedback);
        assert_eq!(round.outcome().unwrap().accepted[0].name, "Ben Roethlisberger");
    }

    #[test]
    fn test_suffix_tolerant_matching_through_the_round() {
        let mut round = answering(&["Stefon Diggs", "Josh Allen Jr."], None);
        type_answer(&mut round, "Josh Allen");
        assert_eq!(round.submit(), Submission::Evaluated { is_correct: true });
    }

    #[test]
    fn test_outcome_accepted_list_is_rank_ordered() {
        let key = DateKey::parse("2024-01-15").unwrap();
        let primary = get_candidate(&key, 0, 0);
        let roster = StubRoster::empty().with(
            &primary.team,
            &primary.position,
            primary.year,
            &["Zed", "Abe"],
        );
        let resolved = resolve_round(&roster, &key, 0, MAX_RESOLVE_ATTEMPTS).unwrap();
        let mut round = RoundState::new(None);
        round.on_resolved(resolved);
        type_answer(&mut round, "nobody");
        round.submit();
        // Both unranked: stable order preserved.
        let accepted = &round.outcome().unwrap().accepted;
        assert_eq!(accepted[0].name, "Zed");
        assert_eq!(accepted[1].name, "Abe");
    }
}
