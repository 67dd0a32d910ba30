//! Game sessions: the daily challenge and the casual hot-seat game
//!
//! Sessions own round state machines and advance only through their
//! transition methods; there is no shared mutable game object. The daily
//! session also owns the stale-result guard: resolutions are tagged with a
//! generation and a delivery for an old generation is dropped on arrival.

use rand::prelude::*;

use super::daily::DateKey;
use super::resolve::{resolve_round, ResolveError, ResolvedRound, MAX_RESOLVE_ATTEMPTS};
use super::round::{RoundPhase, RoundState, Submission};
use super::RoundSpec;
use crate::roster::RosterLookup;
use crate::game::{
    DAILY_TIMER_SECONDS, DEFAULT_POSITION_GROUPS, DEFAULT_YEAR_MAX, DEFAULT_YEAR_MIN,
    NUM_DAILY_ROUNDS,
};

/// Retry budget for a casual spin that keeps landing on empty triples.
/// Unlike the daily resolver these retries are random, not deterministic.
const MAX_SPIN_RETRIES: u32 = 10;

/// A pending resolution request, tagged with the generation it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveRequest {
    pub date: DateKey,
    pub round_index: usize,
    generation: u64,
}

/// Single-player daily challenge: 10 deterministic rounds, 30s each.
pub struct DailySession {
    date: DateKey,
    player_name: String,
    round_index: usize,
    score: u32,
    round: RoundState,
    /// Bumped whenever the current round changes; stale deliveries are dropped.
    generation: u64,
    max_attempts: u32,
    complete: bool,
}

impl DailySession {
    pub fn new(date: DateKey, player_name: String) -> Self {
        DailySession {
            date,
            player_name,
            round_index: 0,
            score: 0,
            round: RoundState::new(Some(DAILY_TIMER_SECONDS)),
            generation: 0,
            max_attempts: MAX_RESOLVE_ATTEMPTS,
            complete: false,
        }
    }

    pub fn date(&self) -> &DateKey {
        &self.date
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn round_index(&self) -> usize {
        self.round_index
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// The resolution this session is waiting on, if any.
    pub fn pending_resolution(&self) -> Option<ResolveRequest> {
        (!self.complete && self.round.phase() == RoundPhase::Loading).then(|| ResolveRequest {
            date: self.date.clone(),
            round_index: self.round_index,
            generation: self.generation,
        })
    }

    /// Deliver a resolution result. A result carrying a stale generation
    /// (the round it was started for is gone) is discarded.
    pub fn apply_resolution(
        &mut self,
        request: &ResolveRequest,
        result: Result<ResolvedRound, ResolveError>,
    ) {
        if request.generation != self.generation {
            return;
        }
        match result {
            Ok(resolved) => self.round.on_resolved(resolved),
            Err(err) => self.round.on_resolve_failed(err),
        }
    }

    /// Resolve the current round synchronously against a lookup.
    /// Probing is strictly sequential inside [`resolve_round`].
    pub fn resolve_current(&mut self, lookup: &dyn RosterLookup) {
        if let Some(request) = self.pending_resolution() {
            let result = resolve_round(lookup, &request.date, request.round_index, self.max_attempts);
            self.apply_resolution(&request, result);
        }
    }

    pub fn on_char(&mut self, c: char) {
        self.round.on_char(c);
    }

    pub fn on_backspace(&mut self) {
        self.round.on_backspace();
    }

    /// Submit the typed answer; a correct one scores a point.
    pub fn submit(&mut self) -> Submission {
        let result = self.round.submit();
        if let Submission::Evaluated { is_correct: true } = result {
            self.score += 1;
        }
        result
    }

    /// One-second tick; a timeout ends the round with no point.
    pub fn tick(&mut self) {
        self.round.tick();
    }

    /// Leave feedback: move to the next round, or complete after the last.
    /// No-op unless the current round is finished.
    pub fn advance(&mut self) {
        if self.round.phase() != RoundPhase::Feedback {
            return;
        }
        self.generation += 1;
        if self.round_index + 1 >= NUM_DAILY_ROUNDS {
            self.complete = true;
        } else {
            self.round_index += 1;
            self.round = RoundState::new(Some(DAILY_TIMER_SECONDS));
        }
    }
}

/// How a casual game ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinCondition {
    /// First player to reach this score wins.
    TargetScore(u32),
    /// Play this many full rotations; highest score wins.
    FixedRounds(u32),
}

/// Difficulty tag recorded with casual leaderboard entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
        }
    }
}

/// Casual game settings chosen on the setup screen.
#[derive(Debug, Clone)]
pub struct CasualConfig {
    pub players: Vec<String>,
    pub position_groups: Vec<String>,
    pub year_min: u16,
    pub year_max: u16,
    pub timer_seconds: Option<u32>,
    pub win_condition: WinCondition,
    pub difficulty: Difficulty,
}

impl Default for CasualConfig {
    fn default() -> Self {
        CasualConfig {
            players: vec!["Player 1".to_string()],
            position_groups: DEFAULT_POSITION_GROUPS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            year_min: DEFAULT_YEAR_MIN,
            year_max: DEFAULT_YEAR_MAX,
            timer_seconds: None,
            win_condition: WinCondition::TargetScore(10),
            difficulty: Difficulty::Easy,
        }
    }
}

/// A casual spin found no triple with data within its retry budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinError {
    pub retries: u32,
}

impl std::fmt::Display for SpinError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "no players found after {} spins", self.retries)
    }
}

impl std::error::Error for SpinError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerEntry {
    pub name: String,
    pub score: u32,
}

/// Multiplayer hot-seat "Luck of the Draw": players take turns spinning a
/// random (team, position group, year) and naming a player.
pub struct CasualSession {
    config: CasualConfig,
    teams: Vec<String>,
    players: Vec<PlayerEntry>,
    current_player: usize,
    rounds_completed: u32,
    round: Option<RoundState>,
    ended: bool,
}

impl CasualSession {
    /// `teams` is the wheel's team list, usually the catalog from storage
    /// with the fixed fallback behind it. An empty player list gets the
    /// default single player so rotation always has someone to land on.
    pub fn new(mut config: CasualConfig, teams: Vec<String>) -> Self {
        if config.players.is_empty() {
            config.players = CasualConfig::default().players;
        }
        let players = config
            .players
            .iter()
            .map(|name| PlayerEntry {
                name: name.clone(),
                score: 0,
            })
            .collect();
        CasualSession {
            config,
            teams,
            players,
            current_player: 0,
            rounds_completed: 0,
            round: None,
            ended: false,
        }
    }

    pub fn players(&self) -> &[PlayerEntry] {
        &self.players
    }

    pub fn current_player(&self) -> &PlayerEntry {
        &self.players[self.current_player]
    }

    pub fn rounds_completed(&self) -> u32 {
        self.rounds_completed
    }

    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    pub fn config(&self) -> &CasualConfig {
        &self.config
    }

    pub fn is_single_player(&self) -> bool {
        self.players.len() == 1
    }

    /// True between rounds, when the current player may spin.
    pub fn can_spin(&self) -> bool {
        !self.ended && self.round.is_none()
    }

    /// Spin the wheel: pick a random triple from the configured domains and
    /// look up its players, retrying a bounded number of times on empty
    /// triples. Lookup errors count as empty spins.
    pub fn spin(&mut self, lookup: &dyn RosterLookup) -> Result<(), SpinError> {
        self.spin_with_rng(lookup, &mut rand::rng())
    }

    /// Spin with a caller-supplied RNG (for testing/seeding).
    pub fn spin_with_rng<R: Rng>(
        &mut self,
        lookup: &dyn RosterLookup,
        rng: &mut R,
    ) -> Result<(), SpinError> {
        if !self.can_spin() {
            return Ok(());
        }
        for _ in 0..MAX_SPIN_RETRIES {
            let spec = self.random_spec(rng);
            let answers = lookup
                .players_for_round(&spec.team, &spec.position, spec.year)
                .unwrap_or_default();
            if let Some(resolved) = ResolvedRound::from_parts(spec, answers) {
                let mut round = RoundState::new(self.config.timer_seconds);
                round.on_resolved(resolved);
                self.round = Some(round);
                return Ok(());
            }
        }
        Err(SpinError {
            retries: MAX_SPIN_RETRIES,
        })
    }

    fn random_spec<R: Rng>(&self, rng: &mut R) -> RoundSpec {
        let team = self
            .teams
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| "ARI".to_string());
        let position = self
            .config
            .position_groups
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| "QB".to_string());
        let year = rng.random_range(self.config.year_min..=self.config.year_max);
        RoundSpec {
            team,
            position,
            year,
        }
    }

    pub fn on_char(&mut self, c: char) {
        if let Some(round) = &mut self.round {
            round.on_char(c);
        }
    }

    pub fn on_backspace(&mut self) {
        if let Some(round) = &mut self.round {
            round.on_backspace();
        }
    }

    /// Submit the current player's answer; correct scores a point.
    pub fn submit(&mut self) -> Submission {
        let Some(round) = &mut self.round else {
            return Submission::Ignored;
        };
        let result = round.submit();
        if let Submission::Evaluated { is_correct: true } = result {
            self.players[self.current_player].score += 1;
        }
        result
    }

    pub fn tick(&mut self) {
        if let Some(round) = &mut self.round {
            round.tick();
        }
    }

    /// Leave feedback: rotate to the next player (completing a full round
    /// when the rotation wraps) and check the win condition.
    pub fn advance(&mut self) {
        let finished = self
            .round
            .as_ref()
            .is_some_and(|r| r.phase() == RoundPhase::Feedback);
        if !finished {
            return;
        }
        self.round = None;
        self.current_player = (self.current_player + 1) % self.players.len();
        if self.current_player == 0 {
            self.rounds_completed += 1;
        }
        if self.winner().is_some() {
            self.ended = true;
        }
    }

    /// The winner under the configured condition, if the game is decided.
    /// Fixed-round ties go to the earlier player in turn order.
    pub fn winner(&self) -> Option<&PlayerEntry> {
        match self.config.win_condition {
            WinCondition::TargetScore(target) => {
                self.players.iter().find(|p| p.score >= target)
            }
            WinCondition::FixedRounds(rounds) => {
                if self.rounds_completed < rounds {
                    return None;
                }
                let best = self.players.iter().map(|p| p.score).max()?;
                self.players.iter().find(|p| p.score == best)
            }
        }
    }

    pub fn is_over(&self) -> bool {
        self.ended
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::daily::generate_daily_rounds;
    use crate::game::resolve::get_candidate;
    use crate::roster::{Candidate, StubRoster};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn key() -> DateKey {
        DateKey::parse("2024-01-15").unwrap()
    }

    /// A roster with data for every primary daily round of the fixed date.
    fn full_daily_roster() -> StubRoster {
        let mut roster = StubRoster::empty();
        for spec in generate_daily_rounds(&key()) {
            roster = roster.with(&spec.team, &spec.position, spec.year, &["Right Answer"]);
        }
        roster
    }

    fn answer(session: &mut DailySession, text: &str) -> Submission {
        for c in text.chars() {
            session.on_char(c);
        }
        session.submit()
    }

    #[test]
    fn test_daily_session_plays_ten_rounds() {
        let roster = full_daily_roster();
        let mut session = DailySession::new(key(), "Pat".into());
        for i in 0..NUM_DAILY_ROUNDS {
            assert_eq!(session.round_index(), i);
            session.resolve_current(&roster);
            assert_eq!(session.round().phase(), RoundPhase::Answering);
            answer(&mut session, "Right Answer");
            session.advance();
        }
        assert!(session.is_complete());
        assert_eq!(session.score(), 10);
    }

    #[test]
    fn test_daily_session_scores_only_correct_answers() {
        let roster = full_daily_roster();
        let mut session = DailySession::new(key(), "Pat".into());
        session.resolve_current(&roster);
        answer(&mut session, "Wrong Answer");
        session.advance();
        session.resolve_current(&roster);
        answer(&mut session, "Right Answer");
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn test_daily_timeout_scores_nothing() {
        let roster = full_daily_roster();
        let mut session = DailySession::new(key(), "Pat".into());
        session.resolve_current(&roster);
        for _ in 0..DAILY_TIMER_SECONDS {
            session.tick();
        }
        assert_eq!(session.round().phase(), RoundPhase::Feedback);
        assert_eq!(session.score(), 0);
        assert_eq!(session.round().outcome().unwrap().user_answer, "");
    }

    #[test]
    fn test_daily_resolution_failure_halts_the_session() {
        let roster = StubRoster::empty();
        let mut session = DailySession::new(key(), "Pat".into());
        session.resolve_current(&roster);
        assert_eq!(session.round().phase(), RoundPhase::Error);
        // Feedback never arrives, so advance is a no-op.
        session.advance();
        assert_eq!(session.round_index(), 0);
        assert!(!session.is_complete());
    }

    #[test]
    fn test_stale_resolution_is_discarded() {
        let roster = full_daily_roster();
        let mut session = DailySession::new(key(), "Pat".into());
        let stale = session.pending_resolution().unwrap();

        // The round resolves and finishes; the session moves on.
        session.resolve_current(&roster);
        answer(&mut session, "Right Answer");
        session.advance();
        assert_eq!(session.round_index(), 1);

        // The old request's result arrives late: dropped.
        let spec = get_candidate(&key(), 0, 0);
        let late = ResolvedRound::from_parts(spec, vec![Candidate::named("Ghost")]).unwrap();
        session.apply_resolution(&stale, Ok(late));
        assert_eq!(session.round().phase(), RoundPhase::Loading);
    }

    #[test]
    fn test_pending_resolution_only_while_loading() {
        let roster = full_daily_roster();
        let mut session = DailySession::new(key(), "Pat".into());
        assert!(session.pending_resolution().is_some());
        session.resolve_current(&roster);
        assert!(session.pending_resolution().is_none());
    }

    fn casual_roster() -> StubRoster {
        let mut roster = StubRoster::empty();
        for team in ["ARI", "KC"] {
            for group in ["QB", "RB", "WR", "TE"] {
                for year in 2000..=2025 {
                    roster = roster.with(team, group, year, &["Casual Answer"]);
                }
            }
        }
        roster
    }

    fn casual_answer(session: &mut CasualSession, text: &str) -> Submission {
        for c in text.chars() {
            session.on_char(c);
        }
        session.submit()
    }

    #[test]
    fn test_casual_rotation_and_round_counting() {
        let config = CasualConfig {
            players: vec!["Alice".into(), "Bob".into()],
            ..CasualConfig::default()
        };
        let mut session = CasualSession::new(config, vec!["KC".into()]);
        let roster = casual_roster();
        let mut rng = StdRng::seed_from_u64(42);

        assert_eq!(session.current_player().name, "Alice");
        session.spin_with_rng(&roster, &mut rng).unwrap();
        casual_answer(&mut session, "Casual Answer");
        session.advance();

        assert_eq!(session.current_player().name, "Bob");
        assert_eq!(session.rounds_completed(), 0);
        session.spin_with_rng(&roster, &mut rng).unwrap();
        casual_answer(&mut session, "wrong");
        session.advance();

        assert_eq!(session.current_player().name, "Alice");
        assert_eq!(session.rounds_completed(), 1);
        assert_eq!(session.players()[0].score, 1);
        assert_eq!(session.players()[1].score, 0);
    }

    #[test]
    fn test_casual_empty_player_list_gets_default_player() {
        let config = CasualConfig {
            players: Vec::new(),
            ..CasualConfig::default()
        };
        let mut session = CasualSession::new(config, vec!["KC".into()]);
        assert_eq!(session.current_player().name, "Player 1");

        // Rotation must come back around to the lone player.
        let roster = casual_roster();
        let mut rng = StdRng::seed_from_u64(11);
        session.spin_with_rng(&roster, &mut rng).unwrap();
        casual_answer(&mut session, "Casual Answer");
        session.advance();
        assert_eq!(session.current_player().name, "Player 1");
        assert_eq!(session.rounds_completed(), 1);
    }

    #[test]
    fn test_casual_target_score_win() {
        let config = CasualConfig {
            players: vec!["Alice".into()],
            win_condition: WinCondition::TargetScore(2),
            ..CasualConfig::default()
        };
        let mut session = CasualSession::new(config, vec!["KC".into()]);
        let roster = casual_roster();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..2 {
            assert!(session.winner().is_none());
            session.spin_with_rng(&roster, &mut rng).unwrap();
            casual_answer(&mut session, "Casual Answer");
            session.advance();
        }
        assert_eq!(session.winner().unwrap().name, "Alice");
        assert!(session.is_over());
        assert!(!session.can_spin());
    }

    #[test]
    fn test_casual_fixed_rounds_highest_score_wins() {
        let config = CasualConfig {
            players: vec!["Alice".into(), "Bob".into()],
            win_condition: WinCondition::FixedRounds(1),
            ..CasualConfig::default()
        };
        let mut session = CasualSession::new(config, vec!["ARI".into()]);
        let roster = casual_roster();
        let mut rng = StdRng::seed_from_u64(3);

        session.spin_with_rng(&roster, &mut rng).unwrap();
        casual_answer(&mut session, "wrong");
        session.advance();
        assert!(session.winner().is_none(), "rotation not complete yet");

        session.spin_with_rng(&roster, &mut rng).unwrap();
        casual_answer(&mut session, "Casual Answer");
        session.advance();

        assert_eq!(session.winner().unwrap().name, "Bob");
    }

    #[test]
    fn test_casual_fixed_rounds_tie_goes_to_turn_order() {
        let config = CasualConfig {
            players: vec!["Alice".into(), "Bob".into()],
            win_condition: WinCondition::FixedRounds(1),
            ..CasualConfig::default()
        };
        let mut session = CasualSession::new(config, vec!["ARI".into()]);
        let roster = casual_roster();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..2 {
            session.spin_with_rng(&roster, &mut rng).unwrap();
            casual_answer(&mut session, "wrong");
            session.advance();
        }
        assert_eq!(session.winner().unwrap().name, "Alice");
    }

    #[test]
    fn test_spin_exhausts_retries_on_empty_roster() {
        let config = CasualConfig::default();
        let mut session = CasualSession::new(config, vec!["KC".into()]);
        let roster = StubRoster::empty();
        let mut rng = StdRng::seed_from_u64(1);
        let err = session.spin_with_rng(&roster, &mut rng).unwrap_err();
        assert_eq!(err.retries, MAX_SPIN_RETRIES);
        assert!(session.round().is_none());
    }

    #[test]
    fn test_spin_respects_configured_domains() {
        let config = CasualConfig {
            position_groups: vec!["TE".into()],
            year_min: 2015,
            year_max: 2015,
            ..CasualConfig::default()
        };
        let mut session = CasualSession::new(config, vec!["KC".into()]);
        let roster = StubRoster::empty().with("KC", "TE", 2015, &["Travis Kelce"]);
        let mut rng = StdRng::seed_from_u64(5);
        session.spin_with_rng(&roster, &mut rng).unwrap();
        let spec = &session.round().unwrap().resolved().unwrap().spec;
        assert_eq!(spec.team, "KC");
        assert_eq!(spec.position, "TE");
        assert_eq!(spec.year, 2015);
    }

    #[test]
    fn test_untimed_casual_round_waits_for_submission() {
        let config = CasualConfig::default();
        let mut session = CasualSession::new(config, vec!["KC".into()]);
        let roster = casual_roster();
        let mut rng = StdRng::seed_from_u64(9);
        session.spin_with_rng(&roster, &mut rng).unwrap();
        for _ in 0..1000 {
            session.tick();
        }
        assert_eq!(session.round().unwrap().phase(), RoundPhase::Answering);
    }
}
