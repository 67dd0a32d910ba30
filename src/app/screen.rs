//! Application screen state management
//!
//! Handles transitions between screens:
//! - Main menu
//! - Daily challenge name entry, play, and results
//! - Casual game setup, play, and results
//! - Leaderboards
//!
//! All game state lives in session values owned by the current screen and
//! advances only through session transition methods.

use crate::game::daily::DateKey;
use crate::game::round::RoundPhase;
use crate::game::session::{
    CasualConfig, CasualSession, DailySession, Difficulty, PlayerEntry, WinCondition,
};
use crate::game::{DAILY_TIMER_SECONDS, DEFAULT_POSITION_GROUPS, POSITION_GROUPS};
use crate::storage::{CasualScore, DailyScore, Storage};

/// Rows fetched for leaderboard screens.
const BOARD_LIMIT: u32 = 20;

/// Bounds for the casual goal (target score or round count).
const GOAL_MIN: u32 = 1;
const GOAL_MAX: u32 = 20;

/// Menu option on the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    DailyChallenge,
    CasualGame,
    Leaderboards,
    Quit,
}

impl MenuOption {
    /// All menu options in order
    pub fn all() -> &'static [MenuOption] {
        &[
            MenuOption::DailyChallenge,
            MenuOption::CasualGame,
            MenuOption::Leaderboards,
            MenuOption::Quit,
        ]
    }

    /// Display label for this option
    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::DailyChallenge => "Daily Challenge",
            MenuOption::CasualGame => "Casual Game",
            MenuOption::Leaderboards => "Leaderboards",
            MenuOption::Quit => "Quit",
        }
    }
}

/// Which control on the casual setup screen has focus (Tab cycles).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupFocus {
    Names,
    Groups,
    Timer,
    Goal,
}

impl SetupFocus {
    fn next(self) -> Self {
        match self {
            SetupFocus::Names => SetupFocus::Groups,
            SetupFocus::Groups => SetupFocus::Timer,
            SetupFocus::Timer => SetupFocus::Goal,
            SetupFocus::Goal => SetupFocus::Names,
        }
    }
}

/// The current application screen
pub enum Screen {
    /// Main menu
    Menu {
        selected: usize,
        handle: String,
        handle_input: String,
        editing_handle: bool,
    },
    /// Daily challenge: enter first/last name, once per Eastern day
    DailyName {
        first: String,
        last: String,
        editing_last: bool,
        error: Option<String>,
    },
    /// Playing the daily challenge
    DailyPlaying { session: DailySession },
    /// Daily challenge finished: score plus that day's board
    DailyResults {
        player_name: String,
        date: DateKey,
        score: u32,
        board: Vec<DailyScore>,
        save_error: Option<String>,
    },
    /// Casual game setup: players, position groups, timer, goal
    CasualSetup {
        name_input: String,
        players: Vec<String>,
        /// Enabled flags parallel to [`POSITION_GROUPS`].
        groups: Vec<bool>,
        group_cursor: usize,
        timed: bool,
        /// false: first to `goal` points; true: `goal` full rotations.
        fixed_rounds: bool,
        goal: u32,
        focus: SetupFocus,
    },
    /// Playing a casual game
    CasualPlaying { session: CasualSession },
    /// Casual game over
    CasualResults {
        winner_name: String,
        players: Vec<PlayerEntry>,
        save_error: Option<String>,
    },
    /// Leaderboards: daily boards by day (newest first) and the casual board
    Boards {
        dates: Vec<DateKey>,
        selected: usize,
        daily: Vec<DailyScore>,
        casual: Vec<CasualScore>,
    },
    /// Blocking error
    Error { message: String },
}

impl Screen {
    fn casual_setup() -> Self {
        // QB/RB/WR/TE start enabled, matching the default group set.
        let groups = POSITION_GROUPS
            .iter()
            .map(|(id, _)| DEFAULT_POSITION_GROUPS.contains(id))
            .collect();
        Screen::CasualSetup {
            name_input: String::new(),
            players: Vec::new(),
            groups,
            group_cursor: 0,
            timed: false,
            fixed_rounds: false,
            goal: 10,
            focus: SetupFocus::Names,
        }
    }
}

/// Main application coordinator
pub struct AppCoordinator {
    storage: Storage,
    /// Current screen
    pub screen: Screen,
    /// Whether the application should quit
    pub should_quit: bool,
}

impl AppCoordinator {
    /// Create a coordinator starting at the menu. The handle is restored
    /// from storage when one was saved on a previous run.
    pub fn new(storage: Storage) -> Self {
        let handle = storage
            .handle()
            .ok()
            .flatten()
            .unwrap_or_else(|| "Player".to_string());
        AppCoordinator {
            storage,
            screen: Screen::Menu {
                selected: 0,
                handle: handle.clone(),
                handle_input: handle,
                editing_handle: false,
            },
            should_quit: false,
        }
    }

    /// Go back to the main menu, dropping any in-progress game.
    pub fn go_to_menu(&mut self) {
        let handle = self.current_handle();
        self.screen = Screen::Menu {
            selected: 0,
            handle: handle.clone(),
            handle_input: handle,
            editing_handle: false,
        };
    }

    fn current_handle(&self) -> String {
        match &self.screen {
            Screen::Menu { handle, .. } => handle.clone(),
            _ => self
                .storage
                .handle()
                .ok()
                .flatten()
                .unwrap_or_else(|| "Player".to_string()),
        }
    }

    /// One-second tick, forwarded to whichever session is running.
    pub fn tick(&mut self) {
        match &mut self.screen {
            Screen::DailyPlaying { session } => session.tick(),
            Screen::CasualPlaying { session } => session.tick(),
            _ => {}
        }
    }

    pub fn on_up(&mut self) {
        match &mut self.screen {
            Screen::Menu {
                selected,
                editing_handle,
                ..
            } => {
                if !*editing_handle && *selected > 0 {
                    *selected -= 1;
                }
            }
            Screen::CasualSetup {
                group_cursor,
                timed,
                goal,
                focus,
                ..
            } => match focus {
                SetupFocus::Groups => {
                    if *group_cursor > 0 {
                        *group_cursor -= 1;
                    }
                }
                SetupFocus::Timer => *timed = !*timed,
                SetupFocus::Goal => {
                    if *goal < GOAL_MAX {
                        *goal += 1;
                    }
                }
                SetupFocus::Names => {}
            },
            Screen::Boards { .. } => self.boards_select_newer(),
            _ => {}
        }
    }

    pub fn on_down(&mut self) {
        match &mut self.screen {
            Screen::Menu {
                selected,
                editing_handle,
                ..
            } => {
                if !*editing_handle && *selected < MenuOption::all().len() - 1 {
                    *selected += 1;
                }
            }
            Screen::CasualSetup {
                group_cursor,
                timed,
                goal,
                focus,
                ..
            } => match focus {
                SetupFocus::Groups => {
                    if *group_cursor + 1 < POSITION_GROUPS.len() {
                        *group_cursor += 1;
                    }
                }
                SetupFocus::Timer => *timed = !*timed,
                SetupFocus::Goal => {
                    if *goal > GOAL_MIN {
                        *goal -= 1;
                    }
                }
                SetupFocus::Names => {}
            },
            Screen::Boards { .. } => self.boards_select_older(),
            _ => {}
        }
    }

    pub fn on_char(&mut self, c: char) {
        match &mut self.screen {
            Screen::Menu {
                handle_input,
                editing_handle,
                ..
            } => {
                if *editing_handle && handle_input.len() < 24 {
                    handle_input.push(c);
                }
            }
            Screen::DailyName {
                first,
                last,
                editing_last,
                error,
            } => {
                let field = if *editing_last { last } else { first };
                if field.len() < 40 {
                    field.push(c);
                    *error = None;
                }
            }
            Screen::CasualSetup {
                name_input, focus, ..
            } => {
                if *focus == SetupFocus::Names && name_input.len() < 40 {
                    name_input.push(c);
                }
            }
            Screen::DailyPlaying { session } => session.on_char(c),
            Screen::CasualPlaying { session } => session.on_char(c),
            _ => {}
        }
    }

    pub fn on_backspace(&mut self) {
        match &mut self.screen {
            Screen::Menu {
                handle_input,
                editing_handle,
                ..
            } => {
                if *editing_handle {
                    handle_input.pop();
                }
            }
            Screen::DailyName {
                first,
                last,
                editing_last,
                ..
            } => {
                let field = if *editing_last { last } else { first };
                field.pop();
            }
            Screen::CasualSetup {
                name_input, focus, ..
            } => {
                if *focus == SetupFocus::Names {
                    name_input.pop();
                }
            }
            Screen::DailyPlaying { session } => session.on_backspace(),
            Screen::CasualPlaying { session } => session.on_backspace(),
            _ => {}
        }
    }

    /// Tab toggles handle editing on the menu, moves between the daily
    /// name fields, and cycles focus on the casual setup screen.
    pub fn on_tab(&mut self) {
        match &mut self.screen {
            Screen::Menu {
                handle,
                handle_input,
                editing_handle,
                ..
            } => {
                if *editing_handle {
                    if !handle_input.is_empty() {
                        *handle = handle_input.clone();
                        let _ = self.storage.set_handle(handle);
                    } else {
                        *handle_input = handle.clone();
                    }
                    *editing_handle = false;
                } else {
                    *editing_handle = true;
                }
            }
            Screen::DailyName { editing_last, .. } => {
                *editing_last = !*editing_last;
            }
            Screen::CasualSetup { focus, .. } => {
                *focus = focus.next();
            }
            _ => {}
        }
    }

    pub fn on_esc(&mut self) {
        match &self.screen {
            Screen::Menu { .. } => self.should_quit = true,
            _ => self.go_to_menu(),
        }
    }

    pub fn on_enter(&mut self) {
        match &mut self.screen {
            Screen::Menu { .. } => self.menu_select(),
            Screen::DailyName { .. } => self.daily_name_enter(),
            Screen::DailyPlaying { .. } => self.daily_enter(),
            Screen::CasualSetup { .. } => self.casual_setup_enter(),
            Screen::CasualPlaying { .. } => self.casual_enter(),
            Screen::DailyResults { .. }
            | Screen::CasualResults { .. }
            | Screen::Boards { .. }
            | Screen::Error { .. } => self.go_to_menu(),
        }
    }

    fn menu_select(&mut self) {
        let Screen::Menu {
            selected,
            handle,
            handle_input,
            editing_handle,
        } = &mut self.screen
        else {
            return;
        };
        if *editing_handle {
            // Finish editing instead of selecting.
            if !handle_input.is_empty() {
                *handle = handle_input.clone();
                let _ = self.storage.set_handle(handle);
            } else {
                *handle_input = handle.clone();
            }
            *editing_handle = false;
            return;
        }
        let selected = *selected;

        match MenuOption::all()[selected] {
            MenuOption::DailyChallenge => {
                self.screen = Screen::DailyName {
                    first: String::new(),
                    last: String::new(),
                    editing_last: false,
                    error: None,
                };
            }
            MenuOption::CasualGame => {
                self.screen = Screen::casual_setup();
            }
            MenuOption::Leaderboards => self.open_boards(),
            MenuOption::Quit => self.should_quit = true,
        }
    }

    fn open_boards(&mut self) {
        let dates = match self.storage.daily_dates() {
            Ok(dates) if dates.is_empty() => vec![DateKey::today()],
            Ok(dates) => dates,
            Err(e) => {
                self.screen = Screen::Error {
                    message: format!("Could not load leaderboards: {}", e),
                };
                return;
            }
        };
        let daily = self.storage.daily_top(&dates[0], BOARD_LIMIT);
        let casual = self.storage.top_casual_scores(BOARD_LIMIT, Difficulty::Easy.as_str());
        match (daily, casual) {
            (Ok(daily), Ok(casual)) => {
                self.screen = Screen::Boards {
                    dates,
                    selected: 0,
                    daily,
                    casual,
                };
            }
            (Err(e), _) | (_, Err(e)) => {
                self.screen = Screen::Error {
                    message: format!("Could not load leaderboards: {}", e),
                };
            }
        }
    }

    fn boards_select_newer(&mut self) {
        if let Screen::Boards { selected, .. } = &self.screen {
            let selected = *selected;
            if selected > 0 {
                self.boards_select(selected - 1);
            }
        }
    }

    fn boards_select_older(&mut self) {
        if let Screen::Boards { dates, selected, .. } = &self.screen {
            let (selected, count) = (*selected, dates.len());
            if selected + 1 < count {
                self.boards_select(selected + 1);
            }
        }
    }

    fn boards_select(&mut self, index: usize) {
        let Screen::Boards { dates, .. } = &self.screen else {
            return;
        };
        let date = dates[index].clone();
        match self.storage.daily_top(&date, BOARD_LIMIT) {
            Ok(board) => {
                if let Screen::Boards {
                    selected, daily, ..
                } = &mut self.screen
                {
                    *selected = index;
                    *daily = board;
                }
            }
            Err(e) => {
                self.screen = Screen::Error {
                    message: format!("Could not load leaderboards: {}", e),
                };
            }
        }
    }

    fn daily_name_enter(&mut self) {
        let Screen::DailyName {
            first,
            last,
            editing_last,
            error,
        } = &mut self.screen
        else {
            return;
        };
        if !*editing_last {
            *editing_last = true;
            return;
        }
        let full = format!("{} {}", first.trim(), last.trim())
            .trim()
            .to_string();
        if full.is_empty() {
            return;
        }
        let date = DateKey::today();
        match self.storage.has_played_daily(&date, &full) {
            Ok(true) => {
                *error = Some(
                    "This name has already played today's challenge. \
                     Each player can only play once per day."
                        .to_string(),
                );
            }
            Ok(false) => {
                let mut session = DailySession::new(date, full);
                session.resolve_current(&self.storage);
                self.screen = Screen::DailyPlaying { session };
            }
            Err(e) => {
                *error = Some(format!("Could not check the leaderboard: {}", e));
            }
        }
    }

    fn daily_enter(&mut self) {
        let Screen::DailyPlaying { session } = &mut self.screen else {
            return;
        };
        match session.round().phase() {
            RoundPhase::Answering => {
                session.submit();
            }
            RoundPhase::Feedback => {
                session.advance();
                if session.is_complete() {
                    self.finish_daily();
                } else if let Screen::DailyPlaying { session } = &mut self.screen {
                    session.resolve_current(&self.storage);
                }
            }
            RoundPhase::Error => self.go_to_menu(),
            RoundPhase::Loading => {}
        }
    }

    fn finish_daily(&mut self) {
        let Screen::DailyPlaying { session } = &self.screen else {
            return;
        };
        let player_name = session.player_name().to_string();
        let date = session.date().clone();
        let score = session.score();

        let save_error = self
            .storage
            .submit_daily_score(&date, &player_name, score)
            .err()
            .map(|e| format!("Could not save score: {}", e));
        let board = self.storage.daily_top(&date, BOARD_LIMIT).unwrap_or_default();

        self.screen = Screen::DailyResults {
            player_name,
            date,
            score,
            board,
            save_error,
        };
    }

    fn casual_setup_enter(&mut self) {
        let Screen::CasualSetup {
            name_input,
            players,
            groups,
            group_cursor,
            timed,
            fixed_rounds,
            goal,
            focus,
        } = &mut self.screen
        else {
            return;
        };
        match focus {
            SetupFocus::Groups => {
                groups[*group_cursor] = !groups[*group_cursor];
                return;
            }
            SetupFocus::Timer => {
                *timed = !*timed;
                return;
            }
            SetupFocus::Goal => {
                *fixed_rounds = !*fixed_rounds;
                return;
            }
            SetupFocus::Names => {}
        }
        let name = name_input.trim().to_string();
        if !name.is_empty() {
            players.push(name);
            name_input.clear();
            return;
        }
        if players.is_empty() {
            return;
        }

        let position_groups: Vec<String> = POSITION_GROUPS
            .iter()
            .zip(groups.iter())
            .filter(|(_, on)| **on)
            .map(|((id, _), _)| id.to_string())
            .collect();
        let position_groups = if position_groups.is_empty() {
            DEFAULT_POSITION_GROUPS.iter().map(|s| s.to_string()).collect()
        } else {
            position_groups
        };
        // Anything beyond the default skill groups bumps the difficulty tag.
        let difficulty = if position_groups
            .iter()
            .all(|g| DEFAULT_POSITION_GROUPS.contains(&g.as_str()))
        {
            Difficulty::Easy
        } else {
            Difficulty::Medium
        };
        let win_condition = if *fixed_rounds {
            WinCondition::FixedRounds(*goal)
        } else {
            WinCondition::TargetScore(*goal)
        };
        let config = CasualConfig {
            players: players.clone(),
            position_groups,
            timer_seconds: timed.then_some(DAILY_TIMER_SECONDS),
            win_condition,
            difficulty,
            ..CasualConfig::default()
        };
        let teams = self.storage.team_catalog();
        self.screen = Screen::CasualPlaying {
            session: CasualSession::new(config, teams),
        };
    }

    fn casual_enter(&mut self) {
        let Screen::CasualPlaying { session } = &mut self.screen else {
            return;
        };
        if session.can_spin() {
            if let Err(e) = session.spin(&self.storage) {
                self.screen = Screen::Error {
                    message: format!("Spin failed: {}. Try different settings.", e),
                };
            }
            return;
        }
        match session.round().map(|r| r.phase()) {
            Some(RoundPhase::Answering) => {
                session.submit();
            }
            Some(RoundPhase::Feedback) => {
                session.advance();
                if session.is_over() {
                    self.finish_casual();
                }
            }
            _ => {}
        }
    }

    fn finish_casual(&mut self) {
        let Screen::CasualPlaying { session } = &self.screen else {
            return;
        };
        let Some(winner) = session.winner() else {
            return;
        };
        let winner_name = winner.name.clone();
        let players = session.players().to_vec();

        let save_error = if session.is_single_player() {
            let rounds = session.rounds_completed();
            self.storage
                .save_casual_score(
                    &winner_name,
                    winner.score,
                    rounds,
                    rounds,
                    session.config().difficulty.as_str(),
                )
                .err()
                .map(|e| format!("Could not save score: {}", e))
        } else {
            None
        };

        self.screen = Screen::CasualResults {
            winner_name,
            players,
            save_error,
        };
    }
}
