//! UI rendering using ratatui
//!
//! Supports multiple screens:
//! - Menu: Main menu with options
//! - DailyName: Name entry for the daily challenge
//! - DailyPlaying / CasualPlaying: In-game question card
//! - DailyResults / CasualResults: Final score and standings
//! - Boards: Daily and casual leaderboards
//! - Error: Error message display

use crate::app::{AppCoordinator, MenuOption, Screen, SetupFocus};
use crate::game::daily::DateKey;
use crate::game::round::{RoundPhase, RoundState};
use crate::game::session::PlayerEntry;
use crate::game::{team_display_name, NUM_DAILY_ROUNDS, POSITION_GROUPS};
use crate::storage::{CasualScore, DailyScore};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

/// Render the appropriate screen based on app state
pub fn render(frame: &mut Frame, coordinator: &AppCoordinator) {
    match &coordinator.screen {
        Screen::Menu {
            selected,
            handle,
            handle_input,
            editing_handle,
        } => {
            render_menu(frame, *selected, handle, handle_input, *editing_handle);
        }
        Screen::DailyName {
            first,
            last,
            editing_last,
            error,
        } => {
            render_daily_name(frame, first, last, *editing_last, error.as_deref());
        }
        Screen::DailyPlaying { session } => {
            let header = format!(
                "Round {}/{}  ·  {}",
                session.round_index() + 1,
                NUM_DAILY_ROUNDS,
                session.date()
            );
            render_round(frame, &header, session.player_name(), session.score(), session.round());
        }
        Screen::DailyResults {
            player_name,
            date,
            score,
            board,
            save_error,
        } => {
            render_daily_results(frame, player_name, date.as_str(), *score, board, save_error.as_deref());
        }
        Screen::CasualSetup {
            name_input,
            players,
            groups,
            group_cursor,
            timed,
            fixed_rounds,
            goal,
            focus,
        } => {
            render_casual_setup(
                frame,
                name_input,
                players,
                groups,
                *group_cursor,
                *timed,
                *fixed_rounds,
                *goal,
                *focus,
            );
        }
        Screen::CasualPlaying { session } => {
            let player = session.current_player();
            let header = format!("Round {}  ·  {}'s turn", session.rounds_completed() + 1, player.name);
            match session.round() {
                Some(round) => {
                    render_round(frame, &header, &player.name, player.score, round);
                }
                None => render_spin_prompt(frame, &header, session.players()),
            }
        }
        Screen::CasualResults {
            winner_name,
            players,
            save_error,
        } => {
            render_casual_results(frame, winner_name, players, save_error.as_deref());
        }
        Screen::Boards {
            dates,
            selected,
            daily,
            casual,
        } => {
            render_boards(frame, dates, *selected, daily, casual);
        }
        Screen::Error { message } => {
            render_error(frame, message);
        }
    }
}

/// Render the main menu
fn render_menu(
    frame: &mut Frame,
    selected: usize,
    handle: &str,
    handle_input: &str,
    editing_handle: bool,
) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Logo
            Constraint::Length(3), // Handle input
            Constraint::Length(1), // Spacer
            Constraint::Min(6),    // Menu options
            Constraint::Length(2), // Footer
        ])
        .margin(2)
        .split(area);

    let logo = r#"
 ____ ___ ____ ____  _  _____ _   _
|  _ \_ _/ ___/ ___|| |/ /_ _| \ | |
| |_) | | |  _\___ \| ' / | ||  \| |
|  __/| | |_| |___) | . \ | || |\  |
|_|  |___\____|____/|_|\_\___|_| \_|
"#;
    let logo_widget = Paragraph::new(logo)
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center);
    frame.render_widget(logo_widget, layout[0]);

    let handle_display = if editing_handle {
        format!("Handle: [{}]_", handle_input)
    } else {
        format!("Handle: {} (Tab to edit)", handle)
    };
    let handle_style = if editing_handle {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let handle_widget = Paragraph::new(handle_display)
        .style(handle_style)
        .alignment(Alignment::Center);
    frame.render_widget(handle_widget, layout[1]);

    let items: Vec<ListItem> = MenuOption::all()
        .iter()
        .enumerate()
        .map(|(i, opt)| {
            let style = if i == selected {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::White)
            };
            let prefix = if i == selected { "> " } else { "  " };
            ListItem::new(format!("{}{}", prefix, opt.label())).style(style)
        })
        .collect();

    let menu = List::new(items).block(Block::default());
    frame.render_widget(menu, layout[3]);

    let footer = Paragraph::new("↑↓ Navigate  Enter Select  Esc Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[4]);
}

/// Render the daily challenge name-entry screen
fn render_daily_name(
    frame: &mut Frame,
    first: &str,
    last: &str,
    editing_last: bool,
    error: Option<&str>,
) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(2), // Explanation
            Constraint::Length(1), // First name
            Constraint::Length(1), // Last name
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Error
            Constraint::Min(0),
            Constraint::Length(2), // Footer
        ])
        .margin(2)
        .split(area);

    let header = Paragraph::new("Daily Challenge")
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, layout[0]);

    let blurb = Paragraph::new("Ten rounds, 30 seconds each. One attempt per name per day.")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(blurb, layout[1]);

    let (first_cursor, last_cursor) = if editing_last { ("", "_") } else { ("_", "") };
    let first_line = Paragraph::new(format!("First name: {}{}", first, first_cursor)).style(
        if editing_last {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Cyan)
        },
    );
    frame.render_widget(first_line, layout[2]);

    let last_line = Paragraph::new(format!("Last name:  {}{}", last, last_cursor)).style(
        if editing_last {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        },
    );
    frame.render_widget(last_line, layout[3]);

    if let Some(message) = error {
        let err = Paragraph::new(message)
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true });
        frame.render_widget(err, layout[5]);
    }

    let footer = Paragraph::new("Tab Switch field  Enter Start  Esc Back")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[7]);
}

/// Render one playing round: question card, timer, input or feedback
fn render_round(frame: &mut Frame, header_text: &str, player: &str, score: u32, round: &RoundState) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with round info and timer
            Constraint::Length(6), // Question card
            Constraint::Min(6),    // Input / feedback
            Constraint::Length(2), // Footer
        ])
        .split(area);

    render_round_header(frame, layout[0], header_text, player, score, round);

    match round.phase() {
        RoundPhase::Loading => {
            let loading = Paragraph::new("Finding a player with data for this round...")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(loading, layout[2]);
        }
        RoundPhase::Answering => {
            render_question_card(frame, layout[1], round);
            render_answer_input(frame, layout[2], round);
        }
        RoundPhase::Feedback => {
            render_question_card(frame, layout[1], round);
            render_feedback(frame, layout[2], round);
        }
        RoundPhase::Error => {
            let message = round
                .error()
                .map(|e| e.to_string())
                .unwrap_or_else(|| "round could not be resolved".to_string());
            let err = Paragraph::new(format!("Error: {}\n\nPress Enter to return to the menu", message))
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(err, layout[2]);
        }
    }

    let footer_text = match round.phase() {
        RoundPhase::Answering => "Type a name  Enter Submit  Esc Quit to menu",
        RoundPhase::Feedback => "Enter Next round  Esc Quit to menu",
        _ => "Esc Quit to menu",
    };
    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[3]);
}

/// Header line: round info on the left, score and timer on the right
fn render_round_header(
    frame: &mut Frame,
    area: Rect,
    header_text: &str,
    player: &str,
    score: u32,
    round: &RoundState,
) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),    // Round info
            Constraint::Length(24), // Player and score
            Constraint::Length(8),  // Timer
        ])
        .split(inner);

    let info = Paragraph::new(header_text.to_string())
        .style(Style::default().fg(Color::Yellow).bold());
    frame.render_widget(info, header_layout[0]);

    let score_widget = Paragraph::new(format!("{}: {}", player, score))
        .style(Style::default().fg(Color::Magenta).bold())
        .alignment(Alignment::Right);
    frame.render_widget(score_widget, header_layout[1]);

    if let Some(remaining) = round.time_remaining() {
        let timer_color = if remaining <= 5 {
            Color::Red
        } else if remaining <= 10 {
            Color::Yellow
        } else {
            Color::Green
        };
        let timer = Paragraph::new(format!("0:{:02}", remaining))
            .style(Style::default().fg(timer_color).bold())
            .alignment(Alignment::Right);
        frame.render_widget(timer, header_layout[2]);
    }
}

/// The question card: team, position group, season
fn render_question_card(frame: &mut Frame, area: Rect, round: &RoundState) {
    let Some(resolved) = round.resolved() else {
        return;
    };
    let spec = &resolved.spec;

    let card_text = format!(
        "Name a {} who played for the\n{} in the {} season",
        spec.position,
        team_display_name(&spec.team),
        spec.season_label(),
    );
    let card = Paragraph::new(card_text)
        .style(Style::default().fg(Color::Cyan).bold())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(card, area);
}

/// The answer input line
fn render_answer_input(frame: &mut Frame, area: Rect, round: &RoundState) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let input = Paragraph::new(format!("> {}_", round.input()))
        .style(Style::default().fg(Color::White));
    frame.render_widget(input, layout[0]);
}

/// Feedback after a submission or timeout: verdict plus the top answers
fn render_feedback(frame: &mut Frame, area: Rect, round: &RoundState) {
    let Some(outcome) = round.outcome() else {
        return;
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Verdict
            Constraint::Min(4),    // Accepted answers
        ])
        .split(area);

    let (verdict, color) = if outcome.is_correct {
        (format!("CORRECT!  {}", outcome.user_answer), Color::Green)
    } else if outcome.user_answer.is_empty() {
        ("TIME'S UP!".to_string(), Color::Red)
    } else {
        (format!("NOPE  ({})", outcome.user_answer), Color::Red)
    };
    let verdict_widget = Paragraph::new(verdict).style(Style::default().fg(color).bold());
    frame.render_widget(verdict_widget, layout[0]);

    let items: Vec<ListItem> = outcome
        .accepted
        .iter()
        .take(8)
        .map(|c| ListItem::new(format!("  {}", c.name)).style(Style::default().fg(Color::White)))
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Accepted answers"),
    );
    frame.render_widget(list, layout[1]);
}

/// Render the casual setup screen
#[allow(clippy::too_many_arguments)]
fn render_casual_setup(
    frame: &mut Frame,
    name_input: &str,
    players: &[String],
    groups: &[bool],
    group_cursor: usize,
    timed: bool,
    fixed_rounds: bool,
    goal: u32,
    focus: SetupFocus,
) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(1), // Name input
            Constraint::Min(4),    // Player list
            Constraint::Length(POSITION_GROUPS.len() as u16 + 2), // Group picker
            Constraint::Length(1), // Timer toggle
            Constraint::Length(1), // Goal
            Constraint::Length(2), // Footer
        ])
        .margin(2)
        .split(area);

    let focused = |f: SetupFocus| {
        if focus == f {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::White)
        }
    };

    let header = Paragraph::new("Casual Game Setup")
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, layout[0]);

    let cursor = if focus == SetupFocus::Names { "_" } else { "" };
    let input = Paragraph::new(format!("Add player: {}{}", name_input, cursor))
        .style(focused(SetupFocus::Names));
    frame.render_widget(input, layout[1]);

    let items: Vec<ListItem> = players
        .iter()
        .map(|name| ListItem::new(format!("  ● {}", name)).style(Style::default().fg(Color::White)))
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Players ({})", players.len())),
    );
    frame.render_widget(list, layout[2]);

    let group_items: Vec<ListItem> = POSITION_GROUPS
        .iter()
        .zip(groups.iter())
        .enumerate()
        .map(|(i, ((_, label), on))| {
            let marker = if *on { "[x]" } else { "[ ]" };
            let pointer = if focus == SetupFocus::Groups && i == group_cursor {
                ">"
            } else {
                " "
            };
            let style = if focus == SetupFocus::Groups && i == group_cursor {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!(" {} {} {}", pointer, marker, label)).style(style)
        })
        .collect();
    let group_list = List::new(group_items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Position groups")
            .border_style(focused(SetupFocus::Groups)),
    );
    frame.render_widget(group_list, layout[3]);

    let timer_line = Paragraph::new(format!(
        "Round timer: {}",
        if timed { "30s" } else { "off" }
    ))
    .style(focused(SetupFocus::Timer));
    frame.render_widget(timer_line, layout[4]);

    let goal_line = Paragraph::new(if fixed_rounds {
        format!("Play {} rounds each  (Enter: first to {} points)", goal, goal)
    } else {
        format!("First to {} points  (Enter: play {} rounds each)", goal, goal)
    })
    .style(focused(SetupFocus::Goal));
    frame.render_widget(goal_line, layout[5]);

    let footer = Paragraph::new(
        "Tab Next field  ↑↓ Adjust  Enter Add/Toggle, Start with empty name  Esc Back",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(footer, layout[6]);
}

/// Between casual rounds: prompt the current player to spin
fn render_spin_prompt(frame: &mut Frame, header_text: &str, players: &[PlayerEntry]) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Prompt
            Constraint::Min(4),    // Standings
            Constraint::Length(2), // Footer
        ])
        .margin(1)
        .split(area);

    let header = Paragraph::new(header_text.to_string())
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, layout[0]);

    let prompt = Paragraph::new("[ Press ENTER to spin ]")
        .style(Style::default().fg(Color::Green).bold())
        .alignment(Alignment::Center);
    frame.render_widget(prompt, layout[1]);

    render_standings(frame, layout[2], players, None);

    let footer = Paragraph::new("Enter Spin  Esc Quit to menu")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[3]);
}

/// Player standings list, optionally highlighting a winner
fn render_standings(frame: &mut Frame, area: Rect, players: &[PlayerEntry], winner: Option<&str>) {
    let items: Vec<ListItem> = players
        .iter()
        .map(|p| {
            let style = if winner == Some(p.name.as_str()) {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("  {} - {}", p.name, p.score)).style(style)
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Standings"),
    );
    frame.render_widget(list, area);
}

/// Render daily results with that day's leaderboard
fn render_daily_results(
    frame: &mut Frame,
    player_name: &str,
    date: &str,
    score: u32,
    board: &[DailyScore],
    save_error: Option<&str>,
) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(2), // Final score
            Constraint::Length(2), // Save error
            Constraint::Min(6),    // Leaderboard
            Constraint::Length(2), // Footer
        ])
        .margin(1)
        .split(area);

    let header = Paragraph::new(format!("Daily Challenge · {}", date))
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, layout[0]);

    let score_widget = Paragraph::new(format!("{}: {}/{}", player_name, score, NUM_DAILY_ROUNDS))
        .style(Style::default().fg(Color::Magenta).bold())
        .alignment(Alignment::Center);
    frame.render_widget(score_widget, layout[1]);

    if let Some(message) = save_error {
        let err = Paragraph::new(message)
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        frame.render_widget(err, layout[2]);
    }

    render_daily_board(frame, layout[3], board, Some(player_name));

    let footer = Paragraph::new("Enter/Esc Back to menu")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[4]);
}

fn render_daily_board(frame: &mut Frame, area: Rect, board: &[DailyScore], highlight: Option<&str>) {
    let items: Vec<ListItem> = board
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let prefix = match i {
                0 => "🥇",
                1 => "🥈",
                2 => "🥉",
                _ => "  ",
            };
            let style = if highlight.is_some_and(|name| name.eq_ignore_ascii_case(&row.player_name))
            {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("{} {} - {}", prefix, row.player_name, row.score)).style(style)
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Today's board"),
    );
    frame.render_widget(list, area);
}

/// Render casual results: winner and final standings
fn render_casual_results(
    frame: &mut Frame,
    winner_name: &str,
    players: &[PlayerEntry],
    save_error: Option<&str>,
) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(2), // Save error
            Constraint::Min(6),    // Standings
            Constraint::Length(2), // Footer
        ])
        .margin(2)
        .split(area);

    let title = Paragraph::new(format!("🏆 {} wins!", winner_name))
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center);
    frame.render_widget(title, layout[0]);

    if let Some(message) = save_error {
        let err = Paragraph::new(message)
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        frame.render_widget(err, layout[1]);
    }

    render_standings(frame, layout[2], players, Some(winner_name));

    let footer = Paragraph::new("Enter/Esc Back to menu")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[3]);
}

/// Render the leaderboards screen: daily on the left, casual on the right
fn render_boards(
    frame: &mut Frame,
    dates: &[DateKey],
    selected: usize,
    daily: &[DailyScore],
    casual: &[CasualScore],
) {
    let date = dates[selected].as_str();
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(6),    // Boards
            Constraint::Length(2), // Footer
        ])
        .margin(1)
        .split(area);

    let header = Paragraph::new("Leaderboards")
        .style(Style::default().fg(Color::Cyan).bold())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, layout[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[1]);

    if daily.is_empty() {
        let empty = Paragraph::new(format!("No scores yet for {}", date))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Daily"));
        frame.render_widget(empty, columns[0]);
    } else {
        let items: Vec<ListItem> = daily
            .iter()
            .enumerate()
            .map(|(i, row)| {
                ListItem::new(format!("{:>2}. {} - {}", i + 1, row.player_name, row.score))
                    .style(Style::default().fg(Color::White))
            })
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(format!("Daily · {}", date)));
        frame.render_widget(list, columns[0]);
    }

    if casual.is_empty() {
        let empty = Paragraph::new("No casual games recorded")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Casual"));
        frame.render_widget(empty, columns[1]);
    } else {
        let items: Vec<ListItem> = casual
            .iter()
            .enumerate()
            .map(|(i, row)| {
                ListItem::new(format!(
                    "{:>2}. {} - {} ({} rounds)",
                    i + 1,
                    row.player_name,
                    row.score,
                    row.rounds_played
                ))
                .style(Style::default().fg(Color::White))
            })
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Casual · best per player"));
        frame.render_widget(list, columns[1]);
    }

    let footer_text = if dates.len() > 1 {
        "↑ Newer day  ↓ Older day  Enter/Esc Back to menu"
    } else {
        "Enter/Esc Back to menu"
    };
    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[2]);
}

/// Render error screen
fn render_error(frame: &mut Frame, message: &str) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Percentage(40),
        ])
        .margin(2)
        .split(area);

    let error = Paragraph::new(format!("Error: {}", message))
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(error, layout[1]);

    let hint = Paragraph::new("Press Esc to go back")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hint, layout[2]);
}
