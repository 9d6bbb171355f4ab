//! Interactive play session over a line-based terminal.

use crate::command::{Command, HELP, ParseError, parse_command};
use crate::render::{render_history, render_state, render_threats};
use crate::replay_cursor::ReplayCursor;
use crate::settings::Preferences;
use crate::timer::{TimerEvent, TurnTimer};
use anyhow::{Context, Result};
use qubic_core::GameManager;
use std::fmt::Write as _;
use std::io::{BufRead, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Result of handling one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Text to print.
    pub output: String,
    /// Whether the session should end.
    pub quit: bool,
}

impl Reply {
    fn text(output: String) -> Self {
        Self {
            output,
            quit: false,
        }
    }
}

/// A game plus the collaborators that drive it: the turn timer and the
/// replay view.
#[derive(Debug)]
pub struct Session {
    game: GameManager,
    timer: TurnTimer,
}

impl Session {
    /// Creates a session with a fresh game.
    #[instrument]
    pub fn new(prefs: Preferences) -> Self {
        Self {
            game: GameManager::new(),
            timer: TurnTimer::new(
                Duration::from_secs(u64::from(prefs.turn_time_limit_secs())),
                prefs.timer_enabled(),
            ),
        }
    }

    /// The game being played.
    pub fn game(&self) -> &GameManager {
        &self.game
    }

    /// Board, status, and the remaining turn time when timed.
    pub fn prompt(&self) -> String {
        let mut out = render_state(self.game.state());
        let left = self
            .timer
            .remaining()
            .filter(|_| !self.game.status().is_terminal());
        if let Some(left) = left {
            let _ = writeln!(out, "{}s left this turn", left.as_secs());
        }
        out.push_str("> ");
        out
    }

    /// Handles one line typed `elapsed` after the turn's prompt appeared.
    #[instrument(skip(self))]
    pub fn handle_line(&mut self, line: &str, elapsed: Duration) -> Reply {
        let mut notice = String::new();
        if self.timer.tick(elapsed) == TimerEvent::Expired {
            let player = self.game.current_player();
            if self.game.skip() {
                info!(%player, "Turn timed out");
                let _ = writeln!(notice, "{player} ran out of time; turn skipped");
            }
            self.timer.restart();
        }

        let mut reply = match parse_command(line) {
            Ok(command) => self.apply(command),
            Err(ParseError::Empty) => Reply::text(String::new()),
            Err(e) => Reply::text(format!("{e}\n")),
        };
        reply.output.insert_str(0, &notice);
        reply
    }

    fn apply(&mut self, command: Command) -> Reply {
        debug!(?command, "Applying command");
        match command {
            Command::Place(pos) => {
                if let Err(e) = self.game.try_play(pos) {
                    return Reply::text(format!("{e}\n"));
                }
            }
            Command::Undo => {
                if let Err(e) = self.game.try_undo() {
                    return Reply::text(format!("{e}\n"));
                }
            }
            Command::Skip => {
                if !self.game.skip() {
                    return Reply::text("Game is already over\n".to_string());
                }
            }
            Command::Reset => self.game.reset(),
            Command::Threats => return Reply::text(render_threats(self.game.state())),
            Command::History => return Reply::text(render_history(self.game.state().history())),
            Command::Replay(k) => return Reply::text(self.replay(k)),
            Command::Help => {
                let text = HELP
                    .iter()
                    .map(|(cmd, what)| format!("  {cmd:<12} {what}\n"))
                    .collect();
                return Reply::text(text);
            }
            Command::Quit => {
                return Reply {
                    output: "Bye\n".to_string(),
                    quit: true,
                };
            }
        }
        // A new turn begins after every accepted mutation.
        self.timer.restart();
        Reply::text(String::new())
    }

    fn replay(&self, k: Option<usize>) -> String {
        let mut cursor = ReplayCursor::new(self.game.state().history().to_vec());
        match k {
            Some(k) => {
                let k = cursor.seek(k);
                format!(
                    "After {k} of {} moves:\n{}",
                    cursor.len(),
                    render_state(&cursor.snapshot())
                )
            }
            None => {
                cursor.rewind();
                let mut out = String::new();
                while cursor.autoplay_tick() {
                    let _ = writeln!(out, "Move {}:", cursor.position());
                    out.push_str(&render_state(&cursor.snapshot()));
                }
                if out.is_empty() {
                    out.push_str("No moves to replay\n");
                }
                out
            }
        }
    }

    /// Runs the prompt loop until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        write!(output, "{}", self.prompt()).context("Failed to write prompt")?;
        output.flush().context("Failed to flush output")?;
        let mut shown = Instant::now();

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            let reply = self.handle_line(&line, shown.elapsed());
            write!(output, "{}", reply.output).context("Failed to write reply")?;
            if reply.quit {
                return Ok(());
            }
            write!(output, "{}", self.prompt()).context("Failed to write prompt")?;
            output.flush().context("Failed to flush output")?;
            shown = Instant::now();
        }

        warn!("Input closed before quit");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qubic_core::{GameStatus, Player};

    fn timed(limit: u32) -> Session {
        Session::new(Preferences::new(limit, true))
    }

    #[test]
    fn test_place_and_reject() {
        let mut s = Session::new(Preferences::default());
        assert_eq!(s.handle_line("0 0 0", Duration::ZERO).output, "");
        let reply = s.handle_line("0,0,0", Duration::ZERO);
        assert!(reply.output.contains("already occupied"));
        assert_eq!(s.game().current_player(), Player::O);
    }

    #[test]
    fn test_timeout_skips_before_command() {
        let mut s = timed(10);
        let reply = s.handle_line("1 1 1", Duration::from_secs(11));
        assert!(reply.output.starts_with("X ran out of time"));
        // O got the move after X's skip.
        let state = s.game().state();
        assert_eq!(state.move_count(), 1);
        assert_eq!(state.history()[1].player, Player::O);
        assert_eq!(state.current_player(), Player::X);
    }

    #[test]
    fn test_within_limit_no_skip() {
        let mut s = timed(10);
        let reply = s.handle_line("1 1 1", Duration::from_secs(9));
        assert_eq!(reply.output, "");
        assert_eq!(s.game().state().history().len(), 1);
    }

    #[test]
    fn test_undo_after_win_reported() {
        let mut s = Session::new(Preferences::default());
        for line in ["0 0 0", "0 1 0", "1 0 0", "1 1 0", "2 0 0", "2 1 0", "3 0 0"] {
            s.handle_line(line, Duration::ZERO);
        }
        assert_eq!(s.game().status(), GameStatus::Win);
        let reply = s.handle_line("undo", Duration::ZERO);
        assert!(reply.output.contains("cannot be undone"));
    }

    #[test]
    fn test_replay_commands() {
        let mut s = Session::new(Preferences::default());
        assert_eq!(s.handle_line("replay", Duration::ZERO).output, "No moves to replay\n");
        s.handle_line("0 0 0", Duration::ZERO);
        s.handle_line("skip", Duration::ZERO);
        s.handle_line("1 0 0", Duration::ZERO);
        let out = s.handle_line("replay 1", Duration::ZERO).output;
        assert!(out.starts_with("After 1 of 2 moves:"));
        let all = s.handle_line("r", Duration::ZERO).output;
        assert!(all.contains("Move 1:") && all.contains("Move 2:"));
    }

    #[test]
    fn test_run_loop_until_quit() {
        let mut s = Session::new(Preferences::default());
        let input = b"2 2 2\nbogus\nquit\n3 3 3\n";
        let mut out = Vec::new();
        s.run(&input[..], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Unknown command 'bogus'"));
        assert!(text.ends_with("Bye\n"));
        assert_eq!(s.game().state().move_count(), 1);
    }
}
