//! Terminal front end for 4×4×4 tic-tac-toe.
//!
//! Everything here sits outside the rules engine in [`qubic_core`]: input
//! parsing, text rendering, the turn timer, replay stepping, and the
//! persisted preferences.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod command;
mod render;
mod replay_cursor;
mod session;
mod settings;
mod timer;

pub use command::{Command, HELP, ParseError, parse_command};
pub use render::{render_board, render_history, render_state, render_status, render_threats};
pub use replay_cursor::ReplayCursor;
pub use session::{Reply, Session};
pub use settings::{ConfigError, MAX_TURN_SECS, MIN_TURN_SECS, Preferences};
pub use timer::{TimerEvent, TurnTimer};
