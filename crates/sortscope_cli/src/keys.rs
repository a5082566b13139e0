//! Keyboard transport controls for `play`.

use console::Key;
use sortscope_core::{clamp_speed, Algorithm, PlaybackStatus};
use sortscope_replay::{Command, ViewSnapshot};

/// Speed change per `+` or `-` press
pub const SPEED_STEP: u32 = 50;

/// Shown above the playback frame
pub const HELP: &str =
    "space play/pause  n step  r reset  +/- speed  [/] size  a algorithm  q quit";

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward to the player
    Send(Command),
    /// Leave playback
    Quit,
}

/// Map a key to an action against the frame currently on screen
///
/// Size keys are dropped while playing and at the algorithm's size bounds,
/// since the controller would reject them anyway.
#[must_use]
pub fn action_for_key(key: &Key, view: &ViewSnapshot) -> Option<KeyAction> {
    let command = match key {
        Key::Char('q') | Key::Escape => return Some(KeyAction::Quit),
        Key::Char(' ') => match view.status {
            PlaybackStatus::Playing => Command::Pause,
            _ => Command::Play,
        },
        Key::Char('n') | Key::ArrowRight => Command::Step,
        Key::Char('r') => Command::Reset,
        Key::Char('+' | '=') => Command::SetSpeed(clamp_speed(view.speed.saturating_add(SPEED_STEP))),
        Key::Char('-') => Command::SetSpeed(clamp_speed(view.speed.saturating_sub(SPEED_STEP))),
        Key::Char('[') => resize(view, view.values.len().checked_sub(1)?)?,
        Key::Char(']') => resize(view, view.values.len() + 1)?,
        Key::Char('a') => Command::SetAlgorithm(next_algorithm(view.algorithm)),
        _ => return None,
    };
    Some(KeyAction::Send(command))
}

fn resize(view: &ViewSnapshot, size: usize) -> Option<Command> {
    let allowed =
        view.status != PlaybackStatus::Playing && view.algorithm.size_bounds().contains(size);
    allowed.then_some(Command::ChangeSize(size))
}

fn next_algorithm(current: Algorithm) -> Algorithm {
    let index = Algorithm::ALL
        .iter()
        .position(|&algorithm| algorithm == current)
        .unwrap_or_default();
    Algorithm::ALL[(index + 1) % Algorithm::ALL.len()]
}
