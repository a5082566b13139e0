//! SORTSCOPE Playback
//!
//! Replays a generated trace one step per tick. The controller is a
//! synchronous state machine over a logical clock; the player wraps it in a
//! tokio task that turns wall-clock time and commands into controller calls.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod controller;
pub mod player;
pub mod schedule;
pub mod snapshot;
pub mod state;

pub use controller::PlaybackController;
pub use player::{channel, Command, Player, PlayerError, PlayerHandle};
pub use schedule::{PendingTick, TickSlot, TickToken};
pub use snapshot::ViewSnapshot;
pub use state::PlaybackState;
