//! Async player driving a controller in real time.
//!
//! The player owns the controller on a single task. It sleeps until the
//! controller's next tick or until a command arrives, whichever comes first,
//! reports elapsed time to the controller, and publishes a fresh
//! [`ViewSnapshot`] after every wake-up.

use crate::controller::PlaybackController;
use crate::snapshot::ViewSnapshot;
use sortscope_core::Algorithm;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::time::Instant;
use tracing::{debug, warn};

const COMMAND_BUFFER: usize = 32;

/// Control messages accepted by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start or resume
    Play,
    /// Pause
    Pause,
    /// Regenerate and return to idle
    Reset,
    /// Change speed
    SetSpeed(u32),
    /// Change problem size
    ChangeSize(usize),
    /// Switch algorithm
    SetAlgorithm(Algorithm),
    /// Apply one step by hand
    Step,
    /// Stop the player loop
    Shutdown,
}

/// Player errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayerError {
    /// The player task is gone
    #[error("player has shut down")]
    Closed,
}

/// Cloneable handle for sending commands and watching frames
#[derive(Debug, Clone)]
pub struct PlayerHandle {
    commands: mpsc::Sender<Command>,
    frames: watch::Receiver<ViewSnapshot>,
}

impl PlayerHandle {
    /// Send a command
    ///
    /// # Errors
    ///
    /// Returns `Closed` if the player has stopped
    pub async fn send(&self, command: Command) -> Result<(), PlayerError> {
        self.commands
            .send(command)
            .await
            .map_err(|_| PlayerError::Closed)
    }

    /// Start or resume playback
    ///
    /// # Errors
    ///
    /// Returns `Closed` if the player has stopped
    pub async fn play(&self) -> Result<(), PlayerError> {
        self.send(Command::Play).await
    }

    /// Pause playback
    ///
    /// # Errors
    ///
    /// Returns `Closed` if the player has stopped
    pub async fn pause(&self) -> Result<(), PlayerError> {
        self.send(Command::Pause).await
    }

    /// Stop the player
    ///
    /// # Errors
    ///
    /// Returns `Closed` if the player has already stopped
    pub async fn shutdown(&self) -> Result<(), PlayerError> {
        self.send(Command::Shutdown).await
    }

    /// Latest published frame
    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot {
        self.frames.borrow().clone()
    }

    /// Receiver notified on every published frame
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ViewSnapshot> {
        self.frames.clone()
    }
}

/// Task-side half owning the controller
pub struct Player {
    controller: PlaybackController,
    commands: mpsc::Receiver<Command>,
    frames: watch::Sender<ViewSnapshot>,
}

enum Wake {
    Command(Option<Command>),
    Tick,
}

/// Create a player and its handle
#[must_use]
pub fn channel(controller: PlaybackController) -> (Player, PlayerHandle) {
    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
    let (frame_tx, frame_rx) = watch::channel(controller.snapshot());
    let player = Player {
        controller,
        commands: command_rx,
        frames: frame_tx,
    };
    let handle = PlayerHandle {
        commands: command_tx,
        frames: frame_rx,
    };
    (player, handle)
}

impl Player {
    /// Run until shut down or every handle is dropped
    ///
    /// Returns the controller in its final state.
    pub async fn run(mut self) -> PlaybackController {
        let mut last = Instant::now();
        loop {
            let wake = match self.controller.time_until_tick() {
                Some(wait) => tokio::select! {
                    command = self.commands.recv() => Wake::Command(command),
                    () = tokio::time::sleep(wait) => Wake::Tick,
                },
                None => Wake::Command(self.commands.recv().await),
            };

            self.catch_up(&mut last);

            match wake {
                Wake::Tick => {}
                Wake::Command(None | Some(Command::Shutdown)) => {
                    debug!("player stopping");
                    break;
                }
                Wake::Command(Some(command)) => self.handle(command),
            }

            self.frames.send_replace(self.controller.snapshot());
        }
        self.controller
    }

    fn catch_up(&mut self, last: &mut Instant) {
        let elapsed = last.elapsed();
        let whole = Duration::from_millis(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX));
        *last += whole;
        self.controller.advance(whole);
    }

    fn handle(&mut self, command: Command) {
        debug!(?command, "command received");
        let result = match command {
            Command::Play => self.controller.play(),
            Command::Pause => {
                self.controller.pause();
                Ok(())
            }
            Command::Reset => self.controller.reset(),
            Command::SetSpeed(speed) => {
                self.controller.set_speed(speed);
                Ok(())
            }
            Command::ChangeSize(size) => self.controller.change_size(size),
            Command::SetAlgorithm(algorithm) => self.controller.set_algorithm(algorithm),
            Command::Step => self.controller.step_once().map(|_| ()),
            Command::Shutdown => Ok(()),
        };
        if let Err(err) = result {
            warn!(?command, %err, "command rejected");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortscope_core::{PlaybackConfig, PlaybackStatus};

    fn controller() -> PlaybackController {
        let config = PlaybackConfig::new(Algorithm::Bubble)
            .with_speed(1000)
            .with_seed(9);
        PlaybackController::with_input(config, &[5, 3, 4, 1, 2]).unwrap()
    }

    async fn wait_for(frames: &mut watch::Receiver<ViewSnapshot>, status: PlaybackStatus) -> ViewSnapshot {
        loop {
            if frames.borrow_and_update().status == status {
                return frames.borrow().clone();
            }
            frames.changed().await.unwrap();
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_player_runs_to_finished() {
        let (player, handle) = channel(controller());
        let task = tokio::spawn(player.run());
        let mut frames = handle.subscribe();

        handle.play().await.unwrap();
        let view = wait_for(&mut frames, PlaybackStatus::Finished).await;
        assert_eq!(view.values, vec![1, 2, 3, 4, 5]);
        assert_eq!(view.cursor, view.total_steps);

        handle.shutdown().await.unwrap();
        let controller = task.await.unwrap();
        assert!(controller.pending_tick().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_player_pause_stops_ticks() {
        let (player, handle) = channel(controller());
        let task = tokio::spawn(player.run());
        let mut frames = handle.subscribe();

        handle.play().await.unwrap();
        tokio::time::sleep(Duration::from_millis(350)).await;
        handle.pause().await.unwrap();
        let paused = wait_for(&mut frames, PlaybackStatus::Paused).await;
        assert_eq!(paused.cursor, 3);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(handle.snapshot().cursor, 3);

        handle.shutdown().await.unwrap();
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejected_command_keeps_running() {
        let (player, handle) = channel(controller());
        let task = tokio::spawn(player.run());
        let mut frames = handle.subscribe();

        handle.play().await.unwrap();
        handle.send(Command::ChangeSize(30)).await.unwrap();
        let view = wait_for(&mut frames, PlaybackStatus::Finished).await;
        assert_eq!(view.values.len(), 5);

        handle.shutdown().await.unwrap();
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_stops_player() {
        let (player, handle) = channel(controller());
        let task = tokio::spawn(player.run());
        handle.send(Command::Step).await.unwrap();
        drop(handle);
        let controller = task.await.unwrap();
        assert_eq!(controller.state().cursor, 1);
        assert_eq!(controller.status(), PlaybackStatus::Paused);
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_after_shutdown_fails() {
        let (player, handle) = channel(controller());
        let task = tokio::spawn(player.run());
        handle.shutdown().await.unwrap();
        task.await.unwrap();
        assert_eq!(handle.play().await, Err(PlayerError::Closed));
    }
}
