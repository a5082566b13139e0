//! Playback controller.
//!
//! Owns the trace, the playback state and the single pending tick. The
//! controller keeps its own logical millisecond clock: callers report elapsed
//! time through [`PlaybackController::advance`], which fires every tick that
//! has come due. Every transition out of `Playing` cancels the pending tick
//! synchronously, and every regeneration cancels it before building the new
//! trace.

use crate::schedule::{PendingTick, TickSlot, TickToken};
use crate::snapshot::ViewSnapshot;
use crate::state::PlaybackState;
use sortscope_core::{
    clamp_speed, Algorithm, LogicalTime, PlaybackConfig, PlaybackStatus, SortError, SortResult,
};
use sortscope_sim::{InputGenerator, SimSeed};
use sortscope_trace::{generate, Trace};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Drives one trace at a configurable speed
pub struct PlaybackController {
    config: PlaybackConfig,
    inputs: InputGenerator,
    trace: Trace,
    state: PlaybackState,
    ticks: TickSlot,
    clock: LogicalTime,
    generation: u64,
}

impl PlaybackController {
    /// Create a controller with a freshly generated input
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the configured size is out of bounds
    pub fn new(config: PlaybackConfig) -> SortResult<Self> {
        config.validate()?;
        let mut inputs = InputGenerator::new(&SimSeed::from_option(config.seed));
        let input = inputs.random(config.size);
        Self::build(config, inputs, &input)
    }

    /// Create a controller whose first trace plays the given input
    ///
    /// Later regenerations draw random inputs of the same length.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the input length is outside the algorithm's
    /// playback size bounds
    pub fn with_input(config: PlaybackConfig, input: &[u32]) -> SortResult<Self> {
        let config = PlaybackConfig {
            size: input.len(),
            ..config
        };
        config.validate()?;
        let inputs = InputGenerator::new(&SimSeed::from_option(config.seed));
        Self::build(config, inputs, input)
    }

    fn build(config: PlaybackConfig, inputs: InputGenerator, input: &[u32]) -> SortResult<Self> {
        let trace = generate(config.algorithm, input)?;
        info!(
            algorithm = %config.algorithm,
            size = config.size,
            speed = config.speed,
            steps = trace.len(),
            "controller ready"
        );
        Ok(Self {
            config,
            inputs,
            state: PlaybackState::new(input),
            trace,
            ticks: TickSlot::new(),
            clock: LogicalTime::zero(),
            generation: 1,
        })
    }

    /// Start or resume playback
    ///
    /// A finished trace is replaced by a fresh one before playing.
    ///
    /// # Errors
    ///
    /// Returns an error only if regeneration fails
    pub fn play(&mut self) -> SortResult<()> {
        match self.state.status {
            PlaybackStatus::Playing => {
                debug!("play ignored, already playing");
                return Ok(());
            }
            PlaybackStatus::Finished => self.regenerate()?,
            PlaybackStatus::Idle | PlaybackStatus::Paused => {}
        }
        self.state.status = PlaybackStatus::Playing;
        self.ticks.arm(self.clock, self.config.delay());
        info!(cursor = self.state.cursor, total = self.trace.len(), "playing");
        Ok(())
    }

    /// Pause playback, dropping the pending tick
    pub fn pause(&mut self) {
        if self.state.status != PlaybackStatus::Playing {
            debug!(status = %self.state.status, "pause ignored");
            return;
        }
        self.ticks.cancel();
        self.state.status = PlaybackStatus::Paused;
        info!(cursor = self.state.cursor, "paused");
    }

    /// Discard the trace and start over with a new input
    ///
    /// # Errors
    ///
    /// Returns an error only if regeneration fails
    pub fn reset(&mut self) -> SortResult<()> {
        self.regenerate()?;
        info!(generation = self.generation, "reset");
        Ok(())
    }

    /// Change the problem size and regenerate
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` while playing and `InvalidInput` if the
    /// size is out of bounds; state is untouched in both cases
    pub fn change_size(&mut self, size: usize) -> SortResult<()> {
        self.reject_while_playing("change size")?;
        let bounds = self.config.algorithm.size_bounds();
        if !bounds.contains(size) {
            warn!(size, min = bounds.min, max = bounds.max, "size rejected");
            return Err(SortError::invalid_input(
                self.config.algorithm,
                size,
                bounds.min,
                bounds.max,
            ));
        }
        self.config.size = size;
        info!(size, "size changed");
        self.reset()
    }

    /// Switch algorithm, clamping the size into its bounds, and regenerate
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` while playing
    pub fn set_algorithm(&mut self, algorithm: Algorithm) -> SortResult<()> {
        self.reject_while_playing("switch algorithm")?;
        self.config.algorithm = algorithm;
        self.config.size = algorithm.size_bounds().clamp(self.config.size);
        info!(%algorithm, size = self.config.size, "algorithm changed");
        self.reset()
    }

    /// Set the speed; takes effect from the next scheduled tick
    pub fn set_speed(&mut self, speed: u32) {
        self.config.speed = clamp_speed(speed);
        debug!(speed = self.config.speed, delay_ms = self.config.delay().as_millis() as u64, "speed changed");
    }

    /// Apply one step by hand
    ///
    /// Returns whether a step was applied; a finished trace applies nothing.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` while playing
    pub fn step_once(&mut self) -> SortResult<bool> {
        self.reject_while_playing("step")?;
        if self.state.status == PlaybackStatus::Finished {
            return Ok(false);
        }
        self.apply_next();
        if self.state.status == PlaybackStatus::Idle {
            self.state.status = PlaybackStatus::Paused;
        }
        Ok(true)
    }

    /// Move the clock forward, firing every tick that comes due
    ///
    /// Returns the number of ticks fired.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let target = self.clock.saturating_add(elapsed);
        let mut fired = 0;
        while let Some(tick) = self.ticks.due(target) {
            self.clock = tick.due;
            if !self.fire(tick.token) {
                break;
            }
            fired += 1;
        }
        self.clock = target;
        fired
    }

    /// Fire the tick armed with `token`
    ///
    /// Returns false, changing nothing, for a stale token.
    pub fn fire(&mut self, token: TickToken) -> bool {
        if !self.ticks.take(token) {
            return false;
        }
        if self.state.status != PlaybackStatus::Playing {
            warn!(status = %self.state.status, "tick outside playback ignored");
            return false;
        }
        self.apply_next();
        if self.state.status == PlaybackStatus::Playing {
            self.ticks.arm(self.clock, self.config.delay());
        }
        true
    }

    /// Time until the pending tick is due
    #[must_use]
    pub fn time_until_tick(&self) -> Option<Duration> {
        self.ticks.remaining(self.clock)
    }

    /// Pending tick
    #[must_use]
    pub fn pending_tick(&self) -> Option<PendingTick> {
        self.ticks.pending()
    }

    /// View for presentation
    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot::capture(
            &self.state,
            self.config.algorithm,
            self.trace.len(),
            self.config.speed,
        )
    }

    /// Playback status
    #[must_use]
    pub fn status(&self) -> PlaybackStatus {
        self.state.status
    }

    /// Current configuration
    #[must_use]
    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// Trace being played
    #[must_use]
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Playback state
    #[must_use]
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Logical clock
    #[must_use]
    pub fn clock(&self) -> LogicalTime {
        self.clock
    }

    /// Number of traces built so far
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn reject_while_playing(&self, action: &'static str) -> SortResult<()> {
        if self.state.status == PlaybackStatus::Playing {
            warn!(action, "rejected while playing");
            return Err(SortError::InvalidTransition {
                action,
                status: self.state.status,
            });
        }
        Ok(())
    }

    fn apply_next(&mut self) {
        if let Some(step) = self.trace.get(self.state.cursor) {
            self.state.apply(step, self.config.algorithm);
        }
        if self.state.cursor >= self.trace.len() {
            self.ticks.cancel();
            self.state.status = PlaybackStatus::Finished;
            info!(
                comparisons = self.state.counters.comparisons,
                mutations = self.state.counters.mutations,
                "finished"
            );
        }
    }

    fn regenerate(&mut self) -> SortResult<()> {
        self.ticks.cancel();
        let input = self.inputs.random(self.config.size);
        self.trace = generate(self.config.algorithm, &input)?;
        self.state = PlaybackState::new(&input);
        self.generation += 1;
        debug!(
            generation = self.generation,
            size = input.len(),
            steps = self.trace.len(),
            "trace regenerated"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortscope_core::Highlight;

    fn bubble() -> PlaybackController {
        let config = PlaybackConfig::new(Algorithm::Bubble).with_speed(1000).with_seed(7);
        PlaybackController::with_input(config, &[5, 3, 4, 1, 2]).unwrap()
    }

    fn run_to_end(controller: &mut PlaybackController) {
        while controller.status() == PlaybackStatus::Playing {
            controller.advance(Duration::from_secs(60));
        }
    }

    #[test]
    fn test_new_validates_size() {
        let config = PlaybackConfig::new(Algorithm::Heap).with_size(40);
        let err = PlaybackController::new(config).err().unwrap();
        assert!(matches!(err, SortError::InvalidInput { max: 31, .. }));
    }

    #[test]
    fn test_with_input_checks_playback_bounds() {
        let config = PlaybackConfig::new(Algorithm::Bubble);
        let err = PlaybackController::with_input(config, &[3, 1, 2]).err().unwrap();
        assert_eq!(err, SortError::invalid_input(Algorithm::Bubble, 3, 5, 50));

        let controller = bubble();
        assert_eq!(controller.config().size, 5);
        assert!(controller.config().validate().is_ok());
    }

    #[test]
    fn test_new_uses_configured_size() {
        let config = PlaybackConfig::new(Algorithm::Merge).with_seed(1);
        let controller = PlaybackController::new(config).unwrap();
        assert_eq!(controller.trace().input().len(), 16);
        assert_eq!(controller.status(), PlaybackStatus::Idle);
        assert!(controller.pending_tick().is_none());
    }

    #[test]
    fn test_ticks_fire_on_delay() {
        let mut controller = bubble();
        controller.play().unwrap();
        assert_eq!(controller.time_until_tick(), Some(Duration::from_millis(100)));

        assert_eq!(controller.advance(Duration::from_millis(99)), 0);
        assert_eq!(controller.advance(Duration::from_millis(1)), 1);
        assert_eq!(controller.state().cursor, 1);
        assert_eq!(controller.advance(Duration::from_millis(250)), 2);
        assert_eq!(controller.time_until_tick(), Some(Duration::from_millis(50)));
    }

    #[test]
    fn test_plays_to_finished_sorted() {
        let mut controller = bubble();
        controller.play().unwrap();
        run_to_end(&mut controller);

        assert_eq!(controller.status(), PlaybackStatus::Finished);
        assert!(controller.pending_tick().is_none());
        let view = controller.snapshot();
        assert_eq!(view.values, vec![1, 2, 3, 4, 5]);
        assert_eq!(view.comparisons, 10);
        assert_eq!(view.mutations, 8);
        assert_eq!(view.indices(Highlight::Sorted), &[0, 1, 2, 3, 4]);
        assert!((view.progress - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_play_while_playing_is_noop() {
        let mut controller = bubble();
        controller.play().unwrap();
        controller.advance(Duration::from_millis(40));
        let pending = controller.pending_tick();
        controller.play().unwrap();
        assert_eq!(controller.pending_tick(), pending);
    }

    #[test]
    fn test_pause_cancels_tick() {
        let mut controller = bubble();
        controller.play().unwrap();
        controller.advance(Duration::from_millis(100));
        controller.pause();
        assert_eq!(controller.status(), PlaybackStatus::Paused);
        assert!(controller.time_until_tick().is_none());
        assert_eq!(controller.advance(Duration::from_secs(10)), 0);
        assert_eq!(controller.state().cursor, 1);

        controller.pause();
        assert_eq!(controller.status(), PlaybackStatus::Paused);
    }

    #[test]
    fn test_stale_token_rejected() {
        let mut controller = bubble();
        controller.play().unwrap();
        let stale = controller.pending_tick().unwrap().token;
        controller.pause();
        controller.play().unwrap();
        assert!(!controller.fire(stale));
        assert_eq!(controller.state().cursor, 0);

        let live = controller.pending_tick().unwrap().token;
        assert!(controller.fire(live));
        assert_eq!(controller.state().cursor, 1);
    }

    #[test]
    fn test_reset_leaves_no_tick() {
        let mut controller = bubble();
        controller.play().unwrap();
        controller.advance(Duration::from_millis(300));
        controller.reset().unwrap();

        assert_eq!(controller.status(), PlaybackStatus::Idle);
        assert_eq!(controller.state().cursor, 0);
        assert!(controller.pending_tick().is_none());
        assert_eq!(controller.generation(), 2);
        assert_eq!(controller.advance(Duration::from_secs(10)), 0);
    }

    #[test]
    fn test_play_after_finish_regenerates() {
        let mut controller = bubble();
        controller.play().unwrap();
        run_to_end(&mut controller);

        controller.play().unwrap();
        assert_eq!(controller.status(), PlaybackStatus::Playing);
        assert_eq!(controller.generation(), 2);
        assert_eq!(controller.state().cursor, 0);
        assert_eq!(controller.trace().input().len(), 5);
        run_to_end(&mut controller);
        let values = controller.snapshot().values;
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_change_size_rejected_while_playing() {
        let mut controller = bubble();
        controller.play().unwrap();
        controller.advance(Duration::from_millis(100));
        let pending = controller.pending_tick();

        let err = controller.change_size(30).unwrap_err();
        assert!(err.is_transition());
        assert_eq!(controller.state().cursor, 1);
        assert_eq!(controller.pending_tick(), pending);
    }

    #[test]
    fn test_change_size_out_of_bounds_untouched() {
        let mut controller = bubble();
        controller.step_once().unwrap();
        let before = controller.trace().clone();

        let err = controller.change_size(51).unwrap_err();
        assert!(matches!(err, SortError::InvalidInput { size: 51, .. }));
        assert_eq!(controller.trace(), &before);
        assert_eq!(controller.state().cursor, 1);
    }

    #[test]
    fn test_change_size_regenerates() {
        let mut controller = bubble();
        controller.change_size(12).unwrap();
        assert_eq!(controller.trace().input().len(), 12);
        assert_eq!(controller.status(), PlaybackStatus::Idle);
        assert_eq!(controller.config().size, 12);
    }

    #[test]
    fn test_set_speed_does_not_reschedule() {
        let mut controller = bubble();
        controller.play().unwrap();
        let pending = controller.pending_tick();
        controller.set_speed(5000);
        assert_eq!(controller.config().speed, 1000);
        assert_eq!(controller.pending_tick(), pending);

        controller.set_speed(900);
        controller.advance(Duration::from_millis(100));
        assert_eq!(controller.time_until_tick(), Some(Duration::from_millis(200)));
        assert_eq!(controller.status(), PlaybackStatus::Playing);
    }

    #[test]
    fn test_set_algorithm_clamps_size() {
        let config = PlaybackConfig::new(Algorithm::Bubble).with_size(50).with_seed(3);
        let mut controller = PlaybackController::new(config).unwrap();
        controller.set_algorithm(Algorithm::Heap).unwrap();
        assert_eq!(controller.config().size, 31);
        assert_eq!(controller.trace().algorithm(), Algorithm::Heap);

        controller.play().unwrap();
        assert!(controller.set_algorithm(Algorithm::Quick).unwrap_err().is_transition());
    }

    #[test]
    fn test_step_once() {
        let mut controller = bubble();
        assert!(controller.step_once().unwrap());
        assert_eq!(controller.status(), PlaybackStatus::Paused);
        assert_eq!(controller.state().cursor, 1);

        controller.play().unwrap();
        assert!(controller.step_once().is_err());
        run_to_end(&mut controller);
        assert!(!controller.step_once().unwrap());
    }

    #[test]
    fn test_stepping_to_the_end_finishes() {
        let mut controller = bubble();
        while controller.step_once().unwrap() {}
        assert_eq!(controller.status(), PlaybackStatus::Finished);
        assert_eq!(controller.state().cursor, controller.trace().len());
    }

    proptest::proptest! {
        #[test]
        fn test_any_configuration_plays_sorted(seed in proptest::prelude::any::<u64>(), index in 0usize..6) {
            let algorithm = Algorithm::ALL[index];
            let config = PlaybackConfig::new(algorithm).with_seed(seed).with_speed(1000);
            let mut controller = PlaybackController::new(config).unwrap();
            let mut expected = controller.trace().input().to_vec();
            expected.sort_unstable();

            controller.play().unwrap();
            run_to_end(&mut controller);
            proptest::prop_assert_eq!(controller.status(), PlaybackStatus::Finished);
            proptest::prop_assert_eq!(controller.snapshot().values, expected);
            proptest::prop_assert!(controller.pending_tick().is_none());
        }
    }
}
