//! Countdown timer model owned by the clock app and held in shell state.

use serde::{Deserialize, Serialize};

/// Remaining time restored by a reset when no duration was ever chosen.
pub const DEFAULT_RESET_SECONDS: u32 = 300;

/// Quick-start presets offered by the clock app, in minutes.
pub const PRESET_MINUTES: [u32; 3] = [1, 5, 15];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Countdown state.
pub struct TimerState {
    /// Length chosen by the last preset or external timer request.
    pub duration_seconds: u32,
    /// Seconds left on the countdown.
    pub remaining_seconds: u32,
    /// Whether the countdown advances on each tick.
    pub running: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Timer operations issued by the clock app.
pub enum TimerCommand {
    /// Play or pause.
    Toggle,
    /// Stop and restore the chosen duration.
    Reset,
    /// Load a preset without starting it.
    Preset {
        /// Preset length.
        minutes: u32,
    },
    /// Advance one second.
    Tick,
}

impl TimerState {
    /// Overwrites the countdown and starts it.
    pub fn start(&mut self, seconds: u32) {
        self.duration_seconds = seconds;
        self.remaining_seconds = seconds;
        self.running = seconds > 0;
    }

    /// Advances one second. Reaching zero stops the countdown.
    ///
    /// Returns whether the state changed.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.running = false;
        }
        true
    }

    /// Play/pause. Does nothing once the countdown reached zero.
    pub fn toggle(&mut self) {
        if self.remaining_seconds == 0 {
            return;
        }
        self.running = !self.running;
    }

    /// Stops and restores the chosen duration, or [`DEFAULT_RESET_SECONDS`] when none was chosen.
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining_seconds = if self.duration_seconds > 0 {
            self.duration_seconds
        } else {
            DEFAULT_RESET_SECONDS
        };
    }

    /// Loads a preset without starting it.
    pub fn preset(&mut self, minutes: u32) {
        let seconds = minutes.saturating_mul(60);
        self.duration_seconds = seconds;
        self.remaining_seconds = seconds;
        self.running = false;
    }

    /// Applies one [`TimerCommand`].
    pub fn apply(&mut self, command: TimerCommand) {
        match command {
            TimerCommand::Toggle => self.toggle(),
            TimerCommand::Reset => self.reset(),
            TimerCommand::Preset { minutes } => self.preset(minutes),
            TimerCommand::Tick => {
                self.tick();
            }
        }
    }
}

/// Formats seconds as `MM:SS`. Minutes are not wrapped into hours.
pub fn format_countdown(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn countdown_ticks_to_zero_and_stops() {
        let mut timer = TimerState::default();
        timer.start(3);
        assert!(timer.running);
        assert!(timer.tick());
        assert!(timer.tick());
        assert!(timer.tick());
        assert_eq!(timer.remaining_seconds, 0);
        assert!(!timer.running);
        assert!(!timer.tick());
    }

    #[test]
    fn toggle_is_ignored_at_zero() {
        let mut timer = TimerState::default();
        timer.toggle();
        assert!(!timer.running);

        timer.preset(1);
        timer.toggle();
        assert!(timer.running);
        timer.toggle();
        assert!(!timer.running);
    }

    #[test]
    fn reset_falls_back_to_default_without_duration() {
        let mut timer = TimerState::default();
        timer.reset();
        assert_eq!(timer.remaining_seconds, DEFAULT_RESET_SECONDS);
        assert!(!timer.running);

        timer.start(120);
        timer.tick();
        timer.apply(TimerCommand::Reset);
        assert_eq!(
            timer,
            TimerState {
                duration_seconds: 120,
                remaining_seconds: 120,
                running: false,
            }
        );
    }

    #[test]
    fn preset_overwrites_without_starting() {
        let mut timer = TimerState::default();
        timer.start(30);
        timer.apply(TimerCommand::Preset { minutes: 15 });
        assert_eq!(timer.remaining_seconds, 900);
        assert!(!timer.running);
    }

    #[test]
    fn countdown_formats_as_minutes_and_seconds() {
        assert_eq!(format_countdown(0), "00:00");
        assert_eq!(format_countdown(65), "01:05");
        assert_eq!(format_countdown(900), "15:00");
        assert_eq!(format_countdown(6000), "100:00");
    }
}
