use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerMode {
    Focus,
    Break,
}

impl TimerMode {
    pub fn default_duration_secs(self) -> u32 {
        match self {
            TimerMode::Focus => 25 * 60,
            TimerMode::Break => 5 * 60,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimerMode::Focus => "FOCUS",
            TimerMode::Break => "BREAK",
        }
    }
}

/// Pomodoro-style countdown. Mode and remaining time only change together
/// (switch_mode / reset), so the progress fraction cannot drift from the
/// displayed time.
pub struct FocusTimer {
    pub mode: TimerMode,
    pub minutes: u32,
    pub seconds: u32,
    pub running: bool,
    last_tick: Option<Instant>,
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusTimer {
    pub fn new() -> Self {
        let mode = TimerMode::Focus;
        let (minutes, seconds) = split_duration(mode.default_duration_secs());
        Self {
            mode,
            minutes,
            seconds,
            running: false,
            last_tick: None,
        }
    }

    pub fn remaining_secs(&self) -> u32 {
        self.minutes * 60 + self.seconds
    }

    pub fn total_secs(&self) -> u32 {
        self.mode.default_duration_secs()
    }

    /// Fraction elapsed, for the progress bar. Clamped to [0, 1].
    pub fn progress(&self) -> f32 {
        let total = self.total_secs();
        if total == 0 {
            return 0.0;
        }
        let elapsed = total.saturating_sub(self.remaining_secs());
        (elapsed as f32 / total as f32).clamp(0.0, 1.0)
    }

    /// Toggles Running/Idle without touching the remaining time.
    pub fn start_pause(&mut self) {
        self.running = !self.running;
        self.last_tick = None;
    }

    /// Idle + the current mode's default duration.
    pub fn reset(&mut self) {
        let (minutes, seconds) = split_duration(self.mode.default_duration_secs());
        self.minutes = minutes;
        self.seconds = seconds;
        self.running = false;
        self.last_tick = None;
    }

    /// Switching while running stops the countdown; the old mode never
    /// keeps ticking in the background.
    pub fn switch_mode(&mut self, mode: TimerMode) {
        self.mode = mode;
        self.reset();
    }

    /// One one-second step. Returns true exactly when the countdown reaches
    /// 00:00 and stops; the caller fires the alarm on that edge.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        match (self.minutes, self.seconds) {
            (0, 0) => {
                self.running = false;
                false
            }
            (m, 0) => {
                self.minutes = m - 1;
                self.seconds = 59;
                false
            }
            _ => {
                self.seconds -= 1;
                if self.minutes == 0 && self.seconds == 0 {
                    self.running = false;
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Applies as many whole-second ticks as have elapsed since the last
    /// poll, so a slow frame catches up instead of drifting. Returns true
    /// when the countdown finished during this poll.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.running {
            return false;
        }
        let Some(last) = self.last_tick else {
            self.last_tick = Some(now);
            return false;
        };
        let elapsed = now.duration_since(last).as_secs();
        if elapsed == 0 {
            return false;
        }
        self.last_tick = Some(last + Duration::from_secs(elapsed));

        let mut finished = false;
        for _ in 0..elapsed {
            if self.tick() {
                finished = true;
                break;
            }
        }
        finished
    }
}

fn split_duration(total_secs: u32) -> (u32, u32) {
    (total_secs / 60, total_secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_timer() -> FocusTimer {
        let mut timer = FocusTimer::new();
        timer.start_pause();
        timer
    }

    #[test]
    fn sixty_ticks_drop_one_minute() {
        let mut timer = running_timer();
        for _ in 0..60 {
            assert!(!timer.tick());
        }
        assert_eq!((timer.minutes, timer.seconds), (24, 0));
        assert!(timer.running);
    }

    #[test]
    fn underflow_stops_and_fires_once() {
        let mut timer = running_timer();
        timer.minutes = 0;
        timer.seconds = 1;

        assert!(timer.tick());
        assert_eq!((timer.minutes, timer.seconds), (0, 0));
        assert!(!timer.running);

        // restarting at 00:00 must not fire a second alarm
        timer.start_pause();
        assert!(!timer.tick());
        assert!(!timer.running);
    }

    #[test]
    fn pause_keeps_remaining_time() {
        let mut timer = running_timer();
        timer.tick();
        timer.start_pause();
        assert!(!timer.running);
        assert_eq!((timer.minutes, timer.seconds), (24, 59));
        assert!(!timer.tick());
        assert_eq!((timer.minutes, timer.seconds), (24, 59));
    }

    #[test]
    fn switch_mode_while_running_stops_and_resets() {
        let mut timer = running_timer();
        for _ in 0..90 {
            timer.tick();
        }
        timer.switch_mode(TimerMode::Break);
        assert!(!timer.running);
        assert_eq!((timer.minutes, timer.seconds), (5, 0));
        assert_eq!(timer.mode, TimerMode::Break);
    }

    #[test]
    fn reset_restores_mode_default_without_changing_mode() {
        let mut timer = running_timer();
        timer.switch_mode(TimerMode::Break);
        timer.start_pause();
        for _ in 0..30 {
            timer.tick();
        }
        timer.reset();
        assert_eq!(timer.mode, TimerMode::Break);
        assert_eq!((timer.minutes, timer.seconds), (5, 0));
        assert!(!timer.running);
    }

    #[test]
    fn progress_runs_zero_to_one() {
        let mut timer = running_timer();
        assert_eq!(timer.progress(), 0.0);
        for _ in 0..750 {
            timer.tick();
        }
        assert!((timer.progress() - 0.5).abs() < 1e-6);
        timer.minutes = 0;
        timer.seconds = 0;
        assert_eq!(timer.progress(), 1.0);
    }

    #[test]
    fn poll_applies_elapsed_whole_seconds() {
        let mut timer = running_timer();
        let start = Instant::now();
        assert!(!timer.poll(start));
        assert!(!timer.poll(start + Duration::from_millis(400)));
        assert_eq!((timer.minutes, timer.seconds), (25, 0));

        assert!(!timer.poll(start + Duration::from_secs(3)));
        assert_eq!((timer.minutes, timer.seconds), (24, 57));
    }
}
