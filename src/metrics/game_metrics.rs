use std::time::{Duration, Instant};

/// Per-session statistics shown next to the board. Nothing here outlives
/// the process.
pub struct GameMetrics {
    /// When the clock last resumed; `None` while paused or after game over
    running_since: Option<Instant>,
    /// Play time accumulated before the last pause
    banked: Duration,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
    pub last_score: Option<u32>,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            running_since: Some(Instant::now()),
            banked: Duration::ZERO,
            elapsed_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
            last_score: None,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.banked
            + self
                .running_since
                .map(|since| since.elapsed())
                .unwrap_or(Duration::ZERO);
    }

    pub fn on_game_start(&mut self) {
        self.running_since = Some(Instant::now());
        self.banked = Duration::ZERO;
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.stop_clock();
        self.games_played += 1;
        self.last_score = Some(final_score);
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    /// Stop or resume the play clock
    pub fn set_paused(&mut self, paused: bool) {
        if paused {
            self.stop_clock();
        } else if self.running_since.is_none() {
            self.running_since = Some(Instant::now());
        }
    }

    fn stop_clock(&mut self) {
        if let Some(since) = self.running_since.take() {
            self.banked += since.elapsed();
        }
        self.elapsed_time = self.banked;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_pads_minutes_and_seconds() {
        let mut metrics = GameMetrics::new();
        for (secs, expected) in [(0, "00:00"), (59, "00:59"), (61, "01:01"), (6000, "100:00")] {
            metrics.elapsed_time = Duration::from_secs(secs);
            assert_eq!(metrics.format_time(), expected);
        }
    }

    #[test]
    fn test_game_over_bookkeeping() {
        let mut metrics = GameMetrics::new();
        assert_eq!(metrics.last_score, None);

        for (score, best) in [(4, 4), (2, 4), (9, 9)] {
            metrics.on_game_over(score);
            assert_eq!(metrics.last_score, Some(score));
            assert_eq!(metrics.high_score, best);
        }
        assert_eq!(metrics.games_played, 3);
    }

    #[test]
    fn test_game_start_resets_time() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();

        assert!(metrics.elapsed_time.as_millis() >= 50);

        metrics.on_game_start();
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() < 50);
    }

    #[test]
    fn test_clock_stops_while_paused() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(20));
        metrics.set_paused(true);
        let frozen = metrics.elapsed_time;
        assert!(frozen.as_millis() >= 20);

        std::thread::sleep(Duration::from_millis(30));
        metrics.update();
        assert_eq!(metrics.elapsed_time, frozen);

        metrics.set_paused(false);
        metrics.update();
        assert!(metrics.elapsed_time >= frozen);
    }

    #[test]
    fn test_clock_stops_at_game_over() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_over(3);
        let frozen = metrics.elapsed_time;
        std::thread::sleep(Duration::from_millis(20));
        metrics.update();
        assert_eq!(metrics.elapsed_time, frozen);
    }
}
