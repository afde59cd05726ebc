use std::str::FromStr;

use thiserror::Error;

/// Entry offset in Tailwind spacing units (`translate-x-16` and friends).
pub const REVEAL_OFFSET: i32 = 16;
pub const DEFAULT_DURATION_MS: u32 = 800;

/// The side content arrives from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Left,
    Right,
    Up,
    Down,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown reveal direction: {0}")]
pub struct UnknownDirection(pub String);

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            other => Err(UnknownDirection(other.to_string())),
        }
    }
}

impl Direction {
    /// Offset applied while hidden, as `(x, y)`. It points away from where the
    /// content ends up, so `Up` starts below and `Down` starts above.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Left => (-REVEAL_OFFSET, 0),
            Direction::Right => (REVEAL_OFFSET, 0),
            Direction::Up => (0, REVEAL_OFFSET),
            Direction::Down => (0, -REVEAL_OFFSET),
        }
    }

    fn hidden_class(self) -> &'static str {
        match self {
            Direction::Left => "opacity-0 -translate-x-16",
            Direction::Right => "opacity-0 translate-x-16",
            Direction::Up => "opacity-0 translate-y-16",
            Direction::Down => "opacity-0 -translate-y-16",
        }
    }
}

/// Interpolated presentation of a revealed element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealFrame {
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl RevealFrame {
    pub const SETTLED: RevealFrame = RevealFrame {
        opacity: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealConfig {
    pub direction: Direction,
    pub delay_ms: u32,
    pub duration_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Left,
            delay_ms: 0,
            duration_ms: DEFAULT_DURATION_MS,
        }
    }
}

impl RevealConfig {
    pub fn new(direction: Direction, delay_ms: u32, duration_ms: u32) -> Self {
        Self {
            direction,
            delay_ms,
            duration_ms,
        }
    }

    pub fn initial_frame(&self) -> RevealFrame {
        let (x, y) = self.direction.offset();
        RevealFrame {
            opacity: 0.0,
            translate_x: x as f64,
            translate_y: y as f64,
        }
    }

    pub fn final_frame(&self) -> RevealFrame {
        RevealFrame::SETTLED
    }

    /// Frame `elapsed_ms` after the element became visible, eased out.
    pub fn frame_after(&self, elapsed_ms: u32) -> RevealFrame {
        if elapsed_ms <= self.delay_ms {
            return if self.duration_ms == 0 && elapsed_ms == self.delay_ms {
                self.final_frame()
            } else {
                self.initial_frame()
            };
        }
        let running = elapsed_ms - self.delay_ms;
        if self.duration_ms == 0 || running >= self.duration_ms {
            return self.final_frame();
        }
        let t = running as f64 / self.duration_ms as f64;
        let eased = 1.0 - (1.0 - t).powi(3);
        let start = self.initial_frame();
        RevealFrame {
            opacity: eased,
            translate_x: start.translate_x * (1.0 - eased),
            translate_y: start.translate_y * (1.0 - eased),
        }
    }

    pub fn class(&self, visible: bool, extra: &str) -> String {
        let state = if visible {
            "opacity-100 translate-x-0 translate-y-0"
        } else {
            self.direction.hidden_class()
        };
        if extra.is_empty() {
            format!("transition-all ease-out {state}")
        } else {
            format!("transition-all ease-out {state} {extra}")
        }
    }

    pub fn style(&self) -> String {
        format!(
            "transition-duration: {}ms; transition-delay: {}ms",
            self.duration_ms, self.delay_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RevealConfig::default();
        assert_eq!(config.direction, Direction::Left);
        assert_eq!(config.delay_ms, 0);
        assert_eq!(config.duration_ms, 800);
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!("up".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("right".parse::<Direction>(), Ok(Direction::Right));
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn test_offset_is_opposite_arrival() {
        assert_eq!(Direction::Left.offset(), (-16, 0));
        assert_eq!(Direction::Right.offset(), (16, 0));
        assert_eq!(Direction::Up.offset(), (0, 16));
        assert_eq!(Direction::Down.offset(), (0, -16));
    }

    #[test]
    fn test_right_reveal_timeline() {
        let config = RevealConfig::new(Direction::Right, 400, 800);
        let start = config.initial_frame();
        assert_eq!(start.opacity, 0.0);
        assert_eq!(start.translate_x, 16.0);
        assert_eq!(start.translate_y, 0.0);

        // nothing moves during the delay
        assert_eq!(config.frame_after(0), start);
        assert_eq!(config.frame_after(400), start);

        let mid = config.frame_after(800);
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
        assert!(mid.translate_x > 0.0 && mid.translate_x < 16.0);

        assert_eq!(config.frame_after(1200), RevealFrame::SETTLED);
        assert_eq!(config.frame_after(5000), config.final_frame());
    }

    #[test]
    fn test_frames_progress_monotonically() {
        let config = RevealConfig::new(Direction::Up, 0, 800);
        let mut last = config.frame_after(0);
        for ms in (50..=800).step_by(50) {
            let frame = config.frame_after(ms);
            assert!(frame.opacity >= last.opacity);
            assert!(frame.translate_y <= last.translate_y);
            last = frame;
        }
        assert_eq!(last, RevealFrame::SETTLED);
    }

    #[test]
    fn test_zero_duration_snaps() {
        let config = RevealConfig::new(Direction::Down, 100, 0);
        assert_eq!(config.frame_after(50), config.initial_frame());
        assert_eq!(config.frame_after(100), RevealFrame::SETTLED);
    }

    #[test]
    fn test_class_and_style() {
        let config = RevealConfig::new(Direction::Down, 250, 600);
        assert_eq!(
            config.class(false, ""),
            "transition-all ease-out opacity-0 -translate-y-16"
        );
        assert_eq!(
            config.class(true, "mb-6"),
            "transition-all ease-out opacity-100 translate-x-0 translate-y-0 mb-6"
        );
        assert_eq!(
            config.style(),
            "transition-duration: 600ms; transition-delay: 250ms"
        );
    }
}
