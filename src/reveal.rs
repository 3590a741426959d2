//! Fire-once reveal state for scroll-triggered animation.
//!
//! Each revealed block owns one [`Reveal`] latch. The latch flips the first time the block is
//! seen intersecting the viewport and ignores every later observation, so a block scrolled
//! back out of view keeps its resting position.

use crate::config::{REVEAL_DURATION_S, REVEAL_OFFSET_PX, STAGGER_DURATION_S, STAGGER_STEP_S};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reveal {
    revealed: bool,
}

impl Reveal {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed one intersection observation; returns `true` only on the transition to revealed.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }
}

/// Side the hidden block slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Starting (x, y) offset in pixels.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (0, REVEAL_OFFSET_PX),
            Self::Down => (0, -REVEAL_OFFSET_PX),
            Self::Left => (REVEAL_OFFSET_PX, 0),
            Self::Right => (-REVEAL_OFFSET_PX, 0),
        }
    }
}

/// Timing of a single reveal transition, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub duration: f64,
    pub delay: f64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            duration: REVEAL_DURATION_S,
            delay: 0.0,
        }
    }
}

impl Timing {
    /// Timing for the `index`th item of a staggered list, counted from the moment the
    /// whole list is revealed.
    pub fn staggered(index: usize) -> Self {
        Self {
            duration: STAGGER_DURATION_S,
            // whole centiseconds
            delay: (index as f64 * STAGGER_STEP_S * 100.0).round() / 100.0,
        }
    }
}

/// Inline style for a block in the given state.
pub fn reveal_style(revealed: bool, direction: Direction, timing: Timing) -> String {
    let transition = format!(
        "transition: opacity {d}s cubic-bezier(0.4, 0, 0.2, 1) {t}s, transform {d}s cubic-bezier(0.4, 0, 0.2, 1) {t}s",
        d = timing.duration,
        t = timing.delay
    );
    if revealed {
        format!("opacity: 1; transform: translate3d(0, 0, 0); {transition}")
    } else {
        let (x, y) = direction.offset();
        format!("opacity: 0; transform: translate3d({x}px, {y}px, 0); {transition}")
    }
}

/// Inline style for a skill bar; width grows to `level` once revealed.
pub fn skill_bar_style(revealed: bool, level: u8) -> String {
    let width = if revealed { level.min(100) } else { 0 };
    format!("width: {width}%; transition: width 1s ease-out 0.2s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once() {
        let mut reveal = Reveal::default();
        assert!(!reveal.is_revealed());
        assert!(!reveal.observe(false));
        assert!(!reveal.is_revealed());

        assert!(reveal.observe(true));
        assert!(reveal.is_revealed());

        // scrolled away and back again: no second transition, no revert
        assert!(!reveal.observe(false));
        assert!(reveal.is_revealed());
        assert!(!reveal.observe(true));
        assert!(reveal.is_revealed());
    }

    #[test]
    fn test_direction_offsets() {
        assert_eq!(Direction::Up.offset(), (0, 30));
        assert_eq!(Direction::Down.offset(), (0, -30));
        assert_eq!(Direction::Left.offset(), (30, 0));
        assert_eq!(Direction::Right.offset(), (-30, 0));
    }

    #[test]
    fn test_reveal_style() {
        let hidden = reveal_style(false, Direction::Left, Timing::default());
        assert!(hidden.starts_with("opacity: 0; transform: translate3d(30px, 0px, 0);"));
        assert!(hidden.contains("opacity 0.35s"));

        let shown = reveal_style(true, Direction::Left, Timing::staggered(2));
        assert!(shown.starts_with("opacity: 1; transform: translate3d(0, 0, 0);"));
        assert!(shown.contains("0.2s"));
    }

    #[test]
    fn test_staggered_timing() {
        assert_eq!(Timing::staggered(0), Timing { duration: 0.6, delay: 0.0 });
        assert_eq!(Timing::staggered(3), Timing { duration: 0.6, delay: 0.3 });
        assert_eq!(Timing::staggered(8).delay, 0.8);
        assert!(reveal_style(true, Direction::Up, Timing::staggered(1)).contains("opacity 0.6s"));
    }

    #[test]
    fn test_skill_bar_style() {
        assert!(skill_bar_style(false, 80).starts_with("width: 0%;"));
        assert!(skill_bar_style(true, 80).starts_with("width: 80%;"));
        assert!(skill_bar_style(true, 250).starts_with("width: 100%;"));
    }
}
