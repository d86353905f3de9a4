use super::css_num;

/// Base step for staggered entrances, in seconds.
pub const BLUR_FADE_DELAY: f64 = 0.04;

/// Delay for the `index`th sibling of a cascading reveal.
pub fn stagger(base: f64, index: usize) -> f64 {
    base * index as f64
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    /// Seconds between crossing into view and starting the transition.
    pub delay: f64,
    pub duration: f64,
    /// Vertical offset of the hidden state, in px.
    pub offset: f64,
    /// Blur radius of the hidden state, in px.
    pub blur: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            delay: 0.0,
            duration: 0.4,
            offset: 6.0,
            blur: 6.0,
        }
    }
}

impl RevealConfig {
    pub fn with_delay(delay: f64) -> Self {
        Self {
            delay: delay.max(0.0),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealFrame {
    pub opacity: f64,
    pub offset: f64,
    pub blur: f64,
}

impl RevealFrame {
    pub fn css(&self) -> String {
        format!(
            "opacity:{};transform:translateY({}px);filter:blur({}px)",
            css_num(self.opacity),
            css_num(self.offset),
            css_num(self.blur)
        )
    }
}

/// Entrance animation that fires once, the first time its element is seen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    config: RevealConfig,
    state: RevealState,
}

impl Reveal {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            state: RevealState::Hidden,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    /// Feeds an intersection observation. Returns `true` only on the transition.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && self.state == RevealState::Hidden {
            self.state = RevealState::Revealed;
            true
        } else {
            false
        }
    }

    fn hidden_frame(&self) -> RevealFrame {
        RevealFrame {
            opacity: 0.0,
            offset: self.config.offset,
            blur: self.config.blur,
        }
    }

    /// Frame `elapsed` seconds after the transition fired. This is the curve the
    /// `EASE_OUT_CUBIC` transition in [`Reveal::style`] plays in the browser; the
    /// style's two poses are its first and last frames.
    pub fn frame(&self, elapsed: f64) -> RevealFrame {
        if self.state == RevealState::Hidden {
            return self.hidden_frame();
        }
        let RevealConfig {
            delay,
            duration,
            offset,
            blur,
        } = self.config;
        let t = if duration <= 0.0 {
            if elapsed >= delay {
                1.0
            } else {
                0.0
            }
        } else {
            ((elapsed - delay) / duration).clamp(0.0, 1.0)
        };
        let p = ease_out_cubic(t);
        RevealFrame {
            opacity: p,
            offset: offset * (1.0 - p),
            blur: blur * (1.0 - p),
        }
    }

    /// Inline style for CSS-driven rendering: the resting pose of the current
    /// state, plus the transition that carries it there once revealed.
    pub fn style(&self) -> String {
        match self.state {
            RevealState::Hidden => self.hidden_frame().css(),
            RevealState::Revealed => format!(
                "{};transition:opacity {d}s {EASE_OUT_CUBIC} {w}s,transform {d}s {EASE_OUT_CUBIC} {w}s,filter {d}s {EASE_OUT_CUBIC} {w}s",
                self.frame(self.config.delay + self.config.duration).css(),
                d = css_num(self.config.duration),
                w = css_num(self.config.delay),
            ),
        }
    }
}

const EASE_OUT_CUBIC: &str = "cubic-bezier(0.33,1,0.68,1)";

fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_until_observed() {
        let reveal = Reveal::new(RevealConfig::default());
        assert_eq!(reveal.state(), RevealState::Hidden);
        assert_eq!(reveal.frame(10.0).opacity, 0.0);
        assert!(reveal.style().starts_with("opacity:0;"));
    }

    #[test]
    fn test_reveals_exactly_once() {
        let mut reveal = Reveal::new(RevealConfig::default());
        assert!(!reveal.observe(false));
        assert!(reveal.observe(true));
        // scrolling away and back never re-triggers or re-hides
        assert!(!reveal.observe(false));
        assert!(reveal.is_revealed());
        assert!(!reveal.observe(true));
        assert_eq!(reveal.frame(1.0).opacity, 1.0);
        assert!(reveal.style().starts_with("opacity:1;"));
    }

    #[test]
    fn test_delay_holds_hidden_pose() {
        let mut reveal = Reveal::new(RevealConfig::with_delay(0.2));
        reveal.observe(true);
        let waiting = reveal.frame(0.1);
        assert_eq!(waiting.opacity, 0.0);
        assert_eq!(waiting.offset, 6.0);
        let midway = reveal.frame(0.4);
        assert!(midway.opacity > 0.5 && midway.opacity < 1.0);
        assert!(midway.blur < 6.0);
        let done = reveal.frame(0.6);
        assert_eq!(done.opacity, 1.0);
        assert_eq!(done.offset, 0.0);
        assert_eq!(done.blur, 0.0);
    }

    #[test]
    fn test_opacity_is_monotonic() {
        let mut reveal = Reveal::new(RevealConfig::default());
        reveal.observe(true);
        let mut last = 0.0;
        for i in 0..=50 {
            let o = reveal.frame(i as f64 * 0.01).opacity;
            assert!(o >= last);
            last = o;
        }
    }

    #[test]
    fn test_style_poses_are_frame_endpoints() {
        let config = RevealConfig::with_delay(0.2);
        let mut reveal = Reveal::new(config);
        assert_eq!(reveal.style(), reveal.frame(0.0).css());

        reveal.observe(true);
        let end = reveal.frame(config.delay + config.duration);
        assert_eq!(
            end,
            RevealFrame {
                opacity: 1.0,
                offset: 0.0,
                blur: 0.0
            }
        );
        assert!(reveal.style().starts_with(&format!("{};transition:", end.css())));
        // halfway through, ease-out is already past the linear midpoint
        let mid = reveal.frame(config.delay + config.duration / 2.0);
        assert!((mid.opacity - 0.875).abs() < 1e-9);
    }

    #[test]
    fn test_stagger() {
        assert_eq!(stagger(BLUR_FADE_DELAY, 0), 0.0);
        assert!((stagger(BLUR_FADE_DELAY, 3) - 0.12).abs() < 1e-12);
    }

    #[test]
    fn test_style_carries_delay() {
        let mut reveal = Reveal::new(RevealConfig::with_delay(0.08));
        reveal.observe(true);
        assert!(reveal.style().contains("0.4s cubic-bezier(0.33,1,0.68,1) 0.08s"));
    }
}
