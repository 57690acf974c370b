//! Infinitely repeating keyframe animations.
//!
//! A [`LoopAnimation`] is evaluated two ways: [`LoopAnimation::css`] hands it
//! to the browser as an inline `animation` declaration, and
//! [`LoopAnimation::sample`] computes the value at a given clock time.

/// Timing curve applied between keyframes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed
    #[default]
    Linear,
    /// Slow start and end (cubic smoothstep)
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` onto the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }

    /// CSS `animation-timing-function` keyword.
    pub fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

/// A looping animation over evenly spaced keyframes.
#[derive(Clone, Debug, PartialEq)]
pub struct LoopAnimation {
    /// `@keyframes` name in the stylesheet
    pub name: &'static str,
    /// Values at evenly spaced points of one cycle
    pub keyframes: Vec<f64>,
    /// Seconds per cycle
    pub duration: f64,
    /// Seconds before the first cycle starts
    pub delay: f64,
    /// Curve between neighbouring keyframes
    pub easing: Easing,
}

impl LoopAnimation {
    /// Linear loop with no delay.
    pub fn new(name: &'static str, keyframes: &[f64], duration: f64) -> Self {
        Self {
            name,
            keyframes: keyframes.to_vec(),
            duration,
            delay: 0.0,
            easing: Easing::Linear,
        }
    }

    /// Set the start delay.
    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    /// Set the curve.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Value at clock time `t` seconds. Holds the first keyframe until the
    /// delay has passed.
    pub fn sample(&self, t: f64) -> f64 {
        let Some(&first) = self.keyframes.first() else {
            return 0.0;
        };
        let segments = self.keyframes.len() - 1;
        if segments == 0 || self.duration <= 0.0 {
            return first;
        }
        let local = t - self.delay;
        if local <= 0.0 {
            return first;
        }

        let progress = (local / self.duration).fract() * segments as f64;
        let seg = (progress.floor() as usize).min(segments - 1);
        let eased = self.easing.apply(progress - seg as f64);
        let (from, to) = (self.keyframes[seg], self.keyframes[seg + 1]);
        from + (to - from) * eased
    }

    /// Inline `animation` shorthand.
    pub fn css(&self) -> String {
        format!(
            "{} {:.2}s {} {:.2}s infinite",
            self.name,
            self.duration,
            self.easing.css(),
            self.delay
        )
    }
}

/// Join several loops into one `animation:` declaration.
pub fn animation_style(loops: &[LoopAnimation]) -> String {
    let parts: Vec<String> = loops.iter().map(LoopAnimation::css).collect();
    format!("animation: {};", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn holds_first_keyframe_during_delay() {
        let anim = LoopAnimation::new("bob", &[0.0, -10.0, 0.0], 2.0).with_delay(0.5);
        assert_eq!(anim.sample(0.0), 0.0);
        assert_eq!(anim.sample(0.5), 0.0);
    }

    #[test]
    fn hits_middle_keyframe_half_way() {
        let anim = LoopAnimation::new("bob", &[0.0, -10.0, 0.0], 2.0);
        assert!((anim.sample(1.0) - -10.0).abs() < EPS);
        assert!((anim.sample(0.5) - -5.0).abs() < EPS);
    }

    #[test]
    fn repeats_every_duration() {
        let anim = LoopAnimation::new("bob", &[0.0, -10.0, 0.0], 2.0)
            .with_delay(0.3)
            .with_easing(Easing::EaseInOut);
        for t in [0.4, 0.9, 1.7, 2.2] {
            assert!((anim.sample(t) - anim.sample(t + 2.0)).abs() < 1e-6);
            assert!((anim.sample(t) - anim.sample(t + 20.0)).abs() < 1e-6);
        }
    }

    #[test]
    fn linear_spin_is_proportional() {
        let spin = LoopAnimation::new("spin", &[0.0, -360.0], 20.0);
        assert!((spin.sample(5.0) - -90.0).abs() < EPS);
        assert!((spin.sample(25.0) - -90.0).abs() < 1e-6);
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        let e = Easing::EaseInOut;
        assert_eq!(e.apply(0.0), 0.0);
        assert_eq!(e.apply(1.0), 1.0);
        assert!((e.apply(0.5) - 0.5).abs() < EPS);
        assert!((e.apply(0.25) + e.apply(0.75) - 1.0).abs() < EPS);
    }

    #[test]
    fn degenerate_loops_are_constant() {
        assert_eq!(LoopAnimation::new("x", &[], 1.0).sample(3.0), 0.0);
        assert_eq!(LoopAnimation::new("x", &[4.0], 1.0).sample(3.0), 4.0);
        assert_eq!(LoopAnimation::new("x", &[4.0, 8.0], 0.0).sample(3.0), 4.0);
    }

    #[test]
    fn css_shorthand() {
        let anim = LoopAnimation::new("ring-bob", &[0.0, -10.0, 0.0], 2.4)
            .with_delay(0.2)
            .with_easing(Easing::EaseInOut);
        assert_eq!(anim.css(), "ring-bob 2.40s ease-in-out 0.20s infinite");

        let spin = LoopAnimation::new("ring-spin", &[0.0, -360.0], 20.0);
        assert_eq!(
            animation_style(&[anim, spin]),
            "animation: ring-bob 2.40s ease-in-out 0.20s infinite, ring-spin 20.00s linear 0.00s infinite;"
        );
    }
}
