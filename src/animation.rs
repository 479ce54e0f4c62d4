use std::fmt;
use std::time::Duration;

/// CSS animation declaration applied to a surface as the `animation` shorthand.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    pub name: String,
    /// The length of time that an animation takes to complete one cycle.
    pub duration: Duration,
    pub timing: TimingFunction,
    pub fill_mode: AnimationFillMode,
}

impl Animation {
    pub fn new(name: impl Into<String>, duration: Duration) -> Self {
        Self {
            name: name.into(),
            duration,
            timing: TimingFunction::Ease,
            fill_mode: AnimationFillMode::None,
        }
    }

    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    pub fn fill_mode(mut self, fill_mode: AnimationFillMode) -> Self {
        self.fill_mode = fill_mode;
        self
    }

    /// Forward "out" keyframes, the ripple grows from the pointer.
    pub fn ripple_out(duration: Duration) -> Self {
        Self::new(RippleKind::Out.name(), duration)
            .timing(TimingFunction::EaseOut)
            .fill_mode(AnimationFillMode::Forwards)
    }

    /// Reverse "in" keyframes, the ripple shrinks back to the pointer.
    pub fn ripple_in(duration: Duration) -> Self {
        Self::new(RippleKind::In.name(), duration)
            .timing(TimingFunction::EaseIn)
            .fill_mode(AnimationFillMode::Forwards)
    }

    pub fn shorthand(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}s {}",
            self.name,
            self.duration.as_secs_f32(),
            self.timing
        )?;
        match self.fill_mode {
            AnimationFillMode::None => Ok(()),
            fill_mode => write!(f, " {fill_mode}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RippleKind {
    Out,
    In,
}

impl RippleKind {
    pub fn name(&self) -> &'static str {
        match self {
            RippleKind::Out => "out",
            RippleKind::In => "in",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationFillMode {
    None,
    Forwards,
}

impl fmt::Display for AnimationFillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            AnimationFillMode::None => "none",
            AnimationFillMode::Forwards => "forwards",
        };
        f.write_str(keyword)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimingFunction {
    Ease,
    EaseIn,
    EaseOut,
    CubicBezier(f32, f32, f32, f32),
}

impl fmt::Display for TimingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimingFunction::Ease => f.write_str("ease"),
            TimingFunction::EaseIn => f.write_str("ease-in"),
            TimingFunction::EaseOut => f.write_str("ease-out"),
            TimingFunction::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_ripple_out_shorthand() {
        let animation = Animation::ripple_out(Duration::from_millis(500));
        assert_eq!(animation.shorthand(), "out 0.5s ease-out forwards")
    }

    #[test]
    pub fn test_ripple_in_shorthand() {
        let animation = Animation::ripple_in(Duration::from_millis(500));
        assert_eq!(animation.shorthand(), "in 0.5s ease-in forwards")
    }

    #[test]
    pub fn test_default_timing_is_ease() {
        let animation = Animation::new("fade", Duration::from_secs(1));
        assert_eq!(animation.shorthand(), "fade 1s ease")
    }

    #[test]
    pub fn test_shorthand_omits_default_fill_mode() {
        let animation = Animation::new("pulse", Duration::from_secs(2))
            .timing(TimingFunction::CubicBezier(0.1, 0.7, 1.0, 0.1));
        assert_eq!(animation.shorthand(), "pulse 2s cubic-bezier(0.1, 0.7, 1, 0.1)")
    }
}
