#[derive(Debug, thiserror::Error)]
pub enum StepError {
    #[error("step must be finite, got {0}")]
    NotFinite(f32),
    #[error("step must be positive, got {0}")]
    NotPositive(f32),
}

/// One of the three additive color channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Cyclic successor in wheel order; this is the channel that rises while
    /// `self` is active.
    pub const fn successor(self) -> Channel {
        match self {
            Channel::Red => Channel::Green,
            Channel::Green => Channel::Blue,
            Channel::Blue => Channel::Red,
        }
    }

    /// Cyclic predecessor in wheel order; this is the channel that falls
    /// while `self` is active.
    pub const fn predecessor(self) -> Channel {
        match self {
            Channel::Red => Channel::Blue,
            Channel::Green => Channel::Red,
            Channel::Blue => Channel::Green,
        }
    }
}

/// RGB uniform components driving the shader, nominally in `[0, 1]`.
///
/// A tick may overshoot a boundary by less than one step before the `<= 0` /
/// `>= 1` guards catch it, so callers must tolerate small excursions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorState {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl ColorState {
    /// Pure red, the start of the wheel.
    pub const RED: ColorState = ColorState {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };

    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn channel(&self, channel: Channel) -> f32 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    fn channel_mut(&mut self, channel: Channel) -> &mut f32 {
        match channel {
            Channel::Red => &mut self.r,
            Channel::Green => &mut self.g,
            Channel::Blue => &mut self.b,
        }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

/// Animation bookkeeping advanced once per frame tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleState {
    /// Channel whose successor is currently being raised toward 1.
    pub active: Channel,
    /// True while an earlier channel is being driven back toward 0.
    pub falling: bool,
}

impl Default for CycleState {
    fn default() -> Self {
        Self {
            active: Channel::Red,
            falling: false,
        }
    }
}

/// Fixed per-tick increment, validated once and constant for the process
/// lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step(f32);

impl Step {
    /// One 8-bit color level per tick.
    pub const DEFAULT: Step = Step(1.0 / 255.0);

    pub fn new(value: f32) -> Result<Self, StepError> {
        if !value.is_finite() {
            return Err(StepError::NotFinite(value));
        }
        if value <= 0.0 {
            return Err(StepError::NotPositive(value));
        }
        Ok(Step(value))
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Advances the color wheel by exactly one tick.
///
/// The traversal runs red, yellow, green, cyan, blue, magenta and back to
/// red, expressed as the original ramp sequence: the active channel's
/// successor climbs until it catches up, the predecessor drains, and once
/// green and blue are both exhausted the wheel restarts at the red phase.
/// The function is total over the reachable state space and has no side
/// effects; feeding the result back in drives the animation.
pub fn advance(color: ColorState, cycle: CycleState, step: Step) -> (ColorState, CycleState) {
    let step = step.get();
    let mut color = color;
    let mut cycle = cycle;

    // Wrap phase: past the red phase with green exhausted, blue is traded
    // for red one step per tick until both trailing channels are empty, then
    // the wheel restarts at red without touching the color that tick.
    if cycle.active != Channel::Red && color.g <= 0.0 {
        if color.b <= 0.0 {
            cycle.active = Channel::Red;
            return (color, cycle);
        }
        color.b -= step;
        color.r += step;
        return (color, cycle);
    }

    if !cycle.falling {
        *color.channel_mut(cycle.active.successor()) += step;
    } else if color.b >= 1.0 {
        // Blue saturated: green drains. Advancing the active channel takes
        // precedence over the decrement once green is already empty, and
        // skips the transition checks for that tick.
        if color.g <= 0.0 {
            cycle.active = cycle.active.successor();
            return (color, cycle);
        }
        color.g -= step;
        if color.g <= 0.0 {
            cycle.falling = false;
        }
    } else {
        let falling = cycle.active.predecessor();
        *color.channel_mut(falling) -= step;
        if color.channel(falling) <= 0.0 {
            cycle.falling = false;
        }
    }

    // Phase transitions, evaluated on the same tick.
    if cycle.active == Channel::Green && color.b >= 1.0 {
        cycle.falling = true;
    } else if !cycle.falling
        && color.channel(cycle.active.successor()) >= color.channel(cycle.active)
    {
        cycle.falling = true;
        cycle.active = cycle.active.successor();
    }

    (color, cycle)
}

/// Owns the animation state and advances it once per frame tick.
#[derive(Debug, Clone)]
pub struct HueCycle {
    color: ColorState,
    cycle: CycleState,
    step: Step,
}

impl HueCycle {
    /// Starts the wheel at red with the green ramp ahead of it.
    pub fn new(step: Step) -> Self {
        Self {
            color: ColorState::RED,
            cycle: CycleState::default(),
            step,
        }
    }

    /// Advances one tick and returns the updated triple for the uniform sink.
    pub fn tick(&mut self) -> [f32; 3] {
        let (color, cycle) = advance(self.color, self.cycle, self.step);
        self.color = color;
        self.cycle = cycle;
        color.to_array()
    }

    pub fn color(&self) -> ColorState {
        self.color
    }

    pub fn state(&self) -> CycleState {
        self.cycle
    }

    pub fn step(&self) -> Step {
        self.step
    }
}

impl Default for HueCycle {
    fn default() -> Self {
        Self::new(Step::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: f32 = 1.0 / 255.0;

    #[test]
    fn green_rises_from_red() {
        let (color, cycle) = advance(
            ColorState::RED,
            CycleState::default(),
            Step::new(0.1).unwrap(),
        );
        assert_eq!(color, ColorState::new(1.0, 0.1, 0.0));
        assert_eq!(cycle, CycleState::default());
    }

    #[test]
    fn catch_up_pivots_to_the_next_phase() {
        let start = ColorState::new(1.0, 1.0, 0.0);
        let (color, cycle) = advance(start, CycleState::default(), Step::new(0.1).unwrap());
        // The rising increment lands before the catch-up check, so green
        // overshoots by one step on the pivot tick.
        assert!((color.g - 1.1).abs() < 1e-6);
        assert_eq!(color.r, 1.0);
        assert_eq!(color.b, 0.0);
        assert_eq!(cycle.active, Channel::Green);
        assert!(cycle.falling);
    }

    #[test]
    fn wrap_phase_trades_blue_for_red() {
        let color = ColorState::new(0.2, 0.0, 0.8);
        let cycle = CycleState {
            active: Channel::Green,
            falling: true,
        };
        let (next, out) = advance(color, cycle, Step::new(0.1).unwrap());
        assert!((next.r - 0.3).abs() < 1e-6);
        assert_eq!(next.g, 0.0);
        assert!((next.b - 0.7).abs() < 1e-6);
        assert_eq!(out, cycle);
    }

    #[test]
    fn exhausted_trailing_channels_reset_without_mutation() {
        let color = ColorState::new(0.97, 0.0, 0.0);
        let cycle = CycleState {
            active: Channel::Green,
            falling: true,
        };
        let (next_color, next_cycle) = advance(color, cycle, Step::DEFAULT);
        assert_eq!(next_color, color);
        assert_eq!(next_cycle.active, Channel::Red);
        assert_eq!(next_cycle.falling, cycle.falling);
    }

    #[test]
    fn falling_clears_after_the_wheel_resets() {
        // State immediately after a wrap reset: red phase, falling still
        // set, blue resting at or below zero.
        let color = ColorState::new(1.0, 0.0, -0.002);
        let cycle = CycleState {
            active: Channel::Red,
            falling: true,
        };
        let (next, out) = advance(color, cycle, Step::DEFAULT);
        assert_eq!(out.active, Channel::Red);
        assert!(!out.falling);
        assert!(next.b < color.b);
        assert_eq!(next.r, color.r);
        assert_eq!(next.g, color.g);
    }

    #[test]
    fn advance_is_deterministic() {
        let color = ColorState::new(0.3, 0.9, 0.2);
        let cycle = CycleState {
            active: Channel::Green,
            falling: true,
        };
        assert_eq!(
            advance(color, cycle, Step::DEFAULT),
            advance(color, cycle, Step::DEFAULT)
        );
    }

    #[test]
    fn active_channel_never_reaches_blue() {
        let mut color = ColorState::RED;
        let mut cycle = CycleState::default();
        for _ in 0..5000 {
            let (c, s) = advance(color, cycle, Step::DEFAULT);
            color = c;
            cycle = s;
            assert_ne!(cycle.active, Channel::Blue);
        }
    }

    #[test]
    fn full_cycle_returns_to_red() {
        let mut color = ColorState::RED;
        let mut cycle = CycleState::default();
        let mut reset_tick = None;
        for tick in 1..=2000 {
            let was_active = cycle.active;
            let (next_color, next_cycle) = advance(color, cycle, Step::DEFAULT);
            if was_active != Channel::Red && next_cycle.active == Channel::Red {
                assert_eq!(next_color, color, "the reset tick must not touch the color");
                color = next_color;
                cycle = next_cycle;
                reset_tick = Some(tick);
                break;
            }
            color = next_color;
            cycle = next_cycle;
        }

        let reset_tick = reset_tick.expect("wheel never wrapped back to red");
        assert!(reset_tick > 255 * 4, "wrapped after only {reset_tick} ticks");
        assert!((color.r - 1.0).abs() <= 3.0 * STEP);
        assert!(color.g <= 0.0);
        assert!(color.b <= 0.0);
        assert_eq!(cycle.active, Channel::Red);
    }

    #[test]
    fn channels_are_monotonic_within_a_phase() {
        let mut color = ColorState::RED;
        let mut cycle = CycleState::default();
        let mut samples = vec![(color, cycle)];
        for _ in 0..3000 {
            let (c, s) = advance(color, cycle, Step::DEFAULT);
            color = c;
            cycle = s;
            samples.push((color, cycle));
        }

        let mut run = vec![samples[0].0];
        let mut run_cycle = samples[0].1;
        for &(color, cycle) in &samples[1..] {
            if cycle == run_cycle {
                run.push(color);
            } else {
                assert_monotonic(&run);
                run = vec![color];
                run_cycle = cycle;
            }
        }
        assert_monotonic(&run);
    }

    fn assert_monotonic(run: &[ColorState]) {
        for channel in [Channel::Red, Channel::Green, Channel::Blue] {
            let values: Vec<f32> = run.iter().map(|c| c.channel(channel)).collect();
            let rises = values.windows(2).any(|w| w[1] > w[0]);
            let falls = values.windows(2).any(|w| w[1] < w[0]);
            assert!(
                !(rises && falls),
                "channel {channel:?} changed direction within a phase"
            );
        }
    }

    #[test]
    fn hue_cycle_matches_the_pure_function() {
        let mut hue = HueCycle::default();
        let mut color = ColorState::RED;
        let mut cycle = CycleState::default();
        for _ in 0..600 {
            let ticked = hue.tick();
            let (c, s) = advance(color, cycle, Step::DEFAULT);
            color = c;
            cycle = s;
            assert_eq!(ticked, color.to_array());
        }
        assert_eq!(hue.state(), cycle);
    }

    #[test]
    fn step_rejects_degenerate_values() {
        assert!(Step::new(0.0).is_err());
        assert!(Step::new(-0.25).is_err());
        assert!(Step::new(f32::NAN).is_err());
        assert!(Step::new(f32::INFINITY).is_err());
        assert_eq!(Step::new(0.5).unwrap().get(), 0.5);
    }
}
