//! Timing arithmetic shared by the staggered reveals and the counters.

/// Delay for the `index`th item of a cascade.
pub fn stagger(index: usize, step_ms: u32, base_ms: u32) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    index.saturating_mul(step_ms).saturating_add(base_ms)
}

/// A fixed number of evenly spaced ticks over a duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickPlan {
    pub duration_ms: u32,
    pub steps: u32,
}

impl TickPlan {
    pub const fn new(duration_ms: u32, steps: u32) -> Self {
        Self { duration_ms, steps }
    }

    pub fn interval_ms(&self) -> u32 {
        self.duration_ms / self.steps.max(1)
    }

    /// How many frames an animation towards `target` emits. Zero is already there.
    pub fn frames(&self, target: u64) -> u32 {
        if target == 0 {
            1
        } else {
            self.steps.max(1)
        }
    }

    /// Value shown at `frame` (1-based), rounded half up. The last frame is exactly `target`.
    pub fn value_at(&self, target: u64, frame: u32) -> u64 {
        let steps = u128::from(self.steps.max(1));
        let frame = u128::from(frame);
        if frame >= steps {
            return target;
        }
        let scaled = u128::from(target) * frame * 2 + steps;
        (scaled / (steps * 2)) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_is_index_times_step() {
        for k in 0..6 {
            assert_eq!(stagger(k, 80, 0), k as u32 * 80);
        }
    }

    #[test]
    fn test_stagger_with_base_offset() {
        assert_eq!(stagger(0, 120, 200), 200);
        assert_eq!(stagger(3, 120, 200), 560);
    }

    #[test]
    fn test_stagger_saturates() {
        assert_eq!(stagger(usize::MAX, 80, 0), u32::MAX);
    }

    #[test]
    fn test_interval_divides_duration() {
        assert_eq!(TickPlan::new(1200, 40).interval_ms(), 30);
        assert_eq!(TickPlan::new(1200, 0).interval_ms(), 1200);
    }

    #[test]
    fn test_last_frame_snaps_to_target() {
        let plan = TickPlan::new(1200, 40);
        for target in [1, 7, 42, 99, 1000, 123_457] {
            assert_eq!(plan.value_at(target, plan.frames(target)), target);
        }
    }

    #[test]
    fn test_values_rise_monotonically() {
        let plan = TickPlan::new(1200, 40);
        let values: Vec<u64> = (1..=plan.frames(42)).map(|f| plan.value_at(42, f)).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(values[0], 1); // 42 / 40 = 1.05
        assert_eq!(values[19], 21);
        assert_eq!(*values.last().unwrap(), 42);
    }

    #[test]
    fn test_rounds_half_up() {
        let plan = TickPlan::new(1200, 40);
        // 1 * 20 / 40 = 0.5
        assert_eq!(plan.value_at(1, 20), 1);
        assert_eq!(plan.value_at(1, 19), 0);
    }

    #[test]
    fn test_zero_target_is_single_frame() {
        let plan = TickPlan::new(1200, 40);
        assert_eq!(plan.frames(0), 1);
        assert_eq!(plan.value_at(0, 1), 0);
    }
}
