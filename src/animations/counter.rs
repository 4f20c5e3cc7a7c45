//! Linear count-up tween behind the stats band.

/// Total run time of a count-up.
pub const COUNT_DURATION_MS: u32 = 2000;

/// Update cadence, roughly one display frame.
pub const COUNT_TICK_MS: u32 = 16;

/// Counts from zero to an integer target in fixed increments, clamping on
/// the last step so the target is hit exactly. The rendered value is the
/// floor of the running total, which keeps intermediate frames integral.
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    target: f64,
    increment: f64,
    current: f64,
    done: bool,
}

impl CountUp {
    pub fn new(target: u32) -> Self {
        let ticks = (COUNT_DURATION_MS / COUNT_TICK_MS) as f64;
        Self {
            target: target as f64,
            increment: target as f64 / ticks,
            current: 0.0,
            done: target == 0,
        }
    }

    /// Advances one tick. Returns true while more ticks are needed.
    pub fn tick(&mut self) -> bool {
        if self.done {
            return false;
        }
        self.current += self.increment;
        if self.current >= self.target {
            self.current = self.target;
            self.done = true;
        }
        !self.done
    }

    /// The value to render right now.
    pub fn display(&self) -> u32 {
        self.current as u32
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(mut tween: CountUp) -> (u32, u32) {
        let mut ticks = 0;
        while tween.tick() {
            ticks += 1;
            assert!(ticks < 10_000, "tween never finished");
        }
        (ticks + 1, tween.display())
    }

    #[test]
    fn reaches_the_target_exactly() {
        let (_, value) = run_to_completion(CountUp::new(100));
        assert_eq!(value, 100);
        let (_, value) = run_to_completion(CountUp::new(500));
        assert_eq!(value, 500);
    }

    #[test]
    fn finishes_in_the_expected_tick_count() {
        // 1000 divides evenly into the tick budget, so the increment is
        // exact and the tween lands on the final tick precisely.
        let expected = COUNT_DURATION_MS / COUNT_TICK_MS;
        let (ticks, _) = run_to_completion(CountUp::new(1000));
        assert_eq!(ticks, expected);
    }

    #[test]
    fn never_overshoots() {
        let mut tween = CountUp::new(97);
        while tween.tick() {
            assert!(tween.display() <= 97);
        }
        assert_eq!(tween.display(), 97);
    }

    #[test]
    fn intermediate_values_are_monotonic() {
        let mut tween = CountUp::new(1200);
        let mut last = tween.display();
        while tween.tick() {
            let now = tween.display();
            assert!(now >= last);
            last = now;
        }
    }

    #[test]
    fn zero_target_is_done_immediately() {
        let mut tween = CountUp::new(0);
        assert!(tween.is_done());
        assert!(!tween.tick());
        assert_eq!(tween.display(), 0);
    }

    #[test]
    fn finished_tween_stays_put() {
        let mut tween = CountUp::new(10);
        while tween.tick() {}
        assert!(!tween.tick());
        assert_eq!(tween.display(), 10);
    }
}
