/// Steps a number from zero up to a target in equal increments.
#[derive(Debug, Clone)]
pub struct CountUp {
    target: u32,
    steps: u32,
    step: u32,
}

impl CountUp {
    pub fn new(target: u32, steps: u32) -> Self {
        Self {
            target,
            steps: steps.max(1),
            step: 0,
        }
    }

    /// Reads the leading integer of a stat such as `"250+"`.
    pub fn parse_target(text: &str) -> Option<u32> {
        let digits: String = text
            .trim_start()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().ok()
    }

    /// Next value to show, or `None` once the target has been shown.
    pub fn tick(&mut self) -> Option<u32> {
        if self.step == self.steps {
            return None;
        }
        self.step += 1;
        let value = u64::from(self.target) * u64::from(self.step) / u64::from(self.steps);
        Some(value as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaches_target_in_given_steps() {
        let mut count = CountUp::new(250, 30);
        let values: Vec<u32> = std::iter::from_fn(|| count.tick()).collect();
        assert_eq!(values.len(), 30);
        assert_eq!(values[0], 8);
        assert_eq!(*values.last().unwrap(), 250);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn zero_steps_still_lands_on_target() {
        let mut count = CountUp::new(7, 0);
        assert_eq!(count.tick(), Some(7));
        assert_eq!(count.tick(), None);
    }

    #[test]
    fn parses_stat_text() {
        assert_eq!(CountUp::parse_target("250+"), Some(250));
        assert_eq!(CountUp::parse_target("от 24 часов"), None);
    }
}
