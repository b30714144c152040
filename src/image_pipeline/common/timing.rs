use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct StepTiming {
    pub name: String,
    pub duration: Duration,
}

impl StepTiming {
    pub fn millis(&self) -> f64 {
        self.duration.as_secs_f64() * 1000.0
    }
}

/// Ordered record of named durations. Repeated names accumulate in `get_step`.
#[derive(Debug, Default)]
pub struct PipelineTimings {
    steps: Vec<StepTiming>,
    step_map: HashMap<String, Duration>,
}

impl PipelineTimings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_step(&mut self, name: impl Into<String>, duration: Duration) {
        let name = name.into();
        *self.step_map.entry(name.clone()).or_insert(Duration::ZERO) += duration;
        self.steps.push(StepTiming { name, duration });
    }

    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.duration).sum()
    }

    pub fn get_step(&self, name: &str) -> Option<Duration> {
        self.step_map.get(name).copied()
    }

    pub fn steps(&self) -> &[StepTiming] {
        &self.steps
    }

    /// Per-step breakdown with share of the total, followed by the total.
    pub fn summary_lines(&self) -> Vec<String> {
        let total = self.total_duration();
        let mut lines = vec![format!("{:-<60}", "")];
        for step in &self.steps {
            let percentage = if total.as_secs_f64() > 0.0 {
                (step.duration.as_secs_f64() / total.as_secs_f64()) * 100.0
            } else {
                0.0
            };
            lines.push(format!(
                "{:<30} {:>12.3}ms ({:>5.1}%)",
                step.name,
                step.millis(),
                percentage
            ));
        }
        lines.push(format!("{:-<60}", ""));
        lines.push(format!(
            "{:<30} {:>12.3}ms",
            "Total",
            total.as_secs_f64() * 1000.0
        ));
        lines
    }

    pub fn print_summary(&self) {
        println!("\nRecolor Timing Summary:");
        for line in self.summary_lines() {
            println!("{}", line);
        }
    }
}

pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            name: name.into(),
        }
    }

    pub fn stop(self) -> (String, Duration) {
        (self.name, self.start.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_steps_accumulate() {
        let mut timings = PipelineTimings::new();
        timings.add_step("parallel(2)", Duration::from_millis(5));
        timings.add_step("sequential", Duration::from_millis(3));
        timings.add_step("parallel(2)", Duration::from_millis(7));

        assert_eq!(timings.steps().len(), 3);
        assert_eq!(timings.get_step("parallel(2)"), Some(Duration::from_millis(12)));
        assert_eq!(timings.get_step("missing"), None);
        assert_eq!(timings.total_duration(), Duration::from_millis(15));
    }

    #[test]
    fn test_timer_keeps_its_name() {
        let timer = Timer::start("decode");
        let (name, duration) = timer.stop();
        assert_eq!(name, "decode");
        assert!(duration >= Duration::ZERO);
    }

    #[test]
    fn test_summary_lists_every_step_and_total() {
        let mut timings = PipelineTimings::new();
        timings.add_step("decode_source", Duration::from_millis(10));
        timings.add_step("sequential", Duration::from_millis(30));
        timings.add_step("parallel(2)", Duration::from_millis(60));

        let lines = timings.summary_lines();
        assert_eq!(lines.len(), 6);
        assert!(lines[1].starts_with("decode_source"));
        assert!(lines[1].ends_with("10.000ms ( 10.0%)"));
        assert!(lines[2].ends_with("30.000ms ( 30.0%)"));
        assert!(lines[3].starts_with("parallel(2)"));
        assert!(lines[3].ends_with("60.000ms ( 60.0%)"));
        assert!(lines[5].starts_with("Total"));
        assert!(lines[5].ends_with("100.000ms"));
    }

    #[test]
    fn test_summary_of_empty_timings() {
        let lines = PipelineTimings::new().summary_lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[2].ends_with("0.000ms"));
    }
}
