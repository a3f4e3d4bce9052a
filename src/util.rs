// upper bound for step counts derived from durations
pub const MAX_NUM_STEPS: usize = u32::MAX as usize;

// tolerance in units of steps, absorbs rounding noise of t / dt
const STEP_TOLERANCE: f64 = 1e-6;

/// Index of the step whose interval `[step * dt, (step + 1) * dt)` contains `t`.
pub fn time_to_step(t: f64, dt: f64) -> usize {
    (t / dt + STEP_TOLERANCE).floor() as usize
}

/// Smallest step count whose total duration reaches `duration`.
pub fn get_num_steps(duration: f64, dt: f64) -> usize {
    (duration / dt - STEP_TOLERANCE).ceil().max(0.0) as usize
}

pub fn duration_to_steps(duration: f64, dt: f64) -> usize {
    (duration / dt).round() as usize
}

pub fn step_to_time(step: usize, dt: f64) -> f64 {
    step as f64 * dt
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spike_time_to_step() {
        assert_eq!(time_to_step(0.0, 1e-4), 0);
        assert_eq!(time_to_step(0.05, 1e-4), 500);
        assert_eq!(time_to_step(0.05005, 1e-4), 500);
        assert_eq!(time_to_step(0.0999, 1e-4), 999);
        assert_eq!(time_to_step(0.3, 0.1), 3);
    }

    #[test]
    fn num_steps() {
        assert_eq!(get_num_steps(0.1, 1e-4), 1000);
        assert_eq!(get_num_steps(0.3, 0.1), 3);
        assert_eq!(get_num_steps(0.25, 0.1), 3);
        assert_eq!(get_num_steps(1e-5, 1e-4), 1);
    }

    #[test]
    fn refractory_steps() {
        assert_eq!(duration_to_steps(0.002, 1e-4), 20);
        assert_eq!(duration_to_steps(0.0, 1e-4), 0);
    }
}
