use log::warn;

use crate::util::time_to_step;

/// Pre-declared spike schedule for a fixed set of sources. Each source keeps a
/// forward-only cursor, so queries must come with a non-decreasing step.
#[derive(Debug, Clone)]
pub struct SpikeGenerator {
    sources: Vec<SourceSchedule>,
}

#[derive(Debug, Clone, Default)]
struct SourceSchedule {
    spike_steps: Vec<usize>,
    cursor: usize,
}

impl SpikeGenerator {
    /// Spike times are bucketed into steps of width `dt`. Times of one source
    /// must be non-decreasing.
    pub fn new(spike_times: &[Vec<f64>], dt: f64) -> Self {
        let sources = spike_times
            .iter()
            .map(|times| SourceSchedule {
                spike_steps: times.iter().map(|t| time_to_step(*t, dt)).collect(),
                cursor: 0,
            })
            .collect();

        Self { sources }
    }

    #[cfg(test)]
    pub fn num_sources(&self) -> usize {
        self.sources.len()
    }

    /// Number of spikes `source_id` emits in `[step * dt, (step + 1) * dt)`.
    /// Spikes scheduled before `step` that were never queried are skipped.
    pub fn num_spikes(&mut self, source_id: usize, step: usize) -> usize {
        let schedule = match self.sources.get_mut(source_id) {
            Some(schedule) => schedule,
            None => return 0,
        };

        while schedule.cursor < schedule.spike_steps.len()
            && schedule.spike_steps[schedule.cursor] < step
        {
            schedule.cursor += 1;
        }

        let mut count = 0;
        while schedule.cursor < schedule.spike_steps.len()
            && schedule.spike_steps[schedule.cursor] == step
        {
            schedule.cursor += 1;
            count += 1;
        }

        count
    }

    #[cfg(test)]
    pub fn num_pending(&self, source_id: usize) -> usize {
        self.sources
            .get(source_id)
            .map(|schedule| schedule.spike_steps.len() - schedule.cursor)
            .unwrap_or(0)
    }

    pub fn warn_about_late_spikes(&self, num_steps: usize) {
        for (source_id, schedule) in self.sources.iter().enumerate() {
            let num_late = schedule
                .spike_steps
                .iter()
                .filter(|step| **step > num_steps)
                .count();

            if num_late > 0 {
                warn!(
                    "input {} has {} spike(s) beyond the simulation window, they will not be delivered",
                    source_id, num_late
                );
            }
        }
    }
}
