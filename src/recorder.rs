use serde::{Deserialize, Serialize};

use crate::{
    neuron::Neuron,
    types::{Compartment, Dendrite},
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub t: f64,
    pub v_soma: f64,
    pub v_dend1: f64,
    pub v_dend2: f64,
    pub s_ext1: f64,
    pub s_ext2: f64,
}

impl Sample {
    pub fn get_voltage(&self, compartment: Compartment) -> f64 {
        match compartment {
            Compartment::Soma => self.v_soma,
            Compartment::Dend1 => self.v_dend1,
            Compartment::Dend2 => self.v_dend2,
        }
    }

    pub fn get_gate(&self, dendrite: Dendrite) -> f64 {
        match dendrite {
            Dendrite::Dend1 => self.s_ext1,
            Dendrite::Dend2 => self.s_ext2,
        }
    }
}

/// Append-only trace of the neuron, one sample per step including `t = 0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    samples: Vec<Sample>,
    soma_spike_times: Vec<f64>,
}

impl Recording {
    pub(crate) fn with_capacity(num_samples: usize) -> Self {
        Self {
            samples: Vec::with_capacity(num_samples),
            soma_spike_times: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, t: f64, neuron: &Neuron) {
        self.samples.push(Sample {
            t,
            v_soma: neuron.get_voltage(Compartment::Soma),
            v_dend1: neuron.get_voltage(Compartment::Dend1),
            v_dend2: neuron.get_voltage(Compartment::Dend2),
            s_ext1: neuron.get_gate(Dendrite::Dend1).s,
            s_ext2: neuron.get_gate(Dendrite::Dend2).s,
        });
    }

    pub(crate) fn record_soma_spike(&mut self, t: f64) {
        self.soma_spike_times.push(t);
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn soma_spike_times(&self) -> &[f64] {
        &self.soma_spike_times
    }

    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|sample| sample.t).collect()
    }

    pub fn trace(&self, compartment: Compartment) -> Vec<f64> {
        self.samples
            .iter()
            .map(|sample| sample.get_voltage(compartment))
            .collect()
    }

    pub fn peak_voltage(&self, compartment: Compartment) -> Option<f64> {
        self.samples
            .iter()
            .map(|sample| sample.get_voltage(compartment))
            .reduce(f64::max)
    }

    /// Peak of the trace relative to `baseline`, typically the leak reversal
    /// potential.
    pub fn peak_deflection(&self, compartment: Compartment, baseline: f64) -> Option<f64> {
        self.peak_voltage(compartment).map(|peak| peak - baseline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{params::NeuronParams, util::test_util::assert_approx_eq_slice};
    use float_cmp::assert_approx_eq;

    fn sample(t: f64, v_soma: f64, v_dend1: f64, v_dend2: f64) -> Sample {
        Sample {
            t,
            v_soma,
            v_dend1,
            v_dend2,
            s_ext1: 0.0,
            s_ext2: 0.0,
        }
    }

    #[test]
    fn record_neuron_state() {
        let neuron_params = NeuronParams::default();
        let mut neuron = Neuron::new(&neuron_params);
        neuron.get_gate_mut(Dendrite::Dend2).on_pre(0.3);

        let mut sut = Recording::with_capacity(1);
        assert!(sut.is_empty());
        sut.record(0.0, &neuron);

        assert_eq!(sut.len(), 1);
        assert_eq!(
            sut.samples()[0],
            Sample {
                t: 0.0,
                v_soma: neuron_params.e_l,
                v_dend1: neuron_params.e_l,
                v_dend2: neuron_params.e_l,
                s_ext1: 0.0,
                s_ext2: 0.3,
            }
        );
    }

    #[test]
    fn traces_and_peaks() {
        let sut = Recording {
            samples: vec![
                sample(0.0, -0.08, -0.08, -0.08),
                sample(0.1, -0.07, -0.05, -0.08),
                sample(0.2, -0.075, -0.06, -0.079),
            ],
            soma_spike_times: Vec::new(),
        };

        assert_approx_eq_slice(&sut.times(), &[0.0, 0.1, 0.2]);
        assert_approx_eq_slice(&sut.trace(Compartment::Dend1), &[-0.08, -0.05, -0.06]);

        assert_approx_eq!(f64, sut.peak_voltage(Compartment::Soma).unwrap(), -0.07);
        assert_approx_eq!(
            f64,
            sut.peak_deflection(Compartment::Dend1, -0.08).unwrap(),
            0.03,
            epsilon = 1e-12
        );
        assert_approx_eq!(
            f64,
            sut.peak_deflection(Compartment::Dend2, -0.08).unwrap(),
            0.001,
            epsilon = 1e-12
        );
    }

    #[test]
    fn empty_recording_has_no_peak() {
        let sut = Recording::default();
        assert_eq!(sut.peak_voltage(Compartment::Soma), None);
        assert_eq!(sut.peak_deflection(Compartment::Soma, -0.08), None);
    }

    #[test]
    fn soma_spikes() {
        let mut sut = Recording::default();
        sut.record_soma_spike(0.012);
        sut.record_soma_spike(0.019);
        assert_eq!(sut.soma_spike_times(), &[0.012, 0.019]);
    }

    #[test]
    fn sample_accessors() {
        let s = Sample {
            t: 0.0,
            v_soma: 1.0,
            v_dend1: 2.0,
            v_dend2: 3.0,
            s_ext1: 4.0,
            s_ext2: 5.0,
        };

        assert_eq!(s.get_voltage(Compartment::Soma), 1.0);
        assert_eq!(s.get_voltage(Compartment::Dend2), 3.0);
        assert_eq!(s.get_gate(Dendrite::Dend1), 4.0);
        assert_eq!(s.get_gate(Dendrite::Dend2), 5.0);
    }
}
