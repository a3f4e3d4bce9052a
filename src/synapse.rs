use crate::{params::ExtSynapseParams, types::Dendrite};

/// One-to-one wiring of an external spike source onto a dendrite.
#[derive(Debug, Clone)]
pub struct ExtSynapse {
    pub source_id: usize,
    pub target: Dendrite,
    pub weight: f64,
}

impl ExtSynapse {
    pub fn new(source_id: usize, target: Dendrite, weight: f64) -> Self {
        Self {
            source_id,
            target,
            weight,
        }
    }

    pub fn process_pre_syn_spikes(&self, num_spikes: usize, gate: &mut SynapticGate) {
        for _ in 0..num_spikes {
            gate.on_pre(self.weight);
        }
    }
}

/// Exponentially decaying gating variable `s` with `ds/dt = -s / tau_ext`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SynapticGate {
    pub s: f64,
}

impl SynapticGate {
    pub fn derivative(&self, syn_params: &ExtSynapseParams) -> f64 {
        -self.s / syn_params.tau_ext
    }

    pub fn on_pre(&mut self, weight: f64) {
        self.s += weight;
    }

    /// Current density drawn by a compartment at potential `v`.
    pub fn current(&self, v: f64, syn_params: &ExtSynapseParams) -> f64 {
        syn_params.g_ext * (v - syn_params.e_ext) * self.s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    const SYN_PARAMS: ExtSynapseParams = ExtSynapseParams {
        e_ext: 0.0,
        g_ext: 1.0,
        tau_ext: 0.005,
    };

    #[test]
    fn on_pre_adds_weight() {
        let mut gate = SynapticGate::default();
        let sut = ExtSynapse::new(0, Dendrite::Dend1, 0.7);

        sut.process_pre_syn_spikes(1, &mut gate);
        assert_approx_eq!(f64, gate.s, 0.7);
    }

    #[test]
    fn multiple_spikes_accumulate() {
        let mut gate = SynapticGate::default();
        let sut = ExtSynapse::new(0, Dendrite::Dend1, 0.5);

        sut.process_pre_syn_spikes(3, &mut gate);
        assert_approx_eq!(f64, gate.s, 1.5);
    }

    #[test]
    fn zero_weight_has_no_effect() {
        let mut gate = SynapticGate::default();
        let sut = ExtSynapse::new(1, Dendrite::Dend2, 0.0);

        sut.process_pre_syn_spikes(2, &mut gate);
        assert_eq!(gate.s, 0.0);
        assert_eq!(gate.current(-0.08, &SYN_PARAMS), 0.0);
    }

    #[test]
    fn negative_weight() {
        let mut gate = SynapticGate { s: 1.0 };
        let sut = ExtSynapse::new(0, Dendrite::Dend1, -0.25);

        sut.process_pre_syn_spikes(1, &mut gate);
        assert_approx_eq!(f64, gate.s, 0.75);
    }

    #[test]
    fn decay_derivative() {
        let gate = SynapticGate { s: 2.0 };
        assert_approx_eq!(f64, gate.derivative(&SYN_PARAMS), -400.0);
    }

    #[test]
    fn current_is_driving_force_times_gate() {
        let gate = SynapticGate { s: 0.5 };
        let params = ExtSynapseParams {
            e_ext: 0.01,
            g_ext: 2.0,
            tau_ext: 0.005,
        };

        assert_approx_eq!(f64, gate.current(-0.07, &params), 2.0 * (-0.08) * 0.5);
        assert_approx_eq!(f64, gate.current(0.01, &params), 0.0);
    }
}
