use crate::{
    params::{ExtSynapseParams, NeuronParams},
    synapse::SynapticGate,
    types::{Compartment, Dendrite, NUM_DENDRITES},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefractoryState {
    Active,
    Refractory { until_step: usize },
}

/// Soma coupled to two passive dendrites, each dendrite carrying one
/// conductance-based external synapse.
#[derive(Debug, Clone)]
pub struct Neuron {
    v_soma: f64,
    v_dend: [f64; NUM_DENDRITES],
    gates: [SynapticGate; NUM_DENDRITES],
    refractory_state: RefractoryState,
}

impl Neuron {
    pub fn new(neuron_params: &NeuronParams) -> Self {
        Self {
            v_soma: neuron_params.e_l,
            v_dend: [neuron_params.e_l; NUM_DENDRITES],
            gates: [SynapticGate::default(); NUM_DENDRITES],
            refractory_state: RefractoryState::Active,
        }
    }

    pub fn get_voltage(&self, compartment: Compartment) -> f64 {
        match compartment {
            Compartment::Soma => self.v_soma,
            Compartment::Dend1 => self.v_dend[Dendrite::Dend1.index()],
            Compartment::Dend2 => self.v_dend[Dendrite::Dend2.index()],
        }
    }

    pub fn get_gate(&self, dendrite: Dendrite) -> &SynapticGate {
        &self.gates[dendrite.index()]
    }

    pub fn get_gate_mut(&mut self, dendrite: Dendrite) -> &mut SynapticGate {
        &mut self.gates[dendrite.index()]
    }

    pub fn is_refractory(&self, step: usize) -> bool {
        match self.refractory_state {
            RefractoryState::Active => false,
            RefractoryState::Refractory { until_step } => step < until_step,
        }
    }

    /// Explicit Euler step from `step` to `step + 1`. All derivatives are taken
    /// from the pre-step state.
    pub fn integrate(
        &mut self,
        step: usize,
        dt: f64,
        neuron_params: &NeuronParams,
        syn_params: &ExtSynapseParams,
    ) {
        if !self.is_refractory(step) {
            self.refractory_state = RefractoryState::Active;
        }

        let soma_clamped = self.is_refractory(step);
        let NeuronParams {
            e_l, c_m, g_l, g_c, ..
        } = *neuron_params;

        let v_soma = self.v_soma;

        let dv_soma = if soma_clamped {
            0.0
        } else {
            let coupling: f64 = self
                .v_dend
                .iter()
                .map(|v_dend| g_c * (v_soma - v_dend))
                .sum();
            (-g_l * (v_soma - e_l) - coupling) / c_m * dt
        };

        let mut dv_dend = [0.0; NUM_DENDRITES];
        let mut ds = [0.0; NUM_DENDRITES];

        for i in 0..NUM_DENDRITES {
            let v = self.v_dend[i];
            let i_ext = self.gates[i].current(v, syn_params);
            dv_dend[i] = (-g_l * (v - e_l) - g_c * (v - v_soma) - i_ext) / c_m * dt;
            ds[i] = self.gates[i].derivative(syn_params) * dt;
        }

        self.v_soma += dv_soma;

        for i in 0..NUM_DENDRITES {
            self.v_dend[i] += dv_dend[i];
            self.gates[i].s += ds[i];
        }
    }

    /// Threshold check at `step`. On crossing, the soma is reset and clamped
    /// for `refractory_steps` steps.
    pub fn check_spike(
        &mut self,
        step: usize,
        refractory_steps: usize,
        neuron_params: &NeuronParams,
    ) -> bool {
        if self.is_refractory(step) || self.v_soma <= neuron_params.v_thr {
            return false;
        }

        self.v_soma = neuron_params.v_reset;
        self.refractory_state = if refractory_steps > 0 {
            RefractoryState::Refractory {
                until_step: step.saturating_add(refractory_steps),
            }
        } else {
            RefractoryState::Active
        };

        true
    }
}
