use itertools::Itertools;
use serde::{Deserialize, Serialize};
use simple_error::SimpleError;

use crate::{types::Dendrite, util};

/// All quantities are plain SI values: volts, seconds, farads per square
/// metre, siemens per square metre.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationParams {
    pub sim_time: f64,
    pub dt: f64,
    pub neuron_params: NeuronParams,
    pub ext_synapse_params: ExtSynapseParams,
    pub inputs: Vec<InputParams>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeuronParams {
    pub e_l: f64,
    pub v_thr: f64,
    pub v_reset: f64,
    pub c_m: f64,
    pub g_l: f64,
    pub g_c: f64,
    pub tau_refractory: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtSynapseParams {
    pub e_ext: f64,
    pub g_ext: f64,
    pub tau_ext: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputParams {
    pub spike_times: Vec<f64>,
    pub target: Dendrite,
    pub weight: f64,
}

impl InputParams {
    pub fn single_spike(t: f64, target: Dendrite, weight: f64) -> Self {
        Self {
            spike_times: vec![t],
            target,
            weight,
        }
    }
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            sim_time: 0.1,
            dt: 1e-4,
            neuron_params: NeuronParams::default(),
            ext_synapse_params: ExtSynapseParams::default(),
            inputs: vec![
                InputParams::single_spike(0.05, Dendrite::Dend1, 1.0),
                InputParams::single_spike(0.05, Dendrite::Dend2, 0.0),
            ],
        }
    }
}

impl Default for NeuronParams {
    fn default() -> Self {
        Self {
            e_l: -0.080,
            v_thr: -0.045,
            v_reset: -0.080,
            c_m: 0.01,
            g_l: 1.0,
            g_c: 2.0,
            tau_refractory: 0.002,
        }
    }
}

impl Default for ExtSynapseParams {
    fn default() -> Self {
        Self {
            e_ext: 0.0,
            g_ext: 1.0,
            tau_ext: 0.005,
        }
    }
}

pub fn validate_simulation_params(params: &SimulationParams) -> Result<(), SimpleError> {
    if !(params.dt > 0.0) || !params.dt.is_finite() {
        return Err(SimpleError::new("dt must be strictly positive"));
    }

    if !(params.sim_time > 0.0) || !params.sim_time.is_finite() {
        return Err(SimpleError::new("sim_time must be strictly positive"));
    }

    if !(params.sim_time / params.dt < util::MAX_NUM_STEPS as f64) {
        return Err(SimpleError::new(format!(
            "sim_time must not span more than {} steps",
            util::MAX_NUM_STEPS
        )));
    }

    if util::get_num_steps(params.sim_time, params.dt) == 0 {
        return Err(SimpleError::new("sim_time must span at least one step"));
    }

    validate_neuron_params(&params.neuron_params)?;

    if !(params.neuron_params.tau_refractory / params.dt < util::MAX_NUM_STEPS as f64) {
        return Err(SimpleError::new(format!(
            "tau_refractory must not span more than {} steps",
            util::MAX_NUM_STEPS
        )));
    }

    validate_ext_synapse_params(&params.ext_synapse_params)?;

    for (input_id, input_params) in params.inputs.iter().enumerate() {
        validate_input_params(input_id, input_params)?;
    }

    Ok(())
}

fn validate_neuron_params(neuron_params: &NeuronParams) -> Result<(), SimpleError> {
    let potentials = [
        neuron_params.e_l,
        neuron_params.v_thr,
        neuron_params.v_reset,
    ];

    if potentials.iter().any(|v| !v.is_finite()) {
        return Err(SimpleError::new("membrane potentials must be finite"));
    }

    if !(neuron_params.c_m > 0.0) {
        return Err(SimpleError::new("c_m must be strictly positive"));
    }

    if !(neuron_params.g_l >= 0.0) {
        return Err(SimpleError::new("g_l must not be negative"));
    }

    if !(neuron_params.g_c >= 0.0) {
        return Err(SimpleError::new("g_c must not be negative"));
    }

    if !(neuron_params.tau_refractory >= 0.0) {
        return Err(SimpleError::new("tau_refractory must not be negative"));
    }

    if neuron_params.v_reset >= neuron_params.v_thr {
        return Err(SimpleError::new("v_reset must be less than v_thr"));
    }

    Ok(())
}

fn validate_ext_synapse_params(syn_params: &ExtSynapseParams) -> Result<(), SimpleError> {
    if !syn_params.e_ext.is_finite() {
        return Err(SimpleError::new("e_ext must be finite"));
    }

    if !(syn_params.g_ext >= 0.0) {
        return Err(SimpleError::new("g_ext must not be negative"));
    }

    if !(syn_params.tau_ext > 0.0) {
        return Err(SimpleError::new("tau_ext must be strictly positive"));
    }

    Ok(())
}

fn validate_input_params(input_id: usize, input_params: &InputParams) -> Result<(), SimpleError> {
    if !input_params.weight.is_finite() {
        return Err(SimpleError::new(format!(
            "weight of input {} must be finite",
            input_id
        )));
    }

    if input_params
        .spike_times
        .iter()
        .any(|t| !t.is_finite() || *t < 0.0)
    {
        return Err(SimpleError::new(format!(
            "spike times of input {} must be finite and not negative",
            input_id
        )));
    }

    if !input_params
        .spike_times
        .iter()
        .tuple_windows()
        .all(|(a, b)| a <= b)
    {
        return Err(SimpleError::new(format!(
            "spike times of input {} must be non-decreasing",
            input_id
        )));
    }

    Ok(())
}
