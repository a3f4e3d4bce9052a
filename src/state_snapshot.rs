use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub t: f64,
    pub neuron_state: NeuronState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeuronState {
    pub v_soma: f64,
    pub v_dend1: f64,
    pub v_dend2: f64,
    pub s_ext1: f64,
    pub s_ext2: f64,
    pub refractory: bool,
}
