pub mod params;
pub mod recorder;
pub mod simulation;
pub mod state_snapshot;
pub mod types;

mod neuron;
mod spike_source;
mod synapse;
mod util;
